//! Dashboard assembly facade.
//!
//! Runs column classification once, role resolution once, then the
//! seven view aggregators independently. Each aggregator sees only the
//! rows and its own bindings; a role that stayed unbound degrades that
//! view to its canned default and nothing else. No input shape can make
//! assembly fail.

use crate::application::use_cases::age_histogram::aggregate_ages;
use crate::application::use_cases::category_aggregator::aggregate_categories;
use crate::application::use_cases::column_classifier::classify_columns;
use crate::application::use_cases::customer_ranking::aggregate_customers;
use crate::application::use_cases::demographic_aggregator::aggregate_gender;
use crate::application::use_cases::kpi_aggregator::aggregate_kpis;
use crate::application::use_cases::role_resolver::resolve_roles;
use crate::application::use_cases::temporal_aggregator::{aggregate_monthly, aggregate_weekday};
use crate::application::use_cases::view_defaults::default_dashboard;
use crate::domain::dataset::Row;
use crate::domain::views::DashboardData;
use crate::shared::number_format::format_compact;
use tracing::debug;

/// Build the full dashboard payload from an uploaded dataset.
///
/// An empty dataset short-circuits to the complete default bundle
/// without running classification.
pub fn assemble_dashboard(rows: &[Row]) -> DashboardData {
    if rows.is_empty() {
        debug!("empty dataset, serving default bundle");
        return default_dashboard();
    }

    let schema = classify_columns(rows);
    let bindings = resolve_roles(&schema);

    let dashboard = DashboardData {
        kpi: aggregate_kpis(rows, &bindings),
        gender: aggregate_gender(rows, &bindings),
        age: aggregate_ages(rows, &bindings),
        customers: aggregate_customers(rows, &bindings, &schema),
        trends: aggregate_monthly(rows, &bindings, &schema),
        weekday: aggregate_weekday(rows, &bindings, &schema),
        categories: aggregate_categories(rows, &bindings, &schema),
    };

    debug!(
        rows = rows.len(),
        revenue = %format_compact(dashboard.kpi.revenue),
        profit = %format_compact(dashboard.kpi.profit),
        "dashboard assembled"
    );

    dashboard
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::view_defaults::{
        default_age, default_categories, default_customers, default_kpi, default_trends,
        default_weekday,
    };
    use serde_json::json;

    fn row(pairs: Vec<(&str, serde_json::Value)>) -> Row {
        pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }

    #[test]
    fn test_empty_dataset_serves_full_default_bundle() {
        assert_eq!(assemble_dashboard(&[]), default_dashboard());
    }

    // Only a gender column resolves: that one view is computed, every
    // other view keeps its default. Partial-failure isolation.
    #[test]
    fn test_one_resolved_role_degrades_nothing_else() {
        let rows = vec![
            row(vec![("Gender", json!("Male"))]),
            row(vec![("Gender", json!("F"))]),
        ];

        let dashboard = assemble_dashboard(&rows);

        assert!((dashboard.gender.male - 50.0).abs() < 1e-9);
        // Unbound revenue/cost fall back to the default sums; the
        // margin is then computed from those, not the canned 42.18.
        assert_eq!(dashboard.kpi.revenue, default_kpi().revenue);
        assert_eq!(dashboard.kpi.cogs, default_kpi().cogs);
        assert_eq!(dashboard.kpi.profit, default_kpi().profit);
        assert!((dashboard.kpi.profit_margin - 2_300_000.0 / 5_400_000.0 * 100.0).abs() < 1e-9);
        assert_eq!(dashboard.age, default_age());
        assert_eq!(dashboard.customers, default_customers());
        assert_eq!(dashboard.trends, default_trends());
        assert_eq!(dashboard.weekday, default_weekday());
        assert_eq!(dashboard.categories, default_categories());
    }

    #[test]
    fn test_fully_resolvable_dataset() {
        let rows = vec![
            row(vec![
                ("Customer Name", json!("Ada")),
                ("Gender", json!("F")),
                ("Age", json!("34 yrs")),
                ("Order Date", json!("2024-01-15")),
                ("Category", json!("Tea")),
                ("Revenue", json!(200_000)),
                ("Cost", json!(80_000)),
            ]),
            row(vec![
                ("Customer Name", json!("Grace")),
                ("Gender", json!("F")),
                ("Age", json!("52 yrs")),
                ("Order Date", json!("2024-02-20")),
                ("Category", json!("Coffee")),
                ("Revenue", json!(100_000)),
                ("Cost", json!(40_000)),
            ]),
        ];

        let dashboard = assemble_dashboard(&rows);

        assert_eq!(dashboard.kpi.revenue, 300_000.0);
        assert_eq!(dashboard.kpi.cogs, 120_000.0);
        assert_eq!(dashboard.kpi.profit, 180_000.0);
        assert_eq!(dashboard.gender.female, 100.0);
        assert_eq!(dashboard.age.data, vec![0.0, 0.0, 1.0, 0.0, 1.0]);
        assert_eq!(dashboard.customers.labels, vec!["Ada", "Grace"]);
        assert_eq!(dashboard.trends.data[0], 200_000.0);
        assert_eq!(dashboard.trends.data[1], 100_000.0);
        assert_eq!(dashboard.categories[0].name, "Tea");
    }

    #[test]
    fn test_deterministic_across_invocations() {
        let rows = vec![
            row(vec![
                ("name", json!("A")),
                ("sales", json!(10)),
                ("date", json!("2024-05-01")),
            ]),
            row(vec![
                ("name", json!("B")),
                ("sales", json!(20)),
                ("date", json!("2024-05-02")),
            ]),
        ];

        assert_eq!(assemble_dashboard(&rows), assemble_dashboard(&rows));
    }

    // Rows after the first can change shape freely; the schema came
    // from row 0 and missing cells contribute nothing.
    #[test]
    fn test_ragged_rows_never_fail() {
        let rows = vec![
            row(vec![("revenue", json!(100)), ("gender", json!("M"))]),
            row(vec![("unrelated", json!(true))]),
            row(vec![("revenue", json!(null))]),
        ];

        let dashboard = assemble_dashboard(&rows);

        assert_eq!(dashboard.kpi.revenue, 100.0);
        assert_eq!(dashboard.gender.male, 100.0);
    }
}
