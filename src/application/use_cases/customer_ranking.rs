//! Top-customer ranking.
//!
//! Groups rows by customer, sums the ranking value column, and keeps
//! the five largest groups. The summed values are divided by 100,000,
//! the display scaling the charts were built around, preserved verbatim.

use crate::application::use_cases::role_resolver::{find_column, RANKING_VALUE_ALIASES};
use crate::application::use_cases::view_defaults::default_customers;
use crate::domain::dataset::{coerce_label, coerce_number, Row};
use crate::domain::roles::RoleBindings;
use crate::domain::schema::ColumnSchema;
use crate::domain::views::CustomerRanking;

const TOP_CUSTOMER_COUNT: usize = 5;
const DISPLAY_SCALE: f64 = 100_000.0;

pub fn aggregate_customers(
    rows: &[Row],
    bindings: &RoleBindings,
    schema: &ColumnSchema,
) -> CustomerRanking {
    let customer_col = match &bindings.customer {
        Some(col) => col,
        None => return default_customers(),
    };
    let value_col = match find_column(&schema.numeric_columns, RANKING_VALUE_ALIASES) {
        Some(col) => col,
        None => return default_customers(),
    };

    // Group sums keyed by customer, first-encountered order kept so the
    // descending sort can stay stable on ties.
    let mut order: Vec<String> = Vec::new();
    let mut sums: std::collections::HashMap<String, f64> = std::collections::HashMap::new();

    for row in rows {
        let customer = match row.get(customer_col).and_then(coerce_label) {
            Some(name) => name,
            None => continue,
        };
        let value = row
            .get(&value_col)
            .and_then(coerce_number)
            .unwrap_or(0.0);

        if !sums.contains_key(&customer) {
            order.push(customer.clone());
        }
        *sums.entry(customer).or_insert(0.0) += value;
    }

    let mut groups: Vec<(String, f64)> = order
        .into_iter()
        .map(|name| {
            let sum = sums[&name];
            (name, sum)
        })
        .collect();
    groups.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    groups.truncate(TOP_CUSTOMER_COUNT);

    CustomerRanking {
        labels: groups.iter().map(|(name, _)| name.clone()).collect(),
        data: groups
            .iter()
            .map(|(_, sum)| sum / DISPLAY_SCALE)
            .collect(),
    }
}
