//! Categorical breakdown.
//!
//! Groups rows by the category column, sums the value column, and
//! keeps the eight largest slices, name casing preserved.

use crate::application::use_cases::role_resolver::{find_column, VALUE_ALIASES};
use crate::application::use_cases::view_defaults::default_categories;
use crate::domain::dataset::{coerce_label, coerce_number, Row};
use crate::domain::roles::RoleBindings;
use crate::domain::schema::ColumnSchema;
use crate::domain::views::CategorySlice;
use std::collections::HashMap;

const TOP_CATEGORY_COUNT: usize = 8;

pub fn aggregate_categories(
    rows: &[Row],
    bindings: &RoleBindings,
    schema: &ColumnSchema,
) -> Vec<CategorySlice> {
    let category_col = match &bindings.category {
        Some(col) => col,
        None => return default_categories(),
    };
    let value_col = match find_column(&schema.numeric_columns, VALUE_ALIASES) {
        Some(col) => col,
        None => return default_categories(),
    };

    let mut order: Vec<String> = Vec::new();
    let mut sums: HashMap<String, f64> = HashMap::new();

    for row in rows {
        let category = match row.get(category_col).and_then(coerce_label) {
            Some(name) => name,
            None => continue,
        };
        let value = row.get(&value_col).and_then(coerce_number).unwrap_or(0.0);

        if !sums.contains_key(&category) {
            order.push(category.clone());
        }
        *sums.entry(category).or_insert(0.0) += value;
    }

    let mut slices: Vec<CategorySlice> = order
        .into_iter()
        .map(|name| {
            let value = sums[&name];
            CategorySlice { name, value }
        })
        .collect();
    slices.sort_by(|a, b| {
        b.value
            .partial_cmp(&a.value)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    slices.truncate(TOP_CATEGORY_COUNT);
    slices
}
