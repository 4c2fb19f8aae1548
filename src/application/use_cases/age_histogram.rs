//! Age-bucket histogram.
//!
//! Five fixed buckets; output order is always the bucket order, never
//! the input row order. Unparsable ages read as 0 and land in the
//! first bucket.

use crate::application::use_cases::view_defaults::{default_age, AGE_BUCKET_LABELS};
use crate::domain::dataset::{coerce_integer, Row};
use crate::domain::roles::RoleBindings;
use crate::domain::views::AgeHistogram;

fn bucket_index(age: i64) -> usize {
    if age <= 20 {
        0
    } else if age <= 30 {
        1
    } else if age <= 40 {
        2
    } else if age <= 50 {
        3
    } else {
        4
    }
}

pub fn aggregate_ages(rows: &[Row], bindings: &RoleBindings) -> AgeHistogram {
    let column = match &bindings.age {
        Some(col) => col,
        None => return default_age(),
    };

    let mut counts = [0u64; 5];
    for row in rows {
        let age = row.get(column).map(coerce_integer).unwrap_or(0);
        counts[bucket_index(age)] += 1;
    }

    AgeHistogram {
        labels: AGE_BUCKET_LABELS.iter().map(|s| s.to_string()).collect(),
        data: counts.iter().map(|c| *c as f64).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn age_rows(values: Vec<serde_json::Value>) -> Vec<Row> {
        values
            .into_iter()
            .map(|v| {
                let mut row = Row::new();
                row.insert("Age".to_string(), v);
                row
            })
            .collect()
    }

    fn age_bindings() -> RoleBindings {
        RoleBindings {
            age: Some("Age".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(bucket_index(20), 0);
        assert_eq!(bucket_index(21), 1);
        assert_eq!(bucket_index(30), 1);
        assert_eq!(bucket_index(31), 2);
        assert_eq!(bucket_index(50), 3);
        assert_eq!(bucket_index(51), 4);
    }

    #[test]
    fn test_counts_in_fixed_bucket_order() {
        let rows = age_rows(vec![json!("55"), json!(18), json!(25), json!(60)]);
        let hist = aggregate_ages(&rows, &age_bindings());

        assert_eq!(hist.labels, vec!["0-20", "21-30", "31-40", "41-50", "51+"]);
        assert_eq!(hist.data, vec![1.0, 1.0, 0.0, 0.0, 2.0]);
    }

    #[test]
    fn test_unparsable_age_lands_in_first_bucket() {
        let rows = age_rows(vec![json!("unknown"), json!(null)]);
        let hist = aggregate_ages(&rows, &age_bindings());

        assert_eq!(hist.data[0], 2.0);
    }

    #[test]
    fn test_unbound_falls_back() {
        let hist = aggregate_ages(&[], &RoleBindings::default());
        assert_eq!(hist, default_age());
    }
}
