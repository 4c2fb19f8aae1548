//! Gender split over the classified rows.
//!
//! Classification is a substring check on the lower-cased value. The
//! bare "m" test runs before the female checks, so any value containing
//! an "m" counts as male, including "female" spelled out. Kept
//! byte-for-byte with the shipped behavior pending a product decision.

use crate::application::use_cases::view_defaults::default_gender;
use crate::domain::dataset::Row;
use crate::domain::roles::RoleBindings;
use crate::domain::views::GenderSplit;

fn classify(value: &str) -> Option<bool> {
    let lower = value.to_lowercase();
    if lower.contains('m') || lower.contains("male") {
        return Some(true);
    }
    if lower.contains('f') || lower.contains("female") {
        return Some(false);
    }
    None
}

pub fn aggregate_gender(rows: &[Row], bindings: &RoleBindings) -> GenderSplit {
    let column = match &bindings.gender {
        Some(col) => col,
        None => return default_gender(),
    };

    let mut male = 0usize;
    let mut female = 0usize;

    for row in rows {
        let text = match row.get(column) {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => continue,
        };
        match classify(&text) {
            Some(true) => male += 1,
            Some(false) => female += 1,
            None => {}
        }
    }

    let total = male + female;
    if total == 0 {
        return default_gender();
    }

    GenderSplit {
        male: male as f64 / total as f64 * 100.0,
        female: female as f64 / total as f64 * 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn gender_rows(values: &[&str]) -> Vec<Row> {
        values
            .iter()
            .map(|v| {
                let mut row = Row::new();
                row.insert("Gender".to_string(), json!(v));
                row
            })
            .collect()
    }

    fn gender_bindings() -> RoleBindings {
        RoleBindings {
            gender: Some("Gender".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_clean_male_female_split() {
        let rows = gender_rows(&["Male", "Female", "Male", "Male"]);
        let split = aggregate_gender(&rows, &gender_bindings());

        assert!((split.male - 75.0).abs() < 1e-9);
        assert!((split.female - 25.0).abs() < 1e-9);
        assert!((split.male + split.female - 100.0).abs() < 1e-9);
    }

    // "Female" contains an "m", so the bare-"m" check claims it first.
    #[test]
    fn test_female_spelled_out_counts_as_male() {
        let rows = gender_rows(&["female"]);
        let split = aggregate_gender(&rows, &gender_bindings());

        assert_eq!(split.male, 100.0);
    }

    #[test]
    fn test_f_shorthand_counts_as_female() {
        let rows = gender_rows(&["F", "f", "M"]);
        let split = aggregate_gender(&rows, &gender_bindings());

        assert!((split.female - 66.66666666666667).abs() < 1e-6);
    }

    #[test]
    fn test_unrelated_m_word_counts_as_male() {
        let rows = gender_rows(&["human"]);
        let split = aggregate_gender(&rows, &gender_bindings());

        assert_eq!(split.male, 100.0);
    }

    #[test]
    fn test_nothing_classified_falls_back() {
        let rows = gender_rows(&["x", "??", ""]);
        let split = aggregate_gender(&rows, &gender_bindings());

        assert_eq!(split, default_gender());
    }

    #[test]
    fn test_unbound_falls_back() {
        let split = aggregate_gender(&[], &RoleBindings::default());
        assert_eq!(split, default_gender());
    }
}
