//! Monthly trend and weekday breakdown.
//!
//! Both views bucket rows by their parsed calendar date and accumulate
//! the value column. Rows whose date does not parse are excluded from
//! the aggregate entirely, not zero-filled. The output always
//! carries all 12 months / all 7 weekdays in canonical order; buckets
//! with no data report 0.

use crate::application::use_cases::role_resolver::{find_column, VALUE_ALIASES};
use crate::application::use_cases::view_defaults::{
    default_trends, default_weekday, MONTH_LABELS, WEEKDAY_LABELS,
};
use crate::domain::dataset::{coerce_number, Row};
use crate::domain::roles::RoleBindings;
use crate::domain::schema::ColumnSchema;
use crate::domain::views::{MonthlySeries, WeekdaySeries};
use chrono::{Datelike, NaiveDate, NaiveDateTime};

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d-%m-%Y",
    "%b %d %Y",
    "%b %d, %Y",
    "%d %b %Y",
];

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Parse a cell as a calendar date, trying the formats the uploads
/// actually contain. Returns None when nothing fits.
pub fn parse_date(value: &serde_json::Value) -> Option<NaiveDate> {
    let text = match value {
        serde_json::Value::String(s) => s.trim(),
        _ => return None,
    };
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(text) {
        return Some(dt.date_naive());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(dt.date());
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, fmt) {
            return Some(date);
        }
    }
    None
}

fn accumulate<const N: usize>(
    rows: &[Row],
    date_col: &str,
    value_col: &str,
    bucket: impl Fn(NaiveDate) -> usize,
) -> [f64; N] {
    let mut totals = [0.0; N];
    for row in rows {
        let date = match row.get(date_col).and_then(parse_date) {
            Some(d) => d,
            None => continue,
        };
        let value = row.get(value_col).and_then(coerce_number).unwrap_or(0.0);
        totals[bucket(date)] += value;
    }
    totals
}

pub fn aggregate_monthly(
    rows: &[Row],
    bindings: &RoleBindings,
    schema: &ColumnSchema,
) -> MonthlySeries {
    let date_col = match &bindings.date {
        Some(col) => col,
        None => return default_trends(),
    };
    let value_col = match find_column(&schema.numeric_columns, VALUE_ALIASES) {
        Some(col) => col,
        None => return default_trends(),
    };

    let totals: [f64; 12] =
        accumulate(rows, date_col, &value_col, |d| d.month0() as usize);

    MonthlySeries {
        labels: MONTH_LABELS.iter().map(|s| s.to_string()).collect(),
        data: totals.to_vec(),
    }
}

pub fn aggregate_weekday(
    rows: &[Row],
    bindings: &RoleBindings,
    schema: &ColumnSchema,
) -> WeekdaySeries {
    let date_col = match &bindings.date {
        Some(col) => col,
        None => return default_weekday(),
    };
    let value_col = match find_column(&schema.numeric_columns, VALUE_ALIASES) {
        Some(col) => col,
        None => return default_weekday(),
    };

    let totals: [f64; 7] = accumulate(rows, date_col, &value_col, |d| {
        d.weekday().num_days_from_sunday() as usize
    });

    WeekdaySeries {
        labels: WEEKDAY_LABELS.iter().map(|s| s.to_string()).collect(),
        data: totals.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sale_row(date: serde_json::Value, amount: serde_json::Value) -> Row {
        let mut row = Row::new();
        row.insert("OrderDate".to_string(), date);
        row.insert("Amount".to_string(), amount);
        row
    }

    fn setup() -> (RoleBindings, ColumnSchema) {
        let bindings = RoleBindings {
            date: Some("OrderDate".to_string()),
            ..Default::default()
        };
        let schema = ColumnSchema {
            numeric_columns: vec!["Amount".to_string()],
            categorical_columns: vec!["OrderDate".to_string()],
        };
        (bindings, schema)
    }

    #[test]
    fn test_parse_date_formats() {
        assert!(parse_date(&json!("2024-03-15")).is_some());
        assert!(parse_date(&json!("2024/03/15")).is_some());
        assert!(parse_date(&json!("03/15/2024")).is_some());
        assert!(parse_date(&json!("15-03-2024")).is_some());
        assert!(parse_date(&json!("Mar 15 2024")).is_some());
        assert!(parse_date(&json!("Mar 15, 2024")).is_some());
        assert!(parse_date(&json!("2024-03-15T08:30:00")).is_some());
        assert!(parse_date(&json!("2024-03-15T08:30:00Z")).is_some());
        assert!(parse_date(&json!("not a date")).is_none());
        assert!(parse_date(&json!(20240315)).is_none());
    }

    #[test]
    fn test_monthly_always_twelve_buckets() {
        let rows = vec![
            sale_row(json!("2024-01-10"), json!(100)),
            sale_row(json!("2024-01-20"), json!(50)),
            sale_row(json!("2024-06-01"), json!(25)),
        ];
        let (bindings, schema) = setup();

        let series = aggregate_monthly(&rows, &bindings, &schema);

        assert_eq!(series.labels.len(), 12);
        assert_eq!(series.labels[0], "Jan");
        assert_eq!(series.labels[11], "Dec");
        assert_eq!(series.data[0], 150.0);
        assert_eq!(series.data[5], 25.0);
        assert_eq!(series.data[11], 0.0);
    }

    #[test]
    fn test_unparsable_dates_are_excluded() {
        let rows = vec![
            sale_row(json!("garbage"), json!(999)),
            sale_row(json!("2024-02-01"), json!(10)),
        ];
        let (bindings, schema) = setup();

        let series = aggregate_monthly(&rows, &bindings, &schema);

        assert_eq!(series.data.iter().sum::<f64>(), 10.0);
    }

    #[test]
    fn test_weekday_buckets_from_sunday() {
        // 2024-03-10 is a Sunday, 2024-03-11 a Monday.
        let rows = vec![
            sale_row(json!("2024-03-10"), json!(5)),
            sale_row(json!("2024-03-11"), json!(7)),
        ];
        let (bindings, schema) = setup();

        let series = aggregate_weekday(&rows, &bindings, &schema);

        assert_eq!(series.labels, vec!["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]);
        assert_eq!(series.data[0], 5.0);
        assert_eq!(series.data[1], 7.0);
    }

    #[test]
    fn test_missing_date_binding_falls_back() {
        let (_, schema) = setup();
        let series = aggregate_monthly(&[], &RoleBindings::default(), &schema);
        assert_eq!(series, default_trends());

        let weekday = aggregate_weekday(&[], &RoleBindings::default(), &schema);
        assert_eq!(weekday, default_weekday());
    }

    #[test]
    fn test_missing_value_column_falls_back() {
        let (bindings, _) = setup();
        let empty_schema = ColumnSchema::default();

        assert_eq!(
            aggregate_monthly(&[], &bindings, &empty_schema),
            default_trends()
        );
    }
}
