//! Numeric and categorical summary statistics.
//!
//! The exploratory panel's tables: per-column descriptive statistics
//! with an IQR outlier count for numeric columns, and unique/top-value
//! counts for categorical ones. Unlike the KPI sums, profiling skips
//! uncoercible values instead of zero-filling them.

use crate::domain::dataset::{coerce_number, is_missing, Row};
use crate::domain::schema::ColumnSchema;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

const TOP_VALUE_COUNT: usize = 5;
const IQR_FENCE: f64 = 1.5;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NumericSummary {
    pub mean: f64,
    pub median: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
    pub q25: f64,
    pub q75: f64,
    pub outliers: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoricalSummary {
    pub unique_values: usize,
    pub top_values: Vec<(String, usize)>,
    pub missing: usize,
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Linear-interpolation quantile over a sorted slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    if sorted.len() == 1 {
        return sorted[0];
    }
    let pos = q * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    if lower == upper {
        sorted[lower]
    } else {
        let weight = pos - lower as f64;
        sorted[lower] * (1.0 - weight) + sorted[upper] * weight
    }
}

fn summarize_numbers(mut numbers: Vec<f64>) -> NumericSummary {
    if numbers.is_empty() {
        return NumericSummary::default();
    }
    numbers.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = numbers.len() as f64;
    let mean = numbers.iter().sum::<f64>() / n;
    let variance = if numbers.len() > 1 {
        numbers.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0)
    } else {
        0.0
    };

    let q1 = quantile(&numbers, 0.25);
    let q3 = quantile(&numbers, 0.75);
    let iqr = q3 - q1;
    let lower_fence = q1 - IQR_FENCE * iqr;
    let upper_fence = q3 + IQR_FENCE * iqr;
    let outliers = numbers
        .iter()
        .filter(|v| **v < lower_fence || **v > upper_fence)
        .count();

    NumericSummary {
        mean: round2(mean),
        median: round2(quantile(&numbers, 0.5)),
        std: round2(variance.sqrt()),
        min: numbers[0],
        max: numbers[numbers.len() - 1],
        q25: q1,
        q75: q3,
        outliers,
    }
}

/// Descriptive statistics for every numeric column.
pub fn numeric_summary(rows: &[Row], schema: &ColumnSchema) -> BTreeMap<String, NumericSummary> {
    schema
        .numeric_columns
        .iter()
        .map(|col| {
            let numbers: Vec<f64> = rows
                .iter()
                .filter_map(|row| row.get(col).and_then(coerce_number))
                .collect();
            (col.clone(), summarize_numbers(numbers))
        })
        .collect()
}

/// Unique/top-value/missing counts for every categorical column.
pub fn categorical_summary(
    rows: &[Row],
    schema: &ColumnSchema,
) -> BTreeMap<String, CategoricalSummary> {
    schema
        .categorical_columns
        .iter()
        .map(|col| {
            let mut counts: HashMap<String, usize> = HashMap::new();
            let mut missing = 0usize;

            for row in rows {
                match row.get(col) {
                    None => missing += 1,
                    Some(value) if is_missing(value) => missing += 1,
                    Some(serde_json::Value::String(s)) => {
                        *counts.entry(s.clone()).or_insert(0) += 1;
                    }
                    Some(other) => {
                        *counts.entry(other.to_string()).or_insert(0) += 1;
                    }
                }
            }

            let unique_values = counts.len();
            let mut top: Vec<(String, usize)> = counts.into_iter().collect();
            top.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
            top.truncate(TOP_VALUE_COUNT);

            (
                col.clone(),
                CategoricalSummary {
                    unique_values,
                    top_values: top,
                    missing,
                },
            )
        })
        .collect()
}
