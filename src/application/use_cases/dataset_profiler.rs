//! Dataset profiling.
//!
//! Produces the profiling panel's report: a headline overview, a
//! per-column profile, and a quality score. Only columns visible to
//! the schema (first row) are profiled. Very large datasets are
//! sampled evenly before profiling.

use crate::domain::dataset::{coerce_number, is_missing, Row};
use crate::domain::profile::{
    CardinalityLevel, ColumnKind, ColumnProfile, DatasetOverview, ProfilingReport, QualityLabel,
    QualityScore,
};
use crate::domain::schema::ColumnSchema;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

const LOW_CARDINALITY_RATIO: f64 = 0.05;
const MEDIUM_CARDINALITY_RATIO: f64 = 0.3;

const MISSING_PENALTY: f64 = 40.0;
const DUPLICATE_PENALTY: f64 = 30.0;

const TOP_VALUE_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfilingConfig {
    /// Cap on rows examined by the profiling report.
    pub max_sample_rows: usize,
}

impl Default for ProfilingConfig {
    fn default() -> Self {
        Self {
            max_sample_rows: 10_000,
        }
    }
}

/// Dataset profiler over classified rows.
pub struct DatasetProfiler {
    config: ProfilingConfig,
}

impl DatasetProfiler {
    pub fn new(config: ProfilingConfig) -> Self {
        Self { config }
    }

    /// The full report: overview, per-column profiles, quality.
    pub fn profile(&self, rows: &[Row], schema: &ColumnSchema) -> ProfilingReport {
        let sample = self.sample_rows(rows);

        let mut columns: BTreeMap<String, ColumnProfile> = BTreeMap::new();
        for col in &schema.numeric_columns {
            columns.insert(col.clone(), profile_column(&sample, col, ColumnKind::Numeric));
        }
        for col in &schema.categorical_columns {
            columns.insert(
                col.clone(),
                profile_column(&sample, col, ColumnKind::Categorical),
            );
        }

        ProfilingReport {
            overview: overview(&sample, rows.len(), schema),
            columns,
            quality: quality_score(&sample, schema),
        }
    }

    /// Sample evenly when the dataset exceeds the cap.
    fn sample_rows<'a>(&self, rows: &'a [Row]) -> Vec<&'a Row> {
        if rows.len() <= self.config.max_sample_rows {
            return rows.iter().collect();
        }

        let step = rows.len() / self.config.max_sample_rows;
        rows.iter()
            .step_by(step.max(1))
            .take(self.config.max_sample_rows)
            .collect()
    }
}

impl Default for DatasetProfiler {
    fn default() -> Self {
        Self::new(ProfilingConfig::default())
    }
}

/// Convenience entry point with default profiling settings.
pub fn profile_dataset(rows: &[Row], schema: &ColumnSchema) -> ProfilingReport {
    DatasetProfiler::default().profile(rows, schema)
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Cell text used for uniqueness and top-value counting.
fn cell_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn overview(sample: &[&Row], total_rows: usize, schema: &ColumnSchema) -> DatasetOverview {
    DatasetOverview {
        rows: total_rows,
        columns: schema.column_count(),
        numeric_cols: schema.numeric_columns.len(),
        categorical_cols: schema.categorical_columns.len(),
        duplicate_rows: count_duplicates(sample, schema),
    }
}

/// Rows identical across all visible columns, beyond the first
/// occurrence of each.
fn count_duplicates(rows: &[&Row], schema: &ColumnSchema) -> usize {
    let columns: Vec<&String> = schema
        .numeric_columns
        .iter()
        .chain(schema.categorical_columns.iter())
        .collect();

    let mut seen: HashSet<String> = HashSet::new();
    let mut duplicates = 0usize;
    for row in rows {
        let key = columns
            .iter()
            .map(|col| row.get(*col).map(cell_text).unwrap_or_default())
            .collect::<Vec<_>>()
            .join("\u{1f}");
        if !seen.insert(key) {
            duplicates += 1;
        }
    }
    duplicates
}

fn profile_column(rows: &[&Row], column: &str, kind: ColumnKind) -> ColumnProfile {
    let total = rows.len();
    let mut missing = 0usize;
    let mut uniques: HashSet<String> = HashSet::new();
    let mut value_counts: HashMap<String, usize> = HashMap::new();
    let mut numbers: Vec<f64> = Vec::new();

    for row in rows {
        match row.get(column) {
            None => missing += 1,
            Some(value) if is_missing(value) => missing += 1,
            Some(value) => {
                let text = cell_text(value);
                uniques.insert(text.clone());
                *value_counts.entry(text).or_insert(0) += 1;
                if kind == ColumnKind::Numeric {
                    if let Some(n) = coerce_number(value) {
                        numbers.push(n);
                    }
                }
            }
        }
    }

    let missing_ratio_pct = if total > 0 {
        round2(missing as f64 / total as f64 * 100.0)
    } else {
        0.0
    };

    let mut profile = ColumnProfile {
        kind,
        missing_count: missing,
        missing_ratio_pct,
        unique_values: uniques.len(),
        min: None,
        max: None,
        mean: None,
        top_values: None,
        cardinality: None,
    };

    match kind {
        ColumnKind::Numeric => {
            if !numbers.is_empty() {
                let sum: f64 = numbers.iter().sum();
                profile.min = Some(numbers.iter().cloned().fold(f64::INFINITY, f64::min));
                profile.max = Some(numbers.iter().cloned().fold(f64::NEG_INFINITY, f64::max));
                profile.mean = Some(round2(sum / numbers.len() as f64));
            }
        }
        ColumnKind::Categorical => {
            let mut counts: Vec<(String, usize)> = value_counts.into_iter().collect();
            counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
            counts.truncate(TOP_VALUE_COUNT);
            profile.top_values = Some(counts);
            profile.cardinality = Some(cardinality_level(uniques.len(), total));
        }
    }

    profile
}

fn cardinality_level(unique: usize, total: usize) -> CardinalityLevel {
    if total == 0 {
        return CardinalityLevel::Low;
    }
    let ratio = unique as f64 / total as f64;
    if ratio < LOW_CARDINALITY_RATIO {
        CardinalityLevel::Low
    } else if ratio < MEDIUM_CARDINALITY_RATIO {
        CardinalityLevel::Medium
    } else {
        CardinalityLevel::High
    }
}

fn quality_score(rows: &[&Row], schema: &ColumnSchema) -> QualityScore {
    let total_cells = rows.len() * schema.column_count();
    if total_cells == 0 {
        return QualityScore {
            score: 100.0,
            status: QualityLabel::Excellent,
        };
    }

    let columns: Vec<&String> = schema
        .numeric_columns
        .iter()
        .chain(schema.categorical_columns.iter())
        .collect();
    let missing_cells: usize = rows
        .iter()
        .map(|row| {
            columns
                .iter()
                .filter(|col| row.get(**col).map(is_missing).unwrap_or(true))
                .count()
        })
        .sum();

    let missing_ratio = missing_cells as f64 / total_cells as f64;
    let duplicate_ratio = count_duplicates(rows, schema) as f64 / rows.len() as f64;

    let score = (100.0 - missing_ratio * MISSING_PENALTY - duplicate_ratio * DUPLICATE_PENALTY)
        .max(0.0);
    let score = round2(score);

    QualityScore {
        score,
        status: quality_label(score),
    }
}

fn quality_label(score: f64) -> QualityLabel {
    if score > 85.0 {
        QualityLabel::Excellent
    } else if score > 70.0 {
        QualityLabel::Good
    } else if score > 50.0 {
        QualityLabel::Fair
    } else {
        QualityLabel::Poor
    }
}
