// ============================================================
// PROFILING REPORT TYPES
// ============================================================
// Shapes for the dataset profiling panel: overview, per-column
// detail, and the quality score.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How a column is treated by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    Numeric,
    Categorical,
}

/// Headline counts for the whole dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetOverview {
    pub rows: usize,
    pub columns: usize,
    pub numeric_cols: usize,
    pub categorical_cols: usize,
    pub duplicate_rows: usize,
}

/// How spread out a categorical column's values are relative to the
/// row count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardinalityLevel {
    #[serde(rename = "LOW")]
    Low,
    #[serde(rename = "MEDIUM")]
    Medium,
    #[serde(rename = "HIGH")]
    High,
}

/// Per-column profile entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnProfile {
    pub kind: ColumnKind,
    pub missing_count: usize,
    pub missing_ratio_pct: f64,
    pub unique_values: usize,

    // Numeric columns only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean: Option<f64>,

    // Categorical columns only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_values: Option<Vec<(String, usize)>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cardinality: Option<CardinalityLevel>,
}

/// Quality verdict for the uploaded dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityScore {
    pub score: f64,
    pub status: QualityLabel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityLabel {
    #[serde(rename = "EXCELLENT")]
    Excellent,
    #[serde(rename = "GOOD")]
    Good,
    #[serde(rename = "FAIR")]
    Fair,
    #[serde(rename = "POOR")]
    Poor,
}

/// The full profiling report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfilingReport {
    pub overview: DatasetOverview,
    pub columns: BTreeMap<String, ColumnProfile>,
    pub quality: QualityScore,
}
