// ============================================================
// VIEW SHAPES
// ============================================================
// Fixed-shape output structures consumed by the chart layer.
// Field names serialize in camelCase because that is what the
// rendering side reads.

use serde::{Deserialize, Serialize};

/// Headline figures for the KPI cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiSummary {
    pub cogs: f64,
    pub revenue: f64,
    pub profit: f64,
    pub profit_margin: f64,
}

/// Male/female share in percent of classified rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenderSplit {
    pub male: f64,
    pub female: f64,
}

/// Age histogram over the five fixed buckets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeHistogram {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

/// Top customers by summed value, already display-scaled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRanking {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

/// A full-year monthly series, Jan..Dec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySeries {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

/// A full-week series, Sun..Sat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekdaySeries {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

/// One slice of the category breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySlice {
    pub name: String,
    pub value: f64,
}

/// The complete dashboard payload: exactly seven named views.
///
/// Views are independent; one view falling back to its default never
/// affects another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub kpi: KpiSummary,
    pub gender: GenderSplit,
    pub age: AgeHistogram,
    pub customers: CustomerRanking,
    pub trends: MonthlySeries,
    pub weekday: WeekdaySeries,
    pub categories: Vec<CategorySlice>,
}
