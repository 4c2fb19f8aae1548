// ============================================================
// COLUMN SCHEMA
// ============================================================
// Duck-typed column discovery result, computed once per dataset
// and threaded through the aggregators.

use serde::{Deserialize, Serialize};

/// Columns split by how their first-row value reads.
///
/// Derived from the first row only; columns that appear later in the
/// dataset are invisible to the engine. Known limitation, kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnSchema {
    /// Columns whose first-row value coerces to a finite number,
    /// in first-row key order.
    pub numeric_columns: Vec<String>,

    /// Everything else, in first-row key order.
    pub categorical_columns: Vec<String>,
}

impl ColumnSchema {
    pub fn is_empty(&self) -> bool {
        self.numeric_columns.is_empty() && self.categorical_columns.is_empty()
    }

    pub fn column_count(&self) -> usize {
        self.numeric_columns.len() + self.categorical_columns.len()
    }
}
