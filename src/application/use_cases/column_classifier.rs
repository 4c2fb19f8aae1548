//! Duck-typed column discovery.
//!
//! Splits column names into numeric vs. categorical by looking at the
//! first row only. Columns that only appear in later rows never enter
//! the schema; the rest of the engine inherits that blind spot, so it
//! lives in exactly one place.

use crate::domain::dataset::{coerce_number, Row};
use crate::domain::schema::ColumnSchema;

/// Classify the dataset's columns from its first row.
///
/// An empty dataset yields an empty schema; the assembler treats that
/// as "no data" and short-circuits to the default bundle.
pub fn classify_columns(rows: &[Row]) -> ColumnSchema {
    let first = match rows.first() {
        Some(row) => row,
        None => return ColumnSchema::default(),
    };

    let mut schema = ColumnSchema::default();
    for (key, value) in first {
        if coerce_number(value).is_some() {
            schema.numeric_columns.push(key.clone());
        } else {
            schema.categorical_columns.push(key.clone());
        }
    }
    schema
}
