//! JSON dataset handoff.
//!
//! The upload layer hands the engine a JSON body. An array of objects
//! becomes the dataset; null or any non-array body is an empty dataset
//! (the engine then serves its default bundle). Only malformed JSON is
//! an error.

use crate::domain::dataset::Row;
use crate::domain::error::{EngineError, Result};
use serde_json::Value;
use tracing::warn;

pub fn dataset_from_json(text: &str) -> Result<Vec<Row>> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| EngineError::ParseError(format!("Invalid JSON dataset: {}", e)))?;

    Ok(dataset_from_value(value))
}

/// Already-parsed variant for callers holding a `serde_json::Value`.
pub fn dataset_from_value(value: Value) -> Vec<Row> {
    let items = match value {
        Value::Array(items) => items,
        Value::Null => return Vec::new(),
        other => {
            warn!(kind = json_kind(&other), "dataset body is not an array, treating as empty");
            return Vec::new();
        }
    };

    items
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(map) => Some(map),
            _ => None,
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
