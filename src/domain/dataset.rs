// ============================================================
// DATASET TYPES
// ============================================================
// Rows of unknown shape, as handed over by the upload layer.
// No I/O here; coercion helpers only.

use serde_json::{Map, Value};

/// A single uploaded record: column name -> scalar.
/// Key order is the order the record arrived in (preserve_order).
pub type Row = Map<String, Value>;

/// Attempt to read a value as a finite number.
///
/// Accepts native JSON numbers and strings whose entire trimmed text
/// parses to a finite float. Booleans, nulls, and anything else are
/// not numbers here.
pub fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok().filter(|f| f.is_finite())
        }
        _ => None,
    }
}

/// Integer reading used by the age buckets.
///
/// Numbers truncate toward zero; strings read their leading integer
/// prefix after trimming ("34 yrs" -> 34, "27.5" -> 27). Everything
/// else reads as 0, matching the original engine's "unparsable -> 0"
/// rule.
pub fn coerce_integer(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Value::String(s) => parse_leading_integer(s.trim()),
        _ => 0,
    }
}

fn parse_leading_integer(text: &str) -> i64 {
    let mut chars = text.chars().peekable();
    let mut digits = String::new();

    if let Some(&c) = chars.peek() {
        if c == '+' || c == '-' {
            digits.push(c);
            chars.next();
        }
    }
    while let Some(&c) = chars.peek() {
        if c.is_ascii_digit() {
            digits.push(c);
            chars.next();
        } else {
            break;
        }
    }

    digits.parse::<i64>().unwrap_or(0)
}

/// Read a value as display text for grouping keys.
///
/// Returns None for null and blank strings, so group-by operations can
/// skip rows that carry no usable label.
pub fn coerce_label(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Value::Null => None,
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Whether a cell counts as missing for profiling purposes:
/// null or a blank string.
pub fn is_missing(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}
