// ============================================================
// CSV LOADER
// ============================================================
// Parse CSV uploads into engine rows, with encoding detection
// and tolerant record handling.

use crate::domain::dataset::Row;
use crate::domain::error::{EngineError, Result};
use csv::{ReaderBuilder, StringRecord, Trim};
use serde_json::Value;
use std::path::Path;

/// CSV loader with encoding detection.
pub struct CsvLoader {
    /// Delimiter character (default: comma)
    delimiter: u8,

    /// Whether to trim whitespace from values
    trim: bool,
}

impl Default for CsvLoader {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
        }
    }
}

impl CsvLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set whether to trim whitespace
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Parse a CSV file into rows.
    pub fn load_file(&self, path: &Path) -> Result<Vec<Row>> {
        let content = self.read_with_encoding_detection(path)?;
        self.load_content(&content)
    }

    /// Parse CSV content from a string.
    ///
    /// Headers come from the first record. Every cell lands as a JSON
    /// string (blank cells as null); the column classifier decides
    /// later what reads as numeric.
    pub fn load_content(&self, content: &str) -> Result<Vec<Row>> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(if self.trim { Trim::All } else { Trim::None })
            .flexible(true) // Allow rows with different lengths
            .from_reader(content.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| EngineError::ParseError(format!("Failed to read CSV headers: {}", e)))?
            .clone();

        let mut rows = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                EngineError::ParseError(format!("Failed to parse CSV row {}: {}", index + 1, e))
            })?;
            rows.push(to_row(&headers, &record));
        }

        Ok(rows)
    }

    /// Read file bytes as text: UTF-8 first, Windows-1252 next, lossy
    /// UTF-8 as the last resort.
    fn read_with_encoding_detection(&self, path: &Path) -> Result<String> {
        let bytes = std::fs::read(path)
            .map_err(|e| EngineError::IoError(format!("Failed to read file: {}", e)))?;

        if let Ok(content) = String::from_utf8(bytes.clone()) {
            return Ok(content);
        }

        let (decoded, _, had_errors) = encoding_rs::WINDOWS_1252.decode(&bytes);
        if !had_errors {
            return Ok(decoded.into_owned());
        }

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

fn to_row(headers: &StringRecord, record: &StringRecord) -> Row {
    let mut row = Row::new();
    for (idx, header) in headers.iter().enumerate() {
        let cell = record.get(idx).unwrap_or("");
        let value = if cell.is_empty() {
            Value::Null
        } else {
            Value::String(cell.to_string())
        };
        row.insert(header.to_string(), value);
    }
    row
}
