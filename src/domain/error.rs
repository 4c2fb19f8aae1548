use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize)]
pub enum EngineError {
    Internal(String),
    ParseError(String),
    ValidationError(String),
    ConfigError(String),
    IoError(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Internal(msg) => write!(f, "Internal error: {}", msg),
            EngineError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            EngineError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            EngineError::ConfigError(msg) => write!(f, "Config error: {}", msg),
            EngineError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::IoError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
