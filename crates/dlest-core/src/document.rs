//! Loading the uploaded JSON document.
//!
//! The document must parse as JSON and have an object or array at the top
//! level; anything else is rejected before extraction runs.

use serde_json::Value;
use std::path::{Path, PathBuf};

/// Why a document could not be accepted.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("expected a JSON object or array at the top level, found {found}")]
    Shape { found: &'static str },
}

/// Reads and validates the document at `path`.
pub fn load_path(path: &Path) -> Result<Value, DocumentError> {
    let bytes = std::fs::read(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_bytes(&bytes)
}

/// Parses `bytes` as JSON and checks the top-level shape.
pub fn parse_bytes(bytes: &[u8]) -> Result<Value, DocumentError> {
    let value: Value = serde_json::from_slice(bytes)?;
    match value {
        Value::Object(_) | Value::Array(_) => Ok(value),
        other => Err(DocumentError::Shape {
            found: kind_name(&other),
        }),
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
