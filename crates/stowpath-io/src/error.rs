use std::path::PathBuf;

use stowpath_core::LayoutError;

/// Errors raised while reading layouts or task lists.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A task table lacks a configured column.
    #[error("missing column {0:?}")]
    MissingColumn(String),

    /// The document root has the wrong JSON type.
    #[error("expected {expected} at document root, got {got}")]
    InvalidRoot {
        expected: &'static str,
        got: &'static str,
    },

    #[error(transparent)]
    Layout(#[from] LayoutError),
}

pub(crate) fn read_file(path: &std::path::Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Name of a JSON value's type, for error messages.
pub(crate) fn json_type(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
