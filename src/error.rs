use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a dataset from a file.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to load dataset {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Per-record extraction failure. Aggregations recover from it locally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("missing column '{column}'")]
    Missing { column: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config read error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("separator '{0}' is not a single-byte character")]
    InvalidSeparator(char),
}
