use thiserror::Error;

/// Crate-wide error type.
///
/// Shape mismatches in [`crate::linalg`] are programmer errors and are not
/// represented here: they panic at the point of detection instead of
/// propagating, matching `nalgebra`'s own convention for dimension
/// mismatches.
#[derive(Debug, Error)]
pub enum HpopError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse {context}: {message}")]
    Parse { context: String, message: String },

    #[error("malformed table: {0}")]
    Table(String),

    #[error("invalid CLI arguments: {0}")]
    Cli(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, HpopError>;
