use std::path::PathBuf;

use thiserror::Error;

/// Application-level error type.
///
/// The scoring core never fails; these variants cover the glue around it:
/// reading input documents, decoding them, and writing the report.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed document {path}: {source}")]
    MalformedDocument {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }

    /// Short machine-readable code, used in log fields.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Io { .. } => "IO_ERROR",
            AppError::MalformedDocument { .. } => "MALFORMED_DOCUMENT",
            AppError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }
}
