//! Error types for snapshot loading

use std::path::PathBuf;

/// Snapshot decoding and loading errors
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// JSON did not match the expected shape
    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Snapshot file could not be read
    #[error("cannot read snapshot {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl ModelError {
    /// Create I/O error for a path
    #[inline]
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True when the input was read but could not be decoded
    #[inline]
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }
}

/// Result type alias for model operations
pub type ModelResult<T> = Result<T, ModelError>;
