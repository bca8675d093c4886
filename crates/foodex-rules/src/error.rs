//! Error types for rule and message table loading.

use std::path::PathBuf;

use thiserror::Error;

/// Whole-table load failures.
///
/// Problems confined to a single row are not errors: the row is skipped,
/// logged, and counted in [`LoadSummary`](crate::LoadSummary).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RuleLoadError {
    /// Table file not found.
    #[error("table file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Table file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader failed outside of a single row.
    #[error("failed to read CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// No header line.
    #[error("table {path} has no header line")]
    MissingHeader { path: PathBuf },

    /// Data rows present but none usable.
    #[error("table {path} contains no valid rows ({skipped} skipped)")]
    Empty { path: PathBuf, skipped: usize },
}

impl RuleLoadError {
    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for table loading.
pub type Result<T> = std::result::Result<T, RuleLoadError>;
