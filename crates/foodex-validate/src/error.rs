//! Error types for evaluation entry points and configuration loading.

use std::path::PathBuf;

use foodex_model::ParseError;
use thiserror::Error;

/// Engine configuration could not be loaded.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Errors surfaced to callers of the evaluation entry points.
///
/// Unknown terms are not errors: they become the `Error` warning event.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EvaluateError {
    /// The code string is malformed; no check was run.
    #[error("invalid classification code: {0}")]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for evaluation entry points.
pub type Result<T> = std::result::Result<T, EvaluateError>;
