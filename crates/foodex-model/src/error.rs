//! Error types for code parsing and catalogue snapshot loading.

use std::path::PathBuf;

use thiserror::Error;

/// A classification code string that does not follow the
/// `BASE#INDEX.CODE$INDEX.CODE` grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// Nothing before the `#` (or an empty string).
    #[error("classification code has an empty base term")]
    EmptyBaseTerm,

    /// More than one `#` marker.
    #[error("classification code contains more than one '#' facet marker")]
    MultipleFacetMarkers,

    /// Facet token without the `.` separating index from code.
    #[error("facet '{token}' is missing the '.' between category index and code")]
    MissingFacetSeparator { token: String },

    /// Facet token with nothing before the `.`.
    #[error("facet '{token}' has an empty category index")]
    EmptyFacetIndex { token: String },

    /// Facet token with nothing after the `.`.
    #[error("facet '{token}' has an empty descriptor code")]
    EmptyFacetCode { token: String },
}

/// Errors raised by the model crate.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ModelError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("failed to read catalogue snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalogue snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

impl ModelError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
