//! Classification code model.
//!
//! A code is a base term optionally followed by facets:
//!
//! ```text
//! code   := base [ '#' facet ( '$' facet )* ]
//! facet  := index '.' descriptor      (split on the first '.')
//! ```
//!
//! For example `A0DPP#F01.A0FGM$F04.A000J` is the base term `A0DPP` with
//! the facets `F01.A0FGM` and `F04.A000J`. Facet order is preserved.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

const FACET_MARKER: char = '#';
const FACET_DELIMITER: char = '$';
const INDEX_SEPARATOR: char = '.';

/// A `(category index, descriptor code)` pair, e.g. `F28.A07JS`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FacetRef {
    pub index: String,
    pub code: String,
}

impl FacetRef {
    pub fn new(index: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            index: index.into(),
            code: code.into(),
        }
    }
}

impl FromStr for FacetRef {
    type Err = ParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let token = token.trim();
        let Some((index, code)) = token.split_once(INDEX_SEPARATOR) else {
            return Err(ParseError::MissingFacetSeparator {
                token: token.to_string(),
            });
        };
        let (index, code) = (index.trim(), code.trim());
        if index.is_empty() {
            return Err(ParseError::EmptyFacetIndex {
                token: token.to_string(),
            });
        }
        if code.is_empty() {
            return Err(ParseError::EmptyFacetCode {
                token: token.to_string(),
            });
        }
        Ok(Self::new(index, code))
    }
}

impl fmt::Display for FacetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.index, INDEX_SEPARATOR, self.code)
    }
}

/// A parsed classification code. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ClassificationCode {
    base_term: String,
    facets: Vec<FacetRef>,
}

impl ClassificationCode {
    /// Parse a raw code string.
    ///
    /// A trailing `#` with no facets after it is accepted as a bare base term.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let raw = raw.trim();
        let mut parts = raw.split(FACET_MARKER);
        let base_term = parts.next().unwrap_or_default().trim();
        let facet_section = parts.next();
        if parts.next().is_some() {
            return Err(ParseError::MultipleFacetMarkers);
        }
        if base_term.is_empty() {
            return Err(ParseError::EmptyBaseTerm);
        }

        let facets = match facet_section.map(str::trim) {
            None | Some("") => Vec::new(),
            Some(section) => section
                .split(FACET_DELIMITER)
                .map(FacetRef::from_str)
                .collect::<Result<Vec<_>, _>>()?,
        };

        Ok(Self {
            base_term: base_term.to_string(),
            facets,
        })
    }

    /// Build a code from already separated parts.
    pub fn new(base_term: impl Into<String>, facets: Vec<FacetRef>) -> Self {
        Self {
            base_term: base_term.into(),
            facets,
        }
    }

    pub fn base_term(&self) -> &str {
        &self.base_term
    }

    pub fn facets(&self) -> &[FacetRef] {
        &self.facets
    }

    pub fn has_facets(&self) -> bool {
        !self.facets.is_empty()
    }

    /// Facets whose category index equals `index`.
    pub fn facets_in(&self, index: &str) -> impl Iterator<Item = &FacetRef> {
        self.facets.iter().filter(move |facet| facet.index == index)
    }
}

impl FromStr for ClassificationCode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ClassificationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base_term)?;
        for (position, facet) in self.facets.iter().enumerate() {
            let separator = if position == 0 {
                FACET_MARKER
            } else {
                FACET_DELIMITER
            };
            write!(f, "{separator}{facet}")?;
        }
        Ok(())
    }
}
