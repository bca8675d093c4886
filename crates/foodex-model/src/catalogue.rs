//! Catalogue entities as seen by the validation engine.

use serde::{Deserialize, Serialize};

/// Term type classification. Gates which checks apply to a base term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum TermType {
    #[serde(rename = "r")]
    RawCommodity,
    #[serde(rename = "d")]
    Derivative,
    /// Aggregated composite food.
    #[serde(rename = "c")]
    Composite,
    #[serde(rename = "s")]
    SimpleComposite,
    #[serde(rename = "f")]
    Facet,
    #[serde(rename = "g")]
    Generic,
    #[default]
    #[serde(rename = "n")]
    Other,
}

impl TermType {
    /// Parse the single-letter catalogue code.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "r" => Self::RawCommodity,
            "d" => Self::Derivative,
            "c" => Self::Composite,
            "s" => Self::SimpleComposite,
            "f" => Self::Facet,
            "g" => Self::Generic,
            _ => Self::Other,
        }
    }

    pub const fn code(&self) -> &'static str {
        match self {
            Self::RawCommodity => "r",
            Self::Derivative => "d",
            Self::Composite => "c",
            Self::SimpleComposite => "s",
            Self::Facet => "f",
            Self::Generic => "g",
            Self::Other => "n",
        }
    }

    /// Both aggregated and simple composites.
    pub const fn is_composite(&self) -> bool {
        matches!(self, Self::Composite | Self::SimpleComposite)
    }
}

impl From<String> for TermType {
    fn from(code: String) -> Self {
        Self::from_code(&code)
    }
}

/// Detail level of a term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum DetailLevel {
    #[default]
    #[serde(rename = "A")]
    Core,
    #[serde(rename = "E")]
    Extended,
    /// Hierarchy grouping node, not meant to be coded directly.
    #[serde(rename = "H")]
    Hierarchy,
    #[serde(rename = "P")]
    NonSpecific,
}

impl DetailLevel {
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_uppercase().as_str() {
            "E" => Self::Extended,
            "H" => Self::Hierarchy,
            "P" => Self::NonSpecific,
            _ => Self::Core,
        }
    }
}

impl From<String> for DetailLevel {
    fn from(code: String) -> Self {
        Self::from_code(&code)
    }
}

/// A catalogue term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope_note: Option<String>,
    #[serde(default)]
    pub term_type: TermType,
    #[serde(default)]
    pub detail_level: DetailLevel,
}

impl Term {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        term_type: TermType,
        detail_level: DetailLevel,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            scope_note: None,
            term_type,
            detail_level,
        }
    }

    #[must_use]
    pub fn with_scope_note(mut self, note: impl Into<String>) -> Self {
        self.scope_note = Some(note.into());
        self
    }

    pub fn is_raw_commodity(&self) -> bool {
        self.term_type == TermType::RawCommodity
    }

    pub fn is_derivative(&self) -> bool {
        self.term_type == TermType::Derivative
    }

    pub fn is_composite(&self) -> bool {
        self.term_type.is_composite()
    }

    pub fn is_hierarchy(&self) -> bool {
        self.detail_level == DetailLevel::Hierarchy
    }

    pub fn is_non_specific(&self) -> bool {
        self.detail_level == DetailLevel::NonSpecific
    }

    /// Case-insensitive search of the name and scope note.
    pub fn mentions(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.name.to_lowercase().contains(&keyword)
            || self
                .scope_note
                .as_deref()
                .is_some_and(|note| note.to_lowercase().contains(&keyword))
    }
}

/// A catalogue hierarchy (a tree of terms).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hierarchy {
    pub code: String,
    pub name: String,
}

impl Hierarchy {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// A facet category (e.g. `F28` "process"), with the hierarchy its
/// descriptors are drawn from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attribute {
    pub index: String,
    pub name: String,
    pub hierarchy: String,
}

impl Attribute {
    pub fn new(
        index: impl Into<String>,
        name: impl Into<String>,
        hierarchy: impl Into<String>,
    ) -> Self {
        Self {
            index: index.into(),
            name: name.into(),
            hierarchy: hierarchy.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_type_codes() {
        assert_eq!(TermType::from_code("R"), TermType::RawCommodity);
        assert_eq!(TermType::from_code("d"), TermType::Derivative);
        assert_eq!(TermType::from_code("?"), TermType::Other);
        assert!(TermType::SimpleComposite.is_composite());
        assert!(!TermType::Derivative.is_composite());
    }

    #[test]
    fn mentions_checks_name_and_scope_note() {
        let term = Term::new("A0X", "Orange juice", TermType::Derivative, DetailLevel::Core)
            .with_scope_note("Includes juice from CONCENTRATE");
        assert!(term.mentions("concentrate"));
        assert!(term.mentions("Juice"));
        assert!(!term.mentions("powder"));
    }

    #[test]
    fn deserializes_single_letter_codes() {
        let term: Term = serde_json::from_str(
            r#"{"code":"A0X","name":"Milk powder","term_type":"d","detail_level":"P"}"#,
        )
        .unwrap();
        assert!(term.is_derivative());
        assert!(term.is_non_specific());
    }
}
