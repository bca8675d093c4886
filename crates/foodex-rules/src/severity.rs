//! Warning severity levels.

use serde::{Deserialize, Serialize};

/// Severity of a warning on either presentation channel.
///
/// Totally ordered `None < Low < High < Error`. `Error` is reserved for
/// malformed input and is never read from a message table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    #[default]
    None,
    Low,
    High,
    Error,
}

impl Severity {
    /// Parse a table level token (`HIGH`, `LOW`, `NONE`, any case).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "none" => Some(Self::None),
            "low" => Some(Self::Low),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Low => "LOW",
            Self::High => "HIGH",
            Self::Error => "ERROR",
        }
    }

    /// `High` or `Error`.
    pub fn is_blocking(&self) -> bool {
        *self >= Self::High
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_is_none_low_high_error() {
        assert!(Severity::None < Severity::Low);
        assert!(Severity::Low < Severity::High);
        assert!(Severity::High < Severity::Error);
    }

    #[test]
    fn parse_is_case_insensitive_and_excludes_error() {
        assert_eq!(Severity::parse(" high "), Some(Severity::High));
        assert_eq!(Severity::parse("Low"), Some(Severity::Low));
        assert_eq!(Severity::parse("NONE"), Some(Severity::None));
        assert_eq!(Severity::parse("error"), None);
        assert_eq!(Severity::parse("medium"), None);
    }
}
