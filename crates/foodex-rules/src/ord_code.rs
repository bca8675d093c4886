//! Process ordering codes.
//!
//! An ordCode packs three meanings into one decimal number:
//!
//! - `0` exempts the process from ordering and mutual-exclusion checks;
//! - the integer part is the application tier (lower tiers come first);
//! - equal non-zero codes are mutually exclusive, while codes sharing a tier
//!   with different fractional parts (`2.1`, `2.2`) are alternative
//!   encodings of the same derivative.
//!
//! Codes are compared on a fixed-point key (three decimals) so that values
//! read from text compare exactly.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

const SCALE: i64 = 1000;

/// A parsed ordCode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrdCode {
    key: i64,
}

/// Text that is not a finite number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidOrdCode(pub String);

impl fmt::Display for InvalidOrdCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid ordCode '{}'", self.0)
    }
}

impl std::error::Error for InvalidOrdCode {}

impl OrdCode {
    /// Exempt code.
    pub const ZERO: Self = Self { key: 0 };

    /// Build from a float, `None` when it is not finite.
    pub fn from_f64(value: f64) -> Option<Self> {
        value.is_finite().then(|| Self {
            key: (value * SCALE as f64).round() as i64,
        })
    }

    pub fn value(self) -> f64 {
        self.key as f64 / SCALE as f64
    }

    /// Exempt from ordering and mutual exclusion.
    pub fn is_exempt(self) -> bool {
        self.key == 0
    }

    /// Application tier (integer part, truncated toward zero).
    pub fn tier(self) -> i64 {
        self.key / SCALE
    }

    /// Fractional part in thousandths, signed like the code; `0` for whole
    /// codes.
    pub fn fraction(self) -> i64 {
        self.key % SCALE
    }

    pub fn has_fraction(self) -> bool {
        self.fraction() != 0
    }
}

impl FromStr for OrdCode {
    type Err = InvalidOrdCode;

    /// Accepts `.` or `,` as the decimal separator.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .replace(',', ".")
            .parse::<f64>()
            .ok()
            .and_then(Self::from_f64)
            .ok_or_else(|| InvalidOrdCode(trimmed.to_string()))
    }
}

impl fmt::Display for OrdCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_fraction() {
            write!(f, "{}", self.value())
        } else {
            write!(f, "{}", self.tier())
        }
    }
}

impl Serialize for OrdCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ord(s: &str) -> OrdCode {
        s.parse().unwrap()
    }

    #[test]
    fn splits_tier_and_fraction() {
        let code = ord("2.1");
        assert_eq!(code.tier(), 2);
        assert_eq!(code.fraction(), 100);
        assert!(code.has_fraction());
        assert!(!ord("2").has_fraction());
        assert_eq!(ord("2.0"), ord("2"));
    }

    #[test]
    fn negative_codes_keep_their_integer_part() {
        let code = ord("-1.5");
        assert_eq!(code.tier(), -1);
        assert_eq!(code.fraction(), -500);
        assert!(code.has_fraction());
        assert_eq!(ord("-1.2").tier(), ord("-1.7").tier());
        assert_ne!(ord("-1.5").tier(), ord("-2").tier());
        assert_eq!(ord("-2").to_string(), "-2");
        assert_eq!(ord("-1.5").to_string(), "-1.5");
    }

    #[test]
    fn zero_is_exempt() {
        assert!(ord("0").is_exempt());
        assert!(ord("0.0").is_exempt());
        assert!(!ord("0.1").is_exempt());
        assert_eq!(OrdCode::ZERO, ord("0"));
    }

    #[test]
    fn text_values_compare_exactly() {
        assert_eq!(ord("0.3"), OrdCode::from_f64(0.1 + 0.2).unwrap());
        assert_eq!(ord("2,2"), ord("2.2"));
        assert!(ord("1.5") < ord("2"));
    }

    #[test]
    fn rejects_non_numbers() {
        assert!("abc".parse::<OrdCode>().is_err());
        assert!("".parse::<OrdCode>().is_err());
        assert!("NaN".parse::<OrdCode>().is_err());
        assert!("inf".parse::<OrdCode>().is_err());
    }

    #[test]
    fn displays_compactly() {
        assert_eq!(ord("3").to_string(), "3");
        assert_eq!(ord("2.10").to_string(), "2.1");
    }
}
