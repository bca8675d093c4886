//! Forbidden process rule sets.
//!
//! Source format: a header line, then rows of
//! `baseTermGroupCode;baseTermGroupName;forbiddenProcessCode;forbiddenProcessName;ordCode`.
//! A row whose ordCode is not a number is skipped and logged.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::loader::{self, LoadSummary, RowRejected};
use crate::ord_code::OrdCode;

const FIELD_COUNT: usize = 5;

/// One forbidden process of a warn group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForbiddenProcessRule {
    /// Code of the term acting as warn group.
    pub group_code: String,
    pub group_name: String,
    pub process_code: String,
    pub process_name: String,
    pub ord_code: OrdCode,
}

impl ForbiddenProcessRule {
    pub fn new(
        group_code: impl Into<String>,
        process_code: impl Into<String>,
        ord_code: OrdCode,
    ) -> Self {
        Self {
            group_code: group_code.into(),
            group_name: String::new(),
            process_code: process_code.into(),
            process_name: String::new(),
            ord_code,
        }
    }
}

/// Forbidden process rules grouped by warn group code.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSet {
    groups: BTreeMap<String, Vec<ForbiddenProcessRule>>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rules(rules: impl IntoIterator<Item = ForbiddenProcessRule>) -> Self {
        let mut set = Self::new();
        for rule in rules {
            set.insert(rule);
        }
        set
    }

    pub fn insert(&mut self, rule: ForbiddenProcessRule) {
        self.groups
            .entry(rule.group_code.clone())
            .or_default()
            .push(rule);
    }

    /// Rules owned by the warn group `code`, in table order.
    pub fn rules_for_group(&self, code: &str) -> &[ForbiddenProcessRule] {
        self.groups.get(code).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `code` owns at least one rule.
    pub fn is_warn_group_code(&self, code: &str) -> bool {
        self.groups.contains_key(code)
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ForbiddenProcessRule> {
        self.groups.values().flatten()
    }

    /// Load a rule table from a file.
    pub fn load(path: &Path) -> Result<(Self, LoadSummary)> {
        let file = loader::open(path)?;
        Self::from_reader(file, &path.display().to_string())
    }

    /// Parse a rule table from text.
    pub fn from_csv_str(content: &str, source: &str) -> Result<(Self, LoadSummary)> {
        Self::from_reader(content.as_bytes(), source)
    }

    pub fn from_reader<R: Read>(reader: R, source: &str) -> Result<(Self, LoadSummary)> {
        let (rules, summary) = loader::read_table(reader, source, FIELD_COUNT, parse_row)?;
        Ok((Self::from_rules(rules), summary))
    }
}

fn parse_row(record: &csv::StringRecord) -> std::result::Result<ForbiddenProcessRule, RowRejected> {
    let group_code = &record[0];
    if group_code.is_empty() {
        return Err(RowRejected::new("baseTermGroupCode", group_code));
    }
    let process_code = &record[2];
    if process_code.is_empty() {
        return Err(RowRejected::new("forbiddenProcessCode", process_code));
    }
    let ord_code = record[4]
        .parse::<OrdCode>()
        .map_err(|e| RowRejected::new("ordCode", e.0))?;

    Ok(ForbiddenProcessRule {
        group_code: group_code.to_string(),
        group_name: record[1].to_string(),
        process_code: process_code.to_string(),
        process_name: record[3].to_string(),
        ord_code,
    })
}

/// The standard rule set and the higher-priority exceptions set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleBook {
    pub standard: RuleSet,
    pub exceptions: RuleSet,
}

impl RuleBook {
    pub fn new(standard: RuleSet, exceptions: RuleSet) -> Self {
        Self {
            standard,
            exceptions,
        }
    }

    /// Whether `code` is a self-group of the exceptions set.
    pub fn is_exception(&self, code: &str) -> bool {
        self.exceptions.is_warn_group_code(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "\
baseTermGroupCode;baseTermGroupName;forbiddenProcessCode;forbiddenProcessName;ordCode
A000L;Grains;A07LG;Milling;1
A000L;Grains;A07JS;Cooking;2.1
A000L;Grains;A07KQ;Baking;oops
A01BS;Fruits;A07MR;Juicing;0
";

    #[test]
    fn loads_rules_grouped_by_warn_group() {
        let (set, summary) = RuleSet::from_csv_str(TABLE, "BR_Data.csv").unwrap();
        assert_eq!(summary.loaded, 3);
        assert_eq!(summary.skipped, 1);
        assert_eq!(set.len(), 3);
        assert_eq!(set.group_count(), 2);

        let grains = set.rules_for_group("A000L");
        assert_eq!(grains.len(), 2);
        assert_eq!(grains[0].process_code, "A07LG");
        assert_eq!(grains[1].ord_code, "2.1".parse().unwrap());
        assert_eq!(grains[1].process_name, "Cooking");

        assert!(set.is_warn_group_code("A01BS"));
        assert!(!set.is_warn_group_code("A07LG"));
        assert!(set.rules_for_group("missing").is_empty());
    }

    #[test]
    fn rows_without_codes_are_skipped() {
        let (set, summary) = RuleSet::from_csv_str(
            "h1;h2;h3;h4;h5\n;Nameless;A07LG;Milling;1\nA000L;Grains;;Nothing;1\nA000L;Grains;A07LG;Milling;1\n",
            "rules",
        )
        .unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(summary.skipped, 2);
    }

    #[test]
    fn exceptions_are_detected_by_group_code() {
        let exceptions = RuleSet::from_rules([ForbiddenProcessRule::new(
            "A0EZS",
            "A07LG",
            OrdCode::ZERO,
        )]);
        let book = RuleBook::new(RuleSet::new(), exceptions);
        assert!(book.is_exception("A0EZS"));
        assert!(!book.is_exception("A000L"));
    }
}
