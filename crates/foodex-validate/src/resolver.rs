//! Warn group resolution.
//!
//! A warn group is the term whose forbidden process rules apply to a base
//! term. Exception terms are their own group. Any other term takes the
//! closest term, itself included, on its path to the root of the reporting
//! hierarchy that owns rules in the standard set.

use std::collections::HashSet;

use foodex_model::{KnowledgeBase, Term};
use foodex_rules::{ForbiddenProcessRule, RuleBook};
use tracing::debug;

/// The resolved warn group and the rules it owns.
///
/// The rule slice borrows from the [`RuleBook`], so resolving never changes
/// which rules other evaluations see.
#[derive(Debug, Clone, PartialEq)]
pub struct WarnGroup<'r> {
    pub term: Term,
    pub rules: &'r [ForbiddenProcessRule],
    /// Resolved from the exceptions set.
    pub exceptional: bool,
}

impl<'r> WarnGroup<'r> {
    pub fn code(&self) -> &str {
        &self.term.code
    }

    /// Rule forbidding `process_code` in this group.
    pub fn rule_for(&self, process_code: &str) -> Option<&'r ForbiddenProcessRule> {
        self.rules.iter().find(|rule| rule.process_code == process_code)
    }
}

/// Resolve the warn group of `term`.
///
/// Visits each ancestor in `reporting_hierarchy` at most once.
pub fn resolve_warn_group<'r, K>(
    term: &Term,
    kb: &K,
    rules: &'r RuleBook,
    reporting_hierarchy: &str,
) -> Option<WarnGroup<'r>>
where
    K: KnowledgeBase + ?Sized,
{
    if rules.is_exception(&term.code) {
        debug!(term = %term.code, "Warn group is an exception term");
        return Some(WarnGroup {
            term: term.clone(),
            rules: rules.exceptions.rules_for_group(&term.code),
            exceptional: true,
        });
    }

    let hierarchy = kb.hierarchy_by_code(reporting_hierarchy);
    let mut visited = HashSet::new();
    let mut current = Some(term.clone());

    while let Some(candidate) = current {
        if !visited.insert(candidate.code.clone()) {
            debug!(term = %candidate.code, "Cycle in reporting hierarchy");
            break;
        }
        if rules.standard.is_warn_group_code(&candidate.code) {
            debug!(term = %term.code, group = %candidate.code, "Resolved warn group");
            let rules = rules.standard.rules_for_group(&candidate.code);
            return Some(WarnGroup {
                term: candidate,
                rules,
                exceptional: false,
            });
        }
        current = hierarchy
            .as_ref()
            .and_then(|hierarchy| kb.parent(&candidate, hierarchy));
    }

    debug!(term = %term.code, "No warn group");
    None
}
