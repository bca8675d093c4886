//! Base term checks.
//!
//! Run for every resolved base term, with or without facets.

use foodex_model::KnowledgeBase;
use foodex_rules::{RuleBook, WarningEvent};

use crate::subject::Subject;
use crate::warning::RaisedWarning;

/// Check the base term on its own.
pub(crate) fn check<K>(subject: &Subject<'_, K>, rules: &RuleBook) -> Vec<RaisedWarning>
where
    K: KnowledgeBase + ?Sized,
{
    let config = subject.config;
    let base = &subject.base;
    let in_exposure = subject.kb.belongs_to(base, &config.exposure_hierarchy);
    let in_reporting = subject.kb.belongs_to(base, &config.reporting_hierarchy);

    let mut warnings = Vec::new();

    let outcome = match (base.is_hierarchy(), in_exposure) {
        (true, true) => WarningEvent::HierarchyBaseTerm,
        (true, false) => WarningEvent::NoExpHierarchyTerm,
        (false, _) => WarningEvent::BaseTermSuccessfullyAdded,
    };
    warnings.push(RaisedWarning::bare(outcome));

    if !in_reporting && !in_exposure {
        warnings.push(RaisedWarning::bare(WarningEvent::NoRepNoExpBaseTerm));
    }

    let is_feed = subject.kb.belongs_to(base, &config.feed_hierarchy);
    if !is_feed && !in_exposure {
        warnings.push(RaisedWarning::bare(WarningEvent::NoExposureTerm));
    }

    if base.is_non_specific() {
        warnings.push(RaisedWarning::bare(WarningEvent::NonSpecificTerm));
    }

    if rules.is_exception(&base.code) {
        warnings.push(RaisedWarning::bare(WarningEvent::ExceptionTermSelected));
    }

    warnings
}
