//! Validation check modules.
//!
//! Each module performs one family of checks and returns the warnings it
//! raises, in the order they are found.

pub(crate) mod base_term;
mod facet;
mod ordering;
mod processes;
mod source_commodity;

use foodex_model::KnowledgeBase;

use crate::resolver::WarnGroup;
use crate::subject::Subject;
use crate::warning::RaisedWarning;

use self::facet::FacetScope;
use self::processes::ProcessLedger;

/// Run the facet and aggregate checks of a code with at least one facet.
pub(crate) fn run_facet_checks<K>(
    subject: &Subject<'_, K>,
    group: Option<&WarnGroup<'_>>,
) -> Vec<RaisedWarning>
where
    K: KnowledgeBase + ?Sized,
{
    let config = subject.config;
    let mut warnings = Vec::new();

    // 1. Implicit forbidden processes of the warn group
    let mut ledger = ProcessLedger::implicit(subject, group);

    // 2. Each explicit facet, in code order
    let scope = FacetScope {
        group,
        implicit_floor: ledger.implicit_floor(),
        implicit_ingredients: subject.implicit_terms(&config.ingredient_category),
        flavoured: subject.is_flavoured(),
    };
    for resolved in &subject.facets {
        warnings.extend(facet::check(subject, &scope, resolved));
        if let Some(rule) = group.and_then(|group| group.rule_for(resolved.code())) {
            ledger.record(subject.kb, resolved, rule);
        }
    }

    // 3. Source commodity cardinality and source combinations
    warnings.extend(source_commodity::check(subject));

    // 4. ordCode checks for derivatives
    if subject.base.is_derivative() {
        warnings.extend(ordering::check_decimal(
            &ledger,
            config.decimal_check_explicit_only,
        ));
        warnings.extend(ordering::check_mutually_exclusive(&ledger));
    }

    warnings
}
