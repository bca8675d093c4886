//! Source and source-commodity combination checks.
//!
//! An explicit source commodity is *restricted* when it is not the same as,
//! or below, one of the base term's implicit source commodities.

use foodex_model::KnowledgeBase;
use foodex_rules::WarningEvent;

use crate::subject::{ResolvedFacet, Subject};
use crate::warning::RaisedWarning;

/// Check the source commodities and sources of the whole code.
pub(crate) fn check<K>(subject: &Subject<'_, K>) -> Vec<RaisedWarning>
where
    K: KnowledgeBase + ?Sized,
{
    let base = &subject.base;
    if !base.is_raw_commodity() && !base.is_derivative() {
        return Vec::new();
    }

    let config = subject.config;
    let category = config.source_commodity_category.as_str();
    let implicit = subject.implicit_terms(category);
    let explicit: Vec<&ResolvedFacet> = subject.facets_in(category).collect();
    let restricted: Vec<&ResolvedFacet> = explicit
        .iter()
        .copied()
        .filter(|facet| !subject.is_covered_by(&facet.term, &implicit, category))
        .collect();

    let mut warnings = Vec::new();

    if base.is_raw_commodity() {
        if let [single] = restricted.as_slice() {
            warnings.push(RaisedWarning::new(
                WarningEvent::SingleSourceCommodityToRaw,
                single.code(),
            ));
        }
        return warnings;
    }

    let sources: Vec<&ResolvedFacet> = subject.facets_in(&config.source_category).collect();
    let source_codes = || sources.iter().map(|facet| facet.code());

    if !restricted.is_empty() && !implicit.is_empty() {
        warnings.push(RaisedWarning::naming(
            WarningEvent::NonGenericDerivativeUsed,
            restricted.iter().map(|facet| facet.code()),
        ));
    }

    if sources.is_empty() {
        return warnings;
    }

    if implicit.is_empty() && explicit.is_empty() {
        warnings.push(RaisedWarning::naming(
            WarningEvent::SourceInDerivative,
            source_codes(),
        ));
    }

    if explicit.len() >= 2 {
        warnings.push(RaisedWarning::naming(
            WarningEvent::MixedDerivative,
            source_codes(),
        ));
    }

    if restricted.len() + implicit.len() == 1 {
        warnings.push(RaisedWarning::naming(
            WarningEvent::SourceToDerivative,
            source_codes(),
        ));
    }

    warnings
}
