//! Per-facet checks.

use foodex_model::{KnowledgeBase, Term};
use foodex_rules::{OrdCode, WarningEvent};

use crate::resolver::WarnGroup;
use crate::subject::{ResolvedFacet, Subject};
use crate::warning::RaisedWarning;

/// Facts about the base term shared by every facet check.
pub(crate) struct FacetScope<'s, 'r> {
    pub group: Option<&'s WarnGroup<'r>>,
    pub implicit_floor: Option<OrdCode>,
    pub implicit_ingredients: Vec<Term>,
    pub flavoured: bool,
}

/// Check one explicit facet.
pub(crate) fn check<K>(
    subject: &Subject<'_, K>,
    scope: &FacetScope<'_, '_>,
    facet: &ResolvedFacet,
) -> Vec<RaisedWarning>
where
    K: KnowledgeBase + ?Sized,
{
    let config = subject.config;
    let base = &subject.base;
    let code = facet.code();
    let is_process = facet.is_in(&config.process_category);
    let rule = scope.group.and_then(|group| group.rule_for(code));

    let mut warnings = Vec::new();

    if base.is_raw_commodity() && is_process && rule.is_some() {
        warnings.push(RaisedWarning::new(WarningEvent::ForbiddenProcess, code));
    }

    if base.is_derivative()
        && is_process
        && let Some(rule) = rule
        && !rule.ord_code.is_exempt()
        && scope.implicit_floor.is_some_and(|floor| rule.ord_code < floor)
    {
        warnings.push(RaisedWarning::new(WarningEvent::WrongProcessOrder, code));
    }

    if config.is_generic_process(code) {
        warnings.push(RaisedWarning::new(WarningEvent::GenericProcessing, code));
    }

    if (base.is_raw_commodity() || base.is_derivative())
        && !scope.flavoured
        && facet.is_in(&config.ingredient_category)
        && !subject.is_covered_by(
            &facet.term,
            &scope.implicit_ingredients,
            &config.ingredient_category,
        )
    {
        warnings.push(RaisedWarning::new(WarningEvent::MinorIngredient, code));
    }

    if base.is_composite() {
        if facet.is_in(&config.source_category) {
            warnings.push(RaisedWarning::new(WarningEvent::SourceInComposite, code));
        }
        if facet.is_in(&config.source_commodity_category) {
            warnings.push(RaisedWarning::new(
                WarningEvent::SourceCommodityInComposite,
                code,
            ));
        }
    }

    if is_process && config.is_reconstitution(code) && subject.is_reconstitutable() {
        warnings.push(RaisedWarning::new(WarningEvent::ReconstitutionProduct, code));
    }

    warnings
}
