//! Implicit and explicit forbidden process lists.
//!
//! The implicit list holds the base term's inherited process facets that
//! its warn group forbids. Each explicit process facet the group forbids is
//! recorded in the explicit list and consumes the first pending implicit
//! process it refines.

use foodex_model::{Hierarchy, KnowledgeBase, Term};
use foodex_rules::{ForbiddenProcessRule, OrdCode};

use crate::resolver::WarnGroup;
use crate::subject::{ResolvedFacet, Subject};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Origin {
    Implicit,
    Explicit,
}

/// A forbidden process present on the code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ForbiddenProcess {
    pub code: String,
    pub ord_code: OrdCode,
    pub origin: Origin,
}

impl ForbiddenProcess {
    fn new(rule: &ForbiddenProcessRule, origin: Origin) -> Self {
        Self {
            code: rule.process_code.clone(),
            ord_code: rule.ord_code,
            origin,
        }
    }

    pub fn is_implicit(&self) -> bool {
        self.origin == Origin::Implicit
    }
}

#[derive(Debug, Default)]
pub(crate) struct ProcessLedger {
    /// Implicit processes not yet consumed, with their catalogue term.
    pending: Vec<(ForbiddenProcess, Option<Term>)>,
    explicit: Vec<ForbiddenProcess>,
    /// Lowest non-zero ordCode of the implicit list before any consumption.
    implicit_floor: Option<OrdCode>,
    process_hierarchy: Option<Hierarchy>,
}

impl ProcessLedger {
    /// Build the implicit forbidden process list.
    pub fn implicit<K>(subject: &Subject<'_, K>, group: Option<&WarnGroup<'_>>) -> Self
    where
        K: KnowledgeBase + ?Sized,
    {
        let process_hierarchy = subject
            .kb
            .hierarchy_by_code(&subject.config.process_hierarchy);
        let Some(group) = group else {
            return Self {
                process_hierarchy,
                ..Self::default()
            };
        };

        let Some(category) = subject
            .kb
            .attribute_category_by_index(&subject.config.process_category)
        else {
            return Self {
                process_hierarchy,
                ..Self::default()
            };
        };

        let pending: Vec<_> = subject
            .kb
            .inherited_implicit_facets(&subject.base, &category)
            .into_iter()
            .filter_map(|facet| {
                let rule = group.rule_for(&facet.code)?;
                let term = subject.kb.term_by_code(&facet.code);
                Some((ForbiddenProcess::new(rule, Origin::Implicit), term))
            })
            .collect();

        let implicit_floor = pending
            .iter()
            .map(|(process, _)| process.ord_code)
            .filter(|ord| !ord.is_exempt())
            .min();

        tracing::debug!(
            group = group.code(),
            implicit = pending.len(),
            "Implicit forbidden processes"
        );

        Self {
            pending,
            explicit: Vec::new(),
            implicit_floor,
            process_hierarchy,
        }
    }

    pub fn implicit_floor(&self) -> Option<OrdCode> {
        self.implicit_floor
    }

    /// Record an explicit facet forbidden by `rule`.
    pub fn record<K>(&mut self, kb: &K, facet: &ResolvedFacet, rule: &ForbiddenProcessRule)
    where
        K: KnowledgeBase + ?Sized,
    {
        let refined = self.pending.iter().position(|(implicit, term)| {
            implicit.code == facet.code()
                || match (term, &self.process_hierarchy) {
                    (Some(term), Some(hierarchy)) => {
                        kb.is_same_or_descendant(&facet.term, term, hierarchy)
                    }
                    _ => false,
                }
        });
        if let Some(position) = refined {
            let (consumed, _) = self.pending.remove(position);
            tracing::debug!(implicit = %consumed.code, explicit = facet.code(), "Implicit process refined");
        }
        self.explicit.push(ForbiddenProcess::new(rule, Origin::Explicit));
    }

    /// Pending implicit processes, then explicit ones in facet order.
    pub fn processes(&self) -> impl Iterator<Item = &ForbiddenProcess> {
        self.pending
            .iter()
            .map(|(process, _)| process)
            .chain(&self.explicit)
    }
}
