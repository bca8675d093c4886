//! Catalogue lookups for the code under evaluation.
//!
//! Every code referenced by a classification code is looked up once, before
//! any check runs. Checks then work on resolved [`Term`]s only.

use foodex_model::{Attribute, ClassificationCode, FacetRef, KnowledgeBase, Term};

use crate::config::EngineConfig;

/// A facet whose term and category exist in the catalogue.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedFacet {
    pub facet: FacetRef,
    pub term: Term,
}

impl ResolvedFacet {
    pub fn code(&self) -> &str {
        &self.facet.code
    }

    pub fn is_in(&self, category: &str) -> bool {
        self.facet.index == category
    }
}

/// The code that could not be found in the catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct UnknownCode(pub String);

/// Base term and facets of one classification code, resolved against the
/// catalogue.
pub(crate) struct Subject<'a, K: ?Sized> {
    pub kb: &'a K,
    pub config: &'a EngineConfig,
    pub base: Term,
    pub facets: Vec<ResolvedFacet>,
}

impl<'a, K> Subject<'a, K>
where
    K: KnowledgeBase + ?Sized,
{
    /// Resolve every code of `code`, stopping at the first unknown one.
    pub fn resolve(
        code: &ClassificationCode,
        kb: &'a K,
        config: &'a EngineConfig,
    ) -> Result<Self, UnknownCode> {
        let base = kb
            .term_by_code(code.base_term())
            .ok_or_else(|| UnknownCode(code.base_term().to_string()))?;

        let mut facets = Vec::with_capacity(code.facets().len());
        for facet in code.facets() {
            if kb.attribute_category_by_index(&facet.index).is_none() {
                return Err(UnknownCode(facet.to_string()));
            }
            let term = kb
                .term_by_code(&facet.code)
                .ok_or_else(|| UnknownCode(facet.to_string()))?;
            facets.push(ResolvedFacet {
                facet: facet.clone(),
                term,
            });
        }

        Ok(Self {
            kb,
            config,
            base,
            facets,
        })
    }

    /// Explicit facets of one category, in code order.
    pub fn facets_in<'s>(&'s self, category: &'s str) -> impl Iterator<Item = &'s ResolvedFacet> {
        self.facets.iter().filter(move |facet| facet.is_in(category))
    }

    /// Implicit facets of the base term in `category`, resolved to terms.
    ///
    /// Implicit facets missing from the catalogue are dropped.
    pub fn implicit_terms(&self, category: &str) -> Vec<Term> {
        let Some(attribute) = self.kb.attribute_category_by_index(category) else {
            return Vec::new();
        };
        self.kb
            .inherited_implicit_facets(&self.base, &attribute)
            .into_iter()
            .filter_map(|facet| {
                let term = self.kb.term_by_code(&facet.code);
                if term.is_none() {
                    tracing::debug!(facet = %facet, "Implicit facet not in catalogue");
                }
                term
            })
            .collect()
    }

    /// Whether `term` is one of `ancestors` or below one of them in the
    /// hierarchy of `category`.
    pub fn is_covered_by(&self, term: &Term, ancestors: &[Term], category: &str) -> bool {
        let hierarchy = self
            .kb
            .attribute_category_by_index(category)
            .and_then(|attribute: Attribute| self.kb.hierarchy_by_code(&attribute.hierarchy));
        ancestors.iter().any(|ancestor| match &hierarchy {
            Some(hierarchy) => self.kb.is_same_or_descendant(term, ancestor, hierarchy),
            None => term.code == ancestor.code,
        })
    }

    /// Flavoured base term or explicit flavouring facet.
    pub fn is_flavoured(&self) -> bool {
        self.facets
            .iter()
            .any(|facet| self.config.is_flavouring(facet.code()))
            || self
                .config
                .flavoured_keywords
                .iter()
                .any(|keyword| self.base.mentions(keyword))
    }

    /// Concentrate or powder base term.
    pub fn is_reconstitutable(&self) -> bool {
        self.config
            .reconstitution_keywords
            .iter()
            .any(|keyword| self.base.mentions(keyword))
    }
}
