//! Read-only catalogue interface consumed by the validation engine.
//!
//! The engine never stores or edits catalogue data. Whatever backs the
//! catalogue (a database, a snapshot file, [`MemoryCatalogue`] in tests)
//! implements [`KnowledgeBase`] and is handed to the evaluator by reference.
//!
//! [`MemoryCatalogue`]: crate::MemoryCatalogue

use crate::catalogue::{Attribute, Hierarchy, Term};
use crate::code::FacetRef;

/// Synchronous, read-only catalogue queries.
pub trait KnowledgeBase {
    /// Look up a term by its code.
    fn term_by_code(&self, code: &str) -> Option<Term>;

    /// Look up a hierarchy by its code.
    fn hierarchy_by_code(&self, code: &str) -> Option<Hierarchy>;

    /// Whether `ancestor` is a strict ancestor of `descendant` in `hierarchy`.
    fn is_ancestor(&self, ancestor: &Term, descendant: &Term, hierarchy: &Hierarchy) -> bool;

    /// Hierarchies the term is placed in.
    fn applicable_hierarchies(&self, term: &Term) -> Vec<Hierarchy>;

    /// Parent of `term` in `hierarchy`, `None` at the root or when the term
    /// is not placed in that hierarchy.
    fn parent(&self, term: &Term, hierarchy: &Hierarchy) -> Option<Term>;

    /// Implicit facets of `term` in `category`, including the ones inherited
    /// from its ancestors.
    fn inherited_implicit_facets(&self, term: &Term, category: &Attribute) -> Vec<FacetRef>;

    /// Facet category for a facet index such as `F28`.
    fn attribute_category_by_index(&self, index: &str) -> Option<Attribute>;

    /// Whether the term is placed in the hierarchy with the given code.
    fn belongs_to(&self, term: &Term, hierarchy_code: &str) -> bool {
        self.applicable_hierarchies(term)
            .iter()
            .any(|hierarchy| hierarchy.code == hierarchy_code)
    }

    /// Whether `descendant` is `ancestor` itself or below it in `hierarchy`.
    fn is_same_or_descendant(
        &self,
        descendant: &Term,
        ancestor: &Term,
        hierarchy: &Hierarchy,
    ) -> bool {
        descendant.code == ancestor.code || self.is_ancestor(ancestor, descendant, hierarchy)
    }
}

impl<K: KnowledgeBase + ?Sized> KnowledgeBase for &K {
    fn term_by_code(&self, code: &str) -> Option<Term> {
        (**self).term_by_code(code)
    }

    fn hierarchy_by_code(&self, code: &str) -> Option<Hierarchy> {
        (**self).hierarchy_by_code(code)
    }

    fn is_ancestor(&self, ancestor: &Term, descendant: &Term, hierarchy: &Hierarchy) -> bool {
        (**self).is_ancestor(ancestor, descendant, hierarchy)
    }

    fn applicable_hierarchies(&self, term: &Term) -> Vec<Hierarchy> {
        (**self).applicable_hierarchies(term)
    }

    fn parent(&self, term: &Term, hierarchy: &Hierarchy) -> Option<Term> {
        (**self).parent(term, hierarchy)
    }

    fn inherited_implicit_facets(&self, term: &Term, category: &Attribute) -> Vec<FacetRef> {
        (**self).inherited_implicit_facets(term, category)
    }

    fn attribute_category_by_index(&self, index: &str) -> Option<Attribute> {
        (**self).attribute_category_by_index(index)
    }
}
