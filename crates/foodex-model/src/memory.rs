//! In-memory catalogue snapshot.
//!
//! [`MemoryCatalogue`] implements [`KnowledgeBase`] over plain maps. It is
//! built either through the `with_*` builder methods or from a JSON snapshot:
//!
//! ```json
//! {
//!   "master_hierarchy": "master",
//!   "hierarchies": [{ "code": "report", "name": "Reporting hierarchy" }],
//!   "attributes": [{ "index": "F28", "name": "process", "hierarchy": "process" }],
//!   "terms": [
//!     {
//!       "code": "A0DPP", "name": "Apples", "term_type": "r", "detail_level": "A",
//!       "placements": { "master": "A01DJ", "report": "A01DJ", "expo": null },
//!       "implicit_facets": ["F28.A07JS"]
//!     }
//!   ]
//! }
//! ```
//!
//! A placement maps a hierarchy code to the parent code in that hierarchy
//! (`null` for a root). Listing a hierarchy makes the term a member of it.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;

use crate::catalogue::{Attribute, Hierarchy, Term};
use crate::code::FacetRef;
use crate::error::{ModelError, Result};
use crate::knowledge::KnowledgeBase;

/// Hierarchy code used when a snapshot does not name its master hierarchy.
pub const DEFAULT_MASTER_HIERARCHY: &str = "master";

fn default_master() -> String {
    DEFAULT_MASTER_HIERARCHY.to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Snapshot {
    #[serde(default = "default_master")]
    master_hierarchy: String,
    #[serde(default)]
    hierarchies: Vec<Hierarchy>,
    #[serde(default)]
    attributes: Vec<Attribute>,
    #[serde(default)]
    terms: Vec<SnapshotTerm>,
}

#[derive(Debug, Deserialize)]
struct SnapshotTerm {
    #[serde(flatten)]
    term: Term,
    #[serde(default)]
    placements: BTreeMap<String, Option<String>>,
    #[serde(default)]
    implicit_facets: Vec<String>,
}

/// Catalogue held entirely in memory.
#[derive(Debug, Clone)]
pub struct MemoryCatalogue {
    master_hierarchy: String,
    terms: HashMap<String, Term>,
    hierarchies: BTreeMap<String, Hierarchy>,
    attributes: BTreeMap<String, Attribute>,
    /// term code -> hierarchy code -> parent code
    placements: HashMap<String, BTreeMap<String, Option<String>>>,
    implicit_facets: HashMap<String, Vec<FacetRef>>,
}

impl Default for MemoryCatalogue {
    fn default() -> Self {
        Self::new(DEFAULT_MASTER_HIERARCHY)
    }
}

impl MemoryCatalogue {
    /// Create an empty catalogue whose implicit facets are inherited along
    /// `master_hierarchy`.
    pub fn new(master_hierarchy: impl Into<String>) -> Self {
        let master_hierarchy = master_hierarchy.into();
        let mut hierarchies = BTreeMap::new();
        hierarchies.insert(
            master_hierarchy.clone(),
            Hierarchy::new(master_hierarchy.clone(), "Master hierarchy"),
        );
        Self {
            master_hierarchy,
            terms: HashMap::new(),
            hierarchies,
            attributes: BTreeMap::new(),
            placements: HashMap::new(),
            implicit_facets: HashMap::new(),
        }
    }

    /// Parse a JSON snapshot.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let snapshot: Snapshot = serde_json::from_str(content)?;
        Self::from_snapshot(snapshot)
    }

    /// Read and parse a JSON snapshot file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ModelError::io(path, e))?;
        let catalogue = Self::from_json_str(&content)?;
        tracing::info!(
            path = %path.display(),
            terms = catalogue.len(),
            hierarchies = catalogue.hierarchies.len(),
            "Loaded catalogue snapshot"
        );
        Ok(catalogue)
    }

    fn from_snapshot(snapshot: Snapshot) -> Result<Self> {
        let mut catalogue = Self::new(snapshot.master_hierarchy);
        for hierarchy in snapshot.hierarchies {
            catalogue = catalogue.with_hierarchy(hierarchy);
        }
        for attribute in snapshot.attributes {
            catalogue = catalogue.with_attribute(attribute);
        }
        for entry in snapshot.terms {
            let code = entry.term.code.clone();
            let facets = entry
                .implicit_facets
                .iter()
                .map(|token| token.parse::<FacetRef>())
                .collect::<std::result::Result<Vec<_>, _>>()?;
            catalogue = catalogue.with_term(entry.term);
            for (hierarchy, parent) in entry.placements {
                catalogue = catalogue.with_placement(&code, &hierarchy, parent.as_deref());
            }
            for facet in facets {
                catalogue = catalogue.with_implicit_facet(&code, facet);
            }
        }
        catalogue.warn_dangling_references();
        Ok(catalogue)
    }

    #[must_use]
    pub fn with_hierarchy(mut self, hierarchy: Hierarchy) -> Self {
        self.hierarchies.insert(hierarchy.code.clone(), hierarchy);
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.insert(attribute.index.clone(), attribute);
        self
    }

    #[must_use]
    pub fn with_term(mut self, term: Term) -> Self {
        self.terms.insert(term.code.clone(), term);
        self
    }

    /// Place `term` in `hierarchy` under `parent` (`None` for a root).
    #[must_use]
    pub fn with_placement(mut self, term: &str, hierarchy: &str, parent: Option<&str>) -> Self {
        self.placements
            .entry(term.to_string())
            .or_default()
            .insert(hierarchy.to_string(), parent.map(str::to_string));
        self
    }

    #[must_use]
    pub fn with_implicit_facet(mut self, term: &str, facet: FacetRef) -> Self {
        self.implicit_facets
            .entry(term.to_string())
            .or_default()
            .push(facet);
        self
    }

    pub fn master_hierarchy(&self) -> &str {
        &self.master_hierarchy
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    fn parent_code(&self, term: &str, hierarchy: &str) -> Option<&str> {
        self.placements.get(term)?.get(hierarchy)?.as_deref()
    }

    /// Ancestor codes of `term` in `hierarchy`, nearest first.
    fn ancestor_codes(&self, term: &str, hierarchy: &str) -> Vec<&str> {
        let mut visited = HashSet::new();
        let mut chain = Vec::new();
        let mut current = self.parent_code(term, hierarchy);
        while let Some(code) = current {
            if !visited.insert(code) {
                tracing::warn!(term, hierarchy, code, "Cycle in catalogue hierarchy");
                break;
            }
            chain.push(code);
            current = self.parent_code(code, hierarchy);
        }
        chain
    }

    fn is_ancestor_code(&self, ancestor: &str, descendant: &str, hierarchy: &str) -> bool {
        self.ancestor_codes(descendant, hierarchy).contains(&ancestor)
    }

    fn warn_dangling_references(&self) {
        for (term, placements) in &self.placements {
            for (hierarchy, parent) in placements {
                if !self.hierarchies.contains_key(hierarchy) {
                    tracing::warn!(term = %term, hierarchy = %hierarchy, "Placement in unknown hierarchy");
                }
                if let Some(parent) = parent
                    && !self.terms.contains_key(parent)
                {
                    tracing::warn!(term = %term, parent = %parent, "Placement under unknown parent term");
                }
            }
        }
    }
}

impl KnowledgeBase for MemoryCatalogue {
    fn term_by_code(&self, code: &str) -> Option<Term> {
        self.terms.get(code).cloned()
    }

    fn hierarchy_by_code(&self, code: &str) -> Option<Hierarchy> {
        self.hierarchies.get(code).cloned()
    }

    fn is_ancestor(&self, ancestor: &Term, descendant: &Term, hierarchy: &Hierarchy) -> bool {
        self.is_ancestor_code(&ancestor.code, &descendant.code, &hierarchy.code)
    }

    fn applicable_hierarchies(&self, term: &Term) -> Vec<Hierarchy> {
        self.placements
            .get(&term.code)
            .map(|placements| {
                placements
                    .keys()
                    .filter_map(|code| self.hierarchies.get(code).cloned())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn parent(&self, term: &Term, hierarchy: &Hierarchy) -> Option<Term> {
        let code = self.parent_code(&term.code, &hierarchy.code)?;
        self.terms.get(code).cloned()
    }

    fn inherited_implicit_facets(&self, term: &Term, category: &Attribute) -> Vec<FacetRef> {
        let mut lineage = self.ancestor_codes(&term.code, &self.master_hierarchy);
        lineage.reverse();
        lineage.push(&term.code);

        let mut inherited: Vec<FacetRef> = Vec::new();
        for code in lineage {
            let Some(facets) = self.implicit_facets.get(code) else {
                continue;
            };
            for facet in facets.iter().filter(|f| f.index == category.index) {
                if inherited.iter().any(|known| known.code == facet.code) {
                    continue;
                }
                // A more specific facet replaces the inherited one it refines.
                let refined = inherited.iter().position(|known| {
                    self.is_ancestor_code(&known.code, &facet.code, &category.hierarchy)
                });
                match refined {
                    Some(position) => inherited[position] = facet.clone(),
                    None => inherited.push(facet.clone()),
                }
            }
        }
        inherited
    }

    fn attribute_category_by_index(&self, index: &str) -> Option<Attribute> {
        self.attributes.get(index).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::{DetailLevel, TermType};

    fn process_catalogue() -> MemoryCatalogue {
        MemoryCatalogue::new("master")
            .with_hierarchy(Hierarchy::new("process", "Process"))
            .with_attribute(Attribute::new("F28", "process", "process"))
            .with_term(Term::new("P0", "Processed", TermType::Facet, DetailLevel::Hierarchy))
            .with_term(Term::new("P1", "Cooked", TermType::Facet, DetailLevel::Core))
            .with_term(Term::new("P2", "Boiled", TermType::Facet, DetailLevel::Core))
            .with_placement("P0", "process", None)
            .with_placement("P1", "process", Some("P0"))
            .with_placement("P2", "process", Some("P1"))
            .with_term(Term::new("G", "Grains", TermType::RawCommodity, DetailLevel::Hierarchy))
            .with_term(Term::new("F", "Flour", TermType::Derivative, DetailLevel::Core))
            .with_placement("G", "master", None)
            .with_placement("F", "master", Some("G"))
    }

    #[test]
    fn ancestor_is_strict_and_transitive() {
        let catalogue = process_catalogue();
        let process = catalogue.hierarchy_by_code("process").unwrap();
        let p0 = catalogue.term_by_code("P0").unwrap();
        let p2 = catalogue.term_by_code("P2").unwrap();
        assert!(catalogue.is_ancestor(&p0, &p2, &process));
        assert!(!catalogue.is_ancestor(&p2, &p0, &process));
        assert!(!catalogue.is_ancestor(&p2, &p2, &process));
        assert!(catalogue.is_same_or_descendant(&p2, &p2, &process));
    }

    #[test]
    fn implicit_facets_are_inherited_and_refined() {
        let catalogue = process_catalogue()
            .with_implicit_facet("G", FacetRef::new("F28", "P1"))
            .with_implicit_facet("F", FacetRef::new("F28", "P2"))
            .with_implicit_facet("F", FacetRef::new("F01", "X"));
        let category = catalogue.attribute_category_by_index("F28").unwrap();
        let flour = catalogue.term_by_code("F").unwrap();
        let grains = catalogue.term_by_code("G").unwrap();

        assert_eq!(
            catalogue.inherited_implicit_facets(&flour, &category),
            vec![FacetRef::new("F28", "P2")]
        );
        assert_eq!(
            catalogue.inherited_implicit_facets(&grains, &category),
            vec![FacetRef::new("F28", "P1")]
        );
    }

    #[test]
    fn cycles_do_not_hang() {
        let catalogue = MemoryCatalogue::new("master")
            .with_term(Term::new("A", "A", TermType::Other, DetailLevel::Core))
            .with_term(Term::new("B", "B", TermType::Other, DetailLevel::Core))
            .with_placement("A", "master", Some("B"))
            .with_placement("B", "master", Some("A"));
        let master = catalogue.hierarchy_by_code("master").unwrap();
        let a = catalogue.term_by_code("A").unwrap();
        let b = catalogue.term_by_code("B").unwrap();
        assert!(catalogue.is_ancestor(&b, &a, &master));
    }

    #[test]
    fn loads_json_snapshot() {
        let catalogue = MemoryCatalogue::from_json_str(
            r#"{
                "hierarchies": [{ "code": "report", "name": "Reporting" }],
                "attributes": [{ "index": "F28", "name": "process", "hierarchy": "process" }],
                "terms": [
                    { "code": "A01", "name": "Fruits", "term_type": "r", "detail_level": "H",
                      "placements": { "master": null, "report": null } },
                    { "code": "A0DPP", "name": "Apples", "term_type": "r",
                      "placements": { "master": "A01", "report": "A01" },
                      "implicit_facets": ["F28.A07JS"] }
                ]
            }"#,
        )
        .unwrap();

        let apples = catalogue.term_by_code("A0DPP").unwrap();
        let report = catalogue.hierarchy_by_code("report").unwrap();
        assert_eq!(catalogue.parent(&apples, &report).unwrap().code, "A01");
        assert!(catalogue.belongs_to(&apples, "report"));
        assert!(!catalogue.belongs_to(&apples, "expo"));
        assert_eq!(catalogue.master_hierarchy(), "master");
    }

    #[test]
    fn rejects_malformed_implicit_facet() {
        let result = MemoryCatalogue::from_json_str(
            r#"{ "terms": [{ "code": "A", "name": "A", "implicit_facets": ["F28A07JS"] }] }"#,
        );
        assert!(matches!(result, Err(ModelError::Parse(_))));
    }
}
