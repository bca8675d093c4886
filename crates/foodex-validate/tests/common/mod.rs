//! Shared in-memory catalogue and rule book for pipeline tests.

#![allow(dead_code)]

use foodex_model::{
    Attribute, ClassificationCode, DetailLevel, FacetRef, Hierarchy, MemoryCatalogue, Term,
    TermType,
};
use foodex_rules::{MessageCatalog, RuleBook, RuleSet, WarningEvent};
use foodex_validate::{Engine, EngineConfig, RaisedWarning, RenderOptions, WarningReport};

const STANDARD_RULES: &str = "\
baseTermGroupCode;baseTermGroupName;forbiddenProcessCode;forbiddenProcessName;ordCode
GRAIN;Grains;MILL;Milling;0
GRAIN;Grains;P1;Pressing;1
GRAIN;Grains;P2;Extracting;1
GRAIN;Grains;BOIL;Boiling;2.1
GRAIN;Grains;FRY;Frying;2.2
GRAIN;Grains;SIMMER;Simmering;2.3
GRAIN;Grains;HEAT;Heat treatment;3
GRAIN;Grains;DRY;Drying;4
";

const EXCEPTION_RULES: &str = "\
baseTermGroupCode;baseTermGroupName;forbiddenProcessCode;forbiddenProcessName;ordCode
SPELT;Spelt;MILL;Milling;0
";

pub struct Fixture {
    pub kb: MemoryCatalogue,
    pub rules: RuleBook,
    pub messages: MessageCatalog,
    pub config: EngineConfig,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        let (standard, _) = RuleSet::from_csv_str(STANDARD_RULES, "standard").unwrap();
        let (exceptions, _) = RuleSet::from_csv_str(EXCEPTION_RULES, "exceptions").unwrap();
        Self {
            kb: catalogue(),
            rules: RuleBook::new(standard, exceptions),
            messages: MessageCatalog::default(),
            config,
        }
    }

    pub fn engine(&self) -> Engine<'_, MemoryCatalogue> {
        Engine::new(&self.kb, &self.rules, &self.messages, &self.config)
    }

    pub fn warnings(&self, raw: &str) -> Vec<RaisedWarning> {
        let code = ClassificationCode::parse(raw).unwrap();
        self.engine().evaluate(&code)
    }

    pub fn events(&self, raw: &str) -> Vec<WarningEvent> {
        self.warnings(raw).iter().map(|w| w.event).collect()
    }

    pub fn report(&self, raw: &str) -> WarningReport {
        self.engine().check(raw, RenderOptions::default()).unwrap()
    }

    /// The single warning raised for `event`.
    pub fn only(&self, raw: &str, event: WarningEvent) -> RaisedWarning {
        let mut matching: Vec<_> = self
            .warnings(raw)
            .into_iter()
            .filter(|w| w.event == event)
            .collect();
        assert_eq!(matching.len(), 1, "expected one {event} for {raw}");
        matching.remove(0)
    }
}

fn term(code: &str, name: &str, term_type: TermType, level: DetailLevel) -> Term {
    Term::new(code, name, term_type, level)
}

fn raw(code: &str, name: &str) -> Term {
    term(code, name, TermType::RawCommodity, DetailLevel::Core)
}

fn derivative(code: &str, name: &str) -> Term {
    term(code, name, TermType::Derivative, DetailLevel::Core)
}

fn facet(code: &str, name: &str) -> Term {
    term(code, name, TermType::Facet, DetailLevel::Core)
}

/// Place a base term in the master, reporting and exposure hierarchies.
fn food(catalogue: MemoryCatalogue, term: Term, parent: Option<&str>) -> MemoryCatalogue {
    let code = term.code.clone();
    catalogue
        .with_term(term)
        .with_placement(&code, "master", parent)
        .with_placement(&code, "report", parent)
        .with_placement(&code, "expo", parent)
}

pub fn catalogue() -> MemoryCatalogue {
    let catalogue = MemoryCatalogue::new("master")
        .with_hierarchy(Hierarchy::new("report", "Reporting"))
        .with_hierarchy(Hierarchy::new("expo", "Exposure"))
        .with_hierarchy(Hierarchy::new("feed", "Feed"))
        .with_hierarchy(Hierarchy::new("process", "Process"))
        .with_hierarchy(Hierarchy::new("ingred", "Ingredient"))
        .with_hierarchy(Hierarchy::new("source", "Source"))
        .with_hierarchy(Hierarchy::new("racsource", "Source commodities"))
        .with_attribute(Attribute::new("F28", "process", "process"))
        .with_attribute(Attribute::new("F04", "ingred", "ingred"))
        .with_attribute(Attribute::new("F01", "source", "source"))
        .with_attribute(Attribute::new("F27", "racsource", "racsource"));

    // Processes
    let catalogue = catalogue
        .with_term(term("PROC", "Processed", TermType::Facet, DetailLevel::Hierarchy))
        .with_placement("PROC", "process", None);
    let catalogue = [
        ("MILL", "Milling", "PROC"),
        ("P1", "Pressing", "PROC"),
        ("P2", "Extracting", "PROC"),
        ("HEAT", "Heat treatment", "PROC"),
        ("BOIL", "Boiling", "HEAT"),
        ("SIMMER", "Simmering", "BOIL"),
        ("FRY", "Frying", "HEAT"),
        ("DRY", "Drying", "PROC"),
        ("A07XS", "Processed (generic)", "PROC"),
        ("A07MR", "Reconstitution", "PROC"),
    ]
    .into_iter()
    .fold(catalogue, |catalogue, (code, name, parent)| {
        catalogue
            .with_term(facet(code, name))
            .with_placement(code, "process", Some(parent))
    });

    // Ingredients, sources and source commodities
    let catalogue = catalogue
        .with_term(facet("SALTS", "Salts"))
        .with_term(facet("SEASALT", "Sea salt"))
        .with_term(facet("SUGAR", "Sugar"))
        .with_placement("SALTS", "ingred", None)
        .with_placement("SEASALT", "ingred", Some("SALTS"))
        .with_placement("SUGAR", "ingred", None)
        .with_term(facet("COW", "Cattle"))
        .with_placement("COW", "source", None)
        .with_term(term("CEREAL", "Cereals", TermType::Facet, DetailLevel::Hierarchy))
        .with_term(facet("SCWHT", "Wheat (source commodity)"))
        .with_term(facet("SCRYE", "Rye (source commodity)"))
        .with_placement("CEREAL", "racsource", None)
        .with_placement("SCWHT", "racsource", Some("CEREAL"))
        .with_placement("SCRYE", "racsource", Some("CEREAL"));

    // Foods
    let catalogue = food(catalogue, raw("A0DPP", "Apples"), None);
    let catalogue = food(
        catalogue,
        term("GRAIN", "Grains", TermType::RawCommodity, DetailLevel::Hierarchy),
        None,
    );
    let catalogue = food(catalogue, raw("WHEAT", "Wheat grain"), Some("GRAIN"));
    let catalogue = food(catalogue, raw("SPELT", "Spelt grain"), Some("WHEAT"));
    let catalogue = food(catalogue, derivative("FLOUR", "Wheat flour"), Some("WHEAT"));
    let catalogue = food(catalogue, derivative("PORRIDGE", "Porridge"), Some("GRAIN"));
    let catalogue = food(catalogue, derivative("STARCH", "Starch"), Some("GRAIN"));
    let catalogue = food(catalogue, derivative("PRESSED", "Pressed grain"), Some("GRAIN"));
    let catalogue = food(catalogue, derivative("BREAD", "Salted bread"), Some("GRAIN"));
    let catalogue = food(
        catalogue,
        derivative("SWEETBREAD", "Flavoured sweet bread"),
        Some("GRAIN"),
    );
    let catalogue = food(
        catalogue,
        term("CEREALNS", "Cereals, not specified", TermType::RawCommodity, DetailLevel::NonSpecific),
        Some("GRAIN"),
    );
    let catalogue = food(
        catalogue,
        term("PIZZA", "Pizza", TermType::Composite, DetailLevel::Core),
        None,
    );
    let catalogue = food(
        catalogue,
        derivative("CONC", "Orange juice concentrate"),
        None,
    );

    catalogue
        .with_implicit_facet("FLOUR", FacetRef::new("F28", "MILL"))
        .with_implicit_facet("FLOUR", FacetRef::new("F27", "SCWHT"))
        .with_implicit_facet("PORRIDGE", FacetRef::new("F28", "BOIL"))
        .with_implicit_facet("PRESSED", FacetRef::new("F28", "P1"))
        .with_implicit_facet("BREAD", FacetRef::new("F04", "SALTS"))
        // Reporting only, outside exposure
        .with_term(term("ODDGROUP", "Odd group", TermType::RawCommodity, DetailLevel::Hierarchy))
        .with_placement("ODDGROUP", "report", None)
        // Feed only
        .with_term(raw("HAY", "Hay"))
        .with_placement("HAY", "feed", None)
}
