use std::io::Write;

use foodex_model::{FacetRef, KnowledgeBase, MemoryCatalogue, ModelError};

const SNAPSHOT: &str = r#"{
    "master_hierarchy": "master",
    "hierarchies": [
        { "code": "report", "name": "Reporting hierarchy" },
        { "code": "expo", "name": "Exposure hierarchy" },
        { "code": "process", "name": "Process facet hierarchy" }
    ],
    "attributes": [
        { "index": "F28", "name": "process", "hierarchy": "process" }
    ],
    "terms": [
        { "code": "A000L", "name": "Grains and grain-based products", "term_type": "r",
          "detail_level": "H", "placements": { "master": null, "report": null, "expo": null } },
        { "code": "A004V", "name": "Wheat flour", "term_type": "d",
          "placements": { "master": "A000L", "expo": "A000L" },
          "implicit_facets": ["F28.A07LG"] },
        { "code": "A07LG", "name": "Milling", "term_type": "f",
          "placements": { "process": null } }
    ]
}"#;

#[test]
fn loads_snapshot_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SNAPSHOT.as_bytes()).unwrap();

    let catalogue = MemoryCatalogue::load(file.path()).unwrap();
    assert_eq!(catalogue.len(), 3);

    let flour = catalogue.term_by_code("A004V").unwrap();
    assert!(flour.is_derivative());
    assert!(catalogue.belongs_to(&flour, "expo"));
    assert!(!catalogue.belongs_to(&flour, "report"));

    let process = catalogue.attribute_category_by_index("F28").unwrap();
    assert_eq!(
        catalogue.inherited_implicit_facets(&flour, &process),
        vec![FacetRef::new("F28", "A07LG")]
    );
}

#[test]
fn missing_snapshot_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = MemoryCatalogue::load(&dir.path().join("absent.json"));
    assert!(matches!(result, Err(ModelError::Io { .. })));
}

#[test]
fn unknown_top_level_keys_are_rejected() {
    let result = MemoryCatalogue::from_json_str(r#"{ "termz": [] }"#);
    assert!(matches!(result, Err(ModelError::Json(_))));
}
