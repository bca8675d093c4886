use std::fs;

use foodex_rules::{MessageCatalog, RuleLoadError, RuleSet, Severity, WarningEvent};

#[test]
fn loads_rule_set_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("BR_Data.csv");
    fs::write(
        &path,
        "baseTermGroupCode;baseTermGroupName;forbiddenProcessCode;forbiddenProcessName;ordCode\n\
         A000L;Grains;A07LG;Milling;1\n\
         A000L;Grains;A07JS;Cooking;not-a-number\n",
    )
    .unwrap();

    let (set, summary) = RuleSet::load(&path).unwrap();
    assert_eq!(set.len(), 1);
    assert_eq!(summary.skipped, 1);
    assert!(summary.source.ends_with("BR_Data.csv"));
}

#[test]
fn missing_rule_set_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let result = RuleSet::load(&dir.path().join("absent.csv"));
    assert!(matches!(result, Err(RuleLoadError::FileNotFound { .. })));
}

#[test]
fn rule_set_without_valid_rows_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("BR_Data.csv");
    fs::write(&path, "h1;h2;h3;h4;h5\nA000L;Grains;A07LG;Milling;x\n").unwrap();
    assert!(matches!(
        RuleSet::load(&path),
        Err(RuleLoadError::Empty { skipped: 1, .. })
    ));
}

#[test]
fn header_only_exception_table_is_an_empty_set() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("BR_Exceptions.csv");
    fs::write(
        &path,
        "baseTermGroupCode;baseTermGroupName;forbiddenProcessCode;forbiddenProcessName;ordCode\n",
    )
    .unwrap();

    let (set, summary) = RuleSet::load(&path).unwrap();
    assert!(set.is_empty());
    assert_eq!(summary.loaded, 0);
    assert_eq!(summary.skipped, 0);
}

#[test]
fn message_table_falls_back_only_when_absent() {
    let dir = tempfile::tempdir().unwrap();

    let (catalog, summary) =
        MessageCatalog::load_or_default(&dir.path().join("warningMessages.txt")).unwrap();
    assert_eq!(catalog, MessageCatalog::default());
    assert_eq!(summary.source, "built-in");

    let empty = dir.path().join("empty.txt");
    fs::write(&empty, "").unwrap();
    assert!(matches!(
        MessageCatalog::load_or_default(&empty),
        Err(RuleLoadError::MissingHeader { .. })
    ));
}

#[test]
fn loads_message_table_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("warningMessages.txt");
    fs::write(
        &path,
        "messageId;triggerDescription;text;semaphoreLevel;textLevel\n\
         20;ok;All good;none;LOW\n",
    )
    .unwrap();

    let (catalog, _) = MessageCatalog::load(&path).unwrap();
    let def = catalog.resolve(WarningEvent::BaseTermSuccessfullyAdded);
    assert_eq!(def.template, "All good");
    assert_eq!(def.indicator, Severity::None);
    assert_eq!(def.text, Severity::Low);
}
