use std::io::Write;

use field_comparator::ComparatorConfig;
use pretty_assertions::assert_eq;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
edit_cost = 12

[selectors]
container = ".course-field"
"#
    )
    .unwrap();

    let config = ComparatorConfig::load(file.path()).unwrap();

    assert_eq!(config.edit_cost, 12);
    assert_eq!(config.selectors.container, ".course-field");
    assert_eq!(config.selectors.current, "span.object");
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = ComparatorConfig::load(&dir.path().join("missing.toml")).unwrap_err();

    assert!(err.to_string().contains("failed to read config file"));
}

#[test]
fn test_invalid_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "edit_cost = \"eight\"").unwrap();

    let err = ComparatorConfig::load(file.path()).unwrap_err();

    assert!(format!("{:#}", err).contains("invalid comparator configuration"));
}
