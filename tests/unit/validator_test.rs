use std::fs;
use tempfile::tempdir;

use jsoncheck::{run, validate_file, FileError};

#[test]
fn test_validate_file_valid_and_invalid() {
    let td = tempdir().unwrap();
    let good = td.path().join("good.json");
    let bad = td.path().join("bad.json");
    fs::write(&good, r#"{"users": [{"name": "Alice"}, {"name": "Bob"}]}"#).unwrap();
    fs::write(&bad, "{\"users\": [}").unwrap();

    let result = validate_file(&good);
    assert!(result.is_valid());
    assert!(result.error().is_none());

    let result = validate_file(&bad);
    assert!(!result.is_valid());
    assert!(matches!(result.error(), Some(FileError::Parse(_))));
    assert!(!result.error_message().unwrap().is_empty());
}

#[test]
fn test_unquoted_keys_are_invalid() {
    let td = tempdir().unwrap();
    let path = td.path().join("unquoted.json");
    fs::write(&path, "{ name: invalid }").unwrap();

    let result = validate_file(&path);
    assert!(!result.is_valid());
    assert!(result.error_message().unwrap().contains("key must be a string"));
}

#[test]
fn test_non_utf8_content_is_invalid() {
    let td = tempdir().unwrap();
    let path = td.path().join("binary.json");
    fs::write(&path, [0x22, 0xff, 0xfe, 0x22]).unwrap();

    assert!(!validate_file(&path).is_valid());
}

#[test]
fn test_run_totals_add_up() {
    let td = tempdir().unwrap();
    fs::write(td.path().join("a.json"), r#"{"x":1}"#).unwrap();
    fs::write(td.path().join("b.json"), "{bad}").unwrap();
    fs::write(td.path().join("c.txt"), "skip").unwrap();
    fs::create_dir_all(td.path().join("nested")).unwrap();
    fs::write(td.path().join("nested/d.json"), "[true, false]").unwrap();

    let mut out = Vec::new();
    let summary = run(td.path(), true, &mut out).unwrap();

    assert_eq!(summary.total(), 3);
    assert_eq!(summary.total(), summary.valid() + summary.invalid());
    assert_eq!(summary.invalid(), summary.invalid_results().len());
    assert_eq!(summary.invalid(), 1);
    assert!(!summary.is_success());

    let report = String::from_utf8(out).unwrap();
    assert!(report.contains("VALIDATION SUMMARY"));
}

#[test]
fn test_run_accepts_deep_nesting() {
    let td = tempdir().unwrap();
    fs::write(
        td.path().join("deep.json"),
        format!("{}{}", "[".repeat(200), "]".repeat(200)),
    )
    .unwrap();
    fs::write(
        td.path().join("deep_object.json"),
        format!("{}null{}", "{\"k\":".repeat(250), "}".repeat(250)),
    )
    .unwrap();

    let summary = run(td.path(), false, std::io::sink()).unwrap();
    assert_eq!(summary.total(), 2);
    assert_eq!(summary.valid(), 2);
    assert!(summary.is_success());
}
