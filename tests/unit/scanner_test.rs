use std::fs;
use std::path::Path;
use tempfile::TempDir;

use jsoncheck::{find_json_files, scan, ScanConfig, ScanError};

fn write(dir: &Path, name: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, "{}").unwrap();
}

fn names(root: &Path, files: &[std::path::PathBuf]) -> Vec<String> {
    files
        .iter()
        .map(|f| f.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
        .collect()
}

#[test]
fn test_find_json_files_nonrecursive() {
    let td = TempDir::new().unwrap();
    write(td.path(), "a.json");
    write(td.path(), "b.Json");
    write(td.path(), "c.txt");
    write(td.path(), "sub/d.json");

    let files = scan(td.path(), false).unwrap();
    assert_eq!(names(td.path(), &files), vec!["a.json", "b.Json"]);
}

#[test]
fn test_find_json_files_recursive() {
    let td = TempDir::new().unwrap();
    write(td.path(), "z.json");
    write(td.path(), "sub/b.json");
    write(td.path(), "sub/a.json");
    write(td.path(), "sub/inner/c.JSON");
    write(td.path(), "sub/inner/readme.md");

    let files = scan(td.path(), true).unwrap();
    assert_eq!(
        names(td.path(), &files),
        vec!["sub/a.json", "sub/b.json", "sub/inner/c.JSON", "z.json"]
    );
}

#[test]
fn test_scan_order_is_stable() {
    let td = TempDir::new().unwrap();
    for name in ["m.json", "a.json", "x/y.json", "q.json"] {
        write(td.path(), name);
    }

    let first = scan(td.path(), true).unwrap();
    let second = scan(td.path(), true).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_top_level_order_matches_recursive_order() {
    let td = TempDir::new().unwrap();
    for name in ["c.json", "a.json", "b.json"] {
        write(td.path(), name);
    }

    assert_eq!(scan(td.path(), false).unwrap(), scan(td.path(), true).unwrap());
}

#[test]
fn test_skip_ignored_option() {
    let td = TempDir::new().unwrap();
    write(td.path(), "keep.json");
    write(td.path(), "venv/lib/site.json");
    write(td.path(), "__pycache__/cache.json");

    let config = ScanConfig::new(td.path()).with_skip_ignored(true);
    let files = find_json_files(&config).unwrap();
    assert_eq!(names(td.path(), &files), vec!["keep.json"]);
}

#[test]
fn test_nonexistent_root_is_an_error() {
    let td = TempDir::new().unwrap();
    let err = scan(&td.path().join("missing"), true).unwrap_err();
    assert!(matches!(err, ScanError::NotFound { .. }));
    assert!(err.to_string().contains("does not exist"));
}
