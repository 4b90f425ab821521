use std::ffi::OsStr;
use std::path::Path;

/// Directory names pruned when ignored entries are skipped
pub const IGNORED_DIRS: &[&str] = &[
    "venv",
    ".venv",
    "env",
    "virtualenv",
    "__pycache__",
    "node_modules",
];

/// Return true if the path names an existing file whose name ends in `.json`, ignoring case
pub fn is_json_file(path: &Path) -> bool {
    path.is_file() && path.file_name().is_some_and(has_json_suffix)
}

/// Case-insensitive `.json` suffix check on a bare file name
pub fn has_json_suffix(name: &OsStr) -> bool {
    name.to_string_lossy().to_lowercase().ends_with(".json")
}

/// Hidden entries and well-known environment/cache directories
pub fn is_ignored(name: &OsStr) -> bool {
    let name = name.to_string_lossy();
    name.starts_with('.') || IGNORED_DIRS.contains(&name.as_ref())
}
