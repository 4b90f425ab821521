use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::config::ScanConfig;
use crate::error::{ScanError, ScanResult};
use crate::parser::filter;

/// Find JSON files under `config.root`.
///
/// Both modes share one walk sorted by file name, so the order is stable for a
/// given filesystem state. Non-recursive scans stop at depth 1.
pub fn find_json_files(config: &ScanConfig) -> ScanResult<Vec<PathBuf>> {
    let root = &config.root;
    check_root(root)?;

    let mut walker = WalkDir::new(root).min_depth(1).sort_by_file_name();
    if !config.recursive {
        walker = walker.max_depth(1);
    }

    let skip_ignored = config.skip_ignored;
    let entries = walker
        .into_iter()
        .filter_entry(move |entry| {
            // the root itself may be hidden (e.g. `.`), only prune below it
            !(skip_ignored && entry.depth() > 0 && filter::is_ignored(entry.file_name()))
        });

    let mut json_files = Vec::new();
    for entry in entries {
        let entry = entry?;
        if entry.file_type().is_dir() || !filter::has_json_suffix(entry.file_name()) {
            continue;
        }
        // symlinks count when they resolve to a regular file
        if filter::is_json_file(entry.path()) {
            json_files.push(entry.into_path());
        }
    }

    debug!(
        root = %root.display(),
        recursive = config.recursive,
        found = json_files.len(),
        "scan complete"
    );

    Ok(json_files)
}

/// Scan with default options apart from the recursion flag
pub fn scan(root: &Path, recursive: bool) -> ScanResult<Vec<PathBuf>> {
    find_json_files(&ScanConfig::new(root).with_recursive(recursive))
}

fn check_root(root: &Path) -> ScanResult<()> {
    let metadata = fs::metadata(root).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ScanError::not_found(root.to_path_buf()),
        _ => ScanError::io(root.to_path_buf(), e),
    })?;

    if !metadata.is_dir() {
        return Err(ScanError::not_a_directory(root.to_path_buf()));
    }

    fs::read_dir(root).map_err(|e| ScanError::io(root.to_path_buf(), e))?;
    Ok(())
}
