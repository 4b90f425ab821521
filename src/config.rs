//! Configuration options for a validation run

use std::path::PathBuf;

/// Options controlling which files a scan discovers
#[derive(Debug, Clone, PartialEq)]
pub struct ScanConfig {
    /// Directory to scan
    pub root: PathBuf,
    /// Descend into subdirectories
    pub recursive: bool,
    /// Prune hidden entries and virtualenv/cache directories
    pub skip_ignored: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            recursive: true,
            skip_ignored: false,
        }
    }
}

impl ScanConfig {
    /// Create a recursive configuration for `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn with_skip_ignored(mut self, skip_ignored: bool) -> Self {
        self.skip_ignored = skip_ignored;
        self
    }

    /// Short description of the traversal mode, used in the report header
    pub fn mode_description(&self) -> &'static str {
        if self.recursive {
            "(recursive scan)"
        } else {
            "(top-level only)"
        }
    }
}
