//! Aggregated outcome of a validation run

use std::path::{Path, PathBuf};

use crate::parser::ValidationResult;

/// Counts and failures for one scanned directory
#[derive(Debug)]
pub struct ValidationSummary {
    directory: PathBuf,
    total: usize,
    valid: usize,
    invalid: usize,
    invalid_results: Vec<ValidationResult>,
    scan_error: Option<String>,
}

impl ValidationSummary {
    /// Create an empty summary for `directory`
    pub fn new(directory: PathBuf) -> Self {
        Self {
            directory,
            total: 0,
            valid: 0,
            invalid: 0,
            invalid_results: Vec::new(),
            scan_error: None,
        }
    }

    /// Count a result, keeping invalid ones in arrival order
    pub fn record(&mut self, result: ValidationResult) {
        self.total += 1;
        if result.is_valid() {
            self.valid += 1;
        } else {
            self.invalid += 1;
            self.invalid_results.push(result);
        }
    }

    /// Mark the run as aborted because the directory could not be scanned
    pub fn scan_failed(&mut self, error: String) {
        self.scan_error = Some(error);
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn valid(&self) -> usize {
        self.valid
    }

    pub fn invalid(&self) -> usize {
        self.invalid
    }

    pub fn invalid_results(&self) -> &[ValidationResult] {
        &self.invalid_results
    }

    pub fn scan_error(&self) -> Option<&str> {
        self.scan_error.as_deref()
    }

    /// True when the scan worked and every discovered file parsed
    pub fn is_success(&self) -> bool {
        self.scan_error.is_none() && self.invalid == 0
    }
}
