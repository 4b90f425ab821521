//! JSON file discovery and syntax validation

pub mod directory;
pub mod filter;

use std::path::{Path, PathBuf};

use serde::de::IgnoredAny;
use serde::Deserialize;
use tracing::debug;

use crate::error::{FileError, ParseError, ParseResult};

/// Outcome of validating a single file.
///
/// An error is present if and only if the file is invalid; the constructors are
/// the only way to build one.
#[derive(Debug)]
pub struct ValidationResult {
    path: PathBuf,
    error: Option<FileError>,
}

impl ValidationResult {
    pub fn valid(path: PathBuf) -> Self {
        Self { path, error: None }
    }

    pub fn invalid(path: PathBuf, error: FileError) -> Self {
        Self {
            path,
            error: Some(error),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    pub fn error(&self) -> Option<&FileError> {
        self.error.as_ref()
    }

    /// Human-readable failure reason, absent for valid files
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }
}

/// Read `path` and check that its content is a well-formed JSON document.
///
/// Never fails: read and parse problems are captured in the returned result.
pub fn validate_file(path: &Path) -> ValidationResult {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "read failed");
            return ValidationResult::invalid(path.to_path_buf(), FileError::Read(e));
        }
    };

    match parse_json_bytes(&bytes) {
        Ok(_) => ValidationResult::valid(path.to_path_buf()),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "parse failed");
            ValidationResult::invalid(path.to_path_buf(), e.into())
        }
    }
}

/// Check that raw bytes hold exactly one well-formed JSON document.
///
/// Nesting depth is unbounded: the recursion limit is lifted and the stack
/// grows on demand. Values are skipped rather than built.
pub fn parse_json_bytes(bytes: &[u8]) -> ParseResult<()> {
    let text = std::str::from_utf8(bytes).map_err(|e| invalid_utf8(bytes, &e))?;

    let mut de = serde_json::Deserializer::from_str(text);
    de.disable_recursion_limit();

    IgnoredAny::deserialize(serde_stacker::Deserializer::new(&mut de))
        .map_err(|e| ParseError::from_serde(&e))?;
    de.end().map_err(|e| ParseError::from_serde(&e))
}

fn invalid_utf8(bytes: &[u8], error: &std::str::Utf8Error) -> ParseError {
    let valid = &bytes[..error.valid_up_to()];
    let line = valid.iter().filter(|&&b| b == b'\n').count() + 1;
    let line_start = valid.iter().rposition(|&b| b == b'\n').map_or(0, |p| p + 1);
    let column = valid.len() - line_start + 1;

    ParseError::new("invalid UTF-8 in input".to_string(), Some((line, column)))
}
