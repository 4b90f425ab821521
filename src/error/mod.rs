//! Error types for directory scanning and per-file validation

use std::fmt;
use std::path::PathBuf;

/// Errors that prevent a directory from being scanned at all
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("directory '{}' does not exist", path.display())]
    NotFound { path: PathBuf },

    #[error("'{}' is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Walk(#[from] walkdir::Error),
}

impl ScanError {
    pub fn not_found(path: PathBuf) -> Self {
        Self::NotFound { path }
    }

    pub fn not_a_directory(path: PathBuf) -> Self {
        Self::NotADirectory { path }
    }

    pub fn io(path: PathBuf, source: std::io::Error) -> Self {
        Self::Io { path, source }
    }
}

/// Why a single file failed validation
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("Error reading file: {0}")]
    Read(#[source] std::io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// JSON parsing errors
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
    pub location: Option<(usize, usize)>,
}

impl ParseError {
    pub fn new(message: String, location: Option<(usize, usize)>) -> Self {
        Self { message, location }
    }

    /// Build from a serde_json error, splitting the position out of the message
    pub fn from_serde(error: &serde_json::Error) -> Self {
        let full = error.to_string();

        // serde_json reports line 0 for errors that carry no position
        if error.line() == 0 {
            return Self::new(full, None);
        }

        let suffix = format!(" at line {} column {}", error.line(), error.column());
        let message = full
            .strip_suffix(&suffix)
            .map(str::to_string)
            .unwrap_or(full);

        Self::new(message, Some((error.line(), error.column())))
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.location {
            Some((line, col)) => write!(
                f,
                "JSON decode error at line {}, column {}: {}",
                line, col, self.message
            ),
            None => write!(f, "JSON decode error: {}", self.message),
        }
    }
}

impl std::error::Error for ParseError {}

/// Problems with the command-line arguments themselves
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("No directory provided. Pass a directory path or use --dir")]
    MissingDirectory,
}

/// Convenience result type for scanning
pub type ScanResult<T> = Result<T, ScanError>;

/// Convenience result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;
