//! JSON syntax checker
//!
//! Scans a directory for `.json` files, parses each one and reports which are
//! well-formed and which are not, with a final tally.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod parser;
pub mod report;

use std::io::Write;

// Re-export commonly used types
pub use config::ScanConfig;
pub use error::{CliError, FileError, ParseError, ScanError};
pub use parser::directory::{find_json_files, scan};
pub use parser::{validate_file, ValidationResult};
pub use report::{Reporter, ValidationSummary};

/// Validate every JSON file under `directory`, writing the report to `out`
pub fn run<W: Write>(
    directory: impl Into<std::path::PathBuf>,
    recursive: bool,
    out: W,
) -> std::io::Result<ValidationSummary> {
    let config = ScanConfig::new(directory).with_recursive(recursive);
    Reporter::new(out).run(&config)
}
