//! Console reporting for a validation run
//!
//! The [`Reporter`] drives the scan, validates each file in scan order and
//! writes one line per file as it completes, followed by a summary block.

pub mod summary;

use std::io::{self, Write};
use std::time::Instant;

use console::style;
use tracing::debug;

use crate::config::ScanConfig;
use crate::parser::{self, directory, ValidationResult};

pub use summary::ValidationSummary;

/// Width of the `=` separator framing the summary block
pub const SEPARATOR_WIDTH: usize = 60;

/// Writes validation progress and the final summary to an output sink
pub struct Reporter<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> Reporter<W> {
    /// Create a reporter with plain (uncolored) output
    pub fn new(out: W) -> Self {
        Self { out, color: false }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Scan `config.root`, validate every file found and print the report.
    ///
    /// A scan failure is reported and recorded in the summary rather than
    /// returned; the error side only covers writes to the output sink.
    pub fn run(&mut self, config: &ScanConfig) -> io::Result<ValidationSummary> {
        let started = Instant::now();
        let mut summary = ValidationSummary::new(config.root.clone());

        self.write_header(config)?;

        match directory::find_json_files(config) {
            Ok(files) => {
                for path in files {
                    let result = parser::validate_file(&path);
                    self.write_result(&result)?;
                    summary.record(result);
                }
            }
            Err(e) => {
                debug!(root = %config.root.display(), error = %e, "scan failed");
                writeln!(self.out, "Error scanning directory: {}", e)?;
                summary.scan_failed(e.to_string());
            }
        }

        self.write_summary(&summary)?;
        self.out.flush()?;

        debug!(
            total = summary.total(),
            valid = summary.valid(),
            invalid = summary.invalid(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "validation finished"
        );

        Ok(summary)
    }

    fn write_header(&mut self, config: &ScanConfig) -> io::Result<()> {
        writeln!(self.out, "Validating JSON files in: {}", config.root.display())?;
        writeln!(self.out, "{}", config.mode_description())?;
        writeln!(self.out)
    }

    fn write_result(&mut self, result: &ValidationResult) -> io::Result<()> {
        match result.error() {
            None => writeln!(self.out, "{} {}", self.ok_marker(), result.path().display()),
            Some(error) => {
                writeln!(self.out, "{} {}", self.fail_marker(), result.path().display())?;
                writeln!(self.out, "  Error: {}", error)
            }
        }
    }

    fn write_summary(&mut self, summary: &ValidationSummary) -> io::Result<()> {
        let separator = "=".repeat(SEPARATOR_WIDTH);

        writeln!(self.out)?;
        writeln!(self.out, "{}", separator)?;
        writeln!(self.out, "VALIDATION SUMMARY")?;
        writeln!(self.out, "{}", separator)?;
        writeln!(self.out, "Directory: {}", summary.directory().display())?;
        writeln!(self.out, "Total JSON files: {}", summary.total())?;
        writeln!(self.out, "Valid files: {}", summary.valid())?;
        writeln!(self.out, "Invalid files: {}", summary.invalid())?;

        if summary.invalid() > 0 {
            writeln!(self.out)?;
            writeln!(self.out, "Invalid files:")?;
            for result in summary.invalid_results() {
                writeln!(self.out, "  - {}", result.path().display())?;
                if let Some(message) = result.error_message() {
                    writeln!(self.out, "    {}", message)?;
                }
            }
        }

        writeln!(self.out, "{}", separator)
    }

    fn ok_marker(&self) -> String {
        if self.color {
            style("✓").green().force_styling(true).to_string()
        } else {
            "✓".to_string()
        }
    }

    fn fail_marker(&self) -> String {
        if self.color {
            style("✗").red().force_styling(true).to_string()
        } else {
            "✗".to_string()
        }
    }

    /// Give back the output sink
    pub fn into_inner(self) -> W {
        self.out
    }
}
