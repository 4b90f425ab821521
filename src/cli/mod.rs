//! Command-line interface module

use clap::{CommandFactory, Parser, ValueEnum};
use std::io;
use std::path::PathBuf;

use crate::config::ScanConfig;
use crate::error::CliError;

/// Main CLI arguments
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "jsoncheck")]
#[command(about = "Check that every JSON file in a directory is well-formed")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    /// Directory to scan for JSON files
    #[arg(value_name = "DIRECTORY", conflicts_with = "dir")]
    pub directory: Option<PathBuf>,

    /// Directory to scan for JSON files (same as the positional argument)
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Scan only the top-level directory (default: recursive)
    #[arg(long)]
    pub no_recursive: bool,

    /// Skip hidden entries and virtualenv, cache and node_modules directories
    #[arg(long)]
    pub skip_ignored: bool,

    /// When to color the ✓/✗ markers
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Enable verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// The directory to scan, from either the positional or the `--dir` form
    pub fn target(&self) -> Option<&PathBuf> {
        self.directory.as_ref().or(self.dir.as_ref())
    }
}

/// Color modes for CLI output
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Resolve `auto` by checking whether stdout is a terminal
    pub fn enabled(self) -> bool {
        match self {
            ColorChoice::Auto => console::Term::stdout().is_term(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub scan_config: ScanConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let root = args.target().cloned().ok_or(CliError::MissingDirectory)?;

        let scan_config = ScanConfig::new(root)
            .with_recursive(!args.no_recursive)
            .with_skip_ignored(args.skip_ignored);

        Ok(Self { args, scan_config })
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.args.verbose
    }

    /// Whether the report should use colored markers
    pub fn use_color(&self) -> bool {
        self.args.color.enabled()
    }
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Print usage text to stdout
    pub fn print_usage() -> io::Result<()> {
        Args::command().print_help()
    }
}
