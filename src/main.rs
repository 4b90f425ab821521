use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use jsoncheck::cli::{Args, CliConfig, CliUtils};
use jsoncheck::error::CliError;
use jsoncheck::logging::init_logging;
use jsoncheck::report::Reporter;

/// Exit status for a missing directory argument
const USAGE_EXIT: u8 = 2;

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    init_logging(args.verbose);

    let config = match CliConfig::from_args(args) {
        Ok(config) => config,
        Err(CliError::MissingDirectory) => {
            CliUtils::print_usage().context("failed to print usage")?;
            println!();
            return Ok(ExitCode::from(USAGE_EXIT));
        }
    };

    debug!(config = ?config.scan_config, "starting validation");

    let stdout = io::stdout();
    let mut reporter = Reporter::new(stdout.lock()).with_color(config.use_color());
    let summary = reporter
        .run(&config.scan_config)
        .context("failed to write report")?;

    if summary.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
