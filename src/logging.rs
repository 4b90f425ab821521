use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber. Logs go to stderr so stdout carries only the report.
pub fn init_logging(verbose: bool) {
    let filter_layer = EnvFilter::new(log_filter(verbose));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter_layer)
        .try_init();
}

fn log_filter(verbose: bool) -> &'static str {
    if verbose {
        "jsoncheck=debug"
    } else {
        "warn"
    }
}
