use clap::Parser;
use huefetch_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Initialize logging as early as possible; fall back to stderr rather than abort.
    let log_path = cli.log_file.clone().unwrap_or_else(|| {
        let argv0 = std::env::args().next().unwrap_or_default();
        logging::log_path_for_program(&argv0)
    });
    if let Err(err) = logging::init_logging(&log_path) {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable ({:#}), using stderr", err);
    }

    if let Err(err) = cli.run() {
        tracing::error!("run aborted: {:#}", err);
        eprintln!("huefetch error: {:#}", err);
        std::process::exit(1);
    }
}
