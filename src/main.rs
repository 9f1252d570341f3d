use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use dashdock::cli::{self, CliArgs};
use dashdock::config::DashboardConfig;

// ============================================================================
// MAIN - Entry point
// ============================================================================

fn main() -> Result<ExitCode> {
    let args = CliArgs::parse();

    dashdock::tracing::init(args.verbose);

    let config = DashboardConfig::load();
    if cli::run(args.command, &config)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
