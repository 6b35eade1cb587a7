//! copyjobs binary entry point

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use copyjobs::commands;
use copyjobs::config::{Cli, Config};
use copyjobs::logger::RunLog;
use copyjobs::types::RunOutcome;

const EXIT_ABORTED: u8 = 2;

fn main() -> anyhow::Result<ExitCode> {
    let config = Config::from(Cli::parse());

    let log = RunLog::create(&config.log_file)
        .with_context(|| format!("failed to open log file {}", config.log_file.display()))?;

    match commands::run::run(&config, &log) {
        RunOutcome::Completed(_) => Ok(ExitCode::SUCCESS),
        RunOutcome::Aborted(_) => Ok(ExitCode::from(EXIT_ABORTED)),
    }
}
