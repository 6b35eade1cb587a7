//! CLI definition and runtime configuration

use std::path::PathBuf;

use clap::Parser;

/// Copy files listed in an XML manifest
#[derive(Parser, Debug)]
#[command(name = "copyjobs", version)]
pub struct Cli {
    /// Path to the XML manifest
    #[arg(short, long, value_name = "FILE", default_value = "config.xml")]
    pub config: PathBuf,

    /// Path to the run log file
    #[arg(short, long, value_name = "FILE", default_value = "copyjobs.log")]
    pub log_file: PathBuf,
}

/// Resolved settings for one run
#[derive(Debug, Clone)]
pub struct Config {
    /// XML manifest listing the copy jobs
    pub manifest: PathBuf,
    /// File the run log is appended to
    pub log_file: PathBuf,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            manifest: cli.config,
            log_file: cli.log_file,
        }
    }
}
