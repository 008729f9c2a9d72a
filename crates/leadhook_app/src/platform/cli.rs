use std::path::PathBuf;

use clap::Parser;

use super::logging::LogDestination;

/// Build job-search entries and POST them to a webhook to see what it returns.
#[derive(Debug, Parser)]
#[command(name = "leadhook", version, about)]
pub struct Args {
    /// Directory holding saved sets, saved webhooks and config.ron.
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Config file to use instead of <DATA_DIR>/config.ron.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Where log output goes.
    #[arg(long, value_enum)]
    pub log: Option<LogDestination>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}
