//! Command-line arguments for the load generator.
//!
//! `-h` selects the host, so clap's short help flag is disabled and help is
//! available as `--help` only.
use std::time::Duration;

use clap::{ArgAction, Parser};
use quote_common::net::{DEFAULT_HOST, DEFAULT_PORT};

use crate::config::{Config, DEFAULT_DELAY_MS, DEFAULT_LENGTH_SECS};
use crate::stats::ReportFormat;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "quote_loadgen",
    version,
    about = "Requests quotes at a fixed rate",
    long_about = None,
    disable_help_flag = true
)]
pub struct Args {
    /// Quote server host address.
    #[arg(short = 'h', long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to make requests from the quote server.
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Delay between quote requests, in ms.
    #[arg(
        short,
        long,
        value_name = "MS",
        default_value_t = DEFAULT_DELAY_MS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub delay: u64,

    /// How long to request quotes, in sec.
    #[arg(
        short,
        long,
        value_name = "SECONDS",
        default_value_t = DEFAULT_LENGTH_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub length: u64,

    /// Wait for in-flight requests to finish before printing the summary.
    /// Closes the race between late requests and the report.
    #[arg(long)]
    pub drain: bool,

    /// Print the summary as a single JSON object.
    #[arg(long)]
    pub json: bool,

    /// Print help.
    #[arg(long, action = ArgAction::Help)]
    #[allow(dead_code)]
    help: Option<bool>,
}

impl Args {
    /// Freeze the arguments into a run configuration.
    pub fn into_config(self) -> Config {
        Config {
            host: self.host,
            port: self.port,
            delay: Duration::from_millis(self.delay),
            length: Duration::from_secs(self.length),
            drain: self.drain,
            report: if self.json {
                ReportFormat::Json
            } else {
                ReportFormat::Human
            },
            ..Config::default()
        }
    }
}
