//! Quote Load Generator — opens a new TCP connection to the quote server at a fixed
//! rate, requests a quote for a random three-letter symbol, prints every reply to
//! stdout and, once the run length has elapsed, prints the totals to stderr.
//!
//! Usage example (CLI):
//! ```bash
//! quote_loadgen --host 127.0.0.1 --port 4440 --delay 100 --length 60
//! ```
//!
//! Any connection, I/O or deadline error ends the process with a single
//! diagnostic line and a non-zero exit status. Set `RUST_LOG=info` (or `debug`)
//! to follow the run on stderr.
use clap::Parser;
use log::{error, info};
use quote_common::Result;
use quote_loadgen::args::Args;
use quote_loadgen::resolver::resolve_endpoint;
use quote_loadgen::{Config, Dispatcher};
use std::io;
use std::process;

fn main() {
    init_logger();
    let config = Args::parse().into_config();

    if let Err(e) = run(config) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(config: Config) -> Result<()> {
    let endpoint = resolve_endpoint(&config.host, config.port)?;
    info!("Quote server {} resolved to {}", config.target(), endpoint);

    let report = config.report;
    let snapshot = Dispatcher::new(config, endpoint).run()?;
    snapshot.report(report, &mut io::stderr().lock())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}
