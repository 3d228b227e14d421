//! Command-line arguments for the stub quote server.
use clap::Parser;
use quote_common::net::DEFAULT_PORT;

use quote_stub::Mode;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about = "Stub quote server for local load tests", long_about = None)]
pub struct Args {
    /// Address to bind the listening socket to.
    #[arg(long, default_value = "0.0.0.0")]
    pub bind: String,

    /// TCP port to listen on.
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// How requests are answered.
    #[arg(long, value_enum, default_value_t = Mode::Quote)]
    pub mode: Mode,
}
