//! Stub quote server binary.
//!
//! Listens on TCP and answers every `"<SYM>,<user>\n"` request according to the
//! selected mode. Useful as a local target for `quote_loadgen`:
//!
//! ```bash
//! quote_stub --port 4440 --mode quote
//! quote_loadgen --host 127.0.0.1 --port 4440 --delay 50 --length 10
//! ```
mod args;

use crate::args::Args;
use clap::Parser;
use log::error;
use quote_common::net::addr;
use quote_stub::StubServer;

fn main() {
    init_logger();
    let args = Args::parse();

    let result = StubServer::bind(addr(&args.bind, args.port), args.mode)
        .and_then(StubServer::serve);
    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
