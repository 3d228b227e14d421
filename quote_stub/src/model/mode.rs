//! Reply behaviour of the stub server.
use clap::ValueEnum;
use strum::Display;

/// How the stub answers each request line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Display)]
#[clap(rename_all = "lower")]
#[strum(serialize_all = "lowercase")]
pub enum Mode {
    /// Reply with a synthetic quote `<price>,<SYM>,<user>,<timestamp>,<cryptokey>`.
    #[default]
    Quote,
    /// Reply with the request line itself, `<SYM>,<user>`.
    Echo,
    /// Read the request and never reply; holds the connection until the peer closes it.
    Silent,
}
