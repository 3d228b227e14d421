//! Error types shared between the load generator and the stub server.
//!
//! The `QuoteError` enum unifies the failure cases of resolution, per-request
//! I/O, protocol parsing and channel communication, allowing crates to
//! propagate a single error type. Display strings name the failed operation and
//! its target so a fatal error fits on one diagnostic line.
use std::io;
use std::net::SocketAddr;

use strum::Display;
use thiserror::Error;

/// Step of a request at which an I/O operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Stage {
    /// Establishing the TCP connection.
    Connect,
    /// Writing the request line.
    Send,
    /// Reading the response.
    Read,
}

/// Unified error type shared by the workspace crates.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// I/O error originating from the standard library or sockets.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Host/port lookup failed.
    #[error("Could not resolve TCP addr for {addr}: {source}")]
    Resolve {
        /// The `host:port` string that was looked up.
        addr: String,
        /// Underlying resolver error.
        source: io::Error,
    },

    /// Lookup succeeded but produced no usable address.
    #[error("Could not resolve TCP addr for {0}: no addresses found")]
    NoAddress(String),

    /// Connecting to the quote server failed.
    #[error("Could not connect to {addr}: {source}")]
    Connect {
        /// Resolved endpoint.
        addr: SocketAddr,
        /// Underlying socket error.
        source: io::Error,
    },

    /// Writing the request line failed.
    #[error("Problem sending to {addr}: {source}")]
    Send {
        /// Resolved endpoint.
        addr: SocketAddr,
        /// Underlying socket error.
        source: io::Error,
    },

    /// Reading the response failed.
    #[error("Problem reading from {addr}: {source}")]
    Read {
        /// Resolved endpoint.
        addr: SocketAddr,
        /// Underlying socket error.
        source: io::Error,
    },

    /// The per-connection deadline elapsed before the operation completed.
    #[error("Deadline exceeded during {stage} with {addr}")]
    DeadlineExceeded {
        /// Step that was in progress.
        stage: Stage,
        /// Resolved endpoint.
        addr: SocketAddr,
    },

    /// A symbol that is not exactly three uppercase ASCII letters.
    #[error("Invalid symbol: {0:?}")]
    InvalidSymbol(String),

    /// Generic formatting/validation error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Channel receive failed (e.g., all senders dropped); contains a short context string.
    #[error("Channel receive failed: {0}")]
    ChannelRecv(String),
}

impl QuoteError {
    /// Classify a socket error raised at `stage`.
    ///
    /// Timeouts surface as `TimedOut` or, on some platforms, `WouldBlock` once a
    /// socket timeout is set; both become `DeadlineExceeded`.
    pub fn from_stage(stage: Stage, addr: SocketAddr, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => {
                QuoteError::DeadlineExceeded { stage, addr }
            }
            _ => match stage {
                Stage::Connect => QuoteError::Connect { addr, source },
                Stage::Send => QuoteError::Send { addr, source },
                Stage::Read => QuoteError::Read { addr, source },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint() -> SocketAddr {
        "127.0.0.1:4440".parse().unwrap()
    }

    #[test]
    fn timeouts_map_to_deadline_exceeded() {
        for kind in [io::ErrorKind::TimedOut, io::ErrorKind::WouldBlock] {
            let err = QuoteError::from_stage(Stage::Read, endpoint(), io::Error::from(kind));
            assert!(matches!(
                err,
                QuoteError::DeadlineExceeded {
                    stage: Stage::Read,
                    ..
                }
            ));
            assert_eq!(
                err.to_string(),
                "Deadline exceeded during read with 127.0.0.1:4440"
            );
        }
    }

    #[test]
    fn other_errors_keep_their_stage() {
        let refused = io::Error::from(io::ErrorKind::ConnectionRefused);
        let err = QuoteError::from_stage(Stage::Connect, endpoint(), refused);
        assert!(matches!(err, QuoteError::Connect { .. }));
        assert!(err.to_string().starts_with("Could not connect to 127.0.0.1:4440: "));

        let reset = io::Error::from(io::ErrorKind::ConnectionReset);
        let err = QuoteError::from_stage(Stage::Send, endpoint(), reset);
        assert!(err.to_string().starts_with("Problem sending to 127.0.0.1:4440: "));
    }

    #[test]
    fn stage_displays_lowercase() {
        assert_eq!(Stage::Connect.to_string(), "connect");
        assert_eq!(Stage::Send.to_string(), "send");
        assert_eq!(Stage::Read.to_string(), "read");
    }
}
