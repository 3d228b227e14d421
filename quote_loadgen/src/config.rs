//! Immutable run configuration.
//!
//! Built once from the command line and shared read-only (behind an `Arc`) by
//! the dispatcher and every request task.
use std::time::Duration;

use quote_common::net::{DEFAULT_HOST, DEFAULT_PORT, addr};
use quote_common::protocol::USER_TAG;

use crate::stats::ReportFormat;

/// Default pause between two requests, in milliseconds.
pub const DEFAULT_DELAY_MS: u64 = 100;
/// Default run length, in seconds.
pub const DEFAULT_LENGTH_SECS: u64 = 60;
/// Absolute deadline for the write and read of a single request.
pub const IO_DEADLINE: Duration = Duration::from_secs(10);

/// Settings for one load test run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Quote server host name or IP.
    pub host: String,
    /// Quote server port.
    pub port: u16,
    /// Interval between two dispatched requests.
    pub delay: Duration,
    /// Total run length.
    pub length: Duration,
    /// Deadline for connect, and for write plus read, of each request.
    pub io_deadline: Duration,
    /// User tag sent with every request.
    pub user: String,
    /// Wait for in-flight requests before reporting.
    pub drain: bool,
    /// How the final summary is printed.
    pub report: ReportFormat,
}

impl Config {
    /// Configuration for `host:port` with the default pacing and deadline.
    pub fn new(host: &str, port: u16) -> Self {
        Config {
            host: host.to_string(),
            port,
            ..Config::default()
        }
    }

    /// Set the delay between requests.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Set the run length.
    pub fn with_length(mut self, length: Duration) -> Self {
        self.length = length;
        self
    }

    /// Set the per-request I/O deadline.
    pub fn with_io_deadline(mut self, io_deadline: Duration) -> Self {
        self.io_deadline = io_deadline;
        self
    }

    /// Enable or disable draining of in-flight requests before reporting.
    pub fn with_drain(mut self, drain: bool) -> Self {
        self.drain = drain;
        self
    }

    /// `host:port` of the quote server.
    pub fn target(&self) -> String {
        addr(&self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            length: Duration::from_secs(DEFAULT_LENGTH_SECS),
            io_deadline: IO_DEADLINE,
            user: USER_TAG.to_string(),
            drain: false,
            report: ReportFormat::Human,
        }
    }
}
