//! Fixed-rate load generator for a plaintext TCP quote server.
//!
//! Every `delay` a new connection is opened, a random `"<SYM>,<user>\n"` request
//! is written and one response is read and printed. After `length` the number
//! of requests sent and quotes received is reported. Any connection, I/O or
//! deadline failure aborts the whole run.
//!
//! Modules:
//! - `args` — command-line interface (`clap`).
//! - `config` — immutable run configuration.
//! - `resolver` — one-shot endpoint resolution.
//! - `request` — the per-tick `RequestTask`.
//! - `stats` — lock-free counters and the final summary.
//! - `dispatcher` — pacing timer, expiry timer and the run loop.
#![warn(missing_docs)]
pub mod args;
pub mod config;
pub mod dispatcher;
pub mod request;
pub mod resolver;
pub mod stats;

pub use config::Config;
pub use dispatcher::Dispatcher;
pub use stats::{ReportFormat, Stats, StatsSnapshot};
