//! Domain models for the stub quote server.
//!
//! - `quote` — synthetic quote replies and their line encoding.
//! - `mode` — how the server answers a request.

pub mod mode;
pub mod quote;
