//! Stub quote server.
//!
//! Speaks the plaintext quote protocol over TCP so the load generator can be
//! exercised locally and in tests without the real quote server:
//! - `server` — `StubServer`, a thread-per-connection accept loop.
//! - `model` — reply `Mode`s and the synthetic `Quote` line.
#![warn(missing_docs)]
pub mod model;
pub mod server;

pub use model::mode::Mode;
pub use server::StubServer;
