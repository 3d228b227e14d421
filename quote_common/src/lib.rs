//!
//! Common types and utilities shared by the load generator and the stub quote server.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError` used across the workspace.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `symbol` — the three-letter synthetic ticker sent in every request.
//! - `protocol` — request line formatting and response cleaning.
//! - `net` — networking defaults and small helpers.
#![warn(missing_docs)]
pub mod error;
pub mod net;
pub mod protocol;
pub mod result;
pub mod symbol;

pub use error::{QuoteError, Stage};
pub use result::Result;
pub use symbol::Symbol;
