//! Shared HTTP API types
//!
//! Framework-independent response envelopes. The service crate wraps these
//! in axum responses.

pub mod types;

pub use types::{ErrorResponse, MessageResponse};
