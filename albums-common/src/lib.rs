//! # Albums Common Library
//!
//! Shared code for the album catalog service including:
//! - Domain model (`Album`)
//! - API response envelope types
//! - Bootstrap configuration loading
//! - Common error types

pub mod api;
pub mod config;
pub mod error;
pub mod models;

pub use error::{Error, Result};
pub use models::Album;
