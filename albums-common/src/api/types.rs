//! Shared API response types
//!
//! The catalog reports failures with two envelope shapes: `{"error": ...}` for
//! rejected request bodies and `{"message": ...}` for lookups that miss.

use serde::{Deserialize, Serialize};

// ========================================
// Error Response Types
// ========================================

/// Error envelope for requests whose body could not be accepted
///
/// # Examples
///
/// ```
/// use albums_common::api::types::ErrorResponse;
///
/// let body = ErrorResponse::invalid_json();
/// assert_eq!(body.error, "Invalid JSON");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error text
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    /// Body returned for malformed album payloads
    pub fn invalid_json() -> Self {
        Self::new("Invalid JSON")
    }
}

/// Message envelope for lookups with no result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Body returned when no album matches the requested id
    pub fn album_not_found() -> Self {
        Self::new("album not found")
    }
}

// ========================================
// Tests
// ========================================
