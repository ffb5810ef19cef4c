//! Error types for albums-api
//!
//! Two terminal failures exist per request: a payload that does not describe
//! an album, and a lookup that matches nothing. Neither escapes the request.

use albums_common::api::{ErrorResponse, MessageResponse};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::api::json::PrettyJson;

/// Album store errors
#[derive(Error, Debug)]
pub enum StoreError {
    /// Request body does not parse into the album shape
    #[error("Malformed album payload: {0}")]
    MalformedInput(String),

    /// No album matches the requested id
    #[error("Album not found: {0}")]
    NotFound(String),
}

impl StoreError {
    pub fn status(&self) -> StatusCode {
        match self {
            StoreError::MalformedInput(_) => StatusCode::BAD_REQUEST,
            StoreError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        // Parser details stay in the logs, clients get the fixed envelopes
        let status = self.status();
        match self {
            StoreError::MalformedInput(_) => {
                (status, PrettyJson(ErrorResponse::invalid_json())).into_response()
            }
            StoreError::NotFound(_) => {
                (status, PrettyJson(MessageResponse::album_not_found())).into_response()
            }
        }
    }
}
