//! Album endpoints
//!
//! GET /albums, POST /albums, GET /albums/:id

use albums_common::Album;
use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
};
use serde_json::Value;
use tracing::{debug, warn};

use super::json::PrettyJson;
use crate::error::StoreError;
use crate::AppState;

/// GET /albums
///
/// Every album in insertion order.
pub async fn list_albums(State(state): State<AppState>) -> PrettyJson<Vec<Album>> {
    PrettyJson(state.store.list_all().await)
}

/// POST /albums
///
/// The body is read as raw bytes whatever the `Content-Type`. Anything that is
/// not a JSON album (unreadable body, invalid JSON, wrong shape) is a 400.
pub async fn create_album(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, PrettyJson<Album>), StoreError> {
    let body = body.map_err(|e| {
        warn!("Could not read album request body: {}", e);
        StoreError::MalformedInput(e.to_string())
    })?;

    let candidate: Value = serde_json::from_slice(&body).map_err(|e| {
        warn!("Album request body is not JSON: {}", e);
        StoreError::MalformedInput(e.to_string())
    })?;

    let album = state.store.append_new(&candidate).await?;
    Ok((StatusCode::CREATED, PrettyJson(album)))
}

/// GET /albums/:id
///
/// A segment that cannot be decoded as text (e.g. `%FF`) can name no album,
/// so it is a 404 like any other miss.
pub async fn get_album(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<PrettyJson<Album>, StoreError> {
    let Path(id) = id.map_err(|e| {
        debug!("Undecodable album id: {}", e);
        StoreError::NotFound(e.body_text())
    })?;

    state.store.find_by_id(&id).await.map(PrettyJson)
}
