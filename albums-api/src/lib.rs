//! albums-api library - in-memory album catalog over HTTP
//!
//! Serves list, create, and lookup of album records held by an [`AlbumStore`].

use std::sync::Arc;

use axum::Router;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod api;
pub mod error;
pub mod store;

pub use error::StoreError;
pub use store::AlbumStore;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// The album collection, shared by every request
    pub store: Arc<AlbumStore>,
}

impl AppState {
    /// Create new application state
    pub fn new(store: AlbumStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/albums", get(api::list_albums).post(api::create_album))
        .route("/albums/:id", get(api::get_album))
        .route("/build_info", get(api::get_build_info))
        .merge(api::health_routes())
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
