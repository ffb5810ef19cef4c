//! HTTP API handlers for albums-api

pub mod albums;
pub mod buildinfo;
pub mod health;
pub mod json;

pub use albums::{create_album, get_album, list_albums};
pub use buildinfo::get_build_info;
pub use health::health_routes;
pub use json::PrettyJson;
