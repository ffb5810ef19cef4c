//! Domain models

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Error, Result};

/// A single album record
///
/// `id` is meant to identify the album but uniqueness is never checked.
/// `year` carries no range validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub id: i64,
    pub title: String,
    pub artist: String,
    pub year: i64,
}

impl Album {
    pub fn new(id: i64, title: impl Into<String>, artist: impl Into<String>, year: i64) -> Self {
        Self {
            id,
            title: title.into(),
            artist: artist.into(),
            year,
        }
    }

    /// Validate an untyped JSON payload into an album
    ///
    /// All four fields must be present with the right primitive type.
    /// Unknown fields are ignored. Empty strings and duplicate ids are accepted.
    pub fn from_payload(payload: &Value) -> Result<Self> {
        Album::deserialize(payload).map_err(|e| Error::InvalidInput(e.to_string()))
    }
}

/// The records every fresh catalog starts with, in display order
pub fn seed_albums() -> Vec<Album> {
    vec![
        Album::new(1, "Abbey Road", "The Beatles", 1969),
        Album::new(2, "The Dark Side of the Moon", "Pink Floyd", 1973),
        Album::new(3, "Thriller", "Michael Jackson", 1982),
        Album::new(4, "Back in Black", "AC/DC", 1980),
    ]
}
