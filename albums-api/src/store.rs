//! In-memory album store
//!
//! Holds the album collection for the lifetime of the process. The collection
//! is an insertion-ordered `Vec` scanned linearly; it is only ever appended to.
//!
//! Access goes through a `tokio::sync::RwLock`: lookups share the lock,
//! appends take it exclusively for the push only.

use albums_common::models::{seed_albums, Album};
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::error::StoreError;

/// Owner of the album collection
#[derive(Debug, Default)]
pub struct AlbumStore {
    albums: RwLock<Vec<Album>>,
}

impl AlbumStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `albums` in the given order
    pub fn with_albums(albums: Vec<Album>) -> Self {
        Self {
            albums: RwLock::new(albums),
        }
    }

    /// Create a store holding the four startup records
    pub fn seeded() -> Self {
        Self::with_albums(seed_albums())
    }

    /// Snapshot of every album in insertion order
    ///
    /// The returned `Vec` is a copy; changing it never touches the store.
    pub async fn list_all(&self) -> Vec<Album> {
        self.albums.read().await.clone()
    }

    /// Validate `candidate` and append it to the end of the collection
    ///
    /// Duplicate ids are accepted. Validation happens before the write lock is
    /// taken, so a rejected payload never blocks readers.
    pub async fn append_new(&self, candidate: &Value) -> Result<Album, StoreError> {
        let album = Album::from_payload(candidate).map_err(|e| {
            warn!("Rejected album payload: {}", e);
            StoreError::MalformedInput(e.to_string())
        })?;

        let mut albums = self.albums.write().await;
        albums.push(album.clone());
        info!(
            "Added album {} \"{}\" ({} albums total)",
            album.id,
            album.title,
            albums.len()
        );

        Ok(album)
    }

    /// First album, in insertion order, whose id renders as exactly `id`
    ///
    /// `id` is the raw path segment and need not be numeric. The comparison is
    /// textual, so "05" does not match id 5.
    pub async fn find_by_id(&self, id: &str) -> Result<Album, StoreError> {
        let albums = self.albums.read().await;
        albums
            .iter()
            .find(|album| album.id.to_string() == id)
            .cloned()
            .ok_or_else(|| {
                debug!("No album with id {:?}", id);
                StoreError::NotFound(id.to_string())
            })
    }

    /// Number of albums held
    pub async fn len(&self) -> usize {
        self.albums.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.albums.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_seeded_list_all() {
        let store = AlbumStore::seeded();
        let albums = store.list_all().await;

        assert_eq!(albums.len(), 4);
        assert_eq!(albums[0], Album::new(1, "Abbey Road", "The Beatles", 1969));
        assert_eq!(
            albums[1],
            Album::new(2, "The Dark Side of the Moon", "Pink Floyd", 1973)
        );
        assert_eq!(albums[2], Album::new(3, "Thriller", "Michael Jackson", 1982));
        assert_eq!(albums[3], Album::new(4, "Back in Black", "AC/DC", 1980));
    }

    #[tokio::test]
    async fn test_list_all_returns_copy() {
        let store = AlbumStore::seeded();
        let mut albums = store.list_all().await;
        albums.clear();

        assert_eq!(store.len().await, 4);
    }

    #[tokio::test]
    async fn test_append_then_find() {
        let store = AlbumStore::seeded();
        let payload = json!({"id": 5, "title": "X", "artist": "Y", "year": 2000});

        let created = store.append_new(&payload).await.unwrap();
        assert_eq!(created, Album::new(5, "X", "Y", 2000));

        let found = store.find_by_id("5").await.unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn test_append_goes_to_end() {
        let store = AlbumStore::seeded();
        let before = store.len().await;
        let payload = json!({"id": 10, "title": "Ten", "artist": "Band", "year": 2010});

        let created = store.append_new(&payload).await.unwrap();
        let albums = store.list_all().await;

        assert_eq!(albums.len(), before + 1);
        assert_eq!(albums.last(), Some(&created));
    }

    #[tokio::test]
    async fn test_append_malformed_leaves_store_unchanged() {
        let store = AlbumStore::seeded();
        let payload = json!({"id": "not-an-int", "title": "X", "artist": "Y", "year": 2000});

        let err = store.append_new(&payload).await.unwrap_err();
        assert!(matches!(err, StoreError::MalformedInput(_)));
        assert_eq!(store.len().await, 4);
    }

    #[tokio::test]
    async fn test_append_missing_field_rejected() {
        let store = AlbumStore::new();
        let payload = json!({"id": 1, "title": "X", "artist": "Y"});

        let err = store.append_new(&payload).await.unwrap_err();
        assert!(matches!(err, StoreError::MalformedInput(_)));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_find_missing_id() {
        let store = AlbumStore::seeded();
        let err = store.find_by_id("999").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(ref id) if id == "999"));
    }

    #[tokio::test]
    async fn test_find_non_numeric_id() {
        let store = AlbumStore::seeded();
        assert!(store.find_by_id("abc").await.is_err());
        assert!(store.find_by_id("").await.is_err());
    }

    #[tokio::test]
    async fn test_find_is_textual() {
        let store = AlbumStore::seeded();
        assert!(store.find_by_id("01").await.is_err());
        assert!(store.find_by_id(" 1").await.is_err());
        assert!(store.find_by_id("+1").await.is_err());
        assert_eq!(store.find_by_id("1").await.unwrap().title, "Abbey Road");
    }

    #[tokio::test]
    async fn test_find_negative_id() {
        let store = AlbumStore::with_albums(vec![Album::new(-3, "Neg", "A", 1)]);
        assert_eq!(store.find_by_id("-3").await.unwrap().title, "Neg");
    }

    #[tokio::test]
    async fn test_duplicate_ids_first_match_wins() {
        let store = AlbumStore::seeded();
        let payload = json!({"id": 1, "title": "Duplicate", "artist": "Z", "year": 2024});

        store.append_new(&payload).await.unwrap();

        assert_eq!(store.len().await, 5);
        assert_eq!(store.find_by_id("1").await.unwrap().title, "Abbey Road");
    }

    #[tokio::test]
    async fn test_every_album_findable_by_its_id() {
        let store = AlbumStore::seeded();
        for album in store.list_all().await {
            let found = store.find_by_id(&album.id.to_string()).await.unwrap();
            assert_eq!(found, album);
        }
    }

    #[tokio::test]
    async fn test_append_not_idempotent() {
        let store = AlbumStore::new();
        let payload = json!({"id": 7, "title": "Same", "artist": "Same", "year": 1990});

        store.append_new(&payload).await.unwrap();
        store.append_new(&payload).await.unwrap();

        assert_eq!(store.len().await, 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_appends_all_land() {
        let store = Arc::new(AlbumStore::new());

        let handles: Vec<_> = (0..64)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    let payload = json!({"id": i, "title": "T", "artist": "A", "year": 2000});
                    store.append_new(&payload).await.unwrap();
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap();
        }

        let mut ids: Vec<i64> = store.list_all().await.iter().map(|a| a.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (0..64).collect::<Vec<i64>>());
    }
}
