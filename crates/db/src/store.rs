//! Store interfaces consumed by the HTTP layer.
//!
//! Handlers only see these traits, so the backing store is chosen once at
//! startup ([`crate::pg_store::PgStore`] in production,
//! [`crate::memory::MemoryStore`] in tests).

use async_trait::async_trait;
use tracklist_core::types::DbId;

use crate::models::album::{Album, CreateAlbum, UpdateAlbum};
use crate::models::artist::{Artist, CreateArtist};
use crate::models::track::{CreateTrack, Track};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No live row with this id. Soft-deleted rows count as absent.
    #[error("Cannot find {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// The backing store rejected or failed the operation.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait AlbumStore: Send + Sync {
    /// All live albums, ordered by id.
    async fn list_albums(&self) -> StoreResult<Vec<Album>>;

    /// `None` when the album is absent or soft-deleted.
    async fn find_album(&self, id: DbId) -> StoreResult<Option<Album>>;

    async fn create_album(&self, input: &CreateAlbum) -> StoreResult<Album>;

    /// Apply the `Some` fields of `input` and return the persisted row.
    ///
    /// Fails with [`StoreError::NotFound`] when there is no live album.
    async fn update_album(&self, id: DbId, input: &UpdateAlbum) -> StoreResult<Album>;

    /// Soft-delete an album and return it as marked.
    ///
    /// Fails with [`StoreError::NotFound`] when there is no live album.
    async fn delete_album(&self, id: DbId) -> StoreResult<Album>;

    /// Whether at least one live album exists. Guards seeding.
    async fn any_albums(&self) -> StoreResult<bool>;
}

#[async_trait]
pub trait ArtistStore: Send + Sync {
    async fn list_artists(&self) -> StoreResult<Vec<Artist>>;

    async fn find_artist(&self, id: DbId) -> StoreResult<Option<Artist>>;

    async fn create_artist(&self, input: &CreateArtist) -> StoreResult<Artist>;
}

#[async_trait]
pub trait TrackStore: Send + Sync {
    async fn create_track(&self, input: &CreateTrack) -> StoreResult<Track>;

    /// Live tracks of one album, ordered by track number.
    async fn list_album_tracks(&self, album_id: DbId) -> StoreResult<Vec<Track>>;
}

/// Everything the server needs from a backing store.
#[async_trait]
pub trait Store: AlbumStore + ArtistStore + TrackStore {
    async fn health_check(&self) -> StoreResult<()>;
}
