use async_trait::async_trait;
use tracklist_core::types::DbId;

use crate::models::album::{self, Album, CreateAlbum, UpdateAlbum};
use crate::models::artist::{Artist, CreateArtist};
use crate::models::track::{CreateTrack, Track};
use crate::repositories::{AlbumRepo, ArtistRepo, TrackRepo};
use crate::store::{AlbumStore, ArtistStore, Store, StoreError, StoreResult, TrackStore};
use crate::DbPool;

/// [`Store`] backed by a Postgres connection pool.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl AlbumStore for PgStore {
    async fn list_albums(&self) -> StoreResult<Vec<Album>> {
        Ok(AlbumRepo::list(&self.pool).await?)
    }

    async fn find_album(&self, id: DbId) -> StoreResult<Option<Album>> {
        Ok(AlbumRepo::find_by_id(&self.pool, id).await?)
    }

    async fn create_album(&self, input: &CreateAlbum) -> StoreResult<Album> {
        Ok(AlbumRepo::create(&self.pool, input).await?)
    }

    async fn update_album(&self, id: DbId, input: &UpdateAlbum) -> StoreResult<Album> {
        AlbumRepo::update(&self.pool, id, input)
            .await?
            .ok_or(StoreError::NotFound {
                entity: album::ENTITY,
                id,
            })
    }

    async fn delete_album(&self, id: DbId) -> StoreResult<Album> {
        AlbumRepo::soft_delete(&self.pool, id)
            .await?
            .ok_or(StoreError::NotFound {
                entity: album::ENTITY,
                id,
            })
    }

    async fn any_albums(&self) -> StoreResult<bool> {
        Ok(AlbumRepo::exists_any(&self.pool).await?)
    }
}

#[async_trait]
impl ArtistStore for PgStore {
    async fn list_artists(&self) -> StoreResult<Vec<Artist>> {
        Ok(ArtistRepo::list(&self.pool).await?)
    }

    async fn find_artist(&self, id: DbId) -> StoreResult<Option<Artist>> {
        Ok(ArtistRepo::find_by_id(&self.pool, id).await?)
    }

    async fn create_artist(&self, input: &CreateArtist) -> StoreResult<Artist> {
        Ok(ArtistRepo::create(&self.pool, input).await?)
    }
}

#[async_trait]
impl TrackStore for PgStore {
    async fn create_track(&self, input: &CreateTrack) -> StoreResult<Track> {
        Ok(TrackRepo::create(&self.pool, input).await?)
    }

    async fn list_album_tracks(&self, album_id: DbId) -> StoreResult<Vec<Track>> {
        Ok(TrackRepo::list_by_album(&self.pool, album_id).await?)
    }
}

#[async_trait]
impl Store for PgStore {
    async fn health_check(&self) -> StoreResult<()> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
