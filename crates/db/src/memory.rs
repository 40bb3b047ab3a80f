//! In-process [`Store`] with the same soft-delete and patch semantics as
//! the Postgres repositories.
//!
//! Ids are assigned sequentially from 1 per table, like `BIGSERIAL` on a
//! fresh database. Writes can be made to fail with
//! [`MemoryStore::set_fail_writes`] to exercise the persistence error path.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::Utc;
use tracklist_core::types::DbId;

use crate::models::album::{self, Album, CreateAlbum, UpdateAlbum};
use crate::models::artist::{Artist, CreateArtist};
use crate::models::track::{CreateTrack, Track};
use crate::store::{AlbumStore, ArtistStore, Store, StoreError, StoreResult, TrackStore};

#[derive(Default)]
struct Tables {
    albums: Vec<Album>,
    artists: Vec<Artist>,
    tracks: Vec<Track>,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// When set, every insert, update and delete fails with a database error.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check_writable(&self) -> StoreResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Database(sqlx::Error::PoolClosed));
        }
        Ok(())
    }
}

fn next_id(len: usize) -> DbId {
    len as DbId + 1
}

#[async_trait]
impl AlbumStore for MemoryStore {
    async fn list_albums(&self) -> StoreResult<Vec<Album>> {
        Ok(self
            .tables()
            .albums
            .iter()
            .filter(|a| a.deleted_at.is_none())
            .cloned()
            .collect())
    }

    async fn find_album(&self, id: DbId) -> StoreResult<Option<Album>> {
        Ok(self
            .tables()
            .albums
            .iter()
            .find(|a| a.id == id && a.deleted_at.is_none())
            .cloned())
    }

    async fn create_album(&self, input: &CreateAlbum) -> StoreResult<Album> {
        self.check_writable()?;
        let mut tables = self.tables();
        let now = Utc::now();
        let album = Album {
            id: next_id(tables.albums.len()),
            title: input.title.clone(),
            year: input.year,
            deleted_at: None,
            created_at: now,
            updated_at: now,
        };
        tables.albums.push(album.clone());
        Ok(album)
    }

    async fn update_album(&self, id: DbId, input: &UpdateAlbum) -> StoreResult<Album> {
        self.check_writable()?;
        let mut tables = self.tables();
        let album = tables
            .albums
            .iter_mut()
            .find(|a| a.id == id && a.deleted_at.is_none())
            .ok_or(StoreError::NotFound {
                entity: album::ENTITY,
                id,
            })?;
        if let Some(title) = &input.title {
            album.title = title.clone();
        }
        if let Some(year) = input.year {
            album.year = year;
        }
        album.updated_at = Utc::now();
        Ok(album.clone())
    }

    async fn delete_album(&self, id: DbId) -> StoreResult<Album> {
        self.check_writable()?;
        let mut tables = self.tables();
        let album = tables
            .albums
            .iter_mut()
            .find(|a| a.id == id && a.deleted_at.is_none())
            .ok_or(StoreError::NotFound {
                entity: album::ENTITY,
                id,
            })?;
        let now = Utc::now();
        album.deleted_at = Some(now);
        album.updated_at = now;
        Ok(album.clone())
    }

    async fn any_albums(&self) -> StoreResult<bool> {
        Ok(self.tables().albums.iter().any(|a| a.deleted_at.is_none()))
    }
}

#[async_trait]
impl ArtistStore for MemoryStore {
    async fn list_artists(&self) -> StoreResult<Vec<Artist>> {
        Ok(self
            .tables()
            .artists
            .iter()
            .filter(|a| a.deleted_at.is_none())
            .cloned()
            .collect())
    }

    async fn find_artist(&self, id: DbId) -> StoreResult<Option<Artist>> {
        Ok(self
            .tables()
            .artists
            .iter()
            .find(|a| a.id == id && a.deleted_at.is_none())
            .cloned())
    }

    async fn create_artist(&self, input: &CreateArtist) -> StoreResult<Artist> {
        self.check_writable()?;
        let mut tables = self.tables();
        let now = Utc::now();
        let artist = Artist {
            id: next_id(tables.artists.len()),
            name: input.name.clone(),
            deleted_at: None,
            created_at: now,
            updated_at: now,
        };
        tables.artists.push(artist.clone());
        Ok(artist)
    }
}

#[async_trait]
impl TrackStore for MemoryStore {
    async fn create_track(&self, input: &CreateTrack) -> StoreResult<Track> {
        self.check_writable()?;
        let mut tables = self.tables();
        let now = Utc::now();
        let track = Track {
            id: next_id(tables.tracks.len()),
            title: input.title.clone(),
            album_id: input.album_id,
            track_number: input.track_number,
            deleted_at: None,
            created_at: now,
            updated_at: now,
        };
        tables.tracks.push(track.clone());
        Ok(track)
    }

    async fn list_album_tracks(&self, album_id: DbId) -> StoreResult<Vec<Track>> {
        let mut tracks: Vec<Track> = self
            .tables()
            .tracks
            .iter()
            .filter(|t| t.album_id == album_id && t.deleted_at.is_none())
            .cloned()
            .collect();
        tracks.sort_by_key(|t| (t.track_number, t.id));
        Ok(tracks)
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }
}
