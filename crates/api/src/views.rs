//! JSON-facing projections of persisted entities.
//!
//! Views drop the bookkeeping columns (`created_at`, `updated_at`,
//! `deleted_at`) and keep the id.

use serde::Serialize;
use tracklist_core::types::DbId;
use tracklist_db::models::album::Album;
use tracklist_db::models::artist::Artist;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlbumView {
    pub id: DbId,
    pub title: String,
    pub year: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistView {
    pub id: DbId,
    pub name: String,
}

pub fn render_album(album: &Album) -> AlbumView {
    AlbumView {
        id: album.id,
        title: album.title.clone(),
        year: album.year,
    }
}

pub fn render_albums(albums: &[Album]) -> Vec<AlbumView> {
    albums.iter().map(render_album).collect()
}

pub fn render_artist(artist: &Artist) -> ArtistView {
    ArtistView {
        id: artist.id,
        name: artist.name.clone(),
    }
}

pub fn render_artists(artists: &[Artist]) -> Vec<ArtistView> {
    artists.iter().map(render_artist).collect()
}
