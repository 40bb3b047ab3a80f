//! Response envelopes.
//!
//! Every payload is wrapped in a single key named after the resource:
//! `{"album": ...}`, `{"albums": [...]}`, `{"artist": ...}`, `{"artists": [...]}`.

use serde::Serialize;

use crate::views::{AlbumView, ArtistView};

#[derive(Debug, Serialize)]
pub struct AlbumResponse {
    pub album: AlbumView,
}

#[derive(Debug, Serialize)]
pub struct AlbumsResponse {
    pub albums: Vec<AlbumView>,
}

#[derive(Debug, Serialize)]
pub struct ArtistResponse {
    pub artist: ArtistView,
}

#[derive(Debug, Serialize)]
pub struct ArtistsResponse {
    pub artists: Vec<ArtistView>,
}

/// `{"message": ...}` body, used by `/ping`.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
