//! Repository for the `tracks` table.
//!
//! Tracks have no HTTP surface; seeding is the only writer.

use sqlx::PgPool;
use tracklist_core::types::DbId;

use crate::models::track::{CreateTrack, Track};

const COLUMNS: &str = "id, title, album_id, track_number, deleted_at, created_at, updated_at";

pub struct TrackRepo;

impl TrackRepo {
    /// Insert a new track, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTrack) -> Result<Track, sqlx::Error> {
        let query = format!(
            "INSERT INTO tracks (title, album_id, track_number)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Track>(&query)
            .bind(&input.title)
            .bind(input.album_id)
            .bind(input.track_number)
            .fetch_one(pool)
            .await
    }

    /// List the live tracks of an album ordered by track number.
    pub async fn list_by_album(pool: &PgPool, album_id: DbId) -> Result<Vec<Track>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tracks
             WHERE album_id = $1 AND deleted_at IS NULL
             ORDER BY track_number, id"
        );
        sqlx::query_as::<_, Track>(&query)
            .bind(album_id)
            .fetch_all(pool)
            .await
    }
}
