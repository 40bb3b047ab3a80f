//! Repository for the `artists` table.

use sqlx::PgPool;
use tracklist_core::types::DbId;

use crate::models::artist::{Artist, CreateArtist};

const COLUMNS: &str = "id, name, deleted_at, created_at, updated_at";

/// Provides create and read operations for artists.
pub struct ArtistRepo;

impl ArtistRepo {
    pub async fn create(pool: &PgPool, input: &CreateArtist) -> Result<Artist, sqlx::Error> {
        let query = format!("INSERT INTO artists (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Artist>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find an artist by its internal ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists WHERE deleted_at IS NULL ORDER BY id");
        sqlx::query_as::<_, Artist>(&query).fetch_all(pool).await
    }
}
