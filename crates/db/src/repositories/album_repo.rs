//! Repository for the `albums` table.

use sqlx::PgPool;
use tracklist_core::types::DbId;

use crate::models::album::{Album, CreateAlbum, UpdateAlbum};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, year, deleted_at, created_at, updated_at";

/// Provides CRUD operations for albums.
pub struct AlbumRepo;

impl AlbumRepo {
    /// Insert a new album, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateAlbum) -> Result<Album, sqlx::Error> {
        let query = format!(
            "INSERT INTO albums (title, year)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Album>(&query)
            .bind(&input.title)
            .bind(input.year)
            .fetch_one(pool)
            .await
    }

    /// Find an album by its internal ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Album>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM albums WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Album>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all albums ordered by ID. Excludes soft-deleted rows.
    pub async fn list(pool: &PgPool) -> Result<Vec<Album>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM albums WHERE deleted_at IS NULL ORDER BY id");
        sqlx::query_as::<_, Album>(&query).fetch_all(pool).await
    }

    /// Update an album. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAlbum,
    ) -> Result<Option<Album>, sqlx::Error> {
        let query = format!(
            "UPDATE albums SET
                title = COALESCE($2, title),
                year = COALESCE($3, year)
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Album>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.year)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete an album, returning the row as marked.
    ///
    /// Returns `None` if the album does not exist or is already deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<Option<Album>, sqlx::Error> {
        let query = format!(
            "UPDATE albums SET deleted_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Album>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether at least one live album exists.
    pub async fn exists_any(pool: &PgPool) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM albums WHERE deleted_at IS NULL)")
                .fetch_one(pool)
                .await?;
        Ok(exists)
    }
}
