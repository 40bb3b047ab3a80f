//! Track entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tracklist_core::types::{DbId, Timestamp};
use validator::Validate;

pub const ENTITY: &str = "track";

/// A row from the `tracks` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Track {
    pub id: DbId,
    pub title: String,
    pub album_id: DbId,
    pub track_number: i32,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new track.
///
/// `album_id` must reference an existing album; the foreign key enforces it
/// in Postgres, nothing checks it earlier.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTrack {
    pub album_id: DbId,
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(range(min = 1, message = "track number must be a positive integer"))]
    pub track_number: i32,
}
