//! Album entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tracklist_core::types::{DbId, Timestamp};
use validator::Validate;

/// Resource name used in not-found messages.
pub const ENTITY: &str = "album";

/// A row from the `albums` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Album {
    pub id: DbId,
    pub title: String,
    pub year: i32,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new album. Both fields are required.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAlbum {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(range(min = 1, message = "year must be a positive integer"))]
    pub year: i32,
}

/// DTO for patching an album. Only `Some` fields are applied.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateAlbum {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    #[validate(range(min = 1, message = "year must be a positive integer"))]
    pub year: Option<i32>,
}
