//! Artist entity model and DTOs.
//!
//! Artists are not linked to albums in the schema.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tracklist_core::types::{DbId, Timestamp};
use validator::Validate;

pub const ENTITY: &str = "artist";

/// A row from the `artists` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Artist {
    pub id: DbId,
    pub name: String,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new artist.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateArtist {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
}
