//! Handlers for the `/artists` resource. Artists cannot be updated or
//! deleted over HTTP.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracklist_core::error::CoreError;
use tracklist_core::types::DbId;
use tracklist_db::models::artist::{self, CreateArtist};
use tracklist_db::store::ArtistStore;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::response::{ArtistResponse, ArtistsResponse};
use crate::state::AppState;
use crate::views::{render_artist, render_artists};

/// GET /artists
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ArtistsResponse>> {
    let artists = state.store.list_artists().await?;
    Ok(Json(ArtistsResponse {
        artists: render_artists(&artists),
    }))
}

/// POST /artists
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateArtist>,
) -> AppResult<(StatusCode, Json<ArtistResponse>)> {
    let artist = state.store.create_artist(&input).await?;
    tracing::info!(artist_id = artist.id, "Artist created");
    Ok((
        StatusCode::CREATED,
        Json(ArtistResponse {
            artist: render_artist(&artist),
        }),
    ))
}

/// GET /artists/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ArtistResponse>> {
    let artist = state
        .store
        .find_artist(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: artist::ENTITY,
            id,
        }))?;
    Ok(Json(ArtistResponse {
        artist: render_artist(&artist),
    }))
}
