//! Handlers for the `/albums` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracklist_core::error::CoreError;
use tracklist_core::types::DbId;
use tracklist_db::models::album::{self, CreateAlbum, UpdateAlbum};
use tracklist_db::store::AlbumStore;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::response::{AlbumResponse, AlbumsResponse};
use crate::state::AppState;
use crate::views::{render_album, render_albums};

/// GET /albums
pub async fn list(State(state): State<AppState>) -> AppResult<Json<AlbumsResponse>> {
    let albums = state.store.list_albums().await?;
    Ok(Json(AlbumsResponse {
        albums: render_albums(&albums),
    }))
}

/// POST /albums
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateAlbum>,
) -> AppResult<(StatusCode, Json<AlbumResponse>)> {
    let album = state.store.create_album(&input).await?;
    tracing::info!(album_id = album.id, title = %album.title, "Album created");
    Ok((
        StatusCode::CREATED,
        Json(AlbumResponse {
            album: render_album(&album),
        }),
    ))
}

/// GET /albums/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<AlbumResponse>> {
    let album = state
        .store
        .find_album(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: album::ENTITY,
            id,
        }))?;
    Ok(Json(AlbumResponse {
        album: render_album(&album),
    }))
}

/// PATCH /albums/{id}
///
/// Only the fields present in the body are changed. The response renders
/// the row as persisted by the update, not the copy looked up before it.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateAlbum>,
) -> AppResult<Json<AlbumResponse>> {
    let album = state.store.update_album(id, &input).await?;
    tracing::info!(album_id = id, "Album updated");
    Ok(Json(AlbumResponse {
        album: render_album(&album),
    }))
}

/// DELETE /albums/{id}
///
/// Soft-deletes and echoes the removed album.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<AlbumResponse>> {
    let album = state.store.delete_album(id).await?;
    tracing::info!(album_id = id, "Album deleted");
    Ok(Json(AlbumResponse {
        album: render_album(&album),
    }))
}
