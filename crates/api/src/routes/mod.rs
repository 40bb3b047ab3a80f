pub mod album;
pub mod artist;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// ```text
/// /albums                 list, create
/// /albums/{id}            get, patch, delete
///
/// /artists                list, create
/// /artists/{id}           get
/// ```
///
/// Tracks have no routes. `/ping` and `/health` live in [`health::router`].
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/albums", album::router())
        .nest("/artists", artist::router())
}
