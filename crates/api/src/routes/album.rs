//! Route definitions for albums.

use axum::routing::get;
use axum::Router;

use crate::handlers::album;
use crate::state::AppState;

/// Routes mounted at `/albums`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PATCH  /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(album::list).post(album::create))
        .route(
            "/{id}",
            get(album::get_by_id)
                .patch(album::update)
                .delete(album::delete),
        )
}
