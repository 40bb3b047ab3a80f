use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracklist_core::error::CoreError;
use tracklist_db::store::StoreError;
use validator::ValidationErrors;

/// Body text of every 500 response. Store details never reach clients.
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal server error occurred.";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds the database variant.
/// Implements [`IntoResponse`]:
///
/// | Variant                  | Status | Body                    |
/// |--------------------------|--------|-------------------------|
/// | `Core(NotFound)`         | 404    | `{"message": ...}`      |
/// | `Core(Validation)`       | 422    | `{"error": ...}`        |
/// | `Core(Internal)`         | 500    | `{"message": <generic>}`|
/// | `Database`               | 500    | `{"message": <generic>}`|
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, id } => {
                AppError::Core(CoreError::NotFound { entity, id })
            }
            StoreError::Database(err) => AppError::Database(err),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Core(CoreError::Validation(rejection.body_text()))
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Core(CoreError::Validation(errors.to_string()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => {
                    (StatusCode::NOT_FOUND, json!({ "message": core.to_string() }))
                }
                CoreError::Validation(msg) => {
                    (StatusCode::UNPROCESSABLE_ENTITY, json!({ "error": msg }))
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal_error()
                }
            },
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                internal_error()
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

fn internal_error() -> (StatusCode, serde_json::Value) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "message": INTERNAL_ERROR_MESSAGE }),
    )
}
