//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router or
//! store is involved.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use tracklist_api::error::{AppError, INTERNAL_ERROR_MESSAGE};
use tracklist_core::error::CoreError;
use tracklist_db::store::StoreError;

async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404_with_message() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "album",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, serde_json::json!({"message": "Cannot find album with id 42"}));
}

#[tokio::test]
async fn store_not_found_maps_to_404() {
    let err = AppError::from(StoreError::NotFound {
        entity: "artist",
        id: 7,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Cannot find artist with id 7");
}

#[tokio::test]
async fn validation_error_returns_422_with_error_field() {
    let err = AppError::Core(CoreError::Validation("year is required".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json, serde_json::json!({"error": "year is required"}));
}

#[tokio::test]
async fn database_error_returns_500_and_sanitizes_message() {
    let err = AppError::from(StoreError::Database(sqlx::Error::Protocol(
        "secret database credentials leaked".into(),
    )));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, serde_json::json!({"message": INTERNAL_ERROR_MESSAGE}));
    assert!(!json.to_string().contains("secret"));
}

#[tokio::test]
async fn internal_core_error_returns_500_and_sanitizes_message() {
    let err = AppError::Core(CoreError::Internal("pool exhausted".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], INTERNAL_ERROR_MESSAGE);
}
