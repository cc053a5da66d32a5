//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly and need no database.

use adsite_api::error::AppError;
use adsite_api::views::HtmlError;
use adsite_core::error::CoreError;
use adsite_db::models::page::CreatePage;
use adsite_db::models::ValidateInput;
use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;

/// Convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Page",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Page with id 42 not found");
}

#[tokio::test]
async fn not_found_by_slug_returns_404() {
    let err = AppError::Core(CoreError::NotFoundBySlug {
        entity: "Page",
        slug: "missing".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Page with slug 'missing' not found");
}

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("title is required".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "title is required");
}

#[tokio::test]
async fn conflict_error_returns_409() {
    let err = AppError::Core(CoreError::Conflict("slug taken".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let (status, json) = error_to_response(AppError::BadRequest("bad id".into())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "bad id");
}

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::InternalError("connection string postgres://secret".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert!(!json.to_string().contains("secret"));
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn core_internal_error_is_sanitized() {
    let err = AppError::Core(CoreError::Internal("disk layout details".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!json.to_string().contains("disk"));
}

#[tokio::test]
async fn row_not_found_returns_404() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn other_database_errors_return_500() {
    let err = AppError::Database(sqlx::Error::PoolTimedOut);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
}

#[test]
fn invalid_payload_becomes_validation_error() {
    let input: CreatePage = serde_json::from_value(serde_json::json!({
        "title": "Контакты",
        "slug": "контакты",
    }))
    .unwrap();

    let err: AppError = input.validate_input().unwrap_err().into();
    assert_matches!(err, AppError::Core(CoreError::Validation(_)));

    let input: CreatePage = serde_json::from_value(serde_json::json!({
        "title": "",
        "slug": "contacts",
    }))
    .unwrap();
    assert_matches!(input.validate_input(), Err(CoreError::Validation(_)));
}

#[tokio::test]
async fn html_error_keeps_json_for_non_404() {
    let response = HtmlError(AppError::BadRequest("nope".into())).into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let content_type = response.headers()["content-type"].to_str().unwrap();
    assert!(content_type.starts_with("application/json"));
}

#[tokio::test]
async fn html_error_renders_not_found_page() {
    let response = HtmlError(AppError::Database(sqlx::Error::RowNotFound)).into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("Страница не найдена"));
}
