use super::*;
use axum::body::to_bytes;

async fn body_json(err: ApiError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// =============================================================================
// Status mapping
// =============================================================================

#[test]
fn invalid_credentials_is_401() {
    assert_eq!(ApiError::InvalidCredentials.status(), StatusCode::UNAUTHORIZED);
}

#[test]
fn unauthorized_is_401() {
    assert_eq!(ApiError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
}

#[test]
fn validation_is_400() {
    assert_eq!(ApiError::field("email", "already taken").status(), StatusCode::BAD_REQUEST);
}

#[test]
fn db_error_is_500() {
    assert_eq!(ApiError::Db(sqlx::Error::RowNotFound).status(), StatusCode::INTERNAL_SERVER_ERROR);
}

// =============================================================================
// Wire shapes
// =============================================================================

#[tokio::test]
async fn invalid_credentials_body_has_message() {
    let (status, body) = body_json(ApiError::InvalidCredentials).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid credentials!");
}

#[tokio::test]
async fn validation_body_has_errors_map() {
    let (status, body) = body_json(ApiError::field("email", "already taken")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["email"], "already taken");
    assert!(body.get("message").is_none());
}

#[tokio::test]
async fn db_error_body_is_generic() {
    let (status, body) = body_json(ApiError::Db(sqlx::Error::RowNotFound)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Something went wrong");
}

#[test]
fn field_builds_single_entry_map() {
    let ApiError::Validation(errors) = ApiError::field("username", "too short") else {
        panic!("expected Validation");
    };
    assert_eq!(errors.len(), 1);
    assert_eq!(errors["username"], "too short");
}
