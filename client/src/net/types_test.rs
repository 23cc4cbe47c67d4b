use super::*;

// =============================================================================
// AuthSuccessBody decode
// =============================================================================

#[test]
fn auth_success_decodes_user_and_token() {
    let body: AuthSuccessBody = serde_json::from_str(
        r#"{"user":{"id":"1","name":"A","email":"user@example.com"},"tokens":{"access_token":"abc"}}"#,
    )
    .unwrap();
    let (user, credential) = body.into_parts();
    assert_eq!(user.id, "1");
    assert_eq!(user.email, "user@example.com");
    assert_eq!(credential.access, "abc");
    assert_eq!(credential.refresh, None);
}

#[test]
fn auth_success_keeps_refresh_companion() {
    let body: AuthSuccessBody = serde_json::from_str(
        r#"{"user":{"id":"1","name":"A","email":"a@b.com"},"tokens":{"access_token":"abc","refresh_token":"def"}}"#,
    )
    .unwrap();
    let (_, credential) = body.into_parts();
    assert_eq!(credential.refresh.as_deref(), Some("def"));
}

#[test]
fn auth_success_without_tokens_fails_decode() {
    let result = serde_json::from_str::<AuthSuccessBody>(
        r#"{"user":{"id":"1","name":"A","email":"a@b.com"}}"#,
    );
    assert!(result.is_err());
}

// =============================================================================
// join_field_errors
// =============================================================================

#[test]
fn single_field_error_joins_to_its_message() {
    let body: FieldErrorBody = serde_json::from_str(r#"{"errors":{"email":"already taken"}}"#).unwrap();
    assert_eq!(join_field_errors(&body.errors), "already taken");
}

#[test]
fn multiple_field_errors_join_in_field_order() {
    let body: FieldErrorBody =
        serde_json::from_str(r#"{"errors":{"username":"too short","email":"already taken"}}"#).unwrap();
    assert_eq!(join_field_errors(&body.errors), "already taken; too short");
}

#[test]
fn empty_errors_join_to_empty_string() {
    let body: FieldErrorBody = serde_json::from_str(r#"{"errors":{}}"#).unwrap();
    assert_eq!(join_field_errors(&body.errors), "");
}

// =============================================================================
// ApiError messages
// =============================================================================

#[test]
fn session_expired_message_is_human_readable() {
    assert_eq!(
        ApiError::SessionExpired.to_string(),
        "Your session has expired. Please log in again."
    );
}

#[test]
fn invalid_credentials_surfaces_backend_message() {
    assert_eq!(
        ApiError::InvalidCredentials("Invalid credentials!".to_owned()).to_string(),
        "Invalid credentials!"
    );
}

#[test]
fn user_serde_round_trip() {
    let user = User { id: "7".to_owned(), name: "A".to_owned(), email: "a@b.com".to_owned() };
    let json = serde_json::to_string(&user).unwrap();
    assert_eq!(serde_json::from_str::<User>(&json).unwrap(), user);
}
