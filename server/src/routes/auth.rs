//! Auth routes — login, signup, logout, and session verification.

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;

use axum::Json;
use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::http::header::AUTHORIZATION;
use serde::Deserialize;

use crate::error::ApiError;
use crate::services::session::{self, SessionUser};
use crate::services::users;
use crate::state::AppState;

/// Extract the token from an `Authorization: Bearer <token>` header value.
pub(crate) fn bearer_token(header: Option<&str>) -> Option<&str> {
    let token = header?.strip_prefix("Bearer ")?.trim();
    if token.is_empty() { None } else { Some(token) }
}

/// Build the `{user, tokens}` success body shared by login and signup.
pub(crate) fn auth_response(user: &SessionUser, access_token: &str) -> serde_json::Value {
    serde_json::json!({
        "user": user,
        "tokens": { "access_token": access_token },
    })
}

impl From<&users::UserRecord> for SessionUser {
    fn from(record: &users::UserRecord) -> Self {
        Self { id: record.id, name: record.username.clone(), email: record.email.clone() }
    }
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the bearer credential.
/// Use as a handler parameter to require authentication; this is the
/// authoritative gate in front of any protected payload.
pub struct AuthUser {
    pub user: SessionUser,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let header = parts.headers.get(AUTHORIZATION).and_then(|h| h.to_str().ok());
        let token = bearer_token(header).ok_or(ApiError::Unauthorized)?;

        let app_state = AppState::from_ref(state);
        let user = session::validate_session(&app_state.pool, token)
            .await?
            .ok_or(ApiError::Unauthorized)?;

        Ok(Self { user, token: token.to_owned() })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

/// `POST /api/auth/login` — verify credentials, mint a session.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let email = users::normalize_email(&payload.email);

    let Some(record) = users::find_by_email(&state.pool, &email).await? else {
        return Err(ApiError::InvalidCredentials);
    };
    if !users::verify_password(&payload.password, &record.password_hash) {
        return Err(ApiError::InvalidCredentials);
    }

    let token = session::create_session(&state.pool, record.id, state.session_ttl()).await?;
    tracing::info!(user_id = %record.id, "login");
    Ok(Json(auth_response(&SessionUser::from(&record), &token)))
}

#[derive(Deserialize)]
pub struct SignupRequest {
    username: String,
    email: String,
    phone_contact: Option<String>,
    password: String,
}

/// `POST /api/auth/signup` — create an account and log it in.
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    let errors = users::validate_signup(
        &payload.username,
        &payload.email,
        payload.phone_contact.as_deref(),
        &payload.password,
    );
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    let email = users::normalize_email(&payload.email);
    if users::email_taken(&state.pool, &email).await? {
        return Err(ApiError::field("email", "already taken"));
    }
    if users::username_taken(&state.pool, payload.username.trim()).await? {
        return Err(ApiError::field("username", "already taken"));
    }

    let record = users::create_user(
        &state.pool,
        &payload.username,
        &email,
        payload.phone_contact.as_deref(),
        &payload.password,
    )
    .await?;

    let token = session::create_session(&state.pool, record.id, state.session_ttl()).await?;
    tracing::info!(user_id = %record.id, "signup");
    Ok((StatusCode::CREATED, Json(auth_response(&SessionUser::from(&record), &token))))
}

/// `POST /api/auth/logout` — delete the session. The client treats logout as
/// best-effort, so a failed delete is logged rather than surfaced.
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> StatusCode {
    if let Err(e) = session::delete_session(&state.pool, &auth.token).await {
        tracing::warn!(error = %e, "session delete failed");
    }
    StatusCode::NO_CONTENT
}

/// `GET /api/auth/me` — exchange a bearer credential for the current user.
pub async fn me(auth: AuthUser) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "user": auth.user }))
}
