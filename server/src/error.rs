//! API error taxonomy and wire mapping.
//!
//! ERROR HANDLING
//! ==============
//! Every handler exit path serializes to one of two JSON shapes the
//! storefront client decodes: `{"message": "..."}` for simple failures and
//! `{"errors": {"field": "..."}}` for field-level validation. Database
//! errors are logged server-side and collapse to a generic message so
//! internals never leak to the browser.

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;

use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

/// Field name to human-readable message, ordered for stable output.
pub type FieldErrors = BTreeMap<String, String>;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Login or signup rejected; surfaced to the form verbatim.
    #[error("Invalid credentials!")]
    InvalidCredentials,

    /// Request body failed field-level validation.
    #[error("validation failed")]
    Validation(FieldErrors),

    /// Missing, malformed, or expired bearer credential.
    #[error("Token is missing or invalid!")]
    Unauthorized,

    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),

    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

impl ApiError {
    /// Single-field validation error.
    #[must_use]
    pub fn field(name: &str, message: &str) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(name.to_owned(), message.to_owned());
        Self::Validation(errors)
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::InvalidCredentials | Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Db(_) | Self::Hash(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::Validation(errors) => serde_json::json!({ "errors": errors }),
            Self::Db(e) => {
                tracing::error!(error = %e, "database error");
                serde_json::json!({ "message": "Something went wrong" })
            }
            Self::Hash(e) => {
                tracing::error!(error = %e, "password hashing error");
                serde_json::json!({ "message": "Something went wrong" })
            }
            other => serde_json::json!({ "message": other.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}
