//! Wire DTOs and the client-side error taxonomy for the auth boundary.
//!
//! DESIGN
//! ======
//! Backend responses are decoded through explicit serde structs rather than
//! probed field-by-field; every failure path collapses into `ApiError`, which
//! always carries a human-readable message.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Identity record exposed to the UI. `name` and `email` are display
/// conveniences; the backend owns the mapping from credential to user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Lower-cased unique email.
    pub email: String,
}

/// Opaque bearer credential proving the session to the backend.
///
/// The refresh companion is stored when the backend provides one but is
/// never used for silent renewal; an expired access token means re-login.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credential {
    pub access: String,
    pub refresh: Option<String>,
}

impl Credential {
    #[must_use]
    pub fn new(access: impl Into<String>) -> Self {
        Self { access: access.into(), refresh: None }
    }
}

/// Typed failure for every API and auth-service exit path.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Login or signup rejected with a user-facing message.
    #[error("{0}")]
    InvalidCredentials(String),

    /// Field-level validation errors, joined into one message.
    #[error("{0}")]
    ValidationFailed(String),

    /// A previously valid credential no longer verifies. The token store is
    /// already cleared by the time this surfaces.
    #[error("Your session has expired. Please log in again.")]
    SessionExpired,

    /// Non-2xx with no structured error shape.
    #[error("{0}")]
    RequestFailed(String),

    /// The request never reached the backend.
    #[error("network error: {0}")]
    Network(String),
}

// =============================================================================
// WIRE BODIES
// =============================================================================

/// Successful login/signup body: `{user, tokens: {access_token, ...}}`.
#[derive(Debug, Deserialize)]
pub(crate) struct AuthSuccessBody {
    pub(crate) user: User,
    pub(crate) tokens: TokensBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TokensBody {
    pub(crate) access_token: String,
    #[serde(default)]
    pub(crate) refresh_token: Option<String>,
}

/// Verification body: `{user}`.
#[derive(Debug, Deserialize)]
pub(crate) struct MeBody {
    pub(crate) user: User,
}

/// Validation failure body: `{errors: {field: message}}`.
#[derive(Debug, Deserialize)]
pub(crate) struct FieldErrorBody {
    pub(crate) errors: BTreeMap<String, String>,
}

/// Simple failure body: `{message}`.
#[derive(Debug, Deserialize)]
pub(crate) struct MessageBody {
    pub(crate) message: String,
}

/// Join field errors into one rendered line, stable by field name.
pub(crate) fn join_field_errors(errors: &BTreeMap<String, String>) -> String {
    errors.values().cloned().collect::<Vec<_>>().join("; ")
}

impl AuthSuccessBody {
    pub(crate) fn into_parts(self) -> (User, Credential) {
        let credential = Credential {
            access: self.tokens.access_token,
            refresh: self.tokens.refresh_token,
        };
        (self.user, credential)
    }
}
