//! REST API client for the auth backend.
//!
//! In the browser (`csr`): real HTTP calls via `gloo-net`.
//! On native (tests): stubs returning `ApiError::Network` since these
//! endpoints are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every exit path is a typed `ApiError` with a human-readable message; a
//! non-JSON error body degrades to `RequestFailed` instead of panicking.
//! A 401 on an authenticated call clears the token store and resolves the
//! navigation to the login page before `SessionExpired` reaches the caller,
//! so callers may treat it as informational.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

use super::token_store::TokenStore;
use super::types::ApiError;
#[cfg(any(test, feature = "csr"))]
use super::types::{FieldErrorBody, MessageBody, join_field_errors};

/// Local-development default; override with `API_BASE_URL` at build time.
const DEFAULT_API_BASE: &str = "http://127.0.0.1:3000";

/// Backend base address, resolved once at compile time.
#[must_use]
pub fn api_base() -> &'static str {
    option_env!("API_BASE_URL").unwrap_or(DEFAULT_API_BASE)
}

#[cfg(any(test, feature = "csr"))]
fn endpoint(path: &str) -> String {
    format!("{}{path}", api_base())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Typed client wrapping outbound requests. Holds the injected token store
/// so the credential header and the 401 side effect stay in one place.
#[derive(Clone)]
pub struct ApiClient {
    store: TokenStore,
}

impl ApiClient {
    #[must_use]
    pub fn new(store: TokenStore) -> Self {
        Self { store }
    }

    #[must_use]
    pub fn store(&self) -> &TokenStore {
        &self.store
    }

    /// Call an endpoint with the stored credential attached. A 401 here
    /// means the session died: the store is cleared, the navigation is
    /// resolved to login, and the caller sees `SessionExpired`.
    ///
    /// # Errors
    ///
    /// Returns a typed `ApiError` for every failure path.
    pub async fn call(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Value, ApiError> {
        self.send(method, path, body, true).await
    }

    /// Call an endpoint without a credential (login/signup). A 401 here is
    /// a rejected form submission, not a session expiry, and surfaces as a
    /// local `RequestFailed` carrying the backend's message.
    ///
    /// # Errors
    ///
    /// Returns a typed `ApiError` for every failure path.
    pub async fn call_public(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Value, ApiError> {
        self.send(method, path, body, false).await
    }

    /// Call an endpoint with an explicit credential and no 401 side
    /// effects. Used by logout, which detaches the token before its
    /// best-effort server call so the local store is already empty.
    ///
    /// # Errors
    ///
    /// Returns a typed `ApiError` for every failure path.
    pub async fn call_with_token(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        token: &str,
    ) -> Result<Value, ApiError> {
        self.send_with(method, path, body, Some(token.to_owned()), false).await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        authenticated: bool,
    ) -> Result<Value, ApiError> {
        let token = if authenticated {
            self.store.read().map(|credential| credential.access)
        } else {
            None
        };
        self.send_with(method, path, body, token, authenticated).await
    }

    #[cfg(feature = "csr")]
    async fn send_with(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        token: Option<String>,
        expire_on_401: bool,
    ) -> Result<Value, ApiError> {
        use gloo_net::http::Request;

        let url = endpoint(path);
        let mut builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
        };
        builder = builder.header("Content-Type", "application/json");
        if let Some(token) = &token {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }

        let request = match body {
            Some(value) => builder.body(value.to_string()),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        if status == 401 && expire_on_401 {
            self.store.clear();
            crate::util::guard::force_login_redirect();
            return Err(ApiError::SessionExpired);
        }
        if !(200..300).contains(&status) {
            return Err(decode_error_body(status, &text));
        }
        if text.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|_| ApiError::RequestFailed("unexpected response from server".to_owned()))
    }

    #[cfg(not(feature = "csr"))]
    async fn send_with(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        token: Option<String>,
        expire_on_401: bool,
    ) -> Result<Value, ApiError> {
        let _ = (method, path, body, token, expire_on_401);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Decode a non-2xx, non-session-expiry body into a typed error.
#[cfg(any(test, feature = "csr"))]
pub(crate) fn decode_error_body(status: u16, body: &str) -> ApiError {
    if let Ok(parsed) = serde_json::from_str::<FieldErrorBody>(body) {
        if !parsed.errors.is_empty() {
            return ApiError::ValidationFailed(join_field_errors(&parsed.errors));
        }
    }
    if let Ok(parsed) = serde_json::from_str::<MessageBody>(body) {
        return ApiError::RequestFailed(parsed.message);
    }
    ApiError::RequestFailed(format!("request failed: {status}"))
}
