//! Auth service — login, signup, logout, and session verification.
//!
//! SYSTEM CONTEXT
//! ==============
//! Orchestrates the API client and token store: successful login/signup
//! seeds the store, logout always empties it, and `verify` exchanges the
//! stored credential for the current user during session initialization.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde_json::Value;

use super::api::{ApiClient, Method};
use super::token_store::TokenStore;
use super::types::{ApiError, AuthSuccessBody, Credential, MeBody, User};
use crate::util::validate::normalize_email;

/// Decode a login/signup success body into its user and credential.
pub(crate) fn decode_auth_success(value: Value) -> Result<(User, Credential), ApiError> {
    serde_json::from_value::<AuthSuccessBody>(value)
        .map(AuthSuccessBody::into_parts)
        .map_err(|_| ApiError::RequestFailed("malformed auth response".to_owned()))
}

/// Client-side auth operations over the injected token store.
#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    #[must_use]
    pub fn new(store: TokenStore) -> Self {
        Self { api: ApiClient::new(store) }
    }

    #[must_use]
    pub fn store(&self) -> &TokenStore {
        self.api.store()
    }

    /// Log in with an email and password. The email is lower-cased before
    /// transmission; on success the credential and user cache are stored.
    ///
    /// # Errors
    ///
    /// `InvalidCredentials` with the backend's message on rejection,
    /// `ValidationFailed` for field errors, `Network` when unreachable.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let email = normalize_email(email);
        let body = serde_json::json!({ "email": email, "password": password });
        let value = self
            .api
            .call_public(Method::Post, "/api/auth/login", Some(&body))
            .await
            .map_err(|e| match e {
                ApiError::RequestFailed(message) => ApiError::InvalidCredentials(message),
                other => other,
            })?;

        let (user, credential) = decode_auth_success(value)?;
        self.store().store(&credential);
        self.store().cache_user(&user);
        Ok(user)
    }

    /// Create an account and log it in. The username is trimmed and the
    /// email lower-cased; storage contract matches `login`.
    ///
    /// # Errors
    ///
    /// `ValidationFailed` when the backend reports field errors (duplicate
    /// email, weak password), otherwise as `login`.
    pub async fn signup(
        &self,
        username: &str,
        email: &str,
        phone: Option<&str>,
        password: &str,
    ) -> Result<User, ApiError> {
        let body = serde_json::json!({
            "username": username.trim(),
            "email": normalize_email(email),
            "phone_contact": phone,
            "password": password,
        });
        let value = self
            .api
            .call_public(Method::Post, "/api/auth/signup", Some(&body))
            .await?;

        let (user, credential) = decode_auth_success(value)?;
        self.store().store(&credential);
        self.store().cache_user(&user);
        Ok(user)
    }

    /// Log out. The credential is detached from the store first, then the
    /// server call runs best-effort: whatever the network does, "become
    /// unauthenticated locally" has already succeeded.
    pub async fn logout(&self) {
        let credential = self.store().read();
        self.store().clear();
        let Some(credential) = credential else { return };
        if let Err(e) = self
            .api
            .call_with_token(Method::Post, "/api/auth/logout", None, &credential.access)
            .await
        {
            #[cfg(feature = "csr")]
            log::warn!("logout request failed: {e}");
            let _ = e;
        }
    }

    /// Exchange the stored credential for the current user. Returns `None`
    /// on any failure — "not authenticated" and "infrastructure error"
    /// deliberately collapse here.
    pub async fn verify(&self) -> Option<User> {
        let value = self.api.call(Method::Get, "/api/auth/me", None).await.ok()?;
        let body: MeBody = serde_json::from_value(value).ok()?;
        Some(body.user)
    }
}
