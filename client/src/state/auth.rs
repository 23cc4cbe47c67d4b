//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as an `RwSignal<SessionState>` context at the app root. Route
//! guards and user-aware components read it to coordinate login redirects
//! and identity-dependent rendering; the auth service drives its
//! transitions after login, signup, logout, and verification.
//!
//! CONCURRENCY
//! ===========
//! Transitions are serialized by the UI event loop, but two in-flight
//! verify calls can resolve out of order (rapid remounts). Each attempt
//! takes an epoch from `begin_verify`; `finish_verify` discards any
//! resolution whose epoch is no longer current, so the last *initiated*
//! verification wins regardless of arrival order.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::auth::AuthService;
use crate::net::types::User;

/// Upper bound on a verification round trip; a hung backend is treated as a
/// failed verification rather than leaving the UI loading forever.
#[cfg(feature = "csr")]
const VERIFY_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

/// Lifecycle of the session boundary.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// Before initialization has looked at the token store.
    #[default]
    Uninitialized,
    /// A stored credential is being verified against the backend.
    Verifying,
    /// The credential resolved to a user.
    Authenticated(User),
    /// No credential, or the last one failed verification.
    Unauthenticated,
}

/// The client-visible session aggregate. `is_authenticated()` and `user()`
/// cannot disagree because both project the same phase.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    phase: SessionPhase,
    epoch: u64,
}

impl SessionState {
    #[must_use]
    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match &self.phase {
            SessionPhase::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// True only during the bounded initialization window.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, SessionPhase::Uninitialized | SessionPhase::Verifying)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user().is_some()
    }

    /// Start a verification attempt and return its epoch.
    pub fn begin_verify(&mut self) -> u64 {
        self.epoch += 1;
        self.phase = SessionPhase::Verifying;
        self.epoch
    }

    /// No stored credential: settle to Unauthenticated without a network
    /// call.
    pub fn skip_verify(&mut self) {
        self.epoch += 1;
        self.phase = SessionPhase::Unauthenticated;
    }

    /// Apply a verification result. Returns false (and changes nothing)
    /// when the resolution is stale.
    pub fn finish_verify(&mut self, epoch: u64, user: Option<User>) -> bool {
        if epoch != self.epoch || self.phase != SessionPhase::Verifying {
            return false;
        }
        self.phase = match user {
            Some(user) => SessionPhase::Authenticated(user),
            None => SessionPhase::Unauthenticated,
        };
        true
    }

    /// Explicit login/signup success.
    pub fn login_succeeded(&mut self, user: User) {
        self.epoch += 1;
        self.phase = SessionPhase::Authenticated(user);
    }

    /// Explicit logout, or a `SessionExpired` reported by the API client.
    pub fn logged_out(&mut self) {
        self.epoch += 1;
        self.phase = SessionPhase::Unauthenticated;
    }
}

/// Initialize the session on mount: skip straight to Unauthenticated when
/// no credential is stored, otherwise verify it against the backend. The
/// store is cleared when verification fails so the dead credential is not
/// retried on the next load.
pub fn init_session(auth: RwSignal<SessionState>, service: AuthService) {
    if service.store().read().is_none() {
        auth.update(SessionState::skip_verify);
        return;
    }

    let mut epoch = 0;
    auth.update(|s| epoch = s.begin_verify());

    leptos::task::spawn_local(async move {
        let user = verify_with_timeout(&service).await;
        let failed = user.is_none();
        let mut applied = false;
        auth.update(|s| applied = s.finish_verify(epoch, user));
        if applied && failed {
            service.store().clear();
        }
    });
}

#[cfg(feature = "csr")]
async fn verify_with_timeout(service: &AuthService) -> Option<User> {
    use futures::future::{Either, select};

    let verify = std::pin::pin!(service.verify());
    let timeout = std::pin::pin!(gloo_timers::future::sleep(VERIFY_TIMEOUT));
    match select(verify, timeout).await {
        Either::Left((user, _)) => user,
        Either::Right(((), _)) => {
            log::warn!("session verification timed out");
            None
        }
    }
}

#[cfg(not(feature = "csr"))]
async fn verify_with_timeout(service: &AuthService) -> Option<User> {
    service.verify().await
}
