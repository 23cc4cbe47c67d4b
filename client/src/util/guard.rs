//! Route guard — edge layer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Classifies every navigation before the destination renders and redirects
//! unauthenticated traffic to the login entry point, preserving the
//! originally requested path. The server's bearer extractor remains the
//! authoritative gate for protected data; this layer decides what the
//! router is allowed to fulfill.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use std::fmt::Write as _;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_location;

use crate::net::token_store::TokenStore;
use crate::state::auth::SessionState;

/// Landing route for an authenticated user.
pub const AUTHED_LANDING: &str = "/dashboard";

/// How the edge layer treats a requested path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteClass {
    /// Anyone may view (storefront, menu).
    Public,
    /// Login/signup: forward an already-authenticated user instead of
    /// re-showing the form.
    AuthEntry,
    /// Requires a verified session.
    Protected,
    /// Static assets and API paths the guard never touches.
    Bypassed,
}

/// Classify a requested path.
#[must_use]
pub fn classify_path(path: &str) -> RouteClass {
    const BYPASSED_PREFIXES: [&str; 3] = ["/api/", "/pkg/", "/assets/"];
    const PROTECTED_PREFIXES: [&str; 4] = ["/dashboard", "/orders", "/cart", "/account"];

    if BYPASSED_PREFIXES.iter().any(|p| path.starts_with(p)) || path == "/favicon.ico" {
        return RouteClass::Bypassed;
    }
    if path == "/login" || path == "/signup" {
        return RouteClass::AuthEntry;
    }
    if PROTECTED_PREFIXES
        .iter()
        .any(|p| path == *p || path.starts_with(&format!("{p}/")))
    {
        return RouteClass::Protected;
    }
    RouteClass::Public
}

/// Percent-encode a path for use as a query-parameter value.
pub(crate) fn encode_return_target(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    for byte in path.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => out.push(byte as char),
            _ => {
                let _ = write!(out, "%{byte:02X}");
            }
        }
    }
    out
}

/// Login entry point carrying the originally requested path.
#[must_use]
pub fn login_redirect_target(path: &str) -> String {
    format!("/login?from={}", encode_return_target(path))
}

/// Login entry point carrying the original path and a human-readable reason.
#[must_use]
pub fn login_redirect_with_reason(path: &str, reason: &str) -> String {
    format!("/login?from={}&reason={reason}", encode_return_target(path))
}

/// Where to send the user after a successful login. Only same-origin
/// absolute paths are honored; anything else falls back to the landing
/// route so the `from` parameter cannot become an open redirect.
#[must_use]
pub fn post_login_target(from: Option<&str>) -> String {
    match from {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path.to_owned(),
        _ => AUTHED_LANDING.to_owned(),
    }
}

/// What the edge layer does with the current navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Nothing to enforce (or still waiting on verification).
    Stay,
    /// Redirect to the login entry point. `clear_store` is set when a held
    /// credential failed verification and must not be retried.
    ToLogin { target: String, clear_store: bool },
    /// Forward an authenticated user off an auth-entry page.
    ToDashboard,
}

/// Pure decision for one observation of (path, credential, session state).
#[must_use]
pub fn guard_decision(path: &str, has_credential: bool, state: &SessionState) -> GuardDecision {
    match classify_path(path) {
        RouteClass::Public | RouteClass::Bypassed => GuardDecision::Stay,
        RouteClass::Protected => {
            if !has_credential {
                return GuardDecision::ToLogin { target: login_redirect_target(path), clear_store: false };
            }
            if !state.is_loading() && !state.is_authenticated() {
                // Credential present but verification settled negative.
                return GuardDecision::ToLogin {
                    target: login_redirect_with_reason(path, "expired"),
                    clear_store: true,
                };
            }
            GuardDecision::Stay
        }
        RouteClass::AuthEntry => {
            if state.is_authenticated() {
                GuardDecision::ToDashboard
            } else {
                GuardDecision::Stay
            }
        }
    }
}

/// Install the edge layer: re-evaluate the guard on every navigation and on
/// every session-state change.
pub fn install_edge_guard<F>(auth: RwSignal<SessionState>, store: TokenStore, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let location = use_location();
    Effect::new(move || {
        let path = location.pathname.get();
        let state = auth.get();
        match guard_decision(&path, store.read().is_some(), &state) {
            GuardDecision::Stay => {}
            GuardDecision::ToLogin { target, clear_store } => {
                if clear_store {
                    store.clear();
                }
                navigate(&target, NavigateOptions::default());
            }
            GuardDecision::ToDashboard => {
                navigate(AUTHED_LANDING, NavigateOptions::default());
            }
        }
    });
}

/// Forced-logout side effect for a `SessionExpired` reported outside the
/// guard (an API call returning 401). The store is already cleared by the
/// API client; this only resolves the navigation.
#[cfg(feature = "csr")]
pub(crate) fn force_login_redirect() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let path = location.pathname().unwrap_or_default();
    let target = session_expired_target(&path);
    let _ = location.set_href(&target);
}

/// Login target after a mid-session expiry; preserves the path only when it
/// was worth returning to.
#[must_use]
pub fn session_expired_target(path: &str) -> String {
    match classify_path(path) {
        RouteClass::Protected => login_redirect_with_reason(path, "expired"),
        _ => "/login?reason=expired".to_owned(),
    }
}

/// Human-readable line for a `reason` query parameter on the login page.
#[must_use]
pub fn reason_message(reason: &str) -> Option<&'static str> {
    match reason {
        "expired" => Some("Your session has expired. Please log in again."),
        "revoked" => Some("Your session is no longer valid. Please log in again."),
        "disabled" => Some("This account is disabled. Contact support if this is unexpected."),
        _ => None,
    }
}
