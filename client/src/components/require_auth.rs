//! Route guard — view layer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps protected page content. The edge layer (`util::guard`) owns the
//! actual redirect; this wrapper only decides what to paint meanwhile, so a
//! protected page never flashes its content to an unauthenticated visitor
//! while the navigation resolves.

#[cfg(test)]
#[path = "require_auth_test.rs"]
mod require_auth_test;

use leptos::prelude::*;

use crate::net::token_store::TokenStore;
use crate::state::auth::SessionState;

/// What `RequireAuth` paints for one observation of the session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewGate {
    /// Verification still in flight: a neutral loading indicator.
    Loading,
    /// Settled unauthenticated: nothing, while the edge layer redirects.
    Hidden,
    /// Verified: the protected content.
    Content,
}

/// Pure gate decision, kept separate from the component for native tests.
#[must_use]
pub fn view_gate(state: &SessionState) -> ViewGate {
    if state.is_loading() {
        ViewGate::Loading
    } else if state.is_authenticated() {
        ViewGate::Content
    } else {
        ViewGate::Hidden
    }
}

/// Gate wrapper for protected page content. The loading indicator greets
/// the cached user by name when one is stored; the cache is display-only
/// and never substitutes for verification.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<SessionState>>();
    let store = expect_context::<TokenStore>();

    move || match view_gate(&auth.get()) {
        ViewGate::Loading => {
            let greeting = store
                .cached_user()
                .map_or_else(|| "Loading...".to_owned(), |u| format!("Welcome back, {}...", u.name));
            view! {
                <div class="loading-screen">
                    <p>{greeting}</p>
                </div>
            }
            .into_any()
        }
        ViewGate::Hidden => ().into_any(),
        ViewGate::Content => children().into_any(),
    }
}
