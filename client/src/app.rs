//! Root application component with routing and context providers.
//!
//! ARCHITECTURE
//! ============
//! The token store and session-state signal are constructed once here and
//! provided as context; every page and the route guard share these two
//! instances. Session initialization (credential check + backend verify)
//! starts immediately on mount, before any route renders.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_navigate;

use crate::net::auth::AuthService;
use crate::net::token_store::TokenStore;
use crate::pages::{dashboard::DashboardPage, home::HomePage, login::LoginPage, signup::SignupPage};
use crate::state::auth::{SessionState, init_session};
use crate::util::guard::install_edge_guard;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = TokenStore::default();
    let auth = RwSignal::new(SessionState::default());
    provide_context(store.clone());
    provide_context(auth);

    init_session(auth, AuthService::new(store.clone()));

    view! {
        <Stylesheet id="leptos" href="/pkg/forkline.css"/>
        <Title text="Forkline"/>

        <Router>
            <GuardedRoutes store=store auth=auth/>
        </Router>
    }
}

/// Route table, with the edge guard installed inside the router context so
/// it can observe the current location and drive navigation.
#[component]
fn GuardedRoutes(store: TokenStore, auth: RwSignal<SessionState>) -> impl IntoView {
    let navigate = use_navigate();
    install_edge_guard(auth, store, navigate);

    view! {
        <Routes fallback=|| "Page not found.".into_view()>
            <Route path=StaticSegment("") view=HomePage/>
            <Route path=StaticSegment("login") view=LoginPage/>
            <Route path=StaticSegment("signup") view=SignupPage/>
            <Route path=StaticSegment("dashboard") view=DashboardPage/>
        </Routes>
    }
}
