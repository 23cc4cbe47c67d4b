//! Dashboard page — the authenticated landing route.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::require_auth::RequireAuth;
use crate::net::auth::AuthService;
use crate::net::token_store::TokenStore;
use crate::state::auth::SessionState;

/// Authenticated home. Content is gated by `RequireAuth`; the edge guard
/// handles the redirect when the session is missing or dead.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <DashboardContent/>
        </RequireAuth>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let auth = expect_context::<RwSignal<SessionState>>();
    let service = AuthService::new(expect_context::<TokenStore>());
    let navigate = use_navigate();

    let display_name = move || auth.get().user().map(|u| u.name.clone()).unwrap_or_default();

    let on_logout = move |_| {
        let service = service.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            service.logout().await;
            auth.update(SessionState::logged_out);
            navigate("/login", NavigateOptions::default());
        });
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{move || format!("Welcome, {}", display_name())}</h1>
                <button class="btn" on:click=on_logout>
                    "Log out"
                </button>
            </header>

            <section class="dashboard-page__orders">
                <h2>"Your orders"</h2>
                <p>"No orders yet. Browse the menu to get started."</p>
            </section>
        </div>
    }
}
