//! Public landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::SessionState;

/// Storefront entry — viewable without a session, with the sign-in links
/// swapped for a dashboard link once one exists.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<SessionState>>();

    view! {
        <div class="home-page">
            <h1>"Forkline"</h1>
            <p>"Order food from local restaurants, delivered to your door."</p>
            <nav class="home-page__links">
                <Show
                    when=move || auth.get().is_authenticated()
                    fallback=|| {
                        view! {
                            <A href="/login">"Log in"</A>
                            <A href="/signup">"Sign up"</A>
                        }
                    }
                >
                    <A href="/dashboard">"Go to dashboard"</A>
                </Show>
            </nav>
        </div>
    }
}
