//! Login page.
//!
//! Reads two query parameters set by the route guard: `from` (the path to
//! return to after login, validated against open redirects) and `reason`
//! (rendered as a banner explaining why the user landed here).

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::auth::AuthService;
use crate::net::token_store::TokenStore;
use crate::state::auth::SessionState;
use crate::util::guard::{post_login_target, reason_message};
use crate::util::validate::validate_login;

/// Login form with inline errors. Authenticated visitors never see this
/// page; the edge guard forwards them to the dashboard.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<SessionState>>();
    let service = AuthService::new(expect_context::<TokenStore>());
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let banner = move || query.with(|q| q.get("reason")).and_then(|r| reason_message(&r));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(None);

        let password_value = password.get_untracked();
        let email_value = match validate_login(&email.get_untracked(), &password_value) {
            Ok(normalized) => normalized,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };

        busy.set(true);
        let service = service.clone();
        let navigate = navigate.clone();
        let from = query.with_untracked(|q| q.get("from"));
        leptos::task::spawn_local(async move {
            match service.login(&email_value, &password_value).await {
                Ok(user) => {
                    auth.update(|s| s.login_succeeded(user));
                    navigate(&post_login_target(from.as_deref()), NavigateOptions::default());
                }
                Err(e) => {
                    busy.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <h1>"Log in"</h1>

            {move || banner().map(|message| view! { <p class="auth-page__banner">{message}</p> })}

            <form class="auth-form" on:submit=on_submit>
                <label class="auth-form__label">
                    "Email"
                    <input
                        class="auth-form__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-form__label">
                    "Password"
                    <input
                        class="auth-form__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>

                {move || error.get().map(|message| view! { <p class="auth-form__error">{message}</p> })}

                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Logging in..." } else { "Log in" }}
                </button>
            </form>

            <p class="auth-page__alt">
                "New here? " <A href="/signup">"Create an account"</A>
            </p>
        </div>
    }
}
