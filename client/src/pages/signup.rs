//! Signup page.
//!
//! Backend validation failures (duplicate email, weak password) render
//! inline; the form never navigates away on a rejected submission.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::auth::AuthService;
use crate::net::token_store::TokenStore;
use crate::state::auth::SessionState;
use crate::util::guard::AUTHED_LANDING;
use crate::util::validate::validate_signup;

/// Account creation form. A successful signup is also a login: the session
/// is seeded and the user lands on the dashboard.
#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<SessionState>>();
    let service = AuthService::new(expect_context::<TokenStore>());
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(None);

        let password_value = password.get_untracked();
        let (username_value, email_value) =
            match validate_signup(&username.get_untracked(), &email.get_untracked(), &password_value) {
                Ok(parts) => parts,
                Err(message) => {
                    error.set(Some(message.to_owned()));
                    return;
                }
            };

        busy.set(true);
        let service = service.clone();
        let navigate = navigate.clone();
        let phone_value = phone.get_untracked();
        leptos::task::spawn_local(async move {
            let phone_trimmed = phone_value.trim();
            let phone_arg = (!phone_trimmed.is_empty()).then_some(phone_trimmed);
            match service.signup(&username_value, &email_value, phone_arg, &password_value).await {
                Ok(user) => {
                    auth.update(|s| s.login_succeeded(user));
                    navigate(AUTHED_LANDING, NavigateOptions::default());
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
            <h1>"Sign up"</h1>

            <form class="auth-form" on:submit=on_submit>
                <label class="auth-form__label">
                    "Username"
                    <input
                        class="auth-form__input"
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
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
                    "Phone (optional)"
                    <input
                        class="auth-form__input"
                        type="tel"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
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
                    {move || if busy.get() { "Creating account..." } else { "Sign up" }}
                </button>
            </form>

            <p class="auth-page__alt">
                "Already have an account? " <A href="/login">"Log in"</A>
            </p>
        </div>
    }
}
