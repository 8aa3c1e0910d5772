//! Login page: email + password against `POST /login`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::backend::{Backend, HttpBackend};
use crate::net::types::LoginSession;
use crate::state::auth::{self, AuthState};
use crate::styles::{
    AUTH_SWITCH_LINK, AUTH_SWITCH_TEXT, CARD_CONTAINER, CARD_HEADING, CENTER_SCREEN, ERROR_TEXT, FORM_LAYOUT,
    INPUT_CLASS, INPUT_LABEL, PASSWORD_TOGGLE, PRIMARY_BUTTON,
};
use crate::util::storage::BrowserStorage;
use crate::util::task::spawn_browser;
use crate::util::validation::{email_hint, validate_login};

/// Validate, then call the backend. Invalid input never reaches the network.
///
/// # Errors
///
/// Returns the validation message or the backend's error text.
pub async fn submit_login<B: Backend>(backend: &B, email: &str, password: &str) -> Result<LoginSession, String> {
    validate_login(email, password).map_err(|e| e.to_string())?;
    backend.login(email, password).await.map_err(|e| e.to_string())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let backend = expect_context::<HttpBackend>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_success = Callback::new(move |session: LoginSession| {
        auth::login(&auth, &BrowserStorage, session);
        navigate("/dashboard", NavigateOptions::default());
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(String::new());
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        let backend = backend.clone();
        busy.set(true);
        spawn_browser(async move {
            match submit_login(&backend, &email_value, &password_value).await {
                Ok(session) => on_success.run(session),
                Err(message) => error.set(message),
            }
            busy.set(false);
        });
    };

    view! {
        <div class=CENTER_SCREEN>
            <div class=CARD_CONTAINER>
                <h2 class=CARD_HEADING>"Login to PrepMentor AI"</h2>
                <form class=FORM_LAYOUT on:submit=on_submit novalidate>
                    <div>
                        <label class=INPUT_LABEL for="login-email">"Email"</label>
                        <input
                            id="login-email"
                            class=INPUT_CLASS
                            type="email"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <Show when=move || email.with(|e| email_hint(e).is_some())>
                            <p class="text-red-600 text-xs mt-1">
                                {move || email.with(|e| email_hint(e).unwrap_or_default())}
                            </p>
                        </Show>
                    </div>
                    <div>
                        <label class=INPUT_LABEL for="login-password">"Password"</label>
                        <div class="relative">
                            <input
                                id="login-password"
                                class=INPUT_CLASS
                                type=move || if show_password.get() { "text" } else { "password" }
                                required
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                            <button
                                type="button"
                                class=PASSWORD_TOGGLE
                                on:click=move |_| show_password.update(|v| *v = !*v)
                            >
                                {move || if show_password.get() { "Hide" } else { "Show" }}
                            </button>
                        </div>
                    </div>
                    <button class=PRIMARY_BUTTON type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Login" }}
                    </button>
                    <Show when=move || !error.get().is_empty()>
                        <p class=ERROR_TEXT>{move || error.get()}</p>
                    </Show>
                </form>
                <p class=AUTH_SWITCH_TEXT>
                    "Don't have an account? "
                    <a href="/signup" class=AUTH_SWITCH_LINK>"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
