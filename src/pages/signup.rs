//! Signup page: name, email and password against `POST /auth/register`.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::backend::{Backend, HttpBackend};
use crate::styles::{
    AUTH_SWITCH_LINK, AUTH_SWITCH_TEXT, CARD_CONTAINER, CARD_HEADING, CENTER_SCREEN, ERROR_TEXT, FORM_LAYOUT,
    INPUT_CLASS, INPUT_LABEL, PASSWORD_TOGGLE, PRIMARY_BUTTON,
};
use crate::util::task::spawn_browser;
use crate::util::validation::{email_hint, validate_signup};

/// Validate, then register. Returns the backend's confirmation message.
///
/// # Errors
///
/// Returns the validation message or the backend's error text.
pub async fn submit_signup<B: Backend>(backend: &B, name: &str, email: &str, password: &str) -> Result<String, String> {
    validate_signup(name, email, password).map_err(|e| e.to_string())?;
    backend.register(name, email, password).await.map_err(|e| e.to_string())
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let backend = expect_context::<HttpBackend>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_registered = Callback::new(move |message: String| {
        log::info!("registered: {message}");
        navigate("/login", NavigateOptions::default());
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(String::new());
        let (name_value, email_value, password_value) =
            (name.get_untracked(), email.get_untracked(), password.get_untracked());
        let backend = backend.clone();
        busy.set(true);
        spawn_browser(async move {
            match submit_signup(&backend, &name_value, &email_value, &password_value).await {
                Ok(message) => on_registered.run(message),
                Err(message) => error.set(message),
            }
            busy.set(false);
        });
    };

    view! {
        <div class=CENTER_SCREEN>
            <div class=CARD_CONTAINER>
                <h2 class=CARD_HEADING>"Create your account"</h2>
                <form class=FORM_LAYOUT on:submit=on_submit novalidate>
                    <div>
                        <label class=INPUT_LABEL for="signup-name">"Name"</label>
                        <input
                            id="signup-name"
                            class=INPUT_CLASS
                            type="text"
                            required
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class=INPUT_LABEL for="signup-email">"Email"</label>
                        <input
                            id="signup-email"
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
                        <label class=INPUT_LABEL for="signup-password">"Password"</label>
                        <div class="relative">
                            <input
                                id="signup-password"
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
                        {move || if busy.get() { "Signing up..." } else { "Sign Up" }}
                    </button>
                    <Show when=move || !error.get().is_empty()>
                        <p class=ERROR_TEXT>{move || error.get()}</p>
                    </Show>
                </form>
                <p class=AUTH_SWITCH_TEXT>
                    "Already have an account? "
                    <a href="/login" class=AUTH_SWITCH_LINK>"Login"</a>
                </p>
            </div>
        </div>
    }
}
