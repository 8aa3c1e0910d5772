//! Page chrome: navbar and footer around the routed page.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::footer::Footer;
use super::navbar::Navbar;
use crate::state::auth::AuthState;

/// Routes that render without any chrome.
const BARE_ROUTES: [&str; 2] = ["/login", "/signup"];

/// Chrome is hidden on the auth forms; elsewhere it needs a token, except on
/// the landing page.
pub fn should_show_chrome(path: &str, has_token: bool) -> bool {
    !BARE_ROUTES.contains(&path) && (has_token || path == "/")
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let pathname = use_location().pathname;
    let show = Memo::new(move |_| should_show_chrome(&pathname.get(), auth.with(AuthState::is_authenticated)));

    view! {
        <Show when=move || show.get()>
            <Navbar/>
        </Show>
        <main>{children()}</main>
        <Show when=move || show.get()>
            <Footer/>
        </Show>
    }
}
