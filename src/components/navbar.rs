//! Top navigation bar with a collapsible mobile menu.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::{self, AuthState};
use crate::styles::{
    LANDING_NAVBAR, LANDING_NAVBAR_BUTTON, MENU_TOGGLE, MOBILE_MENU_BASE, MOBILE_MENU_CLOSED, MOBILE_MENU_OPEN,
    NAVBAR_AVATAR, NAVBAR_BRAND, NAVBAR_EMAIL, NAVBAR_INNER, NAVBAR_LINKS,
};
use crate::util::format::avatar_initial;
use crate::util::storage::BrowserStorage;

const NAV_LINKS: [(&str, &str); 3] = [
    ("/dashboard", "📊 Dashboard"),
    ("/question-sets", "📚 Question Sets"),
    ("/questions", "📝 Questions"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();
    let menu_open = RwSignal::new(false);

    let signed_in = move || auth.with(AuthState::is_authenticated);
    let show_login = move || pathname.get() == "/" && !signed_in();
    let email = move || auth.with(|a| a.email().map(str::to_owned)).unwrap_or_default();
    let initial = move || auth.with(|a| avatar_initial(a.email()));

    let go = Callback::new(move |path: &'static str| {
        menu_open.set(false);
        navigate(path, NavigateOptions::default());
    });
    let on_logout = Callback::new(move |()| {
        auth::logout(&auth, &BrowserStorage);
        go.run("/login");
    });

    let links = move || {
        NAV_LINKS
            .iter()
            .map(|(path, label)| {
                let path = *path;
                view! {
                    <button
                        class=LANDING_NAVBAR_BUTTON
                        on:click=move |_| go.run(path)
                    >
                        {*label}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <nav class=LANDING_NAVBAR>
            <div class=NAVBAR_INNER>
                <button class=NAVBAR_BRAND on:click=move |_| go.run("/")>
                    "PrepMentor AI"
                </button>

                <button
                    class=MENU_TOGGLE
                    aria-label="Toggle menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>

                <div class=NAVBAR_LINKS>
                    <Show when=show_login>
                        <button
                            class=LANDING_NAVBAR_BUTTON
                            on:click=move |_| go.run("/login")
                        >
                            "🪪 Login"
                        </button>
                    </Show>
                    <Show when=signed_in>
                        {links}
                        <span class=NAVBAR_AVATAR>{initial}</span>
                        <span class=NAVBAR_EMAIL>{email}</span>
                        <button
                            class="px-3 py-1 rounded-md border border-white text-white hover:bg-white hover:text-black transition"
                            on:click=move |_| on_logout.run(())
                        >
                            "Logout"
                        </button>
                    </Show>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <div class=move || {
                    format!(
                        "{MOBILE_MENU_BASE} {} items-start pl-6",
                        if menu_open.get() { MOBILE_MENU_OPEN } else { MOBILE_MENU_CLOSED },
                    )
                }>
                    <Show when=show_login>
                        <button
                            class=LANDING_NAVBAR_BUTTON
                            on:click=move |_| go.run("/login")
                        >
                            "🪪 Login"
                        </button>
                    </Show>
                    <Show when=signed_in>
                        <span class=NAVBAR_AVATAR>{initial}</span>
                        <span class=NAVBAR_EMAIL>{email}</span>
                        {links}
                        <button
                            class="mt-4 px-3 py-1 rounded-md border border-white text-white w-full text-left"
                            on:click=move |_| on_logout.run(())
                        >
                            "🚪 Logout"
                        </button>
                    </Show>
                </div>
            </Show>
        </nav>
    }
}
