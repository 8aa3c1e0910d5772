//! Catch-all 404 page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::styles::{NOT_FOUND_CODE, NOT_FOUND_PAGE, PRIMARY_BUTTON};

#[component]
pub fn NotFound() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class=NOT_FOUND_PAGE>
            <h1 class=NOT_FOUND_CODE>"404"</h1>
            <h2 class="text-xl font-semibold text-white">"Page Not Found"</h2>
            <p class="text-white/80 mb-6">
                "Sorry, the page you are looking for doesn't exist or has been moved."
            </p>
            <div class="w-48">
                <button
                    class=PRIMARY_BUTTON
                    on:click=move |_| navigate("/", NavigateOptions::default())
                >
                    "Go to Home"
                </button>
            </div>
        </div>
    }
}
