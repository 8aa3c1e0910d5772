//! Site footer with copyright and policy links.

use leptos::prelude::*;

use crate::styles::{FOOTER_BASE, FOOTER_CONTAINER, FOOTER_LINK};
use crate::util::format::current_year;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class=FOOTER_BASE>
            <div class=FOOTER_CONTAINER>
                <div class="text-sm">
                    {format!("© {} PrepMentor AI. All rights reserved.", current_year())}
                </div>
                <div class="flex gap-4">
                    <a href="/privacy" class=FOOTER_LINK>"Privacy Policy"</a>
                    <a href="/terms" class=FOOTER_LINK>"Terms of Service"</a>
                </div>
            </div>
        </footer>
    }
}
