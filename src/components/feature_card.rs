//! Landing-page feature tile.

use leptos::prelude::*;

use crate::styles::{FEATURE_CARD, FEATURE_DESC, FEATURE_ICON, FEATURE_TITLE};

#[component]
pub fn FeatureCard(icon: &'static str, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class=FEATURE_CARD>
            <div class=FEATURE_ICON>{icon}</div>
            <h3 class=FEATURE_TITLE>{title}</h3>
            <p class=FEATURE_DESC>{description}</p>
        </div>
    }
}
