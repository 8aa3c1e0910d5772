//! Landing page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::feature_card::FeatureCard;
use crate::styles::{LANDING_FEATURES_GRID, LANDING_GRADIENT_BUTTON, LANDING_HEADING, LANDING_PAGE, LANDING_SUB_HEADING};

const FEATURES: [(&str, &str, &str); 4] = [
    (
        "🤖",
        "Smart Practice",
        "Practice with real interview questions tailored to your field and experience level.",
    ),
    (
        "💡",
        "AI Feedback",
        "Get instant, detailed feedback on your answers with actionable improvement tips.",
    ),
    (
        "📈",
        "Track Progress",
        "Monitor your improvement over time with detailed analytics and performance insights.",
    ),
    (
        "🎥",
        "Multi-format",
        "Practice with text, audio, or video responses to simulate real interview conditions.",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class=LANDING_PAGE>
            <section class="flex flex-col items-center text-center pt-12 pb-8 sm:pt-20 sm:pb-10 px-4">
                <h1 class=LANDING_HEADING>"PrepMentor AI"</h1>
                <p class=LANDING_SUB_HEADING>"Master your interviews with AI-powered practice and feedback"</p>
                <button
                    class=LANDING_GRADIENT_BUTTON
                    on:click=move |_| navigate("/login", NavigateOptions::default())
                >
                    "Start Practicing Now 🚀"
                </button>
            </section>
            <div class=LANDING_FEATURES_GRID>
                {FEATURES
                    .into_iter()
                    .map(|(icon, title, description)| {
                        view! { <FeatureCard icon=icon title=title description=description/> }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
