//! Dashboard page: answer statistics and weak questions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated landing route. Stats are fetched on mount and on Refresh;
//! low-score questions render in the order the backend returns them.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::QuestionContext;
use crate::net::types::LowScoreQuestion;
use crate::state::auth::AuthState;
use crate::styles::{
    DASHBOARD_CONTAINER, DASHBOARD_LOW_SCORE_CARD, DASHBOARD_LOW_SCORE_CARD_CONTENT, DASHBOARD_LOW_SCORE_DATE,
    DASHBOARD_LOW_SCORE_EMPTY, DASHBOARD_LOW_SCORE_EMPTY_ICON, DASHBOARD_LOW_SCORE_EMPTY_SUBTEXT,
    DASHBOARD_LOW_SCORE_EMPTY_TITLE, DASHBOARD_LOW_SCORE_HEADER, DASHBOARD_LOW_SCORE_LIST, DASHBOARD_LOW_SCORE_META,
    DASHBOARD_LOW_SCORE_QUESTION_TEXT, DASHBOARD_LOW_SCORE_SECTION, DASHBOARD_LOW_SCORE_TITLE, DASHBOARD_METRIC_CARD,
    DASHBOARD_METRIC_CONTENT, DASHBOARD_METRIC_ICON, DASHBOARD_METRIC_LABEL, DASHBOARD_METRIC_NUMBER,
    DASHBOARD_METRICS_GRID, DASHBOARD_PAGE, DASHBOARD_QUICK_ACTION_CARD, DASHBOARD_QUICK_ACTION_CARD_GREEN,
    DASHBOARD_QUICK_ACTION_CARD_PURPLE, DASHBOARD_QUICK_ACTION_CONTENT, DASHBOARD_QUICK_ACTION_ICON,
    DASHBOARD_QUICK_ACTION_ICON_GREEN, DASHBOARD_QUICK_ACTION_ICON_PURPLE, DASHBOARD_QUICK_ACTION_SUBTEXT,
    DASHBOARD_QUICK_ACTION_SUBTEXT_GREEN, DASHBOARD_QUICK_ACTION_SUBTEXT_PURPLE, DASHBOARD_QUICK_ACTION_TITLE,
    DASHBOARD_QUICK_ACTION_TITLE_GREEN, DASHBOARD_QUICK_ACTION_TITLE_PURPLE, DASHBOARD_QUICK_ACTIONS,
    DASHBOARD_QUICK_ACTIONS_GRID, DASHBOARD_QUICK_ACTIONS_TITLE, DASHBOARD_WELCOME_CARD, DASHBOARD_WELCOME_CONTENT,
    DASHBOARD_WELCOME_SUBTEXT, DASHBOARD_WELCOME_TEXT, ERROR_TEXT, OUTLINE_BUTTON, PRIMARY_BUTTON, PROGRESS_TRACK,
    ScoreTone, chip,
};
use crate::util::format::{format_average, format_submitted_date, greeting_name, score_percent};
use crate::util::task::spawn_browser;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let store = expect_context::<QuestionContext>();
    let state = *store.cell();
    let navigate = use_navigate();

    let refresh = Callback::new(move |()| {
        let store = store.clone();
        spawn_browser(async move { store.fetch_dashboard_stats().await });
    });

    Effect::new(move || refresh.run(()));

    let go = Callback::new(move |path: String| navigate(&path, NavigateOptions::default()));

    let greeting = move || format!("Welcome back, {}! 👋", auth.with(|a| greeting_name(a.user.as_ref())));
    let answered = move || {
        state.with(|s| {
            s.dashboard_stats
                .as_ref()
                .and_then(|d| d.questions_answered_count)
                .unwrap_or(0)
        })
    };
    let average = move || state.with(|s| format_average(s.dashboard_stats.as_ref().and_then(|d| d.average_score)));
    let low_scores = move || {
        state.with(|s| {
            s.dashboard_stats
                .as_ref()
                .map(|d| d.low_score_questions.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <div class=DASHBOARD_PAGE>
            <div class=DASHBOARD_CONTAINER>
                <section class=DASHBOARD_WELCOME_CARD>
                    <div class=DASHBOARD_WELCOME_CONTENT>
                        <div>
                            <h1 class=DASHBOARD_WELCOME_TEXT>{greeting}</h1>
                            <p class=DASHBOARD_WELCOME_SUBTEXT>
                                "Ready to continue your interview preparation journey?"
                            </p>
                        </div>
                        <button
                            class=OUTLINE_BUTTON
                            disabled=move || state.with(|s| s.loading)
                            on:click=move |_| refresh.run(())
                        >
                            "⟳ Refresh"
                        </button>
                    </div>
                </section>

                <Show when=move || state.with(|s| s.error.is_some())>
                    <p class=ERROR_TEXT>{move || state.with(|s| s.error.clone().unwrap_or_default())}</p>
                </Show>

                <div class=DASHBOARD_METRICS_GRID>
                    <MetricCard value=Signal::derive(move || answered().to_string()) label="Questions Answered" icon="✅"/>
                    <MetricCard value=Signal::derive(average) label="Average Score" icon="⭐"/>
                </div>

                <section class=DASHBOARD_LOW_SCORE_SECTION>
                    <div class=DASHBOARD_LOW_SCORE_HEADER>
                        <h2 class=DASHBOARD_LOW_SCORE_TITLE>"Questions Needing Improvement"</h2>
                        <span class=chip("border border-amber-400 text-amber-700")>
                            {move || format!("⚠ {} questions", low_scores().len())}
                        </span>
                    </div>
                    <Show
                        when=move || !low_scores().is_empty()
                        fallback=|| {
                            view! {
                                <div class=DASHBOARD_LOW_SCORE_EMPTY>
                                    <div class=DASHBOARD_LOW_SCORE_EMPTY_ICON>"🏆"</div>
                                    <p class=DASHBOARD_LOW_SCORE_EMPTY_TITLE>"Great job! No low score questions"</p>
                                    <p class=DASHBOARD_LOW_SCORE_EMPTY_SUBTEXT>
                                        "Keep up the excellent work on your interview preparation"
                                    </p>
                                </div>
                            }
                        }
                    >
                        <div class=DASHBOARD_LOW_SCORE_LIST>
                            {move || {
                                low_scores()
                                    .into_iter()
                                    .map(|question| view! { <LowScoreCard question=question on_retry=go/> })
                                    .collect_view()
                            }}
                        </div>
                    </Show>
                </section>

                <section class=DASHBOARD_QUICK_ACTIONS>
                    <h2 class=DASHBOARD_QUICK_ACTIONS_TITLE>"Quick Actions"</h2>
                    <div class=DASHBOARD_QUICK_ACTIONS_GRID>
                        <div class=DASHBOARD_QUICK_ACTION_CARD on:click=move |_| go.run("/questions".to_owned())>
                            <div class=DASHBOARD_QUICK_ACTION_CONTENT>
                                <div class=DASHBOARD_QUICK_ACTION_ICON>"▶"</div>
                                <h3 class=DASHBOARD_QUICK_ACTION_TITLE>"Practice Questions"</h3>
                                <p class=DASHBOARD_QUICK_ACTION_SUBTEXT>"Start practicing"</p>
                            </div>
                        </div>
                        <div
                            class=DASHBOARD_QUICK_ACTION_CARD_PURPLE
                            on:click=move |_| go.run("/question-sets".to_owned())
                        >
                            <div class=DASHBOARD_QUICK_ACTION_CONTENT>
                                <div class=DASHBOARD_QUICK_ACTION_ICON_PURPLE>"📚"</div>
                                <h3 class=DASHBOARD_QUICK_ACTION_TITLE_PURPLE>"Question Sets"</h3>
                                <p class=DASHBOARD_QUICK_ACTION_SUBTEXT_PURPLE>"Browse sets"</p>
                            </div>
                        </div>
                        <div class=DASHBOARD_QUICK_ACTION_CARD_GREEN on:click=move |_| go.run("/questions".to_owned())>
                            <div class=DASHBOARD_QUICK_ACTION_CONTENT>
                                <div class=DASHBOARD_QUICK_ACTION_ICON_GREEN>"📈"</div>
                                <h3 class=DASHBOARD_QUICK_ACTION_TITLE_GREEN>"Improve Skills"</h3>
                                <p class=DASHBOARD_QUICK_ACTION_SUBTEXT_GREEN>"Focus on weak areas"</p>
                            </div>
                        </div>
                    </div>
                </section>
            </div>
        </div>
    }
}

#[component]
fn MetricCard(value: Signal<String>, label: &'static str, icon: &'static str) -> impl IntoView {
    view! {
        <div class=DASHBOARD_METRIC_CARD>
            <div class=DASHBOARD_METRIC_CONTENT>
                <div>
                    <div class=DASHBOARD_METRIC_NUMBER>{move || value.get()}</div>
                    <div class=DASHBOARD_METRIC_LABEL>{label}</div>
                </div>
                <div class=DASHBOARD_METRIC_ICON>{icon}</div>
            </div>
        </div>
    }
}

#[component]
fn LowScoreCard(question: LowScoreQuestion, on_retry: Callback<String>) -> impl IntoView {
    let tone = ScoreTone::for_score(question.score);
    let retry_path = format!("/answer/{}", question.question_id);
    let bar_width = format!("width: {}%", score_percent(question.score));

    view! {
        <div class=DASHBOARD_LOW_SCORE_CARD>
            <div class=DASHBOARD_LOW_SCORE_CARD_CONTENT>
                <div class="flex-1">
                    <h3 class=DASHBOARD_LOW_SCORE_QUESTION_TEXT>{question.question_text}</h3>
                    <div class=DASHBOARD_LOW_SCORE_META>
                        <span class=DASHBOARD_LOW_SCORE_DATE>
                            {format!("Submitted: {}", format_submitted_date(&question.submitted_at))}
                        </span>
                        <span class=chip(tone.chip_class())>{format!("Score: {}/10", question.score)}</span>
                    </div>
                    <div class=format!("{PROGRESS_TRACK} h-1.5")>
                        <div class=format!("h-1.5 {}", tone.bar_class()) style=bar_width></div>
                    </div>
                </div>
                <div class="md:ml-4 w-full md:w-32">
                    <button class=PRIMARY_BUTTON on:click=move |_| on_retry.run(retry_path.clone())>
                        "⟳ Retry"
                    </button>
                </div>
            </div>
        </div>
    }
}
