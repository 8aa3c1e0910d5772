//! Answer page: submit a text answer and read the AI feedback.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/answer/:questionId[/:answerId]`. On mount the page asks for an existing
//! answer to the question. If there is one, its feedback is shown straight
//! away; otherwise the question is fetched through the shared store so the
//! form can show its text.
//!
//! DESIGN
//! ======
//! Page-local state lives in `AnswerView` and only changes through the
//! transitions below. The feedback view is entered only after a successful
//! submit; a failed submit keeps the typed text and shows the error.

#[cfg(test)]
#[path = "answer_test.rs"]
mod answer_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::app::QuestionContext;
use crate::net::backend::Backend;
use crate::net::types::{AnswerResponse, Question, SubmitAnswerRequest};
use crate::state::StateCell;
use crate::state::questions::{QuestionState, QuestionStore};
use crate::styles::{
    ANSWER_AI_FEEDBACK, ANSWER_AI_SECTION, ANSWER_AI_TEXT, ANSWER_BREAKDOWN_HEADER, ANSWER_BREAKDOWN_ITEM,
    ANSWER_BREAKDOWN_LABEL, ANSWER_BREAKDOWN_PROGRESS, ANSWER_BREAKDOWN_TITLE, ANSWER_BREAKDOWN_VALUE,
    ANSWER_CONTAINER, ANSWER_DIVIDER, ANSWER_ERROR_TEXT, ANSWER_FEEDBACK_CARD, ANSWER_FEEDBACK_TITLE, ANSWER_GRID,
    ANSWER_HEADER, ANSWER_INPUT_FIELD, ANSWER_PAGE, ANSWER_QUESTION_CARD, ANSWER_QUESTION_TEXT,
    ANSWER_QUESTION_TITLE, ANSWER_REATTEMPT_BUTTON, ANSWER_SCORE_HEADER, ANSWER_SCORE_LABEL, ANSWER_SCORE_PROGRESS,
    ANSWER_SCORE_SECTION, ANSWER_SUBMIT_BUTTON, ANSWER_TITLE, LOADING_CONTAINER, PROGRESS_TRACK, ScoreTone, chip,
};
use crate::util::format::{score_percent, score_summary};
use crate::util::task::spawn_browser;
use crate::util::validation::answer_ready;

const LOAD_FAILED: &str = "Failed to load question or answer";
const SUBMIT_FAILED: &str = "Failed to submit answer";

/// Page-local state of the Answer page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnswerView {
    pub text: String,
    pub loading: bool,
    pub submitting: bool,
    pub response: Option<AnswerResponse>,
    pub error: Option<String>,
}

impl AnswerView {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Show a previously submitted answer and its feedback.
    pub fn load_existing(&mut self, answer: AnswerResponse) {
        self.text.clone_from(&answer.text);
        self.response = Some(answer);
    }

    /// Whether the page shows its loading state; the answer text never affects it.
    pub fn is_busy(&self, store_loading: bool) -> bool {
        self.loading || store_loading
    }

    pub fn can_submit(&self) -> bool {
        !self.submitting && answer_ready(&self.text)
    }

    pub fn begin_submit(&mut self) {
        self.submitting = true;
        self.error = None;
    }

    pub fn finish_submit(&mut self, result: Result<AnswerResponse, String>) {
        match result {
            Ok(answer) => self.response = Some(answer),
            Err(message) => self.error = Some(message),
        }
        self.submitting = false;
    }

    /// Drop the feedback and start over with an empty form.
    pub fn reattempt(&mut self) {
        self.response = None;
        self.text.clear();
        self.error = None;
        self.loading = true;
    }
}

/// Text shown as the question heading, if any is known.
pub fn question_text(response: Option<&AnswerResponse>, current: Option<&Question>) -> Option<String> {
    response
        .map(|a| a.question_text.clone())
        .filter(|t| !t.is_empty())
        .or_else(|| current.map(|q| q.title.clone()).filter(|t| !t.is_empty()))
}

/// Numeric `questionId` route parameter.
pub fn parse_question_id(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|id| id.trim().parse().ok())
}

/// Load an existing answer, falling back to fetching the question.
pub async fn initialize<V, C, B>(view: &V, store: &QuestionStore<C, B>, question_id: i64)
where
    V: StateCell<AnswerView>,
    C: StateCell<QuestionState>,
    B: Backend,
{
    view.modify(AnswerView::begin_load);
    match store.backend().answer_by_question(question_id).await {
        Ok(Some(answer)) => view.modify(|v| v.load_existing(answer)),
        Ok(None) => store.fetch_question_by_id(question_id).await,
        Err(e) => {
            log::warn!("{LOAD_FAILED}: {e}");
            view.modify(|v| v.error = Some(LOAD_FAILED.to_owned()));
            store.fetch_question_by_id(question_id).await;
        }
    }
    view.modify(|v| v.loading = false);
}

/// Submit the current text. Blank answers are ignored.
pub async fn submit<V, B>(view: &V, backend: &B, question_id: i64)
where
    V: StateCell<AnswerView>,
    B: Backend,
{
    let snapshot = view.snapshot();
    if !snapshot.can_submit() {
        return;
    }
    view.modify(AnswerView::begin_submit);
    let req = SubmitAnswerRequest::text(question_id, &snapshot.text);
    let result = backend.submit_answer(&req).await.map_err(|e| {
        let message = e.to_string();
        if message.trim().is_empty() { SUBMIT_FAILED.to_owned() } else { message }
    });
    view.modify(|v| v.finish_submit(result));
}

/// Clear the feedback and refetch the question for a fresh attempt.
pub async fn reattempt<V, C, B>(view: &V, store: &QuestionStore<C, B>, question_id: i64)
where
    V: StateCell<AnswerView>,
    C: StateCell<QuestionState>,
    B: Backend,
{
    view.modify(AnswerView::reattempt);
    store.fetch_question_by_id(question_id).await;
    view.modify(|v| v.loading = false);
}

#[component]
pub fn AnswerPage() -> impl IntoView {
    let store = expect_context::<QuestionContext>();
    let state = *store.cell();
    let params = use_params_map();
    let question_id = Memo::new(move |_| params.with(|p| parse_question_id(p.get("questionId").as_deref())));
    let view_state = RwSignal::new(AnswerView {
        loading: true,
        ..AnswerView::default()
    });

    let init_store = store.clone();
    Effect::new(move || {
        let Some(id) = question_id.get() else {
            view_state.update(|v| v.loading = false);
            return;
        };
        let store = init_store.clone();
        spawn_browser(async move { initialize(&view_state, &store, id).await });
    });

    let submit_store = store.clone();
    let on_submit = Callback::new(move |()| {
        let Some(id) = question_id.get_untracked() else {
            return;
        };
        let backend = submit_store.backend().clone();
        spawn_browser(async move { submit(&view_state, &backend, id).await });
    });

    let on_reattempt = Callback::new(move |()| {
        let Some(id) = question_id.get_untracked() else {
            return;
        };
        let store = store.clone();
        spawn_browser(async move { reattempt(&view_state, &store, id).await });
    });

    let heading = Memo::new(move |_| {
        view_state.with(|v| state.with(|s| question_text(v.response.as_ref(), s.current_question.as_ref())))
    });
    // Keystrokes must not re-run the page closure.
    let busy = Memo::new(move |_| {
        let store_loading = state.with(|s| s.loading);
        view_state.with(|v| v.is_busy(store_loading))
    });

    view! {
        {move || {
            if busy.get() {
                view! { <div class=LOADING_CONTAINER>"Loading..."</div> }.into_any()
            } else if let Some(text) = heading.get() {
                view! {
                    <div class=ANSWER_PAGE>
                        <div class=ANSWER_CONTAINER>
                            <header class=ANSWER_HEADER>
                                <h1 class=ANSWER_TITLE>"Answer Question"</h1>
                            </header>
                            <div class=ANSWER_GRID>
                                <QuestionPanel text=text view_state=view_state on_submit=on_submit/>
                                <Show when=move || view_state.with(|v| v.response.is_some())>
                                    <FeedbackPanel view_state=view_state on_reattempt=on_reattempt/>
                                </Show>
                            </div>
                        </div>
                    </div>
                }
                    .into_any()
            } else {
                view! { <div class=LOADING_CONTAINER>"Question not found"</div> }.into_any()
            }
        }}
    }
}

#[component]
fn QuestionPanel(text: String, view_state: RwSignal<AnswerView>, on_submit: Callback<()>) -> impl IntoView {
    let answered = move || view_state.with(|v| v.response.is_some());
    view! {
        <div class=ANSWER_QUESTION_CARD>
            <h2 class=ANSWER_QUESTION_TITLE>"Question"</h2>
            <p class=ANSWER_QUESTION_TEXT>{text}</p>
            <textarea
                class=ANSWER_INPUT_FIELD
                placeholder="Type your answer here..."
                prop:value=move || view_state.with(|v| v.text.clone())
                prop:disabled=answered
                on:input=move |ev| view_state.update(|v| v.text = event_target_value(&ev))
            ></textarea>
            <Show when=move || !answered()>
                <button
                    class=ANSWER_SUBMIT_BUTTON
                    disabled=move || !view_state.with(AnswerView::can_submit)
                    on:click=move |_| on_submit.run(())
                >
                    {move || if view_state.with(|v| v.submitting) { "Submitting..." } else { "Submit Answer" }}
                </button>
            </Show>
            <Show when=move || view_state.with(|v| v.error.is_some())>
                <p class=ANSWER_ERROR_TEXT>{move || view_state.with(|v| v.error.clone().unwrap_or_default())}</p>
            </Show>
        </div>
    }
}

#[component]
fn FeedbackPanel(view_state: RwSignal<AnswerView>, on_reattempt: Callback<()>) -> impl IntoView {
    let response = move || view_state.with(|v| v.response.clone().unwrap_or_default());
    let score = move || response().score;

    view! {
        <div class=ANSWER_FEEDBACK_CARD>
            <h2 class=ANSWER_FEEDBACK_TITLE>"Feedback"</h2>
            <div class=ANSWER_SCORE_SECTION>
                <div class=ANSWER_SCORE_HEADER>
                    <span class=ANSWER_SCORE_LABEL>"Overall Score"</span>
                    <span class=move || chip(ScoreTone::for_score(score()).chip_class())>
                        {move || score_summary(score())}
                    </span>
                </div>
                <ScoreBar value=Signal::derive(score) bar=ANSWER_SCORE_PROGRESS/>
            </div>
            <hr class=ANSWER_DIVIDER/>
            <h3 class=ANSWER_BREAKDOWN_TITLE>"Score Breakdown"</h3>
            <Breakdown label="Correctness" value=Signal::derive(move || response().correctness)/>
            <Breakdown label="Completeness" value=Signal::derive(move || response().completeness)/>
            <Breakdown label="Clarity" value=Signal::derive(move || response().clarity)/>
            <h3 class=ANSWER_AI_SECTION>"AI Feedback"</h3>
            <div class=ANSWER_AI_FEEDBACK>
                <p class=ANSWER_AI_TEXT>{move || response().feedback}</p>
            </div>
            <button class=ANSWER_REATTEMPT_BUTTON on:click=move |_| on_reattempt.run(())>
                "Try Again"
            </button>
        </div>
    }
}

#[component]
fn Breakdown(label: &'static str, value: Signal<u32>) -> impl IntoView {
    view! {
        <div class=ANSWER_BREAKDOWN_ITEM>
            <div class=ANSWER_BREAKDOWN_HEADER>
                <span class=ANSWER_BREAKDOWN_LABEL>{label}</span>
                <span class=ANSWER_BREAKDOWN_VALUE>{move || format!("{}/10", value.get())}</span>
            </div>
            <ScoreBar value=value bar=ANSWER_BREAKDOWN_PROGRESS/>
        </div>
    }
}

#[component]
fn ScoreBar(value: Signal<u32>, bar: &'static str) -> impl IntoView {
    view! {
        <div class=format!("{PROGRESS_TRACK} {bar}")>
            <div
                class=move || format!("{bar} {}", ScoreTone::for_score(value.get()).bar_class())
                style:width=move || format!("{}%", score_percent(value.get()))
            ></div>
        </div>
    }
}
