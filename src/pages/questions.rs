//! Practice-question list, paged or scoped to one question set.
//!
//! SYSTEM CONTEXT
//! ==============
//! `?set={id}` switches to set mode: every question in the set, no
//! pagination. Otherwise the page fetches one server page at a time with an
//! optional difficulty filter. Search and category filters run client-side
//! over whatever is loaded.

#[cfg(test)]
#[path = "questions_test.rs"]
mod questions_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::app::QuestionContext;
use crate::config::DEFAULT_PAGE_SIZE;
use crate::net::types::Question;
use crate::styles::{
    ERROR_TEXT, GRADIENT_BUTTON_HOVER, INPUT_CLASS, LOADING_CONTAINER, OUTLINE_BUTTON, PAGE_BUTTON, PAGE_BUTTON_ACTIVE,
    QUESTION_CARD, QUESTION_CARD_BODY, QUESTION_CARD_HEADER, QUESTION_CARD_TAGS, QUESTION_CARD_TITLE,
    QUESTIONS_CONTAINER, QUESTIONS_EMPTY_STATE, QUESTIONS_EMPTY_TITLE, QUESTIONS_FILTERS_CONTAINER,
    QUESTIONS_FILTERS_COUNT, QUESTIONS_FILTERS_COUNT_TEXT, QUESTIONS_FILTERS_GRID, QUESTIONS_HEADER, QUESTIONS_LIST,
    QUESTIONS_PAGE, QUESTIONS_PAGINATION, QUESTIONS_SUBTITLE, QUESTIONS_TITLE, TAG_CATEGORY, TAG_DEFAULT, TAG_MORE,
    chip, difficulty_chip,
};
use crate::util::format::{ALL_FILTER, QuestionFilter, categories, tag_chips, total_pages};
use crate::util::task::spawn_browser;

const DIFFICULTIES: [&str; 3] = ["Easy", "Medium", "Hard"];

/// Which fetch drives the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListMode {
    BySet(i64),
    Paged,
}

impl ListMode {
    /// Set mode needs a numeric `set` query value; anything else is paged.
    pub fn from_query(set: Option<&str>) -> Self {
        set.and_then(|raw| raw.trim().parse().ok())
            .map_or(Self::Paged, Self::BySet)
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Self::BySet(_) => "Questions from selected set",
            Self::Paged => "All available questions for practice",
        }
    }
}

/// Pagination controls appear only in paged mode with more than one page.
pub fn show_pagination(mode: ListMode, pages: u32) -> bool {
    mode == ListMode::Paged && pages > 1
}

/// Server-side difficulty filter for the paged fetch.
pub fn server_difficulty(filter: &str) -> Option<&str> {
    (filter != ALL_FILTER).then_some(filter)
}

#[component]
pub fn QuestionsPage() -> impl IntoView {
    let store = expect_context::<QuestionContext>();
    let state = *store.cell();
    let query = use_query_map();
    let navigate = use_navigate();

    let mode = Memo::new(move |_| query.with(|q| ListMode::from_query(q.get("set").as_deref())));
    let current_page = RwSignal::new(1_u32);
    let filter = RwSignal::new(QuestionFilter::default());
    let difficulty = Memo::new(move |_| filter.with(|f| f.difficulty.clone()));

    Effect::new(move || {
        let mode = mode.get();
        let page = current_page.get();
        let difficulty = difficulty.get();
        let store = store.clone();
        spawn_browser(async move {
            match mode {
                ListMode::BySet(set_id) => store.fetch_questions_by_set(set_id).await,
                ListMode::Paged => {
                    store
                        .fetch_questions(page, DEFAULT_PAGE_SIZE, server_difficulty(&difficulty))
                        .await;
                }
            }
        });
    });

    let answer = Callback::new(move |id: String| navigate(&format!("/answer/{id}"), NavigateOptions::default()));

    let filtered = Memo::new(move |_| state.with(|s| filter.with(|f| f.apply(&s.questions))));
    let category_options = Memo::new(move |_| state.with(|s| categories(&s.questions)));
    let pages = Memo::new(move |_| state.with(|s| total_pages(s.pagination.total, s.pagination.limit)));

    let clear_filters = move |_| {
        filter.set(QuestionFilter::default());
        current_page.set(1);
    };

    view! {
        <Show
            when=move || !state.with(|s| s.loading)
            fallback=|| view! { <div class=LOADING_CONTAINER>"Loading questions..."</div> }
        >
            <div class=QUESTIONS_PAGE>
                <div class=QUESTIONS_CONTAINER>
                    <header class=QUESTIONS_HEADER>
                        <h1 class=QUESTIONS_TITLE>"Practice Questions"</h1>
                        <p class=QUESTIONS_SUBTITLE>{move || mode.get().subtitle()}</p>
                    </header>

                    <Show when=move || state.with(|s| s.error.is_some())>
                        <p class=ERROR_TEXT>{move || state.with(|s| s.error.clone().unwrap_or_default())}</p>
                    </Show>

                    <div class=QUESTIONS_FILTERS_CONTAINER>
                        <div class=QUESTIONS_FILTERS_GRID>
                            <input
                                class=INPUT_CLASS
                                type="search"
                                placeholder="🔍 Search questions..."
                                prop:value=move || filter.with(|f| f.search.clone())
                                on:input=move |ev| filter.update(|f| f.search = event_target_value(&ev))
                            />
                            <select
                                class=INPUT_CLASS
                                prop:value=move || difficulty.get()
                                on:change=move |ev| {
                                    filter.update(|f| f.difficulty = event_target_value(&ev));
                                    current_page.set(1);
                                }
                            >
                                <option value=ALL_FILTER>"All Difficulties"</option>
                                {DIFFICULTIES
                                    .into_iter()
                                    .map(|d| view! { <option value=d>{d}</option> })
                                    .collect_view()}
                            </select>
                            <select
                                class=INPUT_CLASS
                                prop:value=move || filter.with(|f| f.category.clone())
                                on:change=move |ev| filter.update(|f| f.category = event_target_value(&ev))
                            >
                                <option value=ALL_FILTER>"All Categories"</option>
                                {move || {
                                    category_options
                                        .get()
                                        .into_iter()
                                        .map(|c| view! { <option value=c.clone()>{c.clone()}</option> })
                                        .collect_view()
                                }}
                            </select>
                            <div class=QUESTIONS_FILTERS_COUNT>
                                <span class=QUESTIONS_FILTERS_COUNT_TEXT>
                                    {move || format!("{} questions", filtered.with(Vec::len))}
                                </span>
                            </div>
                        </div>
                    </div>

                    <div class=QUESTIONS_LIST>
                        {move || {
                            filtered
                                .get()
                                .into_iter()
                                .map(|question| view! { <QuestionCard question=question on_answer=answer/> })
                                .collect_view()
                        }}
                    </div>

                    <Show when=move || filtered.with(Vec::is_empty)>
                        <div class=QUESTIONS_EMPTY_STATE>
                            <p class=QUESTIONS_EMPTY_TITLE>"No questions found matching your criteria"</p>
                            <button class=OUTLINE_BUTTON on:click=clear_filters>"Clear Filters"</button>
                        </div>
                    </Show>

                    <Show when=move || show_pagination(mode.get(), pages.get())>
                        <nav class=QUESTIONS_PAGINATION aria-label="pagination">
                            {move || {
                                (1..=pages.get())
                                    .map(|page| {
                                        view! {
                                            <button
                                                class=move || {
                                                    if current_page.get() == page { PAGE_BUTTON_ACTIVE } else { PAGE_BUTTON }
                                                }
                                                on:click=move |_| current_page.set(page)
                                            >
                                                {page}
                                            </button>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </nav>
                    </Show>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn QuestionCard(question: Question, on_answer: Callback<String>) -> impl IntoView {
    let (shown_tags, more) = tag_chips(&question.tags);
    let tags = shown_tags
        .iter()
        .map(|tag| view! { <span class=chip(TAG_DEFAULT)>{tag.clone()}</span> })
        .collect_view();
    let more = more.map(|label| view! { <span class=chip(TAG_MORE)>{label}</span> });
    let id = question.id.clone();

    view! {
        <div class=QUESTION_CARD>
            <div class=QUESTION_CARD_HEADER>
                <h3 class=QUESTION_CARD_TITLE>{question.title}</h3>
                <button class=GRADIENT_BUTTON_HOVER on:click=move |_| on_answer.run(id.clone())>
                    "Answer Question"
                </button>
            </div>
            <p class=QUESTION_CARD_BODY>{question.content}</p>
            <div class=QUESTION_CARD_TAGS>
                <span class=chip(TAG_CATEGORY)>{question.category}</span>
                <span class=chip(difficulty_chip(&question.difficulty))>{question.difficulty.clone()}</span>
                {tags}
                {more}
            </div>
        </div>
    }
}
