//! Question-set grid with publish and generate actions.

#[cfg(test)]
#[path = "question_sets_test.rs"]
mod question_sets_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::QuestionContext;
use crate::net::backend::Backend;
use crate::net::types::{GenerateQuestionSetRequest, QuestionSet, QuestionSetStatus};
use crate::state::StateCell;
use crate::state::questions::{QuestionState, QuestionStore};
use crate::styles::{
    ERROR_TEXT, GRADIENT_BUTTON_HOVER, INPUT_CLASS, INPUT_LABEL, LOADING_CONTAINER, OUTLINE_BUTTON, QUESTION_SET_CARD,
    QUESTION_SET_CARD_BODY, QUESTION_SET_CARD_BUTTON, QUESTION_SET_CARD_CONTENT, QUESTION_SET_CARD_HEADER,
    QUESTION_SET_CARD_TITLE, QUESTION_SETS_CONTAINER, QUESTION_SETS_DIALOG, QUESTION_SETS_DIALOG_ACTIONS,
    QUESTION_SETS_DIALOG_BACKDROP, QUESTION_SETS_DIALOG_CONTENT, QUESTION_SETS_EMPTY_STATE, QUESTION_SETS_EMPTY_TITLE,
    QUESTION_SETS_FAB, QUESTION_SETS_GRID, QUESTION_SETS_HEADER, QUESTION_SETS_PAGE, QUESTION_SETS_SUBTITLE,
    QUESTION_SETS_TITLE, chip, status_chip,
};
use crate::util::task::spawn_browser;
use crate::util::validation::generate_form_ready;

/// Empty generate form; quantity starts at one.
pub fn blank_generate_form() -> GenerateQuestionSetRequest {
    GenerateQuestionSetRequest {
        name: String::new(),
        kind: String::new(),
        difficulty: String::new(),
        tags: String::new(),
        quantity: 1,
    }
}

/// Parse the quantity input; anything that is not a whole number counts as zero.
pub fn parse_quantity(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

/// Generate a set, then reload the list.
///
/// # Errors
///
/// Returns the backend's error text; incomplete forms are ignored with `Ok(None)`.
pub async fn generate_and_refresh<C, B>(
    store: &QuestionStore<C, B>,
    form: &GenerateQuestionSetRequest,
) -> Result<Option<i64>, String>
where
    C: StateCell<QuestionState>,
    B: Backend,
{
    if !generate_form_ready(form) {
        return Ok(None);
    }
    let id = store
        .backend()
        .generate_question_set(form)
        .await
        .map_err(|e| e.to_string())?;
    store.fetch_question_sets().await;
    Ok(Some(id))
}

/// Publish a draft, then reload the list.
///
/// # Errors
///
/// Returns the backend's error text.
pub async fn publish_and_refresh<C, B>(store: &QuestionStore<C, B>, id: i64) -> Result<(), String>
where
    C: StateCell<QuestionState>,
    B: Backend,
{
    store
        .backend()
        .publish_question_set(id)
        .await
        .map_err(|e| e.to_string())?;
    store.fetch_question_sets().await;
    Ok(())
}

#[component]
pub fn QuestionSetsPage() -> impl IntoView {
    let store = expect_context::<QuestionContext>();
    let state = *store.cell();
    let navigate = use_navigate();

    let dialog_open = RwSignal::new(false);
    let form = RwSignal::new(blank_generate_form());
    let action_error = RwSignal::new(None::<String>);
    let generating = RwSignal::new(false);

    {
        let store = store.clone();
        Effect::new(move || {
            let store = store.clone();
            spawn_browser(async move { store.fetch_question_sets().await });
        });
    }

    let open_set = Callback::new(move |id: i64| navigate(&format!("/questions?set={id}"), NavigateOptions::default()));

    let publish = Callback::new({
        let store = store.clone();
        move |id: i64| {
            let store = store.clone();
            action_error.set(None);
            spawn_browser(async move {
                if let Err(message) = publish_and_refresh(&store, id).await {
                    action_error.set(Some(message));
                }
            });
        }
    });

    let close_dialog = move || {
        dialog_open.set(false);
        form.set(blank_generate_form());
    };

    let generate = Callback::new(move |()| {
        let request = form.get_untracked();
        let store = store.clone();
        generating.set(true);
        action_error.set(None);
        spawn_browser(async move {
            match generate_and_refresh(&store, &request).await {
                Ok(Some(id)) => {
                    log::info!("generated question set {id}");
                    dialog_open.set(false);
                    form.set(blank_generate_form());
                }
                Ok(None) => {}
                Err(message) => action_error.set(Some(message)),
            }
            generating.set(false);
        });
    });

    view! {
        <Show
            when=move || !state.with(|s| s.loading)
            fallback=|| view! { <div class=LOADING_CONTAINER>"Loading question sets..."</div> }
        >
            <div class=QUESTION_SETS_PAGE>
                <div class=QUESTION_SETS_CONTAINER>
                    <header class=QUESTION_SETS_HEADER>
                        <h1 class=QUESTION_SETS_TITLE>"Question Sets"</h1>
                        <p class=QUESTION_SETS_SUBTITLE>"Practice with curated question sets or create your own"</p>
                    </header>

                    <Show when=move || state.with(|s| s.error.is_some()) || action_error.with(Option::is_some)>
                        <p class=ERROR_TEXT>
                            {move || {
                                action_error
                                    .get()
                                    .or_else(|| state.with(|s| s.error.clone()))
                                    .unwrap_or_default()
                            }}
                        </p>
                    </Show>

                    <div class=QUESTION_SETS_GRID>
                        {move || {
                            state
                                .with(|s| s.question_sets.clone())
                                .into_iter()
                                .map(|set| view! { <QuestionSetCard set=set on_open=open_set on_publish=publish/> })
                                .collect_view()
                        }}
                    </div>

                    <Show when=move || state.with(|s| s.question_sets.is_empty())>
                        <div class=QUESTION_SETS_EMPTY_STATE>
                            <p class=QUESTION_SETS_EMPTY_TITLE>"No question sets available"</p>
                            <button class=GRADIENT_BUTTON_HOVER on:click=move |_| dialog_open.set(true)>
                                "+ Create Your First Question Set"
                            </button>
                        </div>
                    </Show>

                    <Show when=move || dialog_open.get()>
                        <GenerateDialog
                            form=form
                            busy=generating
                            on_cancel=Callback::new(move |()| close_dialog())
                            on_submit=generate
                        />
                    </Show>

                    <button class=QUESTION_SETS_FAB aria-label="add" on:click=move |_| dialog_open.set(true)>
                        "+"
                    </button>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn QuestionSetCard(set: QuestionSet, on_open: Callback<i64>, on_publish: Callback<i64>) -> impl IntoView {
    let id = set.id;
    let is_draft = set.status == QuestionSetStatus::Draft;

    view! {
        <div class=QUESTION_SET_CARD on:click=move |_| on_open.run(id)>
            <div class=QUESTION_SET_CARD_CONTENT>
                <div class=QUESTION_SET_CARD_HEADER>
                    <h3 class=QUESTION_SET_CARD_TITLE>{set.name}</h3>
                    <span class=chip(status_chip(set.status))>{set.status.label()}</span>
                </div>
                <p class=QUESTION_SET_CARD_BODY>
                    <b>"Type: "</b>{set.kind}<br/>
                    <b>"Difficulty: "</b>{set.difficulty}<br/>
                    <b>"Tags: "</b>{set.tags}
                </p>
                <Show when=move || is_draft>
                    <button
                        class=QUESTION_SET_CARD_BUTTON
                        on:click=move |ev: leptos::ev::MouseEvent| {
                            ev.stop_propagation();
                            on_publish.run(id);
                        }
                    >
                        "Publish"
                    </button>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn GenerateDialog(
    form: RwSignal<GenerateQuestionSetRequest>,
    busy: RwSignal<bool>,
    on_cancel: Callback<()>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <div class=QUESTION_SETS_DIALOG_BACKDROP on:click=move |_| on_cancel.run(())>
            <div class=QUESTION_SETS_DIALOG on:click=move |ev| ev.stop_propagation()>
                <h2 class="text-xl font-semibold text-gray-800">"Create New Question Set"</h2>
                <div class=QUESTION_SETS_DIALOG_CONTENT>
                    <FormText form=form field=FormField::Name placeholder="e.g., Java Basics"/>
                    <FormText form=form field=FormField::Kind placeholder="e.g., Java Basic"/>
                    <FormText form=form field=FormField::Difficulty placeholder="e.g., Easy, Medium, Hard"/>
                    <FormText form=form field=FormField::Tags placeholder="e.g., data types enums"/>
                    <div>
                        <label class=INPUT_LABEL>"Quantity"</label>
                        <input
                            class=INPUT_CLASS
                            type="number"
                            min="1"
                            placeholder="Number of questions"
                            prop:value=move || form.with(|f| f.quantity.to_string())
                            on:input=move |ev| form.update(|f| f.quantity = parse_quantity(&event_target_value(&ev)))
                        />
                    </div>
                </div>
                <div class=QUESTION_SETS_DIALOG_ACTIONS>
                    <button class=OUTLINE_BUTTON on:click=move |_| on_cancel.run(())>"Cancel"</button>
                    <button
                        class=GRADIENT_BUTTON_HOVER
                        disabled=move || busy.get() || !form.with(generate_form_ready)
                        on:click=move |_| on_submit.run(())
                    >
                        {move || if busy.get() { "Generating..." } else { "Generate" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Text inputs of the generate dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Kind,
    Difficulty,
    Tags,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Kind => "Type",
            Self::Difficulty => "Difficulty",
            Self::Tags => "Tags",
        }
    }

    fn slot(self, form: &mut GenerateQuestionSetRequest) -> &mut String {
        match self {
            Self::Name => &mut form.name,
            Self::Kind => &mut form.kind,
            Self::Difficulty => &mut form.difficulty,
            Self::Tags => &mut form.tags,
        }
    }

    pub fn read(self, form: &GenerateQuestionSetRequest) -> String {
        match self {
            Self::Name => form.name.clone(),
            Self::Kind => form.kind.clone(),
            Self::Difficulty => form.difficulty.clone(),
            Self::Tags => form.tags.clone(),
        }
    }

    pub fn write(self, form: &mut GenerateQuestionSetRequest, value: String) {
        *self.slot(form) = value;
    }
}

#[component]
fn FormText(form: RwSignal<GenerateQuestionSetRequest>, field: FormField, placeholder: &'static str) -> impl IntoView {
    view! {
        <div>
            <label class=INPUT_LABEL>{field.label()}</label>
            <input
                class=INPUT_CLASS
                type="text"
                placeholder=placeholder
                prop:value=move || form.with(|f| field.read(f))
                on:input=move |ev| form.update(|f| field.write(f, event_target_value(&ev)))
            />
        </div>
    }
}
