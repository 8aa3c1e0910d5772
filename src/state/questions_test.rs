use std::cell::RefCell;
use std::rc::Rc;

use futures::executor::block_on;

use super::*;
use crate::net::fake_backend::{FakeBackend, question};
use crate::net::types::{LowScoreQuestion, QuestionPage, QuestionSetStatus};

/// Cell that keeps a copy of the state after every modification.
#[derive(Default)]
struct History {
    state: RefCell<QuestionState>,
    steps: RefCell<Vec<QuestionState>>,
}

impl StateCell<QuestionState> for Rc<History> {
    fn snapshot(&self) -> QuestionState {
        self.state.borrow().clone()
    }

    fn modify(&self, f: impl FnOnce(&mut QuestionState)) {
        f(&mut self.state.borrow_mut());
        self.steps.borrow_mut().push(self.state.borrow().clone());
    }
}

fn store(backend: FakeBackend) -> (QuestionStore<Rc<History>, FakeBackend>, Rc<History>) {
    let history = Rc::new(History::default());
    (QuestionStore::new(Rc::clone(&history), backend), history)
}

fn question_set(id: i64, name: &str) -> QuestionSet {
    QuestionSet {
        id,
        name: name.to_owned(),
        kind: "Rust".to_owned(),
        difficulty: "EASY".to_owned(),
        tags: "traits".to_owned(),
        status: QuestionSetStatus::Draft,
        questions: Vec::new(),
    }
}

// =============================================================
// Reducer
// =============================================================

#[test]
fn initial_state_has_default_pagination() {
    let state = QuestionState::default();
    assert_eq!(state.pagination, Pagination { page: 1, limit: 10, total: 0 });
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn add_question_set_appends() {
    let mut state = QuestionState::default();
    state.apply(QuestionAction::SetQuestionSets(vec![question_set(1, "a")]));
    state.apply(QuestionAction::AddQuestionSet(question_set(2, "b")));
    let ids: Vec<i64> = state.question_sets.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn set_questions_leaves_pagination_alone() {
    let mut state = QuestionState::default();
    state.apply(QuestionAction::SetQuestions {
        questions: vec![question(1, "Easy")],
        total: 99,
    });
    assert_eq!(state.questions.len(), 1);
    assert_eq!(state.pagination, Pagination::default());
}

#[test]
fn current_question_and_error_can_be_cleared() {
    let mut state = QuestionState::default();
    state.apply(QuestionAction::SetCurrentQuestion(Some(question(4, "Hard"))));
    state.apply(QuestionAction::SetError(Some("boom".to_owned())));
    state.apply(QuestionAction::SetCurrentQuestion(None));
    state.apply(QuestionAction::SetError(None));
    assert_eq!(state, QuestionState::default());
}

// =============================================================
// Fetch contracts
// =============================================================

#[test]
fn fetch_questions_sets_pagination_from_server_total() {
    let page = QuestionPage {
        questions: (1..=10).map(|id| question(id, "Medium")).collect(),
        total: 37,
    };
    let (store, history) = store(FakeBackend {
        questions: Some(Ok(page)),
        ..FakeBackend::default()
    });

    block_on(store.fetch_questions(1, 10, None));

    let state = history.snapshot();
    assert_eq!(state.pagination, Pagination { page: 1, limit: 10, total: 37 });
    assert!(state.questions.len() <= 10);
    assert!(!state.loading);
    assert_eq!(store.backend().calls(), vec!["questions(1, 10, None)"]);
}

#[test]
fn fetch_loading_brackets_the_call() {
    let (store, history) = store(FakeBackend {
        question_sets: Some(Ok(vec![question_set(1, "Rust")])),
        ..FakeBackend::default()
    });

    block_on(store.fetch_question_sets());

    let steps = history.steps.borrow();
    assert!(steps.first().is_some_and(|s| s.loading));
    assert!(steps.last().is_some_and(|s| !s.loading && s.question_sets.len() == 1));
}

#[test]
fn fetch_clears_previous_error() {
    let (store, history) = store(FakeBackend {
        stats: Some(Ok(DashboardStats::default())),
        ..FakeBackend::default()
    });
    store.dispatch(QuestionAction::SetError(Some("stale".to_owned())));

    block_on(store.fetch_dashboard_stats());

    assert_eq!(history.snapshot().error, None);
}

#[test]
fn failed_fetch_stores_error_and_keeps_pagination() {
    let (store, history) = store(FakeBackend {
        questions: Some(Err(ApiError::Status {
            status: 500,
            message: "Failed to fetch questions".to_owned(),
        })),
        ..FakeBackend::default()
    });

    block_on(store.fetch_questions(3, 10, Some("Hard")));

    let state = history.snapshot();
    assert_eq!(state.error.as_deref(), Some("Failed to fetch questions"));
    assert_eq!(state.pagination, Pagination::default());
    assert!(!state.loading);
}

#[test]
fn fetch_by_set_uses_length_as_total() {
    let (store, history) = store(FakeBackend {
        set_questions: Some(Ok(vec![question(1, "Easy"), question(2, "Hard"), question(3, "Easy")])),
        ..FakeBackend::default()
    });
    store.dispatch(QuestionAction::SetPagination(Pagination { page: 4, limit: 10, total: 80 }));

    block_on(store.fetch_questions_by_set(12));

    let state = history.snapshot();
    assert_eq!(state.questions.len(), 3);
    assert_eq!(state.pagination, Pagination { page: 4, limit: 10, total: 80 });
    let set_questions_dispatch = history
        .steps
        .borrow()
        .iter()
        .any(|s| s.questions.len() == 3 && s.loading);
    assert!(set_questions_dispatch);
}

#[test]
fn fetch_question_by_id_sets_current_question() {
    let (store, history) = store(FakeBackend {
        question: Some(Ok(question(42, "Medium"))),
        ..FakeBackend::default()
    });

    block_on(store.fetch_question_by_id(42));

    assert_eq!(history.snapshot().current_question.map(|q| q.id).as_deref(), Some("42"));
    store.clear_current_question();
    assert!(history.snapshot().current_question.is_none());
}

#[test]
fn fetch_question_by_id_not_found_message() {
    let (store, history) = store(FakeBackend {
        question: Some(Err(ApiError::NotFound("Question with ID 9 not found".to_owned()))),
        ..FakeBackend::default()
    });

    block_on(store.fetch_question_by_id(9));

    assert_eq!(history.snapshot().error.as_deref(), Some("Question with ID 9 not found"));
    store.clear_error();
    assert!(history.snapshot().error.is_none());
}

#[test]
fn create_question_set_appends_result() {
    let (store, history) = store(FakeBackend {
        created_set: Some(Ok(question_set(7, "Generated"))),
        ..FakeBackend::default()
    });
    store.dispatch(QuestionAction::SetQuestionSets(vec![question_set(1, "Existing")]));
    let draft = NewQuestionSet {
        name: "Generated".to_owned(),
        kind: "Rust".to_owned(),
        difficulty: "EASY".to_owned(),
        tags: String::new(),
        status: QuestionSetStatus::Draft,
        questions: Vec::new(),
    };

    block_on(store.create_question_set(&draft));

    let names: Vec<String> = history.snapshot().question_sets.into_iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["Existing", "Generated"]);
}

#[test]
fn dashboard_low_scores_keep_server_order() {
    let low = |id, score| LowScoreQuestion {
        question_id: id,
        question_text: format!("q{id}"),
        score,
        submitted_at: "2025-01-01T00:00:00".to_owned(),
    };
    let served = vec![low(5, 3), low(1, 1), low(9, 2)];
    let (store, history) = store(FakeBackend {
        stats: Some(Ok(DashboardStats {
            average_score: Some(4.5),
            questions_answered_count: Some(3),
            low_score_questions: served.clone(),
        })),
        ..FakeBackend::default()
    });

    block_on(store.fetch_dashboard_stats());

    let stats = history.snapshot().dashboard_stats.unwrap();
    assert_eq!(stats.low_score_questions, served);
}

#[test]
fn unavailable_backend_reports_error_text() {
    let (store, history) = store(FakeBackend::default());
    block_on(store.fetch_question_sets());
    assert_eq!(history.snapshot().error.as_deref(), Some("not available on server"));
}
