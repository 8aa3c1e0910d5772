use std::cell::RefCell;
use std::rc::Rc;

use futures::executor::block_on;

use super::*;
use crate::net::error::ApiError;
use crate::net::fake_backend::{FakeBackend, answer, question};

fn cells(backend: FakeBackend) -> (Rc<RefCell<AnswerView>>, QuestionStore<Rc<RefCell<QuestionState>>, FakeBackend>) {
    let view = Rc::new(RefCell::new(AnswerView::default()));
    let store = QuestionStore::new(Rc::new(RefCell::new(QuestionState::default())), backend);
    (view, store)
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn blank_answer_cannot_be_submitted() {
    let mut view = AnswerView::default();
    assert!(!view.can_submit());
    view.text = "   ".to_owned();
    assert!(!view.can_submit());
    view.text = "ownership moves".to_owned();
    assert!(view.can_submit());
    view.begin_submit();
    assert!(!view.can_submit());
}

#[test]
fn typing_does_not_change_busy_state() {
    let mut view = AnswerView::default();
    assert!(!view.is_busy(false));
    view.text = "borrow checker".to_owned();
    assert!(!view.is_busy(false));
    assert!(view.is_busy(true));
    view.begin_load();
    view.text.push('!');
    assert!(view.is_busy(false));
}

#[test]
fn failed_submit_keeps_text_and_form() {
    let mut view = AnswerView {
        text: "draft".to_owned(),
        ..AnswerView::default()
    };
    view.begin_submit();
    view.finish_submit(Err("Server down".to_owned()));
    assert_eq!(view.text, "draft");
    assert!(view.response.is_none());
    assert_eq!(view.error.as_deref(), Some("Server down"));
    assert!(!view.submitting);
}

#[test]
fn reattempt_clears_feedback_and_text() {
    let mut view = AnswerView::default();
    view.load_existing(answer(3, 7));
    assert_eq!(view.text, "my answer");
    view.reattempt();
    assert!(view.response.is_none());
    assert!(view.text.is_empty());
    assert!(view.loading);
}

#[test]
fn question_text_prefers_answer_then_current_question() {
    let scored = answer(3, 9);
    let current = question(3, "Easy");
    assert_eq!(question_text(Some(&scored), Some(&current)).as_deref(), Some("Question 3"));

    let blank = AnswerResponse::default();
    let mut titled = question(4, "Hard");
    titled.title = "Explain lifetimes".to_owned();
    assert_eq!(question_text(Some(&blank), Some(&titled)).as_deref(), Some("Explain lifetimes"));
    assert_eq!(question_text(None, None), None);
}

#[test]
fn question_id_must_be_numeric() {
    assert_eq!(parse_question_id(Some("42")), Some(42));
    assert_eq!(parse_question_id(Some("x")), None);
    assert_eq!(parse_question_id(None), None);
}

// =============================================================
// Async flows
// =============================================================

#[test]
fn existing_answer_skips_question_fetch() {
    let (view, store) = cells(FakeBackend {
        existing_answer: Some(Ok(Some(answer(5, 8)))),
        ..FakeBackend::default()
    });
    block_on(initialize(&view, &store, 5));
    let view = view.borrow();
    assert_eq!(view.response.as_ref().map(|a| a.score), Some(8));
    assert!(!view.loading);
    assert_eq!(store.backend().calls(), vec!["answer_by_question(5)"]);
}

#[test]
fn missing_answer_fetches_question() {
    let (view, store) = cells(FakeBackend {
        existing_answer: Some(Ok(None)),
        question: Some(Ok(question(5, "Medium"))),
        ..FakeBackend::default()
    });
    block_on(initialize(&view, &store, 5));
    assert!(view.borrow().response.is_none());
    assert_eq!(store.cell().borrow().current_question, Some(question(5, "Medium")));
    assert_eq!(store.backend().calls(), vec!["answer_by_question(5)", "question_by_id(5)"]);
}

#[test]
fn lookup_failure_reports_and_falls_back_to_question() {
    let (view, store) = cells(FakeBackend {
        existing_answer: Some(Err(ApiError::Unavailable)),
        question: Some(Ok(question(5, "Medium"))),
        ..FakeBackend::default()
    });
    block_on(initialize(&view, &store, 5));
    assert_eq!(view.borrow().error.as_deref(), Some("Failed to load question or answer"));
    assert!(store.cell().borrow().current_question.is_some());
}

#[test]
fn successful_submit_shows_feedback() {
    let (view, store) = cells(FakeBackend {
        submitted: Some(Ok(answer(2, 6))),
        ..FakeBackend::default()
    });
    view.borrow_mut().text = "  traits are interfaces  ".to_owned();
    block_on(submit(&view, store.backend(), 2));
    assert_eq!(view.borrow().response.as_ref().map(|a| a.score), Some(6));
    assert_eq!(store.backend().calls(), vec!["submit_answer(2, traits are interfaces)"]);
}

#[test]
fn failed_submit_surfaces_backend_message() {
    let (view, store) = cells(FakeBackend {
        submitted: Some(Err(ApiError::from_status(500, None, "Failed to submit answer"))),
        ..FakeBackend::default()
    });
    view.borrow_mut().text = "answer".to_owned();
    block_on(submit(&view, store.backend(), 2));
    let view = view.borrow();
    assert!(view.response.is_none());
    assert_eq!(view.error.as_deref(), Some("Failed to submit answer"));
}

#[test]
fn blank_submit_makes_no_call() {
    let (view, store) = cells(FakeBackend::default());
    block_on(submit(&view, store.backend(), 2));
    assert!(store.backend().calls().is_empty());
}

#[test]
fn reattempt_refetches_question() {
    let (view, store) = cells(FakeBackend {
        question: Some(Ok(question(9, "Hard"))),
        ..FakeBackend::default()
    });
    view.borrow_mut().load_existing(answer(9, 3));
    block_on(reattempt(&view, &store, 9));
    assert!(view.borrow().response.is_none());
    assert!(!view.borrow().loading);
    assert_eq!(store.backend().calls(), vec!["question_by_id(9)"]);
}
