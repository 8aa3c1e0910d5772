//! Question, question-set and dashboard state.
//!
//! SYSTEM CONTEXT
//! ==============
//! One state value backs the QuestionSets, Questions, Answer and Dashboard
//! pages. Pages trigger fetches through `QuestionStore` and re-render from
//! the state cell.
//!
//! DESIGN
//! ======
//! `QuestionState` only changes through `QuestionAction`s applied by the
//! pure `apply` reducer. Every fetch follows the same sequence: loading on
//! and error cleared, await, data or error action, loading off. Calls are
//! not de-duplicated; the last one to finish wins.

#[cfg(test)]
#[path = "questions_test.rs"]
mod questions_test;

use super::StateCell;
use crate::config::DEFAULT_PAGE_SIZE;
use crate::net::backend::Backend;
use crate::net::error::ApiError;
use crate::net::types::{DashboardStats, NewQuestionSet, Question, QuestionSet};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            total: 0,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuestionState {
    pub question_sets: Vec<QuestionSet>,
    pub questions: Vec<Question>,
    pub current_question: Option<Question>,
    pub dashboard_stats: Option<DashboardStats>,
    pub loading: bool,
    pub error: Option<String>,
    pub pagination: Pagination,
}

#[derive(Clone, Debug, PartialEq)]
pub enum QuestionAction {
    SetLoading(bool),
    SetError(Option<String>),
    SetQuestionSets(Vec<QuestionSet>),
    SetQuestions { questions: Vec<Question>, total: u64 },
    SetCurrentQuestion(Option<Question>),
    SetDashboardStats(DashboardStats),
    SetPagination(Pagination),
    AddQuestionSet(QuestionSet),
}

impl QuestionState {
    /// Apply one action.
    pub fn apply(&mut self, action: QuestionAction) {
        match action {
            QuestionAction::SetLoading(loading) => self.loading = loading,
            QuestionAction::SetError(error) => self.error = error,
            QuestionAction::SetQuestionSets(sets) => self.question_sets = sets,
            // `total` travels with the questions but is only stored via SetPagination.
            QuestionAction::SetQuestions { questions, .. } => self.questions = questions,
            QuestionAction::SetCurrentQuestion(question) => self.current_question = question,
            QuestionAction::SetDashboardStats(stats) => self.dashboard_stats = Some(stats),
            QuestionAction::SetPagination(pagination) => self.pagination = pagination,
            QuestionAction::AddQuestionSet(set) => self.question_sets.push(set),
        }
    }
}

/// Message stored in state for a failed fetch.
fn error_message(err: &ApiError, fallback: &str) -> String {
    let message = err.to_string();
    if message.trim().is_empty() { fallback.to_owned() } else { message }
}

/// Fetch operations bound to a state cell and a backend.
#[derive(Clone, Debug)]
pub struct QuestionStore<C, B> {
    cell: C,
    backend: B,
}

impl<C, B> QuestionStore<C, B>
where
    C: StateCell<QuestionState>,
    B: Backend,
{
    pub fn new(cell: C, backend: B) -> Self {
        Self { cell, backend }
    }

    pub fn cell(&self) -> &C {
        &self.cell
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn dispatch(&self, action: QuestionAction) {
        self.cell.modify(|state| state.apply(action));
    }

    fn begin(&self) {
        self.dispatch(QuestionAction::SetLoading(true));
        self.dispatch(QuestionAction::SetError(None));
    }

    fn finish<T>(&self, result: Result<T, ApiError>, fallback: &str, on_ok: impl FnOnce(&Self, T)) {
        match result {
            Ok(value) => on_ok(self, value),
            Err(e) => {
                log::warn!("{fallback}: {e}");
                self.dispatch(QuestionAction::SetError(Some(error_message(&e, fallback))));
            }
        }
        self.dispatch(QuestionAction::SetLoading(false));
    }

    pub async fn fetch_question_sets(&self) {
        self.begin();
        let result = self.backend.question_sets().await;
        self.finish(result, "Failed to fetch question sets", |s, sets| {
            s.dispatch(QuestionAction::SetQuestionSets(sets));
        });
    }

    pub async fn create_question_set(&self, draft: &NewQuestionSet) {
        self.begin();
        let result = self.backend.create_question_set(draft).await;
        self.finish(result, "Failed to create question set", |s, set| {
            s.dispatch(QuestionAction::AddQuestionSet(set));
        });
    }

    /// Fetch one page; `page` is one-based.
    pub async fn fetch_questions(&self, page: u32, limit: u32, difficulty: Option<&str>) {
        self.begin();
        let result = self.backend.questions(page, limit, difficulty).await;
        self.finish(result, "Failed to fetch questions", |s, page_body| {
            let total = page_body.total;
            s.dispatch(QuestionAction::SetQuestions {
                questions: page_body.questions,
                total,
            });
            s.dispatch(QuestionAction::SetPagination(Pagination { page, limit, total }));
        });
    }

    /// Fetch every question in a set; pagination is left untouched.
    pub async fn fetch_questions_by_set(&self, set_id: i64) {
        self.begin();
        let result = self.backend.questions_by_set(set_id).await;
        self.finish(result, "Failed to fetch questions", |s, questions| {
            let total = questions.len() as u64;
            s.dispatch(QuestionAction::SetQuestions { questions, total });
        });
    }

    pub async fn fetch_question_by_id(&self, id: i64) {
        self.begin();
        let result = self.backend.question_by_id(id).await;
        self.finish(result, "Failed to fetch question", |s, question| {
            s.dispatch(QuestionAction::SetCurrentQuestion(Some(question)));
        });
    }

    pub async fn fetch_dashboard_stats(&self) {
        self.begin();
        let result = self.backend.dashboard_stats().await;
        self.finish(result, "Failed to fetch dashboard stats", |s, stats| {
            s.dispatch(QuestionAction::SetDashboardStats(stats));
        });
    }

    pub fn clear_error(&self) {
        self.dispatch(QuestionAction::SetError(None));
    }

    pub fn clear_current_question(&self) {
        self.dispatch(QuestionAction::SetCurrentQuestion(None));
    }
}
