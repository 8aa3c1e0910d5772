//! In-memory `Backend` for state-container tests.

use std::cell::RefCell;

use super::backend::Backend;
use super::error::ApiError;
use super::types::{
    AnswerResponse, DashboardStats, GenerateQuestionSetRequest, LoginSession, NewQuestionSet, Question, QuestionPage,
    QuestionSet, SubmitAnswerRequest, User,
};

/// Canned results per operation; unset operations fail with `Unavailable`.
/// Every call is recorded in `calls` as `name(args)`. `during_profile` runs
/// while a profile fetch is in flight.
#[derive(Default)]
pub struct FakeBackend {
    pub login: Option<Result<LoginSession, ApiError>>,
    pub register: Option<Result<String, ApiError>>,
    pub profile: Option<Result<User, ApiError>>,
    pub during_profile: Option<Box<dyn Fn()>>,
    pub question_sets: Option<Result<Vec<QuestionSet>, ApiError>>,
    pub created_set: Option<Result<QuestionSet, ApiError>>,
    pub published: Option<Result<String, ApiError>>,
    pub generated: Option<Result<i64, ApiError>>,
    pub questions: Option<Result<QuestionPage, ApiError>>,
    pub set_questions: Option<Result<Vec<Question>, ApiError>>,
    pub question: Option<Result<Question, ApiError>>,
    pub submitted: Option<Result<AnswerResponse, ApiError>>,
    pub existing_answer: Option<Result<Option<AnswerResponse>, ApiError>>,
    pub stats: Option<Result<DashboardStats, ApiError>>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeBackend {
    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

fn canned<T: Clone>(slot: Option<&Result<T, ApiError>>) -> Result<T, ApiError> {
    slot.cloned().unwrap_or(Err(ApiError::Unavailable))
}

impl Backend for FakeBackend {
    async fn login(&self, email: &str, _password: &str) -> Result<LoginSession, ApiError> {
        self.record(format!("login({email})"));
        canned(self.login.as_ref())
    }

    async fn register(&self, name: &str, email: &str, _password: &str) -> Result<String, ApiError> {
        self.record(format!("register({name}, {email})"));
        canned(self.register.as_ref())
    }

    async fn profile(&self, token: &str) -> Result<User, ApiError> {
        self.record(format!("profile({token})"));
        if let Some(hook) = &self.during_profile {
            hook();
        }
        canned(self.profile.as_ref())
    }

    async fn question_sets(&self) -> Result<Vec<QuestionSet>, ApiError> {
        self.record("question_sets()".to_owned());
        canned(self.question_sets.as_ref())
    }

    async fn create_question_set(&self, draft: &NewQuestionSet) -> Result<QuestionSet, ApiError> {
        self.record(format!("create_question_set({})", draft.name));
        canned(self.created_set.as_ref())
    }

    async fn publish_question_set(&self, id: i64) -> Result<String, ApiError> {
        self.record(format!("publish_question_set({id})"));
        canned(self.published.as_ref())
    }

    async fn generate_question_set(&self, req: &GenerateQuestionSetRequest) -> Result<i64, ApiError> {
        self.record(format!("generate_question_set({})", req.name));
        canned(self.generated.as_ref())
    }

    async fn questions(&self, page: u32, limit: u32, difficulty: Option<&str>) -> Result<QuestionPage, ApiError> {
        self.record(format!("questions({page}, {limit}, {difficulty:?})"));
        canned(self.questions.as_ref())
    }

    async fn questions_by_set(&self, set_id: i64) -> Result<Vec<Question>, ApiError> {
        self.record(format!("questions_by_set({set_id})"));
        canned(self.set_questions.as_ref())
    }

    async fn question_by_id(&self, id: i64) -> Result<Question, ApiError> {
        self.record(format!("question_by_id({id})"));
        canned(self.question.as_ref())
    }

    async fn submit_answer(&self, req: &SubmitAnswerRequest) -> Result<AnswerResponse, ApiError> {
        self.record(format!("submit_answer({}, {})", req.question_id, req.answer_text));
        canned(self.submitted.as_ref())
    }

    async fn answer_by_question(&self, question_id: i64) -> Result<Option<AnswerResponse>, ApiError> {
        self.record(format!("answer_by_question({question_id})"));
        canned(self.existing_answer.as_ref())
    }

    async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.record("dashboard_stats()".to_owned());
        canned(self.stats.as_ref())
    }
}

/// A question with the given id and difficulty.
pub fn question(id: i64, difficulty: &str) -> Question {
    Question {
        id: id.to_string(),
        title: format!("Question {id}"),
        content: format!("Question {id}"),
        category: "Rust".to_owned(),
        difficulty: difficulty.to_owned(),
        tags: vec!["ownership".to_owned()],
        question_set_id: None,
    }
}

/// A scored answer to `question_id`.
pub fn answer(question_id: i64, score: u32) -> AnswerResponse {
    AnswerResponse {
        id: 100 + question_id,
        text: "my answer".to_owned(),
        file_url: None,
        answer_type: "TEXT".to_owned(),
        submitted_at: "2025-06-01T10:00:00".to_owned(),
        question_id,
        question_text: format!("Question {question_id}"),
        user_id: Some(1),
        feedback: "Good structure".to_owned(),
        score,
        correctness: score,
        completeness: score,
        clarity: score,
    }
}
