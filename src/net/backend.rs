//! Seam between state containers and the HTTP wrappers.
//!
//! DESIGN
//! ======
//! `Backend` lists every remote operation the client performs. `HttpBackend`
//! forwards to the `*_api` modules; state containers take any `Backend`, so
//! their loading/error contracts can be driven by an in-memory fake.

#![allow(async_fn_in_trait)]

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use super::error::ApiError;
use super::http::ApiClient;
use super::types::{
    AnswerResponse, DashboardStats, GenerateQuestionSetRequest, LoginSession, NewQuestionSet, Question, QuestionPage,
    QuestionSet, SubmitAnswerRequest, User,
};
use super::{answer_api, auth_api, dashboard_api, question_api};

pub trait Backend {
    async fn login(&self, email: &str, password: &str) -> Result<LoginSession, ApiError>;
    async fn register(&self, name: &str, email: &str, password: &str) -> Result<String, ApiError>;
    async fn profile(&self, token: &str) -> Result<User, ApiError>;

    async fn question_sets(&self) -> Result<Vec<QuestionSet>, ApiError>;
    async fn create_question_set(&self, draft: &NewQuestionSet) -> Result<QuestionSet, ApiError>;
    async fn publish_question_set(&self, id: i64) -> Result<String, ApiError>;
    async fn generate_question_set(&self, req: &GenerateQuestionSetRequest) -> Result<i64, ApiError>;

    async fn questions(&self, page: u32, limit: u32, difficulty: Option<&str>) -> Result<QuestionPage, ApiError>;
    async fn questions_by_set(&self, set_id: i64) -> Result<Vec<Question>, ApiError>;
    async fn question_by_id(&self, id: i64) -> Result<Question, ApiError>;

    async fn submit_answer(&self, req: &SubmitAnswerRequest) -> Result<AnswerResponse, ApiError>;
    async fn answer_by_question(&self, question_id: i64) -> Result<Option<AnswerResponse>, ApiError>;

    async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError>;
}

/// The real backend over HTTP.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpBackend {
    client: ApiClient,
}

impl HttpBackend {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl Backend for HttpBackend {
    async fn login(&self, email: &str, password: &str) -> Result<LoginSession, ApiError> {
        auth_api::login(&self.client, email, password).await
    }

    async fn register(&self, name: &str, email: &str, password: &str) -> Result<String, ApiError> {
        auth_api::register(&self.client, name, email, password).await
    }

    async fn profile(&self, token: &str) -> Result<User, ApiError> {
        auth_api::profile(&self.client, token).await
    }

    async fn question_sets(&self) -> Result<Vec<QuestionSet>, ApiError> {
        question_api::question_sets(&self.client).await
    }

    async fn create_question_set(&self, draft: &NewQuestionSet) -> Result<QuestionSet, ApiError> {
        question_api::create_question_set(&self.client, draft).await
    }

    async fn publish_question_set(&self, id: i64) -> Result<String, ApiError> {
        question_api::publish_question_set(&self.client, id).await
    }

    async fn generate_question_set(&self, req: &GenerateQuestionSetRequest) -> Result<i64, ApiError> {
        question_api::generate_question_set(&self.client, req).await
    }

    async fn questions(&self, page: u32, limit: u32, difficulty: Option<&str>) -> Result<QuestionPage, ApiError> {
        question_api::questions(&self.client, page, limit, difficulty).await
    }

    async fn questions_by_set(&self, set_id: i64) -> Result<Vec<Question>, ApiError> {
        question_api::questions_by_set(&self.client, set_id).await
    }

    async fn question_by_id(&self, id: i64) -> Result<Question, ApiError> {
        question_api::question_by_id(&self.client, id).await
    }

    async fn submit_answer(&self, req: &SubmitAnswerRequest) -> Result<AnswerResponse, ApiError> {
        answer_api::submit(&self.client, req).await
    }

    async fn answer_by_question(&self, question_id: i64) -> Result<Option<AnswerResponse>, ApiError> {
        answer_api::by_question(&self.client, question_id).await
    }

    async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        dashboard_api::stats(&self.client).await
    }
}
