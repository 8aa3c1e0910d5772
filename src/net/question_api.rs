//! Question-set and question endpoints.
//!
//! The backend pages questions from zero while the UI counts from one, and
//! sends tags as one space-separated string; both are adapted here.

#[cfg(test)]
#[path = "question_api_test.rs"]
mod question_api_test;

use super::error::ApiError;
use super::http::{ApiClient, ApiRequest, RawResponse, decode_data, decode_envelope};
use super::types::{
    GenerateQuestionSetRequest, NewQuestionSet, PageBody, Question, QuestionPage, QuestionPreview, QuestionSet,
};
use crate::config::QUESTION_SCAN_PAGE_SIZE;

/// `GET /question-sets`.
///
/// # Errors
///
/// Returns an error if the request fails or the body is malformed.
pub async fn question_sets(client: &ApiClient) -> Result<Vec<QuestionSet>, ApiError> {
    let resp = client.execute(client.authorized(ApiRequest::get("/question-sets"))).await?;
    decode_data(&resp, "Failed to fetch question sets")
}

/// `POST /question-sets` with a draft set.
///
/// # Errors
///
/// Returns an error if the request fails or the body is malformed.
pub async fn create_question_set(client: &ApiClient, draft: &NewQuestionSet) -> Result<QuestionSet, ApiError> {
    let req = client.authorized(ApiRequest::post("/question-sets").json(draft)?);
    let resp = client.execute(req).await?;
    decode_data(&resp, "Failed to create question set")
}

/// `POST /question-sets/{id}/confirm`; returns the backend's message.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn publish_question_set(client: &ApiClient, id: i64) -> Result<String, ApiError> {
    let req = client.authorized(ApiRequest::post(format!("/question-sets/{id}/confirm")));
    let resp = client.execute(req).await?;
    let envelope = decode_envelope::<serde_json::Value>(&resp, "Failed to publish question set")?;
    Ok(envelope.message.unwrap_or_default())
}

/// `POST /question-sets/generate`; returns the new set's id.
///
/// # Errors
///
/// Returns an error if the request fails or no id comes back.
pub async fn generate_question_set(client: &ApiClient, req: &GenerateQuestionSetRequest) -> Result<i64, ApiError> {
    let req = client.authorized(ApiRequest::post("/question-sets/generate").json(req)?);
    let resp = client.execute(req).await?;
    decode_data(&resp, "Failed to generate question set")
}

/// `GET /questions?page&size[&difficulty]` with a one-based `page`.
///
/// # Errors
///
/// Returns an error if the request fails or the body is malformed.
pub async fn questions(
    client: &ApiClient,
    page: u32,
    limit: u32,
    difficulty: Option<&str>,
) -> Result<QuestionPage, ApiError> {
    let req = client.authorized(ApiRequest::get("/questions").query(questions_query(page, limit, difficulty)));
    let resp = client.execute(req).await?;
    parse_question_page(&resp)
}

/// `GET /questions/{set_id}`.
///
/// # Errors
///
/// Returns an error if the request fails or the body is malformed.
pub async fn questions_by_set(client: &ApiClient, set_id: i64) -> Result<Vec<Question>, ApiError> {
    let req = client.authorized(ApiRequest::get(format!("/questions/{set_id}")));
    let resp = client.execute(req).await?;
    parse_set_questions(&resp, set_id)
}

/// Find one question by id.
///
/// There is no single-question endpoint, so this fetches the first
/// `QUESTION_SCAN_PAGE_SIZE` questions and scans them.
///
/// # Errors
///
/// Returns `ApiError::Status` on a failed fetch and `ApiError::NotFound`
/// when the id is not on the scanned page.
pub async fn question_by_id(client: &ApiClient, id: i64) -> Result<Question, ApiError> {
    let query = vec![("page", "0".to_owned()), ("size", QUESTION_SCAN_PAGE_SIZE.to_string())];
    let req = client.authorized(ApiRequest::get("/questions").query(query));
    let resp = client.execute(req).await?;
    parse_question_lookup(&resp, id)
}

/// Query pairs for the paged list: zero-based page, uppercase difficulty,
/// and no difficulty filter for `all`.
pub fn questions_query(page: u32, limit: u32, difficulty: Option<&str>) -> Vec<(&'static str, String)> {
    let mut pairs = vec![("page", page.saturating_sub(1).to_string()), ("size", limit.to_string())];
    if let Some(d) = difficulty.map(str::trim).filter(|d| !d.is_empty() && !d.eq_ignore_ascii_case("all")) {
        pairs.push(("difficulty", d.to_uppercase()));
    }
    pairs
}

fn parse_question_page(resp: &RawResponse) -> Result<QuestionPage, ApiError> {
    let page: PageBody<QuestionPreview> = decode_data(resp, "Failed to fetch questions")?;
    Ok(QuestionPage {
        questions: page.content.into_iter().map(|q| q.into_question(None)).collect(),
        total: page.total_elements,
    })
}

fn parse_set_questions(resp: &RawResponse, set_id: i64) -> Result<Vec<Question>, ApiError> {
    let envelope = decode_envelope::<Vec<QuestionPreview>>(resp, "Failed to fetch questions")?;
    Ok(envelope
        .data
        .unwrap_or_default()
        .into_iter()
        .map(|q| q.into_question(Some(set_id)))
        .collect())
}

fn parse_question_lookup(resp: &RawResponse, id: i64) -> Result<Question, ApiError> {
    if !resp.ok() {
        return Err(ApiError::Status {
            status: resp.status,
            message: format!("Failed to fetch questions: {}", resp.status),
        });
    }
    let envelope = decode_envelope::<PageBody<QuestionPreview>>(resp, "Failed to fetch questions")?;
    let page = envelope
        .data
        .ok_or_else(|| ApiError::NotFound("Questions not found".to_owned()))?;
    let preview = page
        .content
        .into_iter()
        .find(|q| q.id == Some(id))
        .ok_or_else(|| ApiError::NotFound(format!("Question with ID {id} not found")))?;
    let mut question = preview.into_question(None);
    if question.difficulty.is_empty() {
        "Medium".clone_into(&mut question.difficulty);
    }
    Ok(question)
}
