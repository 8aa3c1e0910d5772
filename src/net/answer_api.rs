//! Answer submission and lookup.

#[cfg(test)]
#[path = "answer_api_test.rs"]
mod answer_api_test;

use super::error::ApiError;
use super::http::{ApiClient, ApiRequest, RawResponse, decode_data, decode_envelope};
use super::types::{AnswerResponse, SubmitAnswerRequest};

/// `POST /answers`; returns the scored answer.
///
/// # Errors
///
/// Returns an error if the request fails or no answer comes back.
pub async fn submit(client: &ApiClient, req: &SubmitAnswerRequest) -> Result<AnswerResponse, ApiError> {
    let req = client.authorized(ApiRequest::post("/answers").json(req)?);
    let resp = client.execute(req).await?;
    parse_submit(&resp)
}

/// `GET /answers/{question_id}`; `Ok(None)` when the question is unanswered.
///
/// # Errors
///
/// Returns an error if the request fails or the body is malformed.
pub async fn by_question(client: &ApiClient, question_id: i64) -> Result<Option<AnswerResponse>, ApiError> {
    let req = client.authorized(ApiRequest::get(format!("/answers/{question_id}")));
    let resp = client.execute(req).await?;
    parse_existing(&resp)
}

fn parse_submit(resp: &RawResponse) -> Result<AnswerResponse, ApiError> {
    decode_data(resp, "Failed to submit answer")
}

fn parse_existing(resp: &RawResponse) -> Result<Option<AnswerResponse>, ApiError> {
    Ok(decode_envelope(resp, "Failed to fetch answer")?.data)
}
