//! Wire DTOs and client-side domain types for the PrepMentor backend.
//!
//! DESIGN
//! ======
//! Backend payloads use camelCase and wrap results in an `ApiResponse`
//! envelope. Question previews arrive in a compact wire form and are mapped
//! into the richer `Question` shape the pages render.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Standard response envelope: `{ statusCode, message, data, errors }`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    #[serde(default)]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<String>,
}

/// The signed-in user as tracked by auth state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
}

/// Body of `GET /users/profile`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
}

impl From<UserProfile> for User {
    fn from(profile: UserProfile) -> Self {
        Self { email: profile.email }
    }
}

/// Result of a successful login: bearer token plus the user it belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginSession {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LoginData {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// A practice question as rendered by the pages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: String,
    /// Nominally `Easy`, `Medium` or `Hard`; kept as the backend sends it.
    pub difficulty: String,
    pub tags: Vec<String>,
    pub question_set_id: Option<String>,
}

/// Compact question form returned by `/questions` endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPreview {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    /// Space-separated tag list.
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub question_set_id: Option<i64>,
}

impl QuestionPreview {
    /// Map into a `Question`, attaching `set_id` when the caller knows it.
    pub fn into_question(self, set_id: Option<i64>) -> Question {
        let text = self.text.unwrap_or_default();
        Question {
            id: self.id.map(|id| id.to_string()).unwrap_or_default(),
            title: text.clone(),
            content: text,
            category: self.kind.unwrap_or_default(),
            difficulty: self.difficulty.unwrap_or_default(),
            tags: split_tags(self.tags.as_deref()),
            question_set_id: set_id.or(self.question_set_id).map(|id| id.to_string()),
        }
    }
}

/// Split the backend's space-separated tag string.
pub fn split_tags(raw: Option<&str>) -> Vec<String> {
    raw.map(|tags| tags.split_whitespace().map(str::to_owned).collect())
        .unwrap_or_default()
}

/// A Spring `Page<T>` body; only the fields the client reads.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageBody<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: u64,
}

/// One page of questions plus the server-side total.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total: u64,
}

/// Lifecycle of a generated question set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum QuestionSetStatus {
    #[default]
    Draft,
    Published,
}

impl QuestionSetStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Published => "PUBLISHED",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSet {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub difficulty: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: String,
    #[serde(default)]
    pub status: QuestionSetStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub questions: Vec<String>,
}

/// A question set before the backend assigns an id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewQuestionSet {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub difficulty: String,
    pub tags: String,
    pub status: QuestionSetStatus,
    pub questions: Vec<String>,
}

/// Body of `POST /question-sets/generate`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GenerateQuestionSetRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub difficulty: String,
    pub tags: String,
    pub quantity: u32,
}

/// Body of `POST /answers`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAnswerRequest {
    pub question_id: i64,
    pub answer_type: String,
    pub answer_text: String,
}

impl SubmitAnswerRequest {
    pub fn text(question_id: i64, answer_text: &str) -> Self {
        Self {
            question_id,
            answer_type: "TEXT".to_owned(),
            answer_text: answer_text.trim().to_owned(),
        }
    }
}

/// A scored answer as returned by the backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerResponse {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub answer_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub submitted_at: String,
    pub question_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub question_text: String,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub feedback: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub score: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub correctness: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub completeness: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub clarity: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LowScoreQuestion {
    pub question_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub question_text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub score: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub submitted_at: String,
}

/// Aggregates computed server-side for the dashboard.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub average_score: Option<f64>,
    #[serde(default)]
    pub questions_answered_count: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub low_score_questions: Vec<LowScoreQuestion>,
}

/// Treat an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
