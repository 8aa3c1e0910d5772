//! Request failure type shared by every API wrapper.
//!
//! ERROR HANDLING
//! ==============
//! Pages and state containers only ever show `ApiError`'s `Display` text, so
//! each variant renders as a message a user can read.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-2xx response; `message` is the backend's text or a fallback.
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response: {0}")]
    Decode(String),
    /// A lookup completed but found nothing.
    #[error("{0}")]
    NotFound(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a status error, preferring the backend's `message` field.
    pub fn from_status(status: u16, backend_message: Option<String>, fallback: &str) -> Self {
        let message = backend_message
            .map(|m| m.trim().to_owned())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| fallback.to_owned());
        Self::Status { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}
