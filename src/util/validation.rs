//! Synchronous form checks run before any network call.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::net::types::GenerateQuestionSetRequest;

static EMAIL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// A form rejected client-side; `Display` is the message shown under the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Both fields are required.")]
    LoginFieldsMissing,
    #[error("Please enter a valid email address.")]
    LoginEmailInvalid,
    #[error("All fields are required.")]
    SignupFieldsMissing,
    #[error("Invalid email format.")]
    SignupEmailInvalid,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(email))
}

/// Inline hint under an email field: only for a non-empty, malformed value.
pub fn email_hint(email: &str) -> Option<&'static str> {
    (!email.is_empty() && !is_valid_email(email)).then_some("Enter a valid email.")
}

/// # Errors
///
/// Returns the first failing check, required fields first.
pub fn validate_login(email: &str, password: &str) -> Result<(), FormError> {
    if email.is_empty() || password.is_empty() {
        return Err(FormError::LoginFieldsMissing);
    }
    if !is_valid_email(email) {
        return Err(FormError::LoginEmailInvalid);
    }
    Ok(())
}

/// # Errors
///
/// Returns the first failing check, required fields first.
pub fn validate_signup(name: &str, email: &str, password: &str) -> Result<(), FormError> {
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err(FormError::SignupFieldsMissing);
    }
    if !is_valid_email(email) {
        return Err(FormError::SignupEmailInvalid);
    }
    Ok(())
}

/// Generate dialog is submittable once every field is filled and quantity is at least one.
pub fn generate_form_ready(req: &GenerateQuestionSetRequest) -> bool {
    [&req.name, &req.kind, &req.difficulty, &req.tags]
        .iter()
        .all(|field| !field.trim().is_empty())
        && req.quantity >= 1
}

/// Answers are submittable once they contain non-whitespace text.
pub fn answer_ready(text: &str) -> bool {
    !text.trim().is_empty()
}
