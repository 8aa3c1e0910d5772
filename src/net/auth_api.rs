//! Login, registration and profile endpoints.

#[cfg(test)]
#[path = "auth_api_test.rs"]
mod auth_api_test;

use super::error::ApiError;
use super::http::{ApiClient, ApiRequest, RawResponse, decode_data, decode_envelope, status_error};
use super::types::{Envelope, LoginData, LoginRequest, LoginSession, RegisterRequest, User, UserProfile};

const LOGIN_FAILED: &str = "Login failed";
const REGISTRATION_FAILED: &str = "Registration failed";
const UNAUTHORIZED: &str = "Unauthorized";

/// `POST /login`.
///
/// # Errors
///
/// Returns the backend's message (or "Login failed") on rejection.
pub async fn login(client: &ApiClient, email: &str, password: &str) -> Result<LoginSession, ApiError> {
    let req = ApiRequest::post("/login").json(&LoginRequest { email, password })?;
    let resp = client.execute(req).await?;
    parse_login(&resp, email)
}

/// `POST /auth/register`; returns the backend's confirmation message.
///
/// # Errors
///
/// Returns the backend's message (or "Registration failed") on rejection.
pub async fn register(client: &ApiClient, name: &str, email: &str, password: &str) -> Result<String, ApiError> {
    let req = ApiRequest::post("/auth/register").json(&RegisterRequest { name, email, password })?;
    let resp = client.execute(req).await?;
    parse_register(&resp)
}

/// `GET /users/profile` with an explicit bearer token.
///
/// # Errors
///
/// Returns `ApiError::Status` when the token is rejected.
pub async fn profile(client: &ApiClient, token: &str) -> Result<User, ApiError> {
    let req = ApiRequest::get("/users/profile").bearer(Some(token.to_owned()));
    let resp = client.execute(req).await?;
    parse_profile(&resp)
}

fn parse_login(resp: &RawResponse, email: &str) -> Result<LoginSession, ApiError> {
    let data: LoginData = decode_data(resp, LOGIN_FAILED)?;
    Ok(LoginSession {
        token: data.token,
        user: User { email: email.to_owned() },
    })
}

fn parse_register(resp: &RawResponse) -> Result<String, ApiError> {
    let envelope = decode_envelope::<serde_json::Value>(resp, REGISTRATION_FAILED)?;
    Ok(envelope.message.unwrap_or_default())
}

/// The profile endpoint answers with a bare object; an envelope is accepted too.
fn parse_profile(resp: &RawResponse) -> Result<User, ApiError> {
    if !resp.ok() {
        return Err(status_error(resp, UNAUTHORIZED));
    }
    if let Ok(Envelope { data: Some(profile), .. }) = serde_json::from_str::<Envelope<UserProfile>>(&resp.body) {
        return Ok(profile.into());
    }
    let profile: UserProfile = serde_json::from_str(&resp.body)?;
    Ok(profile.into())
}
