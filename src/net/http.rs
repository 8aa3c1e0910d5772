//! Request plumbing shared by the API wrappers.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): `execute` returns `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! DESIGN
//! ======
//! Transport is reduced to `ApiRequest -> RawResponse`; URL building, bearer
//! attachment and envelope decoding are plain functions so they can be
//! tested without a browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::Envelope;
use crate::config;
use crate::util::storage::{BrowserStorage, TokenStorage, load_token};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// One outgoing call, relative to the API base URL.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<serde_json::Value>,
    pub bearer: Option<String>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            query: Vec::new(),
            body: None,
            bearer: None,
        }
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self {
            method: Method::Post,
            ..Self::get(path)
        }
    }

    #[must_use]
    pub fn query(mut self, pairs: Vec<(&'static str, String)>) -> Self {
        self.query = pairs;
        self
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Decode` if `body` cannot be serialized.
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, ApiError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    #[must_use]
    pub fn bearer(mut self, token: Option<String>) -> Self {
        self.bearer = token;
        self
    }
}

/// Status code plus raw body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Join the base URL and an endpoint path.
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// `Authorization` header value for `token`.
pub fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Token to attach to an authenticated call, read fresh from storage.
pub fn stored_bearer<S: TokenStorage + ?Sized>(storage: &S) -> Option<String> {
    load_token(storage)
}

/// Turn a non-2xx response into an error, preferring the backend's message.
pub fn status_error(resp: &RawResponse, fallback: &str) -> ApiError {
    let message = serde_json::from_str::<Envelope<serde_json::Value>>(&resp.body)
        .ok()
        .and_then(|env| env.message);
    ApiError::from_status(resp.status, message, fallback)
}

/// Decode the `{ data, message }` envelope of a response.
///
/// # Errors
///
/// Returns `ApiError::Status` for non-2xx responses and `ApiError::Decode`
/// when the body is not a valid envelope.
pub fn decode_envelope<T: DeserializeOwned>(resp: &RawResponse, fallback: &str) -> Result<Envelope<T>, ApiError> {
    if !resp.ok() {
        return Err(status_error(resp, fallback));
    }
    Ok(serde_json::from_str(&resp.body)?)
}

/// Decode an envelope and require its `data` field.
///
/// # Errors
///
/// As `decode_envelope`, plus `ApiError::Decode` when `data` is absent.
pub fn decode_data<T: DeserializeOwned>(resp: &RawResponse, fallback: &str) -> Result<T, ApiError> {
    decode_envelope::<T>(resp, fallback)?
        .data
        .ok_or_else(|| ApiError::Decode("response has no data".to_owned()))
}

/// Thin HTTP client bound to the configured backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(config::api_base_url())
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn url(&self, path: &str) -> String {
        endpoint(&self.base_url, path)
    }

    /// Attach the stored bearer token to `req`.
    pub fn authorized(&self, req: ApiRequest) -> ApiRequest {
        req.bearer(stored_bearer(&BrowserStorage))
    }

    /// Perform one network call.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Network` on transport failure, or
    /// `ApiError::Unavailable` outside the browser.
    pub async fn execute(&self, req: ApiRequest) -> Result<RawResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let url = self.url(&req.path);
            let mut builder = match req.method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
            };
            if !req.query.is_empty() {
                builder = builder.query(req.query.iter().map(|(k, v)| (*k, v.as_str())));
            }
            if let Some(token) = req.bearer.as_deref() {
                builder = builder.header("Authorization", &bearer_value(token));
            }
            let sent = match req.body.as_ref() {
                Some(body) => builder.json(body).map_err(network_error)?.send().await,
                None => builder.send().await,
            };
            let resp = sent.map_err(network_error)?;
            let status = resp.status();
            let body = resp.text().await.map_err(network_error)?;
            if !(200..300).contains(&status) {
                log::warn!("{} {} -> {status}", method_name(req.method), req.path);
            }
            Ok(RawResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = req;
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
fn network_error(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

#[cfg(any(test, feature = "hydrate"))]
fn method_name(method: Method) -> &'static str {
    match method {
        Method::Get => "GET",
        Method::Post => "POST",
    }
}
