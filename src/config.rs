//! Compile-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle has no runtime environment, so the backend base URL is
//! baked in at build time from `PREPMENTOR_API_BASE_URL`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when `PREPMENTOR_API_BASE_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// `localStorage` key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Page size used by the questions list.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Page size fetched when looking a question up by id.
pub const QUESTION_SCAN_PAGE_SIZE: u32 = 100;

/// Resolved backend base URL without a trailing slash.
pub fn api_base_url() -> &'static str {
    normalize_base_url(option_env!("PREPMENTOR_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
}

fn normalize_base_url(raw: &str) -> &str {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_API_BASE_URL } else { trimmed }
}
