//! Dashboard statistics.

#[cfg(test)]
#[path = "dashboard_api_test.rs"]
mod dashboard_api_test;

use super::error::ApiError;
use super::http::{ApiClient, ApiRequest, RawResponse, decode_envelope};
use super::types::DashboardStats;

/// `GET /dashboard`.
///
/// # Errors
///
/// Returns "Failed to fetch dashboard stats: {status}" on a non-2xx response.
pub async fn stats(client: &ApiClient) -> Result<DashboardStats, ApiError> {
    let resp = client.execute(client.authorized(ApiRequest::get("/dashboard"))).await?;
    parse_stats(&resp)
}

fn parse_stats(resp: &RawResponse) -> Result<DashboardStats, ApiError> {
    if !resp.ok() {
        return Err(ApiError::Status {
            status: resp.status,
            message: format!("Failed to fetch dashboard stats: {}", resp.status),
        });
    }
    Ok(decode_envelope::<DashboardStats>(resp, "Failed to fetch dashboard stats")?
        .data
        .unwrap_or_default())
}
