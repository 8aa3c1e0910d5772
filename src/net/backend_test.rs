use super::*;

#[test]
fn default_backend_uses_configured_base_url() {
    assert_eq!(
        HttpBackend::default(),
        HttpBackend::new(ApiClient::new(crate::config::api_base_url()))
    );
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_backend_is_unavailable_outside_browser() {
    use futures::executor::block_on;

    let backend = HttpBackend::new(ApiClient::new("http://backend.test/api"));
    assert_eq!(block_on(backend.dashboard_stats()), Err(ApiError::Unavailable));
    assert_eq!(block_on(backend.question_by_id(3)), Err(ApiError::Unavailable));
    assert_eq!(block_on(backend.login("a@b.co", "pw")), Err(ApiError::Unavailable));
}
