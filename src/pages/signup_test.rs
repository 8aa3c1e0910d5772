use futures::executor::block_on;

use super::*;
use crate::net::fake_backend::FakeBackend;

#[test]
fn missing_name_is_rejected_locally() {
    let backend = FakeBackend::default();
    let result = block_on(submit_signup(&backend, "", "ada@example.com", "pw"));
    assert_eq!(result.unwrap_err(), "All fields are required.");
    assert!(backend.calls().is_empty());
}

#[test]
fn bad_email_is_rejected_locally() {
    let backend = FakeBackend::default();
    let result = block_on(submit_signup(&backend, "Ada", "ada@", "pw"));
    assert_eq!(result.unwrap_err(), "Invalid email format.");
    assert!(backend.calls().is_empty());
}

#[test]
fn valid_form_registers() {
    let backend = FakeBackend {
        register: Some(Ok("User registered successfully".to_owned())),
        ..FakeBackend::default()
    };
    let message = block_on(submit_signup(&backend, "Ada", "ada@example.com", "pw")).unwrap();
    assert_eq!(message, "User registered successfully");
    assert_eq!(backend.calls(), vec!["register(Ada, ada@example.com)"]);
}
