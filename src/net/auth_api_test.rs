use super::*;

fn response(status: u16, body: serde_json::Value) -> RawResponse {
    RawResponse {
        status,
        body: body.to_string(),
    }
}

#[test]
fn parse_login_takes_token_and_echoes_email() {
    let resp = response(200, serde_json::json!({ "message": "Login successful", "data": { "token": "jwt-1" } }));
    let session = parse_login(&resp, "ada@example.com").unwrap();
    assert_eq!(session.token, "jwt-1");
    assert_eq!(session.user.email, "ada@example.com");
}

#[test]
fn parse_login_surfaces_backend_message() {
    let resp = response(401, serde_json::json!({ "statusCode": 401, "message": "Invalid email or password" }));
    assert_eq!(
        parse_login(&resp, "ada@example.com").unwrap_err().to_string(),
        "Invalid email or password"
    );
}

#[test]
fn parse_login_falls_back_to_generic_message() {
    let resp = response(500, serde_json::json!({}));
    assert_eq!(parse_login(&resp, "a@b.co").unwrap_err().to_string(), "Login failed");
}

#[test]
fn parse_register_returns_message() {
    let resp = response(200, serde_json::json!({ "message": "User registered successfully", "data": null }));
    assert_eq!(parse_register(&resp).unwrap(), "User registered successfully");
}

#[test]
fn parse_register_error_uses_fallback() {
    let resp = response(400, serde_json::json!({ "errors": ["email"] }));
    assert_eq!(parse_register(&resp).unwrap_err().to_string(), "Registration failed");
}

#[test]
fn parse_profile_accepts_bare_object() {
    let resp = response(200, serde_json::json!({ "id": 1, "name": "Ada", "email": "ada@example.com" }));
    assert_eq!(parse_profile(&resp).unwrap().email, "ada@example.com");
}

#[test]
fn parse_profile_accepts_envelope() {
    let resp = response(200, serde_json::json!({ "data": { "email": "grace@example.com" } }));
    assert_eq!(parse_profile(&resp).unwrap().email, "grace@example.com");
}

#[test]
fn parse_profile_rejects_401() {
    let resp = RawResponse {
        status: 401,
        body: String::new(),
    };
    let err = parse_profile(&resp).unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.to_string(), "Unauthorized");
}
