use super::*;

#[test]
fn port_defaults_when_unset() {
    assert_eq!(port_from(None).unwrap(), 3000);
}

#[test]
fn port_parses_value() {
    assert_eq!(port_from(Some(" 8081 ".to_owned())).unwrap(), 8081);
}

#[test]
fn port_rejects_garbage() {
    let err = port_from(Some("eighty".to_owned())).unwrap_err();
    assert_eq!(err.to_string(), "invalid PORT: eighty");
}
