use super::*;

#[test]
fn session_record_parses_sign_in_response() {
    let raw = r#"{
        "token": "tok-1",
        "userInfo": { "id": 7, "name": "Ada", "email": "ada@example.com", "role": "user" },
        "permissions": ["riders.view", "customers.view"]
    }"#;
    let record: SessionRecord = serde_json::from_str(raw).unwrap();
    assert_eq!(record.token, "tok-1");
    assert_eq!(record.user_info.id, 7);
    assert_eq!(record.user_info.name, "Ada");
    assert_eq!(record.user_info.email.as_deref(), Some("ada@example.com"));
    assert_eq!(record.user_info.role, "user");
    assert_eq!(record.permissions, vec!["riders.view", "customers.view"]);
}

#[test]
fn session_record_defaults_optional_fields() {
    let raw = r#"{ "token": "tok", "userInfo": { "id": 1, "role": "admin" } }"#;
    let record: SessionRecord = serde_json::from_str(raw).unwrap();
    assert!(record.permissions.is_empty());
    assert_eq!(record.user_info.name, "");
    assert_eq!(record.user_info.email, None);
}

#[test]
fn session_record_requires_token() {
    let raw = r#"{ "userInfo": { "id": 1, "role": "admin" } }"#;
    assert!(serde_json::from_str::<SessionRecord>(raw).is_err());
}

#[test]
fn session_record_serializes_user_info_in_camel_case() {
    let record = SessionRecord {
        token: "tok".to_owned(),
        user_info: UserInfo { id: 1, name: "Ada".to_owned(), email: None, role: "admin".to_owned() },
        permissions: Vec::new(),
    };
    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "token": "tok",
            "userInfo": { "id": 1, "name": "Ada", "role": "admin" },
            "permissions": []
        })
    );
}

#[test]
fn sign_in_request_serializes_credentials() {
    let body = SignInRequest { email: "a@b.com", password: "secret" };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "email": "a@b.com", "password": "secret" })
    );
}

#[test]
fn error_body_prefers_error_field() {
    let body: ErrorBody = serde_json::from_str(r#"{ "error": "Invalid credentials", "message": "x" }"#).unwrap();
    assert_eq!(body.into_message().as_deref(), Some("Invalid credentials"));
}

#[test]
fn error_body_falls_back_to_message_and_skips_blank() {
    let body: ErrorBody = serde_json::from_str(r#"{ "error": "  ", "message": "Account locked" }"#).unwrap();
    assert_eq!(body.into_message().as_deref(), Some("Account locked"));
    assert_eq!(ErrorBody::default().into_message(), None);
}
