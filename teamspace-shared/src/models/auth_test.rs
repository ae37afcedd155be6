use super::*;

#[test]
fn session_user_round_trips_through_json() {
    let user = SessionUser {
        name: "Jamie Park".to_string(),
        email: "jamie@example.com".to_string(),
    };

    let encoded = serde_json::to_string(&user).expect("serialize");
    let decoded: SessionUser = serde_json::from_str(&encoded).expect("deserialize");

    assert_eq!(decoded, user);
}

#[test]
fn signup_request_serializes_missing_phone_as_explicit_null() {
    let request = SignupRequest {
        name: "Jamie Park".to_string(),
        email: "jamie@example.com".to_string(),
        password: "secret1!".to_string(),
        phone_number: None,
    };

    let value = serde_json::to_value(&request).expect("serialize");

    // The backend expects the key to be present with a null value, not
    // dropped from the body.
    assert_eq!(value["phoneNumber"], serde_json::Value::Null);
    assert_eq!(value["name"], "Jamie Park");
}

#[test]
fn signup_request_uses_camel_case_field_names() {
    let request = SignupRequest {
        name: "Jamie Park".to_string(),
        email: "jamie@example.com".to_string(),
        password: "secret1!".to_string(),
        phone_number: Some("010-1234-5678".to_string()),
    };

    let encoded = serde_json::to_string(&request).expect("serialize");

    assert!(encoded.contains("\"phoneNumber\":\"010-1234-5678\""));
    assert!(!encoded.contains("phone_number"));
}

#[test]
fn resend_request_renames_expired_token() {
    let request = ResendVerificationRequest {
        expired_token: "tok-123".to_string(),
    };

    let encoded = serde_json::to_string(&request).expect("serialize");

    assert!(encoded.contains("\"expiredToken\":\"tok-123\""));
}

#[test]
fn password_reset_confirm_renames_new_password() {
    let request = PasswordResetConfirmRequest {
        token: "tok-456".to_string(),
        new_password: "fresh-pass1!".to_string(),
    };

    let encoded = serde_json::to_string(&request).expect("serialize");

    assert!(encoded.contains("\"newPassword\":\"fresh-pass1!\""));
    assert!(encoded.contains("\"token\":\"tok-456\""));
}
