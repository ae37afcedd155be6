use super::*;
use crate::models::SessionUser;

#[test]
fn success_envelope_decodes_data_and_message() {
    let body = r#"{
        "success": true,
        "message": "ok",
        "data": { "name": "Jamie Park", "email": "jamie@example.com" },
        "timestamp": 1722900000000
    }"#;

    let envelope: ApiEnvelope<SessionUser> = serde_json::from_str(body).expect("deserialize");

    assert_eq!(envelope.message.as_deref(), Some("ok"));
    assert_eq!(
        envelope.data,
        Some(SessionUser {
            name: "Jamie Park".to_string(),
            email: "jamie@example.com".to_string(),
        })
    );
    assert_eq!(envelope.error_code, None);
}

#[test]
fn error_envelope_decodes_camel_cased_error_code() {
    let body = r#"{ "success": false, "message": "duplicate", "errorCode": "U002" }"#;

    let envelope: ErrorBody = serde_json::from_str(body).expect("deserialize");

    assert_eq!(envelope.error_code.as_deref(), Some("U002"));
    assert!(envelope.has_error_code(error_codes::DUPLICATE_EMAIL));
    assert!(!envelope.has_error_code(error_codes::VERIFICATION_TOKEN_EXPIRED));
}

#[test]
fn envelope_tolerates_missing_fields() {
    let envelope: ErrorBody = serde_json::from_str("{}").expect("deserialize");

    assert_eq!(envelope, ErrorBody::default());
    assert!(!envelope.has_error_code(error_codes::DUPLICATE_EMAIL));
}

#[test]
fn message_only_envelope_decodes_without_data() {
    let body = r#"{ "success": true, "message": "verification mail sent" }"#;

    let envelope: ApiEnvelope<()> = serde_json::from_str(body).expect("deserialize");

    assert_eq!(envelope.message.as_deref(), Some("verification mail sent"));
    assert_eq!(envelope.data, None);
}
