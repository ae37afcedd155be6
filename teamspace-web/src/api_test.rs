use super::*;

fn server_error(status: StatusCode, message: Option<&str>, code: Option<&str>) -> ApiError {
    ApiError::Server {
        status,
        body: ErrorBody {
            data: None,
            message: message.map(ToString::to_string),
            error_code: code.map(ToString::to_string),
        },
    }
}

#[test]
fn client_creation_trims_trailing_slash() {
    let client = ApiClient::new("http://localhost:8080/api/v1/");
    assert_eq!(
        client.api_url("auth/login"),
        "http://localhost:8080/api/v1/auth/login"
    );
}

#[test]
fn api_url_joins_leading_slash_paths() {
    let client = ApiClient::new("http://localhost:8080/api/v1");
    assert_eq!(
        client.api_url("/auth/verify-email/resend"),
        "http://localhost:8080/api/v1/auth/verify-email/resend"
    );
}

#[test]
fn server_error_exposes_message_and_code() {
    let err = server_error(StatusCode::CONFLICT, Some("duplicate"), Some("U002"));

    assert_eq!(err.message(), Some("duplicate"));
    assert_eq!(err.error_code(), Some("U002"));
    assert!(err.has_error_code(shared::models::error_codes::DUPLICATE_EMAIL));
    assert!(!err.has_error_code(shared::models::error_codes::VERIFICATION_TOKEN_EXPIRED));
}

#[test]
fn server_error_without_body_has_no_message() {
    let err = server_error(StatusCode::BAD_GATEWAY, None, None);

    assert_eq!(err.message(), None);
    assert_eq!(err.error_code(), None);
    assert!(!err.has_error_code("U002"));
}

#[test]
fn missing_data_carries_no_server_fields() {
    let err = ApiError::MissingData;

    assert_eq!(err.message(), None);
    assert_eq!(err.error_code(), None);
    assert!(!err.to_string().is_empty());
}

#[test]
fn error_display_includes_status() {
    let err = server_error(StatusCode::GONE, Some("expired"), Some("E003"));
    assert!(err.to_string().contains("410"));
}
