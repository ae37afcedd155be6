//! Request bodies for the auth endpoints and the locally persisted session
//! record.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

/// The signed-in user as returned by `POST /auth/login` and persisted by the
/// web client as its session marker.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionUser {
    /// The user's display name.
    pub name: String,

    /// The user's email address.
    pub email: String,
}

/// Request to authenticate with email/password credentials.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// The user's email address.
    pub email: String,

    /// The user's password.
    pub password: String,
}

/// Request to register a new account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    /// The user's display name.
    pub name: String,

    /// The user's email address.
    pub email: String,

    /// The user's password.
    pub password: String,

    /// Optional contact number. An empty form value is normalized to an
    /// explicit `null` on the wire rather than omitted.
    pub phone_number: Option<String>,
}

/// Request to confirm an email address with a mailed verification token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerifyEmailRequest {
    /// Opaque verification token, forwarded verbatim from the URL.
    pub token: String,
}

/// Request to re-issue a verification mail after the token expired.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResendVerificationRequest {
    /// The expired token identifying the pending registration.
    pub expired_token: String,
}

/// Request to have a password-reset link mailed out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PasswordResetRequest {
    /// The account's email address.
    pub email: String,
}

/// Request to set a new password using a mailed reset token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PasswordResetConfirmRequest {
    /// Opaque reset token, forwarded verbatim from the URL.
    pub token: String,

    /// The replacement password.
    pub new_password: String,
}
