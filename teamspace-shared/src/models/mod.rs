//! Wire models for the TeamSpace auth API.

pub mod auth;
pub mod envelope;

pub use auth::{
    LoginRequest, PasswordResetConfirmRequest, PasswordResetRequest, ResendVerificationRequest,
    SessionUser, SignupRequest, VerifyEmailRequest,
};
pub use envelope::{ApiEnvelope, ErrorBody, error_codes};
