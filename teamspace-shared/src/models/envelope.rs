//! The generic response envelope shared by every backend endpoint.

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;

use serde::{Deserialize, Serialize};

/// Error codes the client branches display logic on. The backend defines
/// more; anything not listed here falls through to a generic message.
pub mod error_codes {
    /// Signup rejected because the email is already registered.
    pub const DUPLICATE_EMAIL: &str = "U002";

    /// The email verification token has expired and may be re-issued.
    pub const VERIFICATION_TOKEN_EXPIRED: &str = "E003";
}

/// Backend response envelope.
///
/// The server sends more fields (`success`, `timestamp`); the client only
/// models the three it acts on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope<T> {
    /// Endpoint payload, present on success responses that carry data.
    #[serde(default)]
    pub data: Option<T>,

    /// Human-readable message, present on most responses.
    #[serde(default)]
    pub message: Option<String>,

    /// Short server-defined code distinguishing business-error variants.
    #[serde(default)]
    pub error_code: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// True when the envelope carries the given error code.
    #[must_use]
    pub fn has_error_code(&self, code: &str) -> bool {
        self.error_code.as_deref() == Some(code)
    }
}

impl<T> Default for ApiEnvelope<T> {
    fn default() -> Self {
        Self {
            data: None,
            message: None,
            error_code: None,
        }
    }
}

/// Envelope shape used when decoding error responses, where the payload
/// type is unknown and irrelevant.
pub type ErrorBody = ApiEnvelope<serde_json::Value>;
