//! HTTP client for the TeamSpace backend.
//!
//! One preconfigured client directed at the fixed API base. The browser
//! attaches the session cookie; there is no retry, no backoff and no
//! timeout configuration. Non-success responses are decoded into the
//! server envelope so callers can branch on the message and error code.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use shared::models::{
    ApiEnvelope, ErrorBody, LoginRequest, PasswordResetConfirmRequest, PasswordResetRequest,
    ResendVerificationRequest, SessionUser, SignupRequest, VerifyEmailRequest,
};
use thiserror::Error;

use crate::config::FrontendConfig;

const CLIENT_TYPE_HEADER: &str = "X-Client-Type";
const CLIENT_TYPE_WEB: &str = "web";

thread_local! {
    static SHARED_CLIENT: OnceCell<ApiClient> = OnceCell::new();
}

/// Errors surfaced by [`ApiClient`] calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure; no structured body reached the client.
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server rejected the request ({status})")]
    Server {
        /// HTTP status of the response.
        status: StatusCode,
        /// Decoded envelope; defaults to empty when the body was not
        /// parseable.
        body: ErrorBody,
    },

    /// A success response was missing the payload the contract promises.
    #[error("response body was missing the expected payload")]
    MissingData,
}

impl ApiError {
    /// Server-provided message, when one was decoded.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Server { body, .. } => body.message.as_deref(),
            Self::Network(_) | Self::MissingData => None,
        }
    }

    /// Server-provided error code, when one was decoded.
    #[must_use]
    pub fn error_code(&self) -> Option<&str> {
        match self {
            Self::Server { body, .. } => body.error_code.as_deref(),
            Self::Network(_) | Self::MissingData => None,
        }
    }

    /// True when the server reported the given business-error code.
    #[must_use]
    pub fn has_error_code(&self, code: &str) -> bool {
        self.error_code() == Some(code)
    }
}

/// Lightweight API client for the TeamSpace auth endpoints.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    /// Create a new API client with the provided base URL.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// The one client instance the screens share.
    #[must_use]
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(FrontendConfig::default().api_base_url()))
                .clone()
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// POST builder with the session cookie attached. The API lives on
    /// its own origin, so the fetch must opt into credentials.
    fn post(&self, path: &str) -> RequestBuilder {
        let request = self.client.post(self.api_url(path));
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();
        request
    }

    async fn execute<T: DeserializeOwned + Default>(
        &self,
        request: RequestBuilder,
    ) -> Result<ApiEnvelope<T>, ApiError> {
        let response = request.send().await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned + Default>(response: Response) -> Result<ApiEnvelope<T>, ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json::<ApiEnvelope<T>>().await?)
        } else {
            let body = response.json::<ErrorBody>().await.unwrap_or_default();
            Err(ApiError::Server { status, body })
        }
    }

    /// Authenticate with email/password credentials and return the
    /// signed-in user.
    pub async fn login(&self, request: &LoginRequest) -> Result<SessionUser, ApiError> {
        let envelope: ApiEnvelope<SessionUser> = self
            .execute(
                self.post("auth/login")
                    .header(CLIENT_TYPE_HEADER, CLIENT_TYPE_WEB)
                    .json(request),
            )
            .await?;
        envelope.data.ok_or(ApiError::MissingData)
    }

    /// Terminate the backend session. The response carries no body.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let response = self.post("auth/logout").send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.json::<ErrorBody>().await.unwrap_or_default();
            Err(ApiError::Server { status, body })
        }
    }

    /// Register a new account, returning the server's confirmation
    /// message.
    pub async fn signup(&self, request: &SignupRequest) -> Result<Option<String>, ApiError> {
        let envelope: ApiEnvelope<serde_json::Value> =
            self.execute(self.post("auth/signup").json(request)).await?;
        Ok(envelope.message)
    }

    /// Confirm an email address with a mailed verification token.
    pub async fn verify_email(
        &self,
        request: &VerifyEmailRequest,
    ) -> Result<Option<String>, ApiError> {
        let envelope: ApiEnvelope<serde_json::Value> = self
            .execute(self.post("auth/verify-email").json(request))
            .await?;
        Ok(envelope.message)
    }

    /// Re-issue a verification mail for an expired token.
    pub async fn resend_verification(
        &self,
        request: &ResendVerificationRequest,
    ) -> Result<Option<String>, ApiError> {
        let envelope: ApiEnvelope<serde_json::Value> = self
            .execute(self.post("auth/verify-email/resend").json(request))
            .await?;
        Ok(envelope.message)
    }

    /// Have a password-reset link mailed out.
    pub async fn request_password_reset(
        &self,
        request: &PasswordResetRequest,
    ) -> Result<Option<String>, ApiError> {
        let envelope: ApiEnvelope<serde_json::Value> = self
            .execute(self.post("auth/password/reset-request").json(request))
            .await?;
        Ok(envelope.message)
    }

    /// Set a new password using a mailed reset token.
    pub async fn reset_password(
        &self,
        request: &PasswordResetConfirmRequest,
    ) -> Result<Option<String>, ApiError> {
        let envelope: ApiEnvelope<serde_json::Value> = self
            .execute(self.post("auth/password/reset").json(request))
            .await?;
        Ok(envelope.message)
    }
}
