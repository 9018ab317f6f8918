//! Admin authentication error types.

use thiserror::Error;

/// Errors from the admin authentication service.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The email/password pair was rejected by Firebase Auth.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The account authenticated but is not on the allow-list.
    #[error("Email is not authorized for admin access")]
    NotAllowed,

    /// The HTTP request to Firebase Auth failed.
    #[error("Auth request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Firebase Auth returned an unexpected error response.
    #[error("Auth API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body could not be parsed.
    #[error("Auth response parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
