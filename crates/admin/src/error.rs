//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures errors to Sentry before
//! responding to the client. All route handlers should return `Result<T, AppError>`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::cloudinary::CloudinaryError;
use crate::firebase::FirebaseError;
use crate::services::auth::AuthError;

/// Application-level error type for the admin API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Firestore operation failed.
    #[error("Firebase error: {0}")]
    Firebase(#[from] FirebaseError),

    /// Cloudinary operation failed.
    #[error("Cloudinary error: {0}")]
    Cloudinary(#[from] CloudinaryError),

    /// Session read/write failed.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Write payload failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        let is_server_error = matches!(
            self,
            Self::Session(_)
                | Self::Internal(_)
                | Self::Auth(AuthError::Http(_) | AuthError::Api { .. } | AuthError::Parse(_))
                | Self::Firebase(
                    FirebaseError::Http(_) | FirebaseError::Api { .. } | FirebaseError::Parse(_)
                )
                | Self::Cloudinary(
                    CloudinaryError::Http(_)
                        | CloudinaryError::Api { .. }
                        | CloudinaryError::Parse(_)
                )
        );
        if is_server_error {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Auth(AuthError::InvalidCredentials) => StatusCode::UNAUTHORIZED,
            Self::Auth(AuthError::NotAllowed) => StatusCode::FORBIDDEN,
            Self::Auth(_)
            | Self::Firebase(FirebaseError::Http(_) | FirebaseError::Api { .. })
            | Self::Cloudinary(
                CloudinaryError::Http(_) | CloudinaryError::Api { .. },
            ) => StatusCode::BAD_GATEWAY,
            Self::Firebase(FirebaseError::NotFound(_))
            | Self::Cloudinary(CloudinaryError::DeleteRejected(_))
            | Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Auth(AuthError::InvalidCredentials) => "Invalid credentials".to_string(),
            Self::Auth(AuthError::NotAllowed) => {
                "This account is not authorized for admin access".to_string()
            }
            Self::Firebase(FirebaseError::NotFound(_)) | Self::NotFound(_) => {
                "Not found".to_string()
            }
            Self::Cloudinary(CloudinaryError::DeleteRejected(_)) => "Image not found".to_string(),
            Self::Auth(_) | Self::Firebase(_) | Self::Cloudinary(_) => {
                "External service error".to_string()
            }
            Self::Validation(msg) | Self::BadRequest(msg) => msg.clone(),
            Self::Session(_) | Self::Internal(_) => "Internal server error".to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
