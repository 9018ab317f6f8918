//! Admin authentication service.
//!
//! Authenticates against Firebase Auth's password sign-in endpoint, then
//! checks the resulting email against the configured allow-list. There is no
//! local user table; Firebase owns the credentials and the allow-list owns
//! authorization.

mod error;

pub use error::AuthError;

use hibhana_core::Email;
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{info, instrument, warn};

use crate::config::{AdminConfig, FirebaseConfig};
use crate::models::CurrentAdmin;

/// Firebase error codes that mean the credentials were simply wrong.
const CREDENTIAL_ERROR_CODES: &[&str] = &[
    "EMAIL_NOT_FOUND",
    "INVALID_PASSWORD",
    "INVALID_LOGIN_CREDENTIALS",
    "USER_DISABLED",
];

/// Successful sign-in response from Firebase Auth.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    local_id: String,
    email: String,
}

/// Admin authentication service.
pub struct AdminAuthService<'a> {
    client: &'a reqwest::Client,
    firebase: &'a FirebaseConfig,
    allowed_email: &'a Email,
}

impl<'a> AdminAuthService<'a> {
    /// Create a new admin authentication service.
    #[must_use]
    pub const fn new(client: &'a reqwest::Client, config: &'a AdminConfig) -> Self {
        Self {
            client,
            firebase: &config.firebase,
            allowed_email: &config.allowed_email,
        }
    }

    /// Sign in with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if Firebase rejects the pair,
    /// `AuthError::NotAllowed` if the account is not on the allow-list, or a
    /// transport/API error otherwise.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<CurrentAdmin, AuthError> {
        let response = self
            .client
            .post(self.firebase.sign_in_url())
            .query(&[("key", self.firebase.api_key.expose_secret())])
            .json(&json!({
                "email": email,
                "password": password,
                "returnSecureToken": true,
            }))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let code = firebase_error_code(&body);
            if CREDENTIAL_ERROR_CODES.iter().any(|c| code.starts_with(c)) {
                warn!("Sign-in rejected by Firebase");
                return Err(AuthError::InvalidCredentials);
            }
            return Err(AuthError::Api {
                status: status.as_u16(),
                message: code,
            });
        }

        let signed_in: SignInResponse = serde_json::from_str(&body)?;

        // Only the allow-listed address may use the back-office, whatever
        // accounts exist in the Firebase project.
        if !self.allowed_email.matches(&signed_in.email) {
            warn!("Sign-in by non-allow-listed account");
            return Err(AuthError::NotAllowed);
        }

        let admin_email = Email::parse(&signed_in.email).map_err(|_| AuthError::NotAllowed)?;

        info!("Admin signed in");
        Ok(CurrentAdmin {
            uid: signed_in.local_id,
            email: admin_email,
        })
    }
}

/// Pull the error code (e.g. `INVALID_LOGIN_CREDENTIALS`) out of a Firebase
/// Auth error body.
fn firebase_error_code(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")?
                .get("message")?
                .as_str()
                .map(ToOwned::to_owned)
        })
        .unwrap_or_else(|| body.chars().take(200).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_firebase_error_code_extraction() {
        let body = r#"{"error":{"code":400,"message":"INVALID_LOGIN_CREDENTIALS","errors":[]}}"#;
        assert_eq!(firebase_error_code(body), "INVALID_LOGIN_CREDENTIALS");
    }

    #[test]
    fn test_credential_error_code_prefix_match() {
        // Firebase sometimes suffixes codes, e.g. "USER_DISABLED : reason"
        let code = "INVALID_PASSWORD : The password is invalid";
        assert!(CREDENTIAL_ERROR_CODES.iter().any(|c| code.starts_with(c)));
    }
}
