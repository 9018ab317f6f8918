//! Cloudinary media client.
//!
//! Uploads use the unsigned upload preset, matching how the original admin
//! forms pushed images straight to Cloudinary. Deletes require a signed
//! request: the parameters are signed with SHA-256 over
//! `public_id=...&signature_algorithm=sha256&timestamp=...` plus the API
//! secret.

use std::sync::Arc;

use chrono::Utc;
use reqwest::multipart;
use secrecy::ExposeSecret;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::{info, instrument};

use crate::config::CloudinaryConfig;

/// Errors from the Cloudinary REST API.
#[derive(Debug, Error)]
pub enum CloudinaryError {
    /// The HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Cloudinary returned a non-success status.
    #[error("Cloudinary API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body could not be parsed.
    #[error("Response parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The destroy endpoint reported a result other than "ok".
    #[error("Delete failed: {0}")]
    DeleteRejected(String),
}

/// A successfully uploaded image.
#[derive(Debug, Clone, Deserialize, serde::Serialize)]
pub struct UploadedImage {
    /// HTTPS delivery URL, stored in the catalog documents.
    pub secure_url: String,
    /// Cloudinary public ID, needed to delete the asset later.
    pub public_id: String,
}

#[derive(Debug, Deserialize)]
struct DestroyResponse {
    result: String,
}

/// Client for Cloudinary uploads and deletes.
#[derive(Clone)]
pub struct CloudinaryClient {
    inner: Arc<CloudinaryClientInner>,
}

struct CloudinaryClientInner {
    client: reqwest::Client,
    config: CloudinaryConfig,
}

impl CloudinaryClient {
    /// Create a new Cloudinary client.
    #[must_use]
    pub fn new(client: reqwest::Client, config: CloudinaryConfig) -> Self {
        Self {
            inner: Arc::new(CloudinaryClientInner { client, config }),
        }
    }

    /// Upload an image through the unsigned preset.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub async fn upload(
        &self,
        filename: String,
        bytes: Vec<u8>,
    ) -> Result<UploadedImage, CloudinaryError> {
        let form = multipart::Form::new()
            .part("file", multipart::Part::bytes(bytes).file_name(filename))
            .text(
                "upload_preset",
                self.inner.config.upload_preset.clone(),
            );

        let response = self
            .inner
            .client
            .post(self.inner.config.upload_url())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(CloudinaryError::Api {
                status: status.as_u16(),
                message: extract_error_message(&body),
            });
        }

        let uploaded: UploadedImage = serde_json::from_str(&body)?;
        info!(public_id = %uploaded.public_id, "Image uploaded");
        Ok(uploaded)
    }

    /// Delete an image by public ID.
    ///
    /// # Errors
    ///
    /// Returns `CloudinaryError::DeleteRejected` if Cloudinary reports the
    /// asset as not found, or an API error otherwise.
    #[instrument(skip(self))]
    pub async fn destroy(&self, public_id: &str) -> Result<(), CloudinaryError> {
        let timestamp = Utc::now().timestamp().to_string();
        let signature = sign_destroy(
            public_id,
            &timestamp,
            self.inner.config.api_secret.expose_secret(),
        );

        let form = multipart::Form::new()
            .text("public_id", public_id.to_owned())
            .text("signature_algorithm", "sha256")
            .text("timestamp", timestamp)
            .text("api_key", self.inner.config.api_key.clone())
            .text("signature", signature);

        let response = self
            .inner
            .client
            .post(self.inner.config.destroy_url())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(CloudinaryError::Api {
                status: status.as_u16(),
                message: extract_error_message(&body),
            });
        }

        let destroyed: DestroyResponse = serde_json::from_str(&body)?;
        if destroyed.result != "ok" {
            return Err(CloudinaryError::DeleteRejected(destroyed.result));
        }

        info!(public_id, "Image deleted");
        Ok(())
    }
}

/// Compute the SHA-256 signature for a destroy request.
///
/// Cloudinary signs the alphabetically ordered parameter string (excluding
/// `api_key`, `file`, and `signature` itself) with the API secret appended.
fn sign_destroy(public_id: &str, timestamp: &str, api_secret: &str) -> String {
    let to_sign = format!(
        "public_id={public_id}&signature_algorithm=sha256&timestamp={timestamp}{api_secret}"
    );
    let digest = Sha256::digest(to_sign.as_bytes());
    hex::encode(digest)
}

/// Pull the `error.message` out of a Cloudinary error body, falling back to a
/// truncated raw body.
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")?
                .get("message")?
                .as_str()
                .map(ToOwned::to_owned)
        })
        .unwrap_or_else(|| body.chars().take(200).collect())
}
