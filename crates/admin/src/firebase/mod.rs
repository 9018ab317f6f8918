//! Firestore REST integration for the admin back-office.
//!
//! Unlike the storefront's read-only cached catalog client, this module
//! performs writes: create, merge-patch, and delete against the catalog
//! collections. Requests authenticate with the project web API key; write
//! access is enforced by the Firestore security rules.

mod client;
pub mod documents;

pub use client::{AdminDocument, FirestoreClient, category_with_slug};

use thiserror::Error;

/// Errors from the Firestore REST API.
#[derive(Debug, Error)]
pub enum FirebaseError {
    /// The HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Firestore returned a non-success status.
    #[error("Firestore API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body could not be parsed.
    #[error("Response parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The requested document does not exist.
    #[error("Document not found: {0}")]
    NotFound(String),
}
