//! Firestore REST catalog client.
//!
//! # Architecture
//!
//! - Plain REST over `reqwest` - the Firestore document endpoints need no SDK
//! - Firestore is source of truth - NO local sync, direct API calls
//! - Whole-collection fetches, un-paginated (the catalog is boutique-sized)
//! - In-memory caching via `moka` for API responses (5 minute TTL)
//!
//! # Example
//!
//! ```rust,ignore
//! use hibhana_storefront::firebase::CatalogClient;
//!
//! let catalog = CatalogClient::new(&config.firebase);
//!
//! let products = catalog.products().await?;
//! let featured: Vec<_> = products.iter().filter(|p| p.featured).collect();
//! ```

mod firestore;
pub mod types;

pub use firestore::CatalogClient;
pub use firestore::conversions;
pub use types::*;

use thiserror::Error;

/// Errors that can occur when talking to the Firestore REST API.
#[derive(Debug, Error)]
pub enum FirebaseError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Firestore returned a non-success status.
    #[error("Firestore error (HTTP {status}): {message}")]
    Api {
        /// HTTP status code returned by Firestore.
        status: u16,
        /// Error message from the response body.
        message: String,
    },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}
