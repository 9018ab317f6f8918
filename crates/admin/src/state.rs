//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::cloudinary::CloudinaryClient;
use crate::config::AdminConfig;
use crate::firebase::FirestoreClient;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like database connections and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    pool: PgPool,
    http: reqwest::Client,
    firestore: FirestoreClient,
    cloudinary: CloudinaryClient,
}

impl AppState {
    /// Create a new application state.
    ///
    /// A single `reqwest::Client` backs all the outbound integrations so
    /// they share one connection pool.
    #[must_use]
    pub fn new(config: AdminConfig, pool: PgPool) -> Self {
        let http = reqwest::Client::new();
        let firestore = FirestoreClient::new(http.clone(), &config.firebase);
        let cloudinary = CloudinaryClient::new(http.clone(), config.cloudinary.clone());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                http,
                firestore,
                cloudinary,
            }),
        }
    }

    /// Get a reference to the admin configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get a reference to the shared HTTP client.
    #[must_use]
    pub fn http(&self) -> &reqwest::Client {
        &self.inner.http
    }

    /// Get a reference to the Firestore client.
    #[must_use]
    pub fn firestore(&self) -> &FirestoreClient {
        &self.inner.firestore
    }

    /// Get a reference to the Cloudinary client.
    #[must_use]
    pub fn cloudinary(&self) -> &CloudinaryClient {
        &self.inner.cloudinary
    }
}
