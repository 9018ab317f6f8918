//! Database operations for admin `PostgreSQL`.
//!
//! # Database: `hibhana_admin`
//!
//! Stores local data only (Firestore is source of truth for the catalog):
//!
//! ## Tables
//!
//! - `sessions` - Tower-sessions storage
//!
//! # Migrations
//!
//! The sessions table is created via:
//! ```bash
//! cargo run -p hibhana-cli -- migrate admin
//! ```

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
