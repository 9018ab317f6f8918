//! Database operations for storefront `PostgreSQL`.
//!
//! # Database: `hibhana_storefront`
//!
//! Stores local data only (Firestore is source of truth for the catalog):
//!
//! ## Tables
//!
//! - `sessions` - Tower-sessions storage (carts live inside session data)
//!
//! # Migrations
//!
//! The sessions table is created via:
//! ```bash
//! cargo run -p hibhana-cli -- migrate storefront
//! ```

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
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
