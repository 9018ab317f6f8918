//! Database migration commands.
//!
//! Both binaries keep only session state in `PostgreSQL`, so "migrating"
//! means letting the tower-sessions store create its table.
//!
//! # Environment Variables
//!
//! - `STOREFRONT_DATABASE_URL` - `PostgreSQL` connection string for storefront
//! - `ADMIN_DATABASE_URL` - `PostgreSQL` connection string for admin

use secrecy::{ExposeSecret, SecretString};
use sqlx::PgPool;
use thiserror::Error;
use tower_sessions_sqlx_store::PostgresStore;
use tracing::info;

/// Errors from the migration commands.
#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Create the storefront sessions table.
///
/// # Errors
///
/// Returns an error if the environment variable is missing or the database
/// is unreachable.
pub async fn storefront() -> Result<(), MigrationError> {
    migrate_sessions("STOREFRONT_DATABASE_URL", "storefront").await
}

/// Create the admin sessions table.
///
/// # Errors
///
/// Returns an error if the environment variable is missing or the database
/// is unreachable.
pub async fn admin() -> Result<(), MigrationError> {
    migrate_sessions("ADMIN_DATABASE_URL", "admin").await
}

async fn migrate_sessions(env_var: &'static str, label: &str) -> Result<(), MigrationError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var(env_var)
        .map(SecretString::from)
        .map_err(|_| MigrationError::MissingEnvVar(env_var))?;

    info!("Connecting to {label} database...");
    let pool = PgPool::connect(database_url.expose_secret()).await?;

    info!("Creating {label} sessions table...");
    PostgresStore::new(pool).migrate().await?;

    info!("{label} migrations complete");
    Ok(())
}
