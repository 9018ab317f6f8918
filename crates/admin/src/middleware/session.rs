//! Session middleware configuration.
//!
//! Sets up `PostgreSQL`-backed sessions using tower-sessions. The admin
//! session cookie is `SameSite=Strict`; the back-office is same-origin only.

use sqlx::PgPool;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::PostgresStore;

use crate::config::AdminConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "hibhana_admin_session";

/// Session expiry time in seconds (24 hours).
const SESSION_EXPIRY_SECONDS: i64 = 24 * 60 * 60;

/// Create the session layer with `PostgreSQL` store.
#[must_use]
pub fn create_session_layer(
    pool: &PgPool,
    config: &AdminConfig,
) -> SessionManagerLayer<PostgresStore> {
    // Note: The sessions table must be created via migration
    let store = PostgresStore::new(pool.clone());

    let is_secure = config.base_url.starts_with("https://");

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(is_secure)
        .with_same_site(tower_sessions::cookie::SameSite::Strict)
        .with_http_only(true)
        .with_path("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    // Admin sessions are deliberately shorter-lived than the storefront's
    // 7-day sessions, and must use a distinct cookie.
    #[test]
    fn test_admin_sessions_expire_after_a_day() {
        assert_eq!(SESSION_EXPIRY_SECONDS, 24 * 60 * 60);
        assert_eq!(SESSION_COOKIE_NAME, "hibhana_admin_session");
    }
}
