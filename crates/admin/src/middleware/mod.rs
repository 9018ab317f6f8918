//! HTTP middleware stack for admin.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layer (capture errors)
//! 2. `TraceLayer` (request tracing)
//! 3. Session layer (tower-sessions with `PostgreSQL` store, `SameSite=Strict`)

pub mod auth;
pub mod session;

pub use auth::{RequireAdminAuth, clear_current_admin, set_current_admin};
pub use session::create_session_layer;
