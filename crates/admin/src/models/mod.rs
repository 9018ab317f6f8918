//! Domain models for admin.

use hibhana_core::Email;
use serde::{Deserialize, Serialize};

/// The currently authenticated admin, stored in the session after a
/// successful Firebase sign-in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAdmin {
    /// Firebase Auth local ID (uid).
    pub uid: String,
    pub email: Email,
}

/// Session key constants.
pub mod session_keys {
    /// Session key for the current admin.
    pub const CURRENT_ADMIN: &str = "current_admin";
}
