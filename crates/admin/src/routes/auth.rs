//! Admin authentication handlers.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::middleware::auth::{RequireAdminAuth, clear_current_admin, set_current_admin};
use crate::services::auth::AdminAuthService;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct AdminView {
    pub uid: String,
    pub email: String,
}

/// POST /auth/login
///
/// Signs in against Firebase Auth and stores the admin in the session. The
/// session ID is rotated on login.
#[instrument(skip(state, session, payload))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<AdminView>> {
    if payload.email.trim().is_empty() || payload.password.is_empty() {
        return Err(AppError::BadRequest(
            "Email and password are required".to_string(),
        ));
    }

    let service = AdminAuthService::new(state.http(), state.config());
    let admin = service
        .sign_in(payload.email.trim(), &payload.password)
        .await?;

    // Rotate the session ID to prevent fixation
    session
        .cycle_id()
        .await
        .map_err(|e| AppError::Internal(format!("Failed to cycle session: {e}")))?;
    set_current_admin(&session, &admin).await?;

    Ok(Json(AdminView {
        uid: admin.uid,
        email: admin.email.into_inner(),
    }))
}

/// POST /auth/logout
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<Json<serde_json::Value>> {
    clear_current_admin(&session).await?;
    Ok(Json(json!({ "success": true })))
}

/// GET /auth/me
#[instrument(skip_all)]
pub async fn me(RequireAdminAuth(admin): RequireAdminAuth) -> Json<AdminView> {
    Json(AdminView {
        uid: admin.uid,
        email: admin.email.into_inner(),
    })
}
