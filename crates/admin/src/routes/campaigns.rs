//! Campaign CRUD handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{Value, json};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::firebase::AdminDocument;
use crate::firebase::documents::CampaignInput;
use crate::middleware::auth::RequireAdminAuth;
use crate::state::AppState;

const COLLECTION: &str = "campaigns";

/// GET /api/campaigns
#[instrument(skip_all)]
pub async fn list(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> Result<Json<Vec<AdminDocument>>> {
    Ok(Json(state.firestore().list(COLLECTION).await?))
}

/// POST /api/campaigns
#[instrument(skip_all)]
pub async fn create(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Json(input): Json<CampaignInput>,
) -> Result<(StatusCode, Json<AdminDocument>)> {
    input
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let created = state
        .firestore()
        .create(COLLECTION, input.to_fields())
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/campaigns/{id}
#[instrument(skip(state, input))]
pub async fn update(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<CampaignInput>,
) -> Result<Json<AdminDocument>> {
    input
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let updated = state
        .firestore()
        .update(COLLECTION, &id, input.to_fields())
        .await?;
    Ok(Json(updated))
}

/// DELETE /api/campaigns/{id}
#[instrument(skip(state))]
pub async fn delete(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    state.firestore().delete(COLLECTION, &id).await?;
    Ok(Json(json!({ "success": true })))
}
