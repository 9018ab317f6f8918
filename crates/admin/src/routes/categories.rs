//! Category CRUD handlers.
//!
//! Categories are addressed by slug in the API, not by document ID, because
//! that is how the storefront links to them. Update and delete resolve the
//! slug to a document first.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{Value, json};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::firebase::AdminDocument;
use crate::firebase::documents::CategoryInput;
use crate::middleware::auth::RequireAdminAuth;
use crate::state::AppState;

const COLLECTION: &str = "categories";

/// GET /api/categories
#[instrument(skip_all)]
pub async fn list(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> Result<Json<Vec<AdminDocument>>> {
    Ok(Json(state.firestore().list(COLLECTION).await?))
}

/// POST /api/categories
///
/// Rejects a title whose derived slug is already taken.
#[instrument(skip_all)]
pub async fn create(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Json(input): Json<CategoryInput>,
) -> Result<(StatusCode, Json<AdminDocument>)> {
    input
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let slug = input
        .slug()
        .map_err(|_| AppError::Validation("Missing fields: title".to_string()))?;

    if state
        .firestore()
        .find_category_by_slug(slug.as_str())
        .await
        .is_ok()
    {
        return Err(AppError::BadRequest(format!(
            "A category with slug '{slug}' already exists"
        )));
    }

    let fields = input
        .to_fields()
        .map_err(|_| AppError::Validation("Missing fields: title".to_string()))?;

    let created = state.firestore().create(COLLECTION, fields).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/categories/{slug}
///
/// The slug in the path identifies the category; the payload's title may
/// change it, in which case the stored slug is re-derived.
#[instrument(skip(state, input))]
pub async fn update(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(input): Json<CategoryInput>,
) -> Result<Json<AdminDocument>> {
    input
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let existing = state.firestore().find_category_by_slug(&slug).await?;

    let fields = input
        .to_fields()
        .map_err(|_| AppError::Validation("Missing fields: title".to_string()))?;

    let updated = state
        .firestore()
        .update(COLLECTION, &existing.id, fields)
        .await?;
    Ok(Json(updated))
}

/// DELETE /api/categories/{slug}
#[instrument(skip(state))]
pub async fn delete(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Value>> {
    let existing = state.firestore().find_category_by_slug(&slug).await?;
    state.firestore().delete(COLLECTION, &existing.id).await?;
    Ok(Json(json!({ "success": true })))
}
