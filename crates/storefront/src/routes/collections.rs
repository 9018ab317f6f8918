//! Category (collection) listing and detail handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::firebase::types::{Category, Product};
use crate::state::AppState;

#[derive(Serialize)]
pub struct CollectionListing {
    pub collections: Vec<Category>,
}

#[derive(Serialize)]
pub struct CollectionDetail {
    pub collection: Category,
    pub products: Vec<Product>,
}

/// GET /api/collections
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<CollectionListing>> {
    let collections = state.catalog().categories().await?;
    Ok(Json(CollectionListing { collections }))
}

/// GET /api/collections/{slug}
///
/// Resolves the category by slug, then gathers every product whose free-text
/// category matches it.
#[instrument(skip(state))]
pub async fn detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<CollectionDetail>> {
    let catalog = state.catalog();

    let collection = catalog
        .categories()
        .await?
        .into_iter()
        .find(|c| c.slug.matches(&slug))
        .ok_or_else(|| AppError::NotFound(format!("collections/{slug}")))?;

    let products: Vec<Product> = catalog
        .products()
        .await?
        .into_iter()
        .filter(|p| p.in_category(collection.slug.as_str()))
        .collect();

    Ok(Json(CollectionDetail {
        collection,
        products,
    }))
}
