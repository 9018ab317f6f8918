//! Campaign listing handler.

use axum::{Json, extract::State};
use chrono::Utc;
use serde::Serialize;
use tracing::instrument;

use crate::error::Result;
use crate::firebase::types::Campaign;
use crate::state::AppState;

#[derive(Serialize)]
pub struct CampaignListing {
    pub campaigns: Vec<Campaign>,
}

/// GET /api/campaigns
///
/// Returns only campaigns whose date window includes today. Windows are
/// inclusive on both ends.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<CampaignListing>> {
    let today = Utc::now().date_naive();

    let campaigns = state
        .catalog()
        .campaigns()
        .await?
        .into_iter()
        .filter(|c| c.is_active_on(today))
        .collect();

    Ok(Json(CampaignListing { campaigns }))
}
