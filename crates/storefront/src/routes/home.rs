//! Home page payload handler.

use axum::{Json, extract::State};
use chrono::Utc;
use serde::Serialize;
use tracing::instrument;

use crate::error::Result;
use crate::firebase::types::{Campaign, Category, HeroSlide, Product};
use crate::state::AppState;

/// Number of products shown per home page rail.
const RAIL_SIZE: usize = 8;

/// Everything the home page needs in one response.
#[derive(Serialize)]
pub struct HomePayload {
    pub hero_slides: Vec<HeroSlide>,
    pub featured: Vec<Product>,
    pub new_arrivals: Vec<Product>,
    pub best_sellers: Vec<Product>,
    pub categories: Vec<Category>,
    pub active_campaigns: Vec<Campaign>,
}

/// GET /api/home
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> Result<Json<HomePayload>> {
    let catalog = state.catalog();

    let hero_slides = catalog.hero_slides().await?;
    let products = catalog.products().await?;
    let categories = catalog.categories().await?;
    let campaigns = catalog.campaigns().await?;

    let today = Utc::now().date_naive();

    let rail = |predicate: fn(&Product) -> bool| -> Vec<Product> {
        products
            .iter()
            .filter(|p| predicate(p))
            .take(RAIL_SIZE)
            .cloned()
            .collect()
    };

    Ok(Json(HomePayload {
        hero_slides,
        featured: rail(|p| p.featured),
        new_arrivals: rail(|p| p.is_new),
        best_sellers: rail(|p| p.is_best_seller),
        categories,
        active_campaigns: campaigns
            .into_iter()
            .filter(|c| c.is_active_on(today))
            .collect(),
    }))
}
