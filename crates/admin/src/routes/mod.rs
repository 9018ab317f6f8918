//! HTTP route handlers for admin.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                    - Health check
//! GET    /health/ready              - Readiness check (database ping)
//!
//! # Auth
//! POST   /auth/login                - Firebase password sign-in + allow-list
//! POST   /auth/logout               - Clear session
//! GET    /auth/me                   - Current admin
//!
//! # Catalog (all require auth)
//! GET    /api/products              - List products
//! POST   /api/products              - Create product
//! GET    /api/products/{id}         - Get product
//! PUT    /api/products/{id}         - Replace product fields
//! DELETE /api/products/{id}         - Delete product
//!
//! GET    /api/categories            - List categories
//! POST   /api/categories            - Create category
//! PUT    /api/categories/{slug}     - Update category (resolved by slug)
//! DELETE /api/categories/{slug}     - Delete category (resolved by slug)
//!
//! GET    /api/campaigns             - List campaigns
//! POST   /api/campaigns             - Create campaign
//! PUT    /api/campaigns/{id}        - Update campaign
//! DELETE /api/campaigns/{id}        - Delete campaign
//!
//! GET    /api/hero-slides           - List hero slides
//! POST   /api/hero-slides           - Create hero slide
//! PUT    /api/hero-slides/{id}      - Update hero slide
//! DELETE /api/hero-slides/{id}      - Delete hero slide
//!
//! # Media (requires auth)
//! POST   /api/images/upload         - Multipart image upload to Cloudinary
//! POST   /api/images/delete         - Delete a Cloudinary asset
//! ```

pub mod auth;
pub mod campaigns;
pub mod categories;
pub mod hero_slides;
pub mod images;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/me", get(auth::me))
}

/// Create the catalog and media API router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/products", get(products::list).post(products::create))
        .route(
            "/api/products/{id}",
            get(products::detail)
                .put(products::update)
                .delete(products::delete),
        )
        .route(
            "/api/categories",
            get(categories::list).post(categories::create),
        )
        .route(
            "/api/categories/{slug}",
            axum::routing::put(categories::update).delete(categories::delete),
        )
        .route(
            "/api/campaigns",
            get(campaigns::list).post(campaigns::create),
        )
        .route(
            "/api/campaigns/{id}",
            axum::routing::put(campaigns::update).delete(campaigns::delete),
        )
        .route(
            "/api/hero-slides",
            get(hero_slides::list).post(hero_slides::create),
        )
        .route(
            "/api/hero-slides/{id}",
            axum::routing::put(hero_slides::update).delete(hero_slides::delete),
        )
        .route("/api/images/upload", post(images::upload))
        .route("/api/images/delete", post(images::delete))
}

/// Create the complete router.
pub fn routes() -> Router<AppState> {
    auth_routes().merge(api_routes())
}
