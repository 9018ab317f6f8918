//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//! GET  /health/ready           - Readiness check (database ping)
//!
//! # Home
//! GET  /api/home               - Home page payload (slides, featured, campaigns)
//!
//! # Catalog
//! GET  /api/products           - Product listing (category/q/flag filters)
//! GET  /api/products/{id}      - Product detail with related products
//! GET  /api/collections        - Category listing
//! GET  /api/collections/{slug} - Category detail with its products
//! GET  /api/campaigns          - Active campaigns
//!
//! # Cart
//! GET  /api/cart               - Cart contents
//! POST /api/cart/add           - Add a product to the cart
//! POST /api/cart/update        - Update a line quantity (0 removes)
//! POST /api/cart/remove        - Remove a line
//! GET  /api/cart/count         - Item count badge
//!
//! # Checkout
//! POST /api/checkout           - Build the WhatsApp enquiry handoff
//! ```

pub mod campaigns;
pub mod cart;
pub mod collections;
pub mod home;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the API router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/home", get(home::home))
        .route("/api/products", get(products::list))
        .route("/api/products/{id}", get(products::detail))
        .route("/api/collections", get(collections::list))
        .route("/api/collections/{slug}", get(collections::detail))
        .route("/api/campaigns", get(campaigns::list))
        .route("/api/cart", get(cart::show))
        .route("/api/cart/add", post(cart::add))
        .route("/api/cart/update", post(cart::update))
        .route("/api/cart/remove", post(cart::remove))
        .route("/api/cart/count", get(cart::count))
        .route("/api/checkout", post(cart::checkout))
}
