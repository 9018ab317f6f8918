//! Cart and checkout handlers.
//!
//! The cart is stored in the session. Product name and price are always
//! taken from the catalog at add time, never trusted from the client.
//! Checkout does not take payment; it builds a WhatsApp enquiry URL the
//! frontend opens in a new tab.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_sessions::Session;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::{Cart, CartLine, session_keys};
use crate::state::AppState;

// =============================================================================
// Views
// =============================================================================

/// Cart line as returned to the client, with formatted prices.
#[derive(Serialize)]
pub struct CartLineView {
    pub id: Uuid,
    pub product_id: String,
    pub name: String,
    pub image: Option<String>,
    pub size: Option<String>,
    pub quantity: u32,
    pub price: String,
    pub line_total: String,
}

#[derive(Serialize)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub item_count: u32,
    pub subtotal: String,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            lines: cart.lines.iter().map(CartLineView::from).collect(),
            item_count: cart.item_count(),
            subtotal: cart.subtotal().display(),
        }
    }
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.id,
            product_id: line.product_id.as_str().to_string(),
            name: line.name.clone(),
            image: line.image.clone(),
            size: line.size.clone(),
            quantity: line.quantity,
            price: line.price.display(),
            line_total: line.line_total().display(),
        }
    }
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Load the cart from the session, defaulting to empty.
async fn load_cart(session: &Session) -> Result<Cart> {
    Ok(session
        .get::<Cart>(session_keys::CART)
        .await?
        .unwrap_or_default())
}

/// Persist the cart back to the session.
async fn save_cart(session: &Session, cart: &Cart) -> Result<()> {
    session.insert(session_keys::CART, cart).await?;
    Ok(())
}

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/cart
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<Json<CartView>> {
    let cart = load_cart(&session).await?;
    Ok(Json(CartView::from(&cart)))
}

#[derive(Debug, Deserialize)]
pub struct AddPayload {
    pub product_id: String,
    pub size: Option<String>,
    #[serde(default)]
    pub quantity: Option<u32>,
}

/// POST /api/cart/add
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<AddPayload>,
) -> Result<(StatusCode, Json<CartView>)> {
    // Resolve the product so name, price, and image come from the catalog.
    let product = state.catalog().product(&payload.product_id).await?;

    if let Some(size) = payload.size.as_deref()
        && !product.sizes.is_empty()
        && !product.sizes.iter().any(|s| s == size)
    {
        return Err(AppError::BadRequest(format!(
            "Size {size} is not available for this product"
        )));
    }

    let mut cart = load_cart(&session).await?;
    cart.add(
        product.id.clone(),
        product.name.clone(),
        product.price,
        product.primary_image().map(ToOwned::to_owned),
        payload.size,
        payload.quantity.unwrap_or(1),
    );
    save_cart(&session, &cart).await?;

    Ok((StatusCode::CREATED, Json(CartView::from(&cart))))
}

#[derive(Debug, Deserialize)]
pub struct UpdatePayload {
    pub line_id: Uuid,
    pub quantity: u32,
}

/// POST /api/cart/update
///
/// A quantity of zero removes the line.
#[instrument(skip(session))]
pub async fn update(
    session: Session,
    Json(payload): Json<UpdatePayload>,
) -> Result<Json<CartView>> {
    let mut cart = load_cart(&session).await?;

    if !cart.update_quantity(payload.line_id, payload.quantity) {
        return Err(AppError::NotFound(format!("cart line {}", payload.line_id)));
    }

    save_cart(&session, &cart).await?;
    Ok(Json(CartView::from(&cart)))
}

#[derive(Debug, Deserialize)]
pub struct RemovePayload {
    pub line_id: Uuid,
}

/// POST /api/cart/remove
#[instrument(skip(session))]
pub async fn remove(
    session: Session,
    Json(payload): Json<RemovePayload>,
) -> Result<Json<CartView>> {
    let mut cart = load_cart(&session).await?;

    if !cart.remove(payload.line_id) {
        return Err(AppError::NotFound(format!("cart line {}", payload.line_id)));
    }

    save_cart(&session, &cart).await?;
    Ok(Json(CartView::from(&cart)))
}

/// GET /api/cart/count
#[instrument(skip(session))]
pub async fn count(session: Session) -> Result<Json<serde_json::Value>> {
    let cart = load_cart(&session).await?;
    Ok(Json(json!({ "count": cart.item_count() })))
}

#[derive(Serialize)]
pub struct CheckoutResponse {
    pub whatsapp_url: String,
    pub item_count: u32,
    pub subtotal: String,
}

/// POST /api/checkout
///
/// Builds a `wa.me` link carrying the enquiry text for the current cart and
/// clears the cart. Rejects empty carts.
#[instrument(skip(state, session))]
pub async fn checkout(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<CheckoutResponse>> {
    let cart = load_cart(&session).await?;

    if cart.is_empty() {
        return Err(AppError::BadRequest("Cart is empty".to_string()));
    }

    let number = state
        .config()
        .whatsapp_number
        .as_deref()
        .ok_or_else(|| AppError::Internal("WHATSAPP_NUMBER is not configured".to_string()))?;

    let whatsapp_url = build_enquiry_url(number, &cart)
        .map_err(|e| AppError::Internal(format!("Failed to build WhatsApp URL: {e}")))?;

    let response = CheckoutResponse {
        whatsapp_url,
        item_count: cart.item_count(),
        subtotal: cart.subtotal().display(),
    };

    session.remove::<Cart>(session_keys::CART).await?;

    Ok(Json(response))
}

/// Render the enquiry message and wrap it in a `wa.me` URL.
fn build_enquiry_url(
    whatsapp_number: &str,
    cart: &Cart,
) -> std::result::Result<String, url::ParseError> {
    let mut message = String::from("Hello Hibhana! I would like to order:\n");

    for line in &cart.lines {
        message.push_str(&format!(
            "\n- {} x{}{} ({})",
            line.name,
            line.quantity,
            line.size
                .as_deref()
                .map(|s| format!(", size {s}"))
                .unwrap_or_default(),
            line.line_total().display(),
        ));
    }

    message.push_str(&format!("\n\nTotal: {}", cart.subtotal().display()));

    let url = url::Url::parse_with_params(
        &format!("https://wa.me/{whatsapp_number}"),
        &[("text", message.as_str())],
    )?;

    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hibhana_core::{Price, ProductId};

    fn sample_cart() -> Cart {
        let mut cart = Cart::default();
        cart.add(
            ProductId::from("p1"),
            "Banarasi Saree".to_string(),
            Price::from_rupees(45000),
            None,
            Some("M".to_string()),
            2,
        );
        cart
    }

    #[test]
    fn test_cart_view_formats_prices() {
        let cart = sample_cart();
        let view = CartView::from(&cart);

        assert_eq!(view.item_count, 2);
        assert_eq!(view.subtotal, "₹90000");
        assert_eq!(view.lines[0].price, "₹45000");
        assert_eq!(view.lines[0].line_total, "₹90000");
    }

    #[test]
    fn test_enquiry_url_contains_number_and_items() {
        let cart = sample_cart();
        let url = build_enquiry_url("919876543210", &cart).expect("url builds");

        assert!(url.starts_with("https://wa.me/919876543210?text="));
        assert!(url.contains("Banarasi"));
        // The raw newline must be percent-encoded
        assert!(!url.contains('\n'));
    }
}
