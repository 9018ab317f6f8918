//! Product listing and detail handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::Result;
use crate::firebase::types::Product;
use crate::state::AppState;

/// Maximum number of related products on a detail page.
const RELATED_LIMIT: usize = 4;

/// Query parameters for the product listing.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    /// Category slug to filter by.
    pub category: Option<String>,
    /// Free-text search over name, description, and fabric.
    pub q: Option<String>,
    pub featured: Option<bool>,
    #[serde(rename = "new")]
    pub is_new: Option<bool>,
    pub best_seller: Option<bool>,
    pub indian_wear: Option<bool>,
    pub western_wear: Option<bool>,
    pub collections: Option<bool>,
}

#[derive(Serialize)]
pub struct ProductListing {
    pub products: Vec<Product>,
    pub total: usize,
}

#[derive(Serialize)]
pub struct ProductDetail {
    pub product: Product,
    pub related: Vec<Product>,
}

/// Apply listing filters to the full product set.
fn apply_filters(products: Vec<Product>, params: &ListParams) -> Vec<Product> {
    let query = params
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_lowercase);

    products
        .into_iter()
        .filter(|p| {
            params
                .category
                .as_deref()
                .is_none_or(|slug| p.in_category(slug))
        })
        .filter(|p| params.featured.is_none_or(|want| p.featured == want))
        .filter(|p| params.is_new.is_none_or(|want| p.is_new == want))
        .filter(|p| params.best_seller.is_none_or(|want| p.is_best_seller == want))
        .filter(|p| params.indian_wear.is_none_or(|want| p.indian_wear == want))
        .filter(|p| params.western_wear.is_none_or(|want| p.western_wear == want))
        .filter(|p| params.collections.is_none_or(|want| p.collections == want))
        .filter(|p| {
            query.as_deref().is_none_or(|q| {
                p.name.to_lowercase().contains(q)
                    || p.description.to_lowercase().contains(q)
                    || p.fabric
                        .as_deref()
                        .is_some_and(|f| f.to_lowercase().contains(q))
            })
        })
        .collect()
}

/// GET /api/products
#[instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ProductListing>> {
    let products = state.catalog().products().await?;
    let filtered = apply_filters(products, &params);

    Ok(Json(ProductListing {
        total: filtered.len(),
        products: filtered,
    }))
}

/// GET /api/products/{id}
///
/// Related products share the product's category, exclude the product
/// itself, and are capped at four.
#[instrument(skip(state))]
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductDetail>> {
    let catalog = state.catalog();
    let product = catalog.product(&id).await?;

    let related: Vec<Product> = catalog
        .products()
        .await?
        .into_iter()
        .filter(|p| p.id != product.id)
        .filter(|p| {
            hibhana_core::Slug::normalize(&p.category)
                == hibhana_core::Slug::normalize(&product.category)
        })
        .take(RELATED_LIMIT)
        .collect();

    Ok(Json(ProductDetail { product, related }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hibhana_core::{Price, ProductId};
    use rust_decimal::Decimal;

    fn product(id: &str, name: &str, category: &str) -> Product {
        Product {
            id: ProductId::from(id),
            name: name.to_string(),
            price: Price::new(Decimal::from(1000)),
            category: category.to_string(),
            description: String::new(),
            details: Vec::new(),
            images: Vec::new(),
            featured: false,
            is_new: false,
            is_best_seller: false,
            indian_wear: false,
            western_wear: false,
            collections: false,
            collection_type: None,
            rating: None,
            sizes: Vec::new(),
            fabric: None,
        }
    }

    #[test]
    fn test_category_filter_normalizes_slug() {
        let products = vec![
            product("1", "Banarasi Saree", "Indian Wear"),
            product("2", "Denim Jacket", "Western Wear"),
        ];

        let params = ListParams {
            category: Some("indian-wear".to_string()),
            ..Default::default()
        };

        let filtered = apply_filters(products, &params);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Banarasi Saree");
    }

    #[test]
    fn test_text_search_matches_name_case_insensitive() {
        let products = vec![
            product("1", "Banarasi Saree", "Indian Wear"),
            product("2", "Denim Jacket", "Western Wear"),
        ];

        let params = ListParams {
            q: Some("SAREE".to_string()),
            ..Default::default()
        };

        let filtered = apply_filters(products, &params);
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn test_blank_query_is_ignored() {
        let products = vec![product("1", "Banarasi Saree", "Indian Wear")];

        let params = ListParams {
            q: Some("   ".to_string()),
            ..Default::default()
        };

        assert_eq!(apply_filters(products, &params).len(), 1);
    }

    #[test]
    fn test_flag_filter() {
        let mut featured = product("1", "Saree", "Indian Wear");
        featured.featured = true;
        let plain = product("2", "Kurta", "Indian Wear");

        let params = ListParams {
            featured: Some(true),
            ..Default::default()
        };

        let filtered = apply_filters(vec![featured, plain], &params);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id.as_str(), "1");
    }
}
