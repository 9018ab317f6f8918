//! Firestore REST catalog client implementation.
//!
//! Fetches whole collections through the documents endpoint and caches them
//! with `moka` (5-minute TTL). There is no server-side filtering: every
//! storefront view is an in-memory `filter` over the cached listing, the same
//! shape the original client had.

mod cache;
pub mod conversions;

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use secrecy::ExposeSecret;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::config::FirebaseConfig;
use crate::firebase::FirebaseError;
use crate::firebase::types::{Campaign, Category, HeroSlide, Product};

use cache::CacheValue;
use conversions::{convert_campaign, convert_category, convert_hero_slide, convert_product};

/// Upper bound on documents fetched per collection. The boutique catalog is
/// a few dozen documents; pagination is deliberately not implemented.
const LIST_PAGE_SIZE: u32 = 300;

/// Cache TTL for collection listings.
const CACHE_TTL: Duration = Duration::from_secs(300);

// =============================================================================
// CatalogClient
// =============================================================================

/// Read-only client for the Firestore catalog collections.
///
/// Provides typed access to products, categories, campaigns, and hero
/// slides. Listings are cached for 5 minutes.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    cache: Cache<String, CacheValue>,
}

impl CatalogClient {
    /// Create a new catalog client.
    #[must_use]
    pub fn new(config: &FirebaseConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(16)
            .time_to_live(CACHE_TTL)
            .build();

        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                base_url: config.firestore_base_url(),
                api_key: config.api_key.expose_secret().to_string(),
                cache,
            }),
        }
    }

    /// Fetch all documents of a collection as raw JSON.
    async fn list_documents(&self, collection: &str) -> Result<Vec<Value>, FirebaseError> {
        let url = format!("{}/{collection}", self.inner.base_url);

        let response = self
            .inner
            .client
            .get(&url)
            .query(&[
                ("key", self.inner.api_key.as_str()),
                ("pageSize", &LIST_PAGE_SIZE.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(FirebaseError::Api {
                status: status.as_u16(),
                message: extract_error_message(&body),
            });
        }

        let parsed: Value = serde_json::from_str(&body)?;

        // An empty collection comes back as `{}` with no `documents` key.
        Ok(parsed
            .get("documents")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default())
    }

    /// Fetch a single document as raw JSON.
    async fn get_document(&self, collection: &str, id: &str) -> Result<Value, FirebaseError> {
        let url = format!("{}/{collection}/{id}", self.inner.base_url);

        let response = self
            .inner
            .client
            .get(&url)
            .query(&[("key", self.inner.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FirebaseError::NotFound(format!("{collection}/{id}")));
        }

        let body = response.text().await?;
        if !status.is_success() {
            return Err(FirebaseError::Api {
                status: status.as_u16(),
                message: extract_error_message(&body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// List a collection, converting each document and skipping any that are
    /// malformed.
    async fn list_converted<T>(
        &self,
        collection: &str,
        convert: fn(&Value) -> Option<T>,
    ) -> Result<Vec<T>, FirebaseError> {
        let documents = self.list_documents(collection).await?;
        let total = documents.len();

        let converted: Vec<T> = documents.iter().filter_map(convert).collect();

        if converted.len() < total {
            warn!(
                collection,
                skipped = total - converted.len(),
                "Skipped malformed documents"
            );
        }

        Ok(converted)
    }

    // =========================================================================
    // Catalog Methods
    // =========================================================================

    /// Get all products.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn products(&self) -> Result<Vec<Product>, FirebaseError> {
        if let Some(CacheValue::Products(products)) = self.inner.cache.get("products").await {
            debug!("Cache hit for products");
            return Ok(products);
        }

        let products = self.list_converted("products", convert_product).await?;

        self.inner
            .cache
            .insert("products".to_string(), CacheValue::Products(products.clone()))
            .await;

        Ok(products)
    }

    /// Get a product by its document ID.
    ///
    /// Served from the cached listing when possible; falls back to a direct
    /// document fetch on cache miss.
    ///
    /// # Errors
    ///
    /// Returns `FirebaseError::NotFound` if the product does not exist, or an
    /// error if the API request fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn product(&self, id: &str) -> Result<Product, FirebaseError> {
        if let Some(CacheValue::Products(products)) = self.inner.cache.get("products").await
            && let Some(product) = products.into_iter().find(|p| p.id.as_str() == id)
        {
            debug!("Cache hit for product");
            return Ok(product);
        }

        let doc = self.get_document("products", id).await?;
        convert_product(&doc).ok_or_else(|| FirebaseError::NotFound(format!("products/{id}")))
    }

    /// Get all categories.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn categories(&self) -> Result<Vec<Category>, FirebaseError> {
        if let Some(CacheValue::Categories(categories)) = self.inner.cache.get("categories").await
        {
            debug!("Cache hit for categories");
            return Ok(categories);
        }

        let categories = self.list_converted("categories", convert_category).await?;

        self.inner
            .cache
            .insert(
                "categories".to_string(),
                CacheValue::Categories(categories.clone()),
            )
            .await;

        Ok(categories)
    }

    /// Get all campaigns (active and inactive; callers filter by window).
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn campaigns(&self) -> Result<Vec<Campaign>, FirebaseError> {
        if let Some(CacheValue::Campaigns(campaigns)) = self.inner.cache.get("campaigns").await {
            debug!("Cache hit for campaigns");
            return Ok(campaigns);
        }

        let campaigns = self.list_converted("campaigns", convert_campaign).await?;

        self.inner
            .cache
            .insert(
                "campaigns".to_string(),
                CacheValue::Campaigns(campaigns.clone()),
            )
            .await;

        Ok(campaigns)
    }

    /// Get all hero slides.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn hero_slides(&self) -> Result<Vec<HeroSlide>, FirebaseError> {
        if let Some(CacheValue::HeroSlides(slides)) = self.inner.cache.get("heroSlides").await {
            debug!("Cache hit for hero slides");
            return Ok(slides);
        }

        let slides = self
            .list_converted("heroSlides", convert_hero_slide)
            .await?;

        self.inner
            .cache
            .insert(
                "heroSlides".to_string(),
                CacheValue::HeroSlides(slides.clone()),
            )
            .await;

        Ok(slides)
    }

    // =========================================================================
    // Cache Management
    // =========================================================================

    /// Invalidate all cached listings (e.g., after admin writes).
    pub async fn invalidate_all(&self) {
        self.inner.cache.invalidate_all();
        self.inner.cache.run_pending_tasks().await;
    }
}

/// Pull the `error.message` out of a Firestore error body, falling back to a
/// truncated raw body.
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")?
                .get("message")?
                .as_str()
                .map(ToOwned::to_owned)
        })
        .unwrap_or_else(|| body.chars().take(200).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_error_message_structured() {
        let body = r#"{"error":{"code":403,"message":"Missing or insufficient permissions.","status":"PERMISSION_DENIED"}}"#;
        assert_eq!(
            extract_error_message(body),
            "Missing or insufficient permissions."
        );
    }

    #[test]
    fn test_extract_error_message_fallback_truncates() {
        let body = "x".repeat(500);
        assert_eq!(extract_error_message(&body).len(), 200);
    }
}
