//! Domain types for the Firestore catalog.
//!
//! These types provide a clean, strongly-typed view of the flat, denormalized
//! documents in the `products`, `categories`, `campaigns`, and `heroSlides`
//! collections. No relational integrity exists between them; products
//! reference categories by free-text name matched through slug normalization.

use chrono::NaiveDate;
use serde::Serialize;

use hibhana_core::{CampaignId, CampaignWindow, CategoryId, Price, ProductId, SlideId, Slug};

/// A catalog product.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Firestore document ID.
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    /// Free-text category name; matched against `Category::slug` after
    /// normalization, never by ID.
    pub category: String,
    pub description: String,
    /// Bullet-point details shown on the product page.
    pub details: Vec<String>,
    /// Image URLs (Cloudinary `secure_url`s).
    pub images: Vec<String>,
    pub featured: bool,
    pub is_new: bool,
    pub is_best_seller: bool,
    pub indian_wear: bool,
    pub western_wear: bool,
    /// Whether the product belongs to a named seasonal collection.
    pub collections: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    pub sizes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fabric: Option<String>,
}

impl Product {
    /// First image, used as the card thumbnail.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Whether this product belongs to the category identified by `slug`.
    #[must_use]
    pub fn in_category(&self, slug: &str) -> bool {
        Slug::normalize(&self.category) == Slug::normalize(slug)
    }
}

/// A product category.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Firestore document ID.
    pub id: CategoryId,
    pub title: String,
    /// Derived from the title at write time; the category's public key.
    pub slug: Slug,
    pub description: String,
    pub image: String,
}

/// A time-bounded promotional campaign.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    /// Firestore document ID.
    pub id: CampaignId,
    pub title: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Campaign {
    /// Whether the campaign is active on the given day (inclusive window).
    #[must_use]
    pub fn is_active_on(&self, today: NaiveDate) -> bool {
        CampaignWindow {
            start: self.start_date,
            end: self.end_date,
        }
        .is_active_on(today)
    }
}

/// A homepage hero carousel slide.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSlide {
    /// Firestore document ID.
    pub id: SlideId,
    pub title: String,
    pub subtitle: String,
    pub image: String,
    /// Path into the category tree (e.g., `/collections/sherwanis`).
    /// Selected in the admin UI; not validated against existing routes.
    pub link: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn sample_product(category: &str) -> Product {
        Product {
            id: ProductId::new("p1"),
            name: "Royal Maroon Wedding Sherwani".to_string(),
            price: Price::new(Decimal::from(45000)),
            category: category.to_string(),
            description: String::new(),
            details: vec![],
            images: vec!["https://example.com/a.jpg".to_string()],
            featured: true,
            is_new: false,
            is_best_seller: true,
            indian_wear: true,
            western_wear: false,
            collections: false,
            collection_type: None,
            rating: Some(5.0),
            sizes: vec!["40".to_string()],
            fabric: Some("Premium Silk".to_string()),
        }
    }

    #[test]
    fn test_in_category_normalizes_both_sides() {
        let product = sample_product("Indo Western");
        assert!(product.in_category("indo-western"));
        assert!(product.in_category("INDO   WESTERN"));
        assert!(!product.in_category("sherwanis"));
    }

    #[test]
    fn test_primary_image() {
        let product = sample_product("sherwanis");
        assert_eq!(product.primary_image(), Some("https://example.com/a.jpg"));
    }

    #[test]
    fn test_campaign_active_window() {
        let campaign = Campaign {
            id: CampaignId::new("c1"),
            title: "Wedding Season".to_string(),
            description: String::new(),
            start_date: "2026-08-01".parse().expect("date"),
            end_date: "2026-08-31".parse().expect("date"),
            image: String::new(),
            link: None,
        };
        assert!(campaign.is_active_on("2026-08-01".parse().expect("date")));
        assert!(campaign.is_active_on("2026-08-31".parse().expect("date")));
        assert!(!campaign.is_active_on("2026-09-01".parse().expect("date")));
    }
}
