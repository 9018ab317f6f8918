//! Integration tests across the write and read paths.
//!
//! A document encoded by the back-office must decode cleanly through the
//! storefront conversion layer; these tests run both halves back to back the
//! way a publish actually flows through Firestore.

use rust_decimal::Decimal;
use serde_json::{Value, json};

use hibhana_admin::firebase::documents::{CampaignInput, CategoryInput, ProductInput};
use hibhana_storefront::firebase::conversions::{
    convert_campaign, convert_category, convert_product,
};

/// Wrap encoded fields the way a Firestore document resource carries them.
fn as_document(collection: &str, id: &str, fields: serde_json::Map<String, Value>) -> Value {
    json!({
        "name": format!("projects/hibhana/databases/(default)/documents/{collection}/{id}"),
        "fields": fields
    })
}

#[test]
fn test_product_written_by_admin_reads_back_on_storefront() {
    let input: ProductInput = serde_json::from_value(json!({
        "name": "Emerald Silk Lehenga",
        "price": 48500,
        "category": "Lehengas",
        "description": "Hand-embroidered emerald lehenga.",
        "details": ["Zardozi embroidery"],
        "images": ["https://res.cloudinary.com/hibhana/image/upload/l1.jpg"],
        "featured": true,
        "isBestSeller": true,
        "indianWear": true,
        "sizes": ["S", "M"],
        "fabric": "Pure Silk"
    }))
    .expect("deserializes");
    input.validate().expect("valid input");

    let doc = as_document("products", "lehenga-001", input.to_fields());
    let product = convert_product(&doc).expect("round-trips");

    assert_eq!(product.id.as_str(), "lehenga-001");
    assert_eq!(product.name, "Emerald Silk Lehenga");
    assert_eq!(product.price.amount(), Decimal::from(48500));
    assert!(product.in_category("lehengas"));
    assert!(product.featured);
    assert!(product.is_best_seller);
    assert!(product.indian_wear);
    assert_eq!(product.sizes, vec!["S", "M"]);
    assert_eq!(product.fabric.as_deref(), Some("Pure Silk"));
    // Optionals absent from the payload are written as nulls and must read
    // back as absent on the storefront.
    assert!(product.collection_type.is_none());
    assert!(product.rating.is_none());
}

#[test]
fn test_category_written_by_admin_is_addressable_by_slug() {
    let input: CategoryInput = serde_json::from_value(json!({
        "title": "Indo Western",
        "description": "Fusion silhouettes",
        "image": "https://res.cloudinary.com/hibhana/image/upload/c.jpg"
    }))
    .expect("deserializes");
    input.validate().expect("valid input");

    let fields = input.to_fields().expect("encodes");
    let doc = as_document("categories", "cat-7", fields);
    let category = convert_category(&doc).expect("round-trips");

    assert_eq!(category.slug.as_str(), "indo-western");
    assert!(category.slug.matches("indo-western"));
    assert_eq!(category.title, "Indo Western");
}

#[test]
fn test_campaign_written_by_admin_activates_inside_its_window() {
    let input: CampaignInput = serde_json::from_value(json!({
        "title": "Wedding Season Sale",
        "description": "Up to 30% off bridal wear",
        "startDate": "2026-10-01",
        "endDate": "2026-11-15",
        "image": "https://res.cloudinary.com/hibhana/image/upload/w.jpg",
        "link": "/collections/bridal-lehengas"
    }))
    .expect("deserializes");
    let window = input.validate().expect("valid window");

    let doc = as_document("campaigns", "wedding-2026", input.to_fields());
    let campaign = convert_campaign(&doc).expect("round-trips");

    let mid = "2026-10-20".parse().expect("valid date");
    assert!(window.is_active_on(mid));
    assert!(campaign.is_active_on(mid));
    assert_eq!(campaign.link.as_deref(), Some("/collections/bridal-lehengas"));
}
