//! Integration tests for back-office document inputs.
//!
//! These exercise the JSON surface the admin API accepts (camelCase keys,
//! unknown-field rejection), the validation messages it returns, and the
//! Firestore wire encoding it writes.

use serde_json::json;

use hibhana_admin::firebase::documents::{
    CampaignInput, CampaignInputError, CategoryInput, HeroSlideInput, ProductInput,
};

// =============================================================================
// Product Inputs
// =============================================================================

#[test]
fn test_product_input_accepts_camel_case_payload() {
    let input: ProductInput = serde_json::from_value(json!({
        "name": "Emerald Silk Lehenga",
        "price": 48500,
        "category": "Lehengas",
        "description": "Hand-embroidered emerald lehenga.",
        "images": ["https://res.cloudinary.com/hibhana/image/upload/l1.jpg"],
        "isNew": true,
        "isBestSeller": false,
        "indianWear": true,
        "collectionType": "Festive",
        "sizes": ["S", "M", "L"]
    }))
    .expect("valid payload deserializes");

    assert!(input.validate().is_ok());
    assert!(input.is_new);
    assert!(input.indian_wear);
    assert_eq!(input.collection_type.as_deref(), Some("Festive"));
}

#[test]
fn test_product_input_rejects_unknown_keys() {
    let result = serde_json::from_value::<ProductInput>(json!({
        "name": "Kurta",
        "price": 2400,
        "category": "Kurtas",
        "description": "Cotton kurta",
        "images": ["https://example.com/k.jpg"],
        "stockCount": 12
    }));
    assert!(result.is_err());
}

#[test]
fn test_product_validation_lists_every_missing_field() {
    let input: ProductInput = serde_json::from_value(json!({
        "name": "  ",
        "price": 0,
        "category": "",
        "description": "",
        "images": []
    }))
    .expect("deserializes");

    let err = input.validate().expect_err("invalid input");
    assert_eq!(
        err.to_string(),
        "Missing fields: name, price, category, description, images"
    );
}

#[test]
fn test_product_encoding_uses_firestore_wire_keys() {
    let input: ProductInput = serde_json::from_value(json!({
        "name": " Ivory Sherwani ",
        "price": 32000,
        "category": "Sherwanis",
        "description": "Classic ivory sherwani.",
        "images": ["https://res.cloudinary.com/hibhana/image/upload/s1.jpg"],
        "isBestSeller": true,
        "rating": 4.8
    }))
    .expect("deserializes");

    let fields = input.to_fields();
    assert_eq!(
        fields.get("name"),
        Some(&json!({ "stringValue": "Ivory Sherwani" }))
    );
    assert_eq!(
        fields.get("price"),
        Some(&json!({ "doubleValue": 32000.0 }))
    );
    assert_eq!(
        fields.get("isBestSeller"),
        Some(&json!({ "booleanValue": true }))
    );
    assert_eq!(fields.get("rating"), Some(&json!({ "doubleValue": 4.8 })));
    // Absent optionals write nulls so an update clears the stored value.
    assert_eq!(
        fields.get("collectionType"),
        Some(&json!({ "nullValue": null }))
    );
    assert_eq!(fields.get("fabric"), Some(&json!({ "nullValue": null })));
}

// =============================================================================
// Category Inputs
// =============================================================================

#[test]
fn test_category_slug_is_always_derived_from_title() {
    let input: CategoryInput = serde_json::from_value(json!({
        "title": "  Indo   Western  ",
        "image": "https://res.cloudinary.com/hibhana/image/upload/c.jpg"
    }))
    .expect("deserializes");

    assert!(input.validate().is_ok());
    let slug = input.slug().expect("title yields a slug");
    assert_eq!(slug.as_str(), "indo-western");

    let fields = input.to_fields().expect("encodes");
    assert_eq!(
        fields.get("slug"),
        Some(&json!({ "stringValue": "indo-western" }))
    );
}

#[test]
fn test_category_requires_title_and_image() {
    let input: CategoryInput =
        serde_json::from_value(json!({ "title": "", "image": "" })).expect("deserializes");

    let err = input.validate().expect_err("invalid input");
    assert_eq!(err.to_string(), "Missing fields: title, image");
}

// =============================================================================
// Campaign Inputs
// =============================================================================

#[test]
fn test_campaign_window_must_end_on_or_after_start() {
    let input: CampaignInput = serde_json::from_value(json!({
        "title": "Wedding Season Sale",
        "startDate": "2026-11-15",
        "endDate": "2026-10-01",
        "image": "https://res.cloudinary.com/hibhana/image/upload/w.jpg"
    }))
    .expect("deserializes");

    assert_eq!(
        input.validate().expect_err("inverted window"),
        CampaignInputError::InvalidWindow
    );
}

#[test]
fn test_campaign_single_day_window_is_valid() {
    let input: CampaignInput = serde_json::from_value(json!({
        "title": "Flash Sale",
        "startDate": "2026-10-01",
        "endDate": "2026-10-01",
        "image": "https://res.cloudinary.com/hibhana/image/upload/f.jpg"
    }))
    .expect("deserializes");

    let window = input.validate().expect("single-day window is valid");
    assert!(window.is_active_on("2026-10-01".parse().expect("valid date")));
}

#[test]
fn test_campaign_missing_fields_reported_before_date_parsing() {
    let input: CampaignInput = serde_json::from_value(json!({
        "title": "Teaser",
        "startDate": "",
        "endDate": "garbage",
        "image": ""
    }))
    .expect("deserializes");

    match input.validate().expect_err("invalid input") {
        CampaignInputError::Missing(missing) => {
            assert_eq!(missing.to_string(), "Missing fields: startDate, image");
        }
        CampaignInputError::InvalidWindow => panic!("missing fields should win"),
    }
}

// =============================================================================
// Hero Slide Inputs
// =============================================================================

#[test]
fn test_hero_slide_requires_all_four_fields() {
    let input: HeroSlideInput = serde_json::from_value(json!({
        "title": "New Arrivals",
        "subtitle": "",
        "image": "https://res.cloudinary.com/hibhana/image/upload/h.jpg",
        "link": ""
    }))
    .expect("deserializes");

    let err = input.validate().expect_err("invalid input");
    assert_eq!(err.to_string(), "Missing fields: subtitle, link");
}
