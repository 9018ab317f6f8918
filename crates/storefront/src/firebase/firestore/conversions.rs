//! Conversions from raw Firestore document JSON to catalog domain types.
//!
//! Documents written by hand or by older admin builds can be missing fields;
//! a document that lacks the fields a type needs converts to `None` and is
//! skipped (with a warning) rather than failing the whole listing.

use serde_json::Value;

use hibhana_core::firestore::{
    document_fields, document_id, field_bool, field_date, field_decimal, field_f64, field_str,
    field_string_array,
};
use hibhana_core::{Price, Slug};

use crate::firebase::types::{Campaign, Category, HeroSlide, Product};

/// Convert a `products` document. Requires `name`; everything else falls back
/// to an empty or absent value the way the original UI tolerated it.
#[must_use]
pub fn convert_product(doc: &Value) -> Option<Product> {
    let fields = document_fields(doc)?;
    let id = document_id(doc.get("name")?.as_str()?).into();
    let name = field_str(fields, "name")?;

    // Older documents stored a single `image` string instead of `images`.
    let mut images = field_string_array(fields, "images");
    if images.is_empty()
        && let Some(single) = field_str(fields, "image")
    {
        images.push(single);
    }

    Some(Product {
        id,
        name,
        price: field_decimal(fields, "price").map(Price::new).unwrap_or_default(),
        category: field_str(fields, "category").unwrap_or_default(),
        description: field_str(fields, "description").unwrap_or_default(),
        details: field_string_array(fields, "details"),
        images,
        featured: field_bool(fields, "featured"),
        is_new: field_bool(fields, "isNew"),
        is_best_seller: field_bool(fields, "isBestSeller"),
        indian_wear: field_bool(fields, "indianWear"),
        western_wear: field_bool(fields, "westernWear"),
        collections: field_bool(fields, "collections"),
        collection_type: field_str(fields, "collectionType"),
        rating: field_f64(fields, "rating"),
        sizes: field_string_array(fields, "sizes"),
        fabric: field_str(fields, "fabric"),
    })
}

/// Convert a `categories` document. Requires `title` and a non-empty slug;
/// the slug is re-derived from the title when the stored one is missing.
#[must_use]
pub fn convert_category(doc: &Value) -> Option<Category> {
    let fields = document_fields(doc)?;
    let id = document_id(doc.get("name")?.as_str()?).into();
    let title = field_str(fields, "title")?;

    let slug = match field_str(fields, "slug") {
        Some(stored) => Slug::from_title(&stored).ok()?,
        None => Slug::from_title(&title).ok()?,
    };

    Some(Category {
        id,
        title,
        slug,
        description: field_str(fields, "description").unwrap_or_default(),
        image: field_str(fields, "image").unwrap_or_default(),
    })
}

/// Convert a `campaigns` document. Requires a title and two well-formed ISO
/// dates; a campaign without a parseable window can never be shown.
#[must_use]
pub fn convert_campaign(doc: &Value) -> Option<Campaign> {
    let fields = document_fields(doc)?;
    let id = document_id(doc.get("name")?.as_str()?).into();

    Some(Campaign {
        id,
        title: field_str(fields, "title")?,
        description: field_str(fields, "description").unwrap_or_default(),
        start_date: field_date(fields, "startDate")?,
        end_date: field_date(fields, "endDate")?,
        image: field_str(fields, "image").unwrap_or_default(),
        link: field_str(fields, "link"),
    })
}

/// Convert a `heroSlides` document. All four fields are required at the admin
/// boundary, so a slide missing any of them is malformed.
#[must_use]
pub fn convert_hero_slide(doc: &Value) -> Option<HeroSlide> {
    let fields = document_fields(doc)?;
    let id = document_id(doc.get("name")?.as_str()?).into();

    Some(HeroSlide {
        id,
        title: field_str(fields, "title")?,
        subtitle: field_str(fields, "subtitle")?,
        image: field_str(fields, "image")?,
        link: field_str(fields, "link")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::json;

    fn product_doc() -> Value {
        json!({
            "name": "projects/p/databases/(default)/documents/products/p1",
            "fields": {
                "name": { "stringValue": "Bridal Red Embroidered Lehenga" },
                "price": { "doubleValue": 75000 },
                "category": { "stringValue": "lehengas" },
                "description": { "stringValue": "Stunning red bridal lehenga." },
                "details": { "arrayValue": { "values": [
                    { "stringValue": "Intricate handwork embroidery" }
                ] } },
                "images": { "arrayValue": { "values": [
                    { "stringValue": "https://example.com/1.jpg" },
                    { "stringValue": "https://example.com/2.jpg" }
                ] } },
                "featured": { "booleanValue": true },
                "isBestSeller": { "booleanValue": true },
                "indianWear": { "booleanValue": true },
                "rating": { "doubleValue": 5 },
                "sizes": { "arrayValue": { "values": [
                    { "stringValue": "S" }, { "stringValue": "M" }
                ] } },
                "fabric": { "stringValue": "Raw Silk" }
            }
        })
    }

    #[test]
    fn test_convert_product_full() {
        let product = convert_product(&product_doc()).expect("converts");
        assert_eq!(product.id.as_str(), "p1");
        assert_eq!(product.name, "Bridal Red Embroidered Lehenga");
        assert_eq!(product.price.amount(), Decimal::from(75000));
        assert_eq!(product.category, "lehengas");
        assert_eq!(product.images.len(), 2);
        assert!(product.featured);
        assert!(product.is_best_seller);
        assert!(!product.is_new);
        assert!(product.indian_wear);
        assert!(!product.western_wear);
        assert_eq!(product.rating, Some(5.0));
        assert_eq!(product.sizes, vec!["S", "M"]);
        assert_eq!(product.fabric.as_deref(), Some("Raw Silk"));
    }

    #[test]
    fn test_convert_product_single_image_fallback() {
        let doc = json!({
            "name": "projects/p/databases/(default)/documents/products/p2",
            "fields": {
                "name": { "stringValue": "Kurta" },
                "price": { "doubleValue": 3000 },
                "image": { "stringValue": "https://example.com/k.jpg" }
            }
        });
        let product = convert_product(&doc).expect("converts");
        assert_eq!(product.images, vec!["https://example.com/k.jpg"]);
    }

    #[test]
    fn test_convert_product_missing_name_skipped() {
        let doc = json!({
            "name": "projects/p/databases/(default)/documents/products/p3",
            "fields": { "price": { "doubleValue": 100 } }
        });
        assert!(convert_product(&doc).is_none());
    }

    #[test]
    fn test_convert_category_rederives_missing_slug() {
        let doc = json!({
            "name": "projects/p/databases/(default)/documents/categories/c1",
            "fields": {
                "title": { "stringValue": "Indo Western" },
                "description": { "stringValue": "Fusion wear" },
                "image": { "stringValue": "https://example.com/c.jpg" }
            }
        });
        let category = convert_category(&doc).expect("converts");
        assert_eq!(category.slug.as_str(), "indo-western");
    }

    #[test]
    fn test_convert_campaign_rejects_bad_dates() {
        let doc = json!({
            "name": "projects/p/databases/(default)/documents/campaigns/c1",
            "fields": {
                "title": { "stringValue": "Wedding Season" },
                "startDate": { "stringValue": "not-a-date" },
                "endDate": { "stringValue": "2026-09-30" }
            }
        });
        assert!(convert_campaign(&doc).is_none());
    }

    #[test]
    fn test_convert_hero_slide_requires_all_fields() {
        let doc = json!({
            "name": "projects/p/databases/(default)/documents/heroSlides/s1",
            "fields": {
                "title": { "stringValue": "Wedding Collection" },
                "subtitle": { "stringValue": "Handcrafted for your big day" },
                "image": { "stringValue": "https://example.com/hero.jpg" },
                "link": { "stringValue": "/collections/sherwanis" }
            }
        });
        let slide = convert_hero_slide(&doc).expect("converts");
        assert_eq!(slide.link, "/collections/sherwanis");

        let missing = json!({
            "name": "projects/p/databases/(default)/documents/heroSlides/s2",
            "fields": { "title": { "stringValue": "No image" } }
        });
        assert!(convert_hero_slide(&missing).is_none());
    }
}
