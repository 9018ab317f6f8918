//! Typed write payloads for the catalog collections.
//!
//! Each input struct validates its required fields and encodes itself into
//! the Firestore wire format. Field names stay camelCase on the wire to match
//! the documents the storefront reads.

use hibhana_core::firestore::{
    FieldMap, boolean_value, decimal_value, double_value, null_value, string_array_value,
    string_value,
};
use hibhana_core::{CampaignWindow, Slug, SlugError};
use rust_decimal::Decimal;
use serde::Deserialize;

/// A validation failure listing the offending fields.
#[derive(Debug, PartialEq, Eq)]
pub struct MissingFields(pub Vec<&'static str>);

impl std::fmt::Display for MissingFields {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Missing fields: {}", self.0.join(", "))
    }
}

fn blank(s: &str) -> bool {
    s.trim().is_empty()
}

// =============================================================================
// Products
// =============================================================================

/// Write payload for a product document.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProductInput {
    pub name: String,
    pub price: Decimal,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub details: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_best_seller: bool,
    #[serde(default)]
    pub indian_wear: bool,
    #[serde(default)]
    pub western_wear: bool,
    #[serde(default)]
    pub collections: bool,
    #[serde(default)]
    pub collection_type: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub fabric: Option<String>,
}

impl ProductInput {
    /// Validate required fields.
    ///
    /// # Errors
    ///
    /// Returns the list of missing fields.
    pub fn validate(&self) -> Result<(), MissingFields> {
        let mut missing = Vec::new();
        if blank(&self.name) {
            missing.push("name");
        }
        if !self.price.is_sign_positive() || self.price.is_zero() {
            missing.push("price");
        }
        if blank(&self.category) {
            missing.push("category");
        }
        if blank(&self.description) {
            missing.push("description");
        }
        if self.images.iter().all(|i| blank(i)) {
            missing.push("images");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(MissingFields(missing))
        }
    }

    /// Encode as Firestore fields.
    #[must_use]
    pub fn to_fields(&self) -> FieldMap {
        let mut fields = FieldMap::new();
        fields.insert("name".into(), string_value(self.name.trim()));
        fields.insert("price".into(), decimal_value(self.price));
        fields.insert("category".into(), string_value(self.category.trim()));
        fields.insert("description".into(), string_value(self.description.trim()));
        fields.insert("details".into(), string_array_value(&self.details));
        fields.insert("images".into(), string_array_value(&self.images));
        fields.insert("featured".into(), boolean_value(self.featured));
        fields.insert("isNew".into(), boolean_value(self.is_new));
        fields.insert("isBestSeller".into(), boolean_value(self.is_best_seller));
        fields.insert("indianWear".into(), boolean_value(self.indian_wear));
        fields.insert("westernWear".into(), boolean_value(self.western_wear));
        fields.insert("collections".into(), boolean_value(self.collections));
        // Absent optionals write explicit nulls so an update clears the
        // stored value instead of keeping whatever was there.
        fields.insert(
            "collectionType".into(),
            self.collection_type
                .as_ref()
                .map_or_else(null_value, |c| string_value(c.clone())),
        );
        fields.insert(
            "rating".into(),
            self.rating.map_or_else(null_value, double_value),
        );
        fields.insert("sizes".into(), string_array_value(&self.sizes));
        fields.insert(
            "fabric".into(),
            self.fabric
                .as_ref()
                .map_or_else(null_value, |f| string_value(f.clone())),
        );
        fields
    }
}

// =============================================================================
// Categories
// =============================================================================

/// Write payload for a category document. The slug is always re-derived from
/// the title, never supplied by the client.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CategoryInput {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub image: String,
}

impl CategoryInput {
    /// Validate required fields.
    ///
    /// # Errors
    ///
    /// Returns the list of missing fields.
    pub fn validate(&self) -> Result<(), MissingFields> {
        let mut missing = Vec::new();
        if blank(&self.title) {
            missing.push("title");
        }
        if blank(&self.image) {
            missing.push("image");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(MissingFields(missing))
        }
    }

    /// Derive the slug from the title.
    ///
    /// # Errors
    ///
    /// Returns `SlugError::Empty` for whitespace-only titles; `validate`
    /// catches those first.
    pub fn slug(&self) -> Result<Slug, SlugError> {
        Slug::from_title(&self.title)
    }

    /// Encode as Firestore fields, including the derived slug.
    ///
    /// # Errors
    ///
    /// Returns `SlugError::Empty` if the title produces no slug.
    pub fn to_fields(&self) -> Result<FieldMap, SlugError> {
        let slug = self.slug()?;
        let mut fields = FieldMap::new();
        fields.insert("title".into(), string_value(self.title.trim()));
        fields.insert("slug".into(), string_value(slug.as_str()));
        fields.insert("description".into(), string_value(self.description.trim()));
        fields.insert("image".into(), string_value(self.image.trim()));
        Ok(fields)
    }
}

// =============================================================================
// Campaigns
// =============================================================================

/// Write payload for a campaign document. Dates are ISO `YYYY-MM-DD`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CampaignInput {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub image: String,
    #[serde(default)]
    pub link: Option<String>,
}

/// Campaign validation failure.
#[derive(Debug, PartialEq, Eq)]
pub enum CampaignInputError {
    Missing(MissingFields),
    /// Dates failed to parse or the window ends before it starts.
    InvalidWindow,
}

impl std::fmt::Display for CampaignInputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing(missing) => missing.fmt(f),
            Self::InvalidWindow => {
                f.write_str("Invalid campaign dates: expected YYYY-MM-DD with endDate >= startDate")
            }
        }
    }
}

impl CampaignInput {
    /// Validate required fields and the date window.
    ///
    /// # Errors
    ///
    /// Returns `CampaignInputError` describing what is wrong.
    pub fn validate(&self) -> Result<CampaignWindow, CampaignInputError> {
        let mut missing = Vec::new();
        if blank(&self.title) {
            missing.push("title");
        }
        if blank(&self.start_date) {
            missing.push("startDate");
        }
        if blank(&self.end_date) {
            missing.push("endDate");
        }
        if blank(&self.image) {
            missing.push("image");
        }
        if !missing.is_empty() {
            return Err(CampaignInputError::Missing(MissingFields(missing)));
        }

        let start = self
            .start_date
            .parse()
            .map_err(|_| CampaignInputError::InvalidWindow)?;
        let end = self
            .end_date
            .parse()
            .map_err(|_| CampaignInputError::InvalidWindow)?;

        CampaignWindow::new(start, end).ok_or(CampaignInputError::InvalidWindow)
    }

    /// Encode as Firestore fields.
    #[must_use]
    pub fn to_fields(&self) -> FieldMap {
        let mut fields = FieldMap::new();
        fields.insert("title".into(), string_value(self.title.trim()));
        fields.insert("description".into(), string_value(self.description.trim()));
        fields.insert("startDate".into(), string_value(self.start_date.trim()));
        fields.insert("endDate".into(), string_value(self.end_date.trim()));
        fields.insert("image".into(), string_value(self.image.trim()));
        fields.insert(
            "link".into(),
            self.link
                .as_ref()
                .map_or_else(null_value, |link| string_value(link.trim())),
        );
        fields
    }
}

// =============================================================================
// Hero Slides
// =============================================================================

/// Write payload for a hero slide document. All four fields are required.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HeroSlideInput {
    pub title: String,
    pub subtitle: String,
    pub image: String,
    pub link: String,
}

impl HeroSlideInput {
    /// Validate required fields.
    ///
    /// # Errors
    ///
    /// Returns the list of missing fields.
    pub fn validate(&self) -> Result<(), MissingFields> {
        let mut missing = Vec::new();
        if blank(&self.title) {
            missing.push("title");
        }
        if blank(&self.subtitle) {
            missing.push("subtitle");
        }
        if blank(&self.image) {
            missing.push("image");
        }
        if blank(&self.link) {
            missing.push("link");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(MissingFields(missing))
        }
    }

    /// Encode as Firestore fields.
    #[must_use]
    pub fn to_fields(&self) -> FieldMap {
        let mut fields = FieldMap::new();
        fields.insert("title".into(), string_value(self.title.trim()));
        fields.insert("subtitle".into(), string_value(self.subtitle.trim()));
        fields.insert("image".into(), string_value(self.image.trim()));
        fields.insert("link".into(), string_value(self.link.trim()));
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product_input() -> ProductInput {
        serde_json::from_value(json!({
            "name": "Royal Maroon Wedding Sherwani",
            "price": "45000",
            "category": "Indian Wear",
            "description": "Hand-embroidered sherwani",
            "images": ["https://res.cloudinary.com/hibhana/sherwani.jpg"],
            "sizes": ["40", "42"],
        }))
        .expect("valid input")
    }

    #[test]
    fn test_product_validate_ok() {
        assert!(product_input().validate().is_ok());
    }

    #[test]
    fn test_product_validate_collects_all_missing() {
        let input: ProductInput = serde_json::from_value(json!({
            "name": "  ",
            "price": "0",
            "category": "",
            "description": "",
        }))
        .expect("deserializes");

        let err = input.validate().expect_err("missing fields");
        assert_eq!(
            err.0,
            vec!["name", "price", "category", "description", "images"]
        );
        assert_eq!(
            err.to_string(),
            "Missing fields: name, price, category, description, images"
        );
    }

    #[test]
    fn test_product_to_fields_camel_case() {
        let fields = product_input().to_fields();
        assert!(fields.contains_key("isNew"));
        assert!(fields.contains_key("isBestSeller"));
        assert!(fields.contains_key("indianWear"));
        assert_eq!(
            fields["name"],
            json!({ "stringValue": "Royal Maroon Wedding Sherwani" })
        );
        assert_eq!(fields["price"], json!({ "doubleValue": 45000.0 }));
    }

    // An update sends an updateMask entry per encoded field, so optionals
    // left out of the payload must encode as nulls to clear the stored value.
    #[test]
    fn test_product_absent_optionals_encode_as_null() {
        let fields = product_input().to_fields();
        assert_eq!(fields["collectionType"], json!({ "nullValue": null }));
        assert_eq!(fields["rating"], json!({ "nullValue": null }));
        assert_eq!(fields["fabric"], json!({ "nullValue": null }));
    }

    #[test]
    fn test_campaign_absent_link_encodes_as_null() {
        let input = CampaignInput {
            title: "Wedding Edit".to_string(),
            description: String::new(),
            start_date: "2026-09-01".to_string(),
            end_date: "2026-09-10".to_string(),
            image: "img.jpg".to_string(),
            link: None,
        };

        assert_eq!(input.to_fields()["link"], json!({ "nullValue": null }));
    }

    #[test]
    fn test_category_slug_derived_from_title() {
        let input = CategoryInput {
            title: "  Indo Western  ".to_string(),
            description: String::new(),
            image: "img.jpg".to_string(),
        };

        let fields = input.to_fields().expect("valid title");
        assert_eq!(fields["slug"], json!({ "stringValue": "indo-western" }));
    }

    #[test]
    fn test_campaign_rejects_inverted_window() {
        let input = CampaignInput {
            title: "Wedding Edit".to_string(),
            description: String::new(),
            start_date: "2026-09-10".to_string(),
            end_date: "2026-09-01".to_string(),
            image: "img.jpg".to_string(),
            link: None,
        };

        assert_eq!(
            input.validate().expect_err("inverted"),
            CampaignInputError::InvalidWindow
        );
    }

    #[test]
    fn test_campaign_rejects_bad_date_format() {
        let input = CampaignInput {
            title: "Wedding Edit".to_string(),
            description: String::new(),
            start_date: "01/09/2026".to_string(),
            end_date: "2026-09-10".to_string(),
            image: "img.jpg".to_string(),
            link: None,
        };

        assert_eq!(
            input.validate().expect_err("bad format"),
            CampaignInputError::InvalidWindow
        );
    }

    #[test]
    fn test_hero_slide_requires_all_fields() {
        let input = HeroSlideInput {
            title: "Festive 2026".to_string(),
            subtitle: String::new(),
            image: "img.jpg".to_string(),
            link: String::new(),
        };

        let err = input.validate().expect_err("missing");
        assert_eq!(err.0, vec!["subtitle", "link"]);
    }
}
