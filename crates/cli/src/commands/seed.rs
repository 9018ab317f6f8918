//! Seed the Firestore catalog from a YAML file.
//!
//! Reads categories, products, campaigns, and hero slides from a YAML file,
//! validates them with the same payload types the admin API uses, and writes
//! them to Firestore.
//!
//! # Environment Variables
//!
//! - `FIREBASE_PROJECT_ID` - Firebase project ID
//! - `FIREBASE_API_KEY` - Firebase web API key
//!
//! # File Format
//!
//! ```yaml
//! categories:
//!   - title: Indian Wear
//!     description: Sarees, lehengas, and sherwanis
//!     image: https://res.cloudinary.com/hibhana/indian.jpg
//! products:
//!   - name: Royal Maroon Wedding Sherwani
//!     price: 45000
//!     category: Indian Wear
//!     description: Hand-embroidered sherwani
//!     images: [https://res.cloudinary.com/hibhana/sherwani.jpg]
//! ```

use std::path::Path;

use secrecy::SecretString;
use serde::Deserialize;
use tracing::info;

use hibhana_admin::config::FirebaseConfig;
use hibhana_admin::firebase::FirestoreClient;
use hibhana_admin::firebase::documents::{
    CampaignInput, CategoryInput, HeroSlideInput, ProductInput,
};

/// YAML seed file contents. Every section is optional.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedFile {
    #[serde(default)]
    categories: Vec<CategoryInput>,
    #[serde(default)]
    products: Vec<ProductInput>,
    #[serde(default)]
    campaigns: Vec<CampaignInput>,
    #[serde(default)]
    hero_slides: Vec<HeroSlideInput>,
}

/// Seed the catalog from a YAML file.
///
/// # Errors
///
/// Returns an error if environment variables are missing, the file cannot be
/// read, any document fails validation, or a Firestore write fails.
pub async fn catalog(file_path: &str) -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let firebase = FirebaseConfig {
        project_id: std::env::var("FIREBASE_PROJECT_ID")
            .map_err(|_| "FIREBASE_PROJECT_ID not set")?,
        api_key: std::env::var("FIREBASE_API_KEY")
            .map(SecretString::from)
            .map_err(|_| "FIREBASE_API_KEY not set")?,
    };

    let path = Path::new(file_path);
    if !path.exists() {
        return Err(format!("File not found: {file_path}").into());
    }

    info!(path = %file_path, "Loading seed file");

    // Read and validate everything before the first write
    let content = tokio::fs::read_to_string(path).await?;
    let seed: SeedFile = serde_yaml::from_str(&content)?;

    for (index, category) in seed.categories.iter().enumerate() {
        category
            .validate()
            .map_err(|e| format!("categories[{index}]: {e}"))?;
    }
    for (index, product) in seed.products.iter().enumerate() {
        product
            .validate()
            .map_err(|e| format!("products[{index}]: {e}"))?;
    }
    for (index, campaign) in seed.campaigns.iter().enumerate() {
        campaign
            .validate()
            .map_err(|e| format!("campaigns[{index}]: {e}"))?;
    }
    for (index, slide) in seed.hero_slides.iter().enumerate() {
        slide
            .validate()
            .map_err(|e| format!("heroSlides[{index}]: {e}"))?;
    }

    info!(
        categories = seed.categories.len(),
        products = seed.products.len(),
        campaigns = seed.campaigns.len(),
        hero_slides = seed.hero_slides.len(),
        "Seed file validated"
    );

    let firestore = FirestoreClient::new(reqwest::Client::new(), &firebase);

    for category in &seed.categories {
        let created = firestore.create("categories", category.to_fields()?).await?;
        info!(id = %created.id, title = %category.title, "Seeded category");
    }
    for product in &seed.products {
        let created = firestore.create("products", product.to_fields()).await?;
        info!(id = %created.id, name = %product.name, "Seeded product");
    }
    for campaign in &seed.campaigns {
        let created = firestore.create("campaigns", campaign.to_fields()).await?;
        info!(id = %created.id, title = %campaign.title, "Seeded campaign");
    }
    for slide in &seed.hero_slides {
        let created = firestore.create("heroSlides", slide.to_fields()).await?;
        info!(id = %created.id, title = %slide.title, "Seeded hero slide");
    }

    info!("Seeding complete");
    Ok(())
}
