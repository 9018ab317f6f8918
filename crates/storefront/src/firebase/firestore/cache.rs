//! Cache types for Firestore catalog responses.

use crate::firebase::types::{Campaign, Category, HeroSlide, Product};

/// Cached value types, one per collection.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Products(Vec<Product>),
    Categories(Vec<Category>),
    Campaigns(Vec<Campaign>),
    HeroSlides(Vec<HeroSlide>),
}
