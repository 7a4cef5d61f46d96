use serde::{Deserialize, Serialize};
use url::Url;

use super::category::FoodCategory;

/// Which external product database produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductSource {
    /// Global open product database.
    OpenFoodFacts,
    /// Korean food-safety barcode registry.
    FoodSafetyKorea,
}

impl std::fmt::Display for ProductSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductSource::OpenFoodFacts => write!(f, "open_food_facts"),
            ProductSource::FoodSafetyKorea => write!(f, "food_safety_korea"),
        }
    }
}

/// A barcode resolved to product metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductMatch {
    pub name: String,
    pub category: FoodCategory,
    pub brand: Option<String>,
    pub image_url: Option<Url>,
    pub source: ProductSource,
}
