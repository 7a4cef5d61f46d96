use std::env;

use providers::{food_safety_korea, open_food_facts};

/// Endpoints and credentials of the barcode product databases.
///
/// Environment variables:
/// - OPEN_FOOD_FACTS_URL: Open Food Facts base URL (default: "https://world.openfoodfacts.org")
/// - FOOD_SAFETY_KOREA_URL: Food safety registry base URL (default: "http://openapi.foodsafetykorea.go.kr")
/// - FOOD_SAFETY_KOREA_API_KEY: Registry API key (optional; without it the registry is skipped)
pub struct ProviderConfig {
    pub open_food_facts_url: String,
    pub food_safety_korea_url: String,
    pub food_safety_korea_api_key: Option<String>,
}

impl ProviderConfig {
    pub fn from_env() -> Self {
        Self {
            open_food_facts_url: env::var("OPEN_FOOD_FACTS_URL")
                .unwrap_or_else(|_| open_food_facts::DEFAULT_BASE_URL.to_string()),
            food_safety_korea_url: env::var("FOOD_SAFETY_KOREA_URL")
                .unwrap_or_else(|_| food_safety_korea::DEFAULT_BASE_URL.to_string()),
            food_safety_korea_api_key: env::var("FOOD_SAFETY_KOREA_API_KEY").ok(),
        }
    }
}
