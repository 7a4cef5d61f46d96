use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::product::model::{ProductMatch, ProductSource};
use business::domain::product::use_cases::analyze_image::FoodImageSuggestion;
use business::domain::product::use_cases::identify::{ItemSuggestion, SuggestionSource};

use crate::api::shared::dto::{BoundingBoxDto, FoodCategoryDto};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Enum)]
pub enum SuggestionSourceDto {
    #[oai(rename = "open_food_facts")]
    OpenFoodFacts,
    #[oai(rename = "food_safety_korea")]
    FoodSafetyKorea,
    #[oai(rename = "vision")]
    Vision,
}

impl From<ProductSource> for SuggestionSourceDto {
    fn from(source: ProductSource) -> Self {
        match source {
            ProductSource::OpenFoodFacts => SuggestionSourceDto::OpenFoodFacts,
            ProductSource::FoodSafetyKorea => SuggestionSourceDto::FoodSafetyKorea,
        }
    }
}

impl From<SuggestionSource> for SuggestionSourceDto {
    fn from(source: SuggestionSource) -> Self {
        match source {
            SuggestionSource::Barcode(source) => source.into(),
            SuggestionSource::Vision => SuggestionSourceDto::Vision,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ResolveProductRequest {
    /// Scanned barcode (EAN-13, UPC, ...)
    pub barcode: String,
}

/// Product found in one of the barcode databases.
#[derive(Debug, Clone, Object)]
pub struct ProductMatchResponse {
    pub name: String,
    pub category: FoodCategoryDto,
    #[oai(skip_serializing_if_is_none)]
    pub brand: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    pub source: SuggestionSourceDto,
}

impl From<ProductMatch> for ProductMatchResponse {
    fn from(product: ProductMatch) -> Self {
        Self {
            name: product.name,
            category: product.category.into(),
            brand: product.brand,
            image_url: product.image_url.map(|u| u.to_string()),
            source: product.source.into(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct AnalyzeImageRequest {
    /// Base64 image, with or without a `data:` URL prefix
    pub image_base64: String,
}

#[derive(Debug, Clone, Object)]
pub struct FoodImageSuggestionResponse {
    pub name: String,
    pub category: FoodCategoryDto,
    pub shelf_life_days: i64,
    /// Suggested expiry day, `YYYY-MM-DD`
    pub expiry_date: String,
    #[oai(skip_serializing_if_is_none)]
    pub bounding_box: Option<BoundingBoxDto>,
}

impl From<FoodImageSuggestion> for FoodImageSuggestionResponse {
    fn from(suggestion: FoodImageSuggestion) -> Self {
        Self {
            name: suggestion.name,
            category: suggestion.category.into(),
            shelf_life_days: suggestion.shelf_life_days,
            expiry_date: suggestion.expiry_date,
            bounding_box: suggestion.bounding_box.map(Into::into),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct IdentifyFoodRequest {
    #[oai(skip_serializing_if_is_none)]
    pub barcode: Option<String>,
    /// Base64 photo, used when the barcode is missing or unknown
    #[oai(skip_serializing_if_is_none)]
    pub image_base64: Option<String>,
}

/// Pre-filled values for a new inventory item.
#[derive(Debug, Clone, Object)]
pub struct ItemSuggestionResponse {
    pub name: String,
    pub category: FoodCategoryDto,
    #[oai(skip_serializing_if_is_none)]
    pub brand: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub expiry_date: Option<String>,
    pub source: SuggestionSourceDto,
    /// Cropped photo as a data URL
    #[oai(skip_serializing_if_is_none)]
    pub photo: Option<String>,
}

impl From<ItemSuggestion> for ItemSuggestionResponse {
    fn from(suggestion: ItemSuggestion) -> Self {
        Self {
            name: suggestion.name,
            category: suggestion.category.into(),
            brand: suggestion.brand,
            image_url: suggestion.image_url.map(|u| u.to_string()),
            expiry_date: suggestion.expiry_date,
            source: suggestion.source.into(),
            photo: suggestion.photo.map(|p| p.to_data_url()),
        }
    }
}
