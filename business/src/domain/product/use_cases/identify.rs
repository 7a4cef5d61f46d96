use async_trait::async_trait;
use url::Url;

use crate::domain::image::model::ImageData;
use crate::domain::product::category::FoodCategory;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductSource;

pub struct IdentifyFoodParams {
    pub barcode: Option<String>,
    pub image: Option<ImageData>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SuggestionSource {
    Barcode(ProductSource),
    Vision,
}

impl std::fmt::Display for SuggestionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SuggestionSource::Barcode(source) => write!(f, "{}", source),
            SuggestionSource::Vision => write!(f, "vision"),
        }
    }
}

/// Pre-filled fields for a new inventory item.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemSuggestion {
    pub name: String,
    pub category: FoodCategory,
    pub brand: Option<String>,
    pub image_url: Option<Url>,
    pub expiry_date: Option<String>,
    pub source: SuggestionSource,
    /// The submitted photo, cropped to its subject.
    pub photo: Option<ImageData>,
}

#[async_trait]
pub trait IdentifyFoodUseCase: Send + Sync {
    async fn execute(
        &self,
        params: IdentifyFoodParams,
    ) -> Result<Option<ItemSuggestion>, ProductError>;
}
