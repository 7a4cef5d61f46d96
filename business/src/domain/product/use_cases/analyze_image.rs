use async_trait::async_trait;

use crate::domain::image::model::{BoundingBox, ImageData};
use crate::domain::product::category::FoodCategory;
use crate::domain::product::errors::ProductError;

pub struct AnalyzeFoodImageParams {
    pub image: ImageData,
}

/// Suggested item fields derived from a photo.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodImageSuggestion {
    pub name: String,
    pub category: FoodCategory,
    pub shelf_life_days: i64,
    /// Canonical `YYYY-MM-DD`, counted from today in the local zone.
    pub expiry_date: String,
    pub bounding_box: Option<BoundingBox>,
}

#[async_trait]
pub trait AnalyzeFoodImageUseCase: Send + Sync {
    async fn execute(
        &self,
        params: AnalyzeFoodImageParams,
    ) -> Result<FoodImageSuggestion, ProductError>;
}
