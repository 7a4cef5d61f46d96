use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::calendar::normalizer::DateNormalizer;
use crate::domain::image::errors::ImageError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::services::{FoodImageAnalyzerService, ImageAnalysis};
use crate::domain::product::use_cases::analyze_image::{
    AnalyzeFoodImageParams, AnalyzeFoodImageUseCase, FoodImageSuggestion,
};

pub struct AnalyzeFoodImageUseCaseImpl {
    pub analyzer: Arc<dyn FoodImageAnalyzerService>,
    pub normalizer: Arc<DateNormalizer>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AnalyzeFoodImageUseCase for AnalyzeFoodImageUseCaseImpl {
    async fn execute(
        &self,
        params: AnalyzeFoodImageParams,
    ) -> Result<FoodImageSuggestion, ProductError> {
        if params.image.is_empty() {
            return Err(ImageError::Empty.into());
        }

        self.logger.info("Analyzing food image");

        match self.analyzer.analyze(&params.image).await {
            ImageAnalysis::Identified(suggestion) => {
                let shelf_life_days = suggestion.shelf_life_days.max(0);
                let expiry_date = self
                    .normalizer
                    .days_from_today(shelf_life_days)
                    .to_string();

                self.logger.info(&format!(
                    "Food image identified: {} ({}), expires {}",
                    suggestion.name, suggestion.category, expiry_date
                ));

                Ok(FoodImageSuggestion {
                    name: suggestion.name,
                    category: suggestion.category,
                    shelf_life_days,
                    expiry_date,
                    bounding_box: suggestion.bounding_box,
                })
            }
            ImageAnalysis::Failed(reason) => {
                self.logger
                    .warn(&format!("Food image analysis failed: {}", reason));
                Err(ProductError::AnalysisFailed)
            }
            ImageAnalysis::Unavailable => {
                self.logger
                    .warn("Food image analysis skipped: no vision credential configured");
                Err(ProductError::AnalyzerUnavailable)
            }
        }
    }
}
