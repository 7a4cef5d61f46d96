use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::image::model::{BoundingBox, ImageData};
use crate::domain::image::use_cases::crop::{CropImageParams, CropImageUseCase};
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::use_cases::analyze_image::{
    AnalyzeFoodImageParams, AnalyzeFoodImageUseCase,
};
use crate::domain::product::use_cases::identify::{
    IdentifyFoodParams, IdentifyFoodUseCase, ItemSuggestion, SuggestionSource,
};
use crate::domain::product::use_cases::resolve::{ResolveProductParams, ResolveProductUseCase};

/// Barcode first, photo analysis second, then a crop of the photo.
pub struct IdentifyFoodUseCaseImpl {
    pub resolver: Arc<dyn ResolveProductUseCase>,
    pub analyzer: Arc<dyn AnalyzeFoodImageUseCase>,
    pub cropper: Arc<dyn CropImageUseCase>,
    pub logger: Arc<dyn Logger>,
}

impl IdentifyFoodUseCaseImpl {
    /// A failed crop keeps the photo as submitted.
    async fn refine_photo(&self, image: ImageData, bounding_box: Option<BoundingBox>) -> ImageData {
        match self
            .cropper
            .execute(CropImageParams {
                image: image.clone(),
                bounding_box,
            })
            .await
        {
            Ok(cropped) => cropped,
            Err(e) => {
                self.logger
                    .warn(&format!("Keeping original photo, crop failed: {}", e));
                image
            }
        }
    }
}

#[async_trait]
impl IdentifyFoodUseCase for IdentifyFoodUseCaseImpl {
    async fn execute(
        &self,
        params: IdentifyFoodParams,
    ) -> Result<Option<ItemSuggestion>, ProductError> {
        let barcode = params
            .barcode
            .map(|b| b.trim().to_string())
            .filter(|b| !b.is_empty());
        let image = params.image.filter(|i| !i.is_empty());

        if barcode.is_none() && image.is_none() {
            return Err(ProductError::NothingToIdentify);
        }

        if let Some(barcode) = barcode {
            self.logger
                .info(&format!("Identifying food by barcode: {}", barcode));

            if let Some(product) = self.resolver.execute(ResolveProductParams { barcode }).await? {
                let photo = match image {
                    Some(image) => Some(self.refine_photo(image, None).await),
                    None => None,
                };
                return Ok(Some(ItemSuggestion {
                    name: product.name,
                    category: product.category,
                    brand: product.brand,
                    image_url: product.image_url,
                    expiry_date: None,
                    source: SuggestionSource::Barcode(product.source),
                    photo,
                }));
            }
        }

        let Some(image) = image else {
            self.logger.info("Barcode not registered and no photo to analyze");
            return Ok(None);
        };

        self.logger.info("Identifying food by photo");
        let analysis = self
            .analyzer
            .execute(AnalyzeFoodImageParams {
                image: image.clone(),
            })
            .await?;
        let photo = self.refine_photo(image, analysis.bounding_box).await;

        Ok(Some(ItemSuggestion {
            name: analysis.name,
            category: analysis.category,
            brand: None,
            image_url: None,
            expiry_date: Some(analysis.expiry_date),
            source: SuggestionSource::Vision,
            photo: Some(photo),
        }))
    }
}
