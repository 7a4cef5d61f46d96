use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::image::errors::ImageError;
use crate::domain::image::model::ImageData;
use crate::domain::image::services::ImageCropper;
use crate::domain::image::use_cases::crop::{CropImageParams, CropImageUseCase};
use crate::domain::logger::Logger;

pub struct CropImageUseCaseImpl {
    pub cropper: Arc<dyn ImageCropper>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CropImageUseCase for CropImageUseCaseImpl {
    async fn execute(&self, params: CropImageParams) -> Result<ImageData, ImageError> {
        if params.image.is_empty() {
            return Err(ImageError::Empty);
        }

        self.logger.info(&format!(
            "Cropping image ({} bytes, bounding box: {})",
            params.image.as_bytes().len(),
            params
                .bounding_box
                .map(|b| format!("{}x{}+{}+{}", b.width, b.height, b.x, b.y))
                .unwrap_or_else(|| "none".to_string())
        ));

        // Pixel scans are CPU bound; keep them off the async workers.
        let cropper = self.cropper.clone();
        let result = tokio::task::spawn_blocking(move || {
            cropper.crop_to_content(&params.image, params.bounding_box)
        })
        .await
        .map_err(|e| {
            self.logger.error(&format!("Crop task failed: {}", e));
            ImageError::TaskFailed
        })?;

        match &result {
            Ok(cropped) => self.logger.info(&format!(
                "Image cropped to {} bytes",
                cropped.as_bytes().len()
            )),
            Err(e) => self.logger.warn(&format!("Image crop failed: {}", e)),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::image::model::BoundingBox;
    use mockall::mock;

    mock! {
        pub Cropper {}

        impl ImageCropper for Cropper {
            fn crop_to_content(
                &self,
                image: &ImageData,
                bounding_box: Option<BoundingBox>,
            ) -> Result<ImageData, ImageError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_pass_bounding_box_to_cropper() {
        let bbox = BoundingBox::new(1, 2, 3, 4);
        let mut cropper = MockCropper::new();
        cropper
            .expect_crop_to_content()
            .withf(move |_, b| *b == Some(bbox))
            .times(1)
            .returning(|_, _| Ok(ImageData::new(vec![9, 9])));

        let use_case = CropImageUseCaseImpl {
            cropper: Arc::new(cropper),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CropImageParams {
                image: ImageData::new(vec![1, 2, 3]),
                bounding_box: Some(bbox),
            })
            .await;

        assert_eq!(result.unwrap().as_bytes(), &[9, 9]);
    }

    #[tokio::test]
    async fn should_reject_empty_image_without_calling_cropper() {
        let mut cropper = MockCropper::new();
        cropper.expect_crop_to_content().never();

        let use_case = CropImageUseCaseImpl {
            cropper: Arc::new(cropper),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CropImageParams {
                image: ImageData::new(Vec::new()),
                bounding_box: None,
            })
            .await;

        assert!(matches!(result, Err(ImageError::Empty)));
    }

    #[tokio::test]
    async fn should_propagate_decode_errors() {
        let mut cropper = MockCropper::new();
        cropper
            .expect_crop_to_content()
            .returning(|_, _| Err(ImageError::Decode));

        let use_case = CropImageUseCaseImpl {
            cropper: Arc::new(cropper),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CropImageParams {
                image: ImageData::new(vec![0, 1]),
                bounding_box: None,
            })
            .await;

        assert!(matches!(result, Err(ImageError::Decode)));
    }
}
