use async_trait::async_trait;

use crate::domain::image::errors::ImageError;
use crate::domain::image::model::{BoundingBox, ImageData};

pub struct CropImageParams {
    pub image: ImageData,
    pub bounding_box: Option<BoundingBox>,
}

#[async_trait]
pub trait CropImageUseCase: Send + Sync {
    async fn execute(&self, params: CropImageParams) -> Result<ImageData, ImageError>;
}
