use poem_openapi::Object;

use business::domain::image::model::ImageData;

use crate::api::shared::dto::BoundingBoxDto;

#[derive(Debug, Clone, Object)]
pub struct CropImageRequest {
    /// Base64 image, with or without a `data:` URL prefix
    pub image_base64: String,
    /// Region to keep; without it the visible (non-transparent) content is kept
    #[oai(skip_serializing_if_is_none)]
    pub bounding_box: Option<BoundingBoxDto>,
}

#[derive(Debug, Clone, Object)]
pub struct CropImageResponse {
    pub mime_type: String,
    pub image_base64: String,
}

impl From<ImageData> for CropImageResponse {
    fn from(image: ImageData) -> Self {
        Self {
            mime_type: image.mime_type().to_string(),
            image_base64: image.to_base64(),
        }
    }
}
