use super::errors::ImageError;
use super::model::{BoundingBox, ImageData};

/// Port for tightening a photo around its subject.
///
/// With a bounding box the crop follows it; without one the implementation
/// falls back to the non-transparent region. An image with no visible content
/// comes back unchanged.
pub trait ImageCropper: Send + Sync {
    fn crop_to_content(
        &self,
        image: &ImageData,
        bounding_box: Option<BoundingBox>,
    ) -> Result<ImageData, ImageError>;
}
