use std::io::Cursor;

use image::{DynamicImage, GenericImageView, ImageFormat};

use business::domain::image::errors::ImageError;
use business::domain::image::model::{BoundingBox, ImageData};
use business::domain::image::services::ImageCropper;

/// Pixels at or below this alpha are treated as background.
const ALPHA_THRESHOLD: u8 = 10;
/// Margin kept around the detected content, in pixels.
const PADDING: u32 = 10;

#[derive(Debug, Clone, Copy)]
pub struct ContentCropper {
    alpha_threshold: u8,
    padding: u32,
}

impl Default for ContentCropper {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentCropper {
    pub fn new() -> Self {
        Self {
            alpha_threshold: ALPHA_THRESHOLD,
            padding: PADDING,
        }
    }

    pub fn with_padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    /// Smallest rectangle holding every pixel above the alpha threshold,
    /// or `None` when the image is fully transparent.
    fn visible_bounds(&self, image: &DynamicImage) -> Option<BoundingBox> {
        let rgba = image.to_rgba8();
        let mut bounds: Option<(u32, u32, u32, u32)> = None;

        for (x, y, pixel) in rgba.enumerate_pixels() {
            if pixel[3] <= self.alpha_threshold {
                continue;
            }
            bounds = Some(match bounds {
                None => (x, y, x, y),
                Some((min_x, min_y, max_x, max_y)) => {
                    (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y))
                }
            });
        }

        bounds.map(|(min_x, min_y, max_x, max_y)| {
            BoundingBox::new(min_x, min_y, max_x - min_x + 1, max_y - min_y + 1)
        })
    }

    fn content_region(&self, image: &DynamicImage) -> Option<BoundingBox> {
        let (width, height) = image.dimensions();
        self.visible_bounds(image)
            .map(|bounds| bounds.pad_within(self.padding, width, height))
    }
}

impl ImageCropper for ContentCropper {
    fn crop_to_content(
        &self,
        image: &ImageData,
        bounding_box: Option<BoundingBox>,
    ) -> Result<ImageData, ImageError> {
        let decoded = image::load_from_memory(image.as_bytes()).map_err(|_| ImageError::Decode)?;
        let (width, height) = decoded.dimensions();

        let region = match bounding_box.and_then(|b| b.clamp_to(width, height)) {
            Some(region) => region,
            // Opaque formats have no background to trim.
            None if !decoded.color().has_alpha() => return Ok(image.clone()),
            None => match self.content_region(&decoded) {
                Some(region) => region,
                None => return Ok(image.clone()),
            },
        };

        if region == BoundingBox::new(0, 0, width, height) {
            return Ok(image.clone());
        }

        let cropped = decoded.crop_imm(region.x, region.y, region.width, region.height);
        encode_png(&cropped)
    }
}

fn encode_png(image: &DynamicImage) -> Result<ImageData, ImageError> {
    let mut buffer = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .map_err(|_| ImageError::Encode)?;
    Ok(ImageData::new(buffer))
}
