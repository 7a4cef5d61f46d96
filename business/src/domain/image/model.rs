use std::sync::LazyLock;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::errors::ImageError;

static DATA_URL_PREFIX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^data:image/[a-zA-Z0-9.+-]+;base64,").ok());

/// Encoded image bytes (PNG, JPEG, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData(Vec<u8>);

impl ImageData {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Decodes plain base64 or a `data:image/...;base64,` URL. Whitespace is ignored.
    pub fn from_base64(raw: &str) -> Result<Self, ImageError> {
        let stripped = DATA_URL_PREFIX
            .as_ref()
            .map(|re| re.replace(raw.trim(), "").to_string())
            .unwrap_or_else(|| raw.trim().to_string());
        let clean: String = stripped.chars().filter(|c| !c.is_whitespace()).collect();
        if clean.is_empty() {
            return Err(ImageError::Empty);
        }

        let bytes = STANDARD
            .decode(clean)
            .map_err(|_| ImageError::InvalidEncoding)?;
        if bytes.is_empty() {
            return Err(ImageError::Empty);
        }
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.0)
    }

    /// MIME type sniffed from the magic bytes; JPEG when unrecognised.
    pub fn mime_type(&self) -> &'static str {
        match self.0.as_slice() {
            [0x89, b'P', b'N', b'G', ..] => "image/png",
            [b'G', b'I', b'F', b'8', ..] => "image/gif",
            [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => "image/webp",
            _ => "image/jpeg",
        }
    }

    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type(), self.to_base64())
    }
}

impl From<Vec<u8>> for ImageData {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

/// Pixel rectangle locating the subject of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Intersection with a `width` x `height` image, or `None` if nothing is left.
    pub fn clamp_to(&self, width: u32, height: u32) -> Option<BoundingBox> {
        if self.x >= width || self.y >= height {
            return None;
        }
        let right = self.x.saturating_add(self.width).min(width);
        let bottom = self.y.saturating_add(self.height).min(height);
        let clamped = BoundingBox::new(self.x, self.y, right - self.x, bottom - self.y);
        (clamped.width > 0 && clamped.height > 0).then_some(clamped)
    }

    /// Grows the box by `padding` on each side, clipped to the image.
    pub fn pad_within(&self, padding: u32, width: u32, height: u32) -> BoundingBox {
        let x = self.x.saturating_sub(padding);
        let y = self.y.saturating_sub(padding);
        let right = self
            .x
            .saturating_add(self.width)
            .saturating_add(padding)
            .min(width);
        let bottom = self
            .y
            .saturating_add(self.height)
            .saturating_add(padding)
            .min(height);
        BoundingBox::new(x, y, right.saturating_sub(x), bottom.saturating_sub(y))
    }
}
