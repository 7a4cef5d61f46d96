use async_trait::async_trait;

use super::category::FoodCategory;
use super::errors::ProductError;
use super::model::{ProductMatch, ProductSource};
use crate::domain::image::model::{BoundingBox, ImageData};

/// Outcome of asking one provider about a barcode.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderLookup {
    Found(ProductMatch),
    NotFound,
}

/// Service port for a barcode product database.
///
/// `NotFound` is a normal answer; `Err` means the provider could not answer
/// at all (missing credential, transport or decoding failure).
#[async_trait]
pub trait ProductProvider: Send + Sync {
    fn source(&self) -> ProductSource;

    async fn lookup(&self, barcode: &str) -> Result<ProviderLookup, ProductError>;
}

/// What the vision model suggested for a food photo.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodSuggestion {
    pub name: String,
    pub category: FoodCategory,
    pub shelf_life_days: i64,
    pub bounding_box: Option<BoundingBox>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisFailure {
    /// The model answered but not with the expected JSON.
    MalformedResponse,
    /// The request itself failed (transport error or non-success status).
    RequestFailed,
}

impl std::fmt::Display for AnalysisFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisFailure::MalformedResponse => write!(f, "malformed_response"),
            AnalysisFailure::RequestFailed => write!(f, "request_failed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ImageAnalysis {
    Identified(FoodSuggestion),
    Failed(AnalysisFailure),
    /// No credential configured; no request was made.
    Unavailable,
}

/// Service port for vision-based food recognition.
#[async_trait]
pub trait FoodImageAnalyzerService: Send + Sync {
    async fn analyze(&self, image: &ImageData) -> ImageAnalysis;
}
