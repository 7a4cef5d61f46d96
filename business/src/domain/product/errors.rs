#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.barcode_empty")]
    BarcodeEmpty,
    #[error("product.nothing_to_identify")]
    NothingToIdentify,
    #[error("product.provider_unavailable")]
    ProviderUnavailable,
    /// Carries the transport, status or decode reason for the logs.
    #[error("product.provider_failed: {0}")]
    ProviderFailed(String),
    #[error("product.analysis_failed")]
    AnalysisFailed,
    #[error("product.analyzer_unavailable")]
    AnalyzerUnavailable,
    #[error("image.invalid")]
    Image(#[from] crate::domain::image::errors::ImageError),
}
