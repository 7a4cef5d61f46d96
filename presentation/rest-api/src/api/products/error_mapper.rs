use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        if let ProductError::Image(inner) = self {
            return inner.into_error_response();
        }

        let (status, name) = match &self {
            ProductError::BarcodeEmpty | ProductError::NothingToIdentify => {
                (StatusCode::BAD_REQUEST, "ValidationError")
            }
            ProductError::AnalysisFailed => (StatusCode::UNPROCESSABLE_ENTITY, "AnalysisError"),
            ProductError::ProviderUnavailable | ProductError::AnalyzerUnavailable => {
                (StatusCode::SERVICE_UNAVAILABLE, "ServiceUnavailable")
            }
            ProductError::ProviderFailed(_) => (StatusCode::BAD_GATEWAY, "UpstreamError"),
            ProductError::Image(_) => (StatusCode::BAD_REQUEST, "ValidationError"),
        };

        // Upstream reasons stay in the logs.
        let message = match &self {
            ProductError::ProviderFailed(_) => "product.provider_failed".to_string(),
            other => other.to_string(),
        };

        (status, ErrorResponse::json(name, &message))
    }
}
