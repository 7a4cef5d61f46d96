use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::image::errors::ImageError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ImageError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match self {
            ImageError::Empty | ImageError::InvalidEncoding | ImageError::Decode => {
                (StatusCode::BAD_REQUEST, "ValidationError")
            }
            ImageError::Encode | ImageError::TaskFailed => {
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalError")
            }
        };

        (status, ErrorResponse::json(name, &self.to_string()))
    }
}
