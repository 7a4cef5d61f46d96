use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::settings::errors::SettingsError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for SettingsError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match self {
            SettingsError::LabelEmpty => (StatusCode::BAD_REQUEST, "ValidationError"),
            SettingsError::SessionClosed => (StatusCode::SERVICE_UNAVAILABLE, "SessionClosed"),
            SettingsError::LockPoisoned => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        (status, ErrorResponse::json(name, &self.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_closed_session_to_503() {
        let (status, json) = SettingsError::SessionClosed.into_error_response();

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json.0.message, "settings.session_closed");
    }

    #[test]
    fn should_map_empty_label_to_400() {
        let (status, _) = SettingsError::LabelEmpty.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
