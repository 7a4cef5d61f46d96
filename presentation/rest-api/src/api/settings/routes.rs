use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::product::category::FoodCategory;
use business::domain::settings::context::SettingsContext;
use business::domain::settings::errors::SettingsError;
use business::domain::settings::model::SessionSettings;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::settings::dto::{SettingsResponse, UpdateCategoryLabelRequest, UpdateThemeRequest};
use crate::api::tags::ApiTags;

pub struct SettingsApi {
    settings: Arc<SettingsContext>,
}

impl SettingsApi {
    pub fn new(settings: Arc<SettingsContext>) -> Self {
        Self { settings }
    }

    fn respond(result: Result<SessionSettings, SettingsError>) -> SettingsApiResponse {
        match result {
            Ok(settings) => SettingsApiResponse::Ok(Json(settings.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SettingsApiResponse::BadRequest(json),
                    503 => SettingsApiResponse::ServiceUnavailable(json),
                    _ => SettingsApiResponse::InternalError(json),
                }
            }
        }
    }
}

/// Session preferences: theme and category labels
#[OpenApi]
impl SettingsApi {
    /// Current settings
    #[oai(path = "/settings", method = "get", tag = "ApiTags::Settings")]
    async fn get_settings(&self) -> SettingsApiResponse {
        Self::respond(self.settings.snapshot())
    }

    /// Change the theme
    #[oai(path = "/settings/theme", method = "put", tag = "ApiTags::Settings")]
    async fn update_theme(&self, body: Json<UpdateThemeRequest>) -> SettingsApiResponse {
        Self::respond(self.settings.set_theme(body.0.theme.into()))
    }

    /// Rename a category
    ///
    /// The category set is fixed; only its display label changes.
    #[oai(
        path = "/settings/categories/:category",
        method = "put",
        tag = "ApiTags::Settings"
    )]
    async fn update_category_label(
        &self,
        category: Path<String>,
        body: Json<UpdateCategoryLabelRequest>,
    ) -> SettingsApiResponse {
        let Ok(category) = category.0.parse::<FoodCategory>() else {
            return SettingsApiResponse::BadRequest(ErrorResponse::json(
                "ValidationError",
                "settings.unknown_category",
            ));
        };

        Self::respond(self.settings.set_category_label(category, &body.0.label))
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SettingsApiResponse {
    #[oai(status = 200)]
    Ok(Json<SettingsResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
