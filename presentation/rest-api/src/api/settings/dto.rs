use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::settings::model::{SessionSettings, Theme};

use crate::api::shared::dto::FoodCategoryDto;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Enum)]
pub enum ThemeDto {
    #[oai(rename = "light")]
    Light,
    #[oai(rename = "dark")]
    Dark,
    #[oai(rename = "system")]
    System,
}

impl From<Theme> for ThemeDto {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => ThemeDto::Light,
            Theme::Dark => ThemeDto::Dark,
            Theme::System => ThemeDto::System,
        }
    }
}

impl From<ThemeDto> for Theme {
    fn from(dto: ThemeDto) -> Self {
        match dto {
            ThemeDto::Light => Theme::Light,
            ThemeDto::Dark => Theme::Dark,
            ThemeDto::System => Theme::System,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CategoryLabelResponse {
    pub category: FoodCategoryDto,
    pub label: String,
}

#[derive(Debug, Clone, Object)]
pub struct SettingsResponse {
    pub theme: ThemeDto,
    pub categories: Vec<CategoryLabelResponse>,
}

impl From<SessionSettings> for SettingsResponse {
    fn from(settings: SessionSettings) -> Self {
        Self {
            theme: settings.theme.into(),
            categories: settings
                .categories
                .into_iter()
                .map(|definition| CategoryLabelResponse {
                    category: definition.category.into(),
                    label: definition.label,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct UpdateThemeRequest {
    pub theme: ThemeDto,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateCategoryLabelRequest {
    pub label: String,
}
