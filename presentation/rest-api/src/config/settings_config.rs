use std::env;

use business::domain::settings::model::{SessionSettings, Theme};

/// Initial values of the settings session.
///
/// Environment variables:
/// - APP_THEME: "light", "dark" or "system" (default: "system")
pub struct SettingsConfig {
    pub initial: SessionSettings,
}

impl SettingsConfig {
    pub fn from_env() -> Self {
        Self {
            initial: SessionSettings {
                theme: parse_theme(env::var("APP_THEME").ok().as_deref()),
                ..SessionSettings::default()
            },
        }
    }
}

fn parse_theme(raw: Option<&str>) -> Theme {
    match raw.map(|r| r.trim().to_lowercase()) {
        None => Theme::default(),
        Some(raw) if raw.is_empty() => Theme::default(),
        Some(raw) => raw.parse().unwrap_or_else(|err: String| {
            tracing::warn!(error = %err, "Invalid APP_THEME, using default");
            Theme::default()
        }),
    }
}
