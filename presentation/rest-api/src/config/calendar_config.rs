use std::env;

use business::domain::calendar::model::LocalZone;

/// Zone that defines "today" for expiry calculations.
///
/// Environment variables:
/// - APP_UTC_OFFSET_MINUTES: Fixed UTC offset in minutes, e.g. 540 for UTC+9
///   (default: host time zone)
pub struct CalendarConfig {
    pub zone: LocalZone,
}

impl CalendarConfig {
    pub fn from_env() -> Self {
        Self {
            zone: parse_zone(env::var("APP_UTC_OFFSET_MINUTES").ok().as_deref()),
        }
    }
}

fn parse_zone(raw: Option<&str>) -> LocalZone {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return LocalZone::System;
    };

    match raw.parse::<i32>().ok().and_then(LocalZone::from_offset_minutes) {
        Some(zone) => zone,
        None => {
            tracing::warn!(value = raw, "Invalid APP_UTC_OFFSET_MINUTES, using host time zone");
            LocalZone::System
        }
    }
}
