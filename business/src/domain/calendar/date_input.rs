use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::Value;

use super::model::CalendarDay;

/// Every date representation the inventory may hand us.
///
/// Callers pick a variant at the boundary (see [`DateInput::from_json`]); the
/// normalizer then dispatches over this closed set.
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    /// A wall-clock reading already in the local zone.
    LocalDateTime(NaiveDateTime),
    /// An absolute instant.
    Instant(DateTime<Utc>),
    /// A document-database timestamp (seconds + nanoseconds since the epoch).
    Timestamp { seconds: i64, nanos: u32 },
    /// Milliseconds since the epoch.
    EpochMillis(i64),
    /// Any textual form, canonical `YYYY-MM-DD` or otherwise.
    Text(String),
    /// A stored value of no known date shape, kept as its JSON text.
    Unrecognized(String),
}

impl DateInput {
    /// Maps a JSON value onto a date input.
    ///
    /// - string -> `Text`
    /// - number -> `EpochMillis`
    /// - `{"seconds", "nanoseconds"}` or `{"_seconds", "_nanoseconds"}` -> `Timestamp`
    ///
    /// Only `null` means no date set. Any other shape is `Unrecognized`, which
    /// the normalizer reads as today.
    pub fn from_json(value: &Value) -> Option<Self> {
        let unrecognized = || DateInput::Unrecognized(value.to_string());
        match value {
            Value::Null => None,
            Value::String(text) => Some(DateInput::Text(text.clone())),
            Value::Number(number) => Some(
                number
                    .as_i64()
                    .or_else(|| number.as_f64().filter(|f| f.is_finite()).map(|f| f as i64))
                    .map(DateInput::EpochMillis)
                    .unwrap_or_else(unrecognized),
            ),
            Value::Object(map) => {
                let seconds = map
                    .get("seconds")
                    .or_else(|| map.get("_seconds"))
                    .and_then(Value::as_i64);
                let Some(seconds) = seconds else {
                    return Some(unrecognized());
                };
                let nanos = map
                    .get("nanoseconds")
                    .or_else(|| map.get("_nanoseconds"))
                    .and_then(Value::as_u64)
                    .and_then(|n| u32::try_from(n).ok())
                    .unwrap_or(0);
                Some(DateInput::Timestamp { seconds, nanos })
            }
            Value::Bool(_) | Value::Array(_) => Some(unrecognized()),
        }
    }

    /// Short description used when logging rejected input.
    pub fn describe(&self) -> String {
        match self {
            DateInput::LocalDateTime(dt) => format!("local date-time {}", dt),
            DateInput::Instant(dt) => format!("instant {}", dt.to_rfc3339()),
            DateInput::Timestamp { seconds, nanos } => {
                format!("timestamp {{seconds: {}, nanos: {}}}", seconds, nanos)
            }
            DateInput::EpochMillis(ms) => format!("epoch millis {}", ms),
            DateInput::Text(text) => format!("text {:?}", text),
            DateInput::Unrecognized(json) => format!("unrecognized value {}", json),
        }
    }
}

impl From<CalendarDay> for DateInput {
    fn from(day: CalendarDay) -> Self {
        DateInput::Text(day.to_string())
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(dt: NaiveDateTime) -> Self {
        DateInput::LocalDateTime(dt)
    }
}

impl From<DateTime<Utc>> for DateInput {
    fn from(dt: DateTime<Utc>) -> Self {
        DateInput::Instant(dt)
    }
}

impl From<&str> for DateInput {
    fn from(s: &str) -> Self {
        DateInput::Text(s.to_string())
    }
}

impl From<String> for DateInput {
    fn from(s: String) -> Self {
        DateInput::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_map_string_to_text() {
        assert_eq!(
            DateInput::from_json(&json!("2024-01-10")),
            Some(DateInput::Text("2024-01-10".to_string()))
        );
    }

    #[test]
    fn should_map_number_to_epoch_millis() {
        assert_eq!(
            DateInput::from_json(&json!(1704844800000_i64)),
            Some(DateInput::EpochMillis(1704844800000))
        );
    }

    #[test]
    fn should_map_timestamp_object_in_both_spellings() {
        let expected = Some(DateInput::Timestamp {
            seconds: 1704844800,
            nanos: 500,
        });
        assert_eq!(
            DateInput::from_json(&json!({"seconds": 1704844800, "nanoseconds": 500})),
            expected
        );
        assert_eq!(
            DateInput::from_json(&json!({"_seconds": 1704844800, "_nanoseconds": 500})),
            expected
        );
    }

    #[test]
    fn should_treat_only_null_as_absent() {
        assert_eq!(DateInput::from_json(&Value::Null), None);
    }

    #[test]
    fn should_keep_unknown_shapes_as_unrecognized() {
        assert_eq!(
            DateInput::from_json(&json!(true)),
            Some(DateInput::Unrecognized("true".to_string()))
        );
        assert_eq!(
            DateInput::from_json(&json!([2024, 1, 10])),
            Some(DateInput::Unrecognized("[2024,1,10]".to_string()))
        );
        assert_eq!(
            DateInput::from_json(&json!({"date": "2024-01-10"})),
            Some(DateInput::Unrecognized(r#"{"date":"2024-01-10"}"#.to_string()))
        );
        assert_eq!(
            DateInput::from_json(&json!({"seconds": "1704844800"})),
            Some(DateInput::Unrecognized(r#"{"seconds":"1704844800"}"#.to_string()))
        );
    }
}
