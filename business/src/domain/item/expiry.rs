use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::calendar::date_input::DateInput;
use crate::domain::calendar::model::CalendarDay;
use crate::domain::calendar::normalizer::DateNormalizer;

/// Day count reported for items without an expiry date.
pub const NO_EXPIRY_DAYS: i64 = 999;

const URGENT_MAX_DAYS: i64 = 3;
const SOON_MAX_DAYS: i64 = 7;

/// Expiry urgency classes used for badges and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryBucket {
    /// Past its expiry day.
    Expired,
    /// Expires within 0-3 days.
    Urgent,
    /// Expires within 4-7 days.
    Soon,
    /// More than a week left.
    Safe,
    /// No expiry date set.
    Unknown,
}

impl ExpiryBucket {
    pub fn from_days(days: i64) -> Self {
        match days {
            d if d < 0 => ExpiryBucket::Expired,
            d if d <= URGENT_MAX_DAYS => ExpiryBucket::Urgent,
            d if d <= SOON_MAX_DAYS => ExpiryBucket::Soon,
            _ => ExpiryBucket::Safe,
        }
    }

    /// Bucket used when filtering: items without expiry group with `Safe`.
    pub fn filter_group(self) -> Self {
        match self {
            ExpiryBucket::Unknown => ExpiryBucket::Safe,
            other => other,
        }
    }

    /// Badge text, e.g. `D+2` for expired or `D-3` for upcoming.
    pub fn badge(self, days: i64) -> Option<String> {
        match self {
            ExpiryBucket::Expired => Some(format!("D+{}", days.unsigned_abs())),
            ExpiryBucket::Urgent | ExpiryBucket::Soon => Some(format!("D-{}", days)),
            ExpiryBucket::Safe | ExpiryBucket::Unknown => None,
        }
    }
}

impl std::fmt::Display for ExpiryBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExpiryBucket::Expired => write!(f, "expired"),
            ExpiryBucket::Urgent => write!(f, "urgent"),
            ExpiryBucket::Soon => write!(f, "soon"),
            ExpiryBucket::Safe => write!(f, "safe"),
            ExpiryBucket::Unknown => write!(f, "unknown"),
        }
    }
}

impl std::str::FromStr for ExpiryBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "expired" => Ok(ExpiryBucket::Expired),
            "urgent" => Ok(ExpiryBucket::Urgent),
            "soon" => Ok(ExpiryBucket::Soon),
            "safe" => Ok(ExpiryBucket::Safe),
            "unknown" => Ok(ExpiryBucket::Unknown),
            _ => Err(format!("Invalid expiry bucket: {}", s)),
        }
    }
}

/// Derived expiry values for a single item.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpiryStatus {
    pub expiry_day: Option<CalendarDay>,
    pub days_until_expiry: i64,
    pub bucket: ExpiryBucket,
    pub badge: Option<String>,
}

/// Classifies expiry dates against the normalizer's "today".
///
/// Holds no cache: "today" moves, so every call recomputes.
pub struct ExpiryClassifier {
    normalizer: Arc<DateNormalizer>,
}

impl ExpiryClassifier {
    pub fn new(normalizer: Arc<DateNormalizer>) -> Self {
        Self { normalizer }
    }

    pub fn normalizer(&self) -> &DateNormalizer {
        &self.normalizer
    }

    /// Signed day count from today to the expiry day, or [`NO_EXPIRY_DAYS`].
    ///
    /// Computed on calendar fields, so DST shifts never move the count.
    pub fn days_until_expiry(&self, expiry: Option<&DateInput>) -> i64 {
        match expiry {
            Some(input) => self
                .normalizer
                .today()
                .days_until(self.normalizer.to_calendar_day(Some(input))),
            None => NO_EXPIRY_DAYS,
        }
    }

    pub fn classify(&self, expiry: Option<&DateInput>) -> ExpiryStatus {
        let Some(input) = expiry else {
            return ExpiryStatus {
                expiry_day: None,
                days_until_expiry: NO_EXPIRY_DAYS,
                bucket: ExpiryBucket::Unknown,
                badge: None,
            };
        };

        let expiry_day = self.normalizer.to_calendar_day(Some(input));
        let days = self.normalizer.today().days_until(expiry_day);
        let bucket = ExpiryBucket::from_days(days);

        ExpiryStatus {
            expiry_day: Some(expiry_day),
            days_until_expiry: days,
            bucket,
            badge: bucket.badge(days),
        }
    }
}
