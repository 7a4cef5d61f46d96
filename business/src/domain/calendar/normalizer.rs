use std::sync::Arc;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

use super::date_input::DateInput;
use super::model::{CalendarDay, LocalZone};
use crate::domain::logger::Logger;
use crate::domain::shared::clock::Clock;

const LOCAL_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const LOCAL_DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d"];

/// Turns any [`DateInput`] into a local [`CalendarDay`] and back.
///
/// Calendar fields are always read in the configured [`LocalZone`], never via
/// UTC, so values close to local midnight keep their day. Unreadable input
/// degrades to today and is logged; nothing here returns an error.
pub struct DateNormalizer {
    zone: LocalZone,
    clock: Arc<dyn Clock>,
    logger: Arc<dyn Logger>,
}

impl DateNormalizer {
    pub fn new(zone: LocalZone, clock: Arc<dyn Clock>, logger: Arc<dyn Logger>) -> Self {
        Self {
            zone,
            clock,
            logger,
        }
    }

    pub fn zone(&self) -> LocalZone {
        self.zone
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn today(&self) -> CalendarDay {
        self.zone.calendar_day(self.clock.now())
    }

    /// The local day `days` after today, saturating at today on overflow.
    pub fn days_from_today(&self, days: i64) -> CalendarDay {
        let today = self.today();
        today.add_days(days).unwrap_or(today)
    }

    /// Local calendar day of `input`; absent or unreadable input means today.
    pub fn to_calendar_day(&self, input: Option<&DateInput>) -> CalendarDay {
        let Some(input) = input else {
            return self.today();
        };

        match self.resolve(input) {
            Some(day) => day,
            None => {
                self.logger.warn(&format!(
                    "Unreadable date input ({}), falling back to today",
                    input.describe()
                ));
                self.today()
            }
        }
    }

    /// Canonical `YYYY-MM-DD` form of `input`.
    ///
    /// A canonical string that names a real date comes back unchanged.
    pub fn to_calendar_day_string(&self, input: Option<&DateInput>) -> String {
        self.to_calendar_day(input).to_string()
    }

    /// Local midnight of a `YYYY-MM-DD` string; `None` for empty input.
    ///
    /// The string is split into numeric fields and rebuilt in the local zone.
    pub fn parse_calendar_day_string(&self, text: Option<&str>) -> Option<DateTime<FixedOffset>> {
        let text = text.map(str::trim).filter(|t| !t.is_empty())?;

        match text.parse::<CalendarDay>() {
            Ok(day) => self.zone.local_midnight(day),
            Err(reason) => {
                self.logger.warn(&reason);
                None
            }
        }
    }

    fn resolve(&self, input: &DateInput) -> Option<CalendarDay> {
        match input {
            DateInput::LocalDateTime(dt) => Some(CalendarDay::from_date(dt.date())),
            DateInput::Instant(dt) => Some(self.zone.calendar_day(*dt)),
            DateInput::Timestamp { seconds, nanos } => DateTime::from_timestamp(*seconds, *nanos)
                .map(|dt| self.zone.calendar_day(dt)),
            DateInput::EpochMillis(ms) => {
                DateTime::from_timestamp_millis(*ms).map(|dt| self.zone.calendar_day(dt))
            }
            DateInput::Text(text) => self.parse_text(text),
            DateInput::Unrecognized(_) => None,
        }
    }

    fn parse_text(&self, text: &str) -> Option<CalendarDay> {
        let text = text.trim();

        if let Some(day) = CalendarDay::parse_canonical(text) {
            return Some(day);
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
            return Some(self.zone.calendar_day(dt.with_timezone(&Utc)));
        }

        if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
            return Some(self.zone.calendar_day(dt.with_timezone(&Utc)));
        }

        if let Some(dt) = LOCAL_DATE_TIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        {
            return Some(CalendarDay::from_date(dt.date()));
        }

        LOCAL_DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
            .map(CalendarDay::from_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::clock::FixedClock;
    use chrono::{NaiveDate, TimeZone};
    use mockall::mock;
    use proptest::prelude::*;

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn zone(offset_hours: i32) -> LocalZone {
        LocalZone::from_offset_minutes(offset_hours * 60).unwrap()
    }

    // 2024-01-10 03:00 UTC: already the 10th in Seoul, still the 9th in Los Angeles.
    fn normalizer_at(offset_hours: i32) -> DateNormalizer {
        let now = Utc.with_ymd_and_hms(2024, 1, 10, 3, 0, 0).unwrap();
        DateNormalizer::new(zone(offset_hours), Arc::new(FixedClock(now)), mock_logger())
    }

    #[test]
    fn should_return_canonical_string_unchanged() {
        let normalizer = normalizer_at(0);
        let input = DateInput::from("2023-10-10");
        assert_eq!(normalizer.to_calendar_day_string(Some(&input)), "2023-10-10");
    }

    #[test]
    fn should_use_today_when_input_is_absent() {
        assert_eq!(normalizer_at(9).to_calendar_day_string(None), "2024-01-10");
        assert_eq!(normalizer_at(-8).to_calendar_day_string(None), "2024-01-09");
    }

    #[test]
    fn should_fall_back_to_today_when_text_is_not_a_date() {
        let mut logger = MockLog::new();
        logger
            .expect_warn()
            .withf(|message| message.contains("not-a-date"))
            .times(1)
            .returning(|_| ());
        let now = Utc.with_ymd_and_hms(2024, 1, 10, 3, 0, 0).unwrap();
        let normalizer =
            DateNormalizer::new(LocalZone::utc(), Arc::new(FixedClock(now)), Arc::new(logger));

        let result = normalizer.to_calendar_day_string(Some(&DateInput::from("not-a-date")));

        assert_eq!(result, "2024-01-10");
    }

    #[test]
    fn should_read_local_fields_of_native_date_time() {
        let late_evening = NaiveDate::from_ymd_opt(2024, 3, 31)
            .unwrap()
            .and_hms_opt(23, 59, 0)
            .unwrap();
        let input = DateInput::LocalDateTime(late_evening);

        for offset in [0, 9, -8] {
            assert_eq!(
                normalizer_at(offset).to_calendar_day_string(Some(&input)),
                "2024-03-31"
            );
        }
    }

    #[test]
    fn should_read_instant_in_local_zone_not_utc() {
        let instant = DateInput::Instant(Utc.with_ymd_and_hms(2024, 1, 9, 20, 0, 0).unwrap());
        assert_eq!(normalizer_at(9).to_calendar_day_string(Some(&instant)), "2024-01-10");
        assert_eq!(normalizer_at(-8).to_calendar_day_string(Some(&instant)), "2024-01-09");
    }

    #[test]
    fn should_convert_remote_timestamp_before_reading_fields() {
        // 2024-01-09T20:00:00Z
        let timestamp = DateInput::Timestamp {
            seconds: 1704830400,
            nanos: 0,
        };
        assert_eq!(normalizer_at(9).to_calendar_day_string(Some(&timestamp)), "2024-01-10");
        assert_eq!(normalizer_at(0).to_calendar_day_string(Some(&timestamp)), "2024-01-09");
    }

    #[test]
    fn should_convert_epoch_millis() {
        let millis = DateInput::EpochMillis(1704830400000);
        assert_eq!(normalizer_at(9).to_calendar_day_string(Some(&millis)), "2024-01-10");
    }

    #[test]
    fn should_parse_iso_strings_with_offset() {
        let iso = DateInput::from("2024-01-09T20:00:00.000Z");
        assert_eq!(normalizer_at(9).to_calendar_day_string(Some(&iso)), "2024-01-10");
        assert_eq!(normalizer_at(-8).to_calendar_day_string(Some(&iso)), "2024-01-09");
    }

    #[test]
    fn should_treat_offsetless_date_time_text_as_local() {
        let text = DateInput::from("2024-01-09T23:30:00");
        assert_eq!(normalizer_at(9).to_calendar_day_string(Some(&text)), "2024-01-09");
        assert_eq!(normalizer_at(-8).to_calendar_day_string(Some(&text)), "2024-01-09");
    }

    #[test]
    fn should_parse_alternative_date_separators() {
        let normalizer = normalizer_at(0);
        assert_eq!(
            normalizer.to_calendar_day_string(Some(&DateInput::from("2024/02/03"))),
            "2024-02-03"
        );
        assert_eq!(
            normalizer.to_calendar_day_string(Some(&DateInput::from("2024.02.03"))),
            "2024-02-03"
        );
    }

    #[test]
    fn should_fall_back_to_today_for_out_of_range_timestamp() {
        let timestamp = DateInput::Timestamp {
            seconds: i64::MAX,
            nanos: 0,
        };
        assert_eq!(normalizer_at(0).to_calendar_day_string(Some(&timestamp)), "2024-01-10");
    }

    #[test]
    fn should_parse_day_string_as_local_midnight() {
        let normalizer = normalizer_at(-8);

        let midnight = normalizer
            .parse_calendar_day_string(Some("2024-01-10"))
            .unwrap();

        assert_eq!(midnight.to_rfc3339(), "2024-01-10T00:00:00-08:00");
        assert_eq!(midnight.date_naive().to_string(), "2024-01-10");
    }

    #[test]
    fn should_return_none_for_empty_day_string() {
        let normalizer = normalizer_at(0);
        assert!(normalizer.parse_calendar_day_string(None).is_none());
        assert!(normalizer.parse_calendar_day_string(Some("")).is_none());
        assert!(normalizer.parse_calendar_day_string(Some("   ")).is_none());
    }

    #[test]
    fn should_return_none_for_unparseable_day_string() {
        assert!(
            normalizer_at(0)
                .parse_calendar_day_string(Some("someday"))
                .is_none()
        );
    }

    #[test]
    fn should_reject_signed_day_string_but_accept_unpadded_fields() {
        let normalizer = normalizer_at(0);

        assert!(
            normalizer
                .parse_calendar_day_string(Some("+2024-01-05"))
                .is_none()
        );
        let midnight = normalizer
            .parse_calendar_day_string(Some("2024-1-5"))
            .unwrap();
        assert_eq!(midnight.to_rfc3339(), "2024-01-05T00:00:00+00:00");
    }

    #[test]
    fn should_fall_back_to_today_for_well_shaped_impossible_date() {
        let mut logger = MockLog::new();
        logger
            .expect_warn()
            .withf(|message| message.contains("2023-02-30"))
            .times(1)
            .returning(|_| ());
        let now = Utc.with_ymd_and_hms(2024, 1, 10, 3, 0, 0).unwrap();
        let normalizer =
            DateNormalizer::new(LocalZone::utc(), Arc::new(FixedClock(now)), Arc::new(logger));

        let result = normalizer.to_calendar_day_string(Some(&DateInput::from("2023-02-30")));

        assert_eq!(result, "2024-01-10");
    }

    #[test]
    fn should_fall_back_to_today_and_warn_for_unrecognized_stored_value() {
        let mut logger = MockLog::new();
        logger
            .expect_warn()
            .withf(|message| message.contains("[2024,1,10]"))
            .times(1)
            .returning(|_| ());
        let now = Utc.with_ymd_and_hms(2024, 1, 10, 3, 0, 0).unwrap();
        let normalizer =
            DateNormalizer::new(LocalZone::utc(), Arc::new(FixedClock(now)), Arc::new(logger));
        let stored = DateInput::from_json(&serde_json::json!([2024, 1, 10]));

        assert_eq!(normalizer.to_calendar_day_string(stored.as_ref()), "2024-01-10");
    }

    #[test]
    fn should_compute_days_from_today() {
        assert_eq!(normalizer_at(9).days_from_today(7).to_string(), "2024-01-17");
    }

    proptest! {
        #[test]
        fn should_round_trip_local_date_times(
            offset in prop::sample::select(vec![0, 9, -8]),
            days in 0i64..40_000,
            seconds in 0u32..86_400,
        ) {
            let normalizer = normalizer_at(offset);
            let date = NaiveDate::from_ymd_opt(1950, 1, 1).unwrap() + chrono::Duration::days(days);
            let local = date.and_time(chrono::NaiveTime::MIN) + chrono::Duration::seconds(seconds as i64);

            let text = normalizer.to_calendar_day_string(Some(&DateInput::LocalDateTime(local)));
            let midnight = normalizer.parse_calendar_day_string(Some(&text)).unwrap();

            prop_assert_eq!(midnight.date_naive(), local.date());
            prop_assert_eq!(midnight.time(), chrono::NaiveTime::MIN);
        }

        #[test]
        fn should_round_trip_instants_in_their_local_day(
            offset in prop::sample::select(vec![0, 9, -8]),
            millis in 0i64..4_000_000_000_000,
        ) {
            let normalizer = normalizer_at(offset);
            let instant = DateTime::from_timestamp_millis(millis).unwrap();

            let text = normalizer.to_calendar_day_string(Some(&DateInput::Instant(instant)));
            let midnight = normalizer.parse_calendar_day_string(Some(&text)).unwrap();

            prop_assert_eq!(midnight.date_naive(), zone(offset).wall_clock(instant).date());
        }

        #[test]
        fn should_keep_canonical_strings_idempotent(days in 0i64..40_000) {
            let normalizer = normalizer_at(0);
            let day = CalendarDay::from_ymd(1950, 1, 1).unwrap().add_days(days).unwrap();
            let text = day.to_string();

            let once = normalizer.to_calendar_day_string(Some(&DateInput::from(text.as_str())));
            let twice = normalizer.to_calendar_day_string(Some(&DateInput::from(once.as_str())));

            prop_assert_eq!(&once, &text);
            prop_assert_eq!(once, twice);
        }
    }
}
