use std::sync::LazyLock;

use chrono::{
    DateTime, Datelike, Duration, FixedOffset, Local, LocalResult, NaiveDate, NaiveDateTime,
    NaiveTime, Offset, TimeZone, Utc,
};
use regex::Regex;

static CANONICAL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").ok());

/// A year/month/day in the local calendar, with no time-of-day.
///
/// Canonical text form is `YYYY-MM-DD`, zero-padded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDay(NaiveDate);

impl CalendarDay {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Parses the strict `YYYY-MM-DD` form. Returns `None` for anything else,
    /// including well-shaped strings that name no real date.
    pub fn parse_canonical(text: &str) -> Option<Self> {
        let matches = CANONICAL_PATTERN
            .as_ref()
            .is_some_and(|re| re.is_match(text));
        if !matches {
            return None;
        }
        text.parse().ok()
    }

    /// Signed number of calendar days from `self` to `other`.
    pub fn days_until(&self, other: CalendarDay) -> i64 {
        (other.0 - self.0).num_days()
    }

    pub fn add_days(&self, days: i64) -> Option<Self> {
        self.0.checked_add_signed(Duration::days(days)).map(Self)
    }
}

impl std::fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

/// Splits `Y-M-D` into its numeric fields. Fields are plain ASCII digits with
/// no sign; widths are not enforced here. Use
/// [`CalendarDay::parse_canonical`] for the strict form.
impl std::str::FromStr for CalendarDay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().splitn(3, '-');
        let mut field = || {
            parts
                .next()
                .filter(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()))
                .and_then(|p| p.parse::<u32>().ok())
        };
        let (year, month, day) = match (field(), field(), field()) {
            (Some(y), Some(m), Some(d)) => (y, m, d),
            _ => return Err(format!("Invalid calendar day: {}", s)),
        };
        i32::try_from(year)
            .ok()
            .and_then(|y| CalendarDay::from_ymd(y, month, day))
            .ok_or_else(|| format!("Invalid calendar day: {}", s))
    }
}

/// The timezone whose wall clock defines "local" calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocalZone {
    /// The host's configured zone, DST rules included.
    #[default]
    System,
    Fixed(FixedOffset),
}

impl LocalZone {
    pub fn utc() -> Self {
        LocalZone::Fixed(Utc.fix())
    }

    pub fn from_offset_minutes(minutes: i32) -> Option<Self> {
        minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .map(LocalZone::Fixed)
    }

    /// Wall-clock reading of `instant` in this zone.
    pub fn wall_clock(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        match self {
            LocalZone::System => instant.with_timezone(&Local).naive_local(),
            LocalZone::Fixed(offset) => instant.with_timezone(offset).naive_local(),
        }
    }

    pub fn calendar_day(&self, instant: DateTime<Utc>) -> CalendarDay {
        CalendarDay::from_date(self.wall_clock(instant).date())
    }

    /// Local 00:00:00.000 of `day`.
    ///
    /// When midnight falls inside a DST gap the first valid instant of that
    /// hour is used, so the result still belongs to `day`.
    pub fn local_midnight(&self, day: CalendarDay) -> Option<DateTime<FixedOffset>> {
        let midnight = day.date().and_time(NaiveTime::MIN);
        match self {
            LocalZone::System => first_valid_from(midnight, |local| {
                Local
                    .from_local_datetime(local)
                    .map(|dt| dt.fixed_offset())
            }),
            LocalZone::Fixed(offset) => offset
                .from_local_datetime(&midnight)
                .single()
                .map(|dt| dt.fixed_offset()),
        }
    }
}

/// Earliest reading of `local`, or of one hour later when `local` falls in a
/// DST gap.
fn first_valid_from(
    local: NaiveDateTime,
    resolve: impl Fn(&NaiveDateTime) -> LocalResult<DateTime<FixedOffset>>,
) -> Option<DateTime<FixedOffset>> {
    resolve(&local)
        .earliest()
        .or_else(|| resolve(&(local + Duration::hours(1))).earliest())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn should_format_zero_padded() {
        let day = CalendarDay::from_ymd(2024, 1, 5).unwrap();
        assert_eq!(day.to_string(), "2024-01-05");
    }

    #[test]
    fn should_parse_canonical_form() {
        let day = CalendarDay::parse_canonical("2023-10-10").unwrap();
        assert_eq!((day.year(), day.month(), day.day()), (2023, 10, 10));
    }

    #[test]
    fn should_reject_non_canonical_shapes() {
        assert!(CalendarDay::parse_canonical("2023-1-10").is_none());
        assert!(CalendarDay::parse_canonical("2023-10-10T00:00:00Z").is_none());
        assert!(CalendarDay::parse_canonical("not-a-date").is_none());
    }

    #[test]
    fn should_reject_canonical_shape_without_real_date() {
        assert!(CalendarDay::parse_canonical("2023-02-30").is_none());
        assert!(CalendarDay::parse_canonical("2023-13-01").is_none());
    }

    #[test]
    fn should_parse_unpadded_fields_with_from_str() {
        let day: CalendarDay = "2024-1-5".parse().unwrap();
        assert_eq!(day.to_string(), "2024-01-05");
    }

    #[test]
    fn should_reject_signed_or_padded_fields_with_from_str() {
        assert!("+2024-01-05".parse::<CalendarDay>().is_err());
        assert!("2024-+1-05".parse::<CalendarDay>().is_err());
        assert!("2024- 1-05".parse::<CalendarDay>().is_err());
        assert!("2024-01-05T00:00".parse::<CalendarDay>().is_err());
    }

    #[test]
    fn should_compare_by_date_only() {
        let a = CalendarDay::from_ymd(2024, 3, 1).unwrap();
        let b: CalendarDay = "2024-03-01".parse().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn should_count_signed_days_between() {
        let today = CalendarDay::from_ymd(2024, 1, 10).unwrap();
        let later = CalendarDay::from_ymd(2024, 1, 18).unwrap();
        let earlier = CalendarDay::from_ymd(2024, 1, 9).unwrap();
        assert_eq!(today.days_until(later), 8);
        assert_eq!(today.days_until(earlier), -1);
    }

    #[test]
    fn should_add_days_across_month_end() {
        let day = CalendarDay::from_ymd(2024, 2, 27).unwrap();
        assert_eq!(day.add_days(3).unwrap().to_string(), "2024-03-01");
    }

    #[test]
    fn should_read_wall_clock_in_fixed_zone() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 9, 20, 0, 0).unwrap();
        let seoul = LocalZone::from_offset_minutes(9 * 60).unwrap();
        let los_angeles = LocalZone::from_offset_minutes(-8 * 60).unwrap();

        assert_eq!(seoul.calendar_day(instant).to_string(), "2024-01-10");
        assert_eq!(los_angeles.calendar_day(instant).to_string(), "2024-01-09");
        assert_eq!(LocalZone::utc().calendar_day(instant).to_string(), "2024-01-09");
    }

    #[test]
    fn should_build_local_midnight_in_fixed_zone() {
        let zone = LocalZone::from_offset_minutes(-8 * 60).unwrap();
        let day = CalendarDay::from_ymd(2024, 1, 10).unwrap();

        let midnight = zone.local_midnight(day).unwrap();

        assert_eq!(midnight.to_rfc3339(), "2024-01-10T00:00:00-08:00");
    }

    #[test]
    fn should_move_past_dst_gap_at_midnight() {
        // Clocks jump from 00:00 to 01:00 on 2024-09-08, UTC-4 to UTC-3.
        let before = FixedOffset::west_opt(4 * 3600).unwrap();
        let after = FixedOffset::west_opt(3 * 3600).unwrap();
        let gap_day = NaiveDate::from_ymd_opt(2024, 9, 8).unwrap();
        let switch = gap_day.and_time(NaiveTime::MIN);
        let resolve = |local: &NaiveDateTime| {
            if local.date() == gap_day && local.hour() == 0 {
                LocalResult::None
            } else if *local < switch {
                before.from_local_datetime(local)
            } else {
                after.from_local_datetime(local)
            }
        };

        let midnight = first_valid_from(switch, resolve).unwrap();

        assert_eq!(midnight.to_rfc3339(), "2024-09-08T01:00:00-03:00");
        assert_eq!(midnight.date_naive(), gap_day);
    }

    #[test]
    fn should_keep_day_for_system_zone_midnight_around_dst_switches() {
        for (year, month, day) in [(2024, 3, 10), (2024, 3, 31), (2024, 9, 8), (2024, 10, 27), (2024, 11, 3)] {
            let day = CalendarDay::from_ymd(year, month, day).unwrap();

            let midnight = LocalZone::System.local_midnight(day).unwrap();

            assert_eq!(midnight.with_timezone(&Local).date_naive(), day.date());
        }
    }
}
