//! Day-of-week helpers shared by toll schedules and coverage checks.

use chrono::{NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Deserializer, Serializer};

use crate::error::{NetError, Result};

/// Days of the week, Monday first.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Seconds in a day.
pub const DAY_SECONDS: u32 = 24 * 60 * 60;

/// Seconds in a Monday-based week.
pub const WEEK_SECONDS: u32 = 7 * DAY_SECONDS;

/// Full English name of a day, as used in the time-window columns.
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Parses a day name, full or abbreviated, ignoring case.
///
/// # Errors
///
/// [`NetError::UnknownDay`] if the name is not a day of the week.
pub fn parse_day(name: &str) -> Result<Weekday> {
    name.trim()
        .parse::<Weekday>()
        .map_err(|_| NetError::UnknownDay(name.to_string()))
}

/// Returns `true` for Saturday and Sunday.
pub fn is_weekend(day: Weekday) -> bool {
    matches!(day, Weekday::Sat | Weekday::Sun)
}

/// Offset of (`day`, `time`) from Monday 00:00:00, in whole seconds.
pub fn seconds_into_week(day: Weekday, time: NaiveTime) -> u32 {
    day.num_days_from_monday() * DAY_SECONDS + time.num_seconds_from_midnight()
}

/// Wall-clock time from hour, minute and second; out-of-range parts clamp to midnight.
pub(crate) fn clock(hour: u32, min: u32, sec: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, min, sec).unwrap_or(NaiveTime::MIN)
}

/// Last second of the day, `23:59:59`.
pub(crate) fn end_of_day() -> NaiveTime {
    clock(23, 59, 59)
}

pub(crate) fn serialize_day<S: Serializer>(
    day: &Weekday,
    s: S,
) -> std::result::Result<S::Ok, S::Error> {
    s.serialize_str(day_name(*day))
}

pub(crate) fn deserialize_day<'de, D: Deserializer<'de>>(
    d: D,
) -> std::result::Result<Weekday, D::Error> {
    let name = String::deserialize(d)?;
    parse_day(&name).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_names_round_trip() {
        for day in WEEK {
            assert_eq!(parse_day(day_name(day)).expect("parse"), day);
        }
    }

    #[test]
    fn test_parse_variants() {
        assert_eq!(parse_day("mon").expect("parse"), Weekday::Mon);
        assert_eq!(parse_day(" SUNDAY ").expect("parse"), Weekday::Sun);
        assert!(matches!(parse_day("Funday"), Err(NetError::UnknownDay(_))));
    }

    #[test]
    fn test_weekend() {
        assert!(is_weekend(Weekday::Sat));
        assert!(is_weekend(Weekday::Sun));
        assert!(!is_weekend(Weekday::Fri));
    }

    #[test]
    fn test_seconds_into_week() {
        assert_eq!(seconds_into_week(Weekday::Mon, NaiveTime::MIN), 0);
        assert_eq!(seconds_into_week(Weekday::Tue, clock(1, 0, 0)), DAY_SECONDS + 3600);
        assert_eq!(seconds_into_week(Weekday::Sun, end_of_day()), WEEK_SECONDS - 1);
    }
}
