//! Zone-aware formatting and time-of-day arithmetic for attendance records.
//!
//! Two flavours of entry point exist side by side:
//! - strict ones (`parse_time_of_day`, `parse_instant`, `try_minutes_between`)
//!   return [`TimeError`] on malformed input;
//! - best-effort ones used by display code degrade to [`TIME_PLACEHOLDER`],
//!   [`INVALID_DATE`], `0` minutes or [`EMPTY_WORK_HOURS`].

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TimeError};
use crate::services::timezone::Zone;
use crate::utils::logging::log_format_fallback;
use crate::utils::validation::{validate_clock_fields, validate_clock_string};

/// Rendered in place of a time of day that could not be parsed.
pub const TIME_PLACEHOLDER: &str = "--:-- --";
/// Rendered in place of a date that could not be parsed.
pub const INVALID_DATE: &str = "Invalid date";
/// Work hours shown when either end of the shift is missing or malformed.
pub const EMPTY_WORK_HOURS: &str = "0.00";

/// An hour/minute/second triple without a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
    second: u32,
}

impl TimeOfDay {
    /// Builds a range-checked time of day.
    pub fn new(hour: u32, minute: u32, second: u32) -> Result<Self> {
        validate_clock_fields(hour, minute, second)?;
        Ok(Self { hour, minute, second })
    }

    /// Hour, 0-23.
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// Minute, 0-59.
    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Second, 0-59.
    pub fn second(&self) -> u32 {
        self.second
    }

    /// Seconds elapsed since midnight.
    pub fn seconds_from_midnight(&self) -> i64 {
        i64::from(self.hour * 3600 + self.minute * 60 + self.second)
    }

    // Every time of day lands on 1970-01-01 UTC so only the clock reading
    // affects differences.
    fn on_reference_date(self) -> DateTime<Utc> {
        DateTime::<Utc>::default() + TimeDelta::seconds(self.seconds_from_midnight())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self> {
        parse_time_of_day(s)
    }
}

/// Parses `HH:MM`, `HH:MM:SS`, or the time part of an ISO-8601 datetime.
///
/// For datetimes the text after the `T` (or space) separator is used, so
/// `2024-01-15T08:30:00Z` yields 08:30:00 exactly as written, without any
/// zone conversion.
pub fn parse_time_of_day(input: &str) -> Result<TimeOfDay> {
    let trimmed = input.trim();
    let time_part = trimmed
        .split_once(|c| c == 'T' || c == ' ')
        .filter(|(date, _)| date.contains('-'))
        .map_or(trimmed, |(_, time)| time);

    let (hour, minute, second) = validate_clock_string(time_part)
        .map_err(|_| TimeError::InvalidFormat(input.to_string()))?;
    TimeOfDay::new(hour, minute, second)
}

/// Renders `h:mm AM/PM`.
pub fn format_to_12_hour(time: TimeOfDay) -> String {
    let (hour, period) = twelve_hour(time.hour);
    format!("{}:{:02} {}", hour, time.minute, period)
}

/// Best-effort 12-hour rendering of a raw time string.
///
/// Returns [`TIME_PLACEHOLDER`] for empty or malformed input.
pub fn format_time_12h(input: &str) -> String {
    match parse_time_of_day(input) {
        Ok(time) => format_to_12_hour(time),
        Err(e) => {
            log_format_fallback("time_of_day", input, &e.to_string());
            TIME_PLACEHOLDER.to_string()
        }
    }
}

fn twelve_hour(hour: u32) -> (u32, &'static str) {
    let period = if hour >= 12 { "PM" } else { "AM" };
    match hour % 12 {
        0 => (12, period),
        h => (h, period),
    }
}

/// Renders `YYYY-MM-DD` for the instant as seen in `zone`.
pub fn format_date_iso_in_zone(instant: &DateTime<Utc>, zone: Zone) -> String {
    zone.project(instant).format("%Y-%m-%d").to_string()
}

/// Renders 24-hour `HH:MM:SS` for the instant as seen in `zone`.
pub fn format_time_hms_in_zone(instant: &DateTime<Utc>, zone: Zone) -> String {
    zone.project(instant).format("%H:%M:%S").to_string()
}

/// Parses an attendance timestamp into an absolute instant.
///
/// Accepts RFC 3339 (`2024-01-15T08:30:00+08:00`), a naive ISO datetime
/// (read as UTC), or a bare date (midnight UTC).
pub fn parse_instant(input: &str) -> Result<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, pattern) {
            return Ok(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| TimeError::InvalidFormat(input.to_string()))
}

/// Renders `Month D, YYYY` in Philippine Time.
pub fn long_date(instant: &DateTime<Utc>) -> String {
    Zone::Pht.project(instant).format("%B %-d, %Y").to_string()
}

/// Best-effort [`long_date`] over a raw timestamp string.
///
/// Returns [`INVALID_DATE`] when the input cannot be parsed.
pub fn format_long_date(input: &str) -> String {
    match parse_instant(input) {
        Ok(instant) => long_date(&instant),
        Err(e) => {
            log_format_fallback("long_date", input, &e.to_string());
            INVALID_DATE.to_string()
        }
    }
}

/// Minutes from `time_a` to `time_b`, negative when `time_b` is earlier.
pub fn try_minutes_between(time_a: &str, time_b: &str) -> Result<f64> {
    let start = parse_time_of_day(time_a)?.on_reference_date();
    let end = parse_time_of_day(time_b)?.on_reference_date();
    Ok((end - start).num_seconds() as f64 / 60.0)
}

/// Best-effort [`try_minutes_between`]; empty or malformed operands give `0`.
pub fn minutes_between(time_a: &str, time_b: &str) -> f64 {
    if time_a.trim().is_empty() || time_b.trim().is_empty() {
        return 0.0;
    }

    try_minutes_between(time_a, time_b).unwrap_or_else(|e| {
        log_format_fallback("minutes_between", &format!("{} -> {}", time_a, time_b), &e.to_string());
        0.0
    })
}

/// Hours worked between clock-in and clock-out, less the break, to two decimals.
///
/// Returns [`EMPTY_WORK_HOURS`] when either end is missing or malformed. A
/// clock-out before clock-in yields a negative total; it is not clamped.
pub fn work_hours(time_in: &str, time_out: &str, break_minutes: u32) -> String {
    if time_in.trim().is_empty() || time_out.trim().is_empty() {
        return EMPTY_WORK_HOURS.to_string();
    }

    match try_minutes_between(time_in, time_out) {
        Ok(minutes) => format!("{:.2}", (minutes - f64::from(break_minutes)) / 60.0),
        Err(e) => {
            log_format_fallback("work_hours", &format!("{} -> {}", time_in, time_out), &e.to_string());
            EMPTY_WORK_HOURS.to_string()
        }
    }
}

/// A clock face rendered for one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DigitalClock {
    /// `HH:MM:SS`, 24-hour.
    pub time_24: String,
    /// `HH:MM:SS AM/PM`, hour zero-padded.
    pub time_12: String,
    /// `Weekday, Month D, YYYY`.
    pub date_long: String,
    /// Zone label in effect at the instant, e.g. `EDT` in summer.
    pub zone: String,
}

/// Renders the digital clock face for `instant` in `zone`.
pub fn digital_clock(instant: &DateTime<Utc>, zone: Zone) -> DigitalClock {
    let local = zone.project(instant);
    DigitalClock {
        time_24: local.format("%H:%M:%S").to_string(),
        time_12: local.format("%I:%M:%S %p").to_string(),
        date_long: local.format("%A, %B %-d, %Y").to_string(),
        zone: zone.label_at(instant),
    }
}

/// Renders a second count as `MM:SS`; minutes are not wrapped at 60.
pub fn format_seconds_as_clock(total_seconds: u64) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}
