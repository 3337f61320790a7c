#![allow(clippy::unwrap_used)]

use attendance_time::services::Zone;
use attendance_time::utils::datetime::*;
use attendance_time::TimeError;
use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

#[test]
fn test_twelve_hour_preserves_every_clock_reading() {
    for hour in 0..24u32 {
        for minute in 0..60u32 {
            let input = format!("{:02}:{:02}", hour, minute);
            let rendered = format_to_12_hour(parse_time_of_day(&input).unwrap());

            let expected_hour = match hour % 12 {
                0 => 12,
                h => h,
            };
            let expected_period = if hour >= 12 { "PM" } else { "AM" };
            assert_eq!(
                rendered,
                format!("{}:{:02} {}", expected_hour, minute, expected_period),
                "Wrong 12-hour rendering for {}",
                input
            );
        }
    }
}

#[test]
fn test_empty_time_renders_placeholder() {
    assert_eq!(format_time_12h(""), "--:-- --");
    assert_eq!(format_time_12h("   "), "--:-- --");
    assert!(matches!(parse_time_of_day(""), Err(TimeError::InvalidFormat(_))));
}

#[test]
fn test_malformed_time_renders_placeholder() {
    let malformed = vec!["0900", "9", "ab:cd", "24:00", "12:61", "2024-01-15", "T:", "08:30 PM", "12:30abc"];

    for input in malformed {
        assert_eq!(format_time_12h(input), TIME_PLACEHOLDER, "Should fall back for: {}", input);
        assert!(parse_time_of_day(input).is_err(), "Should reject: {}", input);
    }
}

#[test]
fn test_iso_datetime_uses_time_as_written() {
    assert_eq!(format_time_12h("2024-01-15T08:30:00.000Z"), "8:30 AM");
    assert_eq!(format_time_12h("2024-01-15T20:05:00+08:00"), "8:05 PM");
    assert_eq!(format_time_12h("2024-01-15 00:15:00"), "12:15 AM");
}

#[test]
fn test_minutes_between_identity_and_antisymmetry() {
    let samples = ["00:00", "08:15", "12:00", "13:45:30", "23:59:59"];

    for a in samples {
        assert_eq!(minutes_between(a, a), 0.0);
        for b in samples {
            assert_eq!(minutes_between(a, b), -minutes_between(b, a), "{} vs {}", a, b);
        }
    }
}

#[test]
fn test_minutes_between_values() {
    assert_eq!(minutes_between("09:00", "17:00"), 480.0);
    assert_eq!(minutes_between("17:00", "09:00"), -480.0);
    assert_eq!(minutes_between("08:30", "08:45"), 15.0);
}

#[test]
fn test_minutes_between_empty_or_malformed_is_zero() {
    assert_eq!(minutes_between("", "17:00"), 0.0);
    assert_eq!(minutes_between("09:00", ""), 0.0);
    assert_eq!(minutes_between("09:00", "late"), 0.0);
    assert!(try_minutes_between("09:00", "late").is_err());
}

#[test]
fn test_minutes_between_trailing_text_is_zero() {
    assert_eq!(minutes_between("09:00", "05:00 PM"), 0.0);
    assert!(try_minutes_between("09:00", "05:00 PM").is_err());
    assert_eq!(minutes_between("2024-01-15T09:00:00+08:00", "2024-01-15T10:30:00+08:00"), 90.0);
}

#[test]
fn test_work_hours() {
    assert_eq!(work_hours("09:00", "17:00", 60), "7.00");
    assert_eq!(work_hours("09:00", "17:00", 0), "8.00");
    assert_eq!(work_hours("08:45", "17:30", 45), "8.00");
    assert_eq!(work_hours("09:00", "09:20", 0), "0.33");
}

#[test]
fn test_work_hours_missing_end() {
    assert_eq!(work_hours("", "17:00", 60), EMPTY_WORK_HOURS);
    assert_eq!(work_hours("09:00", "", 0), "0.00");
}

#[test]
fn test_work_hours_malformed_end_ignores_break() {
    assert_eq!(work_hours("bogus", "17:00", 60), EMPTY_WORK_HOURS);
    assert_eq!(work_hours("09:00", "5 PM", 30), "0.00");
    assert_eq!(work_hours("09:00 AM", "17:00", 60), "0.00");
}

#[test]
fn test_work_hours_negative_not_clamped() {
    assert_eq!(work_hours("18:00", "09:00", 0), "-9.00");
}

#[test]
fn test_format_seconds_as_clock() {
    assert_eq!(format_seconds_as_clock(0), "00:00");
    assert_eq!(format_seconds_as_clock(59), "00:59");
    assert_eq!(format_seconds_as_clock(125), "02:05");
    assert_eq!(format_seconds_as_clock(3600), "60:00");
    assert_eq!(format_seconds_as_clock(6000), "100:00");
}

#[test]
fn test_date_and_time_in_zone() {
    let instant = utc(2024, 1, 1, 3, 0, 0);
    assert_eq!(format_date_iso_in_zone(&instant, Zone::Pht), "2024-01-01");
    assert_eq!(format_date_iso_in_zone(&instant, Zone::Est), "2023-12-31");
    assert_eq!(format_time_hms_in_zone(&instant, Zone::Pht), "11:00:00");
    assert_eq!(format_time_hms_in_zone(&instant, Zone::Est), "22:00:00");
}

#[test]
fn test_eastern_daylight_saving() {
    let summer = utc(2024, 7, 1, 12, 0, 0);
    let winter = utc(2024, 1, 1, 12, 0, 0);
    assert_eq!(format_time_hms_in_zone(&summer, Zone::Est), "08:00:00");
    assert_eq!(format_time_hms_in_zone(&winter, Zone::Est), "07:00:00");
}

#[test]
fn test_iso_date_pattern_and_round_trip() {
    let instants = [
        utc(1999, 12, 31, 23, 59, 59),
        utc(2024, 2, 29, 16, 0, 0),
        utc(2024, 3, 10, 6, 30, 0),
        utc(2025, 11, 2, 5, 59, 0),
        utc(2026, 10, 16, 0, 0, 0),
    ];

    for instant in instants {
        for zone in [Zone::Pht, Zone::Est] {
            let rendered = format_date_iso_in_zone(&instant, zone);
            assert_eq!(rendered.len(), 10, "Bad length: {}", rendered);
            assert_eq!(&rendered[4..5], "-");
            assert_eq!(&rendered[7..8], "-");

            let parsed = NaiveDate::parse_from_str(&rendered, "%Y-%m-%d").unwrap();
            let local = zone.project(&instant);
            assert_eq!(parsed.year(), local.year());
            assert_eq!(parsed.month(), local.month());
            assert_eq!(parsed.day(), local.day());
        }
    }
}

#[test]
fn test_format_long_date() {
    assert_eq!(format_long_date("2024-01-15"), "January 15, 2024");
    assert_eq!(format_long_date("2024-01-15T20:00:00Z"), "January 16, 2024");
    assert_eq!(format_long_date("2024-03-05T09:00:00+08:00"), "March 5, 2024");
    assert_eq!(format_long_date("2024-03-05 09:00:00"), "March 5, 2024");
}

#[test]
fn test_format_long_date_invalid() {
    assert_eq!(format_long_date("not a date"), INVALID_DATE);
    assert_eq!(format_long_date(""), "Invalid date");
    assert_eq!(format_long_date("2024-13-01"), "Invalid date");
}

#[test]
fn test_digital_clock_in_both_zones() {
    let instant = utc(2024, 1, 15, 16, 7, 8);

    let pht = digital_clock(&instant, Zone::Pht);
    assert_eq!(pht.time_24, "00:07:08");
    assert_eq!(pht.time_12, "12:07:08 AM");
    assert_eq!(pht.date_long, "Tuesday, January 16, 2024");

    let est = digital_clock(&instant, Zone::Est);
    assert_eq!(est.time_24, "11:07:08");
    assert_eq!(est.time_12, "11:07:08 AM");
    assert_eq!(est.date_long, "Monday, January 15, 2024");
    assert_eq!(est.zone, "EST");
}

#[test]
fn test_digital_clock_zone_label_in_summer() {
    let face = digital_clock(&utc(2024, 7, 1, 16, 0, 0), Zone::Est);
    assert_eq!(face.time_24, "12:00:00");
    assert_eq!(face.zone, "EDT");
}
