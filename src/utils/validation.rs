use crate::error::{Result, TimeError};

/// Checks hour/minute/second ranges of a time of day.
pub fn validate_clock_fields(hour: u32, minute: u32, second: u32) -> Result<()> {
    if hour > 23 {
        return Err(TimeError::InvalidFormat(format!("hour {} out of range 0-23", hour)));
    }

    if minute > 59 {
        return Err(TimeError::InvalidFormat(format!("minute {} out of range 0-59", minute)));
    }

    if second > 59 {
        return Err(TimeError::InvalidFormat(format!("second {} out of range 0-59", second)));
    }

    Ok(())
}

/// Splits a bare `HH:MM[:SS]` string into validated numeric fields.
///
/// The only trailing text accepted is what ISO-8601 allows after the
/// minute or second digits: an optional `.fraction`, then `Z` or `±HH:MM`.
/// This lets the time part of an ISO-8601 datetime pass straight through.
pub fn validate_clock_string(input: &str) -> Result<(u32, u32, u32)> {
    let input = input.trim();

    if input.is_empty() {
        return Err(TimeError::InvalidFormat("time cannot be empty".to_string()));
    }

    let invalid = || TimeError::InvalidFormat(input.to_string());

    let (hour_digits, rest) = split_digits(input);
    if hour_digits.is_empty() || hour_digits.len() > 2 {
        return Err(invalid());
    }

    let (minute_digits, mut rest) = split_digits(rest.strip_prefix(':').ok_or_else(invalid)?);
    if minute_digits.len() != 2 {
        return Err(invalid());
    }

    let mut second_digits = "0";
    if let Some(after_colon) = rest.strip_prefix(':') {
        let (digits, after_seconds) = split_digits(after_colon);
        if digits.len() != 2 {
            return Err(invalid());
        }
        second_digits = digits;
        rest = after_seconds;
    }

    if !is_iso_time_suffix(rest) {
        return Err(invalid());
    }

    let hour = hour_digits.parse().map_err(|_| invalid())?;
    let minute = minute_digits.parse().map_err(|_| invalid())?;
    let second = second_digits.parse().map_err(|_| invalid())?;

    validate_clock_fields(hour, minute, second)?;
    Ok((hour, minute, second))
}

fn split_digits(s: &str) -> (&str, &str) {
    let count = s.bytes().take_while(u8::is_ascii_digit).count();
    s.split_at(count)
}

// Optional `.fraction`, then nothing, `Z`, or `±HH:MM`.
fn is_iso_time_suffix(suffix: &str) -> bool {
    let suffix = match suffix.strip_prefix('.') {
        Some(fraction) => {
            let (digits, rest) = split_digits(fraction);
            if digits.is_empty() {
                return false;
            }
            rest
        }
        None => suffix,
    };

    if suffix.is_empty() || suffix == "Z" || suffix == "z" {
        return true;
    }

    let Some(offset) = suffix.strip_prefix(|c| c == '+' || c == '-') else {
        return false;
    };
    let (hours, rest) = split_digits(offset);
    let Some(minutes) = rest.strip_prefix(':') else {
        return false;
    };

    hours.len() == 2
        && minutes.len() == 2
        && minutes.bytes().all(|b| b.is_ascii_digit())
        && hours.parse::<u32>().is_ok_and(|h| h <= 23)
        && minutes.parse::<u32>().is_ok_and(|m| m <= 59)
}
