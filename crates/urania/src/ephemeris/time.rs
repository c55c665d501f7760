//! Civil date/time to Julian Day conversion.
//!
//! Offsets are handled arithmetically; there is no timezone database lookup.

use crate::error::ChartError;
use chrono::DateTime;
use lazy_static::lazy_static;
use regex::Regex;

/// Julian Day of the J2000.0 epoch
pub const J2000: f64 = 2451545.0;
/// Julian Day of the Unix epoch
pub const UNIX_EPOCH_JD: f64 = 2440587.5;
pub const MILLIS_PER_DAY: f64 = 86_400_000.0;

lazy_static! {
    static ref OFFSET_PATTERN: Regex =
        Regex::new(r"([+-])(\d{2}):(\d{2})").expect("offset pattern is valid");
}

/// Parse a `±HH:MM` offset into signed minutes.
///
/// A string that does not contain the pattern yields 0.
pub fn parse_timezone_offset(value: &str) -> i32 {
    let Some(caps) = OFFSET_PATTERN.captures(value) else {
        return 0;
    };
    let hours: i32 = caps[2].parse().unwrap_or(0);
    let minutes: i32 = caps[3].parse().unwrap_or(0);
    let magnitude = hours * 60 + minutes;
    if &caps[1] == "-" {
        -magnitude
    } else {
        magnitude
    }
}

/// Epoch milliseconds for the given local date, time and offset.
///
/// The literal timestamp is read with its offset attached, and the offset is
/// then subtracted once more from the resulting instant.
pub fn utc_millis(date: &str, time: &str, timezone: &str) -> Result<i64, ChartError> {
    let stamp = format!("{}T{}:00{}", date.trim(), time.trim(), timezone.trim());
    let instant =
        DateTime::parse_from_rfc3339(&stamp).map_err(|e| ChartError::InvalidDateTime {
            date: date.to_string(),
            time: time.to_string(),
            timezone: timezone.to_string(),
            message: e.to_string(),
        })?;
    let offset_minutes = i64::from(parse_timezone_offset(timezone));
    Ok(instant.timestamp_millis() - offset_minutes * 60_000)
}

/// Convert Unix epoch milliseconds to a Julian Day
pub fn millis_to_julian_day(millis: i64) -> f64 {
    millis as f64 / MILLIS_PER_DAY + UNIX_EPOCH_JD
}

/// Convert local date, time and offset strings to a Julian Day
pub fn to_julian_day(date: &str, time: &str, timezone: &str) -> Result<f64, ChartError> {
    utc_millis(date, time, timezone).map(millis_to_julian_day)
}
