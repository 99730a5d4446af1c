//! Clock string parsing and duration arithmetic.
//!
//! Duty records carry their times as raw "HH:MM" strings exactly as they were
//! entered. Everything downstream (FDP brackets, rest gaps, rolling totals)
//! works in decimal hours, so this module is the single place where clock
//! text is parsed, formatted and turned into elapsed durations.
//!
//! Malformed or missing input never produces an error: it degrades to a zero
//! value so that one incomplete day cannot abort the recalculation of a
//! whole month. A day with unusable times simply renders as "not computable".

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Parses a "HH:MM" clock string into decimal hours, if well formed.
///
/// Accepts surrounding whitespace. Hours must be 0-23 and minutes 0-59;
/// anything else (including an empty string) yields `None`.
pub fn parse_clock(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    let (hours, minutes) = trimmed.split_once(':')?;
    let hours: u32 = hours.trim().parse().ok()?;
    let minutes: u32 = minutes.trim().parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(hours as f64 + minutes as f64 / 60.0)
}

/// Parses a "HH:MM" clock string into decimal hours; invalid input yields 0.
pub fn time_to_decimal(text: &str) -> f64 {
    parse_clock(text).unwrap_or(0.0)
}

/// Formats decimal hours back to "HH:MM".
///
/// `compact` omits the leading zero padding on the hour, which is what the
/// fixed-column print view expects for narrow cells.
pub fn decimal_to_time(hours: f64, compact: bool) -> String {
    let total_minutes = (hours * 60.0).round().max(0.0) as i64;
    let h = total_minutes / 60;
    let m = total_minutes % 60;
    if compact {
        format!("{}:{:02}", h, m)
    } else {
        format!("{:02}:{:02}", h, m)
    }
}

/// Elapsed decimal hours from `start` to `end` within one duty cycle.
///
/// When `end` is numerically earlier than `start` the duty is assumed to run
/// past midnight and 24h is added. Missing or malformed input returns 0.
pub fn duration_between(start: &str, end: &str) -> f64 {
    match (parse_clock(start), parse_clock(end)) {
        (Some(start), Some(end)) => {
            if end < start {
                (24.0 - start) + end
            } else {
                end - start
            }
        }
        _ => 0.0,
    }
}

/// `duration_between` over the optional fields duty records carry.
pub fn opt_duration(start: Option<&str>, end: Option<&str>) -> f64 {
    match (start, end) {
        (Some(start), Some(end)) => duration_between(start, end),
        _ => 0.0,
    }
}

/// Anchors a clock string onto a calendar date.
pub fn clock_on(date: NaiveDate, text: &str) -> Option<NaiveDateTime> {
    let decimal = parse_clock(text)?;
    let minutes = (decimal * 60.0).round() as u32;
    let time = NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0)?;
    Some(date.and_time(time))
}

/// Anchors an end-of-window clock onto a date, rolling to the next calendar
/// day when the window wraps past midnight.
pub fn clock_end_on(date: NaiveDate, start: &str, end: &str) -> Option<NaiveDateTime> {
    let start_decimal = parse_clock(start)?;
    let end_decimal = parse_clock(end)?;
    let end_dt = clock_on(date, end)?;
    if end_decimal < start_decimal {
        Some(end_dt + Duration::days(1))
    } else {
        Some(end_dt)
    }
}

/// Elapsed decimal hours between two timestamps, clamped to zero.
pub fn hours_between(from: NaiveDateTime, to: NaiveDateTime) -> f64 {
    let minutes = (to - from).num_minutes();
    (minutes.max(0) as f64) / 60.0
}
