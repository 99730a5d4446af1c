//! Window-of-Circadian-Low (WOCL) disruptive duty tracking.
//!
//! A duty is disruptive when it starts or ends inside the WOCL
//! (01:00-06:59 local); an overnight duty that starts outside the window
//! but ends inside it still counts. The consecutive/rolling caps apply to
//! helicopter operations only.

use crate::libs::clock;
use crate::libs::duty::{AircraftCategory, DutyRecord};
use crate::libs::monthly::{DisruptiveDutyDetails, MonthlyDayRecord};
use chrono::Duration;

const WOCL_START: f64 = 1.0;
const WOCL_END: f64 = 7.0; // exclusive: 06:59 is inside, 07:00 is not

/// Maximum consecutive disruptive duty days.
const MAX_CONSECUTIVE: usize = 3;
/// Maximum disruptive duty days within any rolling 7-day window.
const MAX_IN_SEVEN_DAYS: usize = 4;
/// Hours entirely free of disruptive duty needed to break a run.
const RUN_BREAK_HOURS: i64 = 34;

fn in_wocl(clock: f64) -> bool {
    (WOCL_START..WOCL_END).contains(&clock)
}

/// Whether the record's duty touches the WOCL.
pub fn is_duty_disruptive(record: &DutyRecord) -> bool {
    let start = record.duty_start().and_then(clock::parse_clock);
    let end = record.duty_end().and_then(clock::parse_clock);
    start.map_or(false, in_wocl) || end.map_or(false, in_wocl)
}

/// Validates the disruptive-duty caps for the last day of `days`.
///
/// `days` is the combined chronological record set ending at the evaluated
/// date. Rules are checked in order (consecutive run, then 7-day count) and
/// the first breach produces the single violation message for the date.
pub fn evaluate(days: &[MonthlyDayRecord], category: Option<AircraftCategory>) -> DisruptiveDutyDetails {
    let current = match days.last() {
        Some(current) => current,
        None => return DisruptiveDutyDetails::default(),
    };
    let is_disruptive = is_duty_disruptive(&current.duty);
    let mut details = DisruptiveDutyDetails { is_disruptive, disruptive_violation: None };

    // The caps are a helicopter rule, and only a disruptive day can tip one.
    if category != Some(AircraftCategory::Helicopter) || !is_disruptive {
        return details;
    }

    let run = run_length(days);
    if run > MAX_CONSECUTIVE {
        details.disruptive_violation = Some(format!(
            "{} consecutive disruptive duties exceed the maximum of {} (a run is only broken by {}h free of disruptive duty).",
            run, MAX_CONSECUTIVE, RUN_BREAK_HOURS
        ));
        return details;
    }

    let window_start = current.duty.date - Duration::days(6);
    let in_window = days
        .iter()
        .filter(|day| day.duty.date >= window_start)
        .filter(|day| is_duty_disruptive(&day.duty))
        .count();
    if in_window > MAX_IN_SEVEN_DAYS {
        details.disruptive_violation = Some(format!(
            "{} disruptive duties within 7 days exceed the maximum of {}.",
            in_window, MAX_IN_SEVEN_DAYS
        ));
    }
    details
}

/// Length of the disruptive run ending on the last day of `days`.
///
/// A normal duty inside the gap does not reset the run; only a stretch of at
/// least 34 consecutive hours free of disruptive duty does.
fn run_length(days: &[MonthlyDayRecord]) -> usize {
    let (current, earlier) = match days.split_last() {
        Some(split) => split,
        None => return 0,
    };
    let mut run = 1;
    let mut later_start = current
        .duty
        .duty_start()
        .and_then(|start| clock::clock_on(current.duty.date, start));

    for day in earlier.iter().rev() {
        if !is_duty_disruptive(&day.duty) {
            continue;
        }
        let end = day.duty.end_of_working();
        if let (Some(end), Some(start)) = (end, later_start) {
            if (start - end) >= Duration::hours(RUN_BREAK_HOURS) {
                break;
            }
        }
        run += 1;
        later_start = day
            .duty
            .duty_start()
            .and_then(|start| clock::clock_on(day.duty.date, start));
    }
    run
}
