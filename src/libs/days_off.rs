//! Days-off entitlement validation.
//!
//! Operates on the combined chronological record set ending at the evaluated
//! date. A calendar day counts as a day off when its record says so or when
//! no record exists at all: absence of duty implies rest, which also makes
//! the multi-week quotas pass harmlessly while history is still sparse.
//!
//! Rules are evaluated in regulation order and the first failure produces
//! the single violation message for the date. The minimum-rest rule listed
//! alongside these in the regulation is handled by the rest validator and
//! surfaced first by the orchestrator's merge, so it is not re-checked here.

use crate::libs::clock;
use crate::libs::duty::AircraftCategory;
use crate::libs::monthly::{DaysOffValidationDetails, MonthlyDayRecord};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Maximum consecutive duty days before a day off, both categories.
const MAX_CONSECUTIVE_DUTY_DAYS: usize = 7;
/// Minimum length of a single day off, in hours.
const HELI_SINGLE_DAY_OFF_HOURS: f64 = 36.0;
const FW_SINGLE_DAY_OFF_HOURS: f64 = 34.0;
/// Days off required in any 14 consecutive days (helicopter).
const HELI_MIN_OFF_14D: usize = 3;
/// Days off required in any 28 consecutive days.
const MIN_OFF_28D: usize = 7;
/// Days off required in any 84 days (average 8 per 4-week period).
const MIN_OFF_84D: usize = 24;

/// Lookup over the combined record set answering "was this date a day off".
struct DayOffCalendar<'a> {
    days: &'a [MonthlyDayRecord],
}

impl<'a> DayOffCalendar<'a> {
    fn new(days: &'a [MonthlyDayRecord]) -> Self {
        DayOffCalendar { days }
    }

    fn is_off(&self, date: NaiveDate) -> bool {
        match self.days.binary_search_by_key(&date, |day| day.duty.date) {
            Ok(index) => self.days[index].is_day_off,
            Err(_) => true,
        }
    }

    fn record(&self, date: NaiveDate) -> Option<&MonthlyDayRecord> {
        self.days
            .binary_search_by_key(&date, |day| day.duty.date)
            .ok()
            .map(|index| &self.days[index])
    }

    fn count_off(&self, end: NaiveDate, window_days: i64) -> usize {
        (0..window_days)
            .map(|offset| end - Duration::days(offset))
            .filter(|date| self.is_off(*date))
            .count()
    }

    fn has_consecutive_off_pair(&self, end: NaiveDate, window_days: i64) -> bool {
        (0..window_days - 1)
            .map(|offset| end - Duration::days(offset))
            .any(|date| self.is_off(date) && self.is_off(date - Duration::days(1)))
    }

    /// Consecutive duty days ending on `date` inclusive.
    fn duty_run_ending(&self, date: NaiveDate) -> usize {
        let mut run = 0;
        let mut cursor = date;
        while !self.is_off(cursor) {
            run += 1;
            cursor -= Duration::days(1);
        }
        run
    }

    /// Consecutive days off ending on `date` inclusive.
    fn off_run_ending(&self, date: NaiveDate) -> usize {
        let earliest = match self.days.first() {
            Some(first) => first.duty.date,
            None => return 0,
        };
        let mut run = 0;
        let mut cursor = date;
        while cursor >= earliest && self.is_off(cursor) {
            run += 1;
            cursor -= Duration::days(1);
        }
        run
    }
}

/// Number of full local nights (22:00 to 06:00 next day) inside a free block.
fn local_nights_covered(from: NaiveDateTime, to: NaiveDateTime) -> usize {
    let night_start = NaiveTime::from_hms_opt(22, 0, 0).expect("valid time");
    let night_end = NaiveTime::from_hms_opt(6, 0, 0).expect("valid time");
    let mut nights = 0;
    let mut date = from.date();
    while date < to.date() {
        let start = date.and_time(night_start);
        let end = (date + Duration::days(1)).and_time(night_end);
        if start >= from && end <= to {
            nights += 1;
        }
        date += Duration::days(1);
    }
    nights
}

/// Evaluates every days-off rule for the last day of `days`.
pub fn evaluate(days: &[MonthlyDayRecord], category: Option<AircraftCategory>) -> DaysOffValidationDetails {
    let current = match days.last() {
        Some(current) => current,
        None => return DaysOffValidationDetails::default(),
    };
    let date = current.duty.date;
    let calendar = DayOffCalendar::new(days);

    // Maximum consecutive duty days applies to both categories.
    if !current.is_day_off {
        let run = calendar.duty_run_ending(date);
        if run > MAX_CONSECUTIVE_DUTY_DAYS {
            return DaysOffValidationDetails {
                violation: Some(format!(
                    "{} consecutive duty days exceed the maximum of {}.",
                    run, MAX_CONSECUTIVE_DUTY_DAYS
                )),
            };
        }
    }

    let category = match category {
        Some(category) => category,
        None => return DaysOffValidationDetails::default(),
    };
    let single_day_off_hours = match category {
        AircraftCategory::Helicopter => HELI_SINGLE_DAY_OFF_HOURS,
        AircraftCategory::FixedWing => FW_SINGLE_DAY_OFF_HOURS,
    };

    // The single-day-off tests fire on the first duty day after the block.
    if !current.is_day_off && calendar.duty_run_ending(date) == 1 {
        let off_block = calendar.off_run_ending(date - Duration::days(1));
        if off_block == 1 {
            if let Some(violation) =
                check_single_day_off(&calendar, current, single_day_off_hours)
            {
                return DaysOffValidationDetails { violation: Some(violation) };
            }
            if category == AircraftCategory::Helicopter {
                let prior_run =
                    calendar.duty_run_ending(date - Duration::days(1 + off_block as i64));
                if prior_run >= MAX_CONSECUTIVE_DUTY_DAYS {
                    return DaysOffValidationDetails {
                        violation: Some(
                            "A single day off after 7 or more consecutive duty days does not satisfy the required 2 consecutive days off.".to_string(),
                        ),
                    };
                }
            }
        }
    }

    match category {
        AircraftCategory::Helicopter => {
            let off_14d = calendar.count_off(date, 14);
            if off_14d < HELI_MIN_OFF_14D {
                return DaysOffValidationDetails {
                    violation: Some(format!(
                        "Only {} days off in the last 14 days (minimum {} including one block of 2 consecutive).",
                        off_14d, HELI_MIN_OFF_14D
                    )),
                };
            }
            if !calendar.has_consecutive_off_pair(date, 14) {
                return DaysOffValidationDetails {
                    violation: Some(
                        "No block of 2 consecutive days off in the last 14 days.".to_string(),
                    ),
                };
            }
        }
        AircraftCategory::FixedWing => {
            if !calendar.has_consecutive_off_pair(date, 14) {
                return DaysOffValidationDetails {
                    violation: Some(
                        "No block of 2 consecutive days off in the last 14 days.".to_string(),
                    ),
                };
            }
        }
    }

    let off_28d = calendar.count_off(date, 28);
    if off_28d < MIN_OFF_28D {
        return DaysOffValidationDetails {
            violation: Some(format!(
                "Only {} days off in the last 28 days (minimum {}).",
                off_28d, MIN_OFF_28D
            )),
        };
    }

    let off_84d = calendar.count_off(date, 84);
    if off_84d < MIN_OFF_84D {
        return DaysOffValidationDetails {
            violation: Some(format!(
                "Only {} days off in the last 84 days (minimum {}, an average of 8 per 4 weeks).",
                off_84d, MIN_OFF_84D
            )),
        };
    }

    DaysOffValidationDetails::default()
}

/// Measures the free block around a single day off: from the end of the
/// previous duty to the start of the next. The block must reach the minimum
/// length and span two local nights, not merely be "a day with no entry".
fn check_single_day_off(
    calendar: &DayOffCalendar<'_>,
    current: &MonthlyDayRecord,
    min_hours: f64,
) -> Option<String> {
    let previous_duty_date = current.duty.date - Duration::days(2);
    let previous_end = calendar
        .record(previous_duty_date)
        .and_then(|day| day.duty.end_of_working())?;
    let current_start = current
        .duty
        .working_start()
        .and_then(|start| clock::clock_on(current.duty.date, start))?;

    let elapsed = clock::hours_between(previous_end, current_start);
    if elapsed < min_hours || local_nights_covered(previous_end, current_start) < 2 {
        return Some(format!(
            "Single day off of {:.1}h does not satisfy the {:.0}h minimum spanning two local nights.",
            elapsed, min_hours
        ));
    }
    None
}
