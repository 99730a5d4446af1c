//! Full-month recalculation orchestrator.
//!
//! A pure function over in-memory values: given the month's raw inputs, the
//! pilot's prior history and the pilot profile, it walks the month in
//! ascending date order and assembles one composite record per day. Each
//! freshly computed day replaces its placeholder in the running combined
//! history so later days see calculated data when they look backward.
//!
//! Any single-field edit re-runs the whole month: a change to one day's duty
//! end can retroactively alter the rest, disruptive-run and days-off status
//! of every later day, and the windowed sums must stay consistent. The
//! transform is idempotent and side-effect free, so callers may re-run it
//! after every field change.

use crate::libs::duty::{DutyRecord, PilotProfile};
use crate::libs::monthly::{FdpDetails, MonthlyDayRecord};
use crate::libs::{days_off, disruptive, fdp, rest, rolling, split_duty, standby};
use tracing::debug;

/// Recomputes the displayed month.
///
/// `history` must be sorted ascending and exclude the target month; `month`
/// must hold one record per calendar day (blank days as date-only entries),
/// sorted ascending. Returns the month as an ordered list of composite
/// records.
pub fn recalculate_month(
    month: &[DutyRecord],
    history: &[DutyRecord],
    pilot: &PilotProfile,
) -> Vec<MonthlyDayRecord> {
    let category = pilot.category();
    let mut combined: Vec<MonthlyDayRecord> = history
        .iter()
        .cloned()
        .map(MonthlyDayRecord::from_raw)
        .collect();
    let history_len = combined.len();

    for raw in month {
        let record = MonthlyDayRecord::from_raw(raw.clone());
        combined.push(record);
        let index = combined.len() - 1;

        let metrics = rolling::compute(&combined);

        let two_pilot = raw.is_two_pilot_operation || pilot.is_two_pilot_operation;
        let limits = fdp::resolve(standby::bracket_start(raw), category, two_pilot, raw.sectors);
        let extension = split_duty::evaluate(raw, category);
        let fdp_details = FdpDetails {
            max_fdp: if limits.max_fdp > 0.0 {
                limits.max_fdp + extension.fdp_extension
            } else {
                0.0
            },
            max_flight_time: limits.max_flight_time,
            fdp_extension: extension.fdp_extension,
            break_duration: extension.break_duration,
        };

        let rest_details = rest::evaluate(&combined[..index], raw);
        let standby_details = standby::evaluate(raw);
        let days_off_details = days_off::evaluate(&combined[..=index], category);
        let disruptive_details = disruptive::evaluate(&combined[..=index], category);

        let day = &mut combined[index];
        let fdp_violation = if fdp_details.max_fdp > 0.0 && day.actual_fdp > fdp_details.max_fdp {
            Some(format!(
                "Actual FDP of {:.1}h exceeds the maximum of {:.1}h.",
                day.actual_fdp, fdp_details.max_fdp
            ))
        } else {
            None
        };
        let flight_violation = if fdp_details.max_flight_time > 0.0
            && day.flight_duration > fdp_details.max_flight_time
        {
            Some(format!(
                "Flight time of {:.1}h exceeds the maximum of {:.1}h.",
                day.flight_duration, fdp_details.max_flight_time
            ))
        } else {
            None
        };

        // First non-empty message wins, in regulation precedence order.
        let merged = rest_details
            .rest_violation
            .clone()
            .or_else(|| standby_details.standby_violation.clone())
            .or_else(|| disruptive_details.disruptive_violation.clone())
            .or_else(|| days_off_details.violation.clone())
            .or(fdp_violation)
            .or(flight_violation);
        if let Some(violation) = &merged {
            debug!(date = %raw.date, violation = %violation, "duty day in breach");
        }

        day.metrics = metrics;
        day.fdp = fdp_details;
        day.rest = rest_details;
        day.standby = standby_details;
        day.disruptive = disruptive_details;
        day.days_off.violation = merged;
    }

    combined.split_off(history_len)
}
