//! Rest period computation and validation.
//!
//! Rest is measured from the most recent prior duty or standby end to the
//! start of the day being evaluated. The statutory floor is 12 hours, but a
//! pilot who just worked a longer duty needs rest at least as long as that
//! duty.

use crate::libs::clock;
use crate::libs::duty::DutyRecord;
use crate::libs::monthly::{MonthlyDayRecord, RestPeriodDetails};

/// Statutory minimum rest between duties, in hours.
pub const MIN_REST_HOURS: f64 = 12.0;

/// Evaluates rest for `current` against the records strictly before it.
///
/// `history` must be sorted ascending by date and contain only dates earlier
/// than the evaluated day. When no prior record carries an end time,
/// `has_history` is false and no violation is raised: insufficient data is
/// not non-compliance.
pub fn evaluate(history: &[MonthlyDayRecord], current: &DutyRecord) -> RestPeriodDetails {
    let previous = history
        .iter()
        .rev()
        .find_map(|day| day.duty.end_of_working().map(|end| (day, end)));

    let (previous, previous_end) = match previous {
        Some(found) => found,
        None => return RestPeriodDetails { has_history: false, rest_period: 0.0, rest_violation: None },
    };

    let current_start = current
        .working_start()
        .and_then(|start| clock::clock_on(current.date, start));
    let current_start = match current_start {
        Some(start) => start,
        // Day off or unusable start: rest is trivially satisfied.
        None => return RestPeriodDetails { has_history: true, rest_period: 0.0, rest_violation: None },
    };

    let rest_period = clock::hours_between(previous_end, current_start);

    let previous_duty_length = if previous.duty.duty_end().is_some() {
        previous.duty.duty_duration()
    } else {
        previous.duty.standby_duration()
    };
    let required = MIN_REST_HOURS.max(previous_duty_length);

    let rest_violation = if rest_period < required {
        Some(format!(
            "Rest period of {:.1}h is less than the required {:.1}h minimum.",
            rest_period, required
        ))
    } else {
        None
    };

    RestPeriodDetails { has_history: true, rest_period, rest_violation }
}
