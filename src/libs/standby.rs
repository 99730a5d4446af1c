//! Standby duration, cap and call-out handling.
//!
//! Standby is a reserve period that may convert into flight duty via a
//! call-out. Even when it does not, half of its duration still counts toward
//! cumulative duty totals.

use crate::libs::duty::DutyRecord;
use crate::libs::monthly::StandbyDetails;

/// Maximum home-standby duration, in hours.
pub const STANDBY_CAP_HOURS: f64 = 12.0;

/// Fraction of standby time credited toward cumulative duty totals.
pub const STANDBY_DUTY_CREDIT: f64 = 0.5;

/// Computes the day's standby duration and checks it against the cap.
pub fn evaluate(record: &DutyRecord) -> StandbyDetails {
    let standby_duration = record.standby_duration();
    let standby_violation = if standby_duration > STANDBY_CAP_HOURS {
        Some(format!(
            "Standby duration of {:.1}h exceeds the {:.1}h home standby limit.",
            standby_duration, STANDBY_CAP_HOURS
        ))
    } else {
        None
    };
    StandbyDetails { standby_duration, standby_violation }
}

/// Whether the standby converted into flight duty.
///
/// On a call-out the FDP bracket must be selected from the standby start,
/// not the later report time, while the FDP itself is still measured from
/// the actual report time.
pub fn is_call_out(record: &DutyRecord) -> bool {
    record.standby_on().is_some() && (record.duty_start().is_some() || record.fdp_start().is_some())
}

/// The start time the FDP resolver must use for bracket selection.
pub fn bracket_start(record: &DutyRecord) -> Option<&str> {
    if is_call_out(record) {
        record.standby_on()
    } else {
        record.fdp_start().or_else(|| record.duty_start())
    }
}
