//! Split-duty FDP extension.
//!
//! A duty interrupted by an on-ground break can extend the allowable FDP.
//! The fixed 30-minute pre/post-flight buffer is always subtracted before
//! the break counts as rest, and the extension earned from the remainder
//! depends on the aircraft category.

use crate::libs::clock;
use crate::libs::duty::{AircraftCategory, DutyRecord};

/// Pre/post-flight buffer carved out of every on-ground break, in hours.
const BREAK_BUFFER: f64 = 0.5;

/// Break duration and the FDP extension it earns.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SplitDutyExtension {
    pub break_duration: f64,
    pub fdp_extension: f64,
}

/// Computes the extension earned by the day's break, if any.
///
/// Applies only when the split-duty flag is set and both break bounds are
/// present. At least one sector must have been flown for the extension to be
/// earned; with zero sectors the extension is reported as 0 regardless of
/// break length.
pub fn evaluate(record: &DutyRecord, category: Option<AircraftCategory>) -> SplitDutyExtension {
    if !record.is_split_duty {
        return SplitDutyExtension::default();
    }
    let break_duration = clock::opt_duration(
        record.break_start.as_deref(),
        record.break_end.as_deref(),
    );
    if break_duration <= 0.0 {
        return SplitDutyExtension::default();
    }
    if record.sectors.unwrap_or(0) == 0 {
        return SplitDutyExtension { break_duration, fdp_extension: 0.0 };
    }
    let effective_rest = (break_duration - BREAK_BUFFER).max(0.0);
    let fdp_extension = match category {
        Some(AircraftCategory::Helicopter) => {
            if effective_rest < 2.0 {
                0.0
            } else if effective_rest <= 3.0 {
                1.0
            } else {
                effective_rest / 2.0
            }
        }
        Some(AircraftCategory::FixedWing) => {
            if effective_rest < 3.0 {
                0.0
            } else {
                effective_rest / 2.0
            }
        }
        None => 0.0,
    };
    SplitDutyExtension { break_duration, fdp_extension }
}
