//! Derived per-day compliance entities and the composite day record.
//!
//! Every validator produces one of the small detail structs below; the
//! orchestrator stitches them together into a [`MonthlyDayRecord`], the value
//! the duty-log grid, the print view and the audit breakdown all consume.
//! Records are plain values with no identity beyond their date: each
//! recalculation discards and rebuilds the whole month.

use crate::libs::duty::DutyRecord;
use serde::{Deserialize, Serialize};

/// Rest since the end of the previous duty or standby.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestPeriodDetails {
    /// False when no prior record with an end time exists. Distinguishes
    /// "no history found" from "rest computed and compliant".
    pub has_history: bool,
    pub rest_period: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest_violation: Option<String>,
}

/// Resolved FDP limits for the day, including any split-duty extension.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FdpDetails {
    pub max_fdp: f64,
    pub max_flight_time: f64,
    pub fdp_extension: f64,
    pub break_duration: f64,
}

/// Window-of-Circadian-Low assessment for the day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisruptiveDutyDetails {
    pub is_disruptive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disruptive_violation: Option<String>,
}

/// Standby duration and cap check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandbyDetails {
    pub standby_duration: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standby_violation: Option<String>,
}

/// Outcome of the days-off rule set for the window ending on this date.
///
/// The orchestrator also merges every other validator's first violation into
/// this slot so each day carries a single headline message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaysOffValidationDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violation: Option<String>,
}

/// Trailing-window cumulative totals ending on and including the day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollingMetrics {
    pub duty_time_7d: f64,
    pub duty_time_28d: f64,
    pub flight_time_3d: f64,
    pub flight_time_7d: f64,
    pub flight_time_28d: f64,
    pub flight_time_90d: f64,
    pub flight_time_365d: f64,
    pub fdp_time_14d: f64,
}

/// The composite per-day result: the raw record plus everything derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyDayRecord {
    #[serde(flatten)]
    pub duty: DutyRecord,
    pub is_day_off: bool,
    pub flight_duration: f64,
    pub actual_fdp: f64,
    pub rest: RestPeriodDetails,
    pub fdp: FdpDetails,
    pub disruptive: DisruptiveDutyDetails,
    pub standby: StandbyDetails,
    pub days_off: DaysOffValidationDetails,
    pub metrics: RollingMetrics,
}

impl MonthlyDayRecord {
    /// Wraps a raw record with only the cheap field-local derivations filled
    /// in. Historical context entries stay in this shape; current-month
    /// entries get their validator details filled by the orchestrator.
    pub fn from_raw(duty: DutyRecord) -> Self {
        let is_day_off = duty.is_day_off();
        let flight_duration = duty.flight_duration();
        let actual_fdp = duty.actual_fdp();
        MonthlyDayRecord {
            duty,
            is_day_off,
            flight_duration,
            actual_fdp,
            rest: RestPeriodDetails::default(),
            fdp: FdpDetails::default(),
            disruptive: DisruptiveDutyDetails::default(),
            standby: StandbyDetails::default(),
            days_off: DaysOffValidationDetails::default(),
            metrics: RollingMetrics::default(),
        }
    }

    /// Duty hours the day contributes to cumulative duty totals: the duty
    /// window plus half of any standby.
    pub fn duty_time_credit(&self) -> f64 {
        self.duty.duty_duration() + crate::libs::standby::STANDBY_DUTY_CREDIT * self.duty.standby_duration()
    }

    /// The headline violation for the day, if any rule was breached.
    pub fn violation(&self) -> Option<&str> {
        self.days_off.violation.as_deref()
    }
}
