//! Raw duty record and pilot profile types.
//!
//! A `DutyRecord` is the unit of input: one per pilot per calendar date,
//! holding exactly what was entered on the duty log (clock strings, flags,
//! sector count, per-aircraft flight hours). All derived values live in
//! [`crate::libs::monthly`]; this module only knows how to read the raw
//! fields and derive the handful of facts that depend on nothing else.

use crate::libs::clock;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Remark text that explicitly marks a rest day.
pub const DAY_OFF_REMARK: &str = "DAY OFF";

/// Aircraft category selecting the applicable FDP and days-off rule tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AircraftCategory {
    Helicopter,
    FixedWing,
}

/// Pilot profile as supplied by the staff directory.
///
/// A pilot rated on several categories is validated against the first one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PilotProfile {
    pub name: String,
    #[serde(default)]
    pub aircraft_categories: Vec<AircraftCategory>,
    #[serde(default)]
    pub is_two_pilot_operation: bool,
}

impl PilotProfile {
    /// The category used for rule selection, if any is on record.
    pub fn category(&self) -> Option<AircraftCategory> {
        self.aircraft_categories.first().copied()
    }
}

/// One day of raw duty log input.
///
/// All clock fields are "HH:MM" strings exactly as entered; absent or
/// malformed values degrade to zero durations rather than errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DutyRecord {
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duty_start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duty_end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fdp_start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fdp_end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub break_start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub break_end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standby_on: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standby_off: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight_on: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight_off: Option<String>,
    #[serde(default)]
    pub is_two_pilot_operation: bool,
    #[serde(default)]
    pub is_split_duty: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sectors: Option<u32>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub flight_hours_by_aircraft: BTreeMap<String, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aircraft_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl DutyRecord {
    /// A date-only placeholder standing in for a blank calendar day.
    pub fn blank(date: NaiveDate) -> Self {
        DutyRecord {
            date,
            duty_start: None,
            duty_end: None,
            fdp_start: None,
            fdp_end: None,
            break_start: None,
            break_end: None,
            standby_on: None,
            standby_off: None,
            flight_on: None,
            flight_off: None,
            is_two_pilot_operation: false,
            is_split_duty: false,
            sectors: None,
            flight_hours_by_aircraft: BTreeMap::new(),
            aircraft_type: None,
            remarks: None,
        }
    }

    fn field(value: &Option<String>) -> Option<&str> {
        value.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }

    pub fn duty_start(&self) -> Option<&str> {
        Self::field(&self.duty_start)
    }

    pub fn duty_end(&self) -> Option<&str> {
        Self::field(&self.duty_end)
    }

    pub fn standby_on(&self) -> Option<&str> {
        Self::field(&self.standby_on)
    }

    pub fn standby_off(&self) -> Option<&str> {
        Self::field(&self.standby_off)
    }

    pub fn fdp_start(&self) -> Option<&str> {
        Self::field(&self.fdp_start)
    }

    /// Whether this day counts as a day off: either the explicit remark is
    /// present, or neither a duty nor a standby was started (absence of duty
    /// implies rest).
    pub fn is_day_off(&self) -> bool {
        if self.remarks.as_deref().map(str::trim) == Some(DAY_OFF_REMARK) {
            return true;
        }
        self.duty_start().is_none() && self.standby_on().is_none()
    }

    /// Total duty duration in decimal hours.
    pub fn duty_duration(&self) -> f64 {
        clock::opt_duration(self.duty_start(), self.duty_end())
    }

    /// Standby duration in decimal hours.
    pub fn standby_duration(&self) -> f64 {
        clock::opt_duration(self.standby_on(), self.standby_off())
    }

    /// Duration of the flight duty period in decimal hours.
    pub fn actual_fdp(&self) -> f64 {
        clock::opt_duration(self.fdp_start(), Self::field(&self.fdp_end))
    }

    /// Total flight hours for the day.
    ///
    /// The per-aircraft breakdown takes precedence over the single on/off
    /// pair so richer data is never silently overwritten by a simpler edit.
    pub fn flight_duration(&self) -> f64 {
        if !self.flight_hours_by_aircraft.is_empty() {
            return self.flight_hours_by_aircraft.values().sum();
        }
        clock::opt_duration(Self::field(&self.flight_on), Self::field(&self.flight_off))
    }

    /// The clock at which the day's working period starts: duty start, or
    /// the standby start when only a standby was logged.
    pub fn working_start(&self) -> Option<&str> {
        self.duty_start().or_else(|| self.standby_on())
    }

    /// Timestamp at which the day's working period ends: duty end, falling
    /// back to the standby end. `None` while the day is still open.
    pub fn end_of_working(&self) -> Option<NaiveDateTime> {
        if let (Some(start), Some(end)) = (self.duty_start(), self.duty_end()) {
            return clock::clock_end_on(self.date, start, end);
        }
        if let (Some(on), Some(off)) = (self.standby_on(), self.standby_off()) {
            return clock::clock_end_on(self.date, on, off);
        }
        None
    }

    /// Clears every duty, flight, standby and sector field so the day reads
    /// as an explicit rest day. Used by the "toggle day off" convenience
    /// before the month is recomputed.
    pub fn clear_to_day_off(&mut self) {
        self.duty_start = None;
        self.duty_end = None;
        self.fdp_start = None;
        self.fdp_end = None;
        self.break_start = None;
        self.break_end = None;
        self.standby_on = None;
        self.standby_off = None;
        self.flight_on = None;
        self.flight_off = None;
        self.is_split_duty = false;
        self.sectors = None;
        self.flight_hours_by_aircraft.clear();
        self.aircraft_type = None;
        self.remarks = Some(DAY_OFF_REMARK.to_string());
    }
}
