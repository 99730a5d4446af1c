//! Roster file loading and month expansion.
//!
//! The engine itself has no storage; this module is the shim over the
//! external duty-record providers. A roster is a JSON document holding the
//! pilot profile, the target month, the prior history and the raw records
//! for the displayed month. History is re-sorted and filtered defensively so
//! the engine can rely on its input invariants.

use crate::libs::duty::{DutyRecord, PilotProfile};
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::{Context, Result};
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roster {
    pub pilot: PilotProfile,
    /// Target month as "YYYY-MM".
    pub month: String,
    #[serde(default)]
    pub history: Vec<DutyRecord>,
    #[serde(default)]
    pub days: Vec<DutyRecord>,
}

impl Roster {
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .map_err(|_| msg_error_anyhow!(Message::RosterNotFound(path.display().to_string())))?;
        let roster: Roster = serde_json::from_str(&data)
            .with_context(|| Message::RosterParseFailed(path.display().to_string()).to_string())?;
        roster.first_of_month()?;
        Ok(roster)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)
            .map_err(|_| msg_error_anyhow!(Message::RosterSaveFailed(path.display().to_string())))?;
        Ok(())
    }

    /// First calendar day of the target month.
    pub fn first_of_month(&self) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(&format!("{}-01", self.month.trim()), "%Y-%m-%d")
            .map_err(|_| msg_error_anyhow!(Message::InvalidMonth(self.month.clone())))
    }

    /// One record per calendar day of the target month, ascending, with
    /// blank days represented by date-only entries. Supplied records dated
    /// outside the month are ignored.
    pub fn month_days(&self) -> Result<Vec<DutyRecord>> {
        let first = self.first_of_month()?;
        let next_month = if first.month() == 12 {
            NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
        }
        .expect("valid month boundary");

        let mut by_date: BTreeMap<NaiveDate, DutyRecord> = self
            .days
            .iter()
            .filter(|record| record.date >= first && record.date < next_month)
            .map(|record| (record.date, record.clone()))
            .collect();

        let mut days = Vec::new();
        let mut date = first;
        while date < next_month {
            days.push(by_date.remove(&date).unwrap_or_else(|| DutyRecord::blank(date)));
            date += Duration::days(1);
        }
        Ok(days)
    }

    /// Prior history sorted ascending, with anything dated inside or after
    /// the target month filtered out.
    pub fn sorted_history(&self) -> Result<Vec<DutyRecord>> {
        let first = self.first_of_month()?;
        let mut history: Vec<DutyRecord> = self
            .history
            .iter()
            .filter(|record| record.date < first)
            .cloned()
            .collect();
        history.sort_by_key(|record| record.date);
        history.dedup_by_key(|record| record.date);
        Ok(history)
    }

    /// Mutable access to the raw record for `date`, inserting a blank entry
    /// when the day has none yet. Used by the day-off toggle.
    pub fn day_mut(&mut self, date: NaiveDate) -> &mut DutyRecord {
        if let Some(index) = self.days.iter().position(|record| record.date == date) {
            return &mut self.days[index];
        }
        self.days.push(DutyRecord::blank(date));
        self.days.last_mut().expect("record just pushed")
    }
}
