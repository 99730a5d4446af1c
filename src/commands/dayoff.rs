use crate::libs::duty::DAY_OFF_REMARK;
use crate::libs::messages::Message;
use crate::libs::roster::Roster;
use crate::{msg_error_anyhow, msg_success};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct DayOffArgs {
    #[arg(long, short, help = "Date to toggle (YYYY-MM-DD)")]
    date: String,
    #[arg(long, help = "Roster JSON file (defaults to the configured path)")]
    roster: Option<PathBuf>,
}

/// Toggles a date between duty day and explicit day off.
///
/// Marking a day off clears every duty, flight, standby and sector field
/// before the month is recomputed; a change to one day can retroactively
/// alter the rest, disruptive-run and days-off status of every later day.
pub fn cmd(args: DayOffArgs) -> Result<()> {
    let date = NaiveDate::parse_from_str(&args.date, "%Y-%m-%d")
        .map_err(|_| msg_error_anyhow!(Message::InvalidDate(args.date.clone())))?;

    let path = super::roster_path(args.roster)?;
    let mut roster = Roster::load(&path)?;

    let record = roster.day_mut(date);
    let was_explicit_off = record.remarks.as_deref().map(str::trim) == Some(DAY_OFF_REMARK);
    if was_explicit_off {
        record.remarks = None;
    } else {
        record.clear_to_day_off();
    }
    roster.save(&path)?;

    // Recompute so the saved roster and the displayed state stay coherent.
    super::compute_month(&roster)?;

    if was_explicit_off {
        msg_success!(Message::DayOffCleared(args.date));
    } else {
        msg_success!(Message::DayOffSet(args.date));
    }
    Ok(())
}
