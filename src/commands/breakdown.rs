use crate::libs::messages::Message;
use crate::libs::roster::Roster;
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_error_anyhow, msg_print};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct BreakdownArgs {
    #[arg(long, short, help = "Date to inspect (YYYY-MM-DD)")]
    date: String,
    #[arg(long, help = "Roster JSON file (defaults to the configured path)")]
    roster: Option<PathBuf>,
}

pub fn cmd(args: BreakdownArgs) -> Result<()> {
    let date = NaiveDate::parse_from_str(&args.date, "%Y-%m-%d")
        .map_err(|_| msg_error_anyhow!(Message::InvalidDate(args.date.clone())))?;

    let path = super::roster_path(args.roster)?;
    let roster = Roster::load(&path)?;
    let days = super::compute_month(&roster)?;

    let day = match days.iter().find(|day| day.duty.date == date) {
        Some(day) => day,
        None => msg_bail_anyhow!(Message::NoRecordForDate(args.date)),
    };

    msg_print!(Message::BreakdownHeader(args.date.clone()), true);
    View::breakdown(day)?;
    Ok(())
}
