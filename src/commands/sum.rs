use crate::libs::messages::Message;
use crate::libs::roster::Roster;
use crate::libs::summary::SummaryCalculator;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct SumArgs {
    #[arg(long, help = "Roster JSON file (defaults to the configured path)")]
    roster: Option<PathBuf>,
}

pub fn cmd(args: SumArgs) -> Result<()> {
    let path = super::roster_path(args.roster)?;
    let roster = Roster::load(&path)?;
    let days = super::compute_month(&roster)?;

    msg_print!(Message::MonthlySummaryHeader(roster.month.clone()), true);
    View::sum(&days.summarize())?;
    Ok(())
}
