use crate::libs::messages::Message;
use crate::libs::roster::Roster;
use crate::libs::view::View;
use crate::{msg_print, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[arg(long, help = "Roster JSON file (defaults to the configured path)")]
    roster: Option<PathBuf>,
}

pub fn cmd(args: ReportArgs) -> Result<()> {
    let path = super::roster_path(args.roster)?;
    let roster = Roster::load(&path)?;
    let days = super::compute_month(&roster)?;

    msg_print!(Message::ReportHeader(roster.month.clone()), true);
    View::month(&days)?;

    let violations = days.iter().filter(|day| day.violation().is_some()).count();
    if violations > 0 {
        msg_warning!(Message::ViolationsFound(violations));
    } else {
        msg_success!(Message::NoViolationsFound);
    }
    Ok(())
}
