pub mod breakdown;
pub mod dayoff;
pub mod export;
pub mod init;
pub mod report;
pub mod sum;

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::monthly::MonthlyDayRecord;
use crate::libs::recalc;
use crate::libs::roster::Roster;
use crate::msg_error_anyhow;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Compute and display the monthly compliance report")]
    Report(report::ReportArgs),
    #[command(about = "Display the full compliance breakdown for one day")]
    Breakdown(breakdown::BreakdownArgs),
    #[command(about = "Get the monthly summary")]
    Sum(sum::SumArgs),
    #[command(about = "Export the computed month to CSV or JSON")]
    Export(export::ExportArgs),
    #[command(about = "Toggle a date between duty day and day off")]
    Dayoff(dayoff::DayOffArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Report(args) => report::cmd(args),
            Commands::Breakdown(args) => breakdown::cmd(args),
            Commands::Sum(args) => sum::cmd(args),
            Commands::Export(args) => export::cmd(args),
            Commands::Dayoff(args) => dayoff::cmd(args),
        }
    }
}

/// Resolves the roster path from the --roster flag or the saved config.
pub(crate) fn roster_path(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path);
    }
    Config::read()?
        .roster
        .ok_or_else(|| msg_error_anyhow!(Message::RosterPathNotConfigured))
}

/// Loads a roster and recomputes its month end to end.
pub(crate) fn compute_month(roster: &Roster) -> Result<Vec<MonthlyDayRecord>> {
    let mut pilot = roster.pilot.clone();
    if pilot.aircraft_categories.is_empty() {
        if let Some(category) = Config::read()?.default_category {
            pilot.aircraft_categories.push(category);
        }
    }
    let month = roster.month_days()?;
    let history = roster.sorted_history()?;
    Ok(recalc::recalculate_month(&month, &history, &pilot))
}
