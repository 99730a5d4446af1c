use crate::libs::export::{ExportFormat, Exporter};
use crate::libs::messages::Message;
use crate::libs::roster::Roster;
use crate::msg_success;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(long, short, value_enum, default_value_t = ExportFormat::Csv, help = "Output format")]
    format: ExportFormat,
    #[arg(long, short, help = "Output file (defaults to ftl-report-<month>.<ext>)")]
    output: Option<PathBuf>,
    #[arg(long, help = "Roster JSON file (defaults to the configured path)")]
    roster: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let path = super::roster_path(args.roster)?;
    let roster = Roster::load(&path)?;
    let days = super::compute_month(&roster)?;

    let output = args.output.unwrap_or_else(|| {
        PathBuf::from(format!("ftl-report-{}.{}", roster.month, args.format.extension()))
    });
    let written = Exporter::new(args.format, output).export_month(&roster.month, &days)?;
    msg_success!(Message::ExportSuccess(written.display().to_string()));
    Ok(())
}
