//! Data export for computed months.
//!
//! The full composite records go out as JSON; CSV gets a flattened row per
//! day suitable for spreadsheets, with the headline violation in the last
//! column.

use crate::libs::monthly::MonthlyDayRecord;
use crate::libs::summary::{MonthlySummary, SummaryCalculator};
use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use std::fs::File;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// One flattened CSV row per calendar day.
#[derive(Debug, Serialize)]
struct ExportDayRow {
    date: String,
    day_off: bool,
    duty_start: String,
    duty_end: String,
    duty_hours: f64,
    actual_fdp: f64,
    max_fdp: f64,
    fdp_extension: f64,
    flight_hours: f64,
    max_flight_time: f64,
    sectors: String,
    rest_hours: f64,
    standby_hours: f64,
    disruptive: bool,
    duty_7d: f64,
    duty_28d: f64,
    flight_3d: f64,
    flight_7d: f64,
    flight_28d: f64,
    flight_90d: f64,
    flight_365d: f64,
    fdp_14d: f64,
    violation: String,
}

impl ExportDayRow {
    fn from_record(day: &MonthlyDayRecord) -> Self {
        ExportDayRow {
            date: day.duty.date.format("%Y-%m-%d").to_string(),
            day_off: day.is_day_off,
            duty_start: day.duty.duty_start.clone().unwrap_or_default(),
            duty_end: day.duty.duty_end.clone().unwrap_or_default(),
            duty_hours: day.duty.duty_duration(),
            actual_fdp: day.actual_fdp,
            max_fdp: day.fdp.max_fdp,
            fdp_extension: day.fdp.fdp_extension,
            flight_hours: day.flight_duration,
            max_flight_time: day.fdp.max_flight_time,
            sectors: day.duty.sectors.map_or(String::new(), |s| s.to_string()),
            rest_hours: day.rest.rest_period,
            standby_hours: day.standby.standby_duration,
            disruptive: day.disruptive.is_disruptive,
            duty_7d: day.metrics.duty_time_7d,
            duty_28d: day.metrics.duty_time_28d,
            flight_3d: day.metrics.flight_time_3d,
            flight_7d: day.metrics.flight_time_7d,
            flight_28d: day.metrics.flight_time_28d,
            flight_90d: day.metrics.flight_time_90d,
            flight_365d: day.metrics.flight_time_365d,
            fdp_14d: day.metrics.fdp_time_14d,
            violation: day.violation().unwrap_or("").to_string(),
        }
    }
}

/// JSON export payload: the month plus its summary.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportReport<'a> {
    month: &'a str,
    days: &'a [MonthlyDayRecord],
    summary: MonthlySummary,
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    pub fn new(format: ExportFormat, output_path: PathBuf) -> Self {
        Exporter { format, output_path }
    }

    pub fn export_month(&self, month: &str, days: &[MonthlyDayRecord]) -> Result<PathBuf> {
        match self.format {
            ExportFormat::Csv => self.write_csv(days)?,
            ExportFormat::Json => self.write_json(month, days)?,
        }
        Ok(self.output_path.clone())
    }

    fn write_csv(&self, days: &[MonthlyDayRecord]) -> Result<()> {
        let mut writer = csv::Writer::from_path(&self.output_path)?;
        for day in days {
            writer.serialize(ExportDayRow::from_record(day))?;
        }
        writer.flush()?;
        Ok(())
    }

    fn write_json(&self, month: &str, days: &[MonthlyDayRecord]) -> Result<()> {
        let report = ExportReport { month, days, summary: days.summarize() };
        let file = File::create(&self.output_path)?;
        serde_json::to_writer_pretty(file, &report)?;
        Ok(())
    }
}
