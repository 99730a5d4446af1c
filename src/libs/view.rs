//! Console table rendering for computed months.

use crate::libs::clock::decimal_to_time;
use crate::libs::monthly::MonthlyDayRecord;
use crate::libs::summary::MonthlySummary;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// The editable-grid counterpart: one row per calendar day with the key
    /// computed figures and the day's headline violation.
    pub fn month(days: &[MonthlyDayRecord]) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row![
            "DATE", "DUTY", "FDP", "MAX FDP", "FLIGHT", "SECTORS", "REST", "DUTY 7D", "FLIGHT 28D",
            "VIOLATION"
        ]);
        for day in days {
            let duty_window = Self::window(&day.duty.duty_start, &day.duty.duty_end);
            let duty_cell = if day.is_day_off { "OFF".to_string() } else { duty_window };
            table.add_row(row![
                day.duty.date.format("%Y-%m-%d"),
                duty_cell,
                Self::hours(day.actual_fdp),
                Self::hours(day.fdp.max_fdp),
                Self::hours(day.flight_duration),
                day.duty.sectors.map_or(String::new(), |s| s.to_string()),
                if day.rest.has_history { Self::hours(day.rest.rest_period) } else { "NO HISTORY".to_string() },
                Self::hours(day.metrics.duty_time_7d),
                Self::hours(day.metrics.flight_time_28d),
                day.violation().unwrap_or(""),
            ]);
        }
        table.printstd();
        Ok(())
    }

    /// The audit view: every intermediate value for a single day.
    pub fn breakdown(day: &MonthlyDayRecord) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["Date", day.duty.date.format("%Y-%m-%d")]);
        table.add_row(row!["Day off", day.is_day_off]);
        table.add_row(row!["Duty", Self::window(&day.duty.duty_start, &day.duty.duty_end)]);
        table.add_row(row!["FDP window", Self::window(&day.duty.fdp_start, &day.duty.fdp_end)]);
        table.add_row(row!["Actual FDP", Self::hours(day.actual_fdp)]);
        table.add_row(row!["Max FDP", Self::hours(day.fdp.max_fdp)]);
        table.add_row(row!["Max flight time", Self::hours(day.fdp.max_flight_time)]);
        table.add_row(row!["Break", Self::window(&day.duty.break_start, &day.duty.break_end)]);
        table.add_row(row!["Break duration", Self::hours(day.fdp.break_duration)]);
        table.add_row(row!["FDP extension", Self::hours(day.fdp.fdp_extension)]);
        table.add_row(row!["Flight time", Self::hours(day.flight_duration)]);
        table.add_row(row!["Sectors", day.duty.sectors.map_or(String::new(), |s| s.to_string())]);
        table.add_row(row![
            "Rest period",
            if day.rest.has_history { Self::hours(day.rest.rest_period) } else { "No History Found".to_string() }
        ]);
        table.add_row(row!["Standby", Self::window(&day.duty.standby_on, &day.duty.standby_off)]);
        table.add_row(row!["Standby duration", Self::hours(day.standby.standby_duration)]);
        table.add_row(row!["Disruptive (WOCL)", day.disruptive.is_disruptive]);
        table.add_row(row!["Duty 7d", Self::hours(day.metrics.duty_time_7d)]);
        table.add_row(row!["Duty 28d", Self::hours(day.metrics.duty_time_28d)]);
        table.add_row(row!["Flight 3d", Self::hours(day.metrics.flight_time_3d)]);
        table.add_row(row!["Flight 7d", Self::hours(day.metrics.flight_time_7d)]);
        table.add_row(row!["Flight 28d", Self::hours(day.metrics.flight_time_28d)]);
        table.add_row(row!["Flight 90d", Self::hours(day.metrics.flight_time_90d)]);
        table.add_row(row!["Flight 365d", Self::hours(day.metrics.flight_time_365d)]);
        table.add_row(row!["FDP 14d", Self::hours(day.metrics.fdp_time_14d)]);
        table.add_row(row!["Violation", day.violation().unwrap_or("-")]);
        table.printstd();
        Ok(())
    }

    pub fn sum(summary: &MonthlySummary) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["Total duty time", Self::hours(summary.total_duty_time)]);
        table.add_row(row!["Total flight time", Self::hours(summary.total_flight_time)]);
        table.add_row(row!["Days with violations", summary.violation_count]);
        table.add_row(row!["Duty last 7d", Self::hours(summary.closing_metrics.duty_time_7d)]);
        table.add_row(row!["Duty last 28d", Self::hours(summary.closing_metrics.duty_time_28d)]);
        table.add_row(row!["Flight last 28d", Self::hours(summary.closing_metrics.flight_time_28d)]);
        table.add_row(row!["Flight last 90d", Self::hours(summary.closing_metrics.flight_time_90d)]);
        table.add_row(row!["Flight last 365d", Self::hours(summary.closing_metrics.flight_time_365d)]);
        table.add_row(row!["FDP last 14d", Self::hours(summary.closing_metrics.fdp_time_14d)]);
        table.printstd();
        Ok(())
    }

    fn hours(value: f64) -> String {
        if value == 0.0 {
            "-".to_string()
        } else {
            decimal_to_time(value, true)
        }
    }

    fn window(start: &Option<String>, end: &Option<String>) -> String {
        match (start.as_deref(), end.as_deref()) {
            (Some(start), Some(end)) => format!("{}-{}", start, end),
            (Some(start), None) => format!("{}-", start),
            _ => String::new(),
        }
    }
}
