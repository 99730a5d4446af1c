//! Monthly roll-up of a computed month.

use crate::libs::monthly::{MonthlyDayRecord, RollingMetrics};
use serde::{Deserialize, Serialize};

/// Totals for the month plus the final day's cumulative snapshot, used as
/// the "as of end of month" figures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    pub total_duty_time: f64,
    pub total_flight_time: f64,
    pub violation_count: usize,
    pub closing_metrics: RollingMetrics,
}

pub trait SummaryCalculator {
    fn summarize(&self) -> MonthlySummary;
}

impl SummaryCalculator for [MonthlyDayRecord] {
    fn summarize(&self) -> MonthlySummary {
        let total_duty_time = self.iter().map(|day| day.duty.duty_duration()).sum();
        let total_flight_time = self.iter().map(|day| day.flight_duration).sum();
        let violation_count = self.iter().filter(|day| day.violation().is_some()).count();
        let closing_metrics = self
            .last()
            .map(|day| day.metrics.clone())
            .unwrap_or_default();
        MonthlySummary {
            total_duty_time,
            total_flight_time,
            violation_count,
            closing_metrics,
        }
    }
}
