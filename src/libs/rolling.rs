//! Rolling cumulative flight/duty/FDP totals.
//!
//! For a target date and window size N the aggregator sums a metric across
//! every record dated within the trailing N days, drawn from the union of
//! supplied history and the month being recalculated. Duty totals include
//! the 50% standby credit.

use crate::libs::monthly::{MonthlyDayRecord, RollingMetrics};
use chrono::{Duration, NaiveDate};

fn window_sum<F>(days: &[MonthlyDayRecord], end: NaiveDate, window_days: i64, metric: F) -> f64
where
    F: Fn(&MonthlyDayRecord) -> f64,
{
    let start = end - Duration::days(window_days - 1);
    days.iter()
        .filter(|day| day.duty.date >= start && day.duty.date <= end)
        .map(metric)
        .sum()
}

/// Computes every required trailing-window total for the last day of `days`.
///
/// `days` must already contain the day being evaluated; a date with no
/// matching record contributes nothing.
pub fn compute(days: &[MonthlyDayRecord]) -> RollingMetrics {
    let end = match days.last() {
        Some(day) => day.duty.date,
        None => return RollingMetrics::default(),
    };
    let duty = |day: &MonthlyDayRecord| day.duty_time_credit();
    let flight = |day: &MonthlyDayRecord| day.flight_duration;
    let fdp = |day: &MonthlyDayRecord| day.actual_fdp;

    RollingMetrics {
        duty_time_7d: window_sum(days, end, 7, duty),
        duty_time_28d: window_sum(days, end, 28, duty),
        flight_time_3d: window_sum(days, end, 3, flight),
        flight_time_7d: window_sum(days, end, 7, flight),
        flight_time_28d: window_sum(days, end, 28, flight),
        flight_time_90d: window_sum(days, end, 90, flight),
        flight_time_365d: window_sum(days, end, 365, flight),
        fdp_time_14d: window_sum(days, end, 14, fdp),
    }
}
