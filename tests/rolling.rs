#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use ftlcheck::libs::duty::DutyRecord;
    use ftlcheck::libs::monthly::MonthlyDayRecord;
    use ftlcheck::libs::rolling;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, day).unwrap()
    }

    fn flight_day(day: u32, hours: f64) -> MonthlyDayRecord {
        let mut record = DutyRecord::blank(date(day));
        record.duty_start = Some("08:00".to_string());
        record.duty_end = Some("18:00".to_string());
        record
            .flight_hours_by_aircraft
            .insert("AW139".to_string(), hours);
        MonthlyDayRecord::from_raw(record)
    }

    fn blank_day(day: u32) -> MonthlyDayRecord {
        MonthlyDayRecord::from_raw(DutyRecord::blank(date(day)))
    }

    #[test]
    fn test_three_day_flight_window() {
        let days = vec![flight_day(1, 4.0), flight_day(2, 4.0), flight_day(3, 4.0)];
        let metrics = rolling::compute(&days);
        assert_eq!(metrics.flight_time_3d, 12.0);
        assert_eq!(metrics.flight_time_7d, 12.0);
    }

    #[test]
    fn test_window_slides_past_old_days() {
        // On the blank day 4 the 3-day window covers days 2-4 only.
        let days = vec![
            flight_day(1, 4.0),
            flight_day(2, 4.0),
            flight_day(3, 4.0),
            blank_day(4),
        ];
        let metrics = rolling::compute(&days);
        assert_eq!(metrics.flight_time_3d, 8.0);
        assert_eq!(metrics.flight_time_7d, 12.0);
    }

    #[test]
    fn test_seven_day_window_excludes_day_one_on_day_eight() {
        let mut days: Vec<MonthlyDayRecord> = (1..=7).map(|day| flight_day(day, 2.0)).collect();
        days.push(flight_day(8, 2.0));
        let metrics = rolling::compute(&days);
        // Days 2-8 inclusive.
        assert_eq!(metrics.flight_time_7d, 14.0);
        assert_eq!(metrics.flight_time_28d, 16.0);
    }

    #[test]
    fn test_duty_totals_include_standby_credit() {
        // 10h duty plus half of a 6h standby the day before.
        let mut standby = DutyRecord::blank(date(1));
        standby.standby_on = Some("08:00".to_string());
        standby.standby_off = Some("14:00".to_string());
        let days = vec![MonthlyDayRecord::from_raw(standby), flight_day(2, 3.0)];
        let metrics = rolling::compute(&days);
        assert_eq!(metrics.duty_time_7d, 13.0);
        assert_eq!(metrics.duty_time_28d, 13.0);
    }

    #[test]
    fn test_fdp_fourteen_day_window() {
        let mut with_fdp = DutyRecord::blank(date(1));
        with_fdp.duty_start = Some("07:00".to_string());
        with_fdp.duty_end = Some("17:00".to_string());
        with_fdp.fdp_start = Some("07:30".to_string());
        with_fdp.fdp_end = Some("16:30".to_string());
        let days = vec![MonthlyDayRecord::from_raw(with_fdp), blank_day(2)];
        let metrics = rolling::compute(&days);
        assert_eq!(metrics.fdp_time_14d, 9.0);
    }

    #[test]
    fn test_gaps_between_records_contribute_nothing() {
        // Only days 1 and 10 have records; day 10's 7-day window misses
        // day 1 and the absent dates add nothing.
        let days = vec![flight_day(1, 5.0), flight_day(10, 2.0)];
        let metrics = rolling::compute(&days);
        assert_eq!(metrics.flight_time_7d, 2.0);
        assert_eq!(metrics.flight_time_28d, 7.0);
    }

    #[test]
    fn test_empty_input_yields_zeroes() {
        let metrics = rolling::compute(&[]);
        assert_eq!(metrics.flight_time_365d, 0.0);
        assert_eq!(metrics.duty_time_7d, 0.0);
    }
}
