#[cfg(test)]
mod tests {
    use chrono::{Datelike, NaiveDate};
    use ftlcheck::libs::duty::{AircraftCategory, DutyRecord, PilotProfile};
    use ftlcheck::libs::roster::Roster;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Test context providing a scratch directory for roster files.
    struct RosterTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for RosterTestContext {
        fn setup() -> Self {
            RosterTestContext { temp_dir: tempfile::tempdir().unwrap() }
        }
    }

    fn sample_roster() -> Roster {
        let mut day = DutyRecord::blank(NaiveDate::from_ymd_opt(2026, 2, 3).unwrap());
        day.duty_start = Some("08:00".to_string());
        day.duty_end = Some("18:00".to_string());
        day.sectors = Some(3);

        let mut prior = DutyRecord::blank(NaiveDate::from_ymd_opt(2026, 1, 30).unwrap());
        prior.duty_start = Some("09:00".to_string());
        prior.duty_end = Some("17:00".to_string());

        Roster {
            pilot: PilotProfile {
                name: "A. Pilot".to_string(),
                aircraft_categories: vec![AircraftCategory::Helicopter],
                is_two_pilot_operation: false,
            },
            month: "2026-02".to_string(),
            history: vec![prior],
            days: vec![day],
        }
    }

    #[test_context(RosterTestContext)]
    #[test]
    fn test_save_and_load_round_trip(ctx: &mut RosterTestContext) {
        let path = ctx.temp_dir.path().join("roster.json");
        let roster = sample_roster();
        roster.save(&path).unwrap();

        let loaded = Roster::load(&path).unwrap();
        assert_eq!(loaded.month, "2026-02");
        assert_eq!(loaded.pilot.name, "A. Pilot");
        assert_eq!(loaded.days, roster.days);
        assert_eq!(loaded.history, roster.history);
    }

    #[test_context(RosterTestContext)]
    #[test]
    fn test_load_missing_file_fails(ctx: &mut RosterTestContext) {
        let path = ctx.temp_dir.path().join("absent.json");
        assert!(Roster::load(&path).is_err());
    }

    #[test_context(RosterTestContext)]
    #[test]
    fn test_load_rejects_malformed_json(ctx: &mut RosterTestContext) {
        let path = ctx.temp_dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(Roster::load(&path).is_err());
    }

    #[test]
    fn test_month_days_fills_blank_days() {
        let roster = sample_roster();
        let days = roster.month_days().unwrap();
        // February 2026 has 28 days, one slot each.
        assert_eq!(days.len(), 28);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
        assert_eq!(days[27].date, NaiveDate::from_ymd_opt(2026, 2, 28).unwrap());
        // The supplied record lands in its slot; the rest stay blank.
        assert_eq!(days[2].duty_start.as_deref(), Some("08:00"));
        assert!(days[3].duty_start.is_none());
        assert!(days[3].is_day_off());
    }

    #[test]
    fn test_month_days_ignores_records_outside_the_month() {
        let mut roster = sample_roster();
        let mut stray = DutyRecord::blank(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
        stray.duty_start = Some("06:00".to_string());
        roster.days.push(stray);

        let days = roster.month_days().unwrap();
        assert_eq!(days.len(), 28);
        assert!(days.iter().all(|day| day.date.month() == 2));
    }

    #[test]
    fn test_sorted_history_filters_and_orders() {
        let mut roster = sample_roster();
        // Out of order, one duplicate date, one record inside the month.
        let jan = |day: u32| DutyRecord::blank(NaiveDate::from_ymd_opt(2026, 1, day).unwrap());
        roster.history = vec![
            jan(20),
            jan(10),
            jan(20),
            DutyRecord::blank(NaiveDate::from_ymd_opt(2026, 2, 5).unwrap()),
        ];

        let history = roster.sorted_history().unwrap();
        let dates: Vec<u32> = history.iter().map(|record| record.date.day()).collect();
        assert_eq!(dates, vec![10, 20]);
    }

    #[test]
    fn test_invalid_month_is_rejected() {
        let mut roster = sample_roster();
        roster.month = "February".to_string();
        assert!(roster.first_of_month().is_err());
        assert!(roster.month_days().is_err());
    }

    #[test]
    fn test_day_mut_inserts_missing_days() {
        let mut roster = sample_roster();
        let date = NaiveDate::from_ymd_opt(2026, 2, 10).unwrap();
        assert_eq!(roster.days.len(), 1);

        roster.day_mut(date).duty_start = Some("07:00".to_string());
        assert_eq!(roster.days.len(), 2);

        // A second call reuses the existing record.
        roster.day_mut(date).duty_end = Some("15:00".to_string());
        assert_eq!(roster.days.len(), 2);
        let record = roster.days.iter().find(|record| record.date == date).unwrap();
        assert_eq!(record.duty_start.as_deref(), Some("07:00"));
        assert_eq!(record.duty_end.as_deref(), Some("15:00"));
    }
}
