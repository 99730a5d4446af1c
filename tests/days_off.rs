#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use ftlcheck::libs::days_off::evaluate;
    use ftlcheck::libs::duty::{AircraftCategory, DutyRecord};
    use ftlcheck::libs::monthly::MonthlyDayRecord;

    const HELI: Option<AircraftCategory> = Some(AircraftCategory::Helicopter);
    const FIXED_WING: Option<AircraftCategory> = Some(AircraftCategory::FixedWing);

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, day).unwrap()
    }

    fn duty(day: u32, start: &str, end: &str) -> MonthlyDayRecord {
        let mut record = DutyRecord::blank(date(day));
        record.duty_start = Some(start.to_string());
        record.duty_end = Some(end.to_string());
        MonthlyDayRecord::from_raw(record)
    }

    fn off(day: u32) -> MonthlyDayRecord {
        MonthlyDayRecord::from_raw(DutyRecord::blank(date(day)))
    }

    fn duty_days(days: impl IntoIterator<Item = u32>) -> Vec<MonthlyDayRecord> {
        days.into_iter().map(|day| duty(day, "08:00", "18:00")).collect()
    }

    #[test]
    fn test_seven_consecutive_duty_days_allowed() {
        let days = duty_days(1..=7);
        assert!(evaluate(&days, HELI).violation.is_none());
    }

    #[test]
    fn test_eighth_consecutive_duty_day_flagged() {
        let days = duty_days(1..=8);
        let violation = evaluate(&days, HELI).violation.expect("expected a violation");
        assert!(violation.contains("8 consecutive duty days"));
        // Applies to both categories.
        assert!(evaluate(&days, FIXED_WING).violation.is_some());
    }

    #[test]
    fn test_single_day_off_long_enough_passes() {
        // Duty ends 18:00, next duty starts 08:00 two days later: a 38h
        // block covering both local nights.
        let days = vec![duty(1, "08:00", "18:00"), off(2), duty(3, "08:00", "18:00")];
        assert!(evaluate(&days, HELI).violation.is_none());
    }

    #[test]
    fn test_single_day_off_too_short_for_helicopter() {
        // 20:00 to 06:00 two days later is 34h, under the 36h helicopter
        // minimum.
        let days = vec![duty(1, "08:00", "20:00"), off(2), duty(3, "06:00", "16:00")];
        let violation = evaluate(&days, HELI).violation.expect("expected a violation");
        assert!(violation.contains("Single day off of 34.0h"));
        assert!(violation.contains("36h minimum"));
    }

    #[test]
    fn test_thirty_four_hours_satisfies_fixed_wing() {
        let days = vec![duty(1, "08:00", "20:00"), off(2), duty(3, "06:00", "16:00")];
        assert!(evaluate(&days, FIXED_WING).violation.is_none());
    }

    #[test]
    fn test_single_day_off_missing_a_local_night() {
        // Duty runs to 23:30, so the first night (22:00-06:00) is cut into.
        // 34.5h elapsed clears the fixed-wing floor but only one full night
        // is covered.
        let days = vec![duty(1, "10:00", "23:30"), off(2), duty(3, "10:00", "18:00")];
        let violation = evaluate(&days, FIXED_WING).violation.expect("expected a violation");
        assert!(violation.contains("two local nights"));
    }

    #[test]
    fn test_helicopter_needs_two_days_off_after_seven_duty_days() {
        let mut days = duty_days(1..=7);
        days.push(off(8));
        days.push(duty(9, "08:00", "18:00"));
        let violation = evaluate(&days, HELI).violation.expect("expected a violation");
        assert!(violation.contains("2 consecutive days off"));

        // Two days off clear it.
        let mut days = duty_days(1..=7);
        days.push(off(8));
        days.push(off(9));
        days.push(duty(10, "08:00", "18:00"));
        assert!(evaluate(&days, HELI).violation.is_none());
    }

    #[test]
    fn test_helicopter_fourteen_day_quota() {
        // Only days 6 and 7 off in the last 14 days.
        let mut days = duty_days(1..=5);
        days.push(off(6));
        days.push(off(7));
        days.extend(duty_days(8..=14));
        let violation = evaluate(&days, HELI).violation.expect("expected a violation");
        assert!(violation.contains("Only 2 days off in the last 14 days"));
    }

    #[test]
    fn test_fixed_wing_needs_a_two_day_block_each_fortnight() {
        // Three isolated days off but never two together.
        let mut days = Vec::new();
        for day in 1..=14 {
            if day == 4 || day == 8 || day == 12 {
                days.push(off(day));
            } else {
                days.push(duty(day, "08:00", "18:00"));
            }
        }
        let violation = evaluate(&days, FIXED_WING).violation.expect("expected a violation");
        assert!(violation.contains("No block of 2 consecutive days off"));
    }

    #[test]
    fn test_twenty_eight_day_quota() {
        // Six days off in 28, arranged in pairs so every other rule passes.
        let mut days = Vec::new();
        for day in 1..=28 {
            if matches!(day, 5 | 6 | 12 | 13 | 20 | 21) {
                days.push(off(day));
            } else {
                days.push(duty(day, "08:00", "18:00"));
            }
        }
        let violation = evaluate(&days, FIXED_WING).violation.expect("expected a violation");
        assert!(violation.contains("Only 6 days off in the last 28 days"));
    }

    #[test]
    fn test_sparse_history_passes_harmlessly() {
        // Dates with no record count as days off, so a young log never
        // trips the quota rules.
        let days = vec![duty(15, "08:00", "18:00")];
        assert!(evaluate(&days, HELI).violation.is_none());
        assert!(evaluate(&days, FIXED_WING).violation.is_none());
    }

    #[test]
    fn test_day_off_itself_is_never_flagged() {
        let mut days = duty_days(1..=8);
        days.push(off(9));
        assert!(evaluate(&days, HELI).violation.is_none());
    }
}
