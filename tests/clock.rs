#[cfg(test)]
mod tests {
    use ftlcheck::libs::clock::{
        decimal_to_time, duration_between, opt_duration, time_to_decimal,
    };

    #[test]
    fn test_time_to_decimal_parses_valid_clocks() {
        assert_eq!(time_to_decimal("00:00"), 0.0);
        assert_eq!(time_to_decimal("06:30"), 6.5);
        assert_eq!(time_to_decimal("23:45"), 23.75);
        assert_eq!(time_to_decimal(" 08:15 "), 8.25);
    }

    #[test]
    fn test_time_to_decimal_degrades_to_zero() {
        assert_eq!(time_to_decimal(""), 0.0);
        assert_eq!(time_to_decimal("   "), 0.0);
        assert_eq!(time_to_decimal("8"), 0.0);
        assert_eq!(time_to_decimal("25:00"), 0.0);
        assert_eq!(time_to_decimal("12:60"), 0.0);
        assert_eq!(time_to_decimal("ab:cd"), 0.0);
    }

    #[test]
    fn test_round_trip_to_the_minute() {
        // For all valid "HH:MM" values, parsing the formatted value restores
        // the original within rounding to the minute.
        for hour in 0..24 {
            for minute in [0, 1, 15, 30, 44, 59] {
                let text = format!("{:02}:{:02}", hour, minute);
                let decimal = time_to_decimal(&text);
                assert_eq!(decimal_to_time(decimal, false), text);
                assert!((time_to_decimal(&decimal_to_time(decimal, false)) - decimal).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_decimal_to_time_compact_mode() {
        assert_eq!(decimal_to_time(8.5, false), "08:30");
        assert_eq!(decimal_to_time(8.5, true), "8:30");
        assert_eq!(decimal_to_time(12.75, true), "12:45");
        assert_eq!(decimal_to_time(-1.0, false), "00:00");
    }

    #[test]
    fn test_duration_same_day() {
        assert_eq!(duration_between("08:00", "18:00"), 10.0);
        assert_eq!(duration_between("08:00", "08:00"), 0.0);
        assert_eq!(duration_between("06:15", "06:45"), 0.5);
    }

    #[test]
    fn test_duration_wraps_midnight() {
        // When end < start the duty runs past midnight: (24 - start) + end.
        assert_eq!(duration_between("22:00", "06:00"), 8.0);
        assert_eq!(duration_between("23:30", "00:30"), 1.0);
        assert_eq!(duration_between("18:00", "02:00"), 8.0);
    }

    #[test]
    fn test_duration_is_never_negative() {
        for (start, end) in [("00:00", "23:59"), ("23:59", "00:00"), ("12:00", "12:00")] {
            assert!(duration_between(start, end) >= 0.0);
        }
    }

    #[test]
    fn test_duration_degrades_on_missing_or_malformed_input() {
        assert_eq!(duration_between("", "18:00"), 0.0);
        assert_eq!(duration_between("08:00", ""), 0.0);
        assert_eq!(duration_between("junk", "18:00"), 0.0);
        assert_eq!(opt_duration(None, Some("18:00")), 0.0);
        assert_eq!(opt_duration(Some("08:00"), None), 0.0);
    }
}
