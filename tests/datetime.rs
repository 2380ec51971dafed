#[cfg(feature = "datetime")]
mod datetime_tests {
    use cse_rs::datetime::*;

    #[test]
    fn julian_day_round_trip() {
        for &(y, m, d, jd) in &[
            (2000i64, 1i64, 1i64, 2451545i64),
            (1987, 1, 27, 2446823),
            (1600, 1, 1, 2305448),
            (837, 4, 10, 2026872),
        ] {
            let date = CSEDate::new(y, m, d).unwrap();
            assert_eq!(date.to_julian_day().unwrap(), jd, "{y}-{m}-{d}");
            let back = CSEDate::from_julian_day(jd as f64);
            assert_eq!((back.year(), back.month(), back.day()), (y, m, d));
        }
    }

    #[test]
    fn gregorian_reform_gap() {
        // 1582-10-04 (Julian) is immediately followed by 1582-10-15.
        let before = CSEDate::new(1582, 10, 4).unwrap();
        let after = before.add_days(1);
        assert_eq!((after.month(), after.day()), (10, 15));
    }

    #[test]
    fn negative_year_conventions() {
        // Input years count without a year zero (-1000 is 1000 BC); the
        // reverse conversion reports astronomical numbering, one year up.
        let bc = CSEDate::new(-1000, 7, 12).unwrap();
        let jd = bc.to_julian_day().unwrap();
        assert_eq!(jd, 1356366);
        let back = CSEDate::from_julian_day(jd as f64);
        assert_eq!((back.year(), back.month(), back.day()), (-999, 7, 12));
    }

    #[test]
    fn no_year_zero() {
        assert!(
            CSEDate::new(0, 1, 1).is_none()
                || CSEDate::new(0, 1, 1).unwrap().to_julian_day().is_err()
        );
        let bc = CSEDate::new(-1, 12, 31).unwrap();
        assert!(bc.to_julian_day().is_ok());
    }

    #[test]
    fn leap_rules_split_at_the_reform() {
        assert!(CSEDate::is_leap_year(2000));
        assert!(!CSEDate::is_leap_year(1900));
        assert!(CSEDate::is_leap_year(2024));
        // Astronomical counting before the reform: every 4th year.
        assert!(CSEDate::is_leap_year(1500));
        assert!(CSEDate::new(2001, 2, 29).is_none());
    }

    #[test]
    fn time_fraction_noon_zero() {
        let noon = CSETime::new(12, 0, 0, 0).unwrap();
        assert_eq!(time_to_jd_fract(&noon), 0.0);
        let t = jd_fract_to_time(2451545.0);
        assert_eq!((t.hour(), t.minute()), (12, 0));
    }

    #[test]
    fn parses_every_grammar() {
        let a = CSEDateTime::parse("2024-05-17T12:30:45.5").unwrap();
        assert_eq!(a.time().msec(), 500);
        let b = CSEDateTime::parse("2024.05.17 12:30:45").unwrap();
        assert_eq!(b.date().day(), 17);
        let c = CSEDateTime::parse("1999.12.31").unwrap();
        assert_eq!(c.date().year(), 1999);
        let d = CSEDateTime::parse("1987").unwrap();
        assert_eq!(d.date().year(), 1987);
        assert!(CSEDateTime::parse("not a date").is_err());
        let zoned = CSEDateTime::parse("2024-05-17T12:30:45+02:00").unwrap();
        assert_eq!(zoned.offset_from_utc(), 7200.0);
    }

    #[test]
    fn date_time_arithmetic_wraps_days() {
        let dt = CSEDateTime::parse("2024-02-28T23:30:00").unwrap();
        let later = dt.add_secs(3600);
        assert_eq!(later.date().day(), 29);
        assert_eq!(later.time().hour(), 0);
    }

    #[test]
    fn jd_day_of_week() {
        // 2000-01-01 was a Saturday.
        assert_eq!(get_day_of_week(2451544.5), 6);
        assert_eq!(CSEDate::new(2000, 1, 1).unwrap().day_of_week(), 6);
    }

    #[test]
    fn iso_string_rendering() {
        let s = julian_day_to_iso8601_string(2451545.0, false);
        assert_eq!(s, "2000-01-01T12:00:00");
        let jd = get_jd_from_date(2000, 1, 1, 12, 0, 0.0).unwrap();
        assert_eq!(jd, 2451545.0);
    }
}
