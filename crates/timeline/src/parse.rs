//! Flexible day-first datetime parsing.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::TimelineError;

const DATETIME_FORMATS: &[&str] = &[
    "%d.%m.%Y %H:%M:%S",
    "%d.%m.%Y %H:%M",
    "%d.%m.%y %H:%M:%S",
    "%d.%m.%y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%d.%m.%Y", "%d.%m.%y"];

/// Parses a day-first datetime string with a 2- or 4-digit year.
///
/// Accepted forms: `dd.mm.yyyy HH:MM:SS`, `dd.mm.yyyy HH:MM`, `dd.mm.yyyy`,
/// and the same with a 2-digit year. Date-only input parses to midnight.
///
/// # Errors
///
/// Returns [`TimelineError::InvalidDate`] if the input matches none of the
/// accepted formats.
pub fn parse_datetime_flexible(input: &str) -> Result<NaiveDateTime, TimelineError> {
    let trimmed = input.trim();

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Ok(dt);
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(trimmed, fmt) {
            // Midnight; and_hms_opt(0,0,0) is always valid.
            return Ok(d.and_hms_opt(0, 0, 0).expect("midnight is always valid"));
        }
    }

    Err(TimelineError::InvalidDate {
        input: input.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn full_datetime() {
        assert_eq!(
            parse_datetime_flexible("15.03.2024 14:30:05").unwrap(),
            dt(2024, 3, 15, 14, 30, 5)
        );
    }

    #[test]
    fn datetime_without_seconds() {
        assert_eq!(
            parse_datetime_flexible("15.03.2024 14:30").unwrap(),
            dt(2024, 3, 15, 14, 30, 0)
        );
    }

    #[test]
    fn date_only_is_midnight() {
        assert_eq!(
            parse_datetime_flexible("01.01.2024").unwrap(),
            dt(2024, 1, 1, 0, 0, 0)
        );
    }

    #[test]
    fn two_digit_year() {
        assert_eq!(
            parse_datetime_flexible("01.01.24").unwrap(),
            dt(2024, 1, 1, 0, 0, 0)
        );
    }

    #[test]
    fn two_digit_year_with_time() {
        assert_eq!(
            parse_datetime_flexible("01.01.24 06:00").unwrap(),
            dt(2024, 1, 1, 6, 0, 0)
        );
    }

    #[test]
    fn surrounding_whitespace() {
        assert_eq!(
            parse_datetime_flexible("  01.01.2024  ").unwrap(),
            dt(2024, 1, 1, 0, 0, 0)
        );
    }

    #[test]
    fn leap_day_accepted() {
        assert_eq!(
            parse_datetime_flexible("29.02.2024").unwrap(),
            dt(2024, 2, 29, 0, 0, 0)
        );
    }

    #[test]
    fn invalid_day_rejected() {
        let err = parse_datetime_flexible("32.01.2024").unwrap_err();
        assert!(matches!(err, TimelineError::InvalidDate { .. }));
    }

    #[test]
    fn non_leap_feb_29_rejected() {
        assert!(parse_datetime_flexible("29.02.2023").is_err());
    }

    #[test]
    fn iso_format_rejected() {
        let err = parse_datetime_flexible("2024-01-01").unwrap_err();
        match err {
            TimelineError::InvalidDate { input } => assert_eq!(input, "2024-01-01"),
            other => panic!("expected InvalidDate, got {other:?}"),
        }
    }

    #[test]
    fn empty_rejected() {
        assert!(parse_datetime_flexible("").is_err());
    }
}
