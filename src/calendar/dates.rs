use std::fmt;
use thiserror::Error;
use time::{
    format_description::BorrowedFormatItem, macros::format_description, Date, Duration, Weekday,
};

/// Input format for user-supplied start dates
static MDY_FMT: &[BorrowedFormatItem<'_>] = format_description!("[month]/[day]/[year]");

pub(crate) const DAYS_IN_WEEK: usize = 7;

pub(crate) const WEEKS_PER_CALENDAR: usize = 10;

/// Column labels for the days of the week, Monday first
pub(crate) const DAY_NAMES: [&str; DAYS_IN_WEEK] =
    ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Number of days covered by one calendar, start date included
const DAYS_PER_CALENDAR: i64 = 70;

/// A Monday whose ten following weeks are all representable dates
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct StartDate(Date);

impl StartDate {
    pub(crate) fn new(date: Date) -> Result<StartDate, DateError> {
        if date.weekday() != Weekday::Monday {
            return Err(DateError::NotMonday {
                date,
                weekday: date.weekday(),
            });
        }
        if date
            .checked_add(Duration::days(DAYS_PER_CALENDAR - 1))
            .is_none()
        {
            return Err(DateError::OutOfRange(date));
        }
        Ok(StartDate(date))
    }

    pub(crate) fn date(self) -> Date {
        self.0
    }
}

impl fmt::Display for StartDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_long(self.0))
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub(crate) enum DateError {
    #[error("invalid date format {0:?}; please use MM/DD/YYYY")]
    Format(String),
    #[error("{} is a {weekday}; the start date must be a Monday", format_long(*.date))]
    NotMonday { date: Date, weekday: Weekday },
    #[error("{} is too close to the end of the calendar to start ten weeks", format_long(*.0))]
    OutOfRange(Date),
}

/// Returns `today` if it is a Monday, otherwise the first Monday after it.
///
/// Near the end of representable time, falls back to the latest Monday whose
/// ten weeks still fit.
pub(crate) fn next_monday(today: Date) -> StartDate {
    let days_ahead = (7 - i64::from(today.weekday().number_days_from_monday())) % 7;
    let mut candidate = today
        .checked_add(Duration::days(days_ahead))
        .unwrap_or(Date::MAX);
    loop {
        match StartDate::new(candidate) {
            Ok(start) => return start,
            Err(_) => {
                candidate = candidate
                    .checked_sub(Duration::days(1))
                    .expect("a Monday should exist before the end of time");
            }
        }
    }
}

/// Parses a `MM/DD/YYYY` string that must name a Monday
pub(crate) fn validate_monday(input: &str) -> Result<StartDate, DateError> {
    let input = input.trim();
    if !is_mdy_shaped(input) {
        return Err(DateError::Format(input.to_owned()));
    }
    let date = Date::parse(input, &MDY_FMT).map_err(|_| DateError::Format(input.to_owned()))?;
    StartDate::new(date)
}

// `[year]` alone also admits a sign, so insist on exactly `DD/DD/DDDD`
fn is_mdy_shaped(input: &str) -> bool {
    input.len() == 10
        && input.bytes().enumerate().all(|(i, b)| match i {
            2 | 5 => b == b'/',
            _ => b.is_ascii_digit(),
        })
}

/// Formats a date as `MM/DD`
pub(crate) fn format_short(date: Date) -> String {
    format!("{:02}/{:02}", u8::from(date.month()), date.day())
}

/// Formats a date as `MM/DD/YYYY`
pub(crate) fn format_long(date: Date) -> String {
    format!(
        "{:02}/{:02}/{:04}",
        u8::from(date.month()),
        date.day(),
        date.year()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_next_monday_from_monday() {
        let start = next_monday(date!(2026 - 03 - 02));
        assert_eq!(start.date(), date!(2026 - 03 - 02));
    }

    #[test]
    fn test_next_monday_from_sunday() {
        let start = next_monday(date!(2026 - 03 - 08));
        assert_eq!(start.date(), date!(2026 - 03 - 09));
    }

    #[test]
    fn test_next_monday_from_tuesday_across_year() {
        let start = next_monday(date!(2025 - 12 - 30));
        assert_eq!(start.date(), date!(2026 - 01 - 05));
    }

    #[test]
    fn test_next_monday_within_a_week() {
        let mut today = date!(2024 - 02 - 20);
        for _ in 0..60 {
            let start = next_monday(today).date();
            let ahead = (start - today).whole_days();
            assert_eq!(start.weekday(), Weekday::Monday);
            assert!((0..=6).contains(&ahead), "{today} -> {start}");
            assert_eq!(ahead == 0, today.weekday() == Weekday::Monday);
            today = today.next_day().unwrap();
        }
    }

    #[test]
    fn test_next_monday_at_end_of_time() {
        let start = next_monday(Date::MAX);
        assert_eq!(start.date().weekday(), Weekday::Monday);
        assert!(start.date() < Date::MAX);
    }

    #[test]
    fn test_validate_monday() {
        let start = validate_monday("03/02/2026").unwrap();
        assert_eq!(start.date(), date!(2026 - 03 - 02));
        assert_eq!(start.to_string(), "03/02/2026");
    }

    #[test]
    fn test_validate_monday_trims() {
        let start = validate_monday("  01/26/2026\n").unwrap();
        assert_eq!(start.date(), date!(2026 - 01 - 26));
    }

    #[test]
    fn test_validate_monday_round_trip() {
        for s in ["03/02/2026", "01/26/2026", "12/29/2025", "02/29/2016"] {
            let start = validate_monday(s).unwrap();
            assert_eq!(format_short(start.date()), s[..5]);
        }
    }

    #[test]
    fn test_validate_tuesday() {
        let e = validate_monday("03/03/2026").unwrap_err();
        assert_eq!(
            e,
            DateError::NotMonday {
                date: date!(2026 - 03 - 03),
                weekday: Weekday::Tuesday,
            }
        );
        let msg = e.to_string();
        assert!(msg.contains("Monday"));
        assert!(msg.contains("Tuesday"));
        assert!(!msg.contains("format"));
    }

    #[test]
    fn test_validate_iso_date() {
        let e = validate_monday("2026-03-02").unwrap_err();
        assert!(matches!(e, DateError::Format(_)));
        let msg = e.to_string();
        assert!(msg.contains("format"));
        assert!(!msg.contains("Monday"));
    }

    #[test]
    fn test_validate_garbage() {
        for s in [
            "not-a-date",
            "",
            "3/2/2026",
            "02/30/2026",
            "03/02/2026x",
            "03/02/+2026",
            "03/02/-2026",
            "03-02-2026",
            "0３/02/2026",
        ] {
            assert!(
                matches!(validate_monday(s), Err(DateError::Format(_))),
                "{s:?} should be a format error"
            );
        }
    }

    #[test]
    fn test_validate_end_of_time() {
        assert!(matches!(
            validate_monday("12/27/9999"),
            Err(DateError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_format_short() {
        assert_eq!(format_short(date!(2026 - 03 - 02)), "03/02");
        assert_eq!(format_short(date!(2026 - 12 - 25)), "12/25");
        assert_eq!(format_short(date!(2026 - 01 - 05)), "01/05");
    }

    #[test]
    fn test_format_long() {
        assert_eq!(format_long(date!(2026 - 01 - 05)), "01/05/2026");
    }
}
