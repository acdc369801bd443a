//! Month calendar.
//!
//! Derives day metadata (date, weekday, weekend flags) for every day of a
//! civil month using the proleptic Gregorian calendar.
//!
//! # Weekday Model
//! Weekday indices run 0..=6 starting at Sunday. Weekend = Saturday or
//! Sunday.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Short weekday names, indexed from Sunday.
pub const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// One day of the rostered month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDay {
    /// Day of month (1-based).
    pub day: u32,
    /// Short weekday name.
    pub dow: String,
    /// Calendar date.
    pub date: NaiveDate,
    /// Whether the day is a Saturday.
    pub is_saturday: bool,
    /// Whether the day is a Sunday.
    pub is_sunday: bool,
}

impl ScheduleDay {
    /// Builds the metadata for a date.
    pub fn from_date(date: NaiveDate) -> Self {
        let weekday = date.weekday().num_days_from_sunday() as usize;
        Self {
            day: date.day(),
            dow: DAY_NAMES[weekday].to_string(),
            date,
            is_saturday: weekday == 6,
            is_sunday: weekday == 0,
        }
    }

    /// 0-based offset into the month.
    #[inline]
    pub fn index(&self) -> usize {
        self.day as usize - 1
    }

    /// Weekday index (0 = Sunday).
    #[inline]
    pub fn weekday(&self) -> u8 {
        self.date.weekday().num_days_from_sunday() as u8
    }

    /// Whether the day falls on a weekend.
    #[inline]
    pub fn is_weekend(&self) -> bool {
        self.is_saturday || self.is_sunday
    }
}

/// Number of days in `month` (1-12) of `year`. Returns 0 for an invalid month.
pub fn days_in_month(month: u32, year: i32) -> usize {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return 0;
    };
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match next {
        Some(next) => next.signed_duration_since(first).num_days() as usize,
        None => 0,
    }
}

/// Metadata for every day of the month, in order.
///
/// Returns an empty list for an invalid month/year.
pub fn month_days(month: u32, year: i32) -> Vec<ScheduleDay> {
    (1..=days_in_month(month, year) as u32)
        .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
        .map(ScheduleDay::from_date)
        .collect()
}

/// Formats a date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Formats an inclusive date range as `YYYY-MM-DD - YYYY-MM-DD`.
pub fn format_date_range(start: NaiveDate, end: NaiveDate) -> String {
    format!("{} - {}", format_date(start), format_date(end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(1, 2025), 31);
        assert_eq!(days_in_month(2, 2025), 28);
        assert_eq!(days_in_month(2, 2024), 29);
        assert_eq!(days_in_month(2, 1900), 28);
        assert_eq!(days_in_month(2, 2000), 29);
        assert_eq!(days_in_month(4, 2025), 30);
        assert_eq!(days_in_month(12, 2025), 31);
    }

    #[test]
    fn test_invalid_month() {
        assert_eq!(days_in_month(0, 2025), 0);
        assert_eq!(days_in_month(13, 2025), 0);
        assert!(month_days(13, 2025).is_empty());
    }

    #[test]
    fn test_month_days_weekends() {
        // 2025-01-01 is a Wednesday
        let days = month_days(1, 2025);
        assert_eq!(days.len(), 31);
        assert_eq!(days[0].dow, "Wed");
        assert_eq!(days[0].weekday(), 3);
        assert!(!days[0].is_weekend());

        assert!(days[3].is_saturday); // Jan 4
        assert!(days[4].is_sunday); // Jan 5
        assert!(days[4].is_weekend());
        assert_eq!(days[4].index(), 4);
    }

    #[test]
    fn test_format_date() {
        let d = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(format_date(d), "2025-03-07");
        let e = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        assert_eq!(format_date_range(d, e), "2025-03-07 - 2025-03-09");
    }

    proptest! {
        #[test]
        fn prop_month_days_match_civil_calendar(month in 1u32..=12, year in 1900i32..2200) {
            let days = month_days(month, year);
            prop_assert_eq!(days.len(), days_in_month(month, year));
            prop_assert!((28..=31).contains(&days.len()));
            for (i, day) in days.iter().enumerate() {
                prop_assert_eq!(day.index(), i);
                prop_assert_eq!(day.date.month(), month);
            }
        }
    }
}
