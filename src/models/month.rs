//! Calendar month arithmetic
//!
//! A `CalendarMonth` is the page shown by the calendar view. All arithmetic is
//! done on the proleptic Gregorian calendar with plain integers, so every
//! `i32` year is valid even where `chrono::NaiveDate` cannot represent it.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A `(year, month)` pair with `month` in `1..=12`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CalendarMonth {
    year: i32,
    month: u32,
}

impl CalendarMonth {
    /// Build a month, normalizing out-of-range months by floor-division carry
    ///
    /// `new(2024, 0)` is December 2023 and `new(2024, 13)` is January 2025.
    /// Results saturate at January of `i32::MIN` and December of `i32::MAX`.
    pub fn new(year: i32, month: i32) -> Self {
        const FIRST: i64 = i32::MIN as i64 * 12;
        const LAST: i64 = i32::MAX as i64 * 12 + 11;

        let index = (i64::from(year) * 12 + i64::from(month) - 1).clamp(FIRST, LAST);
        Self {
            year: index.div_euclid(12) as i32,
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The month containing today's local date
    pub fn current() -> Self {
        Self::from_date(chrono::Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month number, 1 = January
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    pub fn next(&self) -> Self {
        Self::new(self.year, self.month as i32 + 1)
    }

    pub fn prev(&self) -> Self {
        Self::new(self.year, self.month as i32 - 1)
    }

    /// Move by any number of months in either direction
    pub fn offset(&self, months: i32) -> Self {
        Self::new(self.year, self.month as i32 + months)
    }

    pub fn days_in_month(&self) -> u32 {
        match self.month {
            4 | 6 | 9 | 11 => 30,
            2 if is_leap_year(self.year) => 29,
            2 => 28,
            _ => 31,
        }
    }

    /// Weekday of the 1st, 0 = Sunday through 6 = Saturday
    pub fn starting_weekday(&self) -> u32 {
        weekday_from_sunday(self.year, self.month, 1)
    }

    /// Calendar date for a day of this month, if chrono can represent it
    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        self.date(1)
    }

    pub fn last_day(&self) -> Option<NaiveDate> {
        self.date(self.days_in_month())
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.year)
    }
}

impl FromStr for CalendarMonth {
    type Err = MonthParseError;

    /// Parses "YYYY-MM"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (year, month) = s
            .rsplit_once('-')
            .filter(|(year, _)| !year.is_empty())
            .ok_or_else(|| MonthParseError::InvalidFormat(s.to_string()))?;
        let year: i32 = year
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;
        if !(1..=12).contains(&month) {
            return Err(MonthParseError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MonthParseError {
    #[error("invalid month format (expected YYYY-MM): {0}")]
    InvalidFormat(String),
    #[error("invalid month: {0}")]
    InvalidMonth(u32),
}

fn is_leap_year(year: i32) -> bool {
    let year = i64::from(year);
    year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
}

/// Days since 1970-01-01 for a proleptic Gregorian date
fn days_from_civil(year: i32, month: u32, day: u32) -> i64 {
    let month = i64::from(month);
    let day = i64::from(day);
    let year = i64::from(year) - i64::from(month <= 2);
    let era = year.div_euclid(400);
    let year_of_era = year - era * 400;
    let month_from_march = (month + 9) % 12;
    let day_of_year = (153 * month_from_march + 2) / 5 + day - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * 146_097 + day_of_era - 719_468
}

fn weekday_from_sunday(year: i32, month: u32, day: u32) -> u32 {
    // 1970-01-01 was a Thursday
    (days_from_civil(year, month, day) + 4).rem_euclid(7) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_months_by_carry() {
        assert_eq!(CalendarMonth::new(2024, 0), CalendarMonth::new(2023, 12));
        assert_eq!(CalendarMonth::new(2024, 13), CalendarMonth::new(2025, 1));
        assert_eq!(CalendarMonth::new(2024, -11), CalendarMonth::new(2023, 1));
        assert_eq!(CalendarMonth::new(2024, 25).year(), 2026);
        assert_eq!(CalendarMonth::new(2024, 25).month(), 1);
    }

    #[test]
    fn test_saturates_at_the_first_and_last_month() {
        let last = CalendarMonth::new(i32::MAX, 12);
        assert_eq!(last.next(), last);
        assert_eq!((last.year(), last.month()), (i32::MAX, 12));
        assert_eq!(CalendarMonth::new(i32::MAX, 13), last);
        assert_eq!(last.offset(i32::MAX), last);

        let first = CalendarMonth::new(i32::MIN, 1);
        assert_eq!(first.prev(), first);
        assert_eq!((first.year(), first.month()), (i32::MIN, 1));
        assert_eq!(CalendarMonth::new(i32::MIN, 0), first);
        assert_eq!(first.offset(i32::MIN), first);
    }

    #[test]
    fn test_round_trips_next_to_the_limits() {
        let november = CalendarMonth::new(i32::MAX, 11);
        assert_eq!(november.next().prev(), november);
        assert_eq!(november.next(), CalendarMonth::new(i32::MAX, 12));

        let february = CalendarMonth::new(i32::MIN, 2);
        assert_eq!(february.prev().next(), february);
        assert_eq!(february.prev(), CalendarMonth::new(i32::MIN, 1));

        let last = CalendarMonth::new(i32::MAX, 12);
        assert_eq!(last.prev().next(), last);
        let first = CalendarMonth::new(i32::MIN, 1);
        assert_eq!(first.next().prev(), first);
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(CalendarMonth::new(2024, 1).days_in_month(), 31);
        assert_eq!(CalendarMonth::new(2024, 2).days_in_month(), 29);
        assert_eq!(CalendarMonth::new(2023, 2).days_in_month(), 28);
        assert_eq!(CalendarMonth::new(1900, 2).days_in_month(), 28);
        assert_eq!(CalendarMonth::new(2000, 2).days_in_month(), 29);
        assert_eq!(CalendarMonth::new(2024, 4).days_in_month(), 30);
    }

    #[test]
    fn test_arithmetic_agrees_with_chrono() {
        for year in [-400, 1, 1582, 1970, 1999, 2024, 2100, 9999] {
            for month in 1..=12 {
                let page = CalendarMonth::new(year, month);
                let first = page.first_day().unwrap();
                assert_eq!(page.starting_weekday(), first.weekday().num_days_from_sunday());
                let last = page.last_day().unwrap();
                assert_eq!(last.succ_opt().unwrap().day(), 1, "{}", page);
            }
        }
    }

    #[test]
    fn test_january_2024_starts_on_monday() {
        assert_eq!(CalendarMonth::new(2024, 1).starting_weekday(), 1);
    }

    #[test]
    fn test_out_of_chrono_range_is_still_total() {
        let far = CalendarMonth::new(1_000_000, 3);
        assert_eq!(far.days_in_month(), 31);
        assert!(far.starting_weekday() < 7);
        assert!(far.first_day().is_none());
    }

    #[test]
    fn test_parse_and_display() {
        let page: CalendarMonth = "2024-01".parse().unwrap();
        assert_eq!(page, CalendarMonth::new(2024, 1));
        assert_eq!(page.to_string(), "January 2024");
        assert_eq!("2024-13".parse::<CalendarMonth>(), Err(MonthParseError::InvalidMonth(13)));
        assert!(matches!(
            "January".parse::<CalendarMonth>(),
            Err(MonthParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_contains() {
        let page = CalendarMonth::new(2024, 1);
        assert!(page.contains(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()));
        assert!(!page.contains(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()));
    }
}
