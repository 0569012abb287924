//! Calendar period arithmetic
//!
//! A [`Period`] is a closed interval of calendar dates, inclusive of both
//! endpoints. Month boundaries follow the calendar, not rolling 30-day
//! windows.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A closed `[start, end]` date interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The full calendar month containing `date`.
    pub fn month_of(date: NaiveDate) -> Self {
        Self {
            start: floor_to_month(date),
            end: last_day_of_month(date),
        }
    }

    /// The full calendar month immediately preceding the month containing
    /// `date`. This is the comparison period for summaries: always exactly
    /// one month, regardless of how long the primary period spans.
    pub fn month_before(date: NaiveDate) -> Self {
        let last_of_previous = floor_to_month(date)
            .pred_opt()
            .expect("date predecessor in supported range");
        Self::month_of(last_of_previous)
    }

    /// True if `date` falls inside the interval.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// The month-key range covered by this period: both endpoints floored to
    /// the 1st of their month. Income records are matched against this.
    pub fn month_keys(&self) -> Period {
        Self {
            start: floor_to_month(self.start),
            end: floor_to_month(self.end),
        }
    }
}

/// First day of the month containing `date`.
pub fn floor_to_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).expect("day 1 exists in every month")
}

/// Last day of the month containing `date`.
pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .expect("month boundaries in supported range")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_of_mid_month() {
        let p = Period::month_of(date(2026, 1, 15));
        assert_eq!(p.start, date(2026, 1, 1));
        assert_eq!(p.end, date(2026, 1, 31));
    }

    #[test]
    fn test_month_of_february_leap_year() {
        let p = Period::month_of(date(2024, 2, 10));
        assert_eq!(p.end, date(2024, 2, 29));
    }

    #[test]
    fn test_month_before_crosses_year() {
        let p = Period::month_before(date(2026, 1, 15));
        assert_eq!(p.start, date(2025, 12, 1));
        assert_eq!(p.end, date(2025, 12, 31));
    }

    #[test]
    fn test_month_before_ignores_day_of_month() {
        assert_eq!(
            Period::month_before(date(2026, 3, 1)),
            Period::month_before(date(2026, 3, 31))
        );
    }

    #[test]
    fn test_contains_is_inclusive() {
        let p = Period::new(date(2026, 3, 1), date(2026, 3, 31));
        assert!(p.contains(date(2026, 3, 1)));
        assert!(p.contains(date(2026, 3, 31)));
        assert!(!p.contains(date(2026, 4, 1)));
    }

    #[test]
    fn test_month_keys_spans_months() {
        let p = Period::new(date(2026, 1, 15), date(2026, 3, 10));
        let keys = p.month_keys();
        assert_eq!(keys.start, date(2026, 1, 1));
        assert_eq!(keys.end, date(2026, 3, 1));
    }
}
