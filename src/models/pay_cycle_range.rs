//! Pay cycle range model.
//!
//! This module contains the [`PayCycleRange`] type describing one instance
//! of a pay cycle as an inclusive pair of dates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One instance of a pay cycle, inclusive of both ends.
///
/// # Example
///
/// ```
/// use salary_apportioner::models::PayCycleRange;
/// use chrono::NaiveDate;
///
/// let range = PayCycleRange::new(
///     NaiveDate::from_ymd_opt(2023, 1, 2).unwrap(),
///     NaiveDate::from_ymd_opt(2023, 1, 8).unwrap(),
/// );
///
/// assert_eq!(range.day_count(), 7);
/// assert!(range.contains_date(NaiveDate::from_ymd_opt(2023, 1, 8).unwrap()));
/// assert!(!range.contains_date(NaiveDate::from_ymd_opt(2023, 1, 9).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayCycleRange {
    /// The first day of the cycle (inclusive).
    pub start: NaiveDate,
    /// The last day of the cycle (inclusive).
    pub end: NaiveDate,
}

impl PayCycleRange {
    /// Creates a range. No validation is performed here.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Checks if a date falls within the range (inclusive).
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Iterates every calendar day from `start` through `end`.
    ///
    /// Yields nothing when `end` precedes `start`.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }

    /// Number of calendar days covered, or 0 for an inverted range.
    pub fn day_count(&self) -> i64 {
        ((self.end - self.start).num_days() + 1).max(0)
    }
}

impl From<(NaiveDate, NaiveDate)> for PayCycleRange {
    fn from((start, end): (NaiveDate, NaiveDate)) -> Self {
        Self::new(start, end)
    }
}

impl std::fmt::Display for PayCycleRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}
