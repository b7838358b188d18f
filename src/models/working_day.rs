//! Working day models.
//!
//! This module defines the [`WorkingDay`] enumeration and the [`WorkingDays`]
//! set used to describe which days of the week an employee is scheduled to work.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A calendar weekday, numbered Sunday=0 through Saturday=6.
///
/// The numbering matches [`Weekday::num_days_from_sunday`] and is the
/// integer form used when contracts are serialized.
///
/// # Example
///
/// ```
/// use salary_apportioner::models::WorkingDay;
/// use chrono::Weekday;
///
/// assert_eq!(WorkingDay::from(Weekday::Mon), WorkingDay::Monday);
/// assert_eq!(u8::from(WorkingDay::Saturday), 6);
/// assert!(WorkingDay::try_from(7u8).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum WorkingDay {
    /// Sunday (0).
    Sunday = 0,
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
}

impl WorkingDay {
    /// All seven days in Sunday-first order.
    pub const ALL: [WorkingDay; 7] = [
        WorkingDay::Sunday,
        WorkingDay::Monday,
        WorkingDay::Tuesday,
        WorkingDay::Wednesday,
        WorkingDay::Thursday,
        WorkingDay::Friday,
        WorkingDay::Saturday,
    ];

    /// Returns the working day a date falls on.
    pub fn of(date: NaiveDate) -> Self {
        Self::from(date.weekday())
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl From<Weekday> for WorkingDay {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sun => WorkingDay::Sunday,
            Weekday::Mon => WorkingDay::Monday,
            Weekday::Tue => WorkingDay::Tuesday,
            Weekday::Wed => WorkingDay::Wednesday,
            Weekday::Thu => WorkingDay::Thursday,
            Weekday::Fri => WorkingDay::Friday,
            Weekday::Sat => WorkingDay::Saturday,
        }
    }
}

impl TryFrom<u8> for WorkingDay {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        WorkingDay::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(EngineError::InvalidWorkingDay { value })
    }
}

impl From<WorkingDay> for u8 {
    fn from(day: WorkingDay) -> Self {
        day as u8
    }
}

impl fmt::Display for WorkingDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WorkingDay::Sunday => "Sunday",
            WorkingDay::Monday => "Monday",
            WorkingDay::Tuesday => "Tuesday",
            WorkingDay::Wednesday => "Wednesday",
            WorkingDay::Thursday => "Thursday",
            WorkingDay::Friday => "Friday",
            WorkingDay::Saturday => "Saturday",
        };
        write!(f, "{}", name)
    }
}

/// The set of weekdays an employee is scheduled to work.
///
/// Stored as a 7-bit mask, so membership is fixed-cardinality and
/// duplicates collapse. Serializes as an array of integers 0-6 in
/// Sunday-first order.
///
/// # Example
///
/// ```
/// use salary_apportioner::models::{WorkingDay, WorkingDays};
/// use chrono::NaiveDate;
///
/// let days: WorkingDays = [WorkingDay::Monday, WorkingDay::Tuesday].into_iter().collect();
/// assert_eq!(days.len(), 2);
///
/// // 2023-01-02 is a Monday
/// assert!(days.contains_date(NaiveDate::from_ymd_opt(2023, 1, 2).unwrap()));
/// assert!(!days.contains(WorkingDay::Sunday));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<WorkingDay>", into = "Vec<WorkingDay>")]
pub struct WorkingDays(u8);

impl WorkingDays {
    /// Returns a set with no working days.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Returns the Monday to Friday set.
    pub fn weekdays() -> Self {
        [
            WorkingDay::Monday,
            WorkingDay::Tuesday,
            WorkingDay::Wednesday,
            WorkingDay::Thursday,
            WorkingDay::Friday,
        ]
        .into_iter()
        .collect()
    }

    /// Adds a day, returning false if it was already present.
    pub fn insert(&mut self, day: WorkingDay) -> bool {
        let present = self.contains(day);
        self.0 |= day.bit();
        !present
    }

    /// Removes a day, returning true if it was present.
    pub fn remove(&mut self, day: WorkingDay) -> bool {
        let present = self.contains(day);
        self.0 &= !day.bit();
        present
    }

    /// Returns true if the day is in the set.
    pub const fn contains(&self, day: WorkingDay) -> bool {
        self.0 & day.bit() != 0
    }

    /// Returns true if the weekday of `date` is in the set.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.contains(WorkingDay::of(date))
    }

    /// Number of days in the set.
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns true if no days are scheduled.
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterates the days in Sunday-first order.
    pub fn iter(&self) -> impl Iterator<Item = WorkingDay> + '_ {
        WorkingDay::ALL
            .into_iter()
            .filter(move |day| self.contains(*day))
    }
}

impl FromIterator<WorkingDay> for WorkingDays {
    fn from_iter<I: IntoIterator<Item = WorkingDay>>(iter: I) -> Self {
        let mut days = WorkingDays::empty();
        for day in iter {
            days.insert(day);
        }
        days
    }
}

impl From<Vec<WorkingDay>> for WorkingDays {
    fn from(days: Vec<WorkingDay>) -> Self {
        days.into_iter().collect()
    }
}

impl From<WorkingDays> for Vec<WorkingDay> {
    fn from(days: WorkingDays) -> Self {
        days.iter().collect()
    }
}

impl fmt::Display for WorkingDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.iter().map(|day| day.to_string()).collect();
        write!(f, "{{{}}}", names.join(", "))
    }
}
