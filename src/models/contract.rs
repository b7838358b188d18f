//! Employment contract model and related types.
//!
//! This module defines the [`EmploymentContract`] struct and the [`PayCycle`]
//! enum describing how often the contract's salary is paid.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::WorkingDays;

/// The recurring period a salary is paid for.
///
/// The set is closed: deserializing any tag other than `"Weekly"` or
/// `"Monthly"` fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PayCycle {
    /// Exactly one Monday to Sunday week.
    Weekly,
    /// Exactly one calendar month.
    Monthly,
}

impl PayCycle {
    /// Lowercase name used in messages (e.g. "weekly").
    pub fn label(&self) -> &'static str {
        match self {
            PayCycle::Weekly => "weekly",
            PayCycle::Monthly => "monthly",
        }
    }
}

impl std::fmt::Display for PayCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PayCycle::Weekly => write!(f, "Weekly"),
            PayCycle::Monthly => write!(f, "Monthly"),
        }
    }
}

/// The terms an employee is paid under.
///
/// Contracts are plain values: the apportionment routine only reads them.
///
/// # Example
///
/// ```
/// use salary_apportioner::models::{EmploymentContract, PayCycle, WorkingDays};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let contract = EmploymentContract {
///     pay_cycle: PayCycle::Monthly,
///     pay_cycle_salary: Decimal::new(1000, 0),
///     working_days: WorkingDays::weekdays(),
///     start_date: NaiveDate::from_ymd_opt(2023, 1, 17).unwrap(),
/// };
/// assert!(contract.has_working_days());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentContract {
    /// How often the salary is paid.
    pub pay_cycle: PayCycle,
    /// The full salary for one complete pay cycle.
    pub pay_cycle_salary: Decimal,
    /// The weekdays the employee is scheduled to work.
    pub working_days: WorkingDays,
    /// The first day of employment (inclusive).
    pub start_date: NaiveDate,
}

impl EmploymentContract {
    /// Returns true if at least one weekday is scheduled.
    pub fn has_working_days(&self) -> bool {
        !self.working_days.is_empty()
    }
}
