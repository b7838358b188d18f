//! Pay cycle validation.
//!
//! This module checks that a contract and a pay cycle range describe a
//! computable apportionment: a positive salary, a forward range, and a range
//! that is exactly one aligned cycle of the contract's pay cycle.

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use tracing::warn;

use crate::error::{EngineError, EngineResult};
use crate::models::{EmploymentContract, PayCycle, PayCycleRange};

/// Days between the Monday and Sunday of one weekly cycle.
pub const WEEKLY_CYCLE_DAY_DIFFERENCE: i64 = 6;

/// Returns true if the day after `date` falls in a different month.
///
/// # Example
///
/// ```
/// use salary_apportioner::calculation::is_last_day_of_month;
/// use chrono::NaiveDate;
///
/// assert!(is_last_day_of_month(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));
/// assert!(!is_last_day_of_month(NaiveDate::from_ymd_opt(2023, 2, 27).unwrap()));
/// ```
pub fn is_last_day_of_month(date: NaiveDate) -> bool {
    match date.succ_opt() {
        Some(next) => next.month() != date.month(),
        None => true,
    }
}

/// Returns the absolute number of whole days between two dates.
///
/// # Example
///
/// ```
/// use salary_apportioner::calculation::diff_in_days;
/// use chrono::NaiveDate;
///
/// let monday = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
/// let sunday = NaiveDate::from_ymd_opt(2023, 1, 8).unwrap();
/// assert_eq!(diff_in_days(monday, sunday), 6);
/// assert_eq!(diff_in_days(sunday, monday), 6);
/// ```
pub fn diff_in_days(a: NaiveDate, b: NaiveDate) -> i64 {
    (b - a).num_days().abs()
}

/// Returns true if the range is exactly one calendar month: it starts on
/// the 1st and ends on the last day of that same month.
pub fn is_valid_monthly_cycle(range: &PayCycleRange) -> bool {
    range.start.day() == 1
        && is_last_day_of_month(range.end)
        && range.start.year() == range.end.year()
        && range.start.month() == range.end.month()
}

/// Returns true if the range is exactly one Monday to Sunday week.
pub fn is_valid_weekly_cycle(range: &PayCycleRange) -> bool {
    range.start.weekday() == Weekday::Mon
        && range.end.weekday() == Weekday::Sun
        && diff_in_days(range.start, range.end) == WEEKLY_CYCLE_DAY_DIFFERENCE
}

/// Rejects a range that is not exactly one calendar month.
pub fn validate_monthly_cycle(range: &PayCycleRange) -> EngineResult<()> {
    if is_valid_monthly_cycle(range) {
        return Ok(());
    }

    warn!(
        pay_cycle = %PayCycle::Monthly,
        start = %range.start,
        end = %range.end,
        "Monthly pay cycles must start at the beginning of the month, and end on the last day of the month. A monthly pay cycle can only span 1 month"
    );
    Err(EngineError::InvalidCyclePeriod {
        pay_cycle: PayCycle::Monthly,
        start: range.start,
        end: range.end,
    })
}

/// Rejects a range that is not exactly one Monday to Sunday week.
pub fn validate_weekly_cycle(range: &PayCycleRange) -> EngineResult<()> {
    if is_valid_weekly_cycle(range) {
        return Ok(());
    }

    warn!(
        pay_cycle = %PayCycle::Weekly,
        start = %range.start,
        end = %range.end,
        "Weekly pay cycles must start at the beginning of the week (Monday), and end on the last day of the week (Sunday). A weekly pay cycle can only span 1 week"
    );
    Err(EngineError::InvalidCyclePeriod {
        pay_cycle: PayCycle::Weekly,
        start: range.start,
        end: range.end,
    })
}

/// Validates the range against the contract's pay cycle.
pub fn validate_pay_cycle(contract: &EmploymentContract, range: &PayCycleRange) -> EngineResult<()> {
    match contract.pay_cycle {
        PayCycle::Monthly => validate_monthly_cycle(range),
        PayCycle::Weekly => validate_weekly_cycle(range),
    }
}

/// Runs every validation check in order, returning the first failure.
///
/// 1. The salary must be greater than zero.
/// 2. The range must not end before it begins.
/// 3. The range must be exactly one cycle of the contract's pay cycle.
///
/// # Example
///
/// ```
/// use salary_apportioner::calculation::validate_inputs;
/// use salary_apportioner::error::EngineError;
/// use salary_apportioner::models::{EmploymentContract, PayCycle, PayCycleRange, WorkingDays};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let contract = EmploymentContract {
///     pay_cycle: PayCycle::Monthly,
///     pay_cycle_salary: Decimal::ZERO,
///     working_days: WorkingDays::weekdays(),
///     start_date: NaiveDate::from_ymd_opt(2023, 1, 17).unwrap(),
/// };
/// // Inverted range, but the salary check runs first.
/// let range = PayCycleRange::new(
///     NaiveDate::from_ymd_opt(2023, 1, 31).unwrap(),
///     NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
/// );
///
/// assert!(matches!(
///     validate_inputs(&contract, &range),
///     Err(EngineError::InvalidSalary { .. })
/// ));
/// ```
pub fn validate_inputs(contract: &EmploymentContract, range: &PayCycleRange) -> EngineResult<()> {
    if contract.pay_cycle_salary <= Decimal::ZERO {
        warn!(salary = %contract.pay_cycle_salary, "Pay cycle salary must be greater than 0");
        return Err(EngineError::InvalidSalary {
            salary: contract.pay_cycle_salary,
        });
    }

    if range.end < range.start {
        warn!(start = %range.start, end = %range.end, "Pay cycle cannot end before it begins");
        return Err(EngineError::InvalidRange {
            start: range.start,
            end: range.end,
        });
    }

    validate_pay_cycle(contract, range)
}
