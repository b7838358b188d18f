//! Salary apportionment.
//!
//! This module computes the share of a pay cycle's salary owed to an
//! employee whose employment may have started part way through the cycle.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{ApportionmentOutcome, AuditStep, EmploymentContract, PayCycleRange};

use super::cycle_validation::validate_inputs;

/// Rule identifier recorded on apportionment audit steps.
pub const APPORTIONMENT_RULE_ID: &str = "salary_apportionment";

/// Scheduled working day counts for one pay cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkingDayTally {
    /// Days in the cycle whose weekday is scheduled.
    pub working_days_in_cycle: u32,
    /// Scheduled days on or after the employment start date.
    pub days_worked: u32,
}

/// The result of an apportionment, including the amount and audit step.
#[derive(Debug, Clone)]
pub struct ApportionmentCalculation {
    /// The apportioned salary.
    pub amount: Decimal,
    /// The policy branch that produced the amount.
    pub outcome: ApportionmentOutcome,
    /// The day counts, present when the day scan ran.
    pub tally: Option<WorkingDayTally>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Counts the scheduled working days in the range, and how many of those
/// fall on or after the contract's start date.
///
/// The range is walked with a local cursor and is left untouched.
pub fn count_working_days(contract: &EmploymentContract, range: &PayCycleRange) -> WorkingDayTally {
    let mut tally = WorkingDayTally {
        working_days_in_cycle: 0,
        days_worked: 0,
    };

    for day in range.days() {
        if !contract.working_days.contains_date(day) {
            continue;
        }
        tally.working_days_in_cycle += 1;
        if day >= contract.start_date {
            tally.days_worked += 1;
        }
    }

    tally
}

/// Scales `salary` by `days_worked / working_days_in_cycle`.
///
/// Multiplies first so terminating quotients stay exact. When the product
/// would exceed Decimal's 28 significant digits the salary is divided first
/// instead, rounding the per-day share to 28 digits. The tally must have at
/// least one working day in the cycle.
fn prorate(salary: Decimal, tally: WorkingDayTally) -> Decimal {
    if tally.days_worked == tally.working_days_in_cycle {
        return salary;
    }

    let worked = Decimal::from(tally.days_worked);
    let total = Decimal::from(tally.working_days_in_cycle);
    match salary.checked_mul(worked) {
        Some(product) => product / total,
        // days_worked < working_days_in_cycle, so the result stays below salary
        None => salary / total * worked,
    }
}

/// Apportions the contract's salary over one pay cycle.
///
/// Validation runs first (see [`validate_inputs`](super::validate_inputs)); any
/// failure rejects the whole computation. Then:
///
/// - employment started on or before the cycle start, with at least one
///   working day scheduled: the full salary
/// - employment started after the cycle end: zero
/// - otherwise each day of the cycle is scanned; with no scheduled working
///   day in the cycle the result is zero, else
///   `salary * days_worked / working_days_in_cycle`
///
/// No rounding is applied to the quotient.
///
/// # Example
///
/// ```
/// use salary_apportioner::calculation::apportion_salary;
/// use salary_apportioner::models::{EmploymentContract, PayCycle, PayCycleRange, WorkingDays};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let contract = EmploymentContract {
///     pay_cycle: PayCycle::Monthly,
///     pay_cycle_salary: Decimal::new(1000, 0),
///     working_days: WorkingDays::weekdays(),
///     start_date: NaiveDate::from_ymd_opt(2023, 1, 17).unwrap(),
/// };
/// let range = PayCycleRange::new(
///     NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2023, 1, 31).unwrap(),
/// );
///
/// assert_eq!(apportion_salary(&contract, &range).unwrap(), Decimal::new(500, 0));
/// ```
pub fn apportion_salary(contract: &EmploymentContract, range: &PayCycleRange) -> EngineResult<Decimal> {
    calculate_apportionment(contract, range, 1).map(|calculation| calculation.amount)
}

/// Apportions the contract's salary and records how the amount was reached.
///
/// Same policy as [`apportion_salary`]; additionally reports the outcome,
/// the day counts when the day scan ran, and an [`AuditStep`].
pub fn calculate_apportionment(
    contract: &EmploymentContract,
    range: &PayCycleRange,
    step_number: u32,
) -> EngineResult<ApportionmentCalculation> {
    validate_inputs(contract, range)?;

    let salary = contract.pay_cycle_salary;
    let input = serde_json::json!({
        "pay_cycle": contract.pay_cycle,
        "pay_cycle_salary": salary.normalize().to_string(),
        "working_days": contract.working_days,
        "start_date": contract.start_date,
        "pay_cycle_start": range.start,
        "pay_cycle_end": range.end
    });

    let (amount, outcome, tally, reasoning) =
        if contract.start_date <= range.start && contract.has_working_days() {
            (
                salary,
                ApportionmentOutcome::FullSalary,
                None,
                format!(
                    "Employment started {} on or before cycle start {}; full salary ${} is due",
                    contract.start_date,
                    range.start,
                    salary.normalize()
                ),
            )
        } else if contract.start_date > range.end {
            (
                Decimal::ZERO,
                ApportionmentOutcome::NotStarted,
                None,
                format!(
                    "Employment starts {} after cycle end {}; nothing is due",
                    contract.start_date, range.end
                ),
            )
        } else {
            let tally = count_working_days(contract, range);
            if tally.working_days_in_cycle == 0 {
                (
                    Decimal::ZERO,
                    ApportionmentOutcome::NoWorkingDays,
                    Some(tally),
                    format!(
                        "No scheduled working days ({}) fall in {}; nothing is due",
                        contract.working_days, range
                    ),
                )
            } else {
                let amount = prorate(salary, tally);
                (
                    amount,
                    ApportionmentOutcome::Prorated,
                    Some(tally),
                    format!(
                        "${} x {} / {} working days = ${}",
                        salary.normalize(),
                        tally.days_worked,
                        tally.working_days_in_cycle,
                        amount.normalize()
                    ),
                )
            }
        };

    debug!(
        pay_cycle = %contract.pay_cycle,
        range = %range,
        outcome = %outcome,
        amount = %amount,
        "Salary apportioned"
    );

    let output = match tally {
        Some(tally) => serde_json::json!({
            "amount": amount.normalize().to_string(),
            "outcome": outcome,
            "working_days_in_cycle": tally.working_days_in_cycle,
            "days_worked": tally.days_worked
        }),
        None => serde_json::json!({
            "amount": amount.normalize().to_string(),
            "outcome": outcome
        }),
    };

    Ok(ApportionmentCalculation {
        amount,
        outcome,
        tally,
        audit_step: AuditStep {
            step_number,
            rule_id: APPORTIONMENT_RULE_ID.to_string(),
            rule_name: "Salary Apportionment".to_string(),
            input,
            output,
            reasoning,
        },
    })
}
