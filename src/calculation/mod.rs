//! Calculation logic for the Salary Apportioner.
//!
//! This module contains the pay cycle validation checks and the apportionment
//! routine that pro-rates a cycle's salary by the scheduled working days
//! covered by the employee's tenure.

mod apportionment;
mod cycle_validation;

pub use apportionment::{
    APPORTIONMENT_RULE_ID, ApportionmentCalculation, WorkingDayTally, apportion_salary,
    calculate_apportionment, count_working_days,
};
pub use cycle_validation::{
    WEEKLY_CYCLE_DAY_DIFFERENCE, diff_in_days, is_last_day_of_month, is_valid_monthly_cycle,
    is_valid_weekly_cycle, validate_inputs, validate_monthly_cycle, validate_pay_cycle,
    validate_weekly_cycle,
};
