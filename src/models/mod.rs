//! Core data models for the Salary Apportioner.
//!
//! This module contains all the domain models used throughout the crate.

mod apportionment_result;
mod contract;
mod pay_cycle_range;
mod working_day;

pub use apportionment_result::{ApportionmentOutcome, ApportionmentResult, AuditStep, AuditTrace};
pub use contract::{EmploymentContract, PayCycle};
pub use pay_cycle_range::PayCycleRange;
pub use working_day::{WorkingDay, WorkingDays};
