//! Apportionment result models for the Salary Apportioner.
//!
//! This module contains the [`ApportionmentResult`] type and its associated
//! structures that capture the output of an apportionment, including the
//! outcome that decided the amount and an audit trace.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{PayCycle, PayCycleRange};

/// Which branch of the apportionment policy produced the amount.
///
/// # Example
///
/// ```
/// use salary_apportioner::models::ApportionmentOutcome;
///
/// let outcome = ApportionmentOutcome::Prorated;
/// assert_eq!(serde_json::to_string(&outcome).unwrap(), "\"prorated\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApportionmentOutcome {
    /// Employment covered the whole cycle; the full salary is due.
    FullSalary,
    /// Employment started after the cycle ended; nothing is due.
    NotStarted,
    /// No scheduled working day falls inside the cycle; nothing is due.
    NoWorkingDays,
    /// Employment started inside the cycle; the salary is pro-rated.
    Prorated,
}

impl std::fmt::Display for ApportionmentOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApportionmentOutcome::FullSalary => write!(f, "full_salary"),
            ApportionmentOutcome::NotStarted => write!(f, "not_started"),
            ApportionmentOutcome::NoWorkingDays => write!(f, "no_working_days"),
            ApportionmentOutcome::Prorated => write!(f, "prorated"),
        }
    }
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete audit trace for an apportionment.
///
/// # Example
///
/// ```
/// use salary_apportioner::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     duration_us: 12,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of an apportionment request.
///
/// `amount` is the exact quotient; no currency rounding is applied.
///
/// # Example
///
/// ```
/// use salary_apportioner::models::{
///     ApportionmentOutcome, ApportionmentResult, AuditTrace, PayCycle, PayCycleRange,
/// };
/// use chrono::{NaiveDate, Utc};
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let result = ApportionmentResult {
///     calculation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     pay_cycle: PayCycle::Monthly,
///     pay_cycle_range: PayCycleRange::new(
///         NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
///         NaiveDate::from_ymd_opt(2023, 1, 31).unwrap(),
///     ),
///     amount: Decimal::new(500, 0),
///     outcome: ApportionmentOutcome::Prorated,
///     working_days_in_cycle: Some(22),
///     days_worked: Some(11),
///     audit_trace: AuditTrace { steps: vec![], duration_us: 0 },
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApportionmentResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The contract's pay cycle.
    pub pay_cycle: PayCycle,
    /// The cycle the salary was apportioned for.
    pub pay_cycle_range: PayCycleRange,
    /// The apportioned salary.
    pub amount: Decimal,
    /// The policy branch that produced `amount`.
    pub outcome: ApportionmentOutcome,
    /// Scheduled working days in the cycle, when the day scan ran.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_days_in_cycle: Option<u32>,
    /// Scheduled working days on or after the start date, when the day scan ran.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_worked: Option<u32>,
    /// Audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
