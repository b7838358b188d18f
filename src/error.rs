//! Error types for the Salary Apportioner.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while apportioning a salary.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::PayCycle;

/// The main error type for the Salary Apportioner.
///
/// All operations in the crate return this error type. Validation errors
/// reject the whole computation; no fallback amount is ever produced.
///
/// # Example
///
/// ```
/// use salary_apportioner::error::EngineError;
/// use rust_decimal::Decimal;
///
/// let error = EngineError::InvalidSalary {
///     salary: Decimal::ZERO,
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid pay cycle salary: 0. Pay cycle salary must be greater than 0"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The pay cycle salary was zero or negative.
    #[error("Invalid pay cycle salary: {salary}. Pay cycle salary must be greater than 0")]
    InvalidSalary {
        /// The rejected salary.
        salary: Decimal,
    },

    /// The pay cycle range ends before it begins.
    #[error("Pay cycle cannot end before it begins: {start} - {end}")]
    InvalidRange {
        /// The first day of the range.
        start: NaiveDate,
        /// The last day of the range.
        end: NaiveDate,
    },

    /// The range is not exactly one aligned cycle of the contract's pay cycle.
    #[error("{start} - {end} is not a valid {} pay cycle", .pay_cycle.label())]
    InvalidCyclePeriod {
        /// The pay cycle the range was validated against.
        pay_cycle: PayCycle,
        /// The first day of the range.
        start: NaiveDate,
        /// The last day of the range.
        end: NaiveDate,
    },

    /// A working day value fell outside Sunday=0 through Saturday=6.
    #[error("Invalid working day: {value}. Working days must be between 0 (Sunday) and 6 (Saturday)")]
    InvalidWorkingDay {
        /// The rejected value.
        value: u8,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No contract record with the given id was loaded.
    #[error("Contract not found: {id}")]
    ContractNotFound {
        /// The contract id that was not found.
        id: String,
    },
}

impl EngineError {
    /// Returns true for errors caused by the contract or range supplied
    /// to a calculation, as opposed to configuration problems.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidSalary { .. }
                | EngineError::InvalidRange { .. }
                | EngineError::InvalidCyclePeriod { .. }
                | EngineError::InvalidWorkingDay { .. }
        )
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_invalid_salary_displays_salary() {
        let error = EngineError::InvalidSalary {
            salary: Decimal::from_str("-10").unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid pay cycle salary: -10. Pay cycle salary must be greater than 0"
        );
    }

    #[test]
    fn test_invalid_range_displays_dates() {
        let error = EngineError::InvalidRange {
            start: date(2023, 1, 31),
            end: date(2023, 1, 1),
        };
        assert_eq!(
            error.to_string(),
            "Pay cycle cannot end before it begins: 2023-01-31 - 2023-01-01"
        );
    }

    #[test]
    fn test_invalid_monthly_cycle_displays_range() {
        let error = EngineError::InvalidCyclePeriod {
            pay_cycle: PayCycle::Monthly,
            start: date(2023, 1, 1),
            end: date(2023, 2, 5),
        };
        assert_eq!(
            error.to_string(),
            "2023-01-01 - 2023-02-05 is not a valid monthly pay cycle"
        );
    }

    #[test]
    fn test_invalid_weekly_cycle_displays_range() {
        let error = EngineError::InvalidCyclePeriod {
            pay_cycle: PayCycle::Weekly,
            start: date(2023, 1, 2),
            end: date(2023, 1, 31),
        };
        assert_eq!(
            error.to_string(),
            "2023-01-02 - 2023-01-31 is not a valid weekly pay cycle"
        );
    }

    #[test]
    fn test_invalid_working_day_displays_value() {
        let error = EngineError::InvalidWorkingDay { value: 7 };
        assert!(error.to_string().starts_with("Invalid working day: 7."));
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_contract_not_found_displays_id() {
        let error = EngineError::ContractNotFound {
            id: "unknown".to_string(),
        };
        assert_eq!(error.to_string(), "Contract not found: unknown");
    }

    #[test]
    fn test_validation_errors_are_classified() {
        assert!(EngineError::InvalidSalary { salary: Decimal::ZERO }.is_validation_error());
        assert!(EngineError::InvalidWorkingDay { value: 9 }.is_validation_error());
        assert!(
            !EngineError::ConfigNotFound {
                path: "/x".to_string()
            }
            .is_validation_error()
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_salary() -> EngineResult<()> {
            Err(EngineError::InvalidSalary {
                salary: Decimal::ZERO,
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_salary()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
