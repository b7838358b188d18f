//! Request types for the Salary Apportioner API.
//!
//! This module defines the JSON request structures for the `/apportion` endpoint.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{EmploymentContract, PayCycle, PayCycleRange, WorkingDays};

/// Request body for the `/apportion` endpoint.
///
/// Exactly one of `contract` and `contract_id` must be given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApportionmentRequest {
    /// The contract terms, supplied inline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract: Option<ContractRequest>,
    /// The id of a contract record loaded from configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_id: Option<String>,
    /// The pay cycle to apportion the salary over.
    pub pay_cycle_range: PayCycleRangeRequest,
}

/// Where the contract for a request comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum ContractSource {
    /// Terms supplied in the request body.
    Inline(EmploymentContract),
    /// A configured contract record id.
    Configured(String),
}

impl ApportionmentRequest {
    /// Resolves the contract source, or describes why the request has none.
    pub fn contract_source(self) -> Result<ContractSource, String> {
        match (self.contract, self.contract_id) {
            (Some(contract), None) => Ok(ContractSource::Inline(contract.into())),
            (None, Some(id)) => Ok(ContractSource::Configured(id)),
            (Some(_), Some(_)) => {
                Err("Provide either 'contract' or 'contract_id', not both".to_string())
            }
            (None, None) => Err("missing field: contract or contract_id".to_string()),
        }
    }
}

/// Contract terms in an apportionment request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractRequest {
    /// How often the salary is paid ("Weekly" or "Monthly").
    pub pay_cycle: PayCycle,
    /// The full salary for one complete pay cycle.
    pub pay_cycle_salary: Decimal,
    /// Scheduled weekdays as integers, Sunday=0 through Saturday=6.
    pub working_days: WorkingDays,
    /// The first day of employment.
    pub start_date: NaiveDate,
}

/// Pay cycle range in an apportionment request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayCycleRangeRequest {
    /// The first day of the cycle (inclusive).
    pub start: NaiveDate,
    /// The last day of the cycle (inclusive).
    pub end: NaiveDate,
}

impl From<ContractRequest> for EmploymentContract {
    fn from(req: ContractRequest) -> Self {
        EmploymentContract {
            pay_cycle: req.pay_cycle,
            pay_cycle_salary: req.pay_cycle_salary,
            working_days: req.working_days,
            start_date: req.start_date,
        }
    }
}

impl From<PayCycleRangeRequest> for PayCycleRange {
    fn from(req: PayCycleRangeRequest) -> Self {
        PayCycleRange::new(req.start, req.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WorkingDay;

    #[test]
    fn test_deserialize_inline_contract_request() {
        let json = r#"{
            "contract": {
                "pay_cycle": "Monthly",
                "pay_cycle_salary": 1000,
                "working_days": [1, 2, 3, 4, 5],
                "start_date": "2023-01-17"
            },
            "pay_cycle_range": {
                "start": "2023-01-01",
                "end": "2023-01-31"
            }
        }"#;

        let request: ApportionmentRequest = serde_json::from_str(json).unwrap();
        let range: PayCycleRange = request.pay_cycle_range.clone().into();
        assert_eq!(range.start, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());

        match request.contract_source().unwrap() {
            ContractSource::Inline(contract) => {
                assert_eq!(contract.pay_cycle, PayCycle::Monthly);
                assert_eq!(contract.working_days, WorkingDays::weekdays());
            }
            other => panic!("expected inline contract, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_contract_id_request() {
        let json = r#"{
            "contract_id": "weekly_mon_tue",
            "pay_cycle_range": { "start": "2023-01-02", "end": "2023-01-08" }
        }"#;

        let request: ApportionmentRequest = serde_json::from_str(json).unwrap();
        assert_eq!(
            request.contract_source().unwrap(),
            ContractSource::Configured("weekly_mon_tue".to_string())
        );
    }

    #[test]
    fn test_missing_working_days_is_rejected() {
        let json = r#"{
            "pay_cycle": "Weekly",
            "pay_cycle_salary": "1000",
            "start_date": "2023-01-02"
        }"#;

        let err = serde_json::from_str::<ContractRequest>(json).unwrap_err();
        assert!(err.to_string().contains("missing field `working_days`"));
    }

    #[test]
    fn test_explicit_empty_working_days_is_accepted() {
        let json = r#"{
            "pay_cycle": "Weekly",
            "pay_cycle_salary": "1000",
            "working_days": [],
            "start_date": "2023-01-02"
        }"#;

        let contract: ContractRequest = serde_json::from_str(json).unwrap();
        assert!(contract.working_days.is_empty());
    }

    #[test]
    fn test_request_without_contract_is_rejected() {
        let json = r#"{ "pay_cycle_range": { "start": "2023-01-02", "end": "2023-01-08" } }"#;
        let request: ApportionmentRequest = serde_json::from_str(json).unwrap();
        let message = request.contract_source().unwrap_err();
        assert!(message.contains("missing field"));
    }

    #[test]
    fn test_request_with_both_sources_is_rejected() {
        let request = ApportionmentRequest {
            contract: Some(ContractRequest {
                pay_cycle: PayCycle::Weekly,
                pay_cycle_salary: Decimal::new(1000, 0),
                working_days: [WorkingDay::Monday].into_iter().collect(),
                start_date: NaiveDate::from_ymd_opt(2023, 1, 2).unwrap(),
            }),
            contract_id: Some("weekly_mon_tue".to_string()),
            pay_cycle_range: PayCycleRangeRequest {
                start: NaiveDate::from_ymd_opt(2023, 1, 2).unwrap(),
                end: NaiveDate::from_ymd_opt(2023, 1, 8).unwrap(),
            },
        };
        assert!(request.contract_source().unwrap_err().contains("not both"));
    }
}
