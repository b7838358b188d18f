//! Configuration types for the Salary Apportioner.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;
use std::collections::HashMap;

use crate::models::EmploymentContract;

/// Metadata about the apportionment service.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceMetadata {
    /// The human-readable name of the service.
    pub name: String,
    /// The configuration version.
    pub version: String,
    /// A description of the deployment.
    #[serde(default)]
    pub description: String,
}

/// A named employment contract supplied by the payroll caller.
#[derive(Debug, Clone, Deserialize)]
pub struct ContractRecord {
    /// The identifier requests use to refer to this contract.
    pub id: String,
    /// A description of the contract.
    #[serde(default)]
    pub description: String,
    /// The contract terms.
    pub contract: EmploymentContract,
}

/// The complete apportioner configuration.
#[derive(Debug, Clone)]
pub struct ApportionerConfig {
    service: ServiceMetadata,
    contracts: HashMap<String, ContractRecord>,
}

impl ApportionerConfig {
    /// Creates a configuration, indexing the contract records by id.
    ///
    /// A later record with a duplicate id replaces an earlier one.
    pub fn new(service: ServiceMetadata, records: Vec<ContractRecord>) -> Self {
        let contracts = records
            .into_iter()
            .map(|record| (record.id.clone(), record))
            .collect();
        Self { service, contracts }
    }

    /// Returns the service metadata.
    pub fn service(&self) -> &ServiceMetadata {
        &self.service
    }

    /// Returns the contract records keyed by id.
    pub fn contracts(&self) -> &HashMap<String, ContractRecord> {
        &self.contracts
    }
}
