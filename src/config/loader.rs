//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading apportioner
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::EmploymentContract;

use super::types::{ApportionerConfig, ContractRecord, ServiceMetadata};

/// Loads and provides access to apportioner configuration.
///
/// # Directory Structure
///
/// ```text
/// config/apportioner/
/// ├── service.yaml          # Service metadata
/// └── contracts/
///     └── monthly_weekdays.yaml  # One contract record per file
/// ```
///
/// # Example
///
/// ```no_run
/// use salary_apportioner::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/apportioner").unwrap();
/// let contract = loader.get_contract("monthly_weekdays").unwrap();
/// println!("Salary: {}", contract.pay_cycle_salary);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ApportionerConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Fails with `ConfigNotFound` if `service.yaml` or the `contracts`
    /// directory is missing, and with `ConfigParseError` if any file is
    /// not valid YAML or holds an invalid contract.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let service = Self::load_yaml::<ServiceMetadata>(&path.join("service.yaml"))?;
        let records = Self::load_contracts(&path.join("contracts"))?;

        info!(
            path = %path.display(),
            service = %service.name,
            contracts = records.len(),
            "Loaded apportioner configuration"
        );

        Ok(Self {
            config: ApportionerConfig::new(service, records),
        })
    }

    /// Loads a single contract record file.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use salary_apportioner::config::ConfigLoader;
    ///
    /// let record = ConfigLoader::load_contract("./config/apportioner/contracts/weekly_mon_tue.yaml")?;
    /// println!("{}: {:?}", record.id, record.contract.pay_cycle);
    /// # Ok::<(), salary_apportioner::error::EngineError>(())
    /// ```
    pub fn load_contract<P: AsRef<Path>>(path: P) -> EngineResult<ContractRecord> {
        Self::load_yaml::<ContractRecord>(path.as_ref())
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads every contract record from the contracts directory.
    ///
    /// An empty directory is valid; requests must then supply contracts inline.
    fn load_contracts(contracts_dir: &Path) -> EngineResult<Vec<ContractRecord>> {
        let contracts_dir_str = contracts_dir.display().to_string();

        let entries = fs::read_dir(contracts_dir).map_err(|_| EngineError::ConfigNotFound {
            path: contracts_dir_str.clone(),
        })?;

        let mut records = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: contracts_dir_str.clone(),
            })?;

            let path = entry.path();
            if path
                .extension()
                .is_some_and(|ext| ext == "yaml" || ext == "yml")
            {
                records.push(Self::load_contract(&path)?);
            }
        }

        records.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(records)
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &ApportionerConfig {
        &self.config
    }

    /// Returns the service metadata.
    pub fn service(&self) -> &ServiceMetadata {
        self.config.service()
    }

    /// Gets a contract by its record id.
    ///
    /// Returns `ContractNotFound` if no record has that id.
    pub fn get_contract(&self, id: &str) -> EngineResult<&EmploymentContract> {
        self.config
            .contracts()
            .get(id)
            .map(|record| &record.contract)
            .ok_or_else(|| EngineError::ContractNotFound { id: id.to_string() })
    }

    /// Returns the loaded contract ids in sorted order.
    pub fn contract_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.config.contracts().keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}
