//! Configuration loading for the Salary Apportioner.
//!
//! This module provides functionality to load service metadata and named
//! employment contract records from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use salary_apportioner::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/apportioner").unwrap();
//! println!("Loaded service: {}", config.service().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{ApportionerConfig, ContractRecord, ServiceMetadata};
