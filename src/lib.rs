//! Salary Apportioner
//!
//! This crate computes the salary owed to an employee for one weekly or
//! monthly pay cycle, pro-rating the cycle's salary when employment began
//! part way through the cycle.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
