//! HTTP API module for the Salary Apportioner.
//!
//! This module exposes salary apportionment as a JSON endpoint.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ApportionmentRequest, ContractRequest, ContractSource, PayCycleRangeRequest};
pub use response::ApiError;
pub use state::AppState;
