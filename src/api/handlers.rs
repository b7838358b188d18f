//! HTTP request handlers for the Salary Apportioner API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_apportionment;
use crate::config::ConfigLoader;
use crate::error::EngineError;
use crate::models::{ApportionmentResult, AuditTrace, EmploymentContract, PayCycleRange};

use super::request::{ApportionmentRequest, ContractSource};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/apportion", post(apportion_handler))
        .with_state(state)
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Handler for POST /apportion endpoint.
///
/// Accepts an apportionment request and returns the apportioned salary.
async fn apportion_handler(
    State(state): State<AppState>,
    payload: Result<Json<ApportionmentRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing apportionment request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return json_response(StatusCode::BAD_REQUEST, error);
        }
    };

    let range: PayCycleRange = request.pay_cycle_range.clone().into();
    let contract = match request.contract_source() {
        Ok(source) => match resolve_contract(source, state.config()) {
            Ok(contract) => contract,
            Err(err) => {
                warn!(correlation_id = %correlation_id, error = %err, "Contract lookup failed");
                return ApiErrorResponse::from(err).into_response();
            }
        },
        Err(message) => {
            warn!(correlation_id = %correlation_id, error = %message, "No contract supplied");
            return json_response(StatusCode::BAD_REQUEST, ApiError::validation_error(message));
        }
    };

    match perform_apportionment(&contract, &range) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                pay_cycle = %result.pay_cycle,
                outcome = %result.outcome,
                amount = %result.amount,
                duration_us = result.audit_trace.duration_us,
                "Apportionment completed successfully"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Apportionment failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Returns the contract a request refers to.
fn resolve_contract(
    source: ContractSource,
    config: &ConfigLoader,
) -> Result<EmploymentContract, EngineError> {
    match source {
        ContractSource::Inline(contract) => Ok(contract),
        ContractSource::Configured(id) => config.get_contract(&id).cloned(),
    }
}

/// Apportions the contract's salary over the range and wraps it in a result.
fn perform_apportionment(
    contract: &EmploymentContract,
    range: &PayCycleRange,
) -> Result<ApportionmentResult, EngineError> {
    let start_time = Instant::now();
    let calculation = calculate_apportionment(contract, range, 1)?;
    let duration_us = start_time.elapsed().as_micros() as u64;

    Ok(ApportionmentResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        pay_cycle: contract.pay_cycle,
        pay_cycle_range: *range,
        amount: calculation.amount,
        outcome: calculation.outcome,
        working_days_in_cycle: calculation.tally.map(|t| t.working_days_in_cycle),
        days_worked: calculation.tally.map(|t| t.days_worked),
        audit_trace: AuditTrace {
            steps: vec![calculation.audit_step],
            duration_us,
        },
    })
}
