//! HTTP request handlers for the Pay Revision Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::compute_revision;
use crate::config::RevisionTables;
use crate::error::EngineError;
use crate::models::{PayRecord, RevisionPolicy};
use crate::report::RevisionReport;
use crate::source::PayHistory;

use super::request::{DataSetRevisionRequest, RevisionRequest};
use super::response::{ApiError, ApiErrorResponse, DataSetSummary, RevisionResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/revision", post(revision_handler))
        .route("/datasets", post(upload_handler))
        .route("/datasets/:id", delete(clear_handler))
        .route("/datasets/:id/employees", get(employees_handler))
        .route("/datasets/:id/revision", post(dataset_revision_handler))
        .with_state(state)
}

/// Handler for POST /revision.
///
/// Revises the records supplied in the request body.
async fn revision_handler(
    State(state): State<AppState>,
    payload: Result<Json<RevisionRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing revision request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return error_response(ApiErrorResponse::bad_request(rejection_error(
                rejection,
                correlation_id,
            )));
        }
    };

    if let Err(err) = request.policy.validate() {
        warn!(correlation_id = %correlation_id, error = %err, "Rejected revision policy");
        return error_response(err.into());
    }

    let response = run_revision(&request.records, &request.policy, state.tables());
    info!(
        correlation_id = %correlation_id,
        records = request.records.len(),
        months_revised = response.result.records.len(),
        delta_with_hra = %response.result.totals.delta_with_hra,
        duration_us = response.duration_us,
        "Revision completed successfully"
    );
    json_response(StatusCode::OK, &response)
}

/// Handler for POST /datasets.
///
/// Parses a CSV pay history from the request body and stores it.
async fn upload_handler(State(state): State<AppState>, body: String) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, bytes = body.len(), "Processing data set upload");

    let history = match PayHistory::from_csv_str(&body) {
        Ok(history) => history,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Rejected pay history");
            return error_response(err.into());
        }
    };

    let record_count = history.len();
    let employees = history.employees();
    let dataset_id = state.data_sets().create(history).await;
    info!(
        correlation_id = %correlation_id,
        dataset_id = %dataset_id,
        records = record_count,
        employees = employees.len(),
        "Data set stored"
    );
    json_response(
        StatusCode::CREATED,
        &DataSetSummary {
            dataset_id,
            record_count,
            employees,
        },
    )
}

/// Handler for GET /datasets/:id/employees.
async fn employees_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, dataset_id = %id, "Listing employees");

    let (dataset_id, history) = match load_data_set(&state, &id).await {
        Ok(found) => found,
        Err(err) => return not_found(correlation_id, err),
    };

    json_response(
        StatusCode::OK,
        &DataSetSummary {
            dataset_id,
            record_count: history.len(),
            employees: history.employees(),
        },
    )
}

/// Handler for POST /datasets/:id/revision.
///
/// Revises one employee's records from a stored data set.
async fn dataset_revision_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<DataSetRevisionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, dataset_id = %id, "Processing data set revision request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return error_response(ApiErrorResponse::bad_request(rejection_error(
                rejection,
                correlation_id,
            )));
        }
    };

    let policy = request.policy();
    if let Err(err) = policy.validate() {
        warn!(correlation_id = %correlation_id, error = %err, "Rejected revision policy");
        return error_response(err.into());
    }

    let (_, history) = match load_data_set(&state, &id).await {
        Ok(found) => found,
        Err(err) => return not_found(correlation_id, err),
    };

    let records = history.records_for_employee(&request.employee_no);
    if records.is_empty() {
        return not_found(
            correlation_id,
            EngineError::EmployeeNotFound {
                employee_no: request.employee_no,
            },
        );
    }

    let response = run_revision(&records, &policy, state.tables());
    info!(
        correlation_id = %correlation_id,
        employee_no = %request.employee_no,
        months_revised = response.result.records.len(),
        delta_with_hra = %response.result.totals.delta_with_hra,
        duration_us = response.duration_us,
        "Revision completed successfully"
    );
    json_response(StatusCode::OK, &response)
}

/// Handler for DELETE /datasets/:id.
async fn clear_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();

    let result = match parse_data_set_id(&id) {
        Ok(uuid) => state.data_sets().clear(uuid).await,
        Err(err) => Err(err),
    };
    match result {
        Ok(()) => {
            info!(correlation_id = %correlation_id, dataset_id = %id, "Data set cleared");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => not_found(correlation_id, err),
    }
}

/// Runs the engine and wraps the result with run metadata and the report.
fn run_revision(
    records: &[PayRecord],
    policy: &RevisionPolicy,
    tables: &RevisionTables,
) -> RevisionResponse {
    let start_time = Instant::now();
    let result = compute_revision(records, policy, tables);
    let report = RevisionReport::build(&result, policy);
    let duration_us = start_time.elapsed().as_micros() as u64;

    RevisionResponse {
        revision_id: Uuid::new_v4(),
        calculated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        duration_us,
        result,
        report,
    }
}

fn parse_data_set_id(id: &str) -> Result<Uuid, EngineError> {
    Uuid::parse_str(id).map_err(|_| EngineError::DataSetNotFound { id: id.to_string() })
}

async fn load_data_set(state: &AppState, id: &str) -> Result<(Uuid, PayHistory), EngineError> {
    let uuid = parse_data_set_id(id)?;
    let history = state.data_sets().get(uuid).await?;
    Ok((uuid, history))
}

fn not_found(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(correlation_id = %correlation_id, error = %err, "Lookup failed");
    error_response(err.into())
}

fn rejection_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
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
    }
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
