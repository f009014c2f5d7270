//! Algorithm execution handler.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::error::ApiError;
use crate::schema::run::{RunAlgorithmRequest, RunAlgorithmResponse};
use crate::state::AppState;

/// Runs one algorithm and returns its full step trace.
///
/// `POST /run_algorithm`
///
/// Precondition failures (unsorted input, missing start node) still answer
/// 200 with a single `error` step. A body that is not a JSON object with a
/// string `algorithm`, or an unknown algorithm, is a 400; unreadable
/// parameters are a 500 with the cause logged.
pub async fn run_algorithm(
    State(state): State<AppState>,
    payload: Result<Json<RunAlgorithmRequest>, JsonRejection>,
) -> Result<Json<RunAlgorithmResponse>, ApiError> {
    let Json(req) = payload?;
    let response = state.service.run(req)?;
    Ok(Json(response))
}
