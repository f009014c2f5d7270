//! Random input generation handler.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::datagen::GeneratedData;
use crate::error::ApiError;
use crate::schema::datagen::GenerateDataRequest;
use crate::state::AppState;

/// Generates a random array, tree value list, or graph.
///
/// `POST /generate_data`
pub async fn generate_data(
    State(state): State<AppState>,
    payload: Result<Json<GenerateDataRequest>, JsonRejection>,
) -> Result<Json<GeneratedData>, ApiError> {
    let Json(req) = payload?;
    let data = state.service.generate(&req)?;
    Ok(Json(data))
}
