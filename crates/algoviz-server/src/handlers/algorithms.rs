//! Algorithm listing handler.

use axum::extract::State;
use axum::Json;

use crate::schema::algorithms::AlgorithmListResponse;
use crate::state::AppState;

/// Lists registered selector keys with their category and input kind.
///
/// `GET /algorithms`
pub async fn list_algorithms(State(state): State<AppState>) -> Json<AlgorithmListResponse> {
    Json(state.service.algorithms())
}
