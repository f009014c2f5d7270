//! Static content handler.

use axum::extract::State;
use axum::Json;

use crate::schema::content::ContentResponse;
use crate::state::AppState;

/// Returns descriptive content for every algorithm and data structure.
///
/// `GET /get_content`
pub async fn get_content(State(state): State<AppState>) -> Json<ContentResponse> {
    Json(state.service.content())
}
