//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for all API endpoints. It implements
//! `axum::response::IntoResponse` and renders as `{"error": "<message>"}`
//! with the matching status code.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use algoviz_core::CoreError;
use algoviz_engine::EngineError;

/// Message returned for any failure while preparing or running an algorithm.
/// The underlying cause is logged, never sent to the client.
pub const UNEXPECTED_RUN_ERROR: &str =
    "An unexpected error occurred on the server while running the algorithm.";

/// API errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Entity not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Invalid request (400).
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error (500).
    #[error("{0}")]
    InternalError(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status(), axum::Json(body)).into_response()
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::UnknownAlgorithm(key) => ApiError::BadRequest(format!(
                "Algorithm '{key}' not found or is not implemented."
            )),
            EngineError::InputMismatch { .. } => {
                tracing::error!(error = %err, "algorithm input mismatch");
                ApiError::InternalError(UNEXPECTED_RUN_ERROR.to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        tracing::error!(error = %err, "data generation failed");
        ApiError::InternalError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algoviz_core::InputKind;

    #[test]
    fn unknown_algorithm_is_bad_request() {
        let err = ApiError::from(EngineError::UnknownAlgorithm("bogo_sort".into()));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.to_string(),
            "Algorithm 'bogo_sort' not found or is not implemented."
        );
    }

    #[test]
    fn input_mismatch_hides_detail() {
        let err = ApiError::from(EngineError::InputMismatch {
            key: "hanoi".into(),
            expected: InputKind::Hanoi,
            got: InputKind::Array,
        });
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), UNEXPECTED_RUN_ERROR);
    }
}
