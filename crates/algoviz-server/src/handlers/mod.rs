//! HTTP handler modules for the algoviz API.
//!
//! Each sub-module implements thin handlers that parse requests, delegate to
//! [`AlgorithmService`](crate::service::AlgorithmService), and return JSON
//! responses. No business logic lives in handlers.

pub mod algorithms;
pub mod content;
pub mod datagen;
pub mod run;

use axum::http::Uri;

use crate::error::ApiError;

/// Answers any unrouted path with a JSON 404.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
