//! Application state shared by every handler.
//!
//! The service is read-only after construction, so [`AppState`] holds it in
//! a plain `Arc` and handlers never take a lock.

use std::sync::Arc;

use algoviz_engine::Registry;

use crate::service::AlgorithmService;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<AlgorithmService>,
}

impl AppState {
    /// State backed by every built-in algorithm.
    pub fn new() -> Self {
        AppState::with_registry(Registry::builtin())
    }

    pub fn with_registry(registry: Registry) -> Self {
        AppState {
            service: Arc::new(AlgorithmService::new(registry)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        AppState::new()
    }
}
