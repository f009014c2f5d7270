//! Core error types for algoviz-core.
//!
//! Uses `thiserror` for structured, matchable error variants covering
//! failures in building or validating input data.

use thiserror::Error;

/// Errors produced by the algoviz-core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An edge referenced a node that has no adjacency entry.
    #[error("unknown node: '{node}'")]
    UnknownNode { node: String },

    /// An edge failed validation.
    #[error("invalid edge: {reason}")]
    InvalidEdge { reason: String },
}
