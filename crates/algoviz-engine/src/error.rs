//! Engine error types.
//!
//! These are invocation failures, distinct from precondition failures. An
//! unsorted array handed to binary search is a valid call that produces a
//! single-step `error` trace; an input of the wrong shape never reaches the
//! algorithm and surfaces as an [`EngineError`].

use algoviz_core::InputKind;
use thiserror::Error;

/// Errors produced when dispatching an algorithm.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// No algorithm is registered under the selector key.
    #[error("algorithm '{0}' not found or is not implemented")]
    UnknownAlgorithm(String),

    /// The input shape does not match what the algorithm consumes.
    #[error("algorithm '{key}' expects {expected} input, got {got}")]
    InputMismatch {
        key: String,
        expected: InputKind,
        got: InputKind,
    },
}
