//! Step-trace engine: every algorithm as a pure function from input to
//! [`Trace`](algoviz_core::Trace).
//!
//! Each function copies its input, runs to completion on a single thread and
//! returns the full trace. Precondition failures (an unsorted array for
//! binary search, a missing start node, an oversized Fibonacci request) come
//! back as a single `error` step rather than a Rust error.
//!
//! # Modules
//!
//! - [`searching`]: linear, binary, jump and interpolation search
//! - [`sorting`]: bubble, selection, insertion, merge and quick sort
//! - [`traversal`]: BFS and DFS
//! - [`shortest_path`]: Dijkstra
//! - [`trees`]: BST construction
//! - [`dynamic`]: memoized Fibonacci and 0/1 knapsack
//! - [`greedy`]: fractional knapsack
//! - [`recursion`]: Tower of Hanoi
//! - [`bitwise`]: XOR swap and set-bit counting
//! - [`registry`]: [`Algorithm`] trait and the selector-keyed [`Registry`]
//! - [`error`]: [`EngineError`]

pub mod bitwise;
pub mod dynamic;
pub mod error;
pub mod greedy;
pub mod recursion;
pub mod registry;
pub mod searching;
pub mod shortest_path;
pub mod sorting;
pub mod traversal;
pub mod trees;

// Re-export commonly used types
pub use error::EngineError;
pub use registry::{Algorithm, Registry};
