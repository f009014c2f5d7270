//! Data model for algorithm step traces.
//!
//! An algorithm run produces a [`Trace`]: an ordered, append-only list of
//! [`Step`]s. Each step is one tagged [`Action`] (from a closed per-family
//! vocabulary) plus a human-readable message. A front-end can reconstruct
//! every intermediate state by folding the steps in order.
//!
//! # Modules
//!
//! - [`action`]: per-family action enums and the snapshot types they carry
//! - [`step`]: [`Step`] and the [`Action`] wrapper
//! - [`trace`]: [`Trace`], the append-only step sequence
//! - [`graph`]: [`Graph`] input model (layout + adjacency lists)
//! - [`input`]: typed [`AlgorithmInput`]s and their [`InputKind`]
//! - [`error`]: [`CoreError`]

pub mod action;
pub mod error;
pub mod graph;
pub mod input;
pub mod step;
pub mod trace;

// Re-export commonly used types
pub use action::{
    BitwiseAction, DpAction, GraphAction, GreedyAction, Lifecycle, RecursionAction, SearchAction,
    SortAction, TreeAction,
};
pub use error::CoreError;
pub use graph::{Graph, Neighbor, NodeId, Position};
pub use input::{AlgorithmInput, FractionalItem, InputKind, ItemId, KnapsackItem};
pub use step::{Action, Step};
pub use trace::Trace;
