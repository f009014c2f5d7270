//! HTTP/JSON API server for the algorithm visualizer.
//!
//! Serves the static algorithm catalogue, generates random inputs, and runs
//! algorithms through the engine registry, returning their step traces.
//! This crate contains the server framework, the request parameter adapter,
//! API schema types, error handling, and route definitions.

pub mod content;
pub mod datagen;
pub mod error;
pub mod handlers;
pub mod params;
pub mod router;
pub mod schema;
pub mod service;
pub mod state;
