//! API schema types for request/response definitions.
//!
//! Each sub-module defines the request and response types for one endpoint
//! group. Types use serde derives for JSON serialization/deserialization.

pub mod algorithms;
pub mod content;
pub mod datagen;
pub mod run;
