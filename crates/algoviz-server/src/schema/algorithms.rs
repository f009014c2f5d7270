//! `GET /algorithms` response types.

use serde::Serialize;

use algoviz_core::InputKind;

/// One registered algorithm.
#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmSummary {
    pub key: &'static str,
    pub category: &'static str,
    pub input_kind: InputKind,
}

#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmListResponse {
    pub algorithms: Vec<AlgorithmSummary>,
}
