//! `POST /run_algorithm` request/response types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use algoviz_core::Trace;

/// Request to run one algorithm.
///
/// Everything other than `algorithm` is collected into `params`; which
/// fields are read depends on the algorithm.
#[derive(Debug, Clone, Deserialize)]
pub struct RunAlgorithmRequest {
    /// Selector key, e.g. `"bubble_sort"`.
    #[serde(default)]
    pub algorithm: Option<String>,
    #[serde(flatten)]
    pub params: Map<String, Value>,
}

/// The full step trace of one run.
#[derive(Debug, Clone, Serialize)]
pub struct RunAlgorithmResponse {
    pub steps: Trace,
}
