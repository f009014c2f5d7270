//! `POST /generate_data` request type.

use serde::Deserialize;

fn default_size() -> usize {
    10
}

fn default_dtype() -> String {
    "array".to_string()
}

/// Request for a randomized input.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateDataRequest {
    /// Element or node count before per-kind caps.
    #[serde(default = "default_size")]
    pub size: usize,
    /// `array`, `tree` or `graph`. Anything else yields `[]`.
    #[serde(default = "default_dtype")]
    pub dtype: String,
    /// Sort generated arrays ascending.
    #[serde(default)]
    pub sorted: bool,
    /// Fixed seed for reproducible output.
    #[serde(default)]
    pub seed: Option<u64>,
}
