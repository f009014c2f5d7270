//! AlgorithmService: the single coordinator between HTTP handlers (and the
//! CLI) and the engine.
//!
//! Handlers stay thin and delegate here. The service owns the registry,
//! turns request parameter bags into typed inputs, and logs every run.

use serde_json::{Map, Value};

use algoviz_core::Trace;
use algoviz_engine::{EngineError, Registry};

use crate::content;
use crate::datagen::{self, DataKind, GeneratedData};
use crate::error::{ApiError, UNEXPECTED_RUN_ERROR};
use crate::params::{self, ParamError};
use crate::schema::algorithms::{AlgorithmListResponse, AlgorithmSummary};
use crate::schema::content::ContentResponse;
use crate::schema::datagen::GenerateDataRequest;
use crate::schema::run::{RunAlgorithmRequest, RunAlgorithmResponse};

/// Failure to run an algorithm from a loose request.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("algorithm '{key}': {source}")]
    Params {
        key: String,
        #[source]
        source: ParamError,
    },
}

impl From<RunError> for ApiError {
    fn from(err: RunError) -> Self {
        match err {
            RunError::Engine(err) => ApiError::from(err),
            RunError::Params { .. } => {
                tracing::error!(error = %err, "failed to read algorithm parameters");
                ApiError::InternalError(UNEXPECTED_RUN_ERROR.to_string())
            }
        }
    }
}

/// The central service for running algorithms and serving static content.
pub struct AlgorithmService {
    registry: Registry,
}

impl AlgorithmService {
    pub fn new(registry: Registry) -> Self {
        AlgorithmService { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Runs `key` with parameters read from `params`.
    pub fn execute(&self, key: &str, params: &Map<String, Value>) -> Result<Trace, RunError> {
        let algorithm = self
            .registry
            .get(key)
            .ok_or_else(|| EngineError::UnknownAlgorithm(key.to_string()))?;
        let input = params::extract(algorithm.input_kind(), params).map_err(|source| {
            RunError::Params {
                key: key.to_string(),
                source,
            }
        })?;
        let trace = algorithm.execute(&input)?;
        tracing::info!(
            algorithm = key,
            steps = trace.len(),
            error = trace.is_error(),
            "algorithm run finished"
        );
        Ok(trace)
    }

    /// Handles a `POST /run_algorithm` body.
    pub fn run(&self, req: RunAlgorithmRequest) -> Result<RunAlgorithmResponse, ApiError> {
        let key = req.algorithm.unwrap_or_default();
        let steps = self.execute(&key, &req.params)?;
        Ok(RunAlgorithmResponse { steps })
    }

    pub fn content(&self) -> ContentResponse {
        let (algorithms, data_structures) = content::catalogue();
        ContentResponse {
            algorithms,
            data_structures,
        }
    }

    pub fn algorithms(&self) -> AlgorithmListResponse {
        AlgorithmListResponse {
            algorithms: self
                .registry
                .iter()
                .map(|a| AlgorithmSummary {
                    key: a.key(),
                    category: a.category(),
                    input_kind: a.input_kind(),
                })
                .collect(),
        }
    }

    /// Handles a `POST /generate_data` body.
    pub fn generate(&self, req: &GenerateDataRequest) -> Result<GeneratedData, ApiError> {
        let kind = DataKind::parse(&req.dtype, req.sorted);
        let mut rng = datagen::rng_for(req.seed);
        let data = datagen::generate(kind, req.size, &mut rng)?;
        tracing::debug!(dtype = %req.dtype, size = req.size, "generated input data");
        Ok(data)
    }
}

impl Default for AlgorithmService {
    fn default() -> Self {
        AlgorithmService::new(Registry::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bag(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn execute_runs_registered_algorithm() {
        let service = AlgorithmService::default();
        let trace = service
            .execute("count_set_bits", &bag(json!({ "n": "5" })))
            .unwrap();
        assert!(trace.last().unwrap().is_complete());
        assert_eq!(trace.count("increment_count"), 2);
    }

    #[test]
    fn unknown_key_and_bad_params_are_distinguished() {
        let service = AlgorithmService::default();
        assert!(matches!(
            service.execute("nope", &Map::new()),
            Err(RunError::Engine(EngineError::UnknownAlgorithm(_)))
        ));
        assert!(matches!(
            service.execute("linear_search", &bag(json!({ "input_data": [1] }))),
            Err(RunError::Params { .. })
        ));
    }

    #[test]
    fn precondition_failure_is_a_successful_run() {
        let service = AlgorithmService::default();
        let trace = service
            .execute("hanoi", &bag(json!({ "n_disks": 9 })))
            .unwrap();
        assert!(trace.is_error());
    }

    #[test]
    fn listing_follows_registry_order() {
        let service = AlgorithmService::default();
        let listing = service.algorithms();
        assert_eq!(listing.algorithms.len(), 19);
        assert_eq!(listing.algorithms[0].key, "linear_search");
    }
}
