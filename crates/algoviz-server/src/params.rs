//! Adapter from a loose request parameter bag to a typed [`AlgorithmInput`].
//!
//! The fields read depend only on the algorithm's [`InputKind`]. Integer
//! fields accept JSON numbers (fractions are truncated toward zero) or
//! numeric strings.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use algoviz_core::{AlgorithmInput, Graph, InputKind};

/// Default `n` for Fibonacci when the request omits it.
pub const DEFAULT_FIB_N: u32 = 5;

/// Default disk count for Hanoi when the request omits it.
pub const DEFAULT_HANOI_DISKS: u32 = 3;

/// A parameter that is missing or cannot be read as the expected type.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParamError {
    #[error("missing parameter '{0}'")]
    Missing(&'static str),

    #[error("invalid parameter '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Builds the input for an algorithm of the given kind from `params`.
pub fn extract(
    kind: InputKind,
    params: &Map<String, Value>,
) -> Result<AlgorithmInput, ParamError> {
    let input = match kind {
        InputKind::Search => AlgorithmInput::Search {
            data: int_list(params, "input_data")?,
            target: required_int(params, "target")?,
        },
        InputKind::Array => AlgorithmInput::Array {
            data: int_list(params, "input_data")?,
        },
        InputKind::Traversal => AlgorithmInput::Traversal {
            graph: graph(params)?,
            start: string(params, "start_node")?,
        },
        InputKind::ShortestPath => AlgorithmInput::ShortestPath {
            graph: graph(params)?,
            start: string(params, "start_node")?,
            end: string(params, "end_node")?,
        },
        InputKind::TreeBuild => AlgorithmInput::TreeBuild {
            values: int_list(params, "input_data")?,
        },
        InputKind::Fibonacci => AlgorithmInput::Fibonacci {
            n: optional_u32(params, "n")?.unwrap_or(DEFAULT_FIB_N),
        },
        InputKind::Knapsack => AlgorithmInput::Knapsack {
            capacity: convert("capacity", required_int(params, "capacity")?)?,
            items: typed(params, "items")?,
        },
        InputKind::FractionalKnapsack => AlgorithmInput::FractionalKnapsack {
            capacity: number(params, "capacity")?,
            items: typed(params, "items")?,
        },
        InputKind::Hanoi => AlgorithmInput::Hanoi {
            n_disks: optional_u32(params, "n_disks")?.unwrap_or(DEFAULT_HANOI_DISKS),
        },
        InputKind::BitwisePair => AlgorithmInput::BitwisePair {
            a: required_int(params, "a")?,
            b: required_int(params, "b")?,
        },
        InputKind::BitCount => AlgorithmInput::BitCount {
            n: convert("n", required_int(params, "n")?)?,
        },
    };
    Ok(input)
}

fn field<'a>(params: &'a Map<String, Value>, name: &'static str) -> Option<&'a Value> {
    params.get(name).filter(|v| !v.is_null())
}

fn required<'a>(
    params: &'a Map<String, Value>,
    name: &'static str,
) -> Result<&'a Value, ParamError> {
    field(params, name).ok_or(ParamError::Missing(name))
}

/// Reads one integer from a number or numeric string.
fn as_int(value: &Value, name: &'static str) -> Result<i64, ParamError> {
    let invalid = |reason: &str| ParamError::Invalid {
        field: name,
        reason: reason.to_string(),
    };
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
            .ok_or_else(|| invalid("not an integer")),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| invalid("not a numeric string")),
        _ => Err(invalid("expected a number")),
    }
}

fn required_int(params: &Map<String, Value>, name: &'static str) -> Result<i64, ParamError> {
    as_int(required(params, name)?, name)
}

fn optional_u32(
    params: &Map<String, Value>,
    name: &'static str,
) -> Result<Option<u32>, ParamError> {
    field(params, name)
        .map(|v| as_int(v, name).and_then(|n| convert(name, n)))
        .transpose()
}

/// Narrows an integer, rejecting values outside the target range.
fn convert<T: TryFrom<i64>>(name: &'static str, value: i64) -> Result<T, ParamError> {
    T::try_from(value).map_err(|_| ParamError::Invalid {
        field: name,
        reason: format!("{value} is out of range"),
    })
}

fn number(params: &Map<String, Value>, name: &'static str) -> Result<f64, ParamError> {
    let value = required(params, name)?;
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| ParamError::Invalid {
        field: name,
        reason: "expected a number".to_string(),
    })
}

fn int_list(params: &Map<String, Value>, name: &'static str) -> Result<Vec<i64>, ParamError> {
    match required(params, name)? {
        Value::Array(values) => values.iter().map(|v| as_int(v, name)).collect(),
        _ => Err(ParamError::Invalid {
            field: name,
            reason: "expected an array".to_string(),
        }),
    }
}

fn string(params: &Map<String, Value>, name: &'static str) -> Result<String, ParamError> {
    match required(params, name)? {
        Value::String(s) => Ok(s.clone()),
        other => Ok(other.to_string()),
    }
}

fn graph(params: &Map<String, Value>) -> Result<Graph, ParamError> {
    typed(params, "input_data")
}

fn typed<T: DeserializeOwned>(
    params: &Map<String, Value>,
    name: &'static str,
) -> Result<T, ParamError> {
    serde_json::from_value(required(params, name)?.clone()).map_err(|e| ParamError::Invalid {
        field: name,
        reason: e.to_string(),
    })
}
