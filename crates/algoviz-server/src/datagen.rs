//! Randomized input generation for `POST /generate_data`.
//!
//! Generation is deterministic for a given seed: every generator draws from
//! one [`ChaCha8Rng`], so the same `(kind, size, seed)` always yields the same
//! data.

use std::f64::consts::PI;

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use algoviz_core::{CoreError, Graph, Position};

/// Largest array `generate` will produce.
pub const MAX_ARRAY_SIZE: usize = 1000;

/// Tree values are drawn without repetition from `1..=MAX_TREE_VALUE`.
pub const MAX_TREE_VALUE: usize = 99;

/// Node ids run `A..=Z`.
pub const MAX_GRAPH_NODES: usize = 26;

const CANVAS_WIDTH: f64 = 700.0;
const CANVAS_HEIGHT: f64 = 350.0;

/// What to generate, parsed from the request's `dtype`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataKind {
    Array { sorted: bool },
    Tree,
    Graph,
    /// Any unrecognised `dtype`; yields an empty list.
    Unknown,
}

impl DataKind {
    pub fn parse(dtype: &str, sorted: bool) -> Self {
        match dtype {
            "array" => DataKind::Array { sorted },
            "tree" => DataKind::Tree,
            "graph" => DataKind::Graph,
            _ => DataKind::Unknown,
        }
    }
}

/// Generated payload. Serializes as a bare list or a graph object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GeneratedData {
    Values(Vec<i64>),
    Graph(Graph),
}

/// Builds the RNG for one request.
pub fn rng_for(seed: Option<u64>) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed.unwrap_or_else(rand::random))
}

pub fn generate(
    kind: DataKind,
    size: usize,
    rng: &mut ChaCha8Rng,
) -> Result<GeneratedData, CoreError> {
    let data = match kind {
        DataKind::Array { sorted } => GeneratedData::Values(random_array(size, sorted, rng)),
        DataKind::Tree => GeneratedData::Values(unique_values(size, rng)),
        DataKind::Graph => GeneratedData::Graph(random_graph(size, rng)?),
        DataKind::Unknown => GeneratedData::Values(Vec::new()),
    };
    Ok(data)
}

/// `size` integers in `1..=100`, capped at [`MAX_ARRAY_SIZE`].
pub fn random_array(size: usize, sorted: bool, rng: &mut ChaCha8Rng) -> Vec<i64> {
    let mut values: Vec<i64> = (0..size.min(MAX_ARRAY_SIZE))
        .map(|_| rng.gen_range(1..=100))
        .collect();
    if sorted {
        values.sort_unstable();
    }
    values
}

/// Up to [`MAX_TREE_VALUE`] distinct values in `1..=99`, in random order.
pub fn unique_values(size: usize, rng: &mut ChaCha8Rng) -> Vec<i64> {
    let amount = size.min(MAX_TREE_VALUE);
    rand::seq::index::sample(rng, MAX_TREE_VALUE, amount)
        .into_iter()
        .map(|i| i as i64 + 1)
        .collect()
}

/// A random weighted undirected graph laid out on a circle.
///
/// Makes `floor(1.5 * n)` edge attempts between two distinct random nodes;
/// an attempt that picks an existing edge is dropped, so the graph may end
/// up with fewer edges.
pub fn random_graph(size: usize, rng: &mut ChaCha8Rng) -> Result<Graph, CoreError> {
    let n = size.min(MAX_GRAPH_NODES);
    let ids: Vec<String> = (b'A'..)
        .take(n)
        .map(|c| char::from(c).to_string())
        .collect();

    let (cx, cy) = (CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0);
    let radius = cx.min(cy) * 0.8;
    let mut graph = Graph::new();
    for (i, id) in ids.iter().enumerate() {
        let angle = 2.0 * PI / n as f64 * i as f64;
        graph.add_node(
            id.as_str(),
            Position {
                x: cx + radius * angle.cos(),
                y: cy + radius * angle.sin(),
            },
        );
    }

    if n < 2 {
        return Ok(graph);
    }
    for _ in 0..n * 3 / 2 {
        let pair = rand::seq::index::sample(rng, n, 2);
        let (u, v) = (&ids[pair.index(0)], &ids[pair.index(1)]);
        if graph.has_edge(u, v) {
            continue;
        }
        let weight: u8 = rng.gen_range(1..=10);
        graph.add_undirected_edge(u, v, f64::from(weight))?;
    }
    Ok(graph)
}
