//! Typed algorithm inputs.
//!
//! [`AlgorithmInput`] is the already-validated shape an algorithm consumes.
//! Turning a loose request body into one of these is the caller's job; the
//! engine never sees raw request JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::{Graph, NodeId};

/// Parameter shape an algorithm expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    /// `input_data` + `target`.
    Search,
    /// `input_data`.
    Array,
    /// `input_data` (graph) + `start_node`.
    Traversal,
    /// `input_data` (graph) + `start_node` + `end_node`.
    ShortestPath,
    /// `input_data` (values to insert).
    TreeBuild,
    /// `n`.
    Fibonacci,
    /// `capacity` + `items` (integral weights).
    Knapsack,
    /// `capacity` + `items` (divisible).
    FractionalKnapsack,
    /// `n_disks`.
    Hanoi,
    /// `a` + `b`.
    BitwisePair,
    /// `n`.
    BitCount,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputKind::Search => "search",
            InputKind::Array => "array",
            InputKind::Traversal => "traversal",
            InputKind::ShortestPath => "shortest_path",
            InputKind::TreeBuild => "tree_build",
            InputKind::Fibonacci => "fibonacci",
            InputKind::Knapsack => "knapsack",
            InputKind::FractionalKnapsack => "fractional_knapsack",
            InputKind::Hanoi => "hanoi",
            InputKind::BitwisePair => "bitwise_pair",
            InputKind::BitCount => "bit_count",
        };
        f.write_str(name)
    }
}

/// An indivisible knapsack item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnapsackItem {
    pub weight: usize,
    pub value: u64,
}

/// Caller-chosen item label: a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(i64),
    Name(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{n}"),
            ItemId::Name(s) => f.write_str(s),
        }
    }
}

/// A divisible knapsack item. Items without an `id` are labelled by their
/// position in the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FractionalItem {
    #[serde(default)]
    pub id: Option<ItemId>,
    pub weight: f64,
    pub value: f64,
}

/// Input for one algorithm invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum AlgorithmInput {
    Search { data: Vec<i64>, target: i64 },
    Array { data: Vec<i64> },
    Traversal { graph: Graph, start: NodeId },
    ShortestPath { graph: Graph, start: NodeId, end: NodeId },
    TreeBuild { values: Vec<i64> },
    Fibonacci { n: u32 },
    Knapsack { capacity: usize, items: Vec<KnapsackItem> },
    FractionalKnapsack { capacity: f64, items: Vec<FractionalItem> },
    Hanoi { n_disks: u32 },
    BitwisePair { a: i64, b: i64 },
    BitCount { n: u64 },
}

impl AlgorithmInput {
    pub fn kind(&self) -> InputKind {
        match self {
            AlgorithmInput::Search { .. } => InputKind::Search,
            AlgorithmInput::Array { .. } => InputKind::Array,
            AlgorithmInput::Traversal { .. } => InputKind::Traversal,
            AlgorithmInput::ShortestPath { .. } => InputKind::ShortestPath,
            AlgorithmInput::TreeBuild { .. } => InputKind::TreeBuild,
            AlgorithmInput::Fibonacci { .. } => InputKind::Fibonacci,
            AlgorithmInput::Knapsack { .. } => InputKind::Knapsack,
            AlgorithmInput::FractionalKnapsack { .. } => InputKind::FractionalKnapsack,
            AlgorithmInput::Hanoi { .. } => InputKind::Hanoi,
            AlgorithmInput::BitwisePair { .. } => InputKind::BitwisePair,
            AlgorithmInput::BitCount { .. } => InputKind::BitCount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn item_id_accepts_numbers_and_strings() {
        let items: Vec<FractionalItem> = serde_json::from_value(json!([
            { "id": 1, "weight": 10, "value": 60 },
            { "id": "gold", "weight": 20.5, "value": 100 },
            { "weight": 5, "value": 1 }
        ]))
        .unwrap();
        assert_eq!(items[0].id, Some(ItemId::Number(1)));
        assert_eq!(items[1].id, Some(ItemId::Name("gold".into())));
        assert_eq!(items[2].id, None);
        assert_eq!(items[1].weight, 20.5);
    }

    #[test]
    fn kind_reflects_variant() {
        let input = AlgorithmInput::Hanoi { n_disks: 3 };
        assert_eq!(input.kind(), InputKind::Hanoi);
        assert_eq!(input.kind().to_string(), "hanoi");
    }

    #[test]
    fn input_kind_serializes_snake_case() {
        assert_eq!(
            serde_json::to_value(InputKind::ShortestPath).unwrap(),
            json!("shortest_path")
        );
    }
}
