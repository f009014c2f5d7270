//! Selector key -> algorithm dispatch.
//!
//! Every algorithm is reachable through the [`Algorithm`] trait, so callers
//! (the HTTP layer, the CLI) only deal with a key and an [`AlgorithmInput`].
//! [`Registry::builtin`] registers the full catalogue in display order.

use indexmap::IndexMap;

use algoviz_core::{AlgorithmInput, InputKind, Trace};

use crate::error::EngineError;
use crate::{
    bitwise, dynamic, greedy, recursion, searching, shortest_path, sorting, traversal, trees,
};

/// A trace-producing algorithm addressable by a selector key.
pub trait Algorithm: Send + Sync {
    /// Stable selector key, e.g. `"binary_search"`.
    fn key(&self) -> &'static str;

    /// Display category, e.g. `"Searching"`.
    fn category(&self) -> &'static str;

    /// Input shape this algorithm consumes.
    fn input_kind(&self) -> InputKind;

    /// Runs the algorithm to completion.
    ///
    /// Precondition failures are reported inside the returned trace. An
    /// `Err` means the input was of the wrong shape.
    fn execute(&self, input: &AlgorithmInput) -> Result<Trace, EngineError>;
}

type Handler = fn(&AlgorithmInput) -> Option<Trace>;

/// An algorithm backed by a plain function over one input variant.
struct Builtin {
    key: &'static str,
    category: &'static str,
    kind: InputKind,
    handler: Handler,
}

impl Algorithm for Builtin {
    fn key(&self) -> &'static str {
        self.key
    }

    fn category(&self) -> &'static str {
        self.category
    }

    fn input_kind(&self) -> InputKind {
        self.kind
    }

    fn execute(&self, input: &AlgorithmInput) -> Result<Trace, EngineError> {
        (self.handler)(input).ok_or_else(|| EngineError::InputMismatch {
            key: self.key.to_string(),
            expected: self.kind,
            got: input.kind(),
        })
    }
}

/// Builds a [`Builtin`] that destructures one [`AlgorithmInput`] variant.
macro_rules! builtin {
    ($key:literal, $category:literal, $kind:ident { $($field:ident),* } => $body:expr) => {
        Builtin {
            key: $key,
            category: $category,
            kind: InputKind::$kind,
            handler: |input| match input {
                AlgorithmInput::$kind { $($field),* } => Some($body),
                _ => None,
            },
        }
    };
}

/// Ordered table of algorithms keyed by selector.
pub struct Registry {
    algorithms: IndexMap<&'static str, Box<dyn Algorithm>>,
}

impl Registry {
    pub fn new() -> Self {
        Registry {
            algorithms: IndexMap::new(),
        }
    }

    /// Every algorithm this crate implements.
    pub fn builtin() -> Self {
        let mut registry = Registry::new();
        let builtins = [
            builtin!("linear_search", "Searching", Search { data, target } =>
                searching::linear_search(data, *target)),
            builtin!("binary_search", "Searching", Search { data, target } =>
                searching::binary_search(data, *target)),
            builtin!("jump_search", "Searching", Search { data, target } =>
                searching::jump_search(data, *target)),
            builtin!("interpolation_search", "Searching", Search { data, target } =>
                searching::interpolation_search(data, *target)),
            builtin!("bubble_sort", "Sorting", Array { data } => sorting::bubble_sort(data)),
            builtin!("selection_sort", "Sorting", Array { data } => sorting::selection_sort(data)),
            builtin!("insertion_sort", "Sorting", Array { data } => sorting::insertion_sort(data)),
            builtin!("merge_sort", "Sorting", Array { data } => sorting::merge_sort(data)),
            builtin!("quick_sort", "Sorting", Array { data } => sorting::quick_sort(data)),
            builtin!("bfs", "Graph Traversal", Traversal { graph, start } =>
                traversal::bfs(graph, start)),
            builtin!("dfs", "Graph Traversal", Traversal { graph, start } =>
                traversal::dfs(graph, start)),
            builtin!("dijkstra", "Shortest Path", ShortestPath { graph, start, end } =>
                shortest_path::dijkstra(graph, start, end)),
            builtin!("bst_build", "Tree Operations", TreeBuild { values } =>
                trees::bst_build(values)),
            builtin!("fib_dp", "Dynamic Programming", Fibonacci { n } => dynamic::fib_dp(*n)),
            builtin!("knapsack_01", "Dynamic Programming", Knapsack { capacity, items } =>
                dynamic::knapsack_01(*capacity, items)),
            builtin!("fractional_knapsack", "Greedy", FractionalKnapsack { capacity, items } =>
                greedy::fractional_knapsack(*capacity, items)),
            builtin!("hanoi", "Recursion", Hanoi { n_disks } => recursion::hanoi(*n_disks)),
            builtin!("bitwise_swap", "Bit Manipulation", BitwisePair { a, b } =>
                bitwise::bitwise_swap(*a, *b)),
            builtin!("count_set_bits", "Bit Manipulation", BitCount { n } =>
                bitwise::count_set_bits(*n)),
        ];
        for algorithm in builtins {
            registry.register(Box::new(algorithm));
        }
        registry
    }

    /// Adds an algorithm, replacing any previous one with the same key.
    pub fn register(&mut self, algorithm: Box<dyn Algorithm>) {
        self.algorithms.insert(algorithm.key(), algorithm);
    }

    pub fn get(&self, key: &str) -> Option<&dyn Algorithm> {
        self.algorithms.get(key).map(|a| &**a)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.algorithms.contains_key(key)
    }

    /// Looks up `key` and runs it on `input`.
    pub fn run(&self, key: &str, input: &AlgorithmInput) -> Result<Trace, EngineError> {
        let algorithm = self
            .get(key)
            .ok_or_else(|| EngineError::UnknownAlgorithm(key.to_string()))?;
        algorithm.execute(input)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.algorithms.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Algorithm> + '_ {
        self.algorithms.values().map(|a| &**a)
    }

    pub fn len(&self) -> usize {
        self.algorithms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.algorithms.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algoviz_core::Graph;

    #[test]
    fn builtin_registers_every_selector() {
        let registry = Registry::builtin();
        assert_eq!(registry.len(), 19);
        let keys: Vec<&str> = registry.keys().collect();
        assert_eq!(keys[0], "linear_search");
        assert_eq!(keys[18], "count_set_bits");
        assert!(registry.contains("bst_build"));
        assert_eq!(
            registry.get("dijkstra").unwrap().input_kind(),
            InputKind::ShortestPath
        );
    }

    #[test]
    fn run_dispatches_by_key() {
        let registry = Registry::builtin();
        let input = AlgorithmInput::Search {
            data: vec![1, 3, 5, 7],
            target: 5,
        };
        let trace = registry.run("binary_search", &input).unwrap();
        assert_eq!(trace.last().unwrap().name(), "found");
        assert_eq!(trace.count("found"), 1);
    }

    #[test]
    fn unknown_key_is_an_error() {
        let registry = Registry::builtin();
        let err = registry
            .run("bogo_sort", &AlgorithmInput::Array { data: vec![] })
            .unwrap_err();
        assert_eq!(err, EngineError::UnknownAlgorithm("bogo_sort".into()));
    }

    #[test]
    fn wrong_input_shape_is_a_mismatch() {
        let registry = Registry::builtin();
        let err = registry
            .run("hanoi", &AlgorithmInput::Fibonacci { n: 3 })
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::InputMismatch {
                key: "hanoi".into(),
                expected: InputKind::Hanoi,
                got: InputKind::Fibonacci,
            }
        );
    }

    #[test]
    fn repeated_runs_serialize_identically() {
        let registry = Registry::builtin();
        let graph: Graph = serde_json::from_value(serde_json::json!({
            "adjacency_list": {
                "A": [{ "node": "B", "weight": 4 }, { "node": "C", "weight": 1 }],
                "B": [{ "node": "A", "weight": 4 }, { "node": "D", "weight": 1 }],
                "C": [{ "node": "A", "weight": 1 }, { "node": "D", "weight": 5 }],
                "D": [{ "node": "B", "weight": 1 }, { "node": "C", "weight": 5 }]
            }
        }))
        .unwrap();
        let array = AlgorithmInput::Array {
            data: vec![5, 1, 4, 2, 8, 1],
        };
        let traversal = AlgorithmInput::Traversal {
            graph: graph.clone(),
            start: "A".into(),
        };
        let shortest = AlgorithmInput::ShortestPath {
            graph,
            start: "A".into(),
            end: "D".into(),
        };
        let cases = [
            ("bubble_sort", &array),
            ("selection_sort", &array),
            ("insertion_sort", &array),
            ("merge_sort", &array),
            ("quick_sort", &array),
            ("bfs", &traversal),
            ("dfs", &traversal),
            ("dijkstra", &shortest),
        ];
        for (key, input) in cases {
            let first = serde_json::to_string(&registry.run(key, input).unwrap()).unwrap();
            for _ in 0..5 {
                let again = serde_json::to_string(&registry.run(key, input).unwrap()).unwrap();
                assert_eq!(first, again, "{key} output differs between runs");
            }
        }
    }
}
