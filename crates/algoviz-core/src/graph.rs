//! Graph input model: node layout plus adjacency lists.
//!
//! Adjacency entries are either weighted (`{"node": "B", "weight": 4}`) or
//! plain node ids (`"B"`). Undirected graphs store every edge in both lists.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Node identifier as supplied by the caller (`"A"`, `"B"`, ...).
pub type NodeId = String;

/// Canvas position of a node. Carried through untouched; no algorithm reads it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// One adjacency entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Neighbor {
    Weighted { node: NodeId, weight: f64 },
    Plain(NodeId),
}

impl Neighbor {
    pub fn node(&self) -> &str {
        match self {
            Neighbor::Weighted { node, .. } | Neighbor::Plain(node) => node,
        }
    }

    /// Explicit weight, `None` for unweighted entries.
    pub fn weight(&self) -> Option<f64> {
        match self {
            Neighbor::Weighted { weight, .. } => Some(*weight),
            Neighbor::Plain(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    #[serde(default)]
    pub nodes: IndexMap<NodeId, Position>,
    pub adjacency_list: IndexMap<NodeId, Vec<Neighbor>>,
}

impl Graph {
    pub fn new() -> Self {
        Graph::default()
    }

    /// Whether `node` has an adjacency entry. Only adjacency keys count as
    /// valid start/end nodes.
    pub fn contains(&self, node: &str) -> bool {
        self.adjacency_list.contains_key(node)
    }

    /// Neighbors of `node` in ascending id order; empty for unknown nodes.
    pub fn sorted_neighbors(&self, node: &str) -> Vec<&Neighbor> {
        let mut neighbors: Vec<&Neighbor> = self
            .adjacency_list
            .get(node)
            .map(|list| list.iter().collect())
            .unwrap_or_default();
        neighbors.sort_by(|a, b| a.node().cmp(b.node()));
        neighbors
    }

    /// Every node id: adjacency keys in order, then ids that only appear as
    /// neighbors, in first-seen order.
    pub fn node_ids(&self) -> Vec<NodeId> {
        let mut ids: IndexMap<&str, ()> = IndexMap::new();
        for key in self.adjacency_list.keys() {
            ids.insert(key, ());
        }
        for neighbors in self.adjacency_list.values() {
            for neighbor in neighbors {
                ids.entry(neighbor.node()).or_insert(());
            }
        }
        ids.into_keys().map(str::to_string).collect()
    }

    /// Adds a node with a layout position and an empty adjacency list.
    pub fn add_node(&mut self, id: impl Into<NodeId>, position: Position) {
        let id = id.into();
        self.adjacency_list.entry(id.clone()).or_default();
        self.nodes.insert(id, position);
    }

    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.adjacency_list
            .get(from)
            .is_some_and(|list| list.iter().any(|n| n.node() == to))
    }

    /// Adds a weighted edge to both endpoint lists.
    ///
    /// Both endpoints must already exist. Self-loops and duplicate edges are
    /// rejected.
    pub fn add_undirected_edge(
        &mut self,
        u: &str,
        v: &str,
        weight: f64,
    ) -> Result<(), CoreError> {
        for node in [u, v] {
            if !self.contains(node) {
                return Err(CoreError::UnknownNode {
                    node: node.to_string(),
                });
            }
        }
        if u == v || self.has_edge(u, v) {
            return Err(CoreError::InvalidEdge {
                reason: format!("edge {u}-{v} is a self-loop or already present"),
            });
        }
        let forward = Neighbor::Weighted {
            node: v.to_string(),
            weight,
        };
        let backward = Neighbor::Weighted {
            node: u.to_string(),
            weight,
        };
        self.adjacency_list.entry(u.to_string()).or_default().push(forward);
        self.adjacency_list.entry(v.to_string()).or_default().push(backward);
        Ok(())
    }

    /// Total number of adjacency entries (twice the edge count for
    /// undirected graphs).
    pub fn adjacency_len(&self) -> usize {
        self.adjacency_list.values().map(Vec::len).sum()
    }
}
