//! Dijkstra's single-pair shortest path with a lazy-deletion min-heap.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use algoviz_core::action::DistanceMap;
use algoviz_core::{Graph, GraphAction, NodeId, Trace};

use crate::traversal::missing_node;

/// Weight assumed for plain (unweighted) adjacency entries.
const UNIT_WEIGHT: f64 = 1.0;

/// Heap entry ordered so `BinaryHeap` pops the smallest distance first,
/// breaking ties by ascending node id.
#[derive(Debug, PartialEq)]
struct Frontier {
    distance: f64,
    node: NodeId,
}

impl Eq for Frontier {}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

pub fn dijkstra(graph: &Graph, start: &str, end: &str) -> Trace {
    if !graph.contains(start) {
        return missing_node(start);
    }
    if !graph.contains(end) {
        return Trace::error(format!("End node \"{end}\" not in graph."));
    }
    let negative = graph
        .adjacency_list
        .values()
        .flatten()
        .any(|n| n.weight().is_some_and(|w| w < 0.0));
    if negative {
        return Trace::error("Error: Dijkstra's algorithm requires non-negative edge weights!");
    }

    let mut trace = Trace::new();
    let mut distances: DistanceMap = graph
        .node_ids()
        .into_iter()
        .map(|id| (id, f64::INFINITY))
        .collect();
    distances.insert(start.to_string(), 0.0);
    let mut previous: HashMap<NodeId, NodeId> = HashMap::new();

    trace.emit(
        GraphAction::InitDistances {
            distances: distances.clone(),
        },
        format!("Initializing distances. {start} starts at 0, every other node at infinity."),
    );

    let mut heap = BinaryHeap::from([Frontier {
        distance: 0.0,
        node: start.to_string(),
    }]);

    while let Some(Frontier { distance, node }) = heap.pop() {
        if distance > distances[&node] {
            continue;
        }

        trace.emit(
            GraphAction::VisitNode {
                node: node.clone(),
                distance: Some(distance),
            },
            format!("Visiting node {node} with shortest distance {distance}."),
        );

        for neighbor in graph.sorted_neighbors(&node) {
            let next = neighbor.node();
            let weight = neighbor.weight().unwrap_or(UNIT_WEIGHT);
            trace.emit(
                GraphAction::ExploreEdge {
                    from: node.clone(),
                    to: next.to_string(),
                    weight: Some(weight),
                },
                format!("Exploring edge {node} -> {next} with weight {weight}."),
            );

            let candidate = distance + weight;
            let current = distances.get(next).copied().unwrap_or(f64::INFINITY);
            if candidate < current {
                distances.insert(next.to_string(), candidate);
                previous.insert(next.to_string(), node.clone());
                heap.push(Frontier {
                    distance: candidate,
                    node: next.to_string(),
                });
                trace.emit(
                    GraphAction::UpdateDistance {
                        node: next.to_string(),
                        new_dist: candidate,
                        distances: distances.clone(),
                    },
                    format!("Found shorter path to {next}: {candidate} (was {}).", fmt_distance(current)),
                );
            } else {
                trace.emit(
                    GraphAction::SkipUpdate {
                        node: next.to_string(),
                        candidate,
                        current,
                    },
                    format!(
                        "Path to {next} via {node} ({candidate}) is not shorter than {}.",
                        fmt_distance(current)
                    ),
                );
            }
        }
    }

    let total = distances.get(end).copied().unwrap_or(f64::INFINITY);
    match reconstruct_path(&previous, start, end).filter(|_| total.is_finite()) {
        Some(path) => {
            let rendered = path.join(" -> ");
            trace.emit(
                GraphAction::HighlightPath {
                    path,
                    distance: total,
                },
                format!("Shortest path from {start} to {end}: {rendered} (distance {total})."),
            );
        }
        None => {
            trace.emit(
                GraphAction::PathNotFound {
                    start: start.to_string(),
                    end: end.to_string(),
                },
                format!("No path exists from {start} to {end}."),
            );
        }
    }

    trace.complete("Dijkstra's algorithm complete.")
}

/// Walks predecessor links from `end` back to `start`.
fn reconstruct_path(
    previous: &HashMap<NodeId, NodeId>,
    start: &str,
    end: &str,
) -> Option<Vec<NodeId>> {
    let mut path = vec![end.to_string()];
    let mut current = end;
    while current != start {
        current = previous.get(current)?;
        path.push(current.to_string());
    }
    path.reverse();
    Some(path)
}

fn fmt_distance(distance: f64) -> String {
    if distance.is_finite() {
        distance.to_string()
    } else {
        "infinity".to_string()
    }
}
