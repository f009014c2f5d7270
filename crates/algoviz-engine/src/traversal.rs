//! Graph traversal: breadth-first and depth-first search.
//!
//! Neighbors are always examined in ascending id order so a given graph
//! yields the same trace on every run.

use std::collections::{HashSet, VecDeque};

use algoviz_core::{Graph, GraphAction, NodeId, Trace};

/// Single-step error trace for a start node with no adjacency entry.
pub(crate) fn missing_node(node: &str) -> Trace {
    Trace::error(format!("Start node \"{node}\" not in graph."))
}

pub fn bfs(graph: &Graph, start: &str) -> Trace {
    if !graph.contains(start) {
        return missing_node(start);
    }

    let mut trace = Trace::new();
    let mut queue: VecDeque<NodeId> = VecDeque::from([start.to_string()]);
    let mut visited: HashSet<NodeId> = HashSet::from([start.to_string()]);

    trace.emit(
        GraphAction::Enqueue {
            node: start.to_string(),
            queue_state: queue.iter().cloned().collect(),
        },
        format!("Starting BFS at node {start}. Add it to the queue."),
    );

    while let Some(node) = queue.pop_front() {
        trace.emit(
            GraphAction::Dequeue {
                node: node.clone(),
                queue_state: queue.iter().cloned().collect(),
            },
            format!("Dequeueing and visiting node {node}."),
        );

        for neighbor in graph.sorted_neighbors(&node) {
            let next = neighbor.node();
            trace.emit(
                GraphAction::ExploreEdge {
                    from: node.clone(),
                    to: next.to_string(),
                    weight: None,
                },
                format!("Exploring edge from {node} to {next}."),
            );
            if visited.insert(next.to_string()) {
                queue.push_back(next.to_string());
                trace.emit(
                    GraphAction::Enqueue {
                        node: next.to_string(),
                        queue_state: queue.iter().cloned().collect(),
                    },
                    format!("Node {next} is unvisited. Add to queue."),
                );
            } else {
                trace.emit(
                    GraphAction::NeighborVisited {
                        node: next.to_string(),
                    },
                    format!("Node {next} has already been visited. Skipping."),
                );
            }
        }
    }

    trace.complete("BFS complete. All reachable nodes visited.")
}

/// Iterative depth-first search.
///
/// The visited check happens when a node is popped, not when it is pushed,
/// so a node reachable along several paths can sit on the stack more than
/// once and is skipped (`skip_visited`) on every pop after the first.
pub fn dfs(graph: &Graph, start: &str) -> Trace {
    if !graph.contains(start) {
        return missing_node(start);
    }

    let mut trace = Trace::new();
    let mut stack: Vec<NodeId> = vec![start.to_string()];
    let mut visited: HashSet<NodeId> = HashSet::new();

    trace.emit(
        GraphAction::Push {
            node: start.to_string(),
            stack_state: stack.clone(),
        },
        format!("Starting DFS at node {start}. Push it to the stack."),
    );

    while let Some(node) = stack.pop() {
        trace.emit(
            GraphAction::Pop {
                node: node.clone(),
                stack_state: stack.clone(),
            },
            format!("Popping node {node} from the stack to visit."),
        );

        if visited.contains(&node) {
            trace.emit(
                GraphAction::SkipVisited { node: node.clone() },
                format!("Node {node} already visited. Skipping."),
            );
            continue;
        }

        visited.insert(node.clone());
        trace.emit(
            GraphAction::VisitNode {
                node: node.clone(),
                distance: None,
            },
            format!("Visiting node {node} for the first time."),
        );

        // Descending push order so the smallest id is popped first.
        for neighbor in graph.sorted_neighbors(&node).into_iter().rev() {
            let next = neighbor.node();
            trace.emit(
                GraphAction::ExploreEdge {
                    from: node.clone(),
                    to: next.to_string(),
                    weight: None,
                },
                format!("Checking neighbor {next} of {node}."),
            );
            if !visited.contains(next) {
                stack.push(next.to_string());
                trace.emit(
                    GraphAction::Push {
                        node: next.to_string(),
                        stack_state: stack.clone(),
                    },
                    format!("Pushing unvisited neighbor {next} to stack."),
                );
            }
        }
    }

    trace.complete("DFS complete. All reachable nodes visited.")
}
