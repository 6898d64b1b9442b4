use std::collections::VecDeque;

use crate::error::PathError;
use crate::graph_representation::{Graph, GraphNode, LabeledGraph};
use crate::search::algorithm::SearchResult;
use crate::types::*;

use super::search_utils::resolve_endpoints;

/// minimum weight path that tolerates negative arc weights.
///
/// relaxes every arc in adjacency order for at most `V - 1` passes and stops early after a pass
/// without any improvement. if all passes were needed, the nodes that could still be improved
/// mark the negative cycles reachable from `start`. only a goal reachable from one of those
/// cycles has no shortest path; any other goal is answered as usual
pub fn bellman_ford<N: GraphNode>(graph: &LabeledGraph<N>, start: &N, goal: &N) -> Result<SearchResult<N>, PathError> {
    let (start_id, goal_id) = match resolve_endpoints(graph, start, goal) {
        Ok(ids) => ids,
        Err(result) => return Ok(result),
    };

    let num_nodes = graph.num_nodes();
    let mut distances: Weights = vec![INFINITY; num_nodes];
    let mut predecessors: Vec<Option<NodeId>> = vec![None; num_nodes];
    distances[start_id as usize] = 0.0;

    let mut converged = false;

    for _ in 0..num_nodes.saturating_sub(1) {
        if !relax_all_arcs(graph, &mut distances, &mut predecessors) {
            converged = true;
            break;
        }
    }

    if !converged && behind_negative_cycle(graph, &distances)[goal_id as usize] {
        return Err(PathError::NegativeCycle);
    }

    if distances[goal_id as usize] == INFINITY {
        return Ok(SearchResult::unreachable());
    }

    let mut path = vec![goal_id];
    let mut current = goal_id;

    while let Some(predecessor) = predecessors[current as usize] {
        if path.len() > num_nodes {
            return Err(PathError::NegativeCycle);
        }

        path.push(predecessor);
        current = predecessor;
    }

    path.reverse();

    Ok(SearchResult::found(graph.translate_path(&path), distances[goal_id as usize]))
}

/// one relaxation pass over all arcs, returns true if any distance improved
fn relax_all_arcs(graph: &impl Graph, distances: &mut Weights, predecessors: &mut [Option<NodeId>]) -> bool {
    let mut updated = false;

    for node_id in graph.node_ids() {
        let distance = distances[node_id as usize];

        if distance == INFINITY {
            continue;
        }

        for (target_node, weight) in graph.arcs(node_id) {
            if distances[node_id as usize] + weight < distances[*target_node as usize] {
                distances[*target_node as usize] = distances[node_id as usize] + weight;
                predecessors[*target_node as usize] = Some(node_id);
                updated = true;
            }
        }
    }

    updated
}

/// marks every node reachable from an arc that can still be relaxed, i.e. every node whose
/// distance is unbounded below
fn behind_negative_cycle(graph: &impl Graph, distances: &Weights) -> Vec<bool> {
    let mut marked = vec![false; graph.num_nodes()];
    let mut queue: VecDeque<NodeId> = VecDeque::new();

    for node_id in graph.node_ids() {
        if distances[node_id as usize] == INFINITY {
            continue;
        }

        for (target_node, weight) in graph.arcs(node_id) {
            if distances[node_id as usize] + weight < distances[*target_node as usize] && !marked[*target_node as usize] {
                marked[*target_node as usize] = true;
                queue.push_back(*target_node);
            }
        }
    }

    while let Some(node_id) = queue.pop_front() {
        for (target_node, _) in graph.arcs(node_id) {
            if !marked[*target_node as usize] {
                marked[*target_node as usize] = true;
                queue.push_back(*target_node);
            }
        }
    }

    marked
}
