use crate::error::PathError;
use crate::graph_representation::{Graph, GraphNode, LabeledGraph};
use crate::heuristics::Heuristic;
use crate::search::algorithm::SearchResult;
use crate::types::*;

use super::search_utils::{resolve_endpoints, PathTree, SearchQueue};

/// always expands the node with the lowest heuristic estimate, ties in insertion order.
/// fast but without any optimality guarantee; the reported cost is the weight of the returned path
pub fn greedy_best_first<N, H>(graph: &LabeledGraph<N>, start: &N, goal: &N, heuristic: &H) -> Result<SearchResult<N>, PathError>
where
    N: GraphNode,
    H: Heuristic<N> + ?Sized,
{
    let (start_id, goal_id) = match resolve_endpoints(graph, start, goal) {
        Ok(ids) => ids,
        Err(result) => return Ok(result),
    };

    let mut tree = PathTree::new();
    let mut visited = vec![false; graph.num_nodes()];
    let mut to_visit = SearchQueue::new();

    let root = tree.root(start_id);
    to_visit.push(heuristic.estimate(start, goal)?, 0.0, 0.0, start_id, root);

    while let Some(entry) = to_visit.pop() {
        if entry.node_id == goal_id {
            return Ok(SearchResult::found(graph.translate_path(&tree.path(entry.tree_entry)), entry.cost.0));
        }

        if visited[entry.node_id as usize] {
            continue;
        }
        visited[entry.node_id as usize] = true;

        for (target_node, weight) in graph.arcs(entry.node_id) {
            if visited[*target_node as usize] {
                continue;
            }

            let estimate = heuristic.estimate(graph.node(*target_node), goal)?;
            let tree_entry = tree.push(*target_node, entry.tree_entry);
            to_visit.push(estimate, 0.0, entry.cost.0 + weight, *target_node, tree_entry);
        }
    }

    Ok(SearchResult::unreachable())
}

/// A* search ordered by cost so far plus heuristic estimate. equal estimates prefer the lower
/// cost so far, then insertion order. the result is optimal if the heuristic never overestimates.
/// stale queue entries are skipped the same way as in `dijkstra`
pub fn a_star<N, H>(graph: &LabeledGraph<N>, start: &N, goal: &N, heuristic: &H) -> Result<SearchResult<N>, PathError>
where
    N: GraphNode,
    H: Heuristic<N> + ?Sized,
{
    let (start_id, goal_id) = match resolve_endpoints(graph, start, goal) {
        Ok(ids) => ids,
        Err(result) => return Ok(result),
    };

    let mut tree = PathTree::new();
    let mut expanded: Weights = vec![INFINITY; graph.num_nodes()];
    let mut to_visit = SearchQueue::new();

    let root = tree.root(start_id);
    to_visit.push(heuristic.estimate(start, goal)?, 0.0, 0.0, start_id, root);

    while let Some(entry) = to_visit.pop() {
        let cost = entry.cost.0;

        if entry.node_id == goal_id {
            return Ok(SearchResult::found(graph.translate_path(&tree.path(entry.tree_entry)), cost));
        }

        if expanded[entry.node_id as usize] <= cost {
            continue;
        }
        expanded[entry.node_id as usize] = cost;

        for (target_node, weight) in graph.arcs(entry.node_id) {
            let new_cost = cost + weight;

            if new_cost < expanded[*target_node as usize] {
                let estimate = heuristic.estimate(graph.node(*target_node), goal)?;
                let tree_entry = tree.push(*target_node, entry.tree_entry);
                to_visit.push(new_cost + estimate, new_cost, new_cost, *target_node, tree_entry);
            }
        }
    }

    Ok(SearchResult::unreachable())
}
