use crate::graph_representation::{Graph, GraphNode, LabeledGraph};
use crate::search::algorithm::SearchResult;
use crate::types::*;

use super::search_utils::{resolve_endpoints, PathTree, SearchQueue};

/// minimum weight path for graphs with non-negative weights.
///
/// queue entries are never updated in place: an improved distance pushes a new entry and
/// a popped entry is skipped unless it beats the cost its node was last expanded with.
/// equal costs are popped in insertion order
pub fn dijkstra<N: GraphNode>(graph: &LabeledGraph<N>, start: &N, goal: &N) -> SearchResult<N> {
    let (start_id, goal_id) = match resolve_endpoints(graph, start, goal) {
        Ok(ids) => ids,
        Err(result) => return result,
    };

    let mut tree = PathTree::new();
    let mut expanded: Weights = vec![INFINITY; graph.num_nodes()];
    let mut to_visit = SearchQueue::new();

    let root = tree.root(start_id);
    to_visit.push(0.0, 0.0, 0.0, start_id, root);

    while let Some(entry) = to_visit.pop() {
        let cost = entry.cost.0;

        if entry.node_id == goal_id {
            return SearchResult::found(graph.translate_path(&tree.path(entry.tree_entry)), cost);
        }

        if expanded[entry.node_id as usize] <= cost {
            continue;
        }
        expanded[entry.node_id as usize] = cost;

        for (target_node, weight) in graph.arcs(entry.node_id) {
            let new_cost = cost + weight;

            if new_cost < expanded[*target_node as usize] {
                let tree_entry = tree.push(*target_node, entry.tree_entry);
                to_visit.push(new_cost, 0.0, new_cost, *target_node, tree_entry);
            }
        }
    }

    SearchResult::unreachable()
}
