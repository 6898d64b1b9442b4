use std::collections::VecDeque;

use crate::graph_representation::{Graph, GraphNode, LabeledGraph};
use crate::search::algorithm::SearchResult;

use super::search_utils::{hop_count_result, resolve_endpoints, PathTree};

/// fewest hops from `start` to `goal`, arc weights are ignored and the cost is the hop count
pub fn breadth_first_search<N: GraphNode>(graph: &LabeledGraph<N>, start: &N, goal: &N) -> SearchResult<N> {
    let (start_id, goal_id) = match resolve_endpoints(graph, start, goal) {
        Ok(ids) => ids,
        Err(result) => return result,
    };

    let mut tree = PathTree::new();
    let mut visited = vec![false; graph.num_nodes()];
    let mut queue: VecDeque<usize> = VecDeque::new();
    queue.push_back(tree.root(start_id));

    while let Some(entry) = queue.pop_front() {
        let node_id = tree.node(entry);

        if node_id == goal_id {
            return hop_count_result(graph, &tree.path(entry));
        }

        if visited[node_id as usize] {
            continue;
        }
        visited[node_id as usize] = true;

        for (target_node, _) in graph.arcs(node_id) {
            if !visited[*target_node as usize] {
                queue.push_back(tree.push(*target_node, entry));
            }
        }
    }

    SearchResult::unreachable()
}
