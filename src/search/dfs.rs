use crate::graph_representation::{Graph, GraphNode, LabeledGraph};
use crate::search::algorithm::SearchResult;
use crate::types::*;

use super::search_utils::{hop_count_result, resolve_endpoints, PathTree};

/// finds some path by expanding the most recently discovered node first.
/// neighbours are pushed in adjacency order, so the last arc of a node is followed first.
/// the path is not necessarily short, its cost is the hop count
pub fn depth_first_search<N: GraphNode>(graph: &LabeledGraph<N>, start: &N, goal: &N) -> SearchResult<N> {
    let (start_id, goal_id) = match resolve_endpoints(graph, start, goal) {
        Ok(ids) => ids,
        Err(result) => return result,
    };

    let mut tree = PathTree::new();
    let mut visited = vec![false; graph.num_nodes()];
    let mut stack: Vec<usize> = vec![tree.root(start_id)];

    while let Some(entry) = stack.pop() {
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
                stack.push(tree.push(*target_node, entry));
            }
        }
    }

    SearchResult::unreachable()
}

/// depth first search that follows at most `limit` arcs from `start`.
/// there is no visited set, the limit alone bounds the search, so a goal that is only
/// reachable through longer paths is reported as unreachable. arcs are tried in adjacency order
pub fn depth_limited_search<N: GraphNode>(graph: &LabeledGraph<N>, start: &N, goal: &N, limit: usize) -> SearchResult<N> {
    let (start_id, goal_id) = match resolve_endpoints(graph, start, goal) {
        Ok(ids) => ids,
        Err(result) => return result,
    };

    // one frame per node of the current path: the node and the next of its arcs to follow
    let mut stack: Vec<(NodeId, usize)> = vec![(start_id, 0)];

    while let Some(&(node_id, next_arc)) = stack.last() {
        if node_id == goal_id {
            let path: NodeIds = stack.iter().map(|(node_id, _)| *node_id).collect();
            return hop_count_result(graph, &path);
        }

        let arcs = graph.arcs(node_id);
        let depth = stack.len() - 1;

        if depth >= limit || next_arc >= arcs.len() {
            stack.pop();
            continue;
        }

        let top = stack.len() - 1;
        stack[top].1 += 1;
        stack.push((arcs[next_arc].0, 0));
    }

    SearchResult::unreachable()
}
