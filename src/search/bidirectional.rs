use std::collections::VecDeque;

use ordered_float::OrderedFloat;

use crate::graph_algorithms::DijkstraState;
use crate::graph_representation::{Graph, GraphList, GraphNode, LabeledGraph};
use crate::search::algorithm::SearchResult;
use crate::types::*;
use crate::utils::binary_heap::MinBinaryHeap;

use super::search_utils::{hop_count_result, resolve_endpoints, PathTree};

/// one side of a bidirectional breadth first search
struct Frontier<'a> {
    graph: &'a GraphList,
    tree: PathTree,
    discovered: Vec<Option<(usize, usize)>>, // tree entry and hops from the root
    queue: VecDeque<NodeId>,
}

impl<'a> Frontier<'a> {

    fn new(graph: &'a GraphList, root: NodeId) -> Self {
        let mut tree = PathTree::new();
        let mut discovered = vec![None; graph.num_nodes()];
        discovered[root as usize] = Some((tree.root(root), 0));

        Frontier {
            graph,
            tree,
            discovered,
            queue: VecDeque::from(vec![root]),
        }
    }

    /// expands every node of the current level. among the newly discovered nodes the other side
    /// already knows, returns the one with the fewest total hops together with that count
    fn expand_level(&mut self, other: &Frontier) -> Option<(usize, NodeId)> {
        let mut meeting: Option<(usize, NodeId)> = None;

        for _ in 0..self.queue.len() {
            let Some(node_id) = self.queue.pop_front() else {
                break;
            };
            let Some((entry, hops)) = self.discovered[node_id as usize] else {
                continue;
            };

            for (target_node, _) in self.graph.arcs(node_id) {
                if self.discovered[*target_node as usize].is_some() {
                    continue;
                }

                self.discovered[*target_node as usize] = Some((self.tree.push(*target_node, entry), hops + 1));
                self.queue.push_back(*target_node);

                if let Some((_, other_hops)) = other.discovered[*target_node as usize] {
                    let total_hops = hops + 1 + other_hops;

                    if meeting.map_or(true, |(best_hops, _)| total_hops < best_hops) {
                        meeting = Some((total_hops, *target_node));
                    }
                }
            }
        }

        meeting
    }

    fn path_to(&self, node_id: NodeId) -> NodeIds {
        self.discovered[node_id as usize].map(|(entry, _)| self.tree.path(entry)).unwrap_or_default()
    }
}

/// joins the start side path `start..meeting` with the goal side path `goal..meeting`
fn join_paths(forward: &Frontier, backward: &Frontier, meeting: NodeId) -> NodeIds {
    let mut path = forward.path_to(meeting);
    let backward_path = backward.path_to(meeting);

    path.extend(backward_path.iter().rev().skip(1));
    path
}

/// fewest hops search growing one frontier from `start` over the arcs and one from `goal` over
/// the reversed arcs. each round expands one whole level of the smaller frontier and stops at
/// the first level where the frontiers touch, keeping the meeting node with the fewest total hops.
/// weights are ignored and the cost is the hop count
pub fn bidirectional_breadth_first_search<N: GraphNode>(graph: &LabeledGraph<N>, start: &N, goal: &N) -> SearchResult<N> {
    let (start_id, goal_id) = match resolve_endpoints(graph, start, goal) {
        Ok(ids) => ids,
        Err(result) => return result,
    };

    let mut forward = Frontier::new(graph.list(), start_id);
    let mut backward = Frontier::new(graph.reversed(), goal_id);

    while !forward.queue.is_empty() && !backward.queue.is_empty() {
        let meeting = if forward.queue.len() <= backward.queue.len() {
            forward.expand_level(&backward)
        }
        else {
            backward.expand_level(&forward)
        };

        if let Some((_, meeting)) = meeting {
            return hop_count_result(graph, &join_paths(&forward, &backward, meeting));
        }
    }

    SearchResult::unreachable()
}

/// one side of a bidirectional dijkstra
struct DijkstraSide<'a> {
    graph: &'a GraphList,
    distances: Weights,
    parents: Vec<Option<NodeId>>,
    queue: MinBinaryHeap<DijkstraState>,
}

impl<'a> DijkstraSide<'a> {

    fn new(graph: &'a GraphList, root: NodeId) -> Self {
        let mut distances = vec![INFINITY; graph.num_nodes()];
        distances[root as usize] = 0.0;

        let mut queue = MinBinaryHeap::new();
        queue.insert(DijkstraState {distance: OrderedFloat(0.0), node_id: root});

        DijkstraSide {
            graph,
            distances,
            parents: vec![None; graph.num_nodes()],
            queue,
        }
    }

    /// smallest key still queued, `INFINITY` once the side is exhausted
    fn min_key(&mut self) -> Weight {
        while let Some(state) = self.queue.get_min().copied() {
            if state.distance.0 > self.distances[state.node_id as usize] {
                self.queue.pop(); // outdated entry
                continue;
            }

            return state.distance.0;
        }

        INFINITY
    }

    /// settles the next node and relaxes its arcs. every node whose distance improved is
    /// checked against the other side's distances to update the best connection
    fn step(&mut self, other: &DijkstraSide, best: &mut (Weight, Option<NodeId>)) {
        let Some(DijkstraState {distance, node_id}) = self.queue.pop() else {
            return;
        };

        if distance.0 > self.distances[node_id as usize] {
            return;
        }

        for (target_node, weight) in self.graph.arcs(node_id) {
            let new_distance = distance.0 + weight;

            if new_distance < self.distances[*target_node as usize] {
                self.distances[*target_node as usize] = new_distance;
                self.parents[*target_node as usize] = Some(node_id);
                self.queue.insert(DijkstraState {distance: OrderedFloat(new_distance), node_id: *target_node});

                let connection = new_distance + other.distances[*target_node as usize];
                if connection < best.0 {
                    *best = (connection, Some(*target_node));
                }
            }
        }
    }

    /// node ids from `node_id` back to this side's root
    fn path_to_root(&self, node_id: NodeId) -> NodeIds {
        let mut path = vec![node_id];
        let mut current = node_id;

        while let Some(parent) = self.parents[current as usize] {
            if path.len() > self.parents.len() {
                break; // parent cycle, only possible with negative weights
            }

            path.push(parent);
            current = parent;
        }

        path
    }
}

/// minimum weight search for non-negative weights that runs dijkstra from `start` over the arcs
/// and from `goal` over the reversed arcs. it stops once the smallest keys of both queues add up
/// to at least the cheapest connection found so far
pub fn bidirectional_dijkstra<N: GraphNode>(graph: &LabeledGraph<N>, start: &N, goal: &N) -> SearchResult<N> {
    let (start_id, goal_id) = match resolve_endpoints(graph, start, goal) {
        Ok(ids) => ids,
        Err(result) => return result,
    };

    let mut forward = DijkstraSide::new(graph.list(), start_id);
    let mut backward = DijkstraSide::new(graph.reversed(), goal_id);
    let mut best: (Weight, Option<NodeId>) = (INFINITY, None);

    loop {
        let forward_key = forward.min_key();
        let backward_key = backward.min_key();

        if forward_key == INFINITY || backward_key == INFINITY || forward_key + backward_key >= best.0 {
            break;
        }

        if forward_key <= backward_key {
            forward.step(&backward, &mut best);
        }
        else {
            backward.step(&forward, &mut best);
        }
    }

    match best {
        (cost, Some(meeting)) => {
            let mut path = forward.path_to_root(meeting);
            path.reverse();
            path.extend(backward.path_to_root(meeting).into_iter().skip(1));

            SearchResult::found(graph.translate_path(&path), cost)
        },
        _ => SearchResult::unreachable(),
    }
}
