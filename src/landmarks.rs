//! ALT support: A* with landmarks and the triangle inequality.
//!
//! a handful of landmark nodes is picked once per graph and exact distances from every landmark
//! (forward table) and to every landmark (reverse table, computed on the reversed graph) are
//! stored. for a goal `t` and a node `u` the triangle inequality gives two lower bounds on
//! `d(u, t)` per landmark `L`:
//!
//! * `d(L, t) - d(L, u)`
//! * `d(u, L) - d(t, L)`
//!
//! the heuristic is the largest of them. tables require non-negative weights.

use std::cmp::Reverse;
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::error::PathError;
use crate::graph_algorithms::shortest_distances;
use crate::graph_representation::{Graph, GraphNode, LabeledGraph};
use crate::heuristics::Heuristic;
use crate::preprocessing::AbortFlag;
use crate::types::*;

/// picks up to `num_landmarks` spread out nodes.
///
/// the first landmark is the node with the highest out degree. every further landmark is the
/// candidate farthest away from the previously added one, where candidates are the
/// `candidate_pool` nodes with the highest out degree and unreachable candidates count as
/// infinitely far. selection ends early once the farthest candidate is already a landmark
pub fn select_landmarks(graph: &impl Graph, num_landmarks: usize, candidate_pool: usize) -> NodeIds {
    if graph.num_nodes() == 0 || num_landmarks == 0 {
        return Vec::new();
    }

    // stable sort keeps node id order among equal degrees
    let mut candidates: NodeIds = graph.node_ids().collect();
    candidates.sort_by_key(|node_id| Reverse(graph.out_degree(*node_id)));
    candidates.truncate(candidate_pool.max(1));

    let mut landmarks = vec![candidates[0]];

    while landmarks.len() < num_landmarks {
        let last_landmark = landmarks[landmarks.len() - 1];
        let distances = shortest_distances(last_landmark, graph);

        let mut farthest = candidates[0];
        for candidate in &candidates[1..] {
            if distances[*candidate as usize] > distances[farthest as usize] {
                farthest = *candidate;
            }
        }

        if landmarks.contains(&farthest) {
            debug!(landmarks = landmarks.len(), "no further landmark candidate");
            break;
        }

        landmarks.push(farthest);
    }

    landmarks
}

/// exact distances between the landmarks and every node
#[derive(Clone, Debug)]
pub struct LandmarkTables {
    landmarks: NodeIds,
    forward: Vec<Weights>, // forward[i][v] = d(landmarks[i], v)
    reverse: Vec<Weights>, // reverse[i][v] = d(v, landmarks[i])
}

impl LandmarkTables {

    /// runs one dijkstra per landmark on the graph and one on the reversed graph, in parallel
    pub fn build<N: GraphNode>(graph: &LabeledGraph<N>, landmarks: NodeIds) -> LandmarkTables {
        // without an abort flag the build always completes
        match LandmarkTables::build_with_abort(graph, landmarks, None) {
            Some(tables) => tables,
            None => LandmarkTables::empty(),
        }
    }

    /// like `build`, but gives up and returns `None` if `abort` is raised before all
    /// landmarks are done. partial tables are never returned
    pub fn build_with_abort<N: GraphNode>(graph: &LabeledGraph<N>, landmarks: NodeIds, abort: Option<&AbortFlag>) -> Option<LandmarkTables> {
        let start_time = Instant::now();
        let forward_graph = graph.list();
        let reverse_graph = graph.reversed();

        let columns: Vec<(Weights, Weights)> = landmarks.par_iter()
            .map(|landmark| {
                if abort.map_or(false, |flag| flag.is_raised()) {
                    return None;
                }

                Some((shortest_distances(*landmark, forward_graph), shortest_distances(*landmark, reverse_graph)))
            })
            .collect::<Option<Vec<_>>>()?;

        let (forward, reverse) = columns.into_iter().unzip();

        info!(landmarks = landmarks.len(), elapsed_ms = start_time.elapsed().as_millis() as u64, "landmark tables built");

        Some(LandmarkTables {
            landmarks,
            forward,
            reverse,
        })
    }

    pub fn empty() -> LandmarkTables {
        LandmarkTables {
            landmarks: Vec::new(),
            forward: Vec::new(),
            reverse: Vec::new(),
        }
    }

    /// dense ids of the landmarks in selection order
    pub fn landmarks(&self) -> &[NodeId] {
        &self.landmarks
    }

    pub fn num_landmarks(&self) -> usize {
        self.landmarks.len()
    }

    /// distance from the `landmark_index`-th landmark to `node_id`
    pub fn forward_distance(&self, landmark_index: usize, node_id: NodeId) -> Weight {
        self.forward[landmark_index].get(node_id as usize).copied().unwrap_or(INFINITY)
    }

    /// distance from `node_id` to the `landmark_index`-th landmark
    pub fn reverse_distance(&self, landmark_index: usize, node_id: NodeId) -> Weight {
        self.reverse[landmark_index].get(node_id as usize).copied().unwrap_or(INFINITY)
    }

    /// heuristic towards `goal` backed by these tables
    pub fn heuristic<'a, N: GraphNode>(&'a self, graph: &'a LabeledGraph<N>, goal: &N) -> AltHeuristic<'a, N> {
        AltHeuristic::new(graph, self, goal)
    }
}

/// goal specific ALT estimate. the goal's table columns are copied out once on creation
pub struct AltHeuristic<'a, N> {
    graph: &'a LabeledGraph<N>,
    tables: &'a LandmarkTables,
    landmark_to_goal: Weights,
    goal_to_landmark: Weights,
}

impl<'a, N: GraphNode> AltHeuristic<'a, N> {

    pub fn new(graph: &'a LabeledGraph<N>, tables: &'a LandmarkTables, goal: &N) -> Self {
        let (landmark_to_goal, goal_to_landmark) = match graph.node_id(goal) {
            Some(goal_id) => (0..tables.num_landmarks())
                .map(|index| (tables.forward_distance(index, goal_id), tables.reverse_distance(index, goal_id)))
                .unzip(),
            None => (vec![INFINITY; tables.num_landmarks()], vec![INFINITY; tables.num_landmarks()]),
        };

        AltHeuristic {
            graph,
            tables,
            landmark_to_goal,
            goal_to_landmark,
        }
    }

    /// lower bound on the distance from `node_id` to the goal. terms with an infinite
    /// distance are skipped, 0 if no term is finite
    pub fn estimate_id(&self, node_id: NodeId) -> Weight {
        let mut best: Weight = 0.0;

        for index in 0..self.tables.num_landmarks() {
            let landmark_to_node = self.tables.forward_distance(index, node_id);
            let node_to_landmark = self.tables.reverse_distance(index, node_id);

            if self.landmark_to_goal[index] < INFINITY && landmark_to_node < INFINITY {
                best = best.max(self.landmark_to_goal[index] - landmark_to_node);
            }

            if node_to_landmark < INFINITY && self.goal_to_landmark[index] < INFINITY {
                best = best.max(node_to_landmark - self.goal_to_landmark[index]);
            }
        }

        best
    }
}

impl<'a, N: GraphNode> Heuristic<N> for AltHeuristic<'a, N> {

    /// `goal` is fixed at construction, the argument is ignored
    fn estimate(&self, node: &N, _goal: &N) -> Result<Weight, PathError> {
        Ok(self.graph.node_id(node).map_or(0.0, |node_id| self.estimate_id(node_id)))
    }
}
