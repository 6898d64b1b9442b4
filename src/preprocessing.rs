//! query independent structures built once per graph and shared by all queries.
//!
//! the index is immutable once built, so it can be read by any number of concurrent queries.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use tracing::{info, warn};

use crate::formatting::{build_weight_map, WeightMap};
use crate::graph_algorithms::weak_components;
use crate::graph_representation::{Graph, GraphNode, LabeledGraph};
use crate::landmarks::{select_landmarks, LandmarkTables};
use crate::types::*;

/// policy constants of the index build and the algorithm selection
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexConfig {
    /// landmark tables are built for graphs with at least this many nodes
    pub landmark_threshold: usize,
    pub num_landmarks: usize,
    /// landmarks are chosen among this many nodes of highest out degree
    pub candidate_pool: usize,
    /// graphs with more nodes than this use A* with the zero heuristic instead of bfs/dijkstra
    pub large_graph_threshold: usize,
}

impl Default for IndexConfig {

    fn default() -> Self {
        IndexConfig {
            landmark_threshold: 10_000,
            num_landmarks: 12,
            candidate_pool: 5_000,
            large_graph_threshold: 10_000,
        }
    }
}

/// cooperative cancellation of an index build, raised by its owner and checked between build steps
#[derive(Debug, Default)]
pub struct AbortFlag {
    raised: AtomicBool,
}

impl AbortFlag {

    pub fn new() -> Self {
        AbortFlag::default()
    }

    pub fn raise(&self) {
        self.raised.store(true, Ordering::Relaxed);
    }

    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::Relaxed)
    }
}

#[derive(Debug)]
pub struct GraphIndex<N> {
    pub weight_map: WeightMap<N>,
    /// empty if the build was aborted before components were labelled
    pub weak_components: HashMap<N, ComponentId>,
    /// true iff every arc weight is exactly 1
    pub uniform_weights: bool,
    pub has_negative_weights: bool,
    pub node_count: usize,
    pub edge_count: usize,
    pub landmarks: Option<LandmarkTables>,
    pub config: IndexConfig,
    /// false if the build was cut short by an abort
    pub complete: bool,
}

impl<N: GraphNode> GraphIndex<N> {

    /// false only if both nodes are labelled and sit in different weak components.
    /// `true` does not promise a directed path
    pub fn reachable(&self, start: &N, goal: &N) -> bool {
        match (self.weak_components.get(start), self.weak_components.get(goal)) {
            (Some(start_component), Some(goal_component)) => start_component == goal_component,
            _ => true,
        }
    }

    /// landmark identifiers in selection order, empty without tables
    pub fn landmark_nodes(&self, graph: &LabeledGraph<N>) -> Vec<N> {
        self.landmarks.as_ref().map_or_else(Vec::new, |tables| graph.translate_path(tables.landmarks()))
    }
}

pub fn build_index<N: GraphNode>(graph: &LabeledGraph<N>, config: &IndexConfig) -> GraphIndex<N> {
    build_index_with_abort(graph, config, None)
}

/// builds the index, checking `abort` between phases. an aborted build still returns a usable
/// index: the weight map holds complete arc sets for the nodes it covers, the component map is
/// either complete or empty and landmark tables are either complete or missing
pub fn build_index_with_abort<N: GraphNode>(graph: &LabeledGraph<N>, config: &IndexConfig, abort: Option<&AbortFlag>) -> GraphIndex<N> {
    let start_time = Instant::now();
    let aborted = || abort.map_or(false, |flag| flag.is_raised());

    let weight_map = build_weight_map(graph, abort);
    if aborted() {
        warn!(covered_nodes = weight_map.len(), "index build aborted while building the weight map");
    }

    let mut weak_component_map = HashMap::new();
    if !aborted() {
        let components = weak_components(graph);
        weak_component_map = graph.node_ids()
            .map(|node_id| (graph.node(node_id).clone(), components[node_id as usize]))
            .collect();
    }

    let uniform_weights = arc_weights(graph).all(|weight| weight == 1.0);
    let has_negative_weights = arc_weights(graph).any(|weight| weight < 0.0);

    let node_count = graph.num_nodes();
    let mut landmarks = None;

    if !aborted() && node_count >= config.landmark_threshold && !has_negative_weights {
        let selected = select_landmarks(graph, config.num_landmarks, config.candidate_pool);
        info!(landmarks = selected.len(), "landmarks selected");

        landmarks = LandmarkTables::build_with_abort(graph, selected, abort);
        if landmarks.is_none() {
            warn!("index build aborted while building landmark tables");
        }
    }

    let complete = !aborted();

    info!(
        nodes = node_count,
        edges = graph.num_edges(),
        uniform_weights,
        has_negative_weights,
        landmarks = landmarks.as_ref().map_or(0, |tables| tables.num_landmarks()),
        complete,
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "graph index built"
    );

    GraphIndex {
        weight_map,
        weak_components: weak_component_map,
        uniform_weights,
        has_negative_weights,
        node_count,
        edge_count: graph.num_edges(),
        landmarks,
        config: config.clone(),
        complete,
    }
}

fn arc_weights<N>(graph: &LabeledGraph<N>) -> impl Iterator<Item = Weight> + '_ {
    graph.node_ids().flat_map(move |node_id| graph.arcs(node_id).iter().map(|(_, weight)| *weight))
}

/// free function form of `GraphIndex::reachable`
pub fn reachable<N: GraphNode>(index: &GraphIndex<N>, start: &N, goal: &N) -> bool {
    index.reachable(start, goal)
}
