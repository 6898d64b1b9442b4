use std::fmt;
use std::str::FromStr;

use crate::error::PathError;
use crate::graph_representation::{GraphNode, LabeledGraph};
use crate::heuristics::Heuristic;
use crate::types::*;

use super::bellman_ford::bellman_ford;
use super::best_first::{a_star, greedy_best_first};
use super::bfs::breadth_first_search;
use super::bidirectional::{bidirectional_breadth_first_search, bidirectional_dijkstra};
use super::dfs::{depth_first_search, depth_limited_search};
use super::dijkstra::dijkstra;

/// outcome of a single query: the path from start to goal (both included) and its cost.
/// an unreachable goal has no path and an infinite cost
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult<N> {
    pub path: Option<Vec<N>>,
    pub cost: Weight,
}

impl<N> SearchResult<N> {

    pub fn found(path: Vec<N>, cost: Weight) -> Self {
        SearchResult {
            path: Some(path),
            cost,
        }
    }

    pub fn unreachable() -> Self {
        SearchResult {
            path: None,
            cost: INFINITY,
        }
    }

    /// path consisting of just `node`
    pub fn single(node: N) -> Self {
        SearchResult::found(vec![node], 0.0)
    }

    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }
}

/// every search routine of the crate, used to run one by name
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    BreadthFirst,
    DepthFirst,
    DepthLimited,
    Dijkstra,
    GreedyBestFirst,
    AStar,
    BidirectionalBreadthFirst,
    BidirectionalDijkstra,
    BellmanFord,
}

impl Algorithm {

    pub const ALL: [Algorithm; 9] = [
        Algorithm::BreadthFirst,
        Algorithm::DepthFirst,
        Algorithm::DepthLimited,
        Algorithm::Dijkstra,
        Algorithm::GreedyBestFirst,
        Algorithm::AStar,
        Algorithm::BidirectionalBreadthFirst,
        Algorithm::BidirectionalDijkstra,
        Algorithm::BellmanFord,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::BreadthFirst => "bfs",
            Algorithm::DepthFirst => "dfs",
            Algorithm::DepthLimited => "depth_limited",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::GreedyBestFirst => "greedy",
            Algorithm::AStar => "astar",
            Algorithm::BidirectionalBreadthFirst => "bidirectional_bfs",
            Algorithm::BidirectionalDijkstra => "bidirectional_dijkstra",
            Algorithm::BellmanFord => "bellman_ford",
        }
    }

    /// true if the routine returns minimum weighted cost on graphs with non-negative weights
    pub fn is_weight_optimal(&self) -> bool {
        matches!(self, Algorithm::Dijkstra | Algorithm::AStar | Algorithm::BidirectionalDijkstra | Algorithm::BellmanFord)
    }

    /// runs the routine. `heuristic` is only consulted by greedy best-first and A*,
    /// `depth_limit` only by depth limited search
    pub fn run<N, H>(&self, graph: &LabeledGraph<N>, start: &N, goal: &N, heuristic: &H, depth_limit: usize) -> Result<SearchResult<N>, PathError>
    where
        N: GraphNode,
        H: Heuristic<N> + ?Sized,
    {
        match self {
            Algorithm::BreadthFirst => Ok(breadth_first_search(graph, start, goal)),
            Algorithm::DepthFirst => Ok(depth_first_search(graph, start, goal)),
            Algorithm::DepthLimited => Ok(depth_limited_search(graph, start, goal, depth_limit)),
            Algorithm::Dijkstra => Ok(dijkstra(graph, start, goal)),
            Algorithm::GreedyBestFirst => greedy_best_first(graph, start, goal, heuristic),
            Algorithm::AStar => a_star(graph, start, goal, heuristic),
            Algorithm::BidirectionalBreadthFirst => Ok(bidirectional_breadth_first_search(graph, start, goal)),
            Algorithm::BidirectionalDijkstra => Ok(bidirectional_dijkstra(graph, start, goal)),
            Algorithm::BellmanFord => bellman_ford(graph, start, goal),
        }
    }
}

impl fmt::Display for Algorithm {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {

    type Err = String;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL.iter()
            .find(|algorithm| algorithm.name() == name)
            .copied()
            .ok_or_else(|| format!("unknown algorithm: {}", name))
    }
}
