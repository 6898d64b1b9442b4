use std::fmt;

use tracing::debug;

use crate::error::PathError;
use crate::graph_representation::{GraphNode, LabeledGraph};
use crate::heuristics::ZeroHeuristic;
use crate::preprocessing::GraphIndex;
use crate::search::best_first::a_star;
use crate::search::bellman_ford::bellman_ford;
use crate::search::bfs::breadth_first_search;
use crate::search::dijkstra::dijkstra;
use crate::search::SearchResult;

/// the routines the selector can pick for a query
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// A* guided by the index's landmark tables, rebuilt for every goal
    AStarLandmarks,
    BellmanFord,
    /// A* with the zero heuristic: dijkstra order behind the A* interface
    AStarZero,
    BreadthFirst,
    Dijkstra,
}

impl Strategy {

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::AStarLandmarks => "astar_alt",
            Strategy::BellmanFord => "bellman_ford",
            Strategy::AStarZero => "astar_zero",
            Strategy::BreadthFirst => "bfs",
            Strategy::Dijkstra => "dijkstra",
        }
    }

    pub fn run<N: GraphNode>(&self, graph: &LabeledGraph<N>, index: &GraphIndex<N>, start: &N, goal: &N) -> Result<SearchResult<N>, PathError> {
        match self {
            Strategy::AStarLandmarks => match &index.landmarks {
                Some(tables) => a_star(graph, start, goal, &tables.heuristic(graph, goal)),
                None => a_star(graph, start, goal, &ZeroHeuristic),
            },
            Strategy::BellmanFord => bellman_ford(graph, start, goal),
            Strategy::AStarZero => a_star(graph, start, goal, &ZeroHeuristic),
            Strategy::BreadthFirst => Ok(breadth_first_search(graph, start, goal)),
            Strategy::Dijkstra => Ok(dijkstra(graph, start, goal)),
        }
    }
}

impl fmt::Display for Strategy {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// picks the routine for queries against `index`, first matching rule wins:
/// landmark tables, negative weights, large graph, uniform weights, otherwise dijkstra
pub fn choose_algorithm<N>(index: &GraphIndex<N>) -> Strategy {
    if index.landmarks.is_some() {
        Strategy::AStarLandmarks
    }
    else if index.has_negative_weights {
        Strategy::BellmanFord
    }
    else if index.node_count > index.config.large_graph_threshold {
        Strategy::AStarZero
    }
    else if index.uniform_weights {
        Strategy::BreadthFirst
    }
    else {
        Strategy::Dijkstra
    }
}

/// answers one query: identical end points are a zero cost single node path, end points in
/// different weak components are rejected without searching, anything else runs the chosen routine
pub fn find_path<N: GraphNode>(graph: &LabeledGraph<N>, start: &N, goal: &N, index: &GraphIndex<N>) -> Result<SearchResult<N>, PathError> {
    if start == goal {
        return Ok(SearchResult::single(start.clone()));
    }

    if !index.reachable(start, goal) {
        debug!(?start, ?goal, "rejected by weak components");
        return Ok(SearchResult::unreachable());
    }

    let strategy = choose_algorithm(index);
    debug!(?start, ?goal, strategy = strategy.name(), "running query");

    strategy.run(graph, index, start, goal)
}
