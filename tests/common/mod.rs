#![allow(dead_code)]

use landmark_path_finder::types::*;
use landmark_path_finder::{LabeledGraph, Node};

pub type Adjacency = Vec<(u32, Vec<(u32, Weight)>)>;

pub fn graph_from(adjacency: Adjacency) -> LabeledGraph<u32> {
    LabeledGraph::from_adjacency(adjacency)
}

// ┌─┐  1  ┌─┐
// │0├────►│1│
// └─┘     └─┘
pub fn get_simple_graph() -> LabeledGraph<u32> {
    graph_from(vec![(0, vec![(1, 1.0)]), (1, vec![])])
}

// ┌─┐  1  ┌─┐     ┌─┐  1  ┌─┐
// │0├────►│1│     │2├────►│3│
// └─┘     └─┘     └─┘     └─┘
pub fn get_disconnected_graph() -> LabeledGraph<u32> {
    graph_from(vec![(0, vec![(1, 1.0)]), (1, vec![]), (2, vec![(3, 1.0)]), (3, vec![])])
}

//        1      5
//  ┌─┐ ────► ┌─┐ ────► ┌─┐
//  │0│       │1│       │3│
//  └┬┘       └┬┘       └▲┘
//   │ 4       │ 2       │ 1
//   │        ┌▼┐        │
//   └──────► │2├────────┘
//            └─┘
pub fn get_weighted_graph() -> LabeledGraph<u32> {
    graph_from(vec![
        (0, vec![(1, 1.0), (2, 4.0)]),
        (1, vec![(2, 2.0), (3, 5.0)]),
        (2, vec![(3, 1.0)]),
        (3, vec![]),
    ])
}

//  ┌─┐  1  ┌─┐  1  ┌─┐  2  ┌─┐
//  │0├────►│1├────►│2├────►│3│
//  └▲┘     └─┘     └┬┘     └─┘
//   │        1      │
//   └───────────────┘
pub fn get_cyclic_graph() -> LabeledGraph<u32> {
    graph_from(vec![
        (0, vec![(1, 1.0)]),
        (1, vec![(2, 1.0)]),
        (2, vec![(0, 1.0), (3, 2.0)]),
        (3, vec![]),
    ])
}

//        2       1       3
//  ┌─┐ ────► ┌─┐ ────► ┌─┐ ────► ┌─┐
//  │0│       │1│       │3│       │5│
//  └┬┘       └─┘       └▲┘       └▲┘
//   │ 2              5  │         │ 1
//  ┌▼┐ ─────────────────┘        ┌┴┐
//  │2├──────────────────────────►│4│
//  └─┘             1             └─┘
pub fn get_larger_graph() -> LabeledGraph<u32> {
    graph_from(vec![
        (0, vec![(1, 2.0), (2, 2.0)]),
        (1, vec![(3, 1.0)]),
        (2, vec![(3, 5.0), (4, 1.0)]),
        (3, vec![(5, 3.0)]),
        (4, vec![(5, 1.0)]),
        (5, vec![]),
    ])
}

//  ┌─┐  1  ┌─┐  100  ┌─┐
//  │0├────►│1├──────►│3│
//  └┬┘     └─┘       └▲┘
//   │ 2    ┌─┐   1    │
//   └─────►│2├────────┘
//          └─┘
pub fn get_trap_graph() -> LabeledGraph<u32> {
    graph_from(vec![
        (0, vec![(1, 1.0), (2, 2.0)]),
        (1, vec![(3, 100.0)]),
        (2, vec![(3, 1.0)]),
        (3, vec![]),
    ])
}

/// 0 -> 1 -> ... -> length - 1 with unit weights
pub fn get_chain_graph(length: u32) -> LabeledGraph<u32> {
    graph_from((0..length).map(|node| {
        let arcs = if node + 1 < length { vec![(node + 1, 1.0)] } else { vec![] };
        (node, arcs)
    }).collect())
}

/// `size` x `size` grid of `Node::Pair` cells, unit arcs between 4-neighbours in both directions
pub fn get_grid_graph(size: i32) -> LabeledGraph<Node> {
    let cell = |x: i32, y: i32| Node::pair(x as f64, y as f64);

    LabeledGraph::from_adjacency((0..size).flat_map(|x| (0..size).map(move |y| (x, y))).map(|(x, y)| {
        let arcs: Vec<(Node, Weight)> = [(1, 0), (-1, 0), (0, 1), (0, -1)].iter()
            .map(|(dx, dy)| (x + dx, y + dy))
            .filter(|(nx, ny)| *nx >= 0 && *ny >= 0 && *nx < size && *ny < size)
            .map(|(nx, ny)| (cell(nx, ny), 1.0))
            .collect();

        (cell(x, y), arcs)
    }))
}

/// cheapest arc weight from `start` to `end`, `None` without an arc
pub fn arc_weight<N: landmark_path_finder::GraphNode>(graph: &LabeledGraph<N>, start: &N, end: &N) -> Option<Weight> {
    graph.neighbors(start)
        .filter(|(target, _)| *target == end)
        .map(|(_, weight)| weight)
        .fold(None, |best: Option<Weight>, weight| Some(best.map_or(weight, |best| best.min(weight))))
}

/// true if `path` runs from `start` to `goal` along existing arcs
pub fn is_valid_path<N: landmark_path_finder::GraphNode>(graph: &LabeledGraph<N>, path: &[N], start: &N, goal: &N) -> bool {
    path.first() == Some(start)
        && path.last() == Some(goal)
        && path.windows(2).all(|pair| arc_weight(graph, &pair[0], &pair[1]).is_some())
}

/// sum of the cheapest arc weights along `path`
pub fn path_weight<N: landmark_path_finder::GraphNode>(graph: &LabeledGraph<N>, path: &[N]) -> Weight {
    path.windows(2)
        .map(|pair| arc_weight(graph, &pair[0], &pair[1]).unwrap_or(INFINITY))
        .sum()
}
