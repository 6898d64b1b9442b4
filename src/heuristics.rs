//! distance estimates used to order greedy best-first and A* searches.
//!
//! every estimate is a lower bound on the remaining cost as long as edge weights are at least
//! the geometric distance between their end points. comparing nodes of different shapes is a
//! caller error and is reported instead of guessed.

use std::f64::consts::SQRT_2;
use std::str::FromStr;

use crate::error::PathError;
use crate::node::Node;
use crate::types::Weight;

/// mean earth radius in kilometres
pub const EARTH_RADIUS_KM: f64 = 6371.0;

pub trait Heuristic<N> {

    /// estimated cost from `node` to `goal`
    fn estimate(&self, node: &N, goal: &N) -> Result<Weight, PathError>;
}

/// always 0, turns A* into Dijkstra and greedy best-first into insertion order search
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ZeroHeuristic;

impl<N> Heuristic<N> for ZeroHeuristic {

    fn estimate(&self, _node: &N, _goal: &N) -> Result<Weight, PathError> {
        Ok(0.0)
    }
}

/// geometric estimates over `Node`. scalar ids use their absolute difference for every metric
/// except haversine, which only accepts lat/lon pairs in degrees
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DistanceHeuristic {
    Zero,
    Manhattan,
    Euclidean,
    Chebyshev,
    Octile,
    Haversine,
}

impl DistanceHeuristic {

    pub fn name(&self) -> &'static str {
        match self {
            DistanceHeuristic::Zero => "zero",
            DistanceHeuristic::Manhattan => "manhattan",
            DistanceHeuristic::Euclidean => "euclidean",
            DistanceHeuristic::Chebyshev => "chebyshev",
            DistanceHeuristic::Octile => "octile",
            DistanceHeuristic::Haversine => "haversine",
        }
    }

    pub fn distance(&self, node: &Node, goal: &Node) -> Result<Weight, PathError> {
        let heuristic = *self;

        match (heuristic, node, goal) {
            (DistanceHeuristic::Zero, _, _) => Ok(0.0),
            (DistanceHeuristic::Haversine, Node::Pair(lat1, lon1), Node::Pair(lat2, lon2)) => {
                Ok(haversine(lat1.0, lon1.0, lat2.0, lon2.0))
            },
            (DistanceHeuristic::Haversine, _, _) => Err(self.invalid_input(node, goal)),
            (_, Node::Scalar(a), Node::Scalar(b)) => Ok((a - b).abs() as Weight),
            (_, Node::Pair(x1, y1), Node::Pair(x2, y2)) => {
                let dx = (x1.0 - x2.0).abs();
                let dy = (y1.0 - y2.0).abs();

                Ok(match heuristic {
                    DistanceHeuristic::Manhattan => dx + dy,
                    DistanceHeuristic::Euclidean => dx.hypot(dy),
                    DistanceHeuristic::Chebyshev => dx.max(dy),
                    _ => dx.max(dy) + (SQRT_2 - 1.0) * dx.min(dy), // octile
                })
            },
            _ => Err(self.invalid_input(node, goal)),
        }
    }

    fn invalid_input(&self, node: &Node, goal: &Node) -> PathError {
        PathError::InvalidHeuristicInput {
            heuristic: self.name(),
            node: node.to_string(),
            goal: goal.to_string(),
        }
    }
}

impl Heuristic<Node> for DistanceHeuristic {

    fn estimate(&self, node: &Node, goal: &Node) -> Result<Weight, PathError> {
        self.distance(node, goal)
    }
}

impl FromStr for DistanceHeuristic {

    type Err = String;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "zero" => Ok(DistanceHeuristic::Zero),
            "manhattan" => Ok(DistanceHeuristic::Manhattan),
            "euclidean" => Ok(DistanceHeuristic::Euclidean),
            "chebyshev" => Ok(DistanceHeuristic::Chebyshev),
            "octile" => Ok(DistanceHeuristic::Octile),
            "haversine" => Ok(DistanceHeuristic::Haversine),
            _ => Err(format!("unknown heuristic: {}", name)),
        }
    }
}

/// great circle distance in km between two lat/lon points given in degrees
fn haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Weight {
    let (lat1, lon1, lat2, lon2) = (lat1.to_radians(), lon1.to_radians(), lat2.to_radians(), lon2.to_radians());
    let half_dlat = ((lat2 - lat1) / 2.0).sin();
    let half_dlon = ((lon2 - lon1) / 2.0).sin();

    let a = half_dlat * half_dlat + lat1.cos() * lat2.cos() * half_dlon * half_dlon;

    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}
