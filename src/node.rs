use std::fmt;
use std::str::FromStr;

use ordered_float::OrderedFloat;

use crate::error::PathError;

/// a totally ordered float so coordinates can key hash maps and break heap ties
pub type Coordinate = OrderedFloat<f64>;

/// node identifier as it appears in graph and query files: either an ordinal or a 2d point
/// (grid cell or lat/lon pair)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Node {
    Scalar(i64),
    Pair(Coordinate, Coordinate),
}

impl Node {

    pub fn pair(x: f64, y: f64) -> Self {
        Node::Pair(OrderedFloat(x), OrderedFloat(y))
    }
}

impl From<i64> for Node {

    fn from(value: i64) -> Self {
        Node::Scalar(value)
    }
}

impl From<(f64, f64)> for Node {

    fn from((x, y): (f64, f64)) -> Self {
        Node::pair(x, y)
    }
}

impl fmt::Display for Node {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Scalar(value) => write!(f, "{}", value),
            Node::Pair(x, y) => write!(f, "{},{}", x, y),
        }
    }
}

impl FromStr for Node {

    type Err = PathError;

    /// accepts `17`, `3,4` and `(3, 4)`
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let invalid = || PathError::InvalidNode(token.to_string());
        let trimmed = token.trim().trim_start_matches('(').trim_end_matches(')');

        match trimmed.split_once(',') {
            Some((x, y)) => {
                let x: f64 = x.trim().parse().map_err(|_| invalid())?;
                let y: f64 = y.trim().parse().map_err(|_| invalid())?;
                Ok(Node::pair(x, y))
            },
            None => trimmed.parse().map(Node::Scalar).map_err(|_| invalid()),
        }
    }
}
