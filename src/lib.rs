pub mod types;
pub mod error;
pub mod node;

pub mod graph_representation;
pub mod graph_algorithms;
pub mod heuristics;
pub mod utils;

pub mod search;
pub mod landmarks;
pub mod preprocessing;
pub mod selector;
pub mod formatting;

pub use error::PathError;
pub use graph_representation::{Graph, GraphList, GraphNode, LabeledGraph};
pub use node::Node;
pub use preprocessing::{build_index, build_index_with_abort, AbortFlag, GraphIndex, IndexConfig};
pub use search::{Algorithm, SearchResult};
pub use selector::{choose_algorithm, find_path, Strategy};
