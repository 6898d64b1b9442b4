pub mod algorithm;
mod search_utils;

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod best_first;
pub mod bidirectional;
pub mod bellman_ford;

pub use algorithm::{Algorithm, SearchResult};
