use thiserror::Error;

/// errors raised by the library. an unreachable goal is never one of these,
/// searches report it through `SearchResult::unreachable`
#[derive(Debug, Error)]
pub enum PathError {
    #[error("{heuristic} heuristic cannot compare {node} with {goal}")]
    InvalidHeuristicInput {
        heuristic: &'static str,
        node: String,
        goal: String,
    },

    #[error("negative cycle reachable from the start node")]
    NegativeCycle,

    #[error("invalid node identifier `{0}`")]
    InvalidNode(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
}
