use std::{path::Path, fs::File};
use std::io::{BufRead, BufReader};

use crate::error::PathError;
use crate::graph_representation::LabeledGraph;
use crate::node::Node;
use crate::types::*;

/// reads a graph file. recognised lines:
/// `a <u> <v> <w>` adds the arc `u -> v` with weight `w`,
/// `n <u>` declares a node without arcs.
/// `c`, `p` and `#` lines as well as blank lines are skipped.
/// nodes are integers or `x,y` pairs
pub fn read_graph(path: &dyn AsRef<Path>) -> Result<LabeledGraph<Node>, PathError> {
    let file = File::open(path)?;
    parse_graph(BufReader::new(file))
}

pub fn parse_graph<R: BufRead>(reader: R) -> Result<LabeledGraph<Node>, PathError> {
    let mut graph = LabeledGraph::new();

    for (line_index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = line_index + 1;
        let split = line.split_whitespace().collect::<Vec<&str>>();

        match split.first() {
            Some(&"a") if split.len() == 4 => {
                let source_node = parse_node(split[1], line_number)?;
                let target_node = parse_node(split[2], line_number)?;
                let arc_weight: Weight = split[3].parse().map_err(|_| PathError::Parse {
                    line: line_number,
                    message: format!("invalid weight `{}`", split[3]),
                })?;

                graph.add_edge(source_node, target_node, arc_weight);
            },
            Some(&"n") if split.len() == 2 => {
                graph.add_node(parse_node(split[1], line_number)?);
            },
            None | Some(&"c") | Some(&"p") => {},
            Some(token) if token.starts_with('#') => {},
            Some(_) => {
                return Err(PathError::Parse {
                    line: line_number,
                    message: format!("unrecognised line `{}`", line),
                });
            },
        }
    }

    Ok(graph)
}

/// reads a query file with one `<source> <target>` pair per line, blank and `#` lines are skipped
pub fn read_queries(path: &dyn AsRef<Path>) -> Result<Vec<(Node, Node)>, PathError> {
    let file = File::open(path)?;
    parse_queries(BufReader::new(file))
}

pub fn parse_queries<R: BufRead>(reader: R) -> Result<Vec<(Node, Node)>, PathError> {
    let mut queries = Vec::new();

    for (line_index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = line_index + 1;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let split = trimmed.split_whitespace().collect::<Vec<&str>>();
        if split.len() != 2 {
            return Err(PathError::Parse {
                line: line_number,
                message: format!("expected `<source> <target>`, got `{}`", trimmed),
            });
        }

        queries.push((parse_node(split[0], line_number)?, parse_node(split[1], line_number)?));
    }

    Ok(queries)
}

fn parse_node(token: &str, line_number: usize) -> Result<Node, PathError> {
    token.parse().map_err(|_| PathError::Parse {
        line: line_number,
        message: format!("invalid node `{}`", token),
    })
}
