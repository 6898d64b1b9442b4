//! rendering of query results as text lines like
//! `1 4 | 82.0 | 0.000351 | 1-[36]->2-[1]->3-[45]->4`

use std::collections::HashMap;
use std::fmt::Display;
use std::io::{self, Write};
use std::time::Duration;

use crate::graph_representation::{Graph, GraphNode, LabeledGraph};
use crate::preprocessing::AbortFlag;
use crate::types::*;

/// `weight_map[u][v]` is the weight of arc `u -> v`. for parallel arcs the last one wins
pub type WeightMap<N> = HashMap<N, HashMap<N, Weight>>;

/// builds the weight lookup one source node at a time. if `abort` is raised the map is cut
/// short, but every node it contains still has all of its arcs
pub fn build_weight_map<N: GraphNode>(graph: &LabeledGraph<N>, abort: Option<&AbortFlag>) -> WeightMap<N> {
    let mut weight_map: WeightMap<N> = HashMap::with_capacity(graph.num_nodes());

    for node_id in graph.node_ids() {
        if abort.map_or(false, |flag| flag.is_raised()) {
            break;
        }

        let arcs = graph.arcs(node_id).iter()
            .map(|(target_node, weight)| (graph.node(*target_node).clone(), *weight))
            .collect();

        weight_map.insert(graph.node(node_id).clone(), arcs);
    }

    weight_map
}

pub fn edge_weight<N: GraphNode>(weight_map: &WeightMap<N>, start: &N, end: &N) -> Option<Weight> {
    weight_map.get(start).and_then(|arcs| arcs.get(end)).copied()
}

/// renders `u0-[w01]->u1-[w12]->...->uk` and sums the weights. arcs missing from the map are
/// shown as `-[?]->` and left out of the total
pub fn path_to_edge_string<N: GraphNode + Display>(path: &[N], weight_map: &WeightMap<N>) -> (String, Weight) {
    let Some(first) = path.first() else {
        return (String::from("[]"), 0.0);
    };

    let mut edge_string = first.to_string();
    let mut total: Weight = 0.0;

    for pair in path.windows(2) {
        match edge_weight(weight_map, &pair[0], &pair[1]) {
            Some(weight) => {
                total += weight;
                edge_string.push_str(&format!("-[{}]->{}", weight, pair[1]));
            },
            None => edge_string.push_str(&format!("-[?]->{}", pair[1])),
        }
    }

    (edge_string, total)
}

/// `<src> <dst> | <total> | <elapsed seconds> | <edges>`, or `inf` and `[]` without a path
pub fn format_result_line<N: GraphNode + Display>(source: &N, target: &N, path: Option<&[N]>, elapsed: Duration, weight_map: &WeightMap<N>) -> String {
    match path {
        Some(path) if !path.is_empty() => {
            let (edge_string, total) = path_to_edge_string(path, weight_map);
            format!("{} {} | {:?} | {:.6} | {}", source, target, total, elapsed.as_secs_f64(), edge_string)
        },
        _ => format!("{} {} | inf | {:.6} | []", source, target, elapsed.as_secs_f64()),
    }
}

/// writes the header lines followed by the result lines, one per line
pub fn write_results<W, H, R>(out: &mut W, header_lines: H, result_lines: R) -> io::Result<()>
where
    W: Write,
    H: IntoIterator,
    H::Item: AsRef<str>,
    R: IntoIterator,
    R::Item: AsRef<str>,
{
    for line in header_lines {
        writeln!(out, "{}", line.as_ref().trim_end())?;
    }

    for line in result_lines {
        writeln!(out, "{}", line.as_ref().trim_end())?;
    }

    out.flush()
}
