use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use landmark_path_finder::formatting::{format_result_line, write_results};
use landmark_path_finder::heuristics::DistanceHeuristic;
use landmark_path_finder::utils::{io::{read_graph, read_queries}, measure_time};
use landmark_path_finder::{build_index_with_abort, choose_algorithm, find_path, AbortFlag, Algorithm, GraphIndex, IndexConfig, LabeledGraph, Node, SearchResult};

#[derive(Parser)]
struct Opts {

    #[clap(subcommand)]
    subcmd: SubCommand
}

#[derive(Parser)]
enum SubCommand {
    Query(QueryCommand),
    Inspect(InspectCommand)
}

#[derive(Parser)]
struct IndexOptions {

    /// path to the graph file
    #[clap(short, long)]
    graph_path: String,

    /// build landmark tables for graphs with at least this many nodes
    #[clap(long, default_value = "10000")]
    landmark_threshold: usize,

    /// number of landmarks to select
    #[clap(long, default_value = "12")]
    num_landmarks: usize,

    /// landmarks are chosen among this many nodes of highest out degree
    #[clap(long, default_value = "5000")]
    candidate_pool: usize,

    /// graphs with more nodes than this are searched with A* instead of bfs/dijkstra
    #[clap(long, default_value = "10000")]
    large_graph_threshold: usize,

    /// seconds the index build may take before it is cut short
    #[clap(long, default_value = "60")]
    build_budget_secs: u64,

    /// log filter, e.g. `info` or `landmark_path_finder=debug`
    #[clap(long, default_value = "info")]
    verbosity: String
}

/// answers every query of a query file
#[derive(Parser)]
struct QueryCommand {

    #[clap(flatten)]
    index: IndexOptions,

    /// path to the query file
    #[clap(short, long)]
    query_path: String,

    /// result file, stdout if omitted
    #[clap(short, long)]
    output_path: Option<String>,

    /// `auto` lets the selector decide, otherwise the name of a search algorithm
    #[clap(short, long, default_value = "auto")]
    algorithm: String,

    /// heuristic for greedy and astar: zero, manhattan, euclidean, chebyshev, octile, haversine or alt
    #[clap(long, default_value = "zero")]
    heuristic: String,

    /// hop limit for depth_limited
    #[clap(short, long, default_value = "5")]
    depth_limit: usize
}

/// builds the index and prints what the selector would do with it
#[derive(Parser)]
struct InspectCommand {

    #[clap(flatten)]
    index: IndexOptions
}

fn main() -> Result<()> {
    let opts: Opts = Opts::parse();

    match opts.subcmd {
        SubCommand::Query(command) => run_queries(&command),
        SubCommand::Inspect(command) => inspect(&command),
    }
}

fn setup_logging(verbosity: &str) {
    let filter = EnvFilter::try_new(verbosity).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_graph_and_index(options: &IndexOptions) -> Result<(LabeledGraph<Node>, GraphIndex<Node>)> {
    setup_logging(&options.verbosity);

    let (load_time, graph) = measure_time(|| read_graph(&options.graph_path));
    let graph = graph.with_context(|| format!("unable to read graph {}", options.graph_path))?;
    info!(nodes = graph.nodes().len(), seconds = load_time.as_secs_f64(), "graph loaded");

    let config = IndexConfig {
        landmark_threshold: options.landmark_threshold,
        num_landmarks: options.num_landmarks,
        candidate_pool: options.candidate_pool,
        large_graph_threshold: options.large_graph_threshold,
    };

    let abort = Arc::new(AbortFlag::new());
    let (build_done, build_finished) = mpsc::channel::<()>();
    let budget = Duration::from_secs(options.build_budget_secs);

    let timer_flag = Arc::clone(&abort);
    let timer = thread::spawn(move || {
        if let Err(RecvTimeoutError::Timeout) = build_finished.recv_timeout(budget) {
            timer_flag.raise();
        }
    });

    let index = build_index_with_abort(&graph, &config, Some(&*abort));
    drop(build_done);
    timer.join().map_err(|_| anyhow!("build timer panicked"))?;

    if !index.complete {
        warn!(budget_secs = options.build_budget_secs, "index build exceeded its budget, continuing with a partial index");
    }

    Ok((graph, index))
}

fn run_queries(command: &QueryCommand) -> Result<()> {
    let (graph, index) = load_graph_and_index(&command.index)?;
    let queries = read_queries(&command.query_path)
        .with_context(|| format!("unable to read queries {}", command.query_path))?;

    let algorithm = match command.algorithm.as_str() {
        "auto" => None,
        name => Some(name.parse::<Algorithm>().map_err(|message| anyhow!(message))?),
    };

    // `None` selects the landmark heuristic
    let heuristic: Option<DistanceHeuristic> = match command.heuristic.as_str() {
        "alt" if algorithm.is_some() && index.landmarks.is_none() => {
            return Err(anyhow!("the index has no landmark tables, lower --landmark-threshold"));
        },
        "alt" => None,
        name => Some(name.parse().map_err(|message: String| anyhow!(message))?),
    };

    let mut result_lines = Vec::with_capacity(queries.len());
    let mut num_found = 0;

    for (source, target) in &queries {
        let (elapsed, result) = measure_time(|| run_query(command, algorithm, heuristic, &graph, &index, source, target));

        // a failed query, e.g. a goal behind a negative cycle, has no path
        let path = match result {
            Ok(result) => result.path,
            Err(error) => {
                warn!(%source, %target, "query failed: {:#}", error);
                None
            },
        };

        if path.is_some() {
            num_found += 1;
        }

        result_lines.push(format_result_line(source, target, path.as_deref(), elapsed, &index.weight_map));
    }

    info!(queries = queries.len(), found = num_found, "queries answered");

    let strategy = match algorithm {
        Some(algorithm) => algorithm.name(),
        None => choose_algorithm(&index).name(),
    };

    let header_lines = vec![
        format!("# graph: {}", command.index.graph_path),
        format!("# nodes: {} edges: {}", index.node_count, index.edge_count),
        format!("# algorithm: {}", strategy),
    ];

    let mut out: Box<dyn Write> = match &command.output_path {
        Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| format!("unable to create {}", path))?)),
        None => Box::new(BufWriter::new(io::stdout())),
    };

    write_results(&mut out, header_lines, result_lines)?;

    Ok(())
}

fn run_query(command: &QueryCommand, algorithm: Option<Algorithm>, heuristic: Option<DistanceHeuristic>, graph: &LabeledGraph<Node>, index: &GraphIndex<Node>, source: &Node, target: &Node) -> Result<SearchResult<Node>> {
    let Some(algorithm) = algorithm else {
        return Ok(find_path(graph, source, target, index)?);
    };

    match (heuristic, &index.landmarks) {
        (Some(heuristic), _) => Ok(algorithm.run(graph, source, target, &heuristic, command.depth_limit)?),
        (None, Some(tables)) => Ok(algorithm.run(graph, source, target, &tables.heuristic(graph, target), command.depth_limit)?),
        (None, None) => Err(anyhow!("the index has no landmark tables")),
    }
}

fn inspect(command: &InspectCommand) -> Result<()> {
    let (graph, index) = load_graph_and_index(&command.index)?;

    let num_components = index.weak_components.values().max().copied().unwrap_or(0);
    let landmarks: Vec<String> = index.landmark_nodes(&graph).iter().map(|node| node.to_string()).collect();

    println!("nodes: {}", index.node_count);
    println!("edges: {}", index.edge_count);
    println!("weak components: {}", num_components);
    println!("uniform weights: {}", index.uniform_weights);
    println!("negative weights: {}", index.has_negative_weights);
    println!("landmarks: [{}]", landmarks.join(", "));
    println!("complete: {}", index.complete);
    println!("strategy: {}", choose_algorithm(&index));

    Ok(())
}
