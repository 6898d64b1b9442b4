mod common;

use std::thread;

use landmark_path_finder::preprocessing::reachable;
use landmark_path_finder::search::dijkstra::dijkstra;
use landmark_path_finder::{build_index, build_index_with_abort, choose_algorithm, find_path, AbortFlag, IndexConfig, SearchResult, Strategy};

use common::*;

/// config that builds landmark tables for every graph with at least `landmark_threshold` nodes
fn landmark_config(landmark_threshold: usize) -> IndexConfig {
    IndexConfig {
        landmark_threshold,
        num_landmarks: 3,
        candidate_pool: 10,
        ..IndexConfig::default()
    }
}

#[test]
fn default_config() {
    let config = IndexConfig::default();

    assert_eq!(config.landmark_threshold, 10_000);
    assert_eq!(config.num_landmarks, 12);
    assert_eq!(config.candidate_pool, 5_000);
    assert_eq!(config.large_graph_threshold, 10_000);
}

#[test]
fn index_of_weighted_graph() {
    let graph = get_weighted_graph();
    let index = build_index(&graph, &IndexConfig::default());

    assert_eq!(index.node_count, 4);
    assert_eq!(index.edge_count, 5);
    assert!(!index.uniform_weights);
    assert!(!index.has_negative_weights);
    assert!(index.landmarks.is_none());
    assert!(index.complete);

    assert_eq!(index.weight_map.len(), 4);
    assert_eq!(index.weight_map[&0][&2], 4.0);
    assert_eq!(index.weight_map[&1][&3], 5.0);
    assert!(index.weight_map[&3].is_empty());

    let component = index.weak_components[&0];
    assert!((0..4).all(|node| index.weak_components[&node] == component));
}

#[test]
fn weak_components_ignore_direction() {
    let graph = get_disconnected_graph();
    let index = build_index(&graph, &IndexConfig::default());

    assert_eq!(index.weak_components[&0], index.weak_components[&1]);
    assert_eq!(index.weak_components[&2], index.weak_components[&3]);
    assert_ne!(index.weak_components[&0], index.weak_components[&2]);

    // same component, but no directed path
    assert!(index.reachable(&1, &0));
    assert!(!index.reachable(&0, &3));
    assert!(!reachable(&index, &3, &1));

    // unlabelled nodes cannot be ruled out
    assert!(index.reachable(&0, &42));
}

#[test]
fn uniform_and_negative_weights() {
    let uniform = build_index(&get_chain_graph(4), &IndexConfig::default());
    assert!(uniform.uniform_weights);
    assert!(!uniform.has_negative_weights);

    let negative = build_index(&graph_from(vec![(0, vec![(1, -1.0)]), (1, vec![])]), &IndexConfig::default());
    assert!(!negative.uniform_weights);
    assert!(negative.has_negative_weights);

    // no arcs at all
    let isolated = build_index(&graph_from(vec![(0, vec![]), (1, vec![])]), &IndexConfig::default());
    assert!(isolated.uniform_weights);
    assert_ne!(isolated.weak_components[&0], isolated.weak_components[&1]);
}

#[test]
fn landmarks_only_above_threshold() {
    let graph = get_larger_graph();

    let index = build_index(&graph, &landmark_config(6));
    let tables = index.landmarks.as_ref().expect("6 nodes reach the threshold");
    assert_eq!(tables.num_landmarks(), index.landmark_nodes(&graph).len());
    assert!(!index.landmark_nodes(&graph).is_empty());

    let index = build_index(&graph, &landmark_config(7));
    assert!(index.landmarks.is_none());
    assert!(index.landmark_nodes(&graph).is_empty());
}

#[test]
fn no_landmarks_with_negative_weights() {
    let graph = graph_from(vec![
        (0, vec![(1, 4.0), (2, 5.0)]),
        (1, vec![]),
        (2, vec![(1, -3.0)]),
    ]);

    let index = build_index(&graph, &landmark_config(1));
    assert!(index.landmarks.is_none());
    assert_eq!(choose_algorithm(&index), Strategy::BellmanFord);
    assert_eq!(find_path(&graph, &0, &1, &index).unwrap(), SearchResult::found(vec![0, 2, 1], 2.0));
}

#[test]
fn selector_rules_in_order() {
    let weighted = get_weighted_graph();
    let uniform = get_chain_graph(4);

    assert_eq!(choose_algorithm(&build_index(&weighted, &landmark_config(1))), Strategy::AStarLandmarks);
    assert_eq!(choose_algorithm(&build_index(&weighted, &IndexConfig::default())), Strategy::Dijkstra);
    assert_eq!(choose_algorithm(&build_index(&uniform, &IndexConfig::default())), Strategy::BreadthFirst);

    let large = IndexConfig {
        large_graph_threshold: 3,
        ..IndexConfig::default()
    };
    assert_eq!(choose_algorithm(&build_index(&weighted, &large)), Strategy::AStarZero);
    assert_eq!(choose_algorithm(&build_index(&uniform, &large)), Strategy::AStarZero);

    // landmark tables win over the size rule
    let large_with_landmarks = IndexConfig {
        large_graph_threshold: 3,
        ..landmark_config(1)
    };
    assert_eq!(choose_algorithm(&build_index(&weighted, &large_with_landmarks)), Strategy::AStarLandmarks);
}

#[test]
fn find_path_with_every_strategy() {
    let graph = get_weighted_graph();
    let expected = SearchResult::found(vec![0, 1, 2, 3], 4.0);

    let configs = [
        landmark_config(1),
        IndexConfig::default(),
        IndexConfig { large_graph_threshold: 3, ..IndexConfig::default() },
    ];

    for config in configs {
        let index = build_index(&graph, &config);
        assert_eq!(find_path(&graph, &0, &3, &index).unwrap(), expected, "{}", choose_algorithm(&index));
    }

    // breadth first on uniform weights reports hops, which equal the weight
    let chain = get_chain_graph(4);
    let index = build_index(&chain, &IndexConfig::default());
    assert_eq!(find_path(&chain, &0, &3, &index).unwrap(), SearchResult::found(vec![0, 1, 2, 3], 3.0));
}

#[test]
fn find_path_shortcuts() {
    let graph = get_disconnected_graph();
    let index = build_index(&graph, &IndexConfig::default());

    assert_eq!(find_path(&graph, &0, &0, &index).unwrap(), SearchResult::found(vec![0], 0.0));
    assert_eq!(find_path(&graph, &42, &42, &index).unwrap(), SearchResult::found(vec![42], 0.0));
    assert_eq!(find_path(&graph, &0, &3, &index).unwrap(), SearchResult::unreachable());
    assert_eq!(find_path(&graph, &1, &0, &index).unwrap(), SearchResult::unreachable());
    assert_eq!(find_path(&graph, &0, &42, &index).unwrap(), SearchResult::unreachable());
}

#[test]
fn aborted_build_is_still_usable() {
    let graph = get_weighted_graph();
    let abort = AbortFlag::new();
    abort.raise();

    let index = build_index_with_abort(&graph, &landmark_config(1), Some(&abort));

    assert!(!index.complete);
    assert!(index.weight_map.is_empty());
    assert!(index.weak_components.is_empty());
    assert!(index.landmarks.is_none());

    // the scalar facts do not depend on the aborted phases
    assert_eq!(index.node_count, 4);
    assert!(!index.uniform_weights);

    assert!(index.reachable(&0, &3));
    assert_eq!(choose_algorithm(&index), Strategy::Dijkstra);
    assert_eq!(find_path(&graph, &0, &3, &index).unwrap().cost, 4.0);
}

#[test]
fn unraised_flag_builds_everything() {
    let graph = get_larger_graph();
    let abort = AbortFlag::new();

    let index = build_index_with_abort(&graph, &landmark_config(1), Some(&abort));

    assert!(index.complete);
    assert_eq!(index.weight_map.len(), 6);
    assert_eq!(index.weak_components.len(), 6);
    assert!(index.landmarks.is_some());
}

#[test]
fn index_is_shared_between_threads() {
    let graph = get_larger_graph();
    let index = build_index(&graph, &landmark_config(1));

    let queries: Vec<(u32, u32)> = (0..6).flat_map(|start| (0..6).map(move |goal| (start, goal))).collect();
    let (graph, index) = (&graph, &index);

    thread::scope(|scope| {
        let handles: Vec<_> = queries.chunks(9)
            .map(|chunk| scope.spawn(move || {
                chunk.iter()
                    .map(|(start, goal)| find_path(graph, start, goal, index).unwrap())
                    .collect::<Vec<_>>()
            }))
            .collect();

        let results: Vec<SearchResult<u32>> = handles.into_iter().flat_map(|handle| handle.join().unwrap()).collect();

        for ((start, goal), result) in queries.iter().zip(results) {
            assert_eq!(result.cost, dijkstra(graph, start, goal).cost);
        }
    });
}
