use std::io::Cursor;

use landmark_path_finder::utils::io::{parse_graph, parse_queries};
use landmark_path_finder::{Graph, Node, PathError};

const GRAPH_FILE: &str = "\
c small test graph
p sp 4 4
a 1 2 3.5
a 2 3 1
a 1 3 7
a 3 1 2

# isolated node
n 9
";

#[test]
fn parse_graph_file() {
    let graph = parse_graph(Cursor::new(GRAPH_FILE)).unwrap();

    assert_eq!(graph.num_nodes(), 4);
    assert_eq!(graph.num_edges(), 4);
    assert_eq!(graph.nodes(), &[Node::Scalar(1), Node::Scalar(2), Node::Scalar(3), Node::Scalar(9)]);

    let neighbors: Vec<(Node, f64)> = graph.neighbors(&Node::Scalar(1)).map(|(node, weight)| (*node, weight)).collect();
    assert_eq!(neighbors, vec![(Node::Scalar(2), 3.5), (Node::Scalar(3), 7.0)]);
    assert_eq!(graph.neighbors(&Node::Scalar(9)).count(), 0);
}

#[test]
fn parse_graph_with_pair_nodes() {
    let graph = parse_graph(Cursor::new("a 0,0 0,1 1\na 0,1 1.5,-2 2.5\n")).unwrap();

    assert!(graph.contains(&Node::pair(0.0, 0.0)));
    assert!(graph.contains(&Node::pair(1.5, -2.0)));
    assert_eq!(graph.edges().count(), 2);
}

#[test]
fn parse_graph_reports_line_numbers() {
    match parse_graph(Cursor::new("a 1 2 3\na 2 x 1\n")) {
        Err(PathError::Parse { line, .. }) => assert_eq!(line, 2),
        other => panic!("unexpected result {:?}", other.map(|graph| graph.num_nodes())),
    }

    match parse_graph(Cursor::new("c ok\n\na 1 2 heavy\n")) {
        Err(PathError::Parse { line, message }) => {
            assert_eq!(line, 3);
            assert!(message.contains("heavy"));
        },
        other => panic!("unexpected result {:?}", other.map(|graph| graph.num_nodes())),
    }

    assert!(parse_graph(Cursor::new("e 1 2\n")).is_err());
    assert!(parse_graph(Cursor::new("a 1 2\n")).is_err());
}

#[test]
fn parse_query_file() {
    let queries = parse_queries(Cursor::new("# queries\n1 2\n\n  3 9  \n0,0 2,2\n")).unwrap();

    assert_eq!(queries, vec![
        (Node::Scalar(1), Node::Scalar(2)),
        (Node::Scalar(3), Node::Scalar(9)),
        (Node::pair(0.0, 0.0), Node::pair(2.0, 2.0)),
    ]);
}

#[test]
fn parse_queries_rejects_malformed_lines() {
    assert!(matches!(parse_queries(Cursor::new("1 2\n1 2 3\n")), Err(PathError::Parse { line: 2, .. })));
    assert!(matches!(parse_queries(Cursor::new("1\n")), Err(PathError::Parse { line: 1, .. })));
    assert!(matches!(parse_queries(Cursor::new("a b\n")), Err(PathError::Parse { line: 1, .. })));
}

#[test]
fn node_identifiers() {
    assert_eq!("17".parse::<Node>().unwrap(), Node::Scalar(17));
    assert_eq!("-4".parse::<Node>().unwrap(), Node::Scalar(-4));
    assert_eq!("3,4".parse::<Node>().unwrap(), Node::pair(3.0, 4.0));
    assert_eq!("(3, 4)".parse::<Node>().unwrap(), Node::pair(3.0, 4.0));
    assert_eq!("48.85,2.35".parse::<Node>().unwrap(), Node::pair(48.85, 2.35));

    assert!(matches!("x".parse::<Node>(), Err(PathError::InvalidNode(_))));
    assert!("1,y".parse::<Node>().is_err());

    assert_eq!(Node::pair(3.0, 4.5).to_string(), "3,4.5");
    assert_eq!(Node::from(7).to_string(), "7");
    assert_eq!(Node::from((1.0, 2.0)), Node::pair(1.0, 2.0));
}
