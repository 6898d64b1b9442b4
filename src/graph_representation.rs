use crate::types::*;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Range;
use std::sync::OnceLock;

/// anything that can identify a node: needs equality and hashing for the id lookup
/// and an order for deterministic tie breaks
pub trait GraphNode: Clone + Eq + Hash + Ord + Debug {}

impl<T: Clone + Eq + Hash + Ord + Debug> GraphNode for T {}

/// directed graph over dense node ids `0..n`
pub trait Graph {

    fn node_ids(&self) -> Range<NodeId>;
    fn arcs(&self, node: NodeId) -> &Arclist;
    fn num_edges(&self) -> usize;

    fn num_nodes(&self) -> usize {
        self.node_ids().len()
    }

    fn out_degree(&self, node: NodeId) -> usize {
        self.arcs(node).len()
    }
}

/// adjacency list representation, arcs are kept in insertion order
#[derive(Clone, Debug, Default)]
pub struct GraphList {

    edges: Vec<Vec<(NodeId, Weight)>>,
    num_edges: usize,
}

impl GraphList {

    pub fn new(edges: Vec<Vec<(NodeId, Weight)>>) -> GraphList {
        let num_edges = edges.iter().map(|arcs| arcs.len()).sum();

        GraphList {
            edges,
            num_edges,
        }
    }

    pub fn with_nodes(num_nodes: usize) -> GraphList {
        GraphList::new(vec![Vec::new(); num_nodes])
    }

    /// appends an isolated node and returns its id
    pub fn add_node(&mut self) -> NodeId {
        self.edges.push(Vec::new());
        (self.edges.len() - 1) as NodeId
    }

    pub fn add_edge(&mut self, start: NodeId, end: NodeId, weight: Weight) {
        self.edges[start as usize].push((end, weight));
        self.num_edges += 1;
    }

    /// graph with every arc flipped. distances from `v` in the result equal distances to `v` in `self`
    pub fn reversed(&self) -> GraphList {
        let mut reversed = GraphList::with_nodes(self.edges.len());

        for (start, arcs) in self.edges.iter().enumerate() {
            for (end, weight) in arcs {
                reversed.add_edge(*end, start as NodeId, *weight);
            }
        }

        reversed
    }
}

impl Graph for GraphList {

    fn node_ids(&self) -> Range<NodeId> {
        0..(self.edges.len() as NodeId)
    }

    fn arcs(&self, node: NodeId) -> &Arclist {
        &self.edges[node as usize]
    }

    fn num_edges(&self) -> usize {
        self.num_edges
    }
}

/// graph keyed by caller supplied node identifiers.
/// identifiers are interned to dense ids in order of first appearance; a node that only shows up
/// as an arc target becomes a sink without outgoing arcs
#[derive(Debug)]
pub struct LabeledGraph<N> {

    nodes: Vec<N>,
    node_ids: HashMap<N, NodeId>,
    list: GraphList,
    reversed: OnceLock<GraphList>,
}

impl<N: GraphNode> Default for LabeledGraph<N> {

    fn default() -> Self {
        LabeledGraph::new()
    }
}

impl<N: GraphNode> LabeledGraph<N> {

    pub fn new() -> Self {
        LabeledGraph {
            nodes: Vec::new(),
            node_ids: HashMap::new(),
            list: GraphList::default(),
            reversed: OnceLock::new(),
        }
    }

    /// builds the graph from `node -> [(neighbor, weight)]` entries.
    /// all keys are interned before any arc so key order decides the dense ids
    pub fn from_adjacency<I, E>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (N, E)>,
        E: IntoIterator<Item = (N, Weight)>,
    {
        let entries: Vec<(N, E)> = adjacency.into_iter().collect();
        let mut graph = LabeledGraph::new();

        for (node, _) in &entries {
            graph.add_node(node.clone());
        }

        for (node, arcs) in entries {
            for (target, weight) in arcs {
                graph.add_edge(node.clone(), target, weight);
            }
        }

        graph
    }

    /// returns the dense id of `node`, interning it first if needed
    pub fn add_node(&mut self, node: N) -> NodeId {
        if let Some(node_id) = self.node_ids.get(&node) {
            return *node_id;
        }

        let node_id = self.list.add_node();
        self.node_ids.insert(node.clone(), node_id);
        self.nodes.push(node);
        self.reversed.take();

        node_id
    }

    pub fn add_edge(&mut self, start: N, end: N, weight: Weight) {
        let start_id = self.add_node(start);
        let end_id = self.add_node(end);

        self.list.add_edge(start_id, end_id, weight);
        self.reversed.take();
    }

    pub fn node_id(&self, node: &N) -> Option<NodeId> {
        self.node_ids.get(node).copied()
    }

    pub fn node(&self, node_id: NodeId) -> &N {
        &self.nodes[node_id as usize]
    }

    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    pub fn contains(&self, node: &N) -> bool {
        self.node_ids.contains_key(node)
    }

    /// outgoing arcs of `node`, empty for unknown nodes
    pub fn neighbors<'a>(&'a self, node: &N) -> impl Iterator<Item = (&'a N, Weight)> + 'a {
        let arcs: &'a Arclist = match self.node_id(node) {
            Some(node_id) => self.list.arcs(node_id),
            None => &[],
        };

        arcs.iter().map(move |(target, weight)| (self.node(*target), *weight))
    }

    /// every arc as `(start, end, weight)` in adjacency order
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N, Weight)> + '_ {
        self.list.node_ids().flat_map(move |start| {
            self.list.arcs(start).iter().map(move |(end, weight)| (self.node(start), self.node(*end), *weight))
        })
    }

    /// the dense adjacency lists behind this graph
    pub fn list(&self) -> &GraphList {
        &self.list
    }

    /// reversed adjacency lists, built on first use and cached until the graph changes
    pub fn reversed(&self) -> &GraphList {
        self.reversed.get_or_init(|| self.list.reversed())
    }

    /// maps dense ids back to node identifiers
    pub fn translate_path(&self, path: &[NodeId]) -> Vec<N> {
        path.iter().map(|node_id| self.node(*node_id).clone()).collect()
    }
}

impl<N> Graph for LabeledGraph<N> {

    fn node_ids(&self) -> Range<NodeId> {
        self.list.node_ids()
    }

    fn arcs(&self, node: NodeId) -> &Arclist {
        self.list.arcs(node)
    }

    fn num_edges(&self) -> usize {
        self.list.num_edges()
    }
}
