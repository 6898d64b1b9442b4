use ordered_float::OrderedFloat;

use crate::graph_representation::{GraphNode, LabeledGraph};
use crate::search::algorithm::SearchResult;
use crate::types::*;
use crate::utils::binary_heap::MinBinaryHeap;

/// resolves both end points to dense ids.
/// identical end points and unknown nodes are answered right away in the `Err` branch
pub(crate) fn resolve_endpoints<N: GraphNode>(graph: &LabeledGraph<N>, start: &N, goal: &N) -> Result<(NodeId, NodeId), SearchResult<N>> {
    if start == goal {
        return Err(SearchResult::single(start.clone()));
    }

    match (graph.node_id(start), graph.node_id(goal)) {
        (Some(start_id), Some(goal_id)) => Ok((start_id, goal_id)),
        _ => Err(SearchResult::unreachable()),
    }
}

/// result whose cost is the number of hops along `path`
pub(crate) fn hop_count_result<N: GraphNode>(graph: &LabeledGraph<N>, path: &[NodeId]) -> SearchResult<N> {
    SearchResult::found(graph.translate_path(path), (path.len() - 1) as Weight)
}

/// search tree stored as an arena. every queue or stack entry refers to one tree entry,
/// so each entry knows the exact path it was discovered through without copying it
#[derive(Default)]
pub(crate) struct PathTree {
    entries: Vec<(NodeId, Option<usize>)>,
}

impl PathTree {

    pub fn new() -> Self {
        PathTree {
            entries: Vec::new(),
        }
    }

    pub fn root(&mut self, node_id: NodeId) -> usize {
        self.entries.push((node_id, None));
        self.entries.len() - 1
    }

    pub fn push(&mut self, node_id: NodeId, parent: usize) -> usize {
        self.entries.push((node_id, Some(parent)));
        self.entries.len() - 1
    }

    pub fn node(&self, entry: usize) -> NodeId {
        self.entries[entry].0
    }

    /// node ids from the root to `entry`
    pub fn path(&self, entry: usize) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut current = Some(entry);

        while let Some(index) = current {
            let (node_id, parent) = self.entries[index];
            path.push(node_id);
            current = parent;
        }

        path.reverse();
        path
    }
}

/// entries are ordered by priority, then tie break key, then insertion order
#[derive(Copy, Clone, Eq, PartialEq, Debug, Ord, PartialOrd)]
pub(crate) struct QueueEntry {
    pub priority: OrderedFloat<Weight>,
    pub tie_break: OrderedFloat<Weight>,
    pub sequence: usize,
    pub cost: OrderedFloat<Weight>,
    pub node_id: NodeId,
    pub tree_entry: usize,
}

/// min heap of `QueueEntry` that hands out the insertion sequence numbers itself
#[derive(Default)]
pub(crate) struct SearchQueue {
    heap: MinBinaryHeap<QueueEntry>,
    next_sequence: usize,
}

impl SearchQueue {

    pub fn new() -> Self {
        SearchQueue {
            heap: MinBinaryHeap::new(),
            next_sequence: 0,
        }
    }

    pub fn push(&mut self, priority: Weight, tie_break: Weight, cost: Weight, node_id: NodeId, tree_entry: usize) {
        self.heap.insert(QueueEntry {
            priority: OrderedFloat(priority),
            tie_break: OrderedFloat(tie_break),
            sequence: self.next_sequence,
            cost: OrderedFloat(cost),
            node_id,
            tree_entry,
        });

        self.next_sequence += 1;
    }

    pub fn pop(&mut self) -> Option<QueueEntry> {
        self.heap.pop()
    }
}
