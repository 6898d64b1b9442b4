use std::collections::VecDeque;

use ordered_float::OrderedFloat;

use crate::types::*;
use crate::graph_representation::Graph;
use crate::utils::binary_heap::MinBinaryHeap;

#[derive(Copy, Clone, Eq, PartialEq, Debug, Ord, PartialOrd)]
pub struct DijkstraState {
    pub distance: OrderedFloat<Weight>,
    pub node_id: NodeId,
}

/// distances from `source` to every node, `INFINITY` for nodes that cannot be reached.
/// requires non-negative weights
pub fn shortest_distances(source: NodeId, graph: &impl Graph) -> Weights {
    let mut distance_table: Weights = vec![INFINITY; graph.num_nodes()];
    let mut to_visit: MinBinaryHeap<DijkstraState> = MinBinaryHeap::with_capacity(graph.num_nodes());

    distance_table[source as usize] = 0.0;
    to_visit.insert(DijkstraState {
        distance: OrderedFloat(0.0),
        node_id: source,
    });

    while let Some(DijkstraState {distance, node_id}) = to_visit.pop() {
        if distance.0 > distance_table[node_id as usize] {
            continue; // outdated entry
        }

        for (target_node, weight) in graph.arcs(node_id) {
            let new_distance = distance.0 + weight;

            if new_distance < distance_table[*target_node as usize] {
                distance_table[*target_node as usize] = new_distance;
                to_visit.insert(DijkstraState {distance: OrderedFloat(new_distance), node_id: *target_node});
            }
        }
    }

    distance_table
}

/// labels every node with the id of its weakly connected component (arc directions ignored).
/// ids start at 1 and are handed out in node id order
pub fn weak_components(graph: &impl Graph) -> Vec<ComponentId> {
    let num_nodes = graph.num_nodes();
    let mut undirected: Vec<Vec<NodeId>> = vec![Vec::new(); num_nodes];

    for node_id in graph.node_ids() {
        for (target_node, _) in graph.arcs(node_id) {
            undirected[node_id as usize].push(*target_node);
            undirected[*target_node as usize].push(node_id);
        }
    }

    let mut components: Vec<ComponentId> = vec![0; num_nodes]; // 0 = not yet labelled
    let mut queue: VecDeque<NodeId> = VecDeque::new();
    let mut component_id = 0;

    for start_node in graph.node_ids() {
        if components[start_node as usize] != 0 {
            continue;
        }

        component_id += 1;
        components[start_node as usize] = component_id;
        queue.push_back(start_node);

        while let Some(node_id) = queue.pop_front() {
            for adj_node in &undirected[node_id as usize] {
                if components[*adj_node as usize] == 0 {
                    components[*adj_node as usize] = component_id;
                    queue.push_back(*adj_node);
                }
            }
        }
    }

    components
}
