//! Topological sort and cycle detection (Kahn's algorithm)

use std::collections::{HashSet, VecDeque};

use crate::error::{GraphError, Result};
use crate::node::{NodeId, NodeState};
use crate::store::GraphStore;
use crate::weight::Weight;

use super::shared::node_mut;

/// Order the nodes of a directed store so every edge points forward.
///
/// In-degrees are computed once up front; zero-in-degree nodes are seeded in
/// ascending ID order and processed FIFO. Fails with
/// [`GraphError::NotDirected`] on an undirected store and with
/// [`GraphError::Cycle`] if an edge would be processed twice or if any node
/// is left unordered. A partial order is never returned.
#[tracing::instrument(skip(store), fields(size = store.size()))]
pub fn topological_sort<W, S>(store: &mut S) -> Result<Vec<NodeId>>
where
    W: Weight,
    S: GraphStore<W> + ?Sized,
{
    if !store.is_directed() {
        return Err(GraphError::NotDirected);
    }
    store.reset();

    let ids = store.node_ids();
    let mut in_degree = vec![0usize; store.size()];
    let mut queue = VecDeque::new();
    for &id in &ids {
        in_degree[id] = store.in_degree(id)?;
        if in_degree[id] == 0 {
            queue.push_back(id);
        }
    }

    // (start node, position in its adjacency)
    let mut seen_edges: HashSet<(NodeId, usize)> = HashSet::new();
    let mut order = Vec::with_capacity(ids.len());

    while let Some(current) = queue.pop_front() {
        node_mut(store, current)?.set_state(NodeState::Visited);
        order.push(current);

        for (position, edge) in store.adjacent(current)?.into_iter().enumerate() {
            if !seen_edges.insert((current, position)) {
                return Err(GraphError::Cycle);
            }
            let remaining = &mut in_degree[edge.end()];
            *remaining = remaining.saturating_sub(1);
            if *remaining == 0 {
                queue.push_back(edge.end());
            }
        }
    }

    if order.len() != ids.len() {
        tracing::debug!(
            ordered = order.len(),
            nodes = ids.len(),
            "cycle left nodes unordered"
        );
        return Err(GraphError::Cycle);
    }
    Ok(order)
}

/// Whether the directed store contains a cycle.
///
/// `true` exactly when [`topological_sort`] fails with [`GraphError::Cycle`];
/// any other error (such as an undirected store) is passed through.
pub fn has_cycle<W, S>(store: &mut S) -> Result<bool>
where
    W: Weight,
    S: GraphStore<W> + ?Sized,
{
    match topological_sort(store) {
        Ok(_) => Ok(false),
        Err(GraphError::Cycle) => Ok(true),
        Err(err) => Err(err),
    }
}
