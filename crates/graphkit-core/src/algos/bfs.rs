//! Breadth-first search

use std::collections::VecDeque;

use crate::error::Result;
use crate::node::{NodeId, NodeState};
use crate::store::GraphStore;
use crate::weight::Weight;

use super::shared::{node_mut, require_node};

/// Breadth-first search from `source`, returning the visitation order.
///
/// Nodes go `NotVisited -> Pending` when enqueued and `Visited` when
/// dequeued, so no node is queued twice. Neighbors discovered earlier are
/// visited earlier.
#[tracing::instrument(skip(store), fields(size = store.size()))]
pub fn bfs<W, S>(store: &mut S, source: NodeId) -> Result<Vec<NodeId>>
where
    W: Weight,
    S: GraphStore<W> + ?Sized,
{
    store.reset();
    require_node(store, source)?;

    let mut order = Vec::new();
    let mut queue = VecDeque::new();
    node_mut(store, source)?.set_state(NodeState::Pending);
    queue.push_back(source);

    while let Some(front) = queue.pop_front() {
        node_mut(store, front)?.set_state(NodeState::Visited);
        order.push(front);

        for edge in store.adjacent(front)? {
            let neighbor = node_mut(store, edge.end())?;
            if neighbor.state() == NodeState::NotVisited {
                neighbor.set_state(NodeState::Pending);
                queue.push_back(edge.end());
            }
        }
    }

    tracing::debug!(visited = order.len(), "bfs complete");
    Ok(order)
}
