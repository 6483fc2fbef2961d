//! Shared pieces of the path-finding algorithms

use serde::Serialize;

use crate::error::{GraphError, Result};
use crate::node::{Node, NodeId};
use crate::store::GraphStore;
use crate::weight::Weight;

/// Single-source shortest-path result: final distances plus the predecessor
/// of every reached node (the source is its own predecessor).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPaths<W> {
    source: NodeId,
    distances: Vec<Option<W>>,
    predecessors: Vec<Option<NodeId>>,
}

impl<W: Weight> ShortestPaths<W> {
    /// Snapshot the tentative weights a finished run left on the store's nodes.
    pub(crate) fn collect<S>(store: &S, source: NodeId, predecessors: Vec<Option<NodeId>>) -> Self
    where
        S: GraphStore<W> + ?Sized,
    {
        let distances = (0..store.size()).map(|id| weight_of(store, id)).collect();
        Self {
            source,
            distances,
            predecessors,
        }
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Distance from the source; `None` if `id` was never reached
    pub fn distance(&self, id: NodeId) -> Option<W> {
        self.distances.get(id).copied().flatten()
    }

    pub fn distances(&self) -> &[Option<W>] {
        &self.distances
    }

    pub fn predecessor(&self, id: NodeId) -> Option<NodeId> {
        self.predecessors.get(id).copied().flatten()
    }

    /// Node IDs from the source to `dest` inclusive, or `None` if unreached.
    pub fn path_to(&self, dest: NodeId) -> Option<Vec<NodeId>> {
        self.distance(dest)?;
        let mut path = vec![dest];
        let mut current = dest;
        while current != self.source {
            current = self.predecessor(current)?;
            path.push(current);
            if path.len() > self.predecessors.len() {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }
}

pub(crate) fn node_mut<W, S>(store: &mut S, id: NodeId) -> Result<&mut Node<W>>
where
    W: Weight,
    S: GraphStore<W> + ?Sized,
{
    store
        .node_mut(id)
        .ok_or(GraphError::InvalidReference { id })
}

pub(crate) fn require_node<W, S>(store: &S, id: NodeId) -> Result<()>
where
    W: Weight,
    S: GraphStore<W> + ?Sized,
{
    if store.contains(id) {
        Ok(())
    } else {
        Err(GraphError::InvalidReference { id })
    }
}

pub(crate) fn weight_of<W, S>(store: &S, id: NodeId) -> Option<W>
where
    W: Weight,
    S: GraphStore<W> + ?Sized,
{
    store.node(id).and_then(Node::weight)
}

/// Whether walking predecessors from `from` reaches `target`.
///
/// Used to keep tie-break relaxations from closing a predecessor loop on
/// zero-weight cycles.
pub(crate) fn reaches(predecessors: &[Option<NodeId>], from: NodeId, target: NodeId) -> bool {
    let mut current = from;
    for _ in 0..=predecessors.len() {
        if current == target {
            return true;
        }
        match predecessors.get(current).copied().flatten() {
            Some(prev) if prev != current => current = prev,
            _ => return false,
        }
    }
    false
}
