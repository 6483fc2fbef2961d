//! Graph storage
//!
//! Two interchangeable representations behind one capability trait:
//! - `list`: ordered map from node ID to its outgoing edges; grows on demand
//!   and supports node removal
//! - `matrix`: fixed V×V table of optional edges; O(1) edge lookup, sized up
//!   front, no node removal
//!
//! Every algorithm in [`crate::algos`] takes `&mut S where S: GraphStore<W>`,
//! so either representation (or a boxed trait object) works with all of them.

pub mod list;
pub mod matrix;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::bail_usage;
use crate::edge::Edge;
use crate::error::{GraphError, Result};
use crate::node::{Node, NodeId};
use crate::weight::Weight;

pub use list::AdjacencyList;
pub use matrix::AdjacencyMatrix;

/// Query and mutation contract shared by both representations.
pub trait GraphStore<W: Weight> {
    /// Size of the node ID space (one past the largest ID the store can hold
    /// without growing). Some IDs below it may be unknown.
    fn size(&self) -> usize;

    fn node(&self, id: NodeId) -> Option<&Node<W>>;

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<W>>;

    fn is_directed(&self) -> bool;

    /// Create node `id` if it does not exist yet.
    fn add_node(&mut self, id: NodeId) -> Result<()>;

    /// Connect two existing nodes. Undirected stores add the mirror edge in
    /// the same call.
    fn add_edge(&mut self, from: NodeId, to: NodeId, weight: W) -> Result<()>;

    /// Remove `from -> to` (and its mirror when undirected). No-op if absent.
    fn remove_edge(&mut self, from: NodeId, to: NodeId);

    /// Outgoing edges of `id`.
    fn adjacent(&self, id: NodeId) -> Result<Vec<Edge<W>>>;

    /// Number of edges ending at `id`. Scans the whole store.
    fn in_degree(&self, id: NodeId) -> Result<usize>;

    fn out_degree(&self, id: NodeId) -> Result<usize>;

    /// Mark every node `NotVisited` with an unreached weight. Idempotent.
    fn reset(&mut self);

    fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Known node IDs in ascending order
    fn node_ids(&self) -> Vec<NodeId> {
        (0..self.size()).filter(|&id| self.contains(id)).collect()
    }

    fn node_count(&self) -> usize {
        self.node_ids().len()
    }

    /// Every edge, ordered by start ID and then by adjacency order
    fn edges(&self) -> Vec<Edge<W>> {
        self.node_ids()
            .into_iter()
            .filter_map(|id| self.adjacent(id).ok())
            .flatten()
            .collect()
    }
}

impl<W: Weight, S: GraphStore<W> + ?Sized> GraphStore<W> for Box<S> {
    fn size(&self) -> usize {
        (**self).size()
    }

    fn node(&self, id: NodeId) -> Option<&Node<W>> {
        (**self).node(id)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<W>> {
        (**self).node_mut(id)
    }

    fn is_directed(&self) -> bool {
        (**self).is_directed()
    }

    fn add_node(&mut self, id: NodeId) -> Result<()> {
        (**self).add_node(id)
    }

    fn add_edge(&mut self, from: NodeId, to: NodeId, weight: W) -> Result<()> {
        (**self).add_edge(from, to, weight)
    }

    fn remove_edge(&mut self, from: NodeId, to: NodeId) {
        (**self).remove_edge(from, to)
    }

    fn adjacent(&self, id: NodeId) -> Result<Vec<Edge<W>>> {
        (**self).adjacent(id)
    }

    fn in_degree(&self, id: NodeId) -> Result<usize> {
        (**self).in_degree(id)
    }

    fn out_degree(&self, id: NodeId) -> Result<usize> {
        (**self).out_degree(id)
    }

    fn reset(&mut self) {
        (**self).reset()
    }
}

/// Grow `slots` to `len` entries of `None`, failing instead of aborting when
/// the allocation cannot be made.
pub(crate) fn grow_slots<T>(slots: &mut Vec<Option<T>>, len: usize) -> Result<()> {
    if len <= slots.len() {
        return Ok(());
    }
    slots
        .try_reserve_exact(len - slots.len())
        .map_err(|_| GraphError::TooLarge { size: len })?;
    slots.resize_with(len, || None);
    Ok(())
}

/// Which representation to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    #[default]
    List,
    Matrix,
}

impl FromStr for StoreKind {
    type Err = GraphError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "list" => Ok(StoreKind::List),
            "matrix" => Ok(StoreKind::Matrix),
            other => bail_usage!(format!(
                "unknown representation: {} (expected: list or matrix)",
                other
            )),
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreKind::List => write!(f, "list"),
            StoreKind::Matrix => write!(f, "matrix"),
        }
    }
}

/// Build a boxed store of the requested kind from `(from, to, weight)` triples.
pub fn build_store<W, I>(
    kind: StoreKind,
    node_count: usize,
    edges: I,
    directed: bool,
) -> Result<Box<dyn GraphStore<W>>>
where
    W: Weight,
    I: IntoIterator<Item = (NodeId, NodeId, W)>,
{
    Ok(match kind {
        StoreKind::List => Box::new(AdjacencyList::from_edges(node_count, edges, directed)?),
        StoreKind::Matrix => Box::new(AdjacencyMatrix::from_edges(node_count, edges, directed)?),
    })
}
