//! Directed, weighted arcs
//!
//! Edges are plain values naming their endpoints by [`NodeId`]. They hold no
//! reference into the store, so removing a node cannot leave one dangling;
//! stores drop every edge touching a removed node.

use std::fmt;

use serde::Serialize;

use crate::node::NodeId;

/// A directed edge `start -> end` with a weight. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge<W> {
    start: NodeId,
    end: NodeId,
    weight: W,
}

impl<W: Copy> Edge<W> {
    pub fn new(start: NodeId, end: NodeId, weight: W) -> Self {
        Self { start, end, weight }
    }

    pub fn start(&self) -> NodeId {
        self.start
    }

    pub fn end(&self) -> NodeId {
        self.end
    }

    pub fn weight(&self) -> W {
        self.weight
    }

    /// The mirror edge used by undirected stores
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
            weight: self.weight,
        }
    }

    /// Whether either endpoint is `id`
    pub fn touches(&self, id: NodeId) -> bool {
        self.start == id || self.end == id
    }
}

/// Renders as `(start, end, weight)`; a formatter precision applies to the weight.
impl<W: fmt::Display> fmt::Display for Edge<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "({}, {}, {:.*})", self.start, self.end, p, self.weight),
            None => write!(f, "({}, {}, {})", self.start, self.end, self.weight),
        }
    }
}
