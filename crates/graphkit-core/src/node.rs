//! Graph vertices
//!
//! A [`Node`] carries its caller-assigned ID plus the transient state that
//! algorithms write during a run. Nodes live in their store's arena and are
//! only ever borrowed by algorithms.

use serde::Serialize;

use crate::weight::Weight;

/// Caller-assigned node identifier; doubles as the arena index.
pub type NodeId = usize;

/// Traversal coloring of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeState {
    #[default]
    NotVisited,
    /// Discovered and queued, not yet processed
    Pending,
    Visited,
}

/// A vertex with identity, traversal state and tentative weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<W> {
    id: NodeId,
    weight: Option<W>,
    state: NodeState,
}

impl<W: Weight> Node<W> {
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            weight: None,
            state: NodeState::NotVisited,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Tentative weight; `None` until an algorithm reaches this node
    pub fn weight(&self) -> Option<W> {
        self.weight
    }

    pub fn set_weight(&mut self, weight: W) {
        self.weight = Some(weight);
    }

    pub fn state(&self) -> NodeState {
        self.state
    }

    pub fn set_state(&mut self, state: NodeState) {
        self.state = state;
    }

    pub fn is_visited(&self) -> bool {
        self.state == NodeState::Visited
    }

    /// Back to `NotVisited` with an unreached weight
    pub fn reset(&mut self) {
        self.state = NodeState::NotVisited;
        self.weight = None;
    }
}
