use std::collections::BTreeMap;
use std::fmt;

use crate::bail_invalid_ref;
use crate::edge::Edge;
use crate::error::{GraphError, Result};
use crate::format::render_adjacency;
use crate::node::{Node, NodeId};
use crate::store::{grow_slots, GraphStore};
use crate::weight::Weight;

/// Adjacency-list graph store.
///
/// `adjacency` has an entry for every known node, even one with no outgoing
/// edges, so iteration over it visits nodes in ascending ID order.
#[derive(Debug, Clone)]
pub struct AdjacencyList<W> {
    adjacency: BTreeMap<NodeId, Vec<Edge<W>>>,
    nodes: Vec<Option<Node<W>>>,
    directed: bool,
}

impl<W: Weight> AdjacencyList<W> {
    /// Empty graph
    pub fn new(directed: bool) -> Self {
        Self {
            adjacency: BTreeMap::new(),
            nodes: Vec::new(),
            directed,
        }
    }

    /// Empty graph with room for IDs `0..node_count`. Fails with
    /// [`GraphError::TooLarge`] when that many slots cannot be allocated.
    pub fn with_capacity(node_count: usize, directed: bool) -> Result<Self> {
        let mut nodes = Vec::new();
        grow_slots(&mut nodes, node_count)?;
        Ok(Self {
            adjacency: BTreeMap::new(),
            nodes,
            directed,
        })
    }

    /// Build from `(from, to, weight)` triples, creating nodes on first mention.
    pub fn from_edges<I>(node_count: usize, edges: I, directed: bool) -> Result<Self>
    where
        I: IntoIterator<Item = (NodeId, NodeId, W)>,
    {
        let mut graph = Self::with_capacity(node_count, directed)?;
        for (from, to, weight) in edges {
            graph.add_node(from)?;
            graph.add_node(to)?;
            graph.add_edge(from, to, weight)?;
        }
        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            directed,
            "built adjacency list"
        );
        Ok(graph)
    }

    /// Delete a node and every edge touching it, in both directions.
    pub fn remove_node(&mut self, id: NodeId) -> Result<()> {
        if !self.contains(id) {
            bail_invalid_ref!(id);
        }
        self.adjacency.remove(&id);
        for edges in self.adjacency.values_mut() {
            edges.retain(|e| !e.touches(id));
        }
        self.nodes[id] = None;
        tracing::debug!(node = id, "removed node");
        Ok(())
    }

    /// Total stored edges (mirrors count separately)
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    fn known(&self, id: NodeId) -> Result<&Vec<Edge<W>>> {
        match self.adjacency.get(&id) {
            Some(edges) if self.contains(id) => Ok(edges),
            _ => bail_invalid_ref!(id),
        }
    }
}

impl<W: Weight> GraphStore<W> for AdjacencyList<W> {
    fn size(&self) -> usize {
        self.nodes.len()
    }

    fn node(&self, id: NodeId) -> Option<&Node<W>> {
        self.nodes.get(id).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<W>> {
        self.nodes.get_mut(id).and_then(Option::as_mut)
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn add_node(&mut self, id: NodeId) -> Result<()> {
        let len = id.checked_add(1).ok_or(GraphError::OutOfRange {
            id,
            capacity: self.nodes.len(),
        })?;
        grow_slots(&mut self.nodes, len)?;
        if self.nodes[id].is_none() {
            self.nodes[id] = Some(Node::new(id));
            self.adjacency.entry(id).or_default();
        }
        Ok(())
    }

    fn add_edge(&mut self, from: NodeId, to: NodeId, weight: W) -> Result<()> {
        for id in [from, to] {
            if !self.contains(id) {
                bail_invalid_ref!(id);
            }
        }
        let edge = Edge::new(from, to, weight);
        self.adjacency.entry(from).or_default().push(edge);
        if self.directed {
            self.adjacency.entry(to).or_default();
        } else if from != to {
            self.adjacency.entry(to).or_default().push(edge.reversed());
        }
        Ok(())
    }

    fn remove_edge(&mut self, from: NodeId, to: NodeId) {
        if let Some(edges) = self.adjacency.get_mut(&from) {
            edges.retain(|e| e.end() != to);
        }
        if !self.directed {
            if let Some(edges) = self.adjacency.get_mut(&to) {
                edges.retain(|e| e.end() != from);
            }
        }
    }

    fn adjacent(&self, id: NodeId) -> Result<Vec<Edge<W>>> {
        self.known(id).cloned()
    }

    fn in_degree(&self, id: NodeId) -> Result<usize> {
        self.known(id)?;
        Ok(self
            .adjacency
            .values()
            .flatten()
            .filter(|e| e.end() == id)
            .count())
    }

    fn out_degree(&self, id: NodeId) -> Result<usize> {
        Ok(self.known(id)?.len())
    }

    fn reset(&mut self) {
        self.nodes.iter_mut().flatten().for_each(Node::reset);
    }
}

impl<W: Weight> fmt::Display for AdjacencyList<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_adjacency(self, f.precision()))
    }
}
