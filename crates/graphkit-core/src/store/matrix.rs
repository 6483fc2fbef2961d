use std::fmt;

use crate::bail_invalid_ref;
use crate::edge::Edge;
use crate::error::{GraphError, Result};
use crate::format::render_adjacency;
use crate::node::{Node, NodeId};
use crate::store::{grow_slots, GraphStore};
use crate::weight::Weight;

/// Adjacency-matrix graph store.
///
/// Holds a fixed `size × size` row-major table of optional edge weights.
/// The node count is fixed at construction; nodes cannot be removed.
#[derive(Debug, Clone)]
pub struct AdjacencyMatrix<W> {
    cells: Vec<Option<W>>,
    nodes: Vec<Option<Node<W>>>,
    directed: bool,
}

impl<W: Weight> AdjacencyMatrix<W> {
    /// Empty graph able to hold IDs `0..size`. Fails with
    /// [`GraphError::TooLarge`] when the `size × size` table cannot be
    /// allocated.
    pub fn with_size(size: usize, directed: bool) -> Result<Self> {
        let cell_count = size
            .checked_mul(size)
            .ok_or(GraphError::TooLarge { size })?;
        let mut cells = Vec::new();
        grow_slots(&mut cells, cell_count).map_err(|_| GraphError::TooLarge { size })?;
        let mut nodes = Vec::new();
        grow_slots(&mut nodes, size)?;
        Ok(Self {
            cells,
            nodes,
            directed,
        })
    }

    /// Build from `(from, to, weight)` triples. Any ID `>= node_count` fails
    /// with [`GraphError::OutOfRange`].
    pub fn from_edges<I>(node_count: usize, edges: I, directed: bool) -> Result<Self>
    where
        I: IntoIterator<Item = (NodeId, NodeId, W)>,
    {
        let mut graph = Self::with_size(node_count, directed)?;
        for (from, to, weight) in edges {
            graph.add_node(from)?;
            graph.add_node(to)?;
            graph.add_edge(from, to, weight)?;
        }
        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            directed,
            "built adjacency matrix"
        );
        Ok(graph)
    }

    /// O(1) edge lookup
    pub fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.cell(from, to).is_some()
    }

    pub fn edge_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    fn cell(&self, from: NodeId, to: NodeId) -> Option<W> {
        let size = self.nodes.len();
        if from < size && to < size {
            self.cells[from * size + to]
        } else {
            None
        }
    }

    fn set_cell(&mut self, from: NodeId, to: NodeId, weight: Option<W>) {
        let size = self.nodes.len();
        self.cells[from * size + to] = weight;
    }

    fn check_range(&self, id: NodeId) -> Result<()> {
        if id >= self.nodes.len() {
            return Err(GraphError::OutOfRange {
                id,
                capacity: self.nodes.len(),
            });
        }
        Ok(())
    }

    fn known(&self, id: NodeId) -> Result<()> {
        if !self.contains(id) {
            bail_invalid_ref!(id);
        }
        Ok(())
    }

    fn row(&self, id: NodeId) -> &[Option<W>] {
        let size = self.nodes.len();
        &self.cells[id * size..(id + 1) * size]
    }
}

impl<W: Weight> GraphStore<W> for AdjacencyMatrix<W> {
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
        self.check_range(id)?;
        if self.nodes[id].is_none() {
            self.nodes[id] = Some(Node::new(id));
        }
        Ok(())
    }

    fn add_edge(&mut self, from: NodeId, to: NodeId, weight: W) -> Result<()> {
        for id in [from, to] {
            self.check_range(id)?;
            self.known(id)?;
        }
        self.set_cell(from, to, Some(weight));
        if !self.directed {
            self.set_cell(to, from, Some(weight));
        }
        Ok(())
    }

    fn remove_edge(&mut self, from: NodeId, to: NodeId) {
        if self.check_range(from).is_err() || self.check_range(to).is_err() {
            return;
        }
        self.set_cell(from, to, None);
        if !self.directed {
            self.set_cell(to, from, None);
        }
    }

    fn adjacent(&self, id: NodeId) -> Result<Vec<Edge<W>>> {
        self.known(id)?;
        Ok(self
            .row(id)
            .iter()
            .enumerate()
            .filter_map(|(to, cell)| cell.map(|w| Edge::new(id, to, w)))
            .collect())
    }

    fn in_degree(&self, id: NodeId) -> Result<usize> {
        self.known(id)?;
        Ok((0..self.nodes.len())
            .filter(|&from| self.cell(from, id).is_some())
            .count())
    }

    fn out_degree(&self, id: NodeId) -> Result<usize> {
        self.known(id)?;
        Ok(self.row(id).iter().filter(|c| c.is_some()).count())
    }

    fn reset(&mut self) {
        self.nodes.iter_mut().flatten().for_each(Node::reset);
    }
}

impl<W: Weight> fmt::Display for AdjacencyMatrix<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_adjacency(self, f.precision()))
    }
}
