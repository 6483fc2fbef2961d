//! Depth-first search
//!
//! Two variants with different visiting orders:
//! - [`dfs`] visits neighbors in adjacency order, exactly like the textbook
//!   recursive formulation. Frames live on a heap-allocated stack so deep
//!   graphs cannot overflow the call stack.
//! - [`dfs_iterative`] pushes all unvisited neighbors and pops LIFO, so the
//!   last neighbor in adjacency order is explored first.

use crate::edge::Edge;
use crate::error::Result;
use crate::node::{NodeId, NodeState};
use crate::store::GraphStore;
use crate::weight::Weight;

use super::shared::{node_mut, require_node};

/// One suspended "recursive call": a node's edges and the next one to try.
struct Frame<W> {
    edges: Vec<Edge<W>>,
    next: usize,
}

fn is_unvisited<W, S>(store: &S, id: NodeId) -> bool
where
    W: Weight,
    S: GraphStore<W> + ?Sized,
{
    store
        .node(id)
        .is_some_and(|n| n.state() == NodeState::NotVisited)
}

/// Mark `id` visited, record it and open a frame for its edges.
fn enter<W, S>(store: &mut S, id: NodeId, order: &mut Vec<NodeId>) -> Result<Frame<W>>
where
    W: Weight,
    S: GraphStore<W> + ?Sized,
{
    node_mut(store, id)?.set_state(NodeState::Visited);
    order.push(id);
    Ok(Frame {
        edges: store.adjacent(id)?,
        next: 0,
    })
}

/// Depth-first search in recursive order from `source`.
///
/// Returns the visitation order. Nodes reached end up `Visited`; all others
/// stay `NotVisited`.
#[tracing::instrument(skip(store), fields(size = store.size()))]
pub fn dfs<W, S>(store: &mut S, source: NodeId) -> Result<Vec<NodeId>>
where
    W: Weight,
    S: GraphStore<W> + ?Sized,
{
    store.reset();
    require_node(store, source)?;

    let mut order = Vec::new();
    let mut stack = vec![enter(store, source, &mut order)?];

    loop {
        let Some(frame) = stack.last_mut() else {
            break;
        };
        let next = frame.edges.get(frame.next).map(Edge::end);
        frame.next += 1;

        match next {
            None => {
                stack.pop();
            }
            Some(end) if is_unvisited(store, end) => {
                let frame = enter(store, end, &mut order)?;
                stack.push(frame);
            }
            Some(_) => {}
        }
    }

    tracing::debug!(visited = order.len(), "dfs complete");
    Ok(order)
}

/// Depth-first search with an explicit node stack from `source`.
///
/// A node is recorded the first time it is popped while still `NotVisited`;
/// duplicate stack entries are skipped.
#[tracing::instrument(skip(store), fields(size = store.size()))]
pub fn dfs_iterative<W, S>(store: &mut S, source: NodeId) -> Result<Vec<NodeId>>
where
    W: Weight,
    S: GraphStore<W> + ?Sized,
{
    store.reset();
    require_node(store, source)?;

    let mut order = Vec::new();
    let mut stack = vec![source];

    while let Some(top) = stack.pop() {
        let node = node_mut(store, top)?;
        if node.state() != NodeState::NotVisited {
            continue;
        }
        node.set_state(NodeState::Visited);
        order.push(top);

        for edge in store.adjacent(top)? {
            if is_unvisited(store, edge.end()) {
                stack.push(edge.end());
            }
        }
    }

    tracing::debug!(visited = order.len(), "iterative dfs complete");
    Ok(order)
}
