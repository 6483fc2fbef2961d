use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::error::{GraphError, Result};
use crate::node::{NodeId, NodeState};
use crate::store::GraphStore;
use crate::weight::{improves, path_sum, Weight};

use super::shared::{node_mut, require_node, weight_of, ShortestPaths};

/// Wrapper for BinaryHeap to use as min-heap (ordered by tentative distance)
#[derive(Debug, Clone, Copy)]
pub struct HeapEntry<W> {
    pub node_id: NodeId,
    pub distance: W,
}

impl<W: Weight> PartialEq for HeapEntry<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: Weight> Eq for HeapEntry<W> {}

impl<W: Weight> PartialOrd for HeapEntry<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Weight> Ord for HeapEntry<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .partial_cmp(&other.distance)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.node_id.cmp(&other.node_id))
    }
}

/// Dijkstra's single-source shortest paths from `source`.
///
/// All reachable weights must be non-negative; the first negative edge met
/// while relaxing fails with [`GraphError::NegativeEdge`]. Negative edges
/// the search never reaches go unnoticed.
///
/// Relaxation accepts ties (`<=`), so among equal-length paths the
/// predecessor discovered last wins. Finalized nodes are never relaxed again.
#[tracing::instrument(skip(store), fields(size = store.size()))]
pub fn dijkstra<W, S>(store: &mut S, source: NodeId) -> Result<ShortestPaths<W>>
where
    W: Weight,
    S: GraphStore<W> + ?Sized,
{
    store.reset();
    require_node(store, source)?;

    let mut predecessors = vec![None; store.size()];
    let mut heap = BinaryHeap::new();

    node_mut(store, source)?.set_weight(W::ZERO);
    predecessors[source] = Some(source);
    heap.push(Reverse(HeapEntry {
        node_id: source,
        distance: W::ZERO,
    }));

    while let Some(Reverse(HeapEntry {
        node_id: current,
        distance,
    })) = heap.pop()
    {
        let node = node_mut(store, current)?;
        if node.is_visited() {
            continue;
        }
        node.set_state(NodeState::Visited);

        for edge in store.adjacent(current)? {
            if edge.weight().is_negative() {
                return Err(GraphError::negative_edge(
                    edge.start(),
                    edge.end(),
                    edge.weight(),
                ));
            }

            let neighbor = node_mut(store, edge.end())?;
            if neighbor.is_visited() {
                continue;
            }
            let candidate = path_sum(distance, edge.weight(), current, edge.end())?;
            if improves(candidate, neighbor.weight(), true) {
                neighbor.set_weight(candidate);
                predecessors[edge.end()] = Some(current);
                heap.push(Reverse(HeapEntry {
                    node_id: edge.end(),
                    distance: candidate,
                }));
            }
        }
    }

    let result = ShortestPaths::collect(store, source, predecessors);
    tracing::debug!(
        reached = result.distances().iter().flatten().count(),
        "dijkstra complete"
    );
    Ok(result)
}

/// Shortest distance from `source` to `dest`; `None` if unreachable.
pub fn dijkstra_distance<W, S>(store: &mut S, source: NodeId, dest: NodeId) -> Result<Option<W>>
where
    W: Weight,
    S: GraphStore<W> + ?Sized,
{
    require_node(store, dest)?;
    dijkstra(store, source)?;
    Ok(weight_of(store, dest))
}

#[cfg(test)]
mod tests;
