//! Bellman-Ford shortest paths

use crate::error::{GraphError, Result};
use crate::node::NodeId;
use crate::store::GraphStore;
use crate::weight::{improves, path_sum, Weight};

use super::shared::{node_mut, reaches, require_node, weight_of, ShortestPaths};

/// Single-source shortest paths allowing negative edge weights.
///
/// Runs exactly `size - 1` passes over every edge in the store's edge order
/// (ascending start ID, then adjacency order) using the same `<=` tie rule
/// as [`dijkstra`](super::dijkstra). A final pass that still finds a strict
/// improvement means a negative-weight cycle is reachable from `source`, and
/// the run fails with [`GraphError::NegativeCycle`].
#[tracing::instrument(skip(store), fields(size = store.size()))]
pub fn bellman_ford<W, S>(store: &mut S, source: NodeId) -> Result<ShortestPaths<W>>
where
    W: Weight,
    S: GraphStore<W> + ?Sized,
{
    store.reset();
    require_node(store, source)?;

    let edges = store.edges();
    let mut predecessors = vec![None; store.size()];

    node_mut(store, source)?.set_weight(W::ZERO);
    predecessors[source] = Some(source);

    for _ in 1..store.size() {
        for edge in &edges {
            let Some(base) = weight_of(store, edge.start()) else {
                continue;
            };
            let candidate = path_sum(base, edge.weight(), edge.start(), edge.end())?;
            let current = weight_of(store, edge.end());
            if !improves(candidate, current, true) {
                continue;
            }
            let tie = current == Some(candidate);
            if !tie || !reaches(&predecessors, edge.start(), edge.end()) {
                predecessors[edge.end()] = Some(edge.start());
            }
            node_mut(store, edge.end())?.set_weight(candidate);
        }
    }

    for edge in &edges {
        if let Some(base) = weight_of(store, edge.start()) {
            let candidate = path_sum(base, edge.weight(), edge.start(), edge.end())?;
            if improves(candidate, weight_of(store, edge.end()), false) {
                tracing::debug!(from = edge.start(), to = edge.end(), "negative cycle");
                return Err(GraphError::NegativeCycle);
            }
        }
    }

    let result = ShortestPaths::collect(store, source, predecessors);
    tracing::debug!(
        reached = result.distances().iter().flatten().count(),
        "bellman-ford complete"
    );
    Ok(result)
}

/// Shortest distance from `source` to `dest`; `None` if unreachable.
pub fn bellman_ford_distance<W, S>(store: &mut S, source: NodeId, dest: NodeId) -> Result<Option<W>>
where
    W: Weight,
    S: GraphStore<W> + ?Sized,
{
    require_node(store, dest)?;
    Ok(bellman_ford(store, source)?.distance(dest))
}
