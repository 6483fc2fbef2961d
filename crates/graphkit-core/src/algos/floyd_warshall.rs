//! Floyd-Warshall all-pairs shortest paths

use std::time::Instant;

use serde::Serialize;

use crate::error::{GraphError, Result};
use crate::format::render_distance;
use crate::node::NodeId;
use crate::store::GraphStore;
use crate::trace_time;
use crate::weight::{improves, path_sum, Weight};

/// Dense `size × size` table of shortest distances; `None` is unreachable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceMatrix<W> {
    rows: Vec<Vec<Option<W>>>,
}

impl<W: Weight> DistanceMatrix<W> {
    fn new(size: usize) -> Self {
        Self {
            rows: vec![vec![None; size]; size],
        }
    }

    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Distance from `from` to `to`; `None` if unreachable or out of range
    pub fn get(&self, from: NodeId, to: NodeId) -> Option<W> {
        self.rows.get(from)?.get(to).copied().flatten()
    }

    pub fn rows(&self) -> &[Vec<Option<W>>] {
        &self.rows
    }

    /// One line per row, cells separated by a space, `inf` for unreachable
    pub fn render(&self, precision: Option<usize>) -> String {
        let mut out = String::new();
        for row in &self.rows {
            let cells: Vec<String> = row.iter().map(|d| render_distance(*d, precision)).collect();
            out.push_str(&cells.join(" "));
            out.push('\n');
        }
        out
    }
}

/// All-pairs shortest paths.
///
/// The diagonal starts at zero for every known node and each edge seeds its
/// cell (the lightest one wins for parallel edges). After the `k, i, j`
/// sweep, a negative diagonal entry or any edge that still shortens a row
/// means a negative-weight cycle, reported as [`GraphError::NegativeCycle`].
#[tracing::instrument(skip(store), fields(size = store.size()))]
pub fn floyd_warshall<W, S>(store: &mut S) -> Result<DistanceMatrix<W>>
where
    W: Weight,
    S: GraphStore<W> + ?Sized,
{
    store.reset();
    let start = Instant::now();

    let size = store.size();
    let edges = store.edges();
    let mut dist = DistanceMatrix::new(size);

    for id in store.node_ids() {
        dist.rows[id][id] = Some(W::ZERO);
    }
    for edge in &edges {
        let cell = &mut dist.rows[edge.start()][edge.end()];
        if improves(edge.weight(), *cell, false) {
            *cell = Some(edge.weight());
        }
    }

    for k in 0..size {
        for i in 0..size {
            let Some(via) = dist.rows[i][k] else {
                continue;
            };
            for j in 0..size {
                let Some(rest) = dist.rows[k][j] else {
                    continue;
                };
                let candidate = path_sum(via, rest, i, j)?;
                if improves(candidate, dist.rows[i][j], false) {
                    dist.rows[i][j] = Some(candidate);
                }
            }
        }
    }

    let negative_diagonal = (0..size).any(|i| dist.rows[i][i].is_some_and(|d| d.is_negative()));
    let mut improvable = false;
    for edge in &edges {
        for row in &dist.rows {
            if let Some(to_start) = row[edge.start()] {
                let candidate = path_sum(to_start, edge.weight(), edge.start(), edge.end())?;
                improvable |= improves(candidate, row[edge.end()], false);
            }
        }
    }
    if negative_diagonal || improvable {
        return Err(GraphError::NegativeCycle);
    }

    trace_time!(start, "floyd_warshall", size = size);
    tracing::debug!("floyd-warshall complete");
    Ok(dist)
}
