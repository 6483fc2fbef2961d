//! Graph algorithm implementations
//!
//! Every algorithm is a free function over any [`GraphStore`](crate::store::GraphStore).
//! Each one resets the store's traversal state first, so one store can be
//! reused across sequential runs:
//! - `dfs`: depth-first search (recursive order and iterative)
//! - `bfs`: breadth-first search
//! - `dijkstra`: single-source shortest paths, non-negative weights
//! - `bellman_ford`: single-source shortest paths with negative-cycle detection
//! - `floyd_warshall`: all-pairs shortest paths
//! - `topo`: topological sort and cycle detection
//! - `shared`: path results and helpers used by several algorithms

pub mod bellman_ford;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod shared;
pub mod topo;

pub use bellman_ford::{bellman_ford, bellman_ford_distance};
pub use bfs::bfs;
pub use dfs::{dfs, dfs_iterative};
pub use dijkstra::{dijkstra, dijkstra_distance};
pub use floyd_warshall::{floyd_warshall, DistanceMatrix};
pub use shared::ShortestPaths;
pub use topo::{has_cycle, topological_sort};
