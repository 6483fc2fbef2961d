//! Graphkit Core Library
//!
//! Weighted graphs over integer node IDs, stored as an adjacency list or an
//! adjacency matrix, plus the classic traversal and shortest-path algorithms
//! that run against either representation.
//!
//! ```rust,ignore
//! use graphkit_core::{algos, AdjacencyList};
//!
//! let mut graph = AdjacencyList::from_edges(3, vec![(0, 1, 2.0), (1, 2, 1.5)], true)?;
//! let paths = algos::dijkstra(&mut graph, 0)?;
//! assert_eq!(paths.distance(2), Some(3.5));
//! assert_eq!(paths.path_to(2), Some(vec![0, 1, 2]));
//! ```

pub mod algos;
pub mod config;
pub mod edge;
pub mod error;
pub mod format;
pub mod load;
pub mod logging;
pub mod node;
pub mod store;
pub mod weight;

pub use config::GraphConfig;
pub use edge::Edge;
pub use error::{GraphError, Result};
pub use load::EdgeList;
pub use node::{Node, NodeId, NodeState};
pub use store::{build_store, AdjacencyList, AdjacencyMatrix, GraphStore, StoreKind};
pub use weight::Weight;
