//! Edge-list input
//!
//! Text format, whitespace-delimited:
//!
//! ```text
//! <node count> <edge count>
//! <from> <to> <weight>
//! ...
//! ```
//!
//! The edge count is informational; triples are read until the input runs
//! out. Directedness is chosen when the store is built, not in the file.

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::error::{GraphError, Result};
use crate::node::NodeId;
use crate::store::{build_store, GraphStore, StoreKind};
use crate::weight::Weight;

/// Parsed edge-list input
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeList<W> {
    pub node_count: usize,
    /// Edge count as declared in the header
    pub edge_count: usize,
    pub edges: Vec<(NodeId, NodeId, W)>,
}

impl<W: Weight> EdgeList<W> {
    pub fn parse(input: &str) -> Result<Self> {
        let mut tokens = input
            .lines()
            .enumerate()
            .flat_map(|(i, line)| line.split_whitespace().map(move |tok| (i + 1, tok)));

        let node_count = parse_count(tokens.next(), "node count")?;
        let edge_count = parse_count(tokens.next(), "edge count")?;

        let mut edges = Vec::new();
        while let Some((line, from)) = tokens.next() {
            let (Some((_, to)), Some((_, weight))) = (tokens.next(), tokens.next()) else {
                return Err(GraphError::parse(line, "incomplete edge (expected: from to weight)"));
            };
            edges.push((
                parse_id(line, from)?,
                parse_id(line, to)?,
                weight
                    .parse::<W>()
                    .map_err(|_| GraphError::parse(line, format!("invalid weight {:?}", weight)))?,
            ));
        }

        if edges.len() != edge_count {
            tracing::debug!(
                declared = edge_count,
                read = edges.len(),
                "edge count differs from header"
            );
        }
        tracing::debug!(nodes = node_count, edges = edges.len(), "parsed edge list");

        Ok(Self {
            node_count,
            edge_count,
            edges,
        })
    }

    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        Self::parse(&input)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let input = fs::read_to_string(path).map_err(|source| GraphError::OpenFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&input)
    }

    /// Build a store of the requested kind from these edges
    pub fn build(&self, kind: StoreKind, directed: bool) -> Result<Box<dyn GraphStore<W>>> {
        build_store(kind, self.node_count, self.edges.iter().copied(), directed)
    }
}

fn parse_count(token: Option<(usize, &str)>, what: &str) -> Result<usize> {
    let (line, tok) = token.ok_or_else(|| GraphError::parse(1, format!("missing {}", what)))?;
    tok.parse()
        .map_err(|_| GraphError::parse(line, format!("invalid {} {:?}", what, tok)))
}

fn parse_id(line: usize, tok: &str) -> Result<NodeId> {
    tok.parse()
        .map_err(|_| GraphError::parse(line, format!("invalid node ID {:?}", tok)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const SAMPLE: &str = "6 8\n0 1 2\n0 2 4\n1 2 1\n1 3 7\n2 4 3\n3 5 1\n4 3 2\n4 5 5\n";

    #[test]
    fn test_parse_sample() {
        let list: EdgeList<f64> = EdgeList::parse(SAMPLE).unwrap();
        assert_eq!(list.node_count, 6);
        assert_eq!(list.edge_count, 8);
        assert_eq!(list.edges.len(), 8);
        assert_eq!(list.edges[3], (1, 3, 7.0));
    }

    #[test]
    fn test_parse_ignores_layout_and_declared_count() {
        let list: EdgeList<i32> = EdgeList::parse("3 1   0 1 -2\n\n 1 2\n 5").unwrap();
        assert_eq!(list.edge_count, 1);
        assert_eq!(list.edges, vec![(0, 1, -2), (1, 2, 5)]);
    }

    #[test]
    fn test_parse_errors() {
        let err = EdgeList::<f64>::parse("").unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 1, .. }));

        let err = EdgeList::<f64>::parse("2 1\n0 1\n").unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 2, .. }));

        let err = EdgeList::<f64>::parse("2 1\n0 1 x\n").unwrap_err();
        assert!(err.to_string().contains("invalid weight"));

        let err = EdgeList::<i32>::parse("2 1\n0 -1 3\n").unwrap_err();
        assert!(err.to_string().contains("invalid node ID"));

        let err = EdgeList::<i32>::parse("two 1\n").unwrap_err();
        assert!(err.to_string().contains("invalid node count"));
    }

    #[test]
    fn test_from_reader_and_build() {
        let list: EdgeList<f64> = EdgeList::from_reader(Cursor::new(SAMPLE)).unwrap();
        for kind in [StoreKind::List, StoreKind::Matrix] {
            let store = list.build(kind, true).unwrap();
            assert_eq!(store.node_count(), 6);
            assert_eq!(store.edges().len(), 8);
        }
        let undirected = list.build(StoreKind::Matrix, false).unwrap();
        assert_eq!(undirected.edges().len(), 16);
    }

    #[test]
    fn test_oversized_header_counts() {
        let list: EdgeList<f64> = EdgeList::parse(&format!("2 {}\n0 1 1\n", usize::MAX)).unwrap();
        assert_eq!(list.edge_count, usize::MAX);
        assert_eq!(list.edges, vec![(0, 1, 1.0)]);

        let list: EdgeList<f64> = EdgeList::parse(&format!("{} 1\n0 1 1\n", usize::MAX)).unwrap();
        for kind in [StoreKind::List, StoreKind::Matrix] {
            assert!(matches!(
                list.build(kind, true),
                Err(GraphError::TooLarge { .. })
            ));
        }
    }

    #[test]
    fn test_build_rejects_id_at_usize_max() {
        let list: EdgeList<f64> = EdgeList::parse(&format!("2 1\n0 {} 1\n", usize::MAX)).unwrap();
        assert!(matches!(
            list.build(StoreKind::List, true),
            Err(GraphError::OutOfRange { id: usize::MAX, .. })
        ));
        assert!(matches!(
            list.build(StoreKind::Matrix, true),
            Err(GraphError::OutOfRange { id: usize::MAX, capacity: 2 })
        ));
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = EdgeList::<f64>::from_path(Path::new("/nonexistent/graph.txt")).unwrap_err();
        assert!(matches!(err, GraphError::OpenFile { .. }));
    }
}
