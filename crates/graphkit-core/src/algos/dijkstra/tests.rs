use super::*;
use crate::error::ErrorKind;
use crate::store::{AdjacencyList, AdjacencyMatrix};

fn scenario() -> Vec<(NodeId, NodeId, f64)> {
    vec![
        (0, 1, 2.0),
        (0, 2, 4.0),
        (1, 2, 1.0),
        (1, 3, 7.0),
        (2, 4, 3.0),
        (3, 5, 1.0),
        (4, 3, 2.0),
        (4, 5, 5.0),
    ]
}

/// Test HeapEntry comparison ordering
#[test]
fn test_heap_entry_ordering() {
    let entry1 = HeapEntry {
        node_id: 0,
        distance: 1.0,
    };
    let entry2 = HeapEntry {
        node_id: 1,
        distance: 2.0,
    };
    let entry3 = HeapEntry {
        node_id: 2,
        distance: 1.0,
    };

    assert_eq!(entry1.cmp(&entry2), Ordering::Less);
    assert_eq!(entry2.cmp(&entry1), Ordering::Greater);

    // Equal distances fall back to node ID
    assert_eq!(entry1.cmp(&entry3), Ordering::Less);

    assert_eq!(entry1, entry1);
    assert_ne!(entry1, entry2);
}

#[test]
fn test_dijkstra_scenario_distance_and_path() {
    let mut list = AdjacencyList::from_edges(6, scenario(), true).unwrap();
    let paths = dijkstra(&mut list, 0).unwrap();

    assert_eq!(paths.distance(3), Some(8.0));
    assert_eq!(paths.distance(5), Some(9.0));
    assert_eq!(paths.path_to(5), Some(vec![0, 1, 2, 4, 3, 5]));
    assert_eq!(paths.distance(0), Some(0.0));
    assert_eq!(paths.path_to(0), Some(vec![0]));
}

#[test]
fn test_dijkstra_matrix_matches_list() {
    let mut list = AdjacencyList::from_edges(6, scenario(), true).unwrap();
    let mut matrix = AdjacencyMatrix::from_edges(6, scenario(), true).unwrap();
    let from_list = dijkstra(&mut list, 0).unwrap();
    let from_matrix = dijkstra(&mut matrix, 0).unwrap();
    assert_eq!(from_list.distances(), from_matrix.distances());
}

#[test]
fn test_dijkstra_tie_prefers_latest_predecessor() {
    // Two equal-cost routes to 3: via 1 (found first) and via 2 (found last)
    let edges = vec![(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1)];
    let mut list = AdjacencyList::from_edges(4, edges, true).unwrap();
    let paths = dijkstra(&mut list, 0).unwrap();
    assert_eq!(paths.distance(3), Some(2));
    assert_eq!(paths.predecessor(3), Some(2));
    assert_eq!(paths.path_to(3), Some(vec![0, 2, 3]));
}

#[test]
fn test_dijkstra_unreachable_is_none() {
    let mut list = AdjacencyList::from_edges(3, vec![(0, 1, 5)], true).unwrap();
    list.add_node(2).unwrap();
    assert_eq!(dijkstra_distance(&mut list, 0, 2).unwrap(), None);
    assert_eq!(dijkstra_distance(&mut list, 0, 1).unwrap(), Some(5));
}

#[test]
fn test_dijkstra_reachable_negative_edge_fails() {
    let edges = vec![(0, 1, 2), (1, 2, -1)];
    let mut list = AdjacencyList::from_edges(3, edges, true).unwrap();
    let err = dijkstra(&mut list, 0).unwrap_err();
    assert!(matches!(err, GraphError::NegativeEdge { from: 1, to: 2, .. }));
    assert_eq!(err.kind(), ErrorKind::PreconditionViolation);
}

#[test]
fn test_dijkstra_unreachable_negative_edge_ignored() {
    let edges = vec![(0, 1, 2), (2, 1, -5)];
    let mut list = AdjacencyList::from_edges(3, edges, true).unwrap();
    assert_eq!(dijkstra_distance(&mut list, 0, 1).unwrap(), Some(2));
}

#[test]
fn test_dijkstra_zero_weight_cycle_keeps_paths() {
    let edges = vec![(0, 1, 0), (1, 2, 0), (2, 1, 0)];
    let mut list = AdjacencyList::from_edges(3, edges, false).unwrap();
    let paths = dijkstra(&mut list, 0).unwrap();
    assert_eq!(paths.path_to(2), Some(vec![0, 1, 2]));
}

#[test]
fn test_dijkstra_unknown_nodes() {
    let mut list = AdjacencyList::from_edges(2, vec![(0, 1, 1)], true).unwrap();
    assert!(matches!(
        dijkstra(&mut list, 5),
        Err(GraphError::InvalidReference { id: 5 })
    ));
    assert!(dijkstra_distance(&mut list, 0, 9).is_err());
}

#[test]
fn test_dijkstra_integer_overflow_is_error() {
    let mut list = AdjacencyList::from_edges(3, vec![(0, 1, i64::MAX), (1, 2, 1)], true).unwrap();
    let err = dijkstra(&mut list, 0).unwrap_err();
    assert!(matches!(err, GraphError::WeightOverflow { from: 1, to: 2 }));
    assert_eq!(err.kind(), ErrorKind::PreconditionViolation);

    // a path that lands exactly on the maximum is still fine
    let mut list =
        AdjacencyList::from_edges(3, vec![(0, 1, i64::MAX - 1), (1, 2, 1)], true).unwrap();
    assert_eq!(dijkstra_distance(&mut list, 0, 2).unwrap(), Some(i64::MAX));
}
