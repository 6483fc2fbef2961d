//! Cross-algorithm and cross-representation checks for graphkit-core
//!
//! Graphs are generated from a fixed seed so failures reproduce.

use graphkit_core::algos::{
    bellman_ford, bfs, dfs, dfs_iterative, dijkstra, floyd_warshall, has_cycle,
    topological_sort,
};
use graphkit_core::{
    build_store, AdjacencyList, AdjacencyMatrix, EdgeList, GraphError, GraphStore, NodeId,
    NodeState, StoreKind,
};

type Triple = (NodeId, NodeId, i64);

/// xorshift64; enough spread for test graphs, no extra dependency
struct Rng(u64);

impl Rng {
    fn next(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }

    fn below(&mut self, bound: u64) -> u64 {
        self.next() % bound
    }
}

/// Random non-negative graph where every node is mentioned by a ring edge
fn random_graph(seed: u64, nodes: usize, extra: usize) -> Vec<Triple> {
    let mut rng = Rng(seed);
    let mut edges: Vec<Triple> = (0..nodes)
        .map(|i| (i, (i + 1) % nodes, 1 + rng.below(20) as i64))
        .collect();
    for _ in 0..extra {
        let from = rng.below(nodes as u64) as NodeId;
        let to = rng.below(nodes as u64) as NodeId;
        edges.push((from, to, rng.below(30) as i64));
    }
    edges
}

/// Random DAG: edges only go from lower to higher IDs
fn random_dag(seed: u64, nodes: usize, extra: usize) -> Vec<Triple> {
    let mut rng = Rng(seed);
    let mut edges: Vec<Triple> = (0..nodes - 1).map(|i| (i, i + 1, 1)).collect();
    for _ in 0..extra {
        let a = rng.below(nodes as u64) as NodeId;
        let b = rng.below(nodes as u64) as NodeId;
        if a != b {
            edges.push((a.min(b), a.max(b), 1));
        }
    }
    edges
}

fn both_stores(edges: &[Triple], nodes: usize, directed: bool) -> Vec<Box<dyn GraphStore<i64>>> {
    [StoreKind::List, StoreKind::Matrix]
        .into_iter()
        .map(|kind| build_store(kind, nodes, edges.iter().copied(), directed).unwrap())
        .collect()
}

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

#[test]
fn test_traversals_mark_exactly_the_reachable_nodes() {
    // two components: 0..5 ring and an isolated 6 <-> 7 pair
    let mut edges = random_graph(7, 6, 8);
    edges.push((6, 7, 1));
    edges.push((7, 6, 1));

    for mut store in both_stores(&edges, 8, true) {
        for order in [
            dfs(&mut store, 0).unwrap(),
            dfs_iterative(&mut store, 0).unwrap(),
            bfs(&mut store, 0).unwrap(),
        ] {
            let mut sorted = order.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, vec![0, 1, 2, 3, 4, 5]);
            assert_eq!(order[0], 0);
        }
        // bfs ran last; its states are still in place
        for id in 0..6 {
            assert_eq!(store.node(id).unwrap().state(), NodeState::Visited);
        }
        for id in 6..8 {
            assert_eq!(store.node(id).unwrap().state(), NodeState::NotVisited);
        }
    }
}

#[test]
fn test_bfs_order_is_by_hop_count() {
    let edges = random_graph(99, 12, 20);
    let mut list = AdjacencyList::from_edges(12, edges.clone(), true).unwrap();
    let order = bfs(&mut list, 0).unwrap();

    // hop counts via unit-weight dijkstra over the same topology
    let unit: Vec<Triple> = edges.iter().map(|&(a, b, _)| (a, b, 1)).collect();
    let mut hops = AdjacencyList::from_edges(12, unit, true).unwrap();
    let levels = dijkstra(&mut hops, 0).unwrap();
    let depths: Vec<i64> = order.iter().map(|&id| levels.distance(id).unwrap()).collect();
    assert!(depths.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_dijkstra_matches_bellman_ford() {
    for seed in 1..=20 {
        let edges = random_graph(seed, 15, 40);
        for directed in [true, false] {
            for mut store in both_stores(&edges, 15, directed) {
                let dj = dijkstra(&mut store, 0).unwrap();
                let bf = bellman_ford(&mut store, 0).unwrap();
                assert_eq!(dj.distances(), bf.distances(), "seed {}", seed);
            }
        }
    }
}

#[test]
fn test_floyd_warshall_matches_dijkstra_per_source() {
    for seed in [3, 17, 42] {
        let edges = random_graph(seed, 10, 25);
        for mut store in both_stores(&edges, 10, true) {
            let all_pairs = floyd_warshall(&mut store).unwrap();
            for source in 0..10 {
                let single = dijkstra(&mut store, source).unwrap();
                for dest in 0..10 {
                    assert_eq!(all_pairs.get(source, dest), single.distance(dest));
                }
            }
        }
    }
}

#[test]
fn test_shortest_paths_follow_real_edges() {
    let edges = random_graph(5, 12, 30);
    let mut list = AdjacencyList::from_edges(12, edges, true).unwrap();
    let paths = dijkstra(&mut list, 0).unwrap();
    for dest in 0..12 {
        let path = paths.path_to(dest).unwrap();
        assert_eq!(path.first(), Some(&0));
        assert_eq!(path.last(), Some(&dest));
        let mut total = 0;
        for hop in path.windows(2) {
            let lightest = list
                .adjacent(hop[0])
                .unwrap()
                .iter()
                .filter(|e| e.end() == hop[1])
                .map(|e| e.weight())
                .min()
                .unwrap();
            total += lightest;
        }
        assert_eq!(Some(total), paths.distance(dest));
    }
}

#[test]
fn test_topological_order_respects_every_edge() {
    for seed in 1..=10 {
        let edges = random_dag(seed, 20, 40);
        for mut store in both_stores(&edges, 20, true) {
            let order = topological_sort(&mut store).unwrap();
            assert_eq!(order.len(), 20);
            let mut position = vec![0; 20];
            for (index, &id) in order.iter().enumerate() {
                position[id] = index;
            }
            for &(from, to, _) in &edges {
                assert!(position[from] < position[to], "seed {}", seed);
            }
            assert!(!has_cycle(&mut store).unwrap());
        }
    }
}

#[test]
fn test_back_edge_makes_graph_cyclic() {
    let mut edges = random_dag(11, 15, 20);
    edges.push((14, 3, 1));
    for mut store in both_stores(&edges, 15, true) {
        assert!(matches!(
            topological_sort(&mut store),
            Err(GraphError::Cycle)
        ));
        assert!(has_cycle(&mut store).unwrap());
    }
}

#[test]
fn test_topological_sort_rejects_undirected() {
    for mut store in both_stores(&random_dag(2, 5, 3), 5, false) {
        assert!(matches!(
            topological_sort(&mut store),
            Err(GraphError::NotDirected)
        ));
        assert!(has_cycle(&mut store).is_err());
    }
}

#[test]
fn test_edge_round_trip() {
    let edges = vec![(0, 1, 3), (1, 2, -4), (2, 3, 5), (3, 0, 6)];
    let mut expected_undirected: Vec<Triple> = edges
        .iter()
        .flat_map(|&(a, b, w)| [(a, b, w), (b, a, w)])
        .collect();
    expected_undirected.sort();

    for directed in [true, false] {
        for store in both_stores(&edges, 4, directed) {
            let mut seen: Vec<Triple> = store
                .edges()
                .into_iter()
                .map(|e| (e.start(), e.end(), e.weight()))
                .collect();
            seen.sort();
            if directed {
                assert_eq!(seen, edges);
            } else {
                assert_eq!(seen, expected_undirected);
            }
        }
    }
}

#[test]
fn test_scenario_from_text() {
    let input = "6 8\n0 1 2\n0 2 4\n1 2 1\n1 3 7\n2 4 3\n3 5 1\n4 3 2\n4 5 5\n";
    let parsed: EdgeList<f64> = EdgeList::parse(input).unwrap();
    assert_eq!(parsed.edges, scenario());

    for kind in [StoreKind::List, StoreKind::Matrix] {
        let mut store = parsed.build(kind, true).unwrap();
        let bf = bellman_ford(&mut store, 0).unwrap();
        let dj = dijkstra(&mut store, 0).unwrap();
        assert_eq!(bf.distance(3), Some(8.0));
        assert_eq!(bf.distance(5), Some(9.0));
        assert_eq!(bf.path_to(5), Some(vec![0, 1, 2, 4, 3, 5]));
        assert_eq!(dj.path_to(5), bf.path_to(5));
        assert_eq!(topological_sort(&mut store).unwrap()[0], 0);
    }
}

#[test]
fn test_scenario_with_negative_cycle() {
    let mut edges = scenario();
    edges.push((5, 0, -100.0));
    let mut list = AdjacencyList::from_edges(6, edges.clone(), true).unwrap();
    let mut matrix = AdjacencyMatrix::from_edges(6, edges, true).unwrap();

    assert!(matches!(
        bellman_ford(&mut list, 0),
        Err(GraphError::NegativeCycle)
    ));
    assert!(matches!(
        floyd_warshall(&mut matrix),
        Err(GraphError::NegativeCycle)
    ));
    assert!(has_cycle(&mut list).unwrap());
    // dijkstra reaches the negative edge from 5 and refuses it
    assert!(matches!(
        dijkstra(&mut matrix, 0),
        Err(GraphError::NegativeEdge { from: 5, to: 0, .. })
    ));
}

#[test]
fn test_algorithms_reuse_one_store() {
    let mut list = AdjacencyList::from_edges(6, scenario(), true).unwrap();
    let first = dfs(&mut list, 0).unwrap();
    dijkstra(&mut list, 0).unwrap();
    bfs(&mut list, 3).unwrap();
    assert_eq!(dfs(&mut list, 0).unwrap(), first);
}

#[test]
fn test_removed_node_disappears_from_algorithms() {
    let mut list = AdjacencyList::from_edges(6, scenario(), true).unwrap();
    list.remove_node(4).unwrap();
    assert_eq!(dijkstra(&mut list, 0).unwrap().distance(5), Some(10.0));
    let order = topological_sort(&mut list).unwrap();
    assert_eq!(order.len(), 5);
    assert!(!order.contains(&4));
    assert!(matches!(
        dfs(&mut list, 4),
        Err(GraphError::InvalidReference { id: 4 })
    ));
}
