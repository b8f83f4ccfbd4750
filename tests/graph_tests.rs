// tests/graph_tests.rs

use qwalk::{Graph, Topology, WalkError};
use std::collections::BTreeSet;

fn degrees(g: &Graph) -> Vec<usize> {
    (0..g.num_vertices()).map(|v| g.degree(v)).collect()
}

fn assert_canonical(g: &Graph) {
    for &(i, j) in g.adjacency() {
        assert!(i < j, "edge ({}, {}) is not canonical", i, j);
        assert!(j < g.num_vertices(), "edge ({}, {}) leaves the vertex set", i, j);
    }
}

#[test]
fn test_cycle_edge_and_degree_counts() -> Result<(), WalkError> {
    for n in 3..=10 {
        let g = Graph::build(n, Topology::Cycle)?;
        assert_eq!(g.num_vertices(), n);
        assert_eq!(g.edge_count(), n, "cycle on {} vertices", n);
        assert!(degrees(&g).iter().all(|&d| d == 2));
        assert_canonical(&g);
    }
    Ok(())
}

#[test]
fn test_line_edge_and_degree_counts() -> Result<(), WalkError> {
    for n in 2..=10 {
        let g = Graph::build(n, Topology::Line)?;
        assert_eq!(g.edge_count(), n - 1, "line on {} vertices", n);
        let mut d = degrees(&g);
        d.sort();
        let mut expected = vec![1, 1];
        expected.extend(std::iter::repeat(2).take(n - 2));
        expected.sort();
        assert_eq!(d, expected);
        assert_canonical(&g);
    }
    Ok(())
}

#[test]
fn test_complete_edge_and_degree_counts() -> Result<(), WalkError> {
    for n in 2..=10 {
        let g = Graph::build(n, Topology::Complete)?;
        assert_eq!(g.edge_count(), n * (n - 1) / 2, "complete graph on {} vertices", n);
        assert!(degrees(&g).iter().all(|&d| d == n - 1));
        assert_canonical(&g);
    }
    Ok(())
}

#[test]
fn test_build_is_deterministic() -> Result<(), WalkError> {
    for topology in Topology::ALL {
        for n in 2..=8 {
            let first = Graph::build(n, topology)?;
            let second = Graph::build(n, topology)?;
            assert_eq!(first.adjacency(), second.adjacency());
            assert_eq!(first, second);
        }
    }
    Ok(())
}

#[test]
fn test_no_self_loops_and_symmetric_matrix() -> Result<(), WalkError> {
    for topology in Topology::ALL {
        let g = Graph::build(6, topology)?;
        let m = g.adjacency_matrix();
        for i in 0..6 {
            assert_eq!(m[i][i], 0);
            for j in 0..6 {
                assert_eq!(m[i][j], m[j][i]);
                let listed = g.adjacency().contains(&(i.min(j), i.max(j)));
                assert_eq!(m[i][j] == 1, listed && i != j);
            }
        }
    }
    Ok(())
}

#[test]
fn test_scenario_edge_sets() -> Result<(), WalkError> {
    let cycle = Graph::from_name(3, "cycle")?;
    let expected: BTreeSet<(usize, usize)> = [(0, 1), (1, 2), (0, 2)].into_iter().collect();
    assert_eq!(cycle.adjacency(), &expected);

    let line = Graph::from_name(4, "line")?;
    let expected: BTreeSet<(usize, usize)> = [(0, 1), (1, 2), (2, 3)].into_iter().collect();
    assert_eq!(line.adjacency(), &expected);
    Ok(())
}

#[test]
fn test_unsupported_topology_name() {
    match Graph::from_name(4, "star") {
        Err(WalkError::UnsupportedTopology(name)) => assert_eq!(name, "star"),
        other => panic!("Expected UnsupportedTopology, got {:?}", other),
    }
}

#[test]
fn test_degenerate_sizes_are_rejected() {
    assert!(matches!(Graph::build(1, Topology::Cycle), Err(WalkError::InvalidParameter { .. })));
    assert!(matches!(Graph::build(1, Topology::Complete), Err(WalkError::InvalidParameter { .. })));
    assert!(matches!(Graph::build(0, Topology::Line), Err(WalkError::InvalidParameter { .. })));
}
