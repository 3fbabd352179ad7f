//! Integration and property tests for mep-traverse.

use std::collections::HashSet;

use mep_core::{Category, ElementKind};
use mep_model::{Network, NetworkBuilder};
use mep_traverse::traverse;

/// Build a network from (element count, edge list); element 0 is the root.
fn network_from_edges(n: usize, edges: &[(usize, usize)]) -> Network {
    let mut b = NetworkBuilder::new(1, "Generated", Category::Mechanical);
    let mut ids = Vec::with_capacity(n);
    for i in 0..n {
        let kind = if i == 0 {
            ElementKind::Equipment
        } else {
            ElementKind::Segment
        };
        ids.push(b.add_element(1000 + i as i64, format!("E{}", i), kind));
    }
    for (k, &(x, y)) in edges.iter().enumerate() {
        b.connect(ids[x], format!("P{}a", k), ids[y], format!("P{}b", k));
    }
    b.set_root(ids[0]);
    b.build().unwrap()
}

/// Reference reachability: plain element-level BFS over the edge list.
fn reachable(n: usize, edges: &[(usize, usize)]) -> HashSet<usize> {
    let mut adj = vec![Vec::new(); n];
    for &(x, y) in edges {
        adj[x].push(y);
        adj[y].push(x);
    }
    let mut seen = HashSet::from([0]);
    let mut queue = vec![0];
    while let Some(e) = queue.pop() {
        for &nb in &adj[e] {
            if seen.insert(nb) {
                queue.push(nb);
            }
        }
    }
    seen
}

#[test]
fn every_reachable_element_appears() {
    // Two components: 0-1-2 triangle plus disconnected 3-4.
    let edges = [(0, 1), (1, 2), (2, 0), (3, 4)];
    let network = network_from_edges(5, &edges);
    let tree = traverse(&network).unwrap();

    let in_tree: HashSet<i64> = tree.iter().map(|(_, n)| n.uid).collect();
    assert_eq!(in_tree, HashSet::from([1000, 1001, 1002]));
    // Unreached component stays out.
    assert!(!in_tree.contains(&1003));
}

#[test]
fn expanded_nodes_are_unique_per_element() {
    let edges = [(0, 1), (0, 2), (1, 2), (2, 3), (3, 0)];
    let network = network_from_edges(4, &edges);
    let tree = traverse(&network).unwrap();

    let mut expanded = HashSet::new();
    for (_, node) in tree.iter() {
        if !node.is_revisit() {
            assert!(expanded.insert(node.uid), "element expanded twice");
        }
    }
}

#[test]
fn parent_links_form_a_strict_tree() {
    let edges = [(0, 1), (0, 2), (1, 3), (2, 3), (3, 0)];
    let network = network_from_edges(4, &edges);
    let tree = traverse(&network).unwrap();

    assert!(tree.node(tree.root()).parent.is_none());
    for (idx, node) in tree.iter() {
        if let Some(parent) = node.parent {
            assert_eq!(node.depth, tree.node(parent).depth + 1);
            assert!(tree.node(parent).children().contains(&idx));
        } else {
            assert_eq!(idx, tree.root());
        }
    }
}

#[test]
fn one_tree_edge_per_reachable_connector() {
    let edges = [(0, 1), (1, 2), (2, 0), (0, 2)];
    let network = network_from_edges(3, &edges);
    let tree = traverse(&network).unwrap();
    // All 4 connectors reachable -> root + 4 attachments.
    assert_eq!(tree.len(), 5);
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn edges_strategy(n: usize) -> impl Strategy<Value = Vec<(usize, usize)>> {
        prop::collection::vec((0..n, 0..n), 0..24)
    }

    proptest! {
        #[test]
        fn traverse_terminates_and_covers(edges in edges_strategy(8)) {
            let edges: Vec<(usize, usize)> =
                edges.into_iter().filter(|&(a, b)| a != b).collect();
            let network = network_from_edges(8, &edges);
            let tree = traverse(&network).unwrap();

            // Coverage: tree uids == independently computed reachable set.
            let expect: HashSet<i64> = reachable(8, &edges)
                .into_iter()
                .map(|i| 1000 + i as i64)
                .collect();
            let got: HashSet<i64> = tree.iter().map(|(_, n)| n.uid).collect();
            prop_assert_eq!(got, expect);

            // Each element expanded at most once.
            let expanded = tree.expanded_count();
            prop_assert!(expanded <= 8);
            prop_assert_eq!(
                expanded,
                tree.iter().filter(|(_, n)| !n.is_revisit()).count()
            );
        }

        #[test]
        fn traverse_is_deterministic(edges in edges_strategy(6)) {
            let edges: Vec<(usize, usize)> =
                edges.into_iter().filter(|&(a, b)| a != b).collect();
            let network = network_from_edges(6, &edges);
            let t1 = traverse(&network).unwrap();
            let t2 = traverse(&network).unwrap();

            prop_assert_eq!(t1.len(), t2.len());
            for ((_, a), (_, b)) in t1.iter().zip(t2.iter()) {
                prop_assert_eq!(a, b);
            }
        }
    }
}
