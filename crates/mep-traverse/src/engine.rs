//! Breadth-first graph-to-tree resolution.

use std::collections::{HashSet, VecDeque};

use mep_core::{ConnId, ElemId, TreeIdx};
use mep_model::Network;

use crate::error::TraverseError;
use crate::tree::{TraversalTree, TreeNode, TreeNodeKind};

/// Resolve a network into a [`TraversalTree`] rooted at its base element.
///
/// The walk is breadth-first: a FIFO frontier of expanded nodes, each popped
/// node attaching its neighbors in the model's stable enumeration order.
/// Child order within a node is therefore the model's neighbor order, and
/// sibling subtrees expand level by level. Two calls on the same network
/// produce structurally identical trees.
///
/// Resolution rules, per neighbor endpoint of a popped node:
/// - each connector materializes as exactly one tree edge: an endpoint whose
///   connector is already represented in the tree is skipped (this covers
///   the attachment we arrived through);
/// - an unvisited element is attached as an `Expanded` child at depth+1 and
///   pushed for further expansion;
/// - an already-visited element is attached as a `Revisit` leaf and never
///   expanded, which terminates cycles, merges, and parallel paths.
///
/// Every element is expanded at most once and every connector is consumed at
/// most once, so the walk terminates on any finite graph, and every element
/// reachable from the root appears in the tree. Tree node count equals
/// 1 + the number of reachable connectors. A root with no neighbors yields a
/// single-node tree and is a success; an empty network or an unresolvable
/// root is a failure the caller recovers from by skipping the network.
pub fn traverse(network: &Network) -> Result<TraversalTree, TraverseError> {
    if network.elements().is_empty() {
        return Err(TraverseError::EmptyNetwork {
            network: network.uid(),
        });
    }

    let root = network.root();
    let root_elem = network
        .element(root)
        .ok_or(TraverseError::UnresolvableRoot {
            network: network.uid(),
        })?;

    let mut nodes = vec![TreeNode {
        elem: root,
        uid: root_elem.uid,
        depth: 0,
        parent: None,
        kind: TreeNodeKind::Expanded {
            children: Vec::new(),
        },
    }];

    let mut visited: HashSet<ElemId> = HashSet::with_capacity(network.elements().len());
    visited.insert(root);
    let mut used_conns: HashSet<ConnId> = HashSet::with_capacity(network.connectors().len());

    let mut frontier: VecDeque<TreeIdx> = VecDeque::new();
    frontier.push_back(TreeIdx::from_index(0));

    while let Some(idx) = frontier.pop_front() {
        let (elem, depth) = {
            let node = &nodes[idx.index() as usize];
            (node.elem, node.depth)
        };

        for endpoint in network.neighbors(elem) {
            if !used_conns.insert(endpoint.conn) {
                continue;
            }
            let neighbor = network
                .element(endpoint.to)
                .ok_or(TraverseError::ElementNotFound {
                    network: network.uid(),
                    elem: endpoint.to,
                })?;

            let child_idx = TreeIdx::from_index(nodes.len() as u32);
            if visited.insert(endpoint.to) {
                nodes.push(TreeNode {
                    elem: endpoint.to,
                    uid: neighbor.uid,
                    depth: depth + 1,
                    parent: Some(idx),
                    kind: TreeNodeKind::Expanded {
                        children: Vec::new(),
                    },
                });
                frontier.push_back(child_idx);
            } else {
                nodes.push(TreeNode {
                    elem: endpoint.to,
                    uid: neighbor.uid,
                    depth: depth + 1,
                    parent: Some(idx),
                    kind: TreeNodeKind::Revisit,
                });
            }

            match &mut nodes[idx.index() as usize].kind {
                TreeNodeKind::Expanded { children } => children.push(child_idx),
                // Only expanded nodes are ever pushed onto the frontier.
                TreeNodeKind::Revisit => unreachable!("revisit node on frontier"),
            }
        }
    }

    tracing::debug!(
        network = network.uid(),
        tree_nodes = nodes.len(),
        elements = network.elements().len(),
        "traversal complete"
    );

    Ok(TraversalTree { nodes })
}
