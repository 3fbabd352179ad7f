//! Top-down and bottom-up JSON serialization.

use mep_core::{Orientation, TreeIdx};
use mep_model::Network;
use mep_traverse::TraversalTree;
use serde_json::{Value, json};

use crate::error::{RenderError, RenderResult};

/// `{"id", "name", "children"}` object for one tree node.
fn node_value(network: &Network, tree: &TraversalTree, idx: TreeIdx, children: Vec<Value>) -> RenderResult<Value> {
    let node = tree.node(idx);
    let elem = network
        .element(node.elem)
        .ok_or(RenderError::DanglingElement { elem: node.elem })?;
    Ok(json!({
        "id": node.uid,
        "name": elem.name,
        "children": children,
    }))
}

/// Render the tree root-first: each node nests its children in traversal
/// attachment order. Revisit nodes come out as empty-children leaves.
pub fn top_down_value(network: &Network, tree: &TraversalTree) -> RenderResult<Value> {
    fn build(network: &Network, tree: &TraversalTree, idx: TreeIdx) -> RenderResult<Value> {
        let children = tree
            .node(idx)
            .children()
            .iter()
            .map(|&child| build(network, tree, child))
            .collect::<RenderResult<Vec<_>>>()?;
        node_value(network, tree, idx, children)
    }
    build(network, tree, tree.root())
}

/// Render the tree leaf-first: one chain per leaf (revisit leaves included),
/// each node holding its parent as its only child, terminating at the root.
/// Chains are aggregated under a network header object.
///
/// For every parent→child edge in the top-down output, some chain here
/// contains the converse child→parent edge, and vice versa.
pub fn bottom_up_value(network: &Network, tree: &TraversalTree) -> RenderResult<Value> {
    let mut chains = Vec::new();
    for leaf in tree.leaves() {
        // Path from leaf up to the root.
        let mut path = vec![leaf];
        let mut cursor = leaf;
        while let Some(parent) = tree.node(cursor).parent {
            path.push(parent);
            cursor = parent;
        }

        // Nest from the root outwards so the leaf ends up outermost.
        let mut value = Vec::new();
        for &idx in path.iter().rev() {
            value = vec![node_value(network, tree, idx, value)?];
        }
        chains.extend(value);
    }

    Ok(json!({
        "id": network.uid(),
        "name": network.name(),
        "children": chains,
    }))
}

/// Render the per-network JSON document in the configured orientation.
pub fn render_json(
    network: &Network,
    tree: &TraversalTree,
    orientation: Orientation,
) -> RenderResult<String> {
    let value = match orientation {
        Orientation::TopDown => top_down_value(network, tree)?,
        Orientation::BottomUp => bottom_up_value(network, tree)?,
    };
    Ok(serde_json::to_string(&value)?)
}
