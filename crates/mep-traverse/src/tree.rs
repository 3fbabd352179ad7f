//! The traversal tree: a cycle-free view of one network.

use mep_core::{ElemId, TreeIdx, Uid};

/// How a tree node participates in the tree.
///
/// The tagged variant makes the cycle-termination invariant checkable by
/// type: only `Expanded` nodes carry children, so a `Revisit` can never be
/// expanded again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNodeKind {
    /// First appearance of the underlying element; children in traversal
    /// attachment order.
    Expanded { children: Vec<TreeIdx> },
    /// The underlying element already appears elsewhere in this tree
    /// (cycle or merge point). Always a leaf.
    Revisit,
}

/// One node of the traversal tree, wrapping one underlying element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// Compact id of the underlying element within its network.
    pub elem: ElemId,
    /// Host model identifier of the underlying element.
    pub uid: Uid,
    /// Distance from the root (root is 0).
    pub depth: u32,
    /// Parent node index; `None` only for the root.
    pub parent: Option<TreeIdx>,
    pub kind: TreeNodeKind,
}

impl TreeNode {
    /// Children indices; empty for revisit nodes.
    pub fn children(&self) -> &[TreeIdx] {
        match &self.kind {
            TreeNodeKind::Expanded { children } => children,
            TreeNodeKind::Revisit => &[],
        }
    }

    /// True if this node is a revisit leaf.
    pub fn is_revisit(&self) -> bool {
        matches!(self.kind, TreeNodeKind::Revisit)
    }
}

/// Arena-backed strict tree produced by one traversal.
///
/// Node 0 is always the root. The tree is immutable once built and is
/// consumed read-only by the serializers and the identifier collector.
#[derive(Debug, Clone)]
pub struct TraversalTree {
    pub(crate) nodes: Vec<TreeNode>,
}

impl TraversalTree {
    /// Index of the root node.
    pub fn root(&self) -> TreeIdx {
        TreeIdx::from_index(0)
    }

    /// Total number of tree nodes (revisit leaves included).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A built tree always holds at least the root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node by arena index.
    pub fn node(&self, idx: TreeIdx) -> &TreeNode {
        &self.nodes[idx.index() as usize]
    }

    /// Iterate all nodes in creation (breadth-first attachment) order.
    pub fn iter(&self) -> impl Iterator<Item = (TreeIdx, &TreeNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (TreeIdx::from_index(i as u32), n))
    }

    /// Indices of all leaves: revisit nodes and expanded nodes with no
    /// children, in creation order.
    pub fn leaves(&self) -> Vec<TreeIdx> {
        self.iter()
            .filter(|(_, n)| n.children().is_empty())
            .map(|(i, _)| i)
            .collect()
    }

    /// Greatest depth present in the tree.
    pub fn max_depth(&self) -> u32 {
        self.nodes.iter().map(|n| n.depth).max().unwrap_or(0)
    }

    /// Number of distinct underlying elements (expanded nodes).
    pub fn expanded_count(&self) -> usize {
        self.nodes.iter().filter(|n| !n.is_revisit()).count()
    }
}
