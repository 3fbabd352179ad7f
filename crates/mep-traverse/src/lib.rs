//! mep-traverse: the traversal engine for meptrace.
//!
//! Resolves a connectivity network (which may contain branches, merges,
//! parallel paths, and supply/return cycles) into a strict rooted tree.
//! Every element reachable from the root appears in the tree at least once;
//! repeats only occur as non-expanded revisit leaves, which is what
//! terminates cycles.
//!
//! The walk is breadth-first; see [`traverse`] for the ordering contract.

pub mod engine;
pub mod error;
pub mod tree;

pub use engine::traverse;
pub use error::TraverseError;
pub use tree::{TraversalTree, TreeNode, TreeNodeKind};
