//! Traversal error types.

use mep_core::{ElemId, Uid};
use thiserror::Error;

/// Failure to resolve a network into a traversal tree.
///
/// All variants are non-fatal to a run: the caller skips the network,
/// counts the failure, and continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraverseError {
    #[error("Network {network} has no elements to traverse")]
    EmptyNetwork { network: Uid },

    #[error("Network {network}: root element is unresolvable")]
    UnresolvableRoot { network: Uid },

    #[error("Network {network}: neighbor {elem} not found in the model")]
    ElementNotFound { network: Uid, elem: ElemId },
}
