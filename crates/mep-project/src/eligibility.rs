//! Network eligibility filtering.
//!
//! Mirrors the host model's pre-filter: a network is processed only if it is
//! big enough, actually named, and passes its discipline's connectivity
//! quality check.

use std::collections::HashSet;

use mep_core::Category;
use mep_model::Network;

/// Why a network was excluded from processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disqualification {
    /// Fewer than two constituent elements.
    TooSmall,
    /// Empty name or the literal "unassigned".
    Unassigned,
    /// Mechanical/piping network with elements unreachable from the root.
    NotFullyConnected,
    /// Electrical network with no branch point.
    NotMultiBranch,
}

/// Minimum constituent element count.
pub const MIN_ELEMENTS: usize = 2;

/// Check a compiled network against the eligibility rules.
/// Returns `None` when the network qualifies.
pub fn disqualification(network: &Network) -> Option<Disqualification> {
    if network.elements().len() < MIN_ELEMENTS {
        return Some(Disqualification::TooSmall);
    }

    let name = network.name().trim();
    if name.is_empty() || name.eq_ignore_ascii_case("unassigned") {
        return Some(Disqualification::Unassigned);
    }

    match network.category() {
        Category::Mechanical | Category::Piping => {
            if !is_fully_connected(network) {
                return Some(Disqualification::NotFullyConnected);
            }
        }
        Category::Electrical => {
            if !is_multi_branch(network) {
                return Some(Disqualification::NotMultiBranch);
            }
        }
    }

    None
}

/// True if every element is reachable from the root.
fn is_fully_connected(network: &Network) -> bool {
    let mut seen = HashSet::from([network.root()]);
    let mut stack = vec![network.root()];
    while let Some(elem) = stack.pop() {
        for endpoint in network.neighbors(elem) {
            if seen.insert(endpoint.to) {
                stack.push(endpoint.to);
            }
        }
    }
    seen.len() == network.elements().len()
}

/// True if some element fans out to three or more attachments.
fn is_multi_branch(network: &Network) -> bool {
    network.elements().iter().any(|e| network.degree(e.id) >= 3)
}
