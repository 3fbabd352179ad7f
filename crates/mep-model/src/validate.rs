//! Network validation logic.

use std::collections::HashSet;
use mep_core::{ElemId, MepResult, Uid};

use crate::error::ModelError;
use crate::network::{Connector, Element};

/// Validate the network structure: all references exist, uids unique, root valid.
pub(crate) fn validate_structure(
    elements: &[Element],
    connectors: &[Connector],
    root: ElemId,
) -> MepResult<()> {
    // Element IDs are contiguous and match their indices by construction;
    // check anyway so a hand-assembled network can't slip through.
    for (i, elem) in elements.iter().enumerate() {
        if elem.id.index() as usize != i {
            return Err(ModelError::InconsistentAdjacency { elem: elem.id }.into());
        }
    }

    // Host uids must be unique within one network.
    let mut seen: HashSet<Uid> = HashSet::with_capacity(elements.len());
    for elem in elements {
        if !seen.insert(elem.uid) {
            return Err(ModelError::DuplicateUid { uid: elem.uid }.into());
        }
    }

    // Each connector endpoint must reference a real element.
    for conn in connectors {
        for elem in [conn.a, conn.b] {
            if elem.index() as usize >= elements.len() {
                return Err(ModelError::InvalidElemRef {
                    conn: conn.id,
                    elem,
                }
                .into());
            }
        }
    }

    if root.index() as usize >= elements.len() {
        return Err(ModelError::RootOutOfRange { elem: root }.into());
    }

    Ok(())
}

/// Validate adjacency offsets against the connector list.
pub(crate) fn validate_adjacency(
    elements: &[Element],
    connectors: &[Connector],
    neighbor_offsets: &[usize],
) -> MepResult<()> {
    if neighbor_offsets.len() != elements.len() + 1 {
        let elem = elements.first().map_or(ElemId::from_index(0), |e| e.id);
        return Err(ModelError::InconsistentAdjacency { elem }.into());
    }

    // Every connector contributes exactly two endpoints.
    let total = neighbor_offsets.last().copied().unwrap_or(0);
    if total != connectors.len() * 2 {
        let elem = elements.first().map_or(ElemId::from_index(0), |e| e.id);
        return Err(ModelError::InconsistentAdjacency { elem }.into());
    }

    // Offsets must be monotone.
    for pair in neighbor_offsets.windows(2) {
        if pair[1] < pair[0] {
            let elem = elements.first().map_or(ElemId::from_index(0), |e| e.id);
            return Err(ModelError::InconsistentAdjacency { elem }.into());
        }
    }

    Ok(())
}
