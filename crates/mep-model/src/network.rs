//! Core connectivity data structures.

use mep_core::{Category, ConnId, ElemId, ElementKind, Uid};

/// One element of a distribution network (equipment, segment, fitting, terminal).
///
/// `id` is the compact intra-network id used for adjacency lookups;
/// `uid` is the host model's stable identifier, unique across the run,
/// and is what appears in every output document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub id: ElemId,
    pub uid: Uid,
    pub name: String,
    pub kind: ElementKind,
}

/// An undirected attachment between two named ports.
///
/// A connector contributes one neighbor entry on each end: `a` sees
/// `(port_a, b)` and `b` sees `(port_b, a)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connector {
    pub id: ConnId,
    pub a: ElemId,
    pub port_a: String,
    pub b: ElemId,
    pub port_b: String,
}

/// One neighbor entry: the local port label, the element on the far end, and
/// the connector that produced the entry.
///
/// Carrying the connector id lets a traversal distinguish "the attachment I
/// arrived through" from a second, parallel attachment to the same element
/// (supply/return loops).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub port: String,
    pub to: ElemId,
    pub conn: ConnId,
}

/// An immutable, validated connectivity network.
///
/// The network stores:
/// - All elements and connectors in vectors (indexed by their IDs).
/// - Compact adjacency: for each element, its neighbor endpoints in
///   connector insertion order.
///
/// Neighbor order is part of the contract: traversal child ordering is
/// defined by it, so it must be identical across repeated calls within a run.
#[derive(Debug, Clone)]
pub struct Network {
    pub(crate) uid: Uid,
    pub(crate) name: String,
    pub(crate) category: Category,
    pub(crate) root: ElemId,
    pub(crate) elements: Vec<Element>,
    pub(crate) connectors: Vec<Connector>,

    /// Offsets for element->endpoint adjacency: element i's endpoints are in
    /// neighbors[neighbor_offsets[i]..neighbor_offsets[i+1]].
    pub(crate) neighbor_offsets: Vec<usize>,

    /// Flat list of endpoints, per element in connector insertion order.
    pub(crate) neighbors: Vec<Endpoint>,
}

impl Network {
    /// Host model identifier of this network.
    pub fn uid(&self) -> Uid {
        self.uid
    }

    /// Display name of this network.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Discipline of this network.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The base element the traversal starts from.
    pub fn root(&self) -> ElemId {
        self.root
    }

    /// Return all elements.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Return all connectors.
    pub fn connectors(&self) -> &[Connector] {
        &self.connectors
    }

    /// Get an element by ID (returns None if ID out of bounds).
    pub fn element(&self, id: ElemId) -> Option<&Element> {
        self.elements.get(id.index() as usize)
    }

    /// Get a connector by ID (returns None if ID out of bounds).
    pub fn connector(&self, id: ConnId) -> Option<&Connector> {
        self.connectors.get(id.index() as usize)
    }

    /// Enumerate an element's neighbors as `(port, far element)` endpoints.
    ///
    /// Order is stable: connector insertion order, unchanged for the life of
    /// the network.
    pub fn neighbors(&self, id: ElemId) -> &[Endpoint] {
        let idx = id.index() as usize;
        if idx >= self.elements.len() {
            return &[];
        }
        let start = self.neighbor_offsets[idx];
        let end = self.neighbor_offsets[idx + 1];
        &self.neighbors[start..end]
    }

    /// Number of neighbor entries on an element.
    pub fn degree(&self, id: ElemId) -> usize {
        self.neighbors(id).len()
    }
}
