//! Incremental network builder.

use std::collections::HashMap;
use mep_core::{Category, ConnId, ElemId, ElementKind, MepResult, Uid};

use crate::error::ModelError;
use crate::network::{Connector, Element, Endpoint, Network};
use crate::validate;

/// Builder for constructing a network incrementally.
///
/// Use `add_element` and `connect` to build up the connectivity graph,
/// assign a root with `set_root`, then call `build()` to validate and freeze
/// it into an immutable `Network`.
#[derive(Debug)]
pub struct NetworkBuilder {
    uid: Uid,
    name: String,
    category: Category,
    root: Option<ElemId>,
    elements: Vec<Element>,
    connectors: Vec<Connector>,
    next_elem_id: u32,
    next_conn_id: u32,
}

impl NetworkBuilder {
    /// Create a new empty builder for one network.
    pub fn new(uid: Uid, name: impl Into<String>, category: Category) -> Self {
        Self {
            uid,
            name: name.into(),
            category,
            root: None,
            elements: Vec::new(),
            connectors: Vec::new(),
            next_elem_id: 0,
            next_conn_id: 0,
        }
    }

    /// Add an element and return its compact ID.
    pub fn add_element(&mut self, uid: Uid, name: impl Into<String>, kind: ElementKind) -> ElemId {
        let id = ElemId::from_index(self.next_elem_id);
        self.next_elem_id += 1;
        self.elements.push(Element {
            id,
            uid,
            name: name.into(),
            kind,
        });
        id
    }

    /// Attach two elements through a pair of named ports.
    ///
    /// Insertion order here defines neighbor enumeration order in the built
    /// network, which in turn defines traversal child ordering.
    pub fn connect(
        &mut self,
        a: ElemId,
        port_a: impl Into<String>,
        b: ElemId,
        port_b: impl Into<String>,
    ) -> ConnId {
        let id = ConnId::from_index(self.next_conn_id);
        self.next_conn_id += 1;
        self.connectors.push(Connector {
            id,
            a,
            port_a: port_a.into(),
            b,
            port_b: port_b.into(),
        });
        id
    }

    /// Assign the base element traversal starts from.
    pub fn set_root(&mut self, root: ElemId) {
        self.root = Some(root);
    }

    /// Number of elements added so far.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Build and validate, returning an immutable `Network`.
    pub fn build(self) -> MepResult<Network> {
        let root = self.root.ok_or(ModelError::RootNotSet)?;

        validate::validate_structure(&self.elements, &self.connectors, root)?;

        let (neighbor_offsets, neighbors) =
            Self::build_adjacency(&self.elements, &self.connectors);

        validate::validate_adjacency(&self.elements, &self.connectors, &neighbor_offsets)?;

        Ok(Network {
            uid: self.uid,
            name: self.name,
            category: self.category,
            root,
            elements: self.elements,
            connectors: self.connectors,
            neighbor_offsets,
            neighbors,
        })
    }

    /// Build compact adjacency lists, preserving connector insertion order.
    fn build_adjacency(
        elements: &[Element],
        connectors: &[Connector],
    ) -> (Vec<usize>, Vec<Endpoint>) {
        // Group endpoints by element. Not sorted: downstream consumers depend
        // on connector insertion order for deterministic child ordering.
        let mut elem_to_endpoints: HashMap<ElemId, Vec<Endpoint>> = HashMap::new();
        for conn in connectors {
            elem_to_endpoints.entry(conn.a).or_default().push(Endpoint {
                port: conn.port_a.clone(),
                to: conn.b,
                conn: conn.id,
            });
            elem_to_endpoints.entry(conn.b).or_default().push(Endpoint {
                port: conn.port_b.clone(),
                to: conn.a,
                conn: conn.id,
            });
        }

        let mut offsets = Vec::with_capacity(elements.len() + 1);
        let mut flat = Vec::new();
        offsets.push(0);

        for elem in elements {
            if let Some(endpoints) = elem_to_endpoints.remove(&elem.id) {
                flat.extend(endpoints);
            }
            offsets.push(flat.len());
        }

        (offsets, flat)
    }
}
