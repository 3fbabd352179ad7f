//! Compile a validated network definition into a connectivity model.

use std::collections::HashMap;

use mep_core::MepResult;
use mep_model::{Network, NetworkBuilder};

use crate::schema::NetworkDef;

/// Resolve a `NetworkDef`'s name references and freeze it into an immutable
/// [`Network`]. Assumes the definition already passed project validation.
///
/// Connector definition order becomes the model's neighbor enumeration
/// order, which downstream traversal depends on.
pub fn compile_network(def: &NetworkDef) -> MepResult<Network> {
    let mut builder = NetworkBuilder::new(def.uid, def.name.clone(), def.category);

    let mut by_name = HashMap::with_capacity(def.elements.len());
    for elem in &def.elements {
        let id = builder.add_element(elem.id, elem.name.clone(), elem.kind);
        by_name.insert(elem.name.as_str(), id);
    }

    for conn in &def.connectors {
        // Validation guarantees both ends resolve.
        let (Some(&a), Some(&b)) = (by_name.get(conn.from.as_str()), by_name.get(conn.to.as_str()))
        else {
            return Err(mep_core::MepError::InvalidArg {
                what: "connector references unknown element",
            });
        };
        builder.connect(a, conn.from_port.clone(), b, conn.to_port.clone());
    }

    if let Some(&root) = by_name.get(def.root.as_str()) {
        builder.set_root(root);
    }

    builder.build()
}
