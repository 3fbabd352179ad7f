//! Project validation logic.

use crate::schema::{NetworkDef, Project};
use std::collections::HashSet;

pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_project(project: &Project) -> Result<(), ValidationError> {
    if project.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: project.version,
        });
    }

    let mut network_uids = HashSet::new();
    for network in &project.networks {
        if !network_uids.insert(network.uid) {
            return Err(ValidationError::DuplicateId {
                id: network.uid.to_string(),
                context: "networks".to_string(),
            });
        }
        validate_network(network)?;
    }

    Ok(())
}

fn validate_network(network: &NetworkDef) -> Result<(), ValidationError> {
    let context = format!("network {}", network.uid);

    let mut elem_ids = HashSet::new();
    let mut elem_names = HashSet::new();
    for elem in &network.elements {
        if !elem_ids.insert(elem.id) {
            return Err(ValidationError::DuplicateId {
                id: elem.id.to_string(),
                context: context.clone(),
            });
        }
        // Names are the connector reference key, so they must be unique too.
        if !elem_names.insert(elem.name.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: elem.name.clone(),
                context: context.clone(),
            });
        }
    }

    for conn in &network.connectors {
        for name in [conn.from.as_str(), conn.to.as_str()] {
            if !elem_names.contains(name) {
                return Err(ValidationError::MissingReference {
                    id: name.to_string(),
                    context: context.clone(),
                });
            }
        }
    }

    if !network.elements.is_empty() && !elem_names.contains(network.root.as_str()) {
        return Err(ValidationError::MissingReference {
            id: network.root.clone(),
            context: format!("{} root", context),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ConnectorDef, ElementDef};
    use mep_core::{Category, ElementKind, Orientation};

    fn minimal_project() -> Project {
        Project {
            version: 1,
            name: "Test".into(),
            orientation: Orientation::TopDown,
            networks: vec![NetworkDef {
                uid: 1,
                name: "Net".into(),
                category: Category::Mechanical,
                root: "AHU".into(),
                elements: vec![
                    ElementDef {
                        id: 10,
                        name: "AHU".into(),
                        kind: ElementKind::Equipment,
                    },
                    ElementDef {
                        id: 11,
                        name: "Duct".into(),
                        kind: ElementKind::Segment,
                    },
                ],
                connectors: vec![ConnectorDef {
                    from: "AHU".into(),
                    from_port: "Out".into(),
                    to: "Duct".into(),
                    to_port: "In".into(),
                }],
            }],
        }
    }

    #[test]
    fn valid_project_passes() {
        assert!(validate_project(&minimal_project()).is_ok());
    }

    #[test]
    fn future_version_rejected() {
        let mut project = minimal_project();
        project.version = LATEST_VERSION + 1;
        assert!(matches!(
            validate_project(&project),
            Err(ValidationError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn duplicate_network_uid_rejected() {
        let mut project = minimal_project();
        let copy = project.networks[0].clone();
        project.networks.push(copy);
        assert!(matches!(
            validate_project(&project),
            Err(ValidationError::DuplicateId { .. })
        ));
    }

    #[test]
    fn connector_to_unknown_element_rejected() {
        let mut project = minimal_project();
        project.networks[0].connectors[0].to = "Nowhere".into();
        assert!(matches!(
            validate_project(&project),
            Err(ValidationError::MissingReference { .. })
        ));
    }

    #[test]
    fn unknown_root_rejected() {
        let mut project = minimal_project();
        project.networks[0].root = "Nowhere".into();
        assert!(matches!(
            validate_project(&project),
            Err(ValidationError::MissingReference { .. })
        ));
    }
}
