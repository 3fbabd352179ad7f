//! Project schema definitions.

use mep_core::{Category, ElementKind, Orientation, Uid};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub version: u32,
    /// Document title; appears in the aggregate output documents.
    pub name: String,
    /// Global per-run orientation for per-network JSON documents.
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default)]
    pub networks: Vec<NetworkDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkDef {
    pub uid: Uid,
    pub name: String,
    pub category: Category,
    /// Element name of the base equipment traversal starts from.
    pub root: String,
    #[serde(default)]
    pub elements: Vec<ElementDef>,
    #[serde(default)]
    pub connectors: Vec<ConnectorDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ElementDef {
    pub id: Uid,
    pub name: String,
    pub kind: ElementKind,
}

/// An undirected attachment between two named ports.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConnectorDef {
    pub from: String,
    pub from_port: String,
    pub to: String,
    pub to_port: String,
}
