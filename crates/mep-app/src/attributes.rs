//! Persisted-attribute storage for per-network documents.
//!
//! The host application persists each network's serialized JSON against the
//! network's identifier. The core only needs a `store` capability; where the
//! slot lives is the collaborator's business.

use std::path::PathBuf;

use mep_core::Uid;
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};

/// A slot the run can write each network's serialized document into.
///
/// A rejected write is surfaced to the caller as a per-network warning and
/// does not abort the run.
pub trait AttributeStore {
    fn store(&mut self, network_uid: Uid, json: &str) -> AppResult<()>;
}

/// File-backed store: one `attributes.json` object keyed by network uid.
#[derive(Debug)]
pub struct FileAttributeStore {
    path: PathBuf,
    entries: Map<String, Value>,
}

impl FileAttributeStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            entries: Map::new(),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl AttributeStore for FileAttributeStore {
    fn store(&mut self, network_uid: Uid, json: &str) -> AppResult<()> {
        self.entries
            .insert(network_uid.to_string(), Value::String(json.to_string()));
        let content = serde_json::to_string_pretty(&Value::Object(self.entries.clone()))
            .map_err(|e| AppError::AttributeStore {
                network: network_uid,
                message: e.to_string(),
            })?;
        std::fs::write(&self.path, content).map_err(|e| AppError::AttributeStore {
            network: network_uid,
            message: e.to_string(),
        })
    }
}
