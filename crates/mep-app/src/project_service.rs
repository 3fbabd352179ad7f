//! Project loading and inspection for frontends.

use std::path::Path;

use mep_project::{Project, compile_network, disqualification, validate_project};

use crate::error::AppResult;

/// Concise per-network description for listings.
#[derive(Debug, Clone)]
pub struct NetworkSummary {
    pub uid: i64,
    pub name: String,
    pub category: String,
    pub element_count: usize,
    pub connector_count: usize,
    /// None when the network qualifies; otherwise why it is skipped.
    pub disqualified: Option<String>,
}

/// Load and validate a project file.
pub fn load_project(path: &Path) -> AppResult<Project> {
    Ok(mep_project::load_project(path)?)
}

/// Re-validate an in-memory project.
pub fn validate(project: &Project) -> AppResult<()> {
    validate_project(project).map_err(mep_project::ProjectError::from)?;
    Ok(())
}

/// Summarize every network definition, including its eligibility verdict.
pub fn list_networks(project: &Project) -> Vec<NetworkSummary> {
    project
        .networks
        .iter()
        .map(|def| {
            let disqualified = match compile_network(def) {
                Ok(network) => disqualification(&network).map(|d| format!("{:?}", d)),
                Err(err) => Some(err.to_string()),
            };
            NetworkSummary {
                uid: def.uid,
                name: def.name.clone(),
                category: def.category.to_string(),
                element_count: def.elements.len(),
                connector_count: def.connectors.len(),
                disqualified,
            }
        })
        .collect()
}
