//! Per-network processing pipeline.
//!
//! One network flows through traverse → serialize (both orientations are
//! available; the configured one becomes the stored document) → collect.
//! The three downstream stages all read the same immutable tree, so a
//! pipeline is self-contained and safe to run concurrently with others.

use mep_collect::IdCollector;
use mep_core::{Category, Orientation, Uid};
use mep_model::Network;
use mep_render::{render_xml, top_down_value};
use mep_traverse::traverse;
use serde_json::Value;

use crate::error::AppResult;

/// Everything one network's pipeline produces.
#[derive(Debug)]
pub struct PipelineOutput {
    pub network_uid: Uid,
    pub network_name: String,
    pub category: Category,
    /// Per-network JSON document in the configured orientation.
    pub json: String,
    /// Same document as a value, for embedding in `jsonData.json`.
    pub json_value: Value,
    /// Flat XML dump.
    pub xml: String,
    /// This network's identifiers, to be merged into the run collector.
    pub collector: IdCollector,
    /// Tree size, for the run log.
    pub tree_nodes: usize,
}

/// Run the full pipeline for one network.
///
/// Fails if traversal or rendering fails; the caller treats that as a
/// skip-this-network condition, not a run abort.
pub fn run_pipeline(network: &Network, orientation: Orientation) -> AppResult<PipelineOutput> {
    let tree = traverse(network)?;

    let json_value = match orientation {
        Orientation::TopDown => top_down_value(network, &tree)?,
        Orientation::BottomUp => mep_render::bottom_up_value(network, &tree)?,
    };
    let json = serde_json::to_string(&json_value)
        .map_err(mep_render::RenderError::from)?;
    let xml = render_xml(network, &tree)?;

    let mut collector = IdCollector::new();
    collector.collect(network.category(), &tree);

    tracing::debug!(
        network = network.uid(),
        tree_nodes = tree.len(),
        json_bytes = json.len(),
        "pipeline complete"
    );

    Ok(PipelineOutput {
        network_uid: network.uid(),
        network_name: network.name().to_string(),
        category: network.category(),
        json,
        json_value,
        xml,
        collector,
        tree_nodes: tree.len(),
    })
}
