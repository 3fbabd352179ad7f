//! Run orchestration: compile, filter, pipeline, and output assembly.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde_json::{Value, json};

use mep_collect::IdCollector;
use mep_core::Category;
use mep_model::Network;
use mep_project::{Project, compile_network, disqualification};

use crate::attributes::{AttributeStore, FileAttributeStore};
use crate::error::{AppError, AppResult};
use crate::outputs::OutputStore;
use crate::pipeline::{PipelineOutput, run_pipeline};

/// Options for executing a run.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Output directory override; defaults to `.meptrace/out` next to the
    /// project file.
    pub output_dir: Option<PathBuf>,
    /// Process networks concurrently. Outputs are identical either way:
    /// results are merged in network order.
    pub parallel: bool,
}

/// Request to execute a run.
pub struct RunRequest<'a> {
    pub project_path: &'a Path,
    pub options: RunOptions,
}

/// Run-level counts. Every skipped or failed network shows up here; nothing
/// is silently swallowed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Networks listed in the project.
    pub total_networks: usize,
    /// Networks that passed the eligibility filter.
    pub qualifying: usize,
    /// Networks successfully traversed and rendered.
    pub traversed: usize,
    /// Networks that failed to compile or traverse.
    pub failed: usize,
    /// Attribute-store writes that were rejected.
    pub store_warnings: usize,
    /// Total JSON bytes produced across all documents.
    pub json_bytes: usize,
}

/// Outcome of a completed run.
#[derive(Debug)]
pub struct RunResponse {
    pub summary: RunSummary,
    pub output_dir: PathBuf,
}

/// Load a project file and process it end to end with the default
/// file-backed attribute store.
pub fn execute_run(request: &RunRequest) -> AppResult<RunResponse> {
    let project = mep_project::load_project(request.project_path)?;
    let outputs = match &request.options.output_dir {
        Some(dir) => OutputStore::new(dir.clone())?,
        None => OutputStore::for_project(request.project_path)?,
    };
    let mut attributes =
        FileAttributeStore::new(outputs.root_dir().join("attributes.json"));
    process_project(&project, &outputs, &mut attributes, &request.options)
}

/// Process an already-loaded project against explicit collaborators.
///
/// Fails only when nothing qualifies or an output-directory write breaks;
/// per-network failures are counted and skipped.
pub fn process_project(
    project: &Project,
    outputs: &OutputStore,
    attributes: &mut dyn AttributeStore,
    options: &RunOptions,
) -> AppResult<RunResponse> {
    let mut summary = RunSummary {
        total_networks: project.networks.len(),
        ..Default::default()
    };

    // Compile and filter candidates.
    let mut networks: Vec<Network> = Vec::with_capacity(project.networks.len());
    for def in &project.networks {
        match compile_network(def) {
            Ok(network) => match disqualification(&network) {
                None => networks.push(network),
                Some(reason) => {
                    tracing::info!(network = def.uid, ?reason, "network disqualified");
                }
            },
            Err(err) => {
                summary.failed += 1;
                tracing::warn!(network = def.uid, error = %err, "network failed to compile");
            }
        }
    }
    summary.qualifying = networks.len();
    if networks.is_empty() {
        return Err(AppError::NoQualifyingNetworks);
    }

    // Each pipeline owns its tree and a local collector, so networks can be
    // processed concurrently; collection order is restored by the merge loop.
    let results: Vec<AppResult<PipelineOutput>> = if options.parallel {
        networks
            .par_iter()
            .map(|n| run_pipeline(n, project.orientation))
            .collect()
    } else {
        networks
            .iter()
            .map(|n| run_pipeline(n, project.orientation))
            .collect()
    };

    let mut collector = IdCollector::new();
    let mut documents: Vec<Value> = Vec::with_capacity(results.len());
    for result in results {
        match result {
            Ok(out) => {
                summary.traversed += 1;
                summary.json_bytes += out.json.len();
                outputs.write_network_xml(out.network_uid, &out.xml)?;
                if let Err(err) = attributes.store(out.network_uid, &out.json) {
                    summary.store_warnings += 1;
                    tracing::warn!(
                        network = out.network_uid,
                        error = %err,
                        "attribute store rejected write"
                    );
                }
                collector.merge(out.collector);
                documents.push(out.json_value);
            }
            Err(err) => {
                summary.failed += 1;
                tracing::warn!(error = %err, "network pipeline failed");
            }
        }
    }

    summary.json_bytes += outputs.write_combined(&combined_document(&project.name, &collector))?;
    summary.json_bytes += outputs.write_json_data(&json_data_document(&project.name, documents))?;

    tracing::info!(
        total = summary.total_networks,
        qualifying = summary.qualifying,
        traversed = summary.traversed,
        failed = summary.failed,
        store_warnings = summary.store_warnings,
        json_bytes = summary.json_bytes,
        "run complete"
    );

    Ok(RunResponse {
        summary,
        output_dir: outputs.root_dir().to_path_buf(),
    })
}

/// The combined per-run document: a synthetic root (id 1) holding one branch
/// per discipline, each branch listing that category's deduplicated ids.
pub fn combined_document(title: &str, collector: &IdCollector) -> Value {
    let children: Vec<Value> = Category::ALL
        .iter()
        .enumerate()
        .map(|(i, &category)| {
            json!({
                "id": i as i64 + 2,
                "name": category.branch_label(),
                "children": collector.as_json_array(category),
            })
        })
        .collect();
    json!({
        "id": 1,
        "name": title,
        "children": children,
    })
}

/// The `jsonData.json` aggregate: all per-network documents under one
/// synthetic root.
pub fn json_data_document(title: &str, documents: Vec<Value>) -> Value {
    json!({
        "id": -1,
        "text": title,
        "children": documents,
    })
}
