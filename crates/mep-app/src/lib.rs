//! Shared application service layer for meptrace.
//!
//! Centralizes the per-network pipeline (traverse → serialize → collect),
//! run orchestration, and output assembly behind one interface for the CLI
//! and for embedding.

pub mod attributes;
pub mod error;
pub mod outputs;
pub mod pipeline;
pub mod project_service;
pub mod run_service;

// Re-export key types for convenience
pub use attributes::{AttributeStore, FileAttributeStore};
pub use error::{AppError, AppResult};
pub use outputs::OutputStore;
pub use pipeline::{PipelineOutput, run_pipeline};
pub use project_service::{NetworkSummary, list_networks, load_project, validate};
pub use run_service::{
    RunOptions, RunRequest, RunResponse, RunSummary, combined_document, execute_run,
    json_data_document, process_project,
};
