//! Error types for the mep-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates and
/// provides a unified interface for frontends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Project error: {0}")]
    Project(String),

    #[error("Model error: {0}")]
    Model(String),

    #[error("Traversal error: {0}")]
    Traverse(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("No networks qualify for processing")]
    NoQualifyingNetworks,

    #[error("Invalid output path: {path}")]
    InvalidOutputPath { path: PathBuf },

    #[error("Attribute store rejected network {network}: {message}")]
    AttributeStore { network: i64, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for mep-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<mep_project::ProjectError> for AppError {
    fn from(err: mep_project::ProjectError) -> Self {
        AppError::Project(err.to_string())
    }
}

impl From<mep_core::MepError> for AppError {
    fn from(err: mep_core::MepError) -> Self {
        AppError::Model(err.to_string())
    }
}

impl From<mep_traverse::TraverseError> for AppError {
    fn from(err: mep_traverse::TraverseError) -> Self {
        AppError::Traverse(err.to_string())
    }
}

impl From<mep_render::RenderError> for AppError {
    fn from(err: mep_render::RenderError) -> Self {
        AppError::Render(err.to_string())
    }
}
