//! Renderer error types.

use thiserror::Error;

pub type RenderResult<T> = Result<T, RenderError>;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XML formatting failed")]
    Fmt(#[from] std::fmt::Error),

    /// A tree node references an element the model no longer knows.
    #[error("Element {elem} missing from the network while rendering")]
    DanglingElement { elem: mep_core::ElemId },
}
