//! Model-specific error types.

use mep_core::{ConnId, ElemId, MepError, Uid};

/// Network construction and validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A connector endpoint refers to an element that doesn't exist.
    InvalidElemRef { conn: ConnId, elem: ElemId },

    /// Two elements in the same network carry the same host uid.
    DuplicateUid { uid: Uid },

    /// No root element was assigned before `build()`.
    RootNotSet,

    /// The assigned root is not an element of this network.
    RootOutOfRange { elem: ElemId },

    /// Adjacency list is inconsistent (endpoint count doesn't match connectors).
    InconsistentAdjacency { elem: ElemId },
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::InvalidElemRef { conn, elem } => {
                write!(f, "Connector {} refers to non-existent element {}", conn, elem)
            }
            ModelError::DuplicateUid { uid } => {
                write!(f, "Duplicate element uid {} within one network", uid)
            }
            ModelError::RootNotSet => {
                write!(f, "Network has no root element assigned")
            }
            ModelError::RootOutOfRange { elem } => {
                write!(f, "Root element {} is out of range", elem)
            }
            ModelError::InconsistentAdjacency { elem } => {
                write!(f, "Element {}'s adjacency list is inconsistent", elem)
            }
        }
    }
}

impl std::error::Error for ModelError {}

impl From<ModelError> for MepError {
    fn from(err: ModelError) -> Self {
        MepError::Invariant {
            what: Box::leak(err.to_string().into_boxed_str()),
        }
    }
}
