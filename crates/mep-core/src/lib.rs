//! mep-core: stable foundation for meptrace.
//!
//! Contains:
//! - ids (stable compact IDs for model/tree objects)
//! - category (network discipline + element kind enums)
//! - orientation (serialization orientation switch)
//! - error (shared error types)

pub mod category;
pub mod error;
pub mod ids;
pub mod orientation;

// Re-exports: nice ergonomics for downstream crates
pub use category::{Category, ElementKind};
pub use error::{MepError, MepResult};
pub use ids::*;
pub use orientation::Orientation;
