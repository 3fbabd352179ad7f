//! mep-model: connectivity model layer for meptrace.
//!
//! Provides:
//! - Core model data structures (Element, Connector, Network)
//! - Incremental network builder with validation
//! - Stable neighbor enumeration for deterministic traversal
//!
//! # Example
//!
//! ```
//! use mep_core::{Category, ElementKind};
//! use mep_model::NetworkBuilder;
//!
//! let mut builder = NetworkBuilder::new(10, "Supply Air", Category::Mechanical);
//! let ahu = builder.add_element(100, "AHU-1", ElementKind::Equipment);
//! let duct = builder.add_element(101, "Duct-1", ElementKind::Segment);
//! builder.connect(ahu, "Out1", duct, "In");
//! builder.set_root(ahu);
//! let network = builder.build().unwrap();
//!
//! assert_eq!(network.elements().len(), 2);
//! assert_eq!(network.neighbors(ahu).len(), 1);
//! ```

pub mod builder;
pub mod error;
pub mod network;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::NetworkBuilder;
pub use error::ModelError;
pub use network::{Connector, Element, Endpoint, Network};
