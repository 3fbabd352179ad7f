//! mep-render: tree serializers for meptrace.
//!
//! Three independent, stateless transforms over one immutable
//! [`mep_traverse::TraversalTree`]:
//! - top-down JSON (root first, children nested),
//! - bottom-up JSON (one ascending chain per leaf),
//! - a flat XML dump for archival and manual inspection.
//!
//! JSON documents are assembled as `serde_json::Value` trees, so escaping
//! and separator placement are the library's problem, not ours.

pub mod error;
pub mod json;
pub mod xml;

pub use error::{RenderError, RenderResult};
pub use json::{bottom_up_value, render_json, top_down_value};
pub use xml::render_xml;
