//! Rendering module for converting documents to output formats other than BBCode.

mod json;
mod stats;
mod text;

pub use json::{from_json, to_json, JsonFormat};
pub use stats::DocumentStats;
pub use text::to_text;
