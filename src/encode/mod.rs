//! BBCode encoding module.
//!
//! Encoding walks each line's runs, diffing the stack of open tags against
//! the next run's attributes into [`TagEdit`]s. Unchanged attributes stay
//! open unless an outer tag has to close around them.

mod diff;
mod encoder;
mod options;

pub use diff::{diff_attributes, OpenTags, TagEdit};
pub use encoder::Encoder;
pub use options::EncodeOptions;

use crate::error::Result;
use crate::model::Document;

/// Encode a document as BBCode with default options.
pub fn encode(doc: &Document) -> Result<String> {
    Encoder::default().encode(doc)
}

/// Encode a document as BBCode with custom options.
pub fn encode_with_options(doc: &Document, options: &EncodeOptions) -> Result<String> {
    Encoder::new(options.clone()).encode(doc)
}
