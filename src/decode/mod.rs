//! BBCode decoding module.

mod decoder;
mod options;

pub use decoder::{split_lines, DecodeState, Decoder};
pub use options::DecodeOptions;

use crate::model::Document;
use rayon::prelude::*;

/// Decode BBCode markup into a document with default options.
pub fn decode(markup: &str) -> Document {
    Decoder::default().decode(markup)
}

/// Decode BBCode markup with custom options.
pub fn decode_with_options(markup: &str, options: &DecodeOptions) -> Document {
    Decoder::new(options.clone()).decode(markup)
}

/// Decode independent inputs, preserving input order.
///
/// Each input gets its own decoder state, so inputs are decoded on the
/// rayon pool unless `options.parallel` is off.
pub fn decode_batch<S>(inputs: &[S], options: &DecodeOptions) -> Vec<Document>
where
    S: AsRef<str> + Sync,
{
    let decoder = Decoder::new(options.clone());
    if options.parallel {
        inputs
            .par_iter()
            .map(|input| decoder.decode(input.as_ref()))
            .collect()
    } else {
        inputs
            .iter()
            .map(|input| decoder.decode(input.as_ref()))
            .collect()
    }
}
