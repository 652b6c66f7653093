//! # bbdelta
//!
//! Bidirectional conversion between BBCode markup and a Delta-style
//! rich-text document model.
//!
//! A [`Document`] is an ordered list of [`Line`]s; each line carries
//! line-level attributes (alignment, indentation, heading level) and an
//! ordered list of [`Run`]s of text or image embeds with inline attributes.
//!
//! ## Quick Start
//!
//! ```
//! use bbdelta::{decode, encode, InlineAttr};
//!
//! fn main() -> bbdelta::Result<()> {
//!     let doc = decode("[b]bold[/b] and [color=red]red[/color]");
//!     assert!(doc.lines[0].segments[0].attributes.contains(InlineAttr::Bold));
//!
//!     let markup = encode(&doc)?;
//!     assert_eq!(markup, "[b]bold[/b] and [color=red]red[/color]\n");
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Forgiving decoder**: malformed, unknown, or unterminated tags become literal text
//! - **Minimal encoder**: correctly nested output; a tag is only reopened when an outer tag closes
//! - **Two attribute scopes**: line-level tags split lines, inline tags style runs
//! - **Delta JSON**: serde-based JSON for handing documents to editors

pub mod decode;
pub mod encode;
pub mod error;
pub mod markup;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use decode::{decode, decode_batch, decode_with_options, DecodeOptions, Decoder};
pub use encode::{encode, encode_with_options, EncodeOptions, Encoder, OpenTags, TagEdit};
pub use error::{Error, Result};
pub use markup::{escape, unescape};
pub use model::{
    Alignment, AttrValue, Attributes, Document, Embed, InlineAttr, Insert, Line, LineAttributes,
    Run, RunGroup,
};
pub use render::{DocumentStats, JsonFormat};

use std::path::Path;

/// Decode a BBCode file.
///
/// # Example
///
/// ```no_run
/// use bbdelta::decode_file;
///
/// let doc = decode_file("post.bbcode").unwrap();
/// println!("Lines: {}", doc.line_count());
/// ```
pub fn decode_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let markup = std::fs::read_to_string(path)?;
    Ok(decode(&markup))
}

/// Read a Delta JSON file.
pub fn read_json_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let json = std::fs::read_to_string(path)?;
    render::from_json(&json)
}

/// Rewrite markup in canonical form by decoding and re-encoding it.
///
/// # Example
///
/// ```
/// let canonical = bbdelta::normalize("[B]x[/b][foo]").unwrap();
/// assert_eq!(canonical, "[b]x[/b]&lsqb;foo&rsqb;\n");
/// ```
pub fn normalize(markup: &str) -> Result<String> {
    encode(&decode(markup))
}

/// Builder for decoding and converting BBCode.
///
/// # Example
///
/// ```
/// use bbdelta::Bbdelta;
///
/// let converted = Bbdelta::new()
///     .reset_each_line()
///     .without_trailing_newline()
///     .decode("[b]one\ntwo");
/// assert_eq!(converted.to_bbcode()?, "[b]one[/b]\ntwo");
/// # Ok::<(), bbdelta::Error>(())
/// ```
pub struct Bbdelta {
    decode_options: DecodeOptions,
    encode_options: EncodeOptions,
}

impl Bbdelta {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            decode_options: DecodeOptions::default(),
            encode_options: EncodeOptions::default(),
        }
    }

    /// Reset open attributes at every physical line.
    pub fn reset_each_line(mut self) -> Self {
        self.decode_options = self.decode_options.reset_each_line();
        self
    }

    /// Keep each literal fragment as its own run.
    pub fn no_merge(mut self) -> Self {
        self.decode_options = self.decode_options.no_merge();
        self
    }

    /// Normalize text to Unicode NFC while decoding.
    pub fn normalize_unicode(mut self) -> Self {
        self.decode_options = self.decode_options.with_unicode_normalization(true);
        self
    }

    /// Omit the terminator after the last encoded line.
    pub fn without_trailing_newline(mut self) -> Self {
        self.encode_options = self.encode_options.with_trailing_newline(false);
        self
    }

    /// Decode markup and return a result wrapper.
    pub fn decode(self, markup: &str) -> Converted {
        let document = decode_with_options(markup, &self.decode_options);
        Converted {
            document,
            encode_options: self.encode_options,
        }
    }

    /// Decode a BBCode file.
    pub fn decode_file<P: AsRef<Path>>(self, path: P) -> Result<Converted> {
        let markup = std::fs::read_to_string(path)?;
        Ok(self.decode(&markup))
    }
}

impl Default for Bbdelta {
    fn default() -> Self {
        Self::new()
    }
}

/// A decoded document plus the options to encode it with.
pub struct Converted {
    /// The decoded document
    pub document: Document,
    encode_options: EncodeOptions,
}

impl Converted {
    /// Encode back to BBCode.
    pub fn to_bbcode(&self) -> Result<String> {
        encode_with_options(&self.document, &self.encode_options)
    }

    /// Convert to Delta JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Get plain text.
    pub fn to_text(&self) -> String {
        render::to_text(&self.document)
    }

    /// Collect content statistics.
    pub fn stats(&self) -> DocumentStats {
        DocumentStats::from_document(&self.document)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let builder = Bbdelta::default();
        assert!(builder.decode_options.persist_attributes);
        assert!(builder.decode_options.merge_adjacent);
        assert!(builder.encode_options.trailing_newline);
    }

    #[test]
    fn test_builder_chained() {
        let builder = Bbdelta::new()
            .reset_each_line()
            .no_merge()
            .normalize_unicode()
            .without_trailing_newline();

        assert!(!builder.decode_options.persist_attributes);
        assert!(!builder.decode_options.merge_adjacent);
        assert!(builder.decode_options.normalize_unicode);
        assert!(!builder.encode_options.trailing_newline);
    }

    #[test]
    fn test_converted_outputs() {
        let converted = Bbdelta::new().decode("[i]hi[/i] [img]u[/img]");
        assert_eq!(converted.to_bbcode().unwrap(), "[i]hi[/i] [img]u[/img]\n");
        assert_eq!(converted.to_text(), "hi ");
        assert_eq!(converted.stats().embed_count, 1);
        assert!(converted
            .to_json(JsonFormat::Compact)
            .unwrap()
            .contains(r#""italic":true"#));
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("").unwrap(), "\n");
        assert_eq!(normalize("[b]a[/b][b]b[/b]").unwrap(), "[b]ab[/b]\n");
        assert_eq!(normalize("[b]unclosed").unwrap(), "[b]unclosed[/b]\n");
    }

    #[test]
    fn test_decode_file_missing() {
        let result = decode_file("/nonexistent/path/post.bbcode");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
