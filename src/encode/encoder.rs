//! Tag emitter: writes a document back out as BBCode.

use super::{diff_attributes, EncodeOptions, OpenTags};
use crate::error::{Error, Result};
use crate::markup::escape;
use crate::model::{Attributes, Document, Embed, InlineAttr, Insert, Line, LineAttributes, Run};

/// BBCode encoder.
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    options: EncodeOptions,
}

impl Encoder {
    /// Create a new encoder.
    pub fn new(options: EncodeOptions) -> Self {
        Self { options }
    }

    /// Encode a document, one output line per document line.
    pub fn encode(&self, doc: &Document) -> Result<String> {
        let mut output = String::new();
        let count = doc.line_count();

        for (i, line) in doc.lines().enumerate() {
            self.encode_line(&mut output, line)?;
            if i + 1 < count || self.options.trailing_newline {
                output.push('\n');
            }
        }

        Ok(output)
    }

    /// Encode a single line without its terminator.
    ///
    /// A line without content is written empty: line tags around nothing
    /// would decode to no line at all.
    pub fn encode_line(&self, output: &mut String, line: &Line) -> Result<()> {
        if line.segments.iter().all(Run::is_empty) {
            if !line.attributes.is_empty() {
                log::debug!("Writing attributed line without content as an empty line");
            }
            return Ok(());
        }

        let line_tags = line_tags(&line.attributes);
        for (open, _) in &line_tags {
            output.push_str(open);
        }

        let mut current = OpenTags::new();
        for run in &line.segments {
            match &run.insert {
                Insert::Text(text) => {
                    if text.is_empty() {
                        continue;
                    }
                    if text.contains(&['\n', '\r'][..]) {
                        return Err(Error::InvalidDocument(format!(
                            "text run contains a line break: {:?}",
                            text
                        )));
                    }
                    for edit in diff_attributes(&current, &run.attributes) {
                        output.push_str(&edit.to_string());
                        edit.apply(&mut current);
                    }
                    output.push_str(&escape(text));
                }
                Insert::Embed(embed) => write_embed(output, embed, &run.attributes)?,
            }
        }

        for edit in diff_attributes(&current, &Attributes::new()) {
            output.push_str(&edit.to_string());
        }

        for (_, close) in line_tags.iter().rev() {
            output.push_str(close);
        }

        Ok(())
    }
}

/// Opening and closing tags for a line's attributes, in opening order.
fn line_tags(attrs: &LineAttributes) -> Vec<(String, String)> {
    let mut tags = Vec::new();

    if let Some(align) = attrs.align {
        let name = align.tag_name();
        tags.push((format!("[{}]", name), format!("[/{}]", name)));
    }
    if let Some(indent) = attrs.indent {
        tags.push((format!("[indent={}]", indent), "[/indent]".to_string()));
    }
    if let Some(header) = attrs.header {
        tags.push((format!("[header={}]", header), "[/header]".to_string()));
    }

    tags
}

fn write_embed(output: &mut String, embed: &Embed, attrs: &Attributes) -> Result<()> {
    let Embed::Image(url) = embed;
    if url.trim().is_empty() {
        return Err(Error::InvalidDocument(
            "image embed has an empty URL".to_string(),
        ));
    }

    output.push_str("[img");
    for attr in [InlineAttr::Width, InlineAttr::Height] {
        let Some(value) = attrs.get(attr).filter(|v| v.is_set()) else {
            continue;
        };
        let value = value.to_string();
        if value.is_empty() || value.contains(char::is_whitespace) {
            log::warn!("Dropping image {} {:?}: not expressible as a tag parameter", attr, value);
            continue;
        }
        output.push(' ');
        output.push_str(attr.tag_name());
        output.push('=');
        output.push_str(&escape(&value));
    }
    output.push(']');
    output.push_str(&escape(url));
    output.push_str("[/img]");

    Ok(())
}
