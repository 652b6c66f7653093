//! Line/run builder: turns the scanner's token stream into lines of runs.

use super::DecodeOptions;
use crate::markup::{scan, unescape, ContentPolicy, Scope, Tag, TagKind, TagMatch, Target};
use crate::model::{
    AttrValue, Attributes, Document, Embed, InlineAttr, Insert, Line, LineAttr, LineAttributes,
    Run,
};
use unicode_normalization::UnicodeNormalization;

/// Attribute scopes carried from one physical line to the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeState {
    /// Line-level attributes currently open
    pub line_attrs: LineAttributes,

    /// Inline attributes currently open
    pub run_attrs: Attributes,
}

impl DecodeState {
    /// Check whether the attribute a tag controls is already open.
    pub fn is_active(&self, tag: Tag) -> bool {
        match tag.target() {
            Target::Inline(attr) => self.run_attrs.contains(attr),
            Target::Line(attr) => self.line_attrs.is_set(attr),
            Target::Embed => false,
        }
    }

    /// Open the attribute a tag controls, using the tag's shorthand value.
    ///
    /// Valued tags without a usable value leave the scope unchanged.
    pub fn open(&mut self, tag: Tag, matched: &TagMatch<'_>) {
        let value = matched.value();
        match tag.target() {
            Target::Inline(attr) if attr.is_flag() => {
                self.run_attrs.insert(attr, true);
            }
            Target::Inline(attr) => match value {
                Some(v) => {
                    self.run_attrs
                        .insert(attr, AttrValue::Text(unescape(v).into_owned()));
                }
                None => log::debug!("Ignoring {} without a value", matched.raw),
            },
            Target::Line(LineAttr::Align) => self.line_attrs.align = tag.alignment(),
            Target::Line(LineAttr::Indent) => {
                self.line_attrs.indent = parse_number(matched);
            }
            Target::Line(LineAttr::Header) => {
                self.line_attrs.header = parse_number(matched);
            }
            Target::Embed => {}
        }
    }

    /// Close the attribute a tag controls.
    pub fn close(&mut self, tag: Tag) {
        match tag.target() {
            Target::Inline(attr) => {
                self.run_attrs.remove(attr);
            }
            Target::Line(attr) => self.line_attrs.clear(attr),
            Target::Embed => {}
        }
    }
}

fn parse_number<T: std::str::FromStr>(matched: &TagMatch<'_>) -> Option<T> {
    let parsed = matched.value().and_then(|v| v.trim().parse().ok());
    if parsed.is_none() {
        log::debug!("Ignoring {} without a numeric value", matched.raw);
    }
    parsed
}

/// BBCode decoder.
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    options: DecodeOptions,
}

impl Decoder {
    /// Create a new decoder.
    pub fn new(options: DecodeOptions) -> Self {
        Self { options }
    }

    /// Decode markup into a document.
    ///
    /// The result always has at least one line, so markup holding only
    /// tags decodes like empty markup.
    pub fn decode(&self, markup: &str) -> Document {
        let (mut document, _) = split_lines(markup).into_iter().fold(
            (Document::new(), DecodeState::default()),
            |(mut document, mut state), text| {
                if !self.options.persist_attributes {
                    state = DecodeState::default();
                }
                self.decode_line(text, &mut state, &mut document.lines);
                (document, state)
            },
        );
        if document.is_empty() {
            document.push_line(Line::new());
        }
        document
    }

    /// Decode one physical line, appending the lines it produces to `out`.
    ///
    /// A single physical line yields several lines when line-scoped tags
    /// open or close after content, and none when it holds only tags.
    pub fn decode_line(&self, text: &str, state: &mut DecodeState, out: &mut Vec<Line>) {
        if text.is_empty() {
            out.push(Line::new());
            return;
        }

        let mut builder = LineBuilder::new(&self.options);
        let mut remaining = text;

        while let Some(matched) = scan(remaining) {
            builder.push_text(matched.prefix, &state.run_attrs);
            remaining = matched.rest;

            let Some(tag) = Tag::lookup(&matched.name) else {
                log::debug!("Keeping unknown tag {} as text", matched.raw);
                builder.push_text(matched.raw, &state.run_attrs);
                continue;
            };

            match matched.kind {
                TagKind::Close => {
                    if tag.scope() == Scope::Line {
                        builder.flush(&state.line_attrs, out);
                    }
                    state.close(tag);
                }
                TagKind::Open if state.is_active(tag) => {
                    log::debug!("Keeping {} as text: attribute already open", matched.raw);
                    builder.push_text(matched.raw, &state.run_attrs);
                }
                TagKind::Open if tag.content_policy() == ContentPolicy::Raw => {
                    match split_raw_body(remaining, tag) {
                        Some((body, after)) if !body.trim().is_empty() => {
                            builder.push_embed(body, &matched);
                            remaining = after;
                        }
                        _ => {
                            log::debug!("Keeping unterminated {} as text", matched.raw);
                            let literal = format!("{}{}", matched.raw, remaining);
                            builder.push_text(&literal, &state.run_attrs);
                            remaining = "";
                            break;
                        }
                    }
                }
                TagKind::Open => {
                    if tag.scope() == Scope::Line {
                        builder.flush(&state.line_attrs, out);
                    }
                    state.open(tag, &matched);
                }
            }
        }

        builder.push_text(remaining, &state.run_attrs);
        builder.flush(&state.line_attrs, out);
    }
}

/// Split `rest` around the closing tag of a raw-content tag.
fn split_raw_body(rest: &str, tag: Tag) -> Option<(&str, &str)> {
    let closing = format!("[/{}]", tag.name());
    // ASCII lowercasing keeps byte offsets intact.
    let index = rest.to_ascii_lowercase().find(&closing)?;
    Some((&rest[..index], &rest[index + closing.len()..]))
}

/// Split text into physical lines on `\r\n`, `\r` or `\n`.
///
/// A break at the very end terminates the last line instead of opening a
/// new one; empty input is a single empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }

    if start < text.len() || lines.is_empty() {
        lines.push(&text[start..]);
    }
    lines
}

/// Runs pending for the line currently being built.
struct LineBuilder<'o> {
    options: &'o DecodeOptions,
    segments: Vec<Run>,
}

impl<'o> LineBuilder<'o> {
    fn new(options: &'o DecodeOptions) -> Self {
        Self {
            options,
            segments: Vec::new(),
        }
    }

    /// Push literal text carrying a snapshot of the open inline attributes.
    fn push_text(&mut self, text: &str, attrs: &Attributes) {
        if text.is_empty() {
            return;
        }

        let mut text = unescape(text).into_owned();
        if self.options.normalize_unicode {
            text = text.nfc().collect();
        }

        if self.options.merge_adjacent {
            if let Some(Run {
                insert: Insert::Text(previous),
                attributes,
            }) = self.segments.last_mut()
            {
                if attributes.same_as(attrs) {
                    previous.push_str(&text);
                    return;
                }
            }
        }

        self.segments.push(Run::text(text).with_attributes(attrs.clone()));
    }

    /// Push an embed built from a raw tag body and the tag's parameters.
    fn push_embed(&mut self, body: &str, matched: &TagMatch<'_>) {
        let url = unescape(body.trim()).into_owned();
        let mut attributes = Attributes::new();
        for (key, value) in &matched.attrs {
            match InlineAttr::from_image_param(key) {
                Some(attr) => {
                    attributes.insert(attr, AttrValue::Text(unescape(value).into_owned()));
                }
                None => log::debug!("Dropping unsupported image parameter {:?}", key),
            }
        }

        self.segments.push(Run {
            insert: Insert::Embed(Embed::Image(url)),
            attributes,
        });
    }

    /// Move pending runs into a new line with a snapshot of the line attributes.
    fn flush(&mut self, line_attrs: &LineAttributes, out: &mut Vec<Line>) {
        if self.segments.is_empty() {
            return;
        }
        out.push(Line {
            attributes: line_attrs.clone(),
            segments: std::mem::take(&mut self.segments),
        });
    }
}
