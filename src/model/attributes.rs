//! Inline and line-level attribute types.

use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

/// Name of an inline (run-level) attribute.
///
/// The declaration order is the natural key order used by the encoder:
/// tags open in this order and close in reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InlineAttr {
    Bold,
    Italic,
    Strike,
    Underline,
    Font,
    Size,
    Color,
    Link,
    /// Image width (embeds only)
    Width,
    /// Image height (embeds only)
    Height,
}

impl InlineAttr {
    /// Delta attribute name.
    pub fn as_str(&self) -> &'static str {
        match self {
            InlineAttr::Bold => "bold",
            InlineAttr::Italic => "italic",
            InlineAttr::Strike => "strike",
            InlineAttr::Underline => "underline",
            InlineAttr::Font => "font",
            InlineAttr::Size => "size",
            InlineAttr::Color => "color",
            InlineAttr::Link => "link",
            InlineAttr::Width => "width",
            InlineAttr::Height => "height",
        }
    }

    /// BBCode tag (or image parameter) name for this attribute.
    pub fn tag_name(&self) -> &'static str {
        match self {
            InlineAttr::Bold => "b",
            InlineAttr::Italic => "i",
            InlineAttr::Strike => "s",
            InlineAttr::Underline => "u",
            other => other.as_str(),
        }
    }

    /// Whether the attribute is a presence marker rather than a valued one.
    pub fn is_flag(&self) -> bool {
        matches!(
            self,
            InlineAttr::Bold | InlineAttr::Italic | InlineAttr::Strike | InlineAttr::Underline
        )
    }

    /// Whether the attribute styles text (and so has an opening tag).
    pub fn is_text_style(&self) -> bool {
        !matches!(self, InlineAttr::Width | InlineAttr::Height)
    }

    /// Map an `[img ...]` parameter name to the attribute it sets.
    pub fn from_image_param(name: &str) -> Option<Self> {
        match name {
            "width" => Some(InlineAttr::Width),
            "height" => Some(InlineAttr::Height),
            _ => None,
        }
    }
}

impl fmt::Display for InlineAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value of an inline attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Presence marker (`bold: true`)
    Flag(bool),
    /// Numeric value as written by some editors (`width: 100`)
    Number(i64),
    /// String value (`color: "#fff"`)
    Text(String),
}

impl AttrValue {
    /// Create a string value.
    pub fn text(value: impl Into<String>) -> Self {
        AttrValue::Text(value.into())
    }

    /// `false` flags are equivalent to the attribute being absent.
    pub fn is_set(&self) -> bool {
        !matches!(self, AttrValue::Flag(false))
    }

    /// Get the string value, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Flag(b) => write!(f, "{}", b),
            AttrValue::Number(n) => write!(f, "{}", n),
            AttrValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Flag(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

/// Inline attributes of a run, ordered by [`InlineAttr`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(BTreeMap<InlineAttr, AttrValue>);

impl Attributes {
    /// Create an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, attr: InlineAttr, value: impl Into<AttrValue>) -> Self {
        self.insert(attr, value);
        self
    }

    /// Set an attribute, returning the previous value.
    pub fn insert(&mut self, attr: InlineAttr, value: impl Into<AttrValue>) -> Option<AttrValue> {
        self.0.insert(attr, value.into())
    }

    /// Remove an attribute, returning its value.
    pub fn remove(&mut self, attr: InlineAttr) -> Option<AttrValue> {
        self.0.remove(&attr)
    }

    /// Get the value of an attribute.
    pub fn get(&self, attr: InlineAttr) -> Option<&AttrValue> {
        self.0.get(&attr)
    }

    /// Check whether an attribute is present and set.
    pub fn contains(&self, attr: InlineAttr) -> bool {
        self.0.get(&attr).is_some_and(AttrValue::is_set)
    }

    /// Check if no attributes are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of attributes present.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate in natural key order.
    pub fn iter(&self) -> btree_map::Iter<'_, InlineAttr, AttrValue> {
        self.0.iter()
    }

    /// Iterate over set attributes only, skipping `false` flags.
    pub fn active(&self) -> impl DoubleEndedIterator<Item = (InlineAttr, &AttrValue)> + '_ {
        self.0
            .iter()
            .filter(|(_, v)| v.is_set())
            .map(|(k, v)| (*k, v))
    }

    /// Compare two sets by their set attributes only.
    pub fn same_as(&self, other: &Attributes) -> bool {
        self.active().eq(other.active())
    }
}

impl FromIterator<(InlineAttr, AttrValue)> for Attributes {
    fn from_iter<T: IntoIterator<Item = (InlineAttr, AttrValue)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = (&'a InlineAttr, &'a AttrValue);
    type IntoIter = btree_map::Iter<'a, InlineAttr, AttrValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Text alignment of a line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// Justified alignment
    Justify,
}

impl Alignment {
    /// The tag that selects this alignment (`[center]`, ...).
    pub fn tag_name(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justify => "justify",
        }
    }
}

/// Name of a line-level attribute, in encoder opening order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LineAttr {
    Align,
    Indent,
    Header,
}

/// Line-level attributes. Unset attributes are `None` and never serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineAttributes {
    /// Text alignment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Alignment>,

    /// Indentation level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indent: Option<u32>,

    /// Heading level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<u8>,
}

impl LineAttributes {
    /// Create empty line attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set alignment.
    pub fn with_align(mut self, align: Alignment) -> Self {
        self.align = Some(align);
        self
    }

    /// Set indentation level.
    pub fn with_indent(mut self, indent: u32) -> Self {
        self.indent = Some(indent);
        self
    }

    /// Set heading level.
    pub fn with_header(mut self, level: u8) -> Self {
        self.header = Some(level);
        self
    }

    /// Check whether an attribute is set.
    pub fn is_set(&self, attr: LineAttr) -> bool {
        match attr {
            LineAttr::Align => self.align.is_some(),
            LineAttr::Indent => self.indent.is_some(),
            LineAttr::Header => self.header.is_some(),
        }
    }

    /// Clear an attribute.
    pub fn clear(&mut self, attr: LineAttr) {
        match attr {
            LineAttr::Align => self.align = None,
            LineAttr::Indent => self.indent = None,
            LineAttr::Header => self.header = None,
        }
    }

    /// Check if no attributes are set.
    pub fn is_empty(&self) -> bool {
        self.align.is_none() && self.indent.is_none() && self.header.is_none()
    }
}
