//! Run-level types: a span of text or an embed with its inline attributes.

use super::{AttrValue, Attributes, InlineAttr};
use serde::{Deserialize, Serialize};

/// One contiguous span of text, or one embed, plus its inline attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    /// Text or embed content
    pub insert: Insert,

    /// Inline attributes active on this run
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
}

impl Run {
    /// Create a plain text run.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            insert: Insert::Text(text.into()),
            attributes: Attributes::new(),
        }
    }

    /// Create an image embed run.
    pub fn image(url: impl Into<String>) -> Self {
        Self {
            insert: Insert::Embed(Embed::Image(url.into())),
            attributes: Attributes::new(),
        }
    }

    /// Builder-style attribute setter.
    pub fn with_attr(mut self, attr: InlineAttr, value: impl Into<AttrValue>) -> Self {
        self.attributes.insert(attr, value);
        self
    }

    /// Replace all attributes.
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Get the text content, if this is a text run.
    pub fn as_text(&self) -> Option<&str> {
        match &self.insert {
            Insert::Text(text) => Some(text),
            Insert::Embed(_) => None,
        }
    }

    /// Check if this run is an embed.
    pub fn is_embed(&self) -> bool {
        matches!(self.insert, Insert::Embed(_))
    }

    /// Check if this run carries no content.
    pub fn is_empty(&self) -> bool {
        matches!(&self.insert, Insert::Text(text) if text.is_empty())
    }
}

/// Content of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Insert {
    /// Literal text
    Text(String),
    /// Structured embed
    Embed(Embed),
}

/// A structured embed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Embed {
    /// Image by URL
    Image(String),
}

impl Embed {
    /// The embed's URL.
    pub fn url(&self) -> &str {
        match self {
            Embed::Image(url) => url,
        }
    }
}
