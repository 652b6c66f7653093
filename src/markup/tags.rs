//! The recognized tag vocabulary and the scope each tag belongs to.

use crate::model::{Alignment, InlineAttr, LineAttr};

/// Which attribute dictionary a tag writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Applies to a run of text
    Run,
    /// Applies to a whole line
    Line,
}

/// How the body between an opening and closing tag is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentPolicy {
    /// Body is further tokenized as markup
    Markup,
    /// Body is captured verbatim as the tag's content (`[img]url[/img]`)
    Raw,
}

/// The attribute a tag controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Inline(InlineAttr),
    Line(LineAttr),
    /// Produces an embed run instead of setting an attribute
    Embed,
}

/// A recognized BBCode tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Bold,
    Italic,
    Strike,
    Underline,
    Font,
    Size,
    Color,
    Link,
    Image,
    Header,
    Indent,
    Left,
    Center,
    Right,
    Justify,
}

impl Tag {
    /// Look up a tag by its (lowercase) name.
    pub fn lookup(name: &str) -> Option<Self> {
        let tag = match name {
            "b" => Tag::Bold,
            "i" => Tag::Italic,
            "s" => Tag::Strike,
            "u" => Tag::Underline,
            "font" => Tag::Font,
            "size" => Tag::Size,
            "color" => Tag::Color,
            "link" => Tag::Link,
            "img" => Tag::Image,
            "header" => Tag::Header,
            "indent" => Tag::Indent,
            "left" => Tag::Left,
            "center" => Tag::Center,
            "right" => Tag::Right,
            "justify" => Tag::Justify,
            _ => return None,
        };
        Some(tag)
    }

    /// Tag name as written in markup.
    pub fn name(&self) -> &'static str {
        match self {
            Tag::Bold => "b",
            Tag::Italic => "i",
            Tag::Strike => "s",
            Tag::Underline => "u",
            Tag::Font => "font",
            Tag::Size => "size",
            Tag::Color => "color",
            Tag::Link => "link",
            Tag::Image => "img",
            Tag::Header => "header",
            Tag::Indent => "indent",
            Tag::Left => "left",
            Tag::Center => "center",
            Tag::Right => "right",
            Tag::Justify => "justify",
        }
    }

    /// The attribute this tag opens and closes. Alignment tags alias `align`.
    pub fn target(&self) -> Target {
        match self {
            Tag::Bold => Target::Inline(InlineAttr::Bold),
            Tag::Italic => Target::Inline(InlineAttr::Italic),
            Tag::Strike => Target::Inline(InlineAttr::Strike),
            Tag::Underline => Target::Inline(InlineAttr::Underline),
            Tag::Font => Target::Inline(InlineAttr::Font),
            Tag::Size => Target::Inline(InlineAttr::Size),
            Tag::Color => Target::Inline(InlineAttr::Color),
            Tag::Link => Target::Inline(InlineAttr::Link),
            Tag::Image => Target::Embed,
            Tag::Header => Target::Line(LineAttr::Header),
            Tag::Indent => Target::Line(LineAttr::Indent),
            Tag::Left | Tag::Center | Tag::Right | Tag::Justify => Target::Line(LineAttr::Align),
        }
    }

    pub fn scope(&self) -> Scope {
        match self.target() {
            Target::Line(_) => Scope::Line,
            Target::Inline(_) | Target::Embed => Scope::Run,
        }
    }

    pub fn content_policy(&self) -> ContentPolicy {
        match self {
            Tag::Image => ContentPolicy::Raw,
            _ => ContentPolicy::Markup,
        }
    }

    /// The alignment an alias tag selects.
    pub fn alignment(&self) -> Option<Alignment> {
        match self {
            Tag::Left => Some(Alignment::Left),
            Tag::Center => Some(Alignment::Center),
            Tag::Right => Some(Alignment::Right),
            Tag::Justify => Some(Alignment::Justify),
            _ => None,
        }
    }
}
