//! Attribute differ: the tag edits that turn one run's attributes into the next.

use crate::markup::escape;
use crate::model::{AttrValue, Attributes, InlineAttr};
use std::fmt;

/// A single tag to emit between two runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagEdit {
    /// Open a tag, carrying the attribute's value
    Open(InlineAttr, AttrValue),
    /// Close a tag
    Close(InlineAttr),
}

impl TagEdit {
    /// Apply this edit to the stack of currently open tags.
    pub fn apply(&self, open: &mut OpenTags) {
        match self {
            TagEdit::Open(attr, value) => open.push(*attr, value.clone()),
            TagEdit::Close(attr) => open.close(*attr),
        }
    }
}

impl fmt::Display for TagEdit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagEdit::Open(attr, _) if attr.is_flag() => write!(f, "[{}]", attr.tag_name()),
            TagEdit::Open(attr, value) => {
                write!(f, "[{}={}]", attr.tag_name(), escape(&value.to_string()))
            }
            TagEdit::Close(attr) => write!(f, "[/{}]", attr.tag_name()),
        }
    }
}

/// Inline tags open in the output, bottom of the stack first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenTags(Vec<(InlineAttr, AttrValue)>);

impl OpenTags {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a newly opened tag.
    pub fn push(&mut self, attr: InlineAttr, value: AttrValue) {
        self.0.push((attr, value));
    }

    /// Remove the innermost open tag for `attr`.
    pub fn close(&mut self, attr: InlineAttr) {
        if let Some(index) = self.0.iter().rposition(|(a, _)| *a == attr) {
            self.0.remove(index);
        }
    }

    /// Check if no tags are open.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of open tags.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate from the outermost tag inwards.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (InlineAttr, &AttrValue)> + '_ {
        self.0.iter().map(|(attr, value)| (*attr, value))
    }
}

/// Compute the edits that turn the `open` tags into the styles of `next`.
///
/// Tags close innermost first. Closing a tag also closes every tag opened
/// after it; those still wanted by `next` are reopened in their previous
/// order, so output is always well nested. Tags new to `next` open last in
/// natural key order. Embed-only attributes (`width`, `height`) are not text
/// styles and are ignored.
pub fn diff_attributes(open: &OpenTags, next: &Attributes) -> Vec<TagEdit> {
    let wanted = |attr: InlineAttr, value: &AttrValue| {
        attr.is_text_style() && active_value(next, attr) == Some(value)
    };

    let stack = &open.0;
    let keep = stack
        .iter()
        .position(|(attr, value)| !wanted(*attr, value))
        .unwrap_or(stack.len());

    let mut edits: Vec<TagEdit> = stack[keep..]
        .iter()
        .rev()
        .map(|(attr, _)| TagEdit::Close(*attr))
        .collect();

    let reopened: Vec<&(InlineAttr, AttrValue)> = stack[keep..]
        .iter()
        .filter(|(attr, value)| wanted(*attr, value))
        .collect();
    edits.extend(
        reopened
            .iter()
            .map(|(attr, value)| TagEdit::Open(*attr, value.clone())),
    );

    let still_open = |attr: InlineAttr| {
        stack[..keep].iter().any(|(a, _)| *a == attr) || reopened.iter().any(|(a, _)| *a == attr)
    };
    edits.extend(
        next.active()
            .filter(|(attr, _)| attr.is_text_style() && !still_open(*attr))
            .map(|(attr, value)| TagEdit::Open(attr, value.clone())),
    );

    edits
}

fn active_value(attrs: &Attributes, attr: InlineAttr) -> Option<&AttrValue> {
    attrs.get(attr).filter(|v| v.is_set())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn opened(attrs: &[(InlineAttr, AttrValue)]) -> OpenTags {
        let mut open = OpenTags::new();
        for (attr, value) in attrs {
            open.push(*attr, value.clone());
        }
        open
    }

    #[test]
    fn test_no_change() {
        let open = opened(&[
            (InlineAttr::Color, AttrValue::text("red")),
            (InlineAttr::Bold, AttrValue::Flag(true)),
        ]);
        let next = Attributes::new()
            .with(InlineAttr::Bold, true)
            .with(InlineAttr::Color, "red");
        assert!(diff_attributes(&open, &next).is_empty());
    }

    #[test]
    fn test_open_in_natural_order() {
        let next = Attributes::new()
            .with(InlineAttr::Link, "http://x")
            .with(InlineAttr::Bold, true);
        assert_eq!(
            diff_attributes(&OpenTags::new(), &next),
            vec![
                TagEdit::Open(InlineAttr::Bold, AttrValue::Flag(true)),
                TagEdit::Open(InlineAttr::Link, AttrValue::text("http://x")),
            ]
        );
    }

    #[test]
    fn test_close_innermost_first() {
        // Bold was opened inside the link, so it closes before the link.
        let open = opened(&[
            (InlineAttr::Link, AttrValue::text("u")),
            (InlineAttr::Bold, AttrValue::Flag(true)),
        ]);
        assert_eq!(
            diff_attributes(&open, &Attributes::new()),
            vec![
                TagEdit::Close(InlineAttr::Bold),
                TagEdit::Close(InlineAttr::Link),
            ]
        );
    }

    #[test]
    fn test_closing_outer_tag_reopens_inner() {
        let open = opened(&[
            (InlineAttr::Color, AttrValue::text("red")),
            (InlineAttr::Bold, AttrValue::Flag(true)),
        ]);
        let next = Attributes::new().with(InlineAttr::Bold, true);
        assert_eq!(
            diff_attributes(&open, &next),
            vec![
                TagEdit::Close(InlineAttr::Bold),
                TagEdit::Close(InlineAttr::Color),
                TagEdit::Open(InlineAttr::Bold, AttrValue::Flag(true)),
            ]
        );
    }

    #[test]
    fn test_value_change_closes_then_opens() {
        let open = opened(&[
            (InlineAttr::Italic, AttrValue::Flag(true)),
            (InlineAttr::Color, AttrValue::text("red")),
        ]);
        let next = Attributes::new()
            .with(InlineAttr::Italic, true)
            .with(InlineAttr::Color, "blue");
        assert_eq!(
            diff_attributes(&open, &next),
            vec![
                TagEdit::Close(InlineAttr::Color),
                TagEdit::Open(InlineAttr::Color, AttrValue::text("blue")),
            ]
        );
    }

    #[test]
    fn test_false_flags_are_absent() {
        let open = opened(&[(InlineAttr::Bold, AttrValue::Flag(true))]);
        let next = Attributes::new().with(InlineAttr::Bold, false);
        assert_eq!(
            diff_attributes(&open, &next),
            vec![TagEdit::Close(InlineAttr::Bold)]
        );
    }

    #[test]
    fn test_embed_params_are_ignored() {
        let next = Attributes::new().with(InlineAttr::Width, "100");
        assert!(diff_attributes(&OpenTags::new(), &next).is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            TagEdit::Open(InlineAttr::Bold, AttrValue::Flag(true)).to_string(),
            "[b]"
        );
        assert_eq!(
            TagEdit::Open(InlineAttr::Link, AttrValue::text("http://x?a=1&b=[2]")).to_string(),
            "[link=http://x?a=1&amp;b=&lsqb;2&rsqb;]"
        );
        assert_eq!(TagEdit::Close(InlineAttr::Strike).to_string(), "[/s]");
    }

    #[test]
    fn test_apply() {
        let mut open = OpenTags::new();
        TagEdit::Open(InlineAttr::Size, AttrValue::text("12")).apply(&mut open);
        TagEdit::Open(InlineAttr::Bold, AttrValue::Flag(true)).apply(&mut open);
        assert_eq!(open.len(), 2);
        assert_eq!(open.iter().next().map(|(attr, _)| attr), Some(InlineAttr::Size));

        TagEdit::Close(InlineAttr::Size).apply(&mut open);
        assert_eq!(open.len(), 1);
        TagEdit::Close(InlineAttr::Bold).apply(&mut open);
        assert!(open.is_empty());
    }
}
