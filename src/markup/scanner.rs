//! Tag scanner: finds the next tag in a line and splits off the literal prefix.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Whether a matched tag opens or closes an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Open,
    Close,
}

/// A tag found by [`scan`], borrowing from the scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagMatch<'a> {
    /// Literal text before the tag (possibly empty)
    pub prefix: &'a str,

    /// The full tag text as written, e.g. `[color=red]`
    pub raw: &'a str,

    /// Text after the tag
    pub rest: &'a str,

    /// Tag name, ASCII-lowercased
    pub name: String,

    /// Open or close
    pub kind: TagKind,

    /// Parameters. The `[name=value]` shorthand is stored under `name`.
    pub attrs: BTreeMap<String, String>,
}

impl TagMatch<'_> {
    /// Check if this is an opening tag.
    pub fn is_open(&self) -> bool {
        self.kind == TagKind::Open
    }

    /// Get a parameter value.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    /// The `[name=value]` shorthand value, if present.
    pub fn value(&self) -> Option<&str> {
        self.attr(&self.name)
    }
}

fn tag_regex() -> &'static Regex {
    static TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    TAG_REGEX.get_or_init(|| {
        Regex::new(
            r"\[(?:/(?P<close>[A-Za-z][A-Za-z0-9]*)|(?P<open>[A-Za-z][A-Za-z0-9]*)(?:=(?P<value>[^\[\]]*)|(?P<params>\s[^\[\]]*))?)\]",
        )
        .expect("Invalid tag regex")
    })
}

/// Find the first tag in `text`.
///
/// Returns `None` when the remainder holds no tag syntax; the caller then
/// treats it as literal text. Malformed parameters are dropped, never fatal.
pub fn scan(text: &str) -> Option<TagMatch<'_>> {
    let caps = tag_regex().captures(text)?;
    let whole = caps.get(0)?;

    let (name, kind) = match (caps.name("close"), caps.name("open")) {
        (Some(close), _) => (close.as_str().to_ascii_lowercase(), TagKind::Close),
        (None, Some(open)) => (open.as_str().to_ascii_lowercase(), TagKind::Open),
        (None, None) => return None,
    };

    let mut attrs = BTreeMap::new();
    if let Some(value) = caps.name("value") {
        let value = strip_quotes(value.as_str().trim());
        if !value.is_empty() {
            attrs.insert(name.clone(), value.to_string());
        }
    } else if let Some(params) = caps.name("params") {
        parse_params(params.as_str(), &mut attrs);
    }

    Some(TagMatch {
        prefix: &text[..whole.start()],
        raw: whole.as_str(),
        rest: &text[whole.end()..],
        name,
        kind,
        attrs,
    })
}

/// Parse whitespace-separated `key=value` pairs, dropping malformed fragments.
fn parse_params(params: &str, attrs: &mut BTreeMap<String, String>) {
    for fragment in params.split_whitespace() {
        let Some((key, value)) = fragment.split_once('=') else {
            log::trace!("Dropping tag parameter without '=': {:?}", fragment);
            continue;
        };

        let value = strip_quotes(value);
        if !is_param_key(key) || value.is_empty() || value.contains('=') {
            log::trace!("Dropping malformed tag parameter: {:?}", fragment);
            continue;
        }

        attrs.insert(key.to_ascii_lowercase(), value.to_string());
    }
}

fn is_param_key(key: &str) -> bool {
    let mut chars = key.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
