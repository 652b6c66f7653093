//! JSON rendering and parsing of Delta documents.

use crate::error::Result;
use crate::model::Document;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a document to JSON.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc)?,
        JsonFormat::Compact => serde_json::to_string(doc)?,
    };
    Ok(json)
}

/// Parse a document from Delta JSON.
pub fn from_json(json: &str) -> Result<Document> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::{InlineAttr, Line, Run};

    fn sample() -> Document {
        Document::from_lines(vec![Line::new()
            .with_run(Run::text("Hello").with_attr(InlineAttr::Bold, true))
            .with_run(Run::image("http://x/y.png"))])
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"bold\": true"));
        assert!(json.contains("\"image\": \"http://x/y.png\""));
        assert!(json.contains('\n')); // Pretty has newlines
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n')); // Compact has no newlines
    }

    #[test]
    fn test_from_json() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        assert_eq!(from_json(&json).unwrap(), sample());
    }

    #[test]
    fn test_from_json_minimal_shape() {
        let doc = from_json(r#"[{"segments":[{"insert":"hi"}]},{}]"#).unwrap();
        assert_eq!(doc.line_count(), 2);
        assert_eq!(doc.lines[0].segments[0].as_text(), Some("hi"));
        assert!(doc.lines[1].is_empty());
    }

    #[test]
    fn test_from_json_rejects_unknown_embed() {
        let result = from_json(r#"[{"segments":[{"insert":{"video":"v.mp4"}}]}]"#);
        assert!(matches!(result, Err(Error::Json(_))));
    }
}
