//! Plain text rendering for documents.

use crate::model::Document;

/// Convert a document to plain text: markup dropped, embeds omitted.
pub fn to_text(doc: &Document) -> String {
    doc.plain_text()
}
