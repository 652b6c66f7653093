//! Content statistics for a document.

use crate::model::{Document, Insert};
use serde::{Deserialize, Serialize};

/// Counts collected from a document's lines and runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStats {
    /// Number of lines
    pub line_count: u32,

    /// Number of text runs
    pub run_count: u32,

    /// Number of embeds
    pub embed_count: u32,

    /// Number of lines carrying a header attribute
    pub heading_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl DocumentStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect statistics for a document.
    pub fn from_document(doc: &Document) -> Self {
        let mut stats = Self::new();
        for line in doc.lines() {
            stats.line_count += 1;
            if line.attributes.header.is_some() {
                stats.heading_count += 1;
            }
            for run in &line.segments {
                match &run.insert {
                    Insert::Text(text) => {
                        stats.run_count += 1;
                        stats.count_text(text);
                    }
                    Insert::Embed(_) => stats.embed_count += 1,
                }
            }
        }
        stats
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &DocumentStats) {
        self.line_count += other.line_count;
        self.run_count += other.run_count;
        self.embed_count += other.embed_count;
        self.heading_count += other.heading_count;
        self.word_count += other.word_count;
        self.char_count += other.char_count;
    }
}
