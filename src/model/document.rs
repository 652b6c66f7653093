//! Document-level types.

use super::{Insert, LineAttributes, Run};
use serde::{Deserialize, Serialize};

/// A rich-text document: lines in vertical reading order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    /// Lines of the document
    pub lines: Vec<Line>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Create a document from lines.
    pub fn from_lines(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    /// Add a line to the document.
    pub fn push_line(&mut self, line: Line) {
        self.lines.push(line);
    }

    /// Get the number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Iterate over the lines.
    pub fn lines(&self) -> std::slice::Iter<'_, Line> {
        self.lines.iter()
    }

    /// Check if the document has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get plain text content of the entire document, one line per line.
    pub fn plain_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// One visual line: line-level attributes plus its runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Line-level attributes
    #[serde(default, skip_serializing_if = "LineAttributes::is_empty")]
    pub attributes: LineAttributes,

    /// Runs in the line
    #[serde(default)]
    pub segments: Vec<Run>,
}

impl Line {
    /// Create a new empty line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty line with attributes.
    pub fn with_attributes(attributes: LineAttributes) -> Self {
        Self {
            attributes,
            segments: Vec::new(),
        }
    }

    /// Builder-style run append.
    pub fn with_run(mut self, run: Run) -> Self {
        self.segments.push(run);
        self
    }

    /// Append a run.
    pub fn push(&mut self, run: Run) {
        self.segments.push(run);
    }

    /// Check if the line has no runs.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Text of the line, embeds omitted.
    pub fn plain_text(&self) -> String {
        self.segments
            .iter()
            .filter_map(|run| run.as_text())
            .collect()
    }

    /// Partition the runs into consecutive text groups and single embeds.
    pub fn groups(&self) -> Vec<RunGroup<'_>> {
        let mut groups = Vec::new();
        let mut pending: Vec<&Run> = Vec::new();

        for run in &self.segments {
            match run.insert {
                Insert::Text(_) => pending.push(run),
                Insert::Embed(_) => {
                    if !pending.is_empty() {
                        groups.push(RunGroup::Text(std::mem::take(&mut pending)));
                    }
                    groups.push(RunGroup::Embed(run));
                }
            }
        }
        if !pending.is_empty() {
            groups.push(RunGroup::Text(pending));
        }

        groups
    }
}

/// A group of runs as consumed by a rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunGroup<'a> {
    /// Consecutive text runs
    Text(Vec<&'a Run>),
    /// A single embed run
    Embed(&'a Run),
}
