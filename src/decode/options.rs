//! Decoding options and configuration.

/// Options for decoding BBCode into a document.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
    /// Carry attributes left open at the end of a line over to the next line
    pub persist_attributes: bool,

    /// Append text to the previous run when its attributes are identical
    pub merge_adjacent: bool,

    /// Normalize literal text to Unicode NFC
    pub normalize_unicode: bool,

    /// Decode batches on the rayon thread pool
    pub parallel: bool,
}

impl DecodeOptions {
    /// Create new decode options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable attribute persistence across lines.
    pub fn with_persist_attributes(mut self, persist: bool) -> Self {
        self.persist_attributes = persist;
        self
    }

    /// Reset both attribute scopes at every physical line.
    pub fn reset_each_line(mut self) -> Self {
        self.persist_attributes = false;
        self
    }

    /// Enable or disable merging of adjacent runs.
    pub fn with_merge_adjacent(mut self, merge: bool) -> Self {
        self.merge_adjacent = merge;
        self
    }

    /// Keep every literal fragment as its own run.
    pub fn no_merge(mut self) -> Self {
        self.merge_adjacent = false;
        self
    }

    /// Enable or disable NFC normalization of text.
    pub fn with_unicode_normalization(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }

    /// Enable or disable parallel batch decoding.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel batch decoding.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            persist_attributes: true,
            merge_adjacent: true,
            normalize_unicode: false,
            parallel: true,
        }
    }
}
