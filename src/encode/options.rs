//! Encoding options.

/// Options for encoding a document as BBCode.
#[derive(Debug, Clone)]
pub struct EncodeOptions {
    /// Terminate the last line with a newline
    pub trailing_newline: bool,
}

impl EncodeOptions {
    /// Create new encode options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the final line terminator.
    pub fn with_trailing_newline(mut self, trailing: bool) -> Self {
        self.trailing_newline = trailing;
        self
    }
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            trailing_newline: true,
        }
    }
}
