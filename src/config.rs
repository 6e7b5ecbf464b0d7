//! Scanner configuration

/// Options for a single scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Label for the input, used when reporting errors (default: "input")
    pub name: String,
    /// Emit `Comment` tokens; when false comments are skipped like
    /// whitespace (default: true)
    pub keep_comments: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            name: "input".to_string(),
            keep_comments: true,
        }
    }
}

impl ScanOptions {
    /// Default options with the given label
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets whether comments are emitted
    pub fn keep_comments(mut self, keep: bool) -> Self {
        self.keep_comments = keep;
        self
    }
}
