//! Scan configuration.

/// Options for a [`Scanner`](crate::Scanner).
///
/// The defaults record automaton tags on every token and report block
/// comments left open at end of input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScanConfig {
    /// Record the legacy automaton tag (`q0`..`q12`) on each token.
    pub automaton_tags: bool,
    /// Report a block comment still open at end of input. When off, the
    /// unfinished comment vanishes without a token or a diagnostic.
    pub report_unterminated_comments: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            automaton_tags: true,
            report_unterminated_comments: true,
        }
    }
}

impl ScanConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_automaton_tags(mut self, enabled: bool) -> Self {
        self.automaton_tags = enabled;
        self
    }

    #[must_use]
    pub fn with_unterminated_comment_reports(mut self, enabled: bool) -> Self {
        self.report_unterminated_comments = enabled;
        self
    }
}
