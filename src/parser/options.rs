//! Parsing options and configuration.

/// Options for structuring resume text.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Error handling mode
    pub error_mode: ErrorMode,

    /// Normalize input (NFC, strip BOM and U+FFFD) before structuring
    pub normalize_unicode: bool,

    /// Whether batch structuring runs on the rayon pool
    pub parallel: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable strict mode (reject orphan bullets, orphan sub-headings, repeated titles).
    pub fn strict(mut self) -> Self {
        self.error_mode = ErrorMode::Strict;
        self
    }

    /// Enable or disable input normalization.
    pub fn with_normalization(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::Lenient,
            normalize_unicode: false,
            parallel: true,
        }
    }
}

/// Error handling mode during structuring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail on the first error-severity diagnostic
    Strict,
    /// Drop malformed lines and continue
    #[default]
    Lenient,
}
