//! Limits applied to each render request

use crate::constants::{
    DEFAULT_MAX_DEPTH, DEFAULT_MAX_SEQUENCE_LEN, DEFAULT_MAX_STRING_LEN, DEFAULT_MAX_VISITS,
};

/// Resource limits for one render request.
///
/// The engine starts every request (a top-level render or a child expansion)
/// with a fresh budget built from these limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Maximum nesting of eager renderings
    pub max_depth: usize,
    /// Maximum number of values rendered
    pub max_visits: usize,
    /// Maximum decoded string length
    pub max_string_len: usize,
    /// Maximum elements shown for a sequence or tree
    pub max_sequence_len: usize,
}

impl RenderConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_visits(mut self, max_visits: usize) -> Self {
        self.max_visits = max_visits;
        self
    }

    pub fn with_max_string_len(mut self, max_string_len: usize) -> Self {
        self.max_string_len = max_string_len;
        self
    }

    pub fn with_max_sequence_len(mut self, max_sequence_len: usize) -> Self {
        self.max_sequence_len = max_sequence_len;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            max_depth: DEFAULT_MAX_DEPTH,
            max_visits: DEFAULT_MAX_VISITS,
            max_string_len: DEFAULT_MAX_STRING_LEN,
            max_sequence_len: DEFAULT_MAX_SEQUENCE_LEN,
        }
    }
}
