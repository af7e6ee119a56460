//! Evaluation context for tracking state during recursive evaluation.

use crate::interpreter::FormatError;

/// Default bound on nested template evaluation.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Evaluation context carrying state through recursive evaluation.
///
/// The context tracks:
/// - Recursion depth, for limiting runaway nesting
/// - The ambient list index stack, innermost iteration last
pub struct EvalContext {
    /// Current recursion depth.
    depth: usize,
    /// Maximum allowed depth.
    max_depth: usize,
    /// Indices of the list iterations currently in progress.
    indices: Vec<usize>,
}

impl EvalContext {
    /// Create a context with the default depth limit.
    pub fn new() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }

    /// Create context with custom max depth.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            depth: 0,
            max_depth,
            indices: Vec::new(),
        }
    }

    /// Enter a nested template.
    ///
    /// Returns error if the maximum depth is exceeded.
    pub fn enter(&mut self) -> Result<(), FormatError> {
        if self.depth >= self.max_depth {
            return Err(FormatError::MaxDepthExceeded);
        }
        self.depth += 1;
        Ok(())
    }

    /// Leave a nested template.
    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Get current recursion depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn push_index(&mut self, index: usize) {
        self.indices.push(index);
    }

    pub fn pop_index(&mut self) {
        self.indices.pop();
    }

    /// Index of the innermost list item being formatted, if any.
    pub fn current_index(&self) -> Option<usize> {
        self.indices.last().copied()
    }
}

impl Default for EvalContext {
    fn default() -> Self {
        Self::new()
    }
}
