//! Decoded symbol sequence for one autoregressive pass.

use crate::defaults;
use std::fmt;

/// The growing symbol sequence of one decode pass.
///
/// Conceptually starts with the reserved start marker; only accepted
/// symbols are stored. The rendered form includes the markers
/// (e.g. `"<cab>"`), matching what sequence models are trained on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeContext {
    accepted: Vec<char>,
}

impl DecodeContext {
    /// Creates a context holding only the start marker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an accepted symbol.
    pub fn push(&mut self, symbol: char) {
        self.accepted.push(symbol);
    }

    /// Accepted symbols in order, excluding the start marker.
    pub fn accepted(&self) -> &[char] {
        &self.accepted
    }

    /// Number of accepted symbols (the start marker does not count).
    pub fn len(&self) -> usize {
        self.accepted.len()
    }

    /// Returns true if no symbol has been accepted yet.
    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty()
    }

    /// Returns true if the sequence ends with the reserved end marker.
    pub fn is_terminated(&self) -> bool {
        self.accepted.last() == Some(&defaults::END_MARKER)
    }

    /// The decoded word without the reserved markers.
    pub fn text(&self) -> String {
        self.accepted
            .iter()
            .filter(|&&c| c != defaults::END_MARKER)
            .collect()
    }
}

impl fmt::Display for DecodeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", defaults::START_MARKER)?;
        for c in &self.accepted {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_context_renders_start_marker_only() {
        let ctx = DecodeContext::new();
        assert_eq!(ctx.to_string(), "<");
        assert_eq!(ctx.len(), 0);
        assert!(!ctx.is_terminated());
    }

    #[test]
    fn test_push_grows_rendered_form() {
        let mut ctx = DecodeContext::new();
        ctx.push('c');
        ctx.push('a');
        ctx.push('b');
        assert_eq!(ctx.to_string(), "<cab");
        assert_eq!(ctx.text(), "cab");
    }

    #[test]
    fn test_end_marker_terminates() {
        let mut ctx = DecodeContext::new();
        ctx.push('h');
        ctx.push('i');
        ctx.push('>');
        assert!(ctx.is_terminated());
        assert_eq!(ctx.to_string(), "<hi>");
        assert_eq!(ctx.text(), "hi");
    }
}
