//! Source positions for declaration tracking
//!
//! The splice engine reasons about whole source lines, so positions are
//! expressed as 1-indexed line/column pairs rather than byte offsets.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in the source text, 1-indexed for both line and column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based)
    pub column: usize,
}

impl Position {
    /// Create a new position
    #[inline]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The source extent of a declaration
///
/// `stop.line` is the last line occupied by the declaration. All
/// declarations handled by the splice engine occupy a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// First position covered (inclusive)
    pub start: Position,
    /// Last position covered (inclusive)
    pub stop: Position,
}

impl Span {
    /// Create a new span from start and stop positions
    #[inline]
    pub const fn new(start: Position, stop: Position) -> Self {
        Self { start, stop }
    }

    /// Create a span covering part of a single line
    #[inline]
    pub const fn single_line(line: usize, start_column: usize, stop_column: usize) -> Self {
        Self {
            start: Position::new(line, start_column),
            stop: Position::new(line, stop_column),
        }
    }

    /// Check whether the span starts and stops on the same line
    #[inline]
    pub const fn is_single_line(&self) -> bool {
        self.start.line == self.stop.line
    }

    /// Number of lines covered by the span
    #[inline]
    pub const fn line_count(&self) -> usize {
        self.stop.line - self.start.line + 1
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.stop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_span() {
        let span = Span::single_line(4, 1, 52);
        assert!(span.is_single_line());
        assert_eq!(span.line_count(), 1);
        assert_eq!(span.start, Position::new(4, 1));
        assert_eq!(span.stop, Position::new(4, 52));
    }

    #[test]
    fn test_span_display() {
        let span = Span::single_line(2, 3, 10);
        assert_eq!(span.to_string(), "2:3..2:10");
    }

    #[test]
    fn test_multi_line_count() {
        let span = Span::new(Position::new(2, 1), Position::new(4, 7));
        assert!(!span.is_single_line());
        assert_eq!(span.line_count(), 3);
    }
}
