//! # Source Locations
//!
//! Positions and spans shared by CST and AST nodes. Every AST node copies
//! the `SourceLocation` of the CST node or token it was derived from.
//!
//! ## Usage
//!
//! ```rust
//! use ecma_cst::{Position, SourceLocation};
//!
//! let loc = SourceLocation::new(Position::new(1, 0, 0), Position::new(1, 4, 4));
//! assert_eq!(loc.len(), 4);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in the source text.
///
/// # Fields
///
/// - `line`: 1-based line number
/// - `column`: 0-based column within the line
/// - `offset`: 0-based byte offset from the start of the source
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    /// 1-based line number.
    pub line: usize,
    /// 0-based column.
    pub column: usize,
    /// 0-based byte offset. Producers that only track line/column may omit it.
    #[serde(default)]
    pub offset: usize,
}

impl Position {
    /// Creates a new position.
    #[inline]
    pub const fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A range in the source code, start inclusive and end exclusive.
///
/// # Example
///
/// ```rust
/// use ecma_cst::{Position, SourceLocation};
///
/// let a = SourceLocation::new(Position::new(1, 0, 0), Position::new(1, 1, 1));
/// let b = SourceLocation::new(Position::new(1, 4, 4), Position::new(1, 5, 5));
/// let merged = a.merge(&b);
/// assert_eq!(merged.start.offset, 0);
/// assert_eq!(merged.end.offset, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SourceLocation {
    /// Where the node starts.
    pub start: Position,
    /// Where the node ends.
    pub end: Position,
}

impl SourceLocation {
    /// Creates a new location from its two endpoints.
    #[inline]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Returns the length of the location in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.offset.saturating_sub(self.start.offset)
    }

    /// Returns true if the location covers no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start.offset >= self.end.offset
    }

    /// Creates a location that encompasses both this location and another.
    pub fn merge(&self, other: &SourceLocation) -> SourceLocation {
        SourceLocation {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Checks if this location contains a byte offset.
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start.offset && offset < self.end.offset
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Anything that knows where it came from in the source.
pub trait Located {
    /// Returns the source location.
    fn loc(&self) -> SourceLocation;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(start: usize, end: usize) -> SourceLocation {
        SourceLocation::new(Position::new(1, start, start), Position::new(1, end, end))
    }

    #[test]
    fn test_len_and_empty() {
        assert_eq!(loc(5, 15).len(), 10);
        assert!(loc(5, 5).is_empty());
        assert!(loc(10, 5).is_empty());
    }

    #[test]
    fn test_merge_disjoint() {
        let merged = loc(10, 15).merge(&loc(0, 5));
        assert_eq!(merged.start.offset, 0);
        assert_eq!(merged.end.offset, 15);
    }

    #[test]
    fn test_contains_is_end_exclusive() {
        let span = loc(5, 10);
        assert!(span.contains(5));
        assert!(!span.contains(10));
    }

    #[test]
    fn test_display() {
        assert_eq!(loc(2, 4).to_string(), "1:2-1:4");
    }

    #[test]
    fn test_offset_defaults_when_missing() {
        let pos: Position = serde_json::from_str(r#"{"line": 3, "column": 7}"#).unwrap();
        assert_eq!(pos, Position::new(3, 7, 0));
    }
}
