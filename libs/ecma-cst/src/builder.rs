//! # CST Builder
//!
//! Assembles CSTs by hand, mostly for tests and for producers that build
//! trees in Rust rather than JSON. Terminals are laid out left to right on
//! a virtual source line, one space apart, so every node gets a real and
//! distinct location.
//!
//! ## Example
//!
//! ```rust
//! use ecma_cst::{CstBuilder, NodeKind};
//!
//! let b = CstBuilder::new();
//! // a - b
//! let expr = b.rule(
//!     NodeKind::AdditiveExpression,
//!     vec![b.ident("a"), b.tok("-"), b.ident("b")],
//! );
//! assert_eq!(expr.loc.start.column, 0);
//! assert_eq!(expr.loc.end.column, 5);
//! ```

use crate::classify::classify_terminal;
use crate::cst::CstNode;
use crate::kind::NodeKind;
use crate::span::{Position, SourceLocation};
use std::cell::Cell;

/// Hands out terminals at increasing source positions.
#[derive(Debug)]
pub struct CstBuilder {
    cursor: Cell<Position>,
}

impl CstBuilder {
    /// Creates a builder positioned at line 1, column 0.
    pub fn new() -> Self {
        Self {
            cursor: Cell::new(Position::new(1, 0, 0)),
        }
    }

    /// Creates a terminal of an explicit kind.
    pub fn term(&self, kind: NodeKind, text: &str) -> CstNode {
        let start = self.cursor.get();
        let width = text.chars().count();
        let end = Position::new(start.line, start.column + width, start.offset + text.len());
        self.cursor
            .set(Position::new(end.line, end.column + 1, end.offset + 1));
        CstNode::terminal(kind, text, SourceLocation::new(start, end))
    }

    /// Creates a keyword, punctuator or identifier terminal, classified by text.
    pub fn tok(&self, text: &str) -> CstNode {
        self.term(classify_terminal(text), text)
    }

    /// Creates an `IdentifierName` terminal, even for reserved words.
    pub fn ident(&self, name: &str) -> CstNode {
        self.term(NodeKind::IdentifierName, name)
    }

    /// Creates a `NumericLiteral` terminal.
    pub fn num(&self, raw: &str) -> CstNode {
        self.term(NodeKind::NumericLiteral, raw)
    }

    /// Creates a `StringLiteral` terminal; `raw` includes the quotes.
    pub fn string(&self, raw: &str) -> CstNode {
        self.term(NodeKind::StringLiteral, raw)
    }

    /// Creates a comment terminal.
    pub fn comment(&self, raw: &str) -> CstNode {
        self.term(NodeKind::Comment, raw)
    }

    /// Creates a rule node spanning its children.
    pub fn rule(&self, kind: NodeKind, children: Vec<CstNode>) -> CstNode {
        CstNode::rule(kind, children)
    }

    /// Moves the cursor to the start of the next line.
    pub fn newline(&self) {
        let pos = self.cursor.get();
        self.cursor.set(Position::new(pos.line + 1, 0, pos.offset + 1));
    }
}

impl Default for CstBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminals_get_distinct_locations() {
        let b = CstBuilder::new();
        let a = b.ident("foo");
        let dot = b.tok(".");
        assert_eq!(a.loc.start.offset, 0);
        assert_eq!(a.loc.end.offset, 3);
        assert_eq!(dot.loc.start.offset, 4);
        assert_eq!(dot.kind, NodeKind::Punctuator);
    }

    #[test]
    fn test_newline_advances_line() {
        let b = CstBuilder::new();
        b.tok(";");
        b.newline();
        let t = b.tok(";");
        assert_eq!(t.loc.start.line, 2);
        assert_eq!(t.loc.start.column, 0);
    }

    #[test]
    fn test_tok_classifies_keywords() {
        let b = CstBuilder::new();
        assert_eq!(b.tok("return").kind, NodeKind::Keyword);
        assert_eq!(b.ident("return").kind, NodeKind::IdentifierName);
    }
}
