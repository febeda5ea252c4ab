//! # Node Classification
//!
//! Answers the questions every converter asks of a CST node: is it a
//! terminal, what text does it carry, and is it a particular token.
//!
//! Operator tokens may arrive directly as a terminal child or wrapped in a
//! single-child rule such as `AssignmentOperator` or `LetOrConst`. The
//! `token_*` helpers look through such wrappers so converters can check
//! both shapes with one call.
//!
//! ```text
//! AdditiveExpression            AssignmentExpression
//! ├── a                         ├── x
//! ├── "+"        <- terminal    ├── AssignmentOperator  <- wrapper
//! └── b                         │   └── "+="
//!                               └── 1
//! ```

use crate::cst::CstNode;
use crate::kind::NodeKind;

/// Reserved words of ES2025 (including the strict-mode and literal words).
pub const RESERVED_WORDS: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
    "if", "import", "in", "instanceof", "new", "null", "return", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

impl CstNode {
    /// Check if this node is a terminal: text and no children.
    pub fn is_terminal(&self) -> bool {
        self.value.is_some() && self.children.is_empty()
    }

    /// Returns the text of a terminal node. Rule nodes have none.
    pub fn terminal_text(&self) -> Option<&str> {
        if self.is_terminal() {
            self.value.as_deref()
        } else {
            None
        }
    }

    /// Returns the token text of this node, looking through chains of
    /// single-child wrapper rules.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use ecma_cst::{CstBuilder, NodeKind};
    ///
    /// let b = CstBuilder::new();
    /// let op = b.rule(NodeKind::AssignmentOperator, vec![b.tok("+=")]);
    /// assert_eq!(op.token_text(), Some("+="));
    /// ```
    pub fn token_text(&self) -> Option<&str> {
        let mut node = self;
        loop {
            if let Some(text) = node.terminal_text() {
                return Some(text);
            }
            node = node.only_child()?;
        }
    }

    /// Check if this node is (or wraps) the token with the given text.
    pub fn is_token(&self, text: &str) -> bool {
        self.token_text() == Some(text)
    }

    /// Check if this node is (or wraps) any of the given tokens.
    pub fn is_any_token(&self, texts: &[&str]) -> bool {
        self.token_text().is_some_and(|t| texts.contains(&t))
    }

    /// Finds the first child that is the given token.
    pub fn find_token(&self, text: &str) -> Option<&CstNode> {
        self.children.iter().find(|c| c.is_token(text))
    }

    /// Check if a direct child is the given token.
    pub fn has_token(&self, text: &str) -> bool {
        self.find_token(text).is_some()
    }

    /// Child rule nodes, skipping terminals.
    pub fn rule_children(&self) -> impl Iterator<Item = &CstNode> {
        self.children.iter().filter(|c| !c.is_terminal())
    }
}

/// Classifies a terminal by its text when its producer gave it a name
/// outside the grammar (`"Token"`, `"Punct"`, …).
///
/// ## Returns
///
/// `Keyword` for reserved words, `Punctuator` for punctuation,
/// `Comment` for `//` or `/*` text, and `IdentifierName` otherwise.
///
/// ## Example
///
/// ```rust
/// use ecma_cst::{classify_terminal, NodeKind};
///
/// assert_eq!(classify_terminal("=>"), NodeKind::Punctuator);
/// assert_eq!(classify_terminal("while"), NodeKind::Keyword);
/// assert_eq!(classify_terminal("of"), NodeKind::IdentifierName);
/// ```
pub fn classify_terminal(text: &str) -> NodeKind {
    if text.starts_with("//") || text.starts_with("/*") {
        return NodeKind::Comment;
    }
    if RESERVED_WORDS.contains(&text) {
        return NodeKind::Keyword;
    }
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c.is_ascii_digit() => NodeKind::NumericLiteral,
        Some('.') if chars.next().is_some_and(|c| c.is_ascii_digit()) => NodeKind::NumericLiteral,
        Some('"' | '\'') => NodeKind::StringLiteral,
        Some('`') => NodeKind::NoSubstitutionTemplate,
        Some('#') => NodeKind::PrivateIdentifier,
        Some(c) if c == '$' || c == '_' || c == '\\' || c.is_alphabetic() => NodeKind::IdentifierName,
        _ => NodeKind::Punctuator,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::SourceLocation;

    fn tok(text: &str) -> CstNode {
        CstNode::terminal(classify_terminal(text), text, SourceLocation::default())
    }

    #[test]
    fn test_terminal_detection() {
        let t = tok("(");
        assert!(t.is_terminal());
        let r = CstNode::rule(NodeKind::Arguments, vec![tok("("), tok(")")]);
        assert!(!r.is_terminal());
        assert_eq!(r.terminal_text(), None);
        assert_eq!(r.token_text(), None);
    }

    #[test]
    fn test_token_text_looks_through_nested_wrappers() {
        let inner = CstNode::rule(NodeKind::MultiplicativeOperator, vec![tok("*")]);
        let outer = CstNode::rule(NodeKind::Expression, vec![inner]);
        assert!(outer.is_token("*"));
        assert!(outer.is_any_token(&["/", "*"]));
        assert!(!outer.is_token("/"));
    }

    #[test]
    fn test_find_token() {
        let node = CstNode::rule(NodeKind::Arguments, vec![tok("("), tok("a"), tok(")")]);
        assert!(node.has_token(")"));
        assert!(!node.has_token(","));
    }

    #[test]
    fn test_classify_terminal() {
        assert_eq!(classify_terminal("..."), NodeKind::Punctuator);
        assert_eq!(classify_terminal("?."), NodeKind::Punctuator);
        assert_eq!(classify_terminal("class"), NodeKind::Keyword);
        assert_eq!(classify_terminal("async"), NodeKind::IdentifierName);
        assert_eq!(classify_terminal("0x1F"), NodeKind::NumericLiteral);
        assert_eq!(classify_terminal(".5"), NodeKind::NumericLiteral);
        assert_eq!(classify_terminal("'s'"), NodeKind::StringLiteral);
        assert_eq!(classify_terminal("#priv"), NodeKind::PrivateIdentifier);
        assert_eq!(classify_terminal("/* c */"), NodeKind::Comment);
    }
}
