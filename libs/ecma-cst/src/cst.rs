//! # Concrete Syntax Tree
//!
//! Owned, typed CST nodes as handed to the AST converter.
//!
//! ## Architecture
//!
//! ```text
//! Grammar parser → SerializedNode (JSON) → Cst { root, comments } → ecma-ast
//! ```
//!
//! A node is either a terminal (`value` set, no children) or a rule node
//! (children, no value). Comment terminals never appear inside the tree:
//! [`Cst::new`] hoists them into [`Cst::comments`] so converters can match
//! children positionally.

use crate::kind::NodeKind;
use crate::span::{Located, SourceLocation};
use serde::Serialize;

/// A single node of the concrete syntax tree.
///
/// # Example
///
/// ```rust
/// use ecma_cst::{CstNode, NodeKind, Position, SourceLocation};
///
/// let loc = SourceLocation::new(Position::new(1, 0, 0), Position::new(1, 1, 1));
/// let x = CstNode::terminal(NodeKind::IdentifierName, "x", loc);
/// let expr = CstNode::rule(NodeKind::IdentifierReference, vec![x]);
/// assert_eq!(expr.loc, loc);
/// assert!(expr.find_child(NodeKind::IdentifierName).is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CstNode {
    /// Grammar rule or terminal kind.
    pub kind: NodeKind,
    /// Raw source text, present on terminals only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Ordered child nodes; empty for terminals.
    pub children: Vec<CstNode>,
    /// Source span covered by the node.
    pub loc: SourceLocation,
}

impl CstNode {
    /// Creates a terminal node holding raw source text.
    pub fn terminal(kind: NodeKind, value: impl Into<String>, loc: SourceLocation) -> Self {
        Self {
            kind,
            value: Some(value.into()),
            children: Vec::new(),
            loc,
        }
    }

    /// Creates a rule node whose location spans its first and last child.
    ///
    /// A rule with no children gets the default location; use
    /// [`CstNode::rule_at`] when the span is known.
    pub fn rule(kind: NodeKind, children: Vec<CstNode>) -> Self {
        let loc = match (children.first(), children.last()) {
            (Some(first), Some(last)) => first.loc.merge(&last.loc),
            _ => SourceLocation::default(),
        };
        Self {
            kind,
            value: None,
            children,
            loc,
        }
    }

    /// Creates a rule node with an explicit location.
    pub fn rule_at(kind: NodeKind, children: Vec<CstNode>, loc: SourceLocation) -> Self {
        Self {
            kind,
            value: None,
            children,
            loc,
        }
    }

    /// Finds the first child of a given kind.
    pub fn find_child(&self, kind: NodeKind) -> Option<&CstNode> {
        self.children.iter().find(|c| c.kind == kind)
    }

    /// Collects every child of a given kind.
    pub fn children_of(&self, kind: NodeKind) -> impl Iterator<Item = &CstNode> {
        self.children.iter().filter(move |c| c.kind == kind)
    }

    /// Returns the single child of a wrapper rule.
    pub fn only_child(&self) -> Option<&CstNode> {
        match self.children.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    /// Gets the terminal text, or an empty string for rule nodes.
    pub fn text_or_empty(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }

    /// Walks the subtree in pre-order.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }
}

impl Located for CstNode {
    fn loc(&self) -> SourceLocation {
        self.loc
    }
}

/// Pre-order iterator over a subtree, see [`CstNode::walk`].
pub struct Walk<'a> {
    stack: Vec<&'a CstNode>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a CstNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// A whole parsed source: the root rule and the comments found in it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cst {
    /// Root node, normally `Program`, `Script` or `Module`.
    pub root: CstNode,
    /// Comment terminals in source order.
    pub comments: Vec<CstNode>,
}

impl Cst {
    /// Wraps a root node, moving every `Comment` terminal out of the tree.
    pub fn new(mut root: CstNode) -> Self {
        let mut comments = Vec::new();
        hoist_comments(&mut root, &mut comments);
        comments.sort_by_key(|c| c.loc.start);
        Self { root, comments }
    }
}

fn hoist_comments(node: &mut CstNode, out: &mut Vec<CstNode>) {
    if node.children.iter().any(|c| c.kind == NodeKind::Comment) {
        let (found, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut node.children)
            .into_iter()
            .partition(|c| c.kind == NodeKind::Comment);
        out.extend(found);
        node.children = kept;
    }
    for child in &mut node.children {
        hoist_comments(child, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Position;

    fn at(start: usize, end: usize) -> SourceLocation {
        SourceLocation::new(Position::new(1, start, start), Position::new(1, end, end))
    }

    #[test]
    fn test_rule_location_spans_children() {
        let a = CstNode::terminal(NodeKind::IdentifierName, "a", at(0, 1));
        let plus = CstNode::terminal(NodeKind::Punctuator, "+", at(2, 3));
        let b = CstNode::terminal(NodeKind::IdentifierName, "b", at(4, 5));
        let node = CstNode::rule(NodeKind::AdditiveExpression, vec![a, plus, b]);
        assert_eq!(node.loc, at(0, 5));
        assert!(node.value.is_none());
    }

    #[test]
    fn test_only_child() {
        let a = CstNode::terminal(NodeKind::IdentifierName, "a", at(0, 1));
        let wrapper = CstNode::rule(NodeKind::IdentifierReference, vec![a.clone()]);
        assert_eq!(wrapper.only_child(), Some(&a));
        assert_eq!(a.only_child(), None);
    }

    #[test]
    fn test_comments_hoisted_in_source_order() {
        let c2 = CstNode::terminal(NodeKind::Comment, "// two", at(10, 16));
        let c1 = CstNode::terminal(NodeKind::Comment, "/* one */", at(0, 9));
        let stmt = CstNode::rule(
            NodeKind::EmptyStatement,
            vec![CstNode::terminal(NodeKind::Punctuator, ";", at(17, 18))],
        );
        let list = CstNode::rule(NodeKind::StatementList, vec![c2, stmt]);
        let root = CstNode::rule(NodeKind::Script, vec![c1, list]);

        let cst = Cst::new(root);
        assert_eq!(cst.comments.len(), 2);
        assert_eq!(cst.comments[0].text_or_empty(), "/* one */");
        assert!(cst.root.walk().all(|n| n.kind != NodeKind::Comment));
    }

    #[test]
    fn test_walk_is_preorder() {
        let a = CstNode::terminal(NodeKind::IdentifierName, "a", at(0, 1));
        let b = CstNode::terminal(NodeKind::IdentifierName, "b", at(2, 3));
        let root = CstNode::rule(NodeKind::Expression, vec![a, b]);
        let texts: Vec<_> = root.walk().map(|n| n.text_or_empty()).collect();
        assert_eq!(texts, vec!["", "a", "b"]);
    }
}
