//! # Child Cursor
//!
//! Positional walk over a rule node's children. Converters use it to
//! consume optional tokens and sub-rules in grammar order.
//!
//! ## Example
//!
//! ```text
//! IfStatement: if ( Expression ) Statement [else Statement]
//!
//! cur.eat("if"); cur.eat("("); test = cur.next(); cur.eat(")"); ...
//! ```

use ecma_cst::{CstNode, NodeKind};

/// Peekable cursor over the children of one CST node.
#[derive(Debug, Clone)]
pub(crate) struct ChildCursor<'a> {
    children: Vec<&'a CstNode>,
    pos: usize,
}

impl<'a> ChildCursor<'a> {
    pub fn new(node: &'a CstNode) -> Self {
        Self::over(&node.children)
    }

    /// Creates a cursor over an arbitrary slice of siblings.
    pub fn over(children: &'a [CstNode]) -> Self {
        Self {
            children: children.iter().collect(),
            pos: 0,
        }
    }

    /// Creates a cursor over `node`'s children with every child of one of
    /// `inline` kinds replaced by its own children, recursively.
    ///
    /// ```text
    /// ClassElement [static, MethodDefinition [get, name, (, ), {, }]]
    ///   → static get name ( ) { }
    /// ```
    pub fn flattened(node: &'a CstNode, inline: &[NodeKind]) -> Self {
        fn push<'a>(out: &mut Vec<&'a CstNode>, node: &'a CstNode, inline: &[NodeKind]) {
            for child in &node.children {
                if inline.contains(&child.kind) && !child.is_terminal() {
                    push(out, child, inline);
                } else {
                    out.push(child);
                }
            }
        }
        let mut children = Vec::new();
        push(&mut children, node, inline);
        Self { children, pos: 0 }
    }

    /// Check if every child has been consumed.
    pub fn is_done(&self) -> bool {
        self.pos >= self.children.len()
    }

    /// Peek at the current child without consuming it.
    pub fn peek(&self) -> Option<&'a CstNode> {
        self.children.get(self.pos).copied()
    }

    /// Peek `n` children ahead of the current one.
    pub fn peek_nth(&self, n: usize) -> Option<&'a CstNode> {
        self.children.get(self.pos + n).copied()
    }

    /// Check if the current child is the given token.
    pub fn at(&self, text: &str) -> bool {
        self.peek().is_some_and(|c| c.is_token(text))
    }

    /// Check if the current child has the given kind.
    pub fn at_kind(&self, kind: NodeKind) -> bool {
        self.peek().is_some_and(|c| c.kind == kind)
    }

    /// Consumes the current child if it is the given token.
    pub fn eat(&mut self, text: &str) -> Option<&'a CstNode> {
        if self.at(text) {
            self.next()
        } else {
            None
        }
    }

    /// Consumes the current child only if it is itself the given terminal,
    /// not a rule wrapping it. Contextual keywords such as `async` need
    /// this, since a lone parameter may be named the same.
    pub fn eat_terminal(&mut self, text: &str) -> Option<&'a CstNode> {
        if self.peek().is_some_and(|c| c.terminal_text() == Some(text)) {
            self.next()
        } else {
            None
        }
    }

    /// Consumes the current child if it has the given kind.
    pub fn eat_kind(&mut self, kind: NodeKind) -> Option<&'a CstNode> {
        if self.at_kind(kind) {
            self.next()
        } else {
            None
        }
    }

    /// Consumes the current child if it has any of the given kinds.
    pub fn eat_any_kind(&mut self, kinds: &[NodeKind]) -> Option<&'a CstNode> {
        if self.peek().is_some_and(|c| kinds.contains(&c.kind)) {
            self.next()
        } else {
            None
        }
    }

    /// Consumes the current child if it is not a terminal.
    pub fn eat_rule(&mut self) -> Option<&'a CstNode> {
        if self.peek().is_some_and(|c| !c.is_terminal()) {
            self.next()
        } else {
            None
        }
    }

    /// Returns the children not yet consumed.
    pub fn rest(&self) -> &[&'a CstNode] {
        self.children.get(self.pos..).unwrap_or(&[])
    }
}

impl<'a> Iterator for ChildCursor<'a> {
    type Item = &'a CstNode;

    fn next(&mut self) -> Option<Self::Item> {
        let child = self.children.get(self.pos).copied()?;
        self.pos += 1;
        Some(child)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecma_cst::CstBuilder;

    #[test]
    fn test_eat_consumes_only_matching_tokens() {
        let b = CstBuilder::new();
        let node = b.rule(
            NodeKind::ReturnStatement,
            vec![b.tok("return"), b.ident("x"), b.tok(";")],
        );
        let mut cur = ChildCursor::new(&node);
        assert!(cur.eat("(").is_none());
        assert!(cur.eat("return").is_some());
        assert!(cur.eat_rule().is_none());
        assert_eq!(cur.next().map(|c| c.text_or_empty()), Some("x"));
        assert_eq!(cur.rest().len(), 1);
        assert!(cur.eat(";").is_some());
        assert!(cur.is_done());
        assert!(cur.peek().is_none());
    }

    #[test]
    fn test_peek_nth_and_kinds() {
        let b = CstBuilder::new();
        let node = b.rule(
            NodeKind::Arguments,
            vec![b.tok("("), b.rule(NodeKind::ArgumentList, vec![b.ident("a")]), b.tok(")")],
        );
        let mut cur = ChildCursor::new(&node);
        assert!(cur.peek_nth(2).is_some_and(|c| c.is_token(")")));
        cur.eat("(");
        assert!(cur.at_kind(NodeKind::ArgumentList));
        assert!(cur
            .eat_any_kind(&[NodeKind::Expression, NodeKind::ArgumentList])
            .is_some());
    }

    #[test]
    fn test_eat_terminal_skips_wrapped_tokens() {
        let b = CstBuilder::new();
        let node = b.rule(
            NodeKind::ArrowParameters,
            vec![b.rule(NodeKind::BindingIdentifier, vec![b.ident("async")]), b.ident("async")],
        );
        let mut cur = ChildCursor::new(&node);
        assert!(cur.at("async"));
        assert!(cur.eat_terminal("async").is_none());
        cur.next();
        assert!(cur.eat_terminal("async").is_some());
    }

    #[test]
    fn test_flattened_inlines_listed_kinds() {
        let b = CstBuilder::new();
        let method = b.rule(
            NodeKind::MethodDefinition,
            vec![b.ident("get"), b.ident("x"), b.tok("("), b.tok(")")],
        );
        let node = b.rule(NodeKind::ClassElement, vec![b.ident("static"), method]);
        let mut cur = ChildCursor::flattened(&node, &[NodeKind::MethodDefinition]);
        assert_eq!(cur.rest().len(), 5);
        assert!(cur.eat("static").is_some());
        assert!(cur.eat("get").is_some());
    }
}
