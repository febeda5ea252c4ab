//! # Variable Declaration Conversion
//!
//! `var`, `let` and `const` in statement position and in loop headers.
//!
//! ```text
//! VariableStatement   var VariableDeclarationList ;
//! LexicalDeclaration  LetOrConst BindingList ;
//! ForDeclaration      LetOrConst ForBinding
//! ```

use super::{ChildCursor, Dispatcher};
use crate::ast::{VariableDeclaration, VariableDeclarator, VariableKind};
use crate::error::ConvertResult;
use crate::token::Token;
use ecma_cst::{CstNode, NodeKind, SourceLocation};

impl Dispatcher {
    /// `var VariableDeclarationList ;`
    pub(crate) fn variable_statement(&self, node: &CstNode) -> ConvertResult<VariableDeclaration> {
        let mut cursor = ChildCursor::new(node);
        let keyword = self.require(cursor.eat("var"), node, "`var`")?;
        let list = self.require(cursor.eat_rule(), node, "declarator list")?;
        let semicolon = cursor.eat(";");
        self.declaration_from_list(keyword, list, semicolon, node.loc)
    }

    /// `LetOrConst BindingList ;`
    pub(crate) fn lexical_declaration(&self, node: &CstNode) -> ConvertResult<VariableDeclaration> {
        let mut cursor = ChildCursor::new(node);
        let keyword = self.require(cursor.next(), node, "`let` or `const`")?;
        let list = self.require(cursor.eat_rule(), node, "declarator list")?;
        let semicolon = cursor.eat(";");
        self.declaration_from_list(keyword, list, semicolon, node.loc)
    }

    /// `LetOrConst ForBinding` in a `for-in`/`for-of` header.
    pub(crate) fn for_declaration(&self, node: &CstNode) -> ConvertResult<VariableDeclaration> {
        match node.children.as_slice() {
            [keyword, binding] => self.single_binding_declaration(keyword, binding, node.loc),
            _ => Err(self.malformed(node, "expected `let`/`const` and a binding")),
        }
    }

    /// A declaration of exactly one uninitialized binding.
    pub(crate) fn single_binding_declaration(
        &self,
        keyword: &CstNode,
        binding: &CstNode,
        loc: SourceLocation,
    ) -> ConvertResult<VariableDeclaration> {
        let declarator = VariableDeclarator {
            id: self.pattern(binding)?,
            init: None,
            eq_token: None,
            loc: binding.loc,
        };
        Ok(VariableDeclaration {
            declarations: vec![declarator],
            kind: self.variable_kind(keyword)?,
            kind_token: self.tok(keyword),
            comma_tokens: Vec::new(),
            semicolon_token: None,
            loc,
        })
    }

    /// Builds a declaration from its keyword and declarator list.
    pub(crate) fn declaration_from_list(
        &self,
        keyword: &CstNode,
        list: &CstNode,
        semicolon: Option<&CstNode>,
        loc: SourceLocation,
    ) -> ConvertResult<VariableDeclaration> {
        let mut declarations = Vec::new();
        let mut commas = Vec::new();
        self.collect_declarators(list, &mut declarations, &mut commas)?;
        if declarations.is_empty() {
            return Err(self.malformed(list, "empty declarator list"));
        }
        Ok(VariableDeclaration {
            declarations,
            kind: self.variable_kind(keyword)?,
            kind_token: self.tok(keyword),
            comma_tokens: commas,
            semicolon_token: self.tok_opt(semicolon),
            loc,
        })
    }

    fn collect_declarators(
        &self,
        node: &CstNode,
        out: &mut Vec<VariableDeclarator>,
        commas: &mut Vec<Token>,
    ) -> ConvertResult<()> {
        match node.kind {
            NodeKind::VariableDeclarationList | NodeKind::BindingList => {
                for child in &node.children {
                    if child.is_token(",") {
                        commas.extend(self.tok(child));
                    } else {
                        self.collect_declarators(child, out, commas)?;
                    }
                }
                Ok(())
            }
            _ => {
                out.push(self.declarator(node)?);
                Ok(())
            }
        }
    }

    /// `BindingIdentifier Initializer?` or `BindingPattern Initializer`.
    pub(crate) fn declarator(&self, node: &CstNode) -> ConvertResult<VariableDeclarator> {
        if !matches!(node.kind, NodeKind::VariableDeclaration | NodeKind::LexicalBinding) {
            return Ok(VariableDeclarator {
                id: self.pattern(node)?,
                init: None,
                eq_token: None,
                loc: node.loc,
            });
        }
        let (target, init, eq_token) = match node.children.as_slice() {
            [] => return Err(self.malformed(node, "missing binding")),
            [target] => (target, None, None),
            [target, init] if init.kind == NodeKind::Initializer => {
                let (value, eq) = self.initializer(init)?;
                (target, Some(value), eq)
            }
            [target, eq, value] if eq.is_token("=") => {
                (target, Some(self.expression(value)?), self.tok(eq))
            }
            _ => return Err(self.malformed(node, "expected a binding with an optional initializer")),
        };
        Ok(VariableDeclarator {
            id: self.pattern(target)?,
            init,
            eq_token,
            loc: node.loc,
        })
    }

    fn variable_kind(&self, keyword: &CstNode) -> ConvertResult<VariableKind> {
        keyword
            .token_text()
            .and_then(VariableKind::from_text)
            .ok_or_else(|| self.malformed(keyword, "expected `var`, `let` or `const`"))
    }
}
