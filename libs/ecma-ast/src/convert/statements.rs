//! # Statement Conversion
//!
//! Routes statement rules to their converters and handles the simple
//! statements directly. Loops, branches and `try` live in
//! `control_flow.rs`; `var`/`let`/`const` in `declarations.rs`.
//!
//! ```text
//! Statement ─┬─ Block / Expression / Empty / Debugger / Return / ...   (here)
//!            ├─ If / While / DoWhile / For / ForInOf / Switch / Try   (control_flow.rs)
//!            └─ VariableStatement / LexicalDeclaration                (declarations.rs)
//! ```

use super::{ChildCursor, Dispatcher};
use crate::ast::{
    BlockStatement, BreakStatement, ContinueStatement, DebuggerStatement, EmptyStatement,
    Expression, ExpressionStatement, LabeledStatement, ReturnStatement, Statement,
    ThrowStatement, WithStatement,
};
use crate::error::ConvertResult;
use ecma_cst::{CstNode, NodeKind};
use tracing::trace;

/// Rules whose children are a flat run of statements.
const LIST_KINDS: &[NodeKind] = &[
    NodeKind::StatementList,
    NodeKind::StatementListItem,
    NodeKind::FunctionStatementList,
    NodeKind::ClassStaticBlockStatementList,
    NodeKind::ClassStaticBlockBody,
    NodeKind::FunctionBody,
    NodeKind::GeneratorBody,
    NodeKind::AsyncFunctionBody,
    NodeKind::AsyncGeneratorBody,
];

impl Dispatcher {
    /// Converts one statement or declaration rule.
    pub(crate) fn statement(&self, node: &CstNode) -> ConvertResult<Statement> {
        if node.is_terminal() {
            return if node.is_token(";") {
                Ok(Statement::Empty(EmptyStatement {
                    semicolon_token: self.tok(node),
                    loc: node.loc,
                }))
            } else {
                Err(self.unsupported(node, "statement"))
            };
        }

        match node.kind {
            NodeKind::Statement
            | NodeKind::Declaration
            | NodeKind::HoistableDeclaration
            | NodeKind::BreakableStatement
            | NodeKind::BlockStatement
            | NodeKind::LabelledItem
            | NodeKind::StatementListItem => {
                let only = self.require(node.only_child(), node, "statement")?;
                self.statement(only)
            }
            NodeKind::IterationStatement => match node.only_child() {
                Some(only) => self.statement(only),
                None => self.iteration_statement(node),
            },
            NodeKind::Block => self.block(node).map(Statement::Block),
            NodeKind::VariableStatement => {
                self.variable_statement(node).map(Statement::VariableDeclaration)
            }
            NodeKind::LexicalDeclaration => {
                self.lexical_declaration(node).map(Statement::VariableDeclaration)
            }
            NodeKind::EmptyStatement => {
                let semi = self.require(node.find_token(";"), node, "`;`")?;
                Ok(Statement::Empty(EmptyStatement {
                    semicolon_token: self.tok(semi),
                    loc: node.loc,
                }))
            }
            NodeKind::ExpressionStatement => self.expression_statement(node),
            NodeKind::IfStatement => self.if_statement(node),
            NodeKind::DoWhileStatement => self.do_while_statement(node),
            NodeKind::WhileStatement => self.while_statement(node),
            NodeKind::ForStatement => self.for_statement(node),
            NodeKind::ForInOfStatement => self.for_in_of_statement(node),
            NodeKind::SwitchStatement => self.switch_statement(node),
            NodeKind::TryStatement => self.try_statement(node),
            NodeKind::ReturnStatement => self.return_statement(node),
            NodeKind::ThrowStatement => self.throw_statement(node),
            NodeKind::BreakStatement | NodeKind::ContinueStatement => self.jump_statement(node),
            NodeKind::DebuggerStatement => {
                let mut cursor = ChildCursor::new(node);
                let keyword = self.require(cursor.eat("debugger"), node, "`debugger`")?;
                Ok(Statement::Debugger(DebuggerStatement {
                    debugger_token: self.tok(keyword),
                    semicolon_token: self.tok_opt(cursor.eat(";")),
                    loc: node.loc,
                }))
            }
            NodeKind::LabelledStatement => self.labelled_statement(node),
            NodeKind::WithStatement => self.with_statement(node),
            NodeKind::FunctionDeclaration
            | NodeKind::GeneratorDeclaration
            | NodeKind::AsyncFunctionDeclaration
            | NodeKind::AsyncGeneratorDeclaration => {
                let function = self.function_parts(node)?;
                Ok(Statement::FunctionDeclaration(Box::new(function.into_declaration())))
            }
            NodeKind::ClassDeclaration => {
                let class = self.class_parts(node)?;
                Ok(Statement::ClassDeclaration(Box::new(class.into_declaration())))
            }
            _ => Err(self.unsupported(node, "statement")),
        }
    }

    /// Flattens a statement-list rule (or a single statement) into
    /// statements, in source order.
    pub(crate) fn statement_list(&self, node: &CstNode) -> ConvertResult<Vec<Statement>> {
        if !LIST_KINDS.contains(&node.kind) || node.is_terminal() {
            return Ok(vec![self.statement(node)?]);
        }
        let mut out = Vec::with_capacity(node.children.len());
        for child in &node.children {
            out.extend(self.statement_list(child)?);
        }
        Ok(out)
    }

    /// Marks the directive prologue: the leading run of expression
    /// statements that are plain string literals.
    pub(crate) fn mark_directives(&self, body: &mut [Statement]) {
        for stmt in body.iter_mut() {
            if !self.mark_directive(stmt) {
                break;
            }
        }
    }

    /// Marks one statement as a directive if it is a string literal
    /// expression statement.
    ///
    /// ## Returns
    ///
    /// Whether the prologue continues past this statement.
    pub(crate) fn mark_directive(&self, stmt: &mut Statement) -> bool {
        let Statement::Expression(expr_stmt) = stmt else {
            return false;
        };
        let Expression::Literal(lit) = &expr_stmt.expression else {
            return false;
        };
        if lit.as_str().is_none() {
            return false;
        }
        let raw = &lit.raw;
        let directive = raw
            .get(1..raw.len().saturating_sub(1))
            .unwrap_or_default()
            .to_string();
        trace!(%directive, "directive");
        expr_stmt.directive = Some(directive);
        true
    }

    /// `{ StatementList? }`
    pub(crate) fn block(&self, node: &CstNode) -> ConvertResult<BlockStatement> {
        if node.kind != NodeKind::Block {
            if let Some(inner) = node.find_child(NodeKind::Block) {
                return self.block(inner);
            }
        }
        let mut cursor = ChildCursor::new(node);
        let l_brace = self.require(cursor.eat("{"), node, "`{`")?;
        let mut body = Vec::new();
        while let Some(next) = cursor.peek() {
            if next.is_token("}") {
                break;
            }
            cursor.next();
            body.extend(self.statement_list(next)?);
        }
        let r_brace = self.require(cursor.eat("}"), node, "`}`")?;
        Ok(BlockStatement {
            body,
            l_brace_token: self.tok(l_brace),
            r_brace_token: self.tok(r_brace),
            loc: node.loc,
        })
    }

    fn expression_statement(&self, node: &CstNode) -> ConvertResult<Statement> {
        let (expr_nodes, semicolon) = match node.children.split_last() {
            Some((last, rest)) if last.is_token(";") => (rest, Some(last)),
            _ => (&node.children[..], None),
        };
        let expression = match expr_nodes {
            [single] => self.expression(single)?,
            [] => return Err(self.malformed(node, "missing expression")),
            _ => return Err(self.malformed(node, "expected a single expression")),
        };
        Ok(Statement::Expression(ExpressionStatement {
            expression,
            directive: None,
            semicolon_token: self.tok_opt(semicolon),
            loc: node.loc,
        }))
    }

    /// `return Expression? ;`
    fn return_statement(&self, node: &CstNode) -> ConvertResult<Statement> {
        let mut cursor = ChildCursor::new(node);
        let keyword = self.require(cursor.eat("return"), node, "`return`")?;
        let argument = match cursor.peek() {
            Some(next) if !next.is_token(";") => {
                cursor.next();
                Some(self.expression(next)?)
            }
            _ => None,
        };
        Ok(Statement::Return(ReturnStatement {
            argument,
            return_token: self.tok(keyword),
            semicolon_token: self.tok_opt(cursor.eat(";")),
            loc: node.loc,
        }))
    }

    /// `throw Expression ;`
    fn throw_statement(&self, node: &CstNode) -> ConvertResult<Statement> {
        let mut cursor = ChildCursor::new(node);
        let keyword = self.require(cursor.eat("throw"), node, "`throw`")?;
        let argument = self.require(cursor.next(), node, "thrown expression")?;
        Ok(Statement::Throw(ThrowStatement {
            argument: self.expression(argument)?,
            throw_token: self.tok(keyword),
            semicolon_token: self.tok_opt(cursor.eat(";")),
            loc: node.loc,
        }))
    }

    /// `break LabelIdentifier? ;` and `continue LabelIdentifier? ;`
    fn jump_statement(&self, node: &CstNode) -> ConvertResult<Statement> {
        let is_break = node.kind == NodeKind::BreakStatement;
        let keyword_text = if is_break { "break" } else { "continue" };
        let mut cursor = ChildCursor::new(node);
        let keyword = self.require(cursor.eat(keyword_text), node, keyword_text)?;
        let label = match cursor.peek() {
            Some(next) if !next.is_token(";") => {
                cursor.next();
                Some(self.identifier(next)?)
            }
            _ => None,
        };
        let semicolon_token = self.tok_opt(cursor.eat(";"));
        Ok(if is_break {
            Statement::Break(BreakStatement {
                label,
                break_token: self.tok(keyword),
                semicolon_token,
                loc: node.loc,
            })
        } else {
            Statement::Continue(ContinueStatement {
                label,
                continue_token: self.tok(keyword),
                semicolon_token,
                loc: node.loc,
            })
        })
    }

    /// `LabelIdentifier : LabelledItem`
    fn labelled_statement(&self, node: &CstNode) -> ConvertResult<Statement> {
        let mut cursor = ChildCursor::new(node);
        let label = self.require(cursor.next(), node, "label")?;
        let colon = self.require(cursor.eat(":"), node, "`:`")?;
        let body = self.require(cursor.next(), node, "labelled statement")?;
        Ok(Statement::Labeled(LabeledStatement {
            label: self.identifier(label)?,
            body: Box::new(self.statement(body)?),
            colon_token: self.tok(colon),
            loc: node.loc,
        }))
    }

    /// `with ( Expression ) Statement`
    fn with_statement(&self, node: &CstNode) -> ConvertResult<Statement> {
        let mut cursor = ChildCursor::new(node);
        let keyword = self.require(cursor.eat("with"), node, "`with`")?;
        let (l_paren, object, r_paren) = self.paren_expression(&mut cursor, node)?;
        let body = self.require(cursor.next(), node, "`with` body")?;
        Ok(Statement::With(WithStatement {
            object,
            body: Box::new(self.statement(body)?),
            with_token: self.tok(keyword),
            l_paren_token: self.tok(l_paren),
            r_paren_token: self.tok(r_paren),
            loc: node.loc,
        }))
    }

    /// Consumes `( Expression )` from the cursor.
    pub(crate) fn paren_expression<'a>(
        &self,
        cursor: &mut ChildCursor<'a>,
        node: &CstNode,
    ) -> ConvertResult<(&'a CstNode, Expression, &'a CstNode)> {
        let l_paren = self.require(cursor.eat("("), node, "`(`")?;
        let inner = self.require(cursor.next(), node, "parenthesized expression")?;
        let r_paren = self.require(cursor.eat(")"), node, "`)`")?;
        Ok((l_paren, self.expression(inner)?, r_paren))
    }
}
