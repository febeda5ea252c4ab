//! # Control Flow Conversion
//!
//! Branches, loops, `switch` and `try`.
//!
//! The classic `for` header is read with a slot counter: every `;` moves
//! to the next slot, so empty slots need no special casing.
//!
//! ```text
//! for ( init? ; test? ; update? ) body
//!       slot 0  slot 1  slot 2
//! ```

use super::{ChildCursor, Dispatcher};
use crate::ast::{
    CatchClause, DoWhileStatement, ForInStatement, ForInit, ForLeft, ForOfStatement,
    ForStatement, IfStatement, Statement, SwitchCase, SwitchStatement, TryStatement,
    WhileStatement,
};
use crate::error::ConvertResult;
use ecma_cst::{CstNode, NodeKind};

impl Dispatcher {
    /// `if ( Expression ) Statement [else Statement]`
    pub(crate) fn if_statement(&self, node: &CstNode) -> ConvertResult<Statement> {
        let mut cursor = ChildCursor::new(node);
        let keyword = self.require(cursor.eat("if"), node, "`if`")?;
        let (l_paren, test, r_paren) = self.paren_expression(&mut cursor, node)?;
        let consequent = self.require(cursor.next(), node, "`if` body")?;
        let else_node = cursor.eat("else");
        let alternate = match else_node {
            Some(_) => {
                let alt = self.require(cursor.next(), node, "`else` body")?;
                Some(Box::new(self.statement(alt)?))
            }
            None => None,
        };
        Ok(Statement::If(IfStatement {
            test,
            consequent: Box::new(self.statement(consequent)?),
            alternate,
            if_token: self.tok(keyword),
            l_paren_token: self.tok(l_paren),
            r_paren_token: self.tok(r_paren),
            else_token: self.tok_opt(else_node),
            loc: node.loc,
        }))
    }

    /// An `IterationStatement` whose producer did not wrap the concrete
    /// loop rule; the leading keyword decides.
    pub(crate) fn iteration_statement(&self, node: &CstNode) -> ConvertResult<Statement> {
        let first = node.children.first().and_then(|c| c.terminal_text());
        match first {
            Some("do") => self.do_while_statement(node),
            Some("while") => self.while_statement(node),
            Some("for") => {
                let is_in_of = node
                    .children
                    .iter()
                    .any(|c| matches!(c.terminal_text(), Some("in" | "of")));
                if is_in_of {
                    self.for_in_of_statement(node)
                } else {
                    self.for_statement(node)
                }
            }
            _ => Err(self.malformed(node, "unrecognized loop")),
        }
    }

    /// `while ( Expression ) Statement`
    pub(crate) fn while_statement(&self, node: &CstNode) -> ConvertResult<Statement> {
        let mut cursor = ChildCursor::new(node);
        let keyword = self.require(cursor.eat("while"), node, "`while`")?;
        let (l_paren, test, r_paren) = self.paren_expression(&mut cursor, node)?;
        let body = self.require(cursor.next(), node, "loop body")?;
        Ok(Statement::While(WhileStatement {
            test,
            body: Box::new(self.statement(body)?),
            while_token: self.tok(keyword),
            l_paren_token: self.tok(l_paren),
            r_paren_token: self.tok(r_paren),
            loc: node.loc,
        }))
    }

    /// `do Statement while ( Expression ) ;`
    pub(crate) fn do_while_statement(&self, node: &CstNode) -> ConvertResult<Statement> {
        let mut cursor = ChildCursor::new(node);
        let do_node = self.require(cursor.eat("do"), node, "`do`")?;
        let body = self.require(cursor.next(), node, "loop body")?;
        let while_node = self.require(cursor.eat("while"), node, "`while`")?;
        let (l_paren, test, r_paren) = self.paren_expression(&mut cursor, node)?;
        Ok(Statement::DoWhile(DoWhileStatement {
            body: Box::new(self.statement(body)?),
            test,
            do_token: self.tok(do_node),
            while_token: self.tok(while_node),
            l_paren_token: self.tok(l_paren),
            r_paren_token: self.tok(r_paren),
            semicolon_token: self.tok_opt(cursor.eat(";")),
            loc: node.loc,
        }))
    }

    /// ```text
    /// for ( [Expression] ; [Expression] ; [Expression] ) Statement
    /// for ( var VariableDeclarationList ; [Expression] ; [Expression] ) Statement
    /// for ( LexicalDeclaration [Expression] ; [Expression] ) Statement
    /// ```
    pub(crate) fn for_statement(&self, node: &CstNode) -> ConvertResult<Statement> {
        let mut cursor = ChildCursor::new(node);
        let for_node = self.require(cursor.eat("for"), node, "`for`")?;
        let l_paren = self.require(cursor.eat("("), node, "`(`")?;

        let mut init = None;
        let mut test = None;
        let mut update = None;
        let mut semicolons = Vec::new();
        let mut slot = 0usize;

        while let Some(child) = cursor.peek() {
            if child.is_token(")") {
                break;
            }
            cursor.next();
            if child.is_token(";") {
                semicolons.extend(self.tok(child));
                slot += 1;
                continue;
            }
            if child.is_token("var") {
                let list = self.require(cursor.eat_rule(), node, "declarator list")?;
                let loc = child.loc.merge(&list.loc);
                let decl = self.declaration_from_list(child, list, None, loc)?;
                init = Some(ForInit::VariableDeclaration(decl));
                continue;
            }
            if child.kind == NodeKind::LexicalDeclaration {
                let mut decl = self.lexical_declaration(child)?;
                semicolons.extend(decl.semicolon_token.take());
                if child.has_token(";") {
                    slot += 1;
                }
                init = Some(ForInit::VariableDeclaration(decl));
                continue;
            }
            let expr = self.expression(child)?;
            match slot {
                0 => init = Some(ForInit::Expression(expr)),
                1 => test = Some(expr),
                2 => update = Some(expr),
                _ => return Err(self.malformed(node, "too many clauses in `for` header")),
            }
        }

        let r_paren = self.require(cursor.eat(")"), node, "`)`")?;
        if slot != 2 {
            return Err(self.malformed(node, "`for` header needs two `;`"));
        }
        let body = self.require(cursor.next(), node, "loop body")?;
        Ok(Statement::For(ForStatement {
            init,
            test,
            update,
            body: Box::new(self.statement(body)?),
            for_token: self.tok(for_node),
            l_paren_token: self.tok(l_paren),
            r_paren_token: self.tok(r_paren),
            semicolon_tokens: semicolons,
            loc: node.loc,
        }))
    }

    /// ```text
    /// for ( LeftHandSideExpression in Expression ) Statement
    /// for ( var ForBinding in Expression ) Statement
    /// for ( ForDeclaration in Expression ) Statement
    /// for await? ( ... of AssignmentExpression ) Statement
    /// ```
    pub(crate) fn for_in_of_statement(&self, node: &CstNode) -> ConvertResult<Statement> {
        let mut cursor = ChildCursor::new(node);
        let for_node = self.require(cursor.eat("for"), node, "`for`")?;
        let await_node = cursor.eat("await");
        let l_paren = self.require(cursor.eat("("), node, "`(`")?;

        let left = match cursor.eat("var") {
            Some(var) => {
                let binding = self.require(cursor.next(), node, "loop binding")?;
                let loc = var.loc.merge(&binding.loc);
                ForLeft::VariableDeclaration(self.single_binding_declaration(var, binding, loc)?)
            }
            None => {
                let target = self.require(cursor.next(), node, "loop target")?;
                if target.kind == NodeKind::ForDeclaration {
                    ForLeft::VariableDeclaration(self.for_declaration(target)?)
                } else {
                    ForLeft::Pattern(self.pattern(target)?)
                }
            }
        };

        let (in_node, of_node) = match cursor.next() {
            Some(sep) if sep.terminal_text() == Some("in") => (Some(sep), None),
            Some(sep) if sep.terminal_text() == Some("of") => (None, Some(sep)),
            _ => return Err(self.malformed(node, "expected `in` or `of`")),
        };
        if await_node.is_some() && of_node.is_none() {
            return Err(self.malformed(node, "`for await` requires `of`"));
        }
        let right = self.require(cursor.next(), node, "iterated expression")?;
        let right = self.expression(right)?;
        let r_paren = self.require(cursor.eat(")"), node, "`)`")?;
        let body = self.require(cursor.next(), node, "loop body")?;
        let body = Box::new(self.statement(body)?);

        Ok(match in_node {
            Some(in_node) => Statement::ForIn(ForInStatement {
                left,
                right,
                body,
                for_token: self.tok(for_node),
                l_paren_token: self.tok(l_paren),
                in_token: self.tok(in_node),
                r_paren_token: self.tok(r_paren),
                loc: node.loc,
            }),
            None => Statement::ForOf(ForOfStatement {
                left,
                right,
                body,
                r#await: await_node.is_some(),
                for_token: self.tok(for_node),
                await_token: self.tok_opt(await_node),
                l_paren_token: self.tok(l_paren),
                of_token: self.tok_opt(of_node),
                r_paren_token: self.tok(r_paren),
                loc: node.loc,
            }),
        })
    }

    // =========================================================================
    // SWITCH
    // =========================================================================

    /// `switch ( Expression ) CaseBlock`; clauses keep source order.
    pub(crate) fn switch_statement(&self, node: &CstNode) -> ConvertResult<Statement> {
        let mut cursor = ChildCursor::new(node);
        let keyword = self.require(cursor.eat("switch"), node, "`switch`")?;
        let (l_paren, discriminant, r_paren) = self.paren_expression(&mut cursor, node)?;
        let (block_node, mut inner) = match cursor.eat_kind(NodeKind::CaseBlock) {
            Some(case_block) => (case_block, ChildCursor::new(case_block)),
            None => (node, cursor),
        };

        let l_brace = self.require(inner.eat("{"), block_node, "`{`")?;
        let mut cases = Vec::new();
        while let Some(child) = inner.peek() {
            if child.is_token("}") {
                break;
            }
            inner.next();
            self.collect_cases(child, &mut cases)?;
        }
        let r_brace = self.require(inner.eat("}"), block_node, "`}`")?;

        if cases.iter().filter(|c| c.test.is_none()).count() > 1 {
            return Err(self.malformed(block_node, "more than one `default` clause"));
        }
        Ok(Statement::Switch(SwitchStatement {
            discriminant,
            cases,
            switch_token: self.tok(keyword),
            l_paren_token: self.tok(l_paren),
            r_paren_token: self.tok(r_paren),
            l_brace_token: self.tok(l_brace),
            r_brace_token: self.tok(r_brace),
            loc: node.loc,
        }))
    }

    fn collect_cases(&self, node: &CstNode, out: &mut Vec<SwitchCase>) -> ConvertResult<()> {
        match node.kind {
            NodeKind::CaseClauses => {
                for child in &node.children {
                    self.collect_cases(child, out)?;
                }
                Ok(())
            }
            NodeKind::CaseClause | NodeKind::DefaultClause => {
                out.push(self.switch_case(node)?);
                Ok(())
            }
            _ => Err(self.unsupported(node, "switch clause")),
        }
    }

    /// `case Expression : StatementList?` or `default : StatementList?`
    pub(crate) fn switch_case(&self, node: &CstNode) -> ConvertResult<SwitchCase> {
        let mut cursor = ChildCursor::new(node);
        let (keyword, test) = match cursor.eat("case") {
            Some(case) => {
                let test = self.require(cursor.next(), node, "case test")?;
                (case, Some(self.expression(test)?))
            }
            None => (self.require(cursor.eat("default"), node, "`case` or `default`")?, None),
        };
        let colon = self.require(cursor.eat(":"), node, "`:`")?;
        let mut consequent = Vec::new();
        for child in cursor {
            consequent.extend(self.statement_list(child)?);
        }
        Ok(SwitchCase {
            test,
            consequent,
            keyword_token: self.tok(keyword),
            colon_token: self.tok(colon),
            loc: node.loc,
        })
    }

    // =========================================================================
    // TRY
    // =========================================================================

    /// `try Block Catch? Finally?`; at least one of the two is required.
    pub(crate) fn try_statement(&self, node: &CstNode) -> ConvertResult<Statement> {
        let mut cursor = ChildCursor::new(node);
        let keyword = self.require(cursor.eat("try"), node, "`try`")?;
        let block = self.require(cursor.next(), node, "`try` block")?;
        let block = self.block(block)?;

        let handler = match cursor.eat_kind(NodeKind::Catch) {
            Some(catch) => Some(self.catch_clause(catch)?),
            None => None,
        };

        let (finally_node, finalizer) = if let Some(finally) = cursor.eat_kind(NodeKind::Finally) {
            let mut inner = ChildCursor::new(finally);
            let finally_token = self.require(inner.eat("finally"), finally, "`finally`")?;
            let body = self.require(inner.next(), finally, "`finally` block")?;
            (Some(finally_token), Some(self.block(body)?))
        } else if let Some(finally_token) = cursor.eat("finally") {
            let body = self.require(cursor.next(), node, "`finally` block")?;
            (Some(finally_token), Some(self.block(body)?))
        } else {
            (None, None)
        };

        if handler.is_none() && finalizer.is_none() {
            return Err(self.malformed(node, "`try` needs `catch` or `finally`"));
        }
        Ok(Statement::Try(TryStatement {
            block,
            handler,
            finalizer,
            try_token: self.tok(keyword),
            finally_token: self.tok_opt(finally_node),
            loc: node.loc,
        }))
    }

    /// `catch ( CatchParameter ) Block` or `catch Block`.
    pub(crate) fn catch_clause(&self, node: &CstNode) -> ConvertResult<CatchClause> {
        let mut cursor = ChildCursor::new(node);
        let keyword = self.require(cursor.eat("catch"), node, "`catch`")?;
        let (l_paren, param, r_paren) = match cursor.eat("(") {
            Some(l_paren) => {
                let param = self.require(cursor.next(), node, "catch parameter")?;
                let r_paren = self.require(cursor.eat(")"), node, "`)`")?;
                (Some(l_paren), Some(self.pattern(param)?), Some(r_paren))
            }
            None => (None, None, None),
        };
        let body = self.require(cursor.next(), node, "`catch` block")?;
        Ok(CatchClause {
            param,
            body: self.block(body)?,
            catch_token: self.tok(keyword),
            l_paren_token: self.tok_opt(l_paren),
            r_paren_token: self.tok_opt(r_paren),
            loc: node.loc,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Expression, Pattern, VariableKind};
    use crate::error::ConvertError;
    use ecma_cst::CstBuilder;

    fn empty(b: &CstBuilder) -> CstNode {
        b.rule(NodeKind::EmptyStatement, vec![b.tok(";")])
    }

    fn block(b: &CstBuilder) -> CstNode {
        b.rule(NodeKind::Block, vec![b.tok("{"), b.tok("}")])
    }

    #[test]
    fn test_if_else() {
        let b = CstBuilder::new();
        let node = b.rule(
            NodeKind::IfStatement,
            vec![
                b.tok("if"),
                b.tok("("),
                b.ident("a"),
                b.tok(")"),
                empty(&b),
                b.tok("else"),
                block(&b),
            ],
        );
        let Statement::If(stmt) = Dispatcher::default().statement(&node).unwrap() else {
            panic!("expected if");
        };
        assert!(matches!(stmt.test, Expression::Identifier(_)));
        assert!(matches!(stmt.alternate.as_deref(), Some(Statement::Block(_))));
        assert!(stmt.else_token.is_some());
    }

    #[test]
    fn test_for_with_empty_slots() {
        let b = CstBuilder::new();
        let node = b.rule(
            NodeKind::ForStatement,
            vec![
                b.tok("for"),
                b.tok("("),
                b.tok(";"),
                b.ident("ok"),
                b.tok(";"),
                b.tok(")"),
                empty(&b),
            ],
        );
        let Statement::For(stmt) = Dispatcher::default().statement(&node).unwrap() else {
            panic!("expected for");
        };
        assert!(stmt.init.is_none());
        assert!(matches!(stmt.test, Some(Expression::Identifier(_))));
        assert!(stmt.update.is_none());
        assert_eq!(stmt.semicolon_tokens.len(), 2);
    }

    #[test]
    fn test_for_with_lexical_init() {
        let b = CstBuilder::new();
        let decl = b.rule(
            NodeKind::LexicalDeclaration,
            vec![
                b.rule(NodeKind::LetOrConst, vec![b.ident("let")]),
                b.rule(
                    NodeKind::BindingList,
                    vec![b.rule(
                        NodeKind::LexicalBinding,
                        vec![
                            b.rule(NodeKind::BindingIdentifier, vec![b.ident("i")]),
                            b.rule(NodeKind::Initializer, vec![b.tok("="), b.num("0")]),
                        ],
                    )],
                ),
                b.tok(";"),
            ],
        );
        let update = b.rule(NodeKind::UpdateExpression, vec![b.ident("i"), b.tok("++")]);
        let node = b.rule(
            NodeKind::ForStatement,
            vec![b.tok("for"), b.tok("("), decl, b.tok(";"), update, b.tok(")"), empty(&b)],
        );
        let Statement::For(stmt) = Dispatcher::default().statement(&node).unwrap() else {
            panic!("expected for");
        };
        let Some(ForInit::VariableDeclaration(init)) = &stmt.init else {
            panic!("expected declaration init");
        };
        assert_eq!(init.kind, VariableKind::Let);
        assert!(init.semicolon_token.is_none());
        assert!(stmt.test.is_none());
        assert!(matches!(stmt.update, Some(Expression::Update(_))));
        assert_eq!(stmt.semicolon_tokens.len(), 2);
    }

    #[test]
    fn test_for_var_in() {
        let b = CstBuilder::new();
        let node = b.rule(
            NodeKind::ForInOfStatement,
            vec![
                b.tok("for"),
                b.tok("("),
                b.tok("var"),
                b.rule(
                    NodeKind::ForBinding,
                    vec![b.rule(NodeKind::BindingIdentifier, vec![b.ident("k")])],
                ),
                b.tok("in"),
                b.ident("obj"),
                b.tok(")"),
                empty(&b),
            ],
        );
        let Statement::ForIn(stmt) = Dispatcher::default().statement(&node).unwrap() else {
            panic!("expected for-in");
        };
        let ForLeft::VariableDeclaration(decl) = &stmt.left else {
            panic!("expected declaration");
        };
        assert_eq!(decl.kind, VariableKind::Var);
        assert!(decl.declarations[0].init.is_none());
    }

    #[test]
    fn test_for_await_of_expression_target() {
        let b = CstBuilder::new();
        let node = b.rule(
            NodeKind::ForInOfStatement,
            vec![
                b.tok("for"),
                b.tok("await"),
                b.tok("("),
                b.rule(NodeKind::LeftHandSideExpression, vec![b.ident("x")]),
                b.ident("of"),
                b.ident("stream"),
                b.tok(")"),
                empty(&b),
            ],
        );
        let Statement::ForOf(stmt) = Dispatcher::default().statement(&node).unwrap() else {
            panic!("expected for-of");
        };
        assert!(stmt.r#await);
        assert!(matches!(stmt.left, ForLeft::Pattern(Pattern::Identifier(_))));
    }

    #[test]
    fn test_flat_iteration_statement() {
        let b = CstBuilder::new();
        let node = b.rule(
            NodeKind::IterationStatement,
            vec![
                b.tok("do"),
                empty(&b),
                b.tok("while"),
                b.tok("("),
                b.ident("x"),
                b.tok(")"),
            ],
        );
        assert!(matches!(
            Dispatcher::default().statement(&node).unwrap(),
            Statement::DoWhile(_)
        ));
    }

    fn case(b: &CstBuilder, test: &str) -> CstNode {
        b.rule(NodeKind::CaseClause, vec![b.tok("case"), b.num(test), b.tok(":")])
    }

    fn default_clause(b: &CstBuilder) -> CstNode {
        b.rule(
            NodeKind::DefaultClause,
            vec![
                b.tok("default"),
                b.tok(":"),
                b.rule(NodeKind::StatementList, vec![empty(b)]),
            ],
        )
    }

    fn switch(b: &CstBuilder, clauses: Vec<CstNode>) -> CstNode {
        let mut block = vec![b.tok("{")];
        block.extend(clauses);
        block.push(b.tok("}"));
        b.rule(
            NodeKind::SwitchStatement,
            vec![
                b.tok("switch"),
                b.tok("("),
                b.ident("x"),
                b.tok(")"),
                b.rule(NodeKind::CaseBlock, block),
            ],
        )
    }

    #[test]
    fn test_switch_keeps_default_in_source_order() {
        let b = CstBuilder::new();
        let node = switch(
            &b,
            vec![
                b.rule(NodeKind::CaseClauses, vec![case(&b, "1")]),
                default_clause(&b),
                b.rule(NodeKind::CaseClauses, vec![case(&b, "2")]),
            ],
        );
        let Statement::Switch(stmt) = Dispatcher::default().statement(&node).unwrap() else {
            panic!("expected switch");
        };
        assert_eq!(stmt.cases.len(), 3);
        assert!(stmt.cases[0].test.is_some());
        assert!(stmt.cases[1].test.is_none());
        assert_eq!(stmt.cases[1].consequent.len(), 1);
        assert!(stmt.cases[2].test.is_some());
    }

    #[test]
    fn test_switch_rejects_two_defaults() {
        let b = CstBuilder::new();
        let node = switch(&b, vec![default_clause(&b), default_clause(&b)]);
        let err = Dispatcher::default().statement(&node).unwrap_err();
        assert!(matches!(err, ConvertError::MalformedNode { .. }));
    }

    #[test]
    fn test_try_catch_finally() {
        let b = CstBuilder::new();
        let catch = b.rule(
            NodeKind::Catch,
            vec![
                b.tok("catch"),
                b.tok("("),
                b.rule(
                    NodeKind::CatchParameter,
                    vec![b.rule(NodeKind::BindingIdentifier, vec![b.ident("e")])],
                ),
                b.tok(")"),
                block(&b),
            ],
        );
        let finally = b.rule(NodeKind::Finally, vec![b.tok("finally"), block(&b)]);
        let node = b.rule(NodeKind::TryStatement, vec![b.tok("try"), block(&b), catch, finally]);
        let Statement::Try(stmt) = Dispatcher::default().statement(&node).unwrap() else {
            panic!("expected try");
        };
        let handler = stmt.handler.expect("handler");
        assert!(matches!(handler.param, Some(Pattern::Identifier(_))));
        assert!(stmt.finalizer.is_some());
        assert!(stmt.finally_token.is_some());
    }

    #[test]
    fn test_optional_catch_binding() {
        let b = CstBuilder::new();
        let catch = b.rule(NodeKind::Catch, vec![b.tok("catch"), block(&b)]);
        let clause = Dispatcher::default().catch_clause(&catch).unwrap();
        assert!(clause.param.is_none());
        assert!(clause.l_paren_token.is_none());
    }

    #[test]
    fn test_try_without_handler_or_finalizer() {
        let b = CstBuilder::new();
        let node = b.rule(NodeKind::TryStatement, vec![b.tok("try"), block(&b)]);
        let err = Dispatcher::default().statement(&node).unwrap_err();
        assert!(matches!(err, ConvertError::MalformedNode { .. }));
    }
}
