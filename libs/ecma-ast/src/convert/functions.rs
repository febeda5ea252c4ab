//! # Function Conversion
//!
//! Function declarations and expressions (plain, generator, async, async
//! generator), their bodies, and arrow functions.
//!
//! Every function form is scanned with one positional walk:
//!
//! ```text
//! async? function *? BindingIdentifier? ( FormalParameters? ) { FunctionBody? }
//! ```

use super::parameters::ParamList;
use super::{ChildCursor, Dispatcher};
use crate::ast::{ArrowBody, ArrowFunctionExpression, BlockStatement, Expression, Function};
use crate::error::ConvertResult;
use ecma_cst::{CstNode, NodeKind};

/// Body rules that may wrap the braces of a function body.
const BODY_KINDS: &[NodeKind] = &[
    NodeKind::FunctionBody,
    NodeKind::GeneratorBody,
    NodeKind::AsyncFunctionBody,
    NodeKind::AsyncGeneratorBody,
];

impl Dispatcher {
    /// Scans any function declaration or expression rule.
    pub(crate) fn function_parts(&self, node: &CstNode) -> ConvertResult<Function> {
        let mut cursor = ChildCursor::new(node);
        let async_node = cursor.eat_terminal("async");
        let function_node = self.require(cursor.eat("function"), node, "`function`")?;
        let star = cursor.eat("*");
        let id = match cursor.peek() {
            Some(next) if !next.is_token("(") => {
                cursor.next();
                Some(self.identifier(next)?)
            }
            _ => None,
        };
        let (params, body) = self.params_and_body(&mut cursor, node)?;

        Ok(Function {
            id,
            params: params.params,
            body,
            generator: star.is_some() || is_generator_kind(node.kind),
            is_async: async_node.is_some() || is_async_kind(node.kind),
            async_token: self.tok_opt(async_node),
            function_token: self.tok(function_node),
            star_token: self.tok_opt(star),
            l_paren_token: params.l_paren,
            r_paren_token: params.r_paren,
            comma_tokens: params.commas,
            loc: node.loc,
        })
    }

    /// Consumes `( params ) { body }` from the cursor.
    pub(crate) fn params_and_body(
        &self,
        cursor: &mut ChildCursor<'_>,
        node: &CstNode,
    ) -> ConvertResult<(ParamList, BlockStatement)> {
        let l_paren = self.require(cursor.eat("("), node, "`(`")?;
        let mut param_nodes = vec![l_paren];
        while let Some(next) = cursor.peek() {
            if next.is_token(")") {
                break;
            }
            param_nodes.extend(cursor.next());
        }
        param_nodes.push(self.require(cursor.eat(")"), node, "`)`")?);
        let params = self.formal_parameters(&param_nodes)?;

        let body = if cursor.at("{") {
            let rest: Vec<&CstNode> = cursor.by_ref().collect();
            self.braced_body(node, &rest)?
        } else {
            let body_node = self.require(cursor.eat_any_kind(BODY_KINDS), node, "function body")?;
            let children: Vec<&CstNode> = body_node.children.iter().collect();
            self.braced_body(body_node, &children)?
        };
        Ok((params, body))
    }

    /// `{ FunctionBody? }` given as a run of siblings; directives apply.
    fn braced_body(&self, node: &CstNode, parts: &[&CstNode]) -> ConvertResult<BlockStatement> {
        match parts {
            [l_brace, inner @ .., r_brace] if l_brace.is_token("{") && r_brace.is_token("}") => {
                let mut body = Vec::new();
                for child in inner {
                    body.extend(self.statement_list(child)?);
                }
                self.mark_directives(&mut body);
                Ok(BlockStatement {
                    body,
                    l_brace_token: self.tok(l_brace),
                    r_brace_token: self.tok(r_brace),
                    loc: l_brace.loc.merge(&r_brace.loc),
                })
            }
            _ => Err(self.malformed(node, "function body must be `{ ... }`")),
        }
    }

    // =========================================================================
    // ARROW FUNCTIONS
    // =========================================================================

    /// `ArrowFunction: ArrowParameters => ConciseBody` and the async forms:
    ///
    /// ```text
    /// async AsyncArrowBindingIdentifier => AsyncConciseBody
    /// CoverCallExpressionAndAsyncArrowHead => AsyncConciseBody
    /// ```
    pub(crate) fn arrow_function(&self, node: &CstNode) -> ConvertResult<Expression> {
        let mut cursor = ChildCursor::new(node);
        let mut async_node = cursor.eat_terminal("async");
        let params_node = self.require(cursor.next(), node, "arrow parameters")?;
        if async_node.is_none() && node.kind == NodeKind::AsyncArrowFunction {
            async_node = params_node
                .walk()
                .find(|n| n.is_terminal())
                .filter(|n| n.is_token("async"));
        }
        let arrow = self.require(cursor.eat("=>"), node, "`=>`")?;
        let body_node = self.require(cursor.next(), node, "arrow body")?;

        let params = self.arrow_parameters(params_node)?;
        let body = self.arrow_body(body_node)?;
        Ok(Expression::ArrowFunction(Box::new(ArrowFunctionExpression {
            id: None,
            params: params.params,
            expression: matches!(body, ArrowBody::Expression(_)),
            body,
            generator: false,
            r#async: async_node.is_some() || node.kind == NodeKind::AsyncArrowFunction,
            async_token: self.tok_opt(async_node),
            l_paren_token: params.l_paren,
            r_paren_token: params.r_paren,
            comma_tokens: params.commas,
            arrow_token: self.tok(arrow),
            loc: node.loc,
        })))
    }

    fn arrow_body(&self, node: &CstNode) -> ConvertResult<ArrowBody> {
        if node.children.first().is_some_and(|c| c.is_token("{")) {
            let children: Vec<&CstNode> = node.children.iter().collect();
            return self.braced_body(node, &children).map(ArrowBody::Block);
        }
        match node.kind {
            NodeKind::ConciseBody | NodeKind::AsyncConciseBody => {
                let only = self.require(node.only_child(), node, "arrow body")?;
                self.arrow_body(only)
            }
            _ => self.expression(node).map(|e| ArrowBody::Expression(Box::new(e))),
        }
    }
}

fn is_generator_kind(kind: NodeKind) -> bool {
    matches!(
        kind,
        NodeKind::GeneratorDeclaration
            | NodeKind::GeneratorExpression
            | NodeKind::AsyncGeneratorDeclaration
            | NodeKind::AsyncGeneratorExpression
    )
}

fn is_async_kind(kind: NodeKind) -> bool {
    matches!(
        kind,
        NodeKind::AsyncFunctionDeclaration
            | NodeKind::AsyncFunctionExpression
            | NodeKind::AsyncGeneratorDeclaration
            | NodeKind::AsyncGeneratorExpression
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Pattern, Statement};
    use ecma_cst::CstBuilder;

    fn binding(b: &CstBuilder, name: &str) -> CstNode {
        b.rule(NodeKind::BindingIdentifier, vec![b.ident(name)])
    }

    #[test]
    fn test_async_generator_expression() {
        let b = CstBuilder::new();
        let params = b.rule(
            NodeKind::FormalParameters,
            vec![b.rule(
                NodeKind::FormalParameterList,
                vec![
                    b.rule(NodeKind::FormalParameter, vec![binding(&b, "a")]),
                    b.tok(","),
                    b.rule(NodeKind::FormalParameter, vec![binding(&b, "c")]),
                ],
            )],
        );
        let node = b.rule(
            NodeKind::AsyncGeneratorExpression,
            vec![
                b.ident("async"),
                b.tok("function"),
                b.tok("*"),
                binding(&b, "gen"),
                b.tok("("),
                params,
                b.tok(")"),
                b.tok("{"),
                b.tok("}"),
            ],
        );
        let Expression::Function(func) = Dispatcher::default().expression(&node).unwrap() else {
            panic!("expected function expression");
        };
        assert!(func.r#async && func.generator);
        assert_eq!(func.id.as_ref().map(|id| id.name.as_str()), Some("gen"));
        assert_eq!(func.params.len(), 2);
        assert_eq!(func.comma_tokens.len(), 1);
        assert!(func.body.body.is_empty());
    }

    #[test]
    fn test_function_body_directives() {
        let b = CstBuilder::new();
        let directive = b.rule(
            NodeKind::ExpressionStatement,
            vec![b.string("'use strict'"), b.tok(";")],
        );
        let body = b.rule(
            NodeKind::FunctionBody,
            vec![b.rule(NodeKind::FunctionStatementList, vec![directive])],
        );
        let node = b.rule(
            NodeKind::FunctionDeclaration,
            vec![
                b.tok("function"),
                binding(&b, "f"),
                b.tok("("),
                b.tok(")"),
                b.tok("{"),
                body,
                b.tok("}"),
            ],
        );
        let func = Dispatcher::default().function_parts(&node).unwrap();
        assert_eq!(func.body.body.len(), 1);
        assert_eq!(func.body.body[0].directive(), Some("use strict"));
    }

    #[test]
    fn test_arrow_with_expression_body() {
        let b = CstBuilder::new();
        let node = b.rule(
            NodeKind::ArrowFunction,
            vec![
                b.rule(NodeKind::ArrowParameters, vec![binding(&b, "x")]),
                b.tok("=>"),
                b.rule(
                    NodeKind::ConciseBody,
                    vec![b.rule(NodeKind::ExpressionBody, vec![b.ident("x")])],
                ),
            ],
        );
        let Expression::ArrowFunction(arrow) = Dispatcher::default().expression(&node).unwrap()
        else {
            panic!("expected arrow function");
        };
        assert!(arrow.expression);
        assert!(!arrow.r#async);
        assert!(matches!(arrow.params[0], Pattern::Identifier(_)));
        assert!(arrow.arrow_token.is_some());
    }

    #[test]
    fn test_async_arrow_with_block_body() {
        let b = CstBuilder::new();
        let ret = b.rule(NodeKind::ReturnStatement, vec![b.tok("return"), b.tok(";")]);
        let node = b.rule(
            NodeKind::AsyncArrowFunction,
            vec![
                b.ident("async"),
                b.rule(NodeKind::AsyncArrowBindingIdentifier, vec![b.ident("v")]),
                b.tok("=>"),
                b.rule(
                    NodeKind::AsyncConciseBody,
                    vec![
                        b.tok("{"),
                        b.rule(NodeKind::AsyncFunctionBody, vec![ret]),
                        b.tok("}"),
                    ],
                ),
            ],
        );
        let Expression::ArrowFunction(arrow) = Dispatcher::default().expression(&node).unwrap()
        else {
            panic!("expected arrow function");
        };
        assert!(arrow.r#async);
        assert!(arrow.async_token.is_some());
        assert!(!arrow.expression);
        match &arrow.body {
            ArrowBody::Block(block) => assert!(matches!(block.body[0], Statement::Return(_))),
            ArrowBody::Expression(_) => panic!("expected block body"),
        }
    }

    #[test]
    fn test_arrow_parameter_named_async() {
        let b = CstBuilder::new();
        let node = b.rule(
            NodeKind::ArrowFunction,
            vec![
                b.rule(NodeKind::ArrowParameters, vec![binding(&b, "async")]),
                b.tok("=>"),
                b.rule(NodeKind::ConciseBody, vec![b.num("1")]),
            ],
        );
        let Expression::ArrowFunction(arrow) = Dispatcher::default().expression(&node).unwrap()
        else {
            panic!("expected arrow function");
        };
        assert!(!arrow.r#async);
        assert!(arrow.async_token.is_none());
        assert!(matches!(&arrow.params[0], Pattern::Identifier(id) if id.name == "async"));
    }

    #[test]
    fn test_async_arrow_with_parameter_named_async() {
        let b = CstBuilder::new();
        let node = b.rule(
            NodeKind::AsyncArrowFunction,
            vec![
                b.ident("async"),
                b.rule(NodeKind::AsyncArrowBindingIdentifier, vec![b.ident("async")]),
                b.tok("=>"),
                b.rule(NodeKind::AsyncConciseBody, vec![b.ident("async")]),
            ],
        );
        let Expression::ArrowFunction(arrow) = Dispatcher::default().expression(&node).unwrap()
        else {
            panic!("expected arrow function");
        };
        assert!(arrow.r#async);
        assert_eq!(arrow.params.len(), 1);
        assert!(matches!(&arrow.params[0], Pattern::Identifier(id) if id.name == "async"));
        match &arrow.body {
            ArrowBody::Expression(body) => assert!(matches!(**body, Expression::Identifier(_))),
            ArrowBody::Block(_) => panic!("expected expression body"),
        }
    }

    #[test]
    fn test_async_call_head_arrow() {
        let b = CstBuilder::new();
        let head = b.rule(
            NodeKind::CoverCallExpressionAndAsyncArrowHead,
            vec![
                b.rule(NodeKind::IdentifierReference, vec![b.ident("async")]),
                b.rule(NodeKind::Arguments, vec![b.tok("("), b.ident("a"), b.tok(")")]),
            ],
        );
        let node = b.rule(
            NodeKind::AsyncArrowFunction,
            vec![head, b.tok("=>"), b.rule(NodeKind::AsyncConciseBody, vec![b.ident("a")])],
        );
        let Expression::ArrowFunction(arrow) = Dispatcher::default().expression(&node).unwrap()
        else {
            panic!("expected arrow function");
        };
        assert!(arrow.r#async);
        assert!(arrow.async_token.is_some());
        assert_eq!(arrow.params.len(), 1);
        assert!(arrow.l_paren_token.is_some());
    }
}
