//! # Parameter Conversion
//!
//! Formal parameter lists of functions and methods, and arrow parameter
//! lists recovered from the cover grammar.
//!
//! ```text
//! (a, [b], ...c) => 0
//!   CoverParenthesizedExpressionAndArrowParameterList
//!     "(" Expression[a "," ArrayLiteral[b]] "," "..." BindingIdentifier[c] ")"
//!
//! async (a, b) => 0
//!   CoverCallExpressionAndAsyncArrowHead [ async, Arguments[( a , b )] ]
//! ```
//!
//! In both cover shapes the parameters were parsed as expressions; they
//! are converted and then reinterpreted as binding patterns.

use super::patterns::TargetContext;
use super::Dispatcher;
use crate::ast::{Expression, ExpressionOrSpread, Located, Pattern, RestElement};
use crate::error::ConvertResult;
use crate::token::Token;
use ecma_cst::{CstNode, NodeKind};
use tracing::debug;

/// Converted parameters with their delimiters.
#[derive(Debug, Default)]
pub(crate) struct ParamList {
    pub params: Vec<Pattern>,
    pub l_paren: Option<Token>,
    pub r_paren: Option<Token>,
    pub commas: Vec<Token>,
}

const LIST_KINDS: &[NodeKind] = &[
    NodeKind::FormalParameters,
    NodeKind::UniqueFormalParameters,
    NodeKind::FormalParameterList,
    NodeKind::PropertySetParameterList,
    NodeKind::ArrowFormalParameters,
];

impl Dispatcher {
    /// Collects parameters from a run of siblings that may include the
    /// surrounding parentheses and nested parameter-list rules.
    pub(crate) fn formal_parameters(&self, children: &[&CstNode]) -> ConvertResult<ParamList> {
        let mut list = ParamList::default();
        for child in children {
            self.collect_params(child, &mut list)?;
        }
        Ok(list)
    }

    fn collect_params(&self, node: &CstNode, list: &mut ParamList) -> ConvertResult<()> {
        if LIST_KINDS.contains(&node.kind) && !node.is_terminal() {
            let mut iter = node.children.iter();
            while let Some(child) = iter.next() {
                if child.is_token("...") {
                    let target = iter
                        .next()
                        .ok_or_else(|| self.malformed(node, "missing rest parameter"))?;
                    list.params.push(self.rest_param(child, target)?);
                } else {
                    self.collect_params(child, list)?;
                }
            }
            return Ok(());
        }
        if node.is_token("(") {
            list.l_paren = self.tok(node);
        } else if node.is_token(")") {
            list.r_paren = self.tok(node);
        } else if node.is_token(",") {
            list.commas.extend(self.tok(node));
        } else {
            list.params.push(self.pattern(node)?);
        }
        Ok(())
    }

    fn rest_param(&self, ellipsis: &CstNode, target: &CstNode) -> ConvertResult<Pattern> {
        Ok(Pattern::Rest(RestElement {
            argument: Box::new(self.pattern(target)?),
            ellipsis_token: self.tok(ellipsis),
            loc: ellipsis.loc.merge(&target.loc),
        }))
    }

    /// Converts the parameter part of an arrow function (or any formal
    /// parameter list).
    pub(crate) fn arrow_parameters(&self, node: &CstNode) -> ConvertResult<ParamList> {
        if node.is_terminal() {
            return Ok(ParamList {
                params: vec![Pattern::Identifier(self.identifier(node)?)],
                ..ParamList::default()
            });
        }
        match node.kind {
            NodeKind::BindingIdentifier
            | NodeKind::AsyncArrowBindingIdentifier
            | NodeKind::IdentifierReference
            | NodeKind::Identifier => Ok(ParamList {
                params: vec![Pattern::Identifier(self.identifier(node)?)],
                ..ParamList::default()
            }),
            NodeKind::ArrowParameters => {
                let only = self.require(node.only_child(), node, "arrow parameters")?;
                self.arrow_parameters(only)
            }
            NodeKind::AsyncArrowHead => {
                let params = node
                    .rule_children()
                    .next()
                    .ok_or_else(|| self.malformed(node, "missing async arrow parameters"))?;
                self.arrow_parameters(params)
            }
            NodeKind::CoverParenthesizedExpressionAndArrowParameterList => self.cover_parameters(node),
            NodeKind::CoverCallExpressionAndAsyncArrowHead => self.async_head_parameters(node),
            kind if LIST_KINDS.contains(&kind) => self.formal_parameters(&[node]),
            _ => Err(self.unsupported(node, "arrow parameters")),
        }
    }

    /// `( Expression? ,? (... BindingTarget)? )` read as parameters.
    fn cover_parameters(&self, node: &CstNode) -> ConvertResult<ParamList> {
        let (l_paren, inner, r_paren) = self.bracketed(node, "(", ")")?;
        let mut list = ParamList {
            l_paren: self.tok(l_paren),
            r_paren: self.tok(r_paren),
            ..ParamList::default()
        };
        let mut iter = inner.iter();
        while let Some(child) = iter.next() {
            if child.is_token(",") {
                list.commas.extend(self.tok(child));
            } else if child.is_token("...") {
                let target = iter
                    .next()
                    .ok_or_else(|| self.malformed(node, "missing rest parameter"))?;
                list.params.push(self.rest_param(child, target)?);
            } else if child.kind == NodeKind::Expression && child.children.len() > 1 {
                for item in &child.children {
                    if item.is_token(",") {
                        list.commas.extend(self.tok(item));
                    } else {
                        self.push_reinterpreted(item, self.expression(item)?, &mut list)?;
                    }
                }
            } else {
                self.push_reinterpreted(child, self.expression(child)?, &mut list)?;
            }
        }
        Ok(list)
    }

    /// `async ( args )` where the arguments become parameters.
    fn async_head_parameters(&self, node: &CstNode) -> ConvertResult<ParamList> {
        let args_node = self.require(node.find_child(NodeKind::Arguments), node, "arguments")?;
        let args = self.arguments(args_node)?;
        let mut list = ParamList {
            l_paren: args.l_paren,
            r_paren: args.r_paren,
            commas: args.commas,
            ..ParamList::default()
        };
        for item in args.items {
            match item {
                ExpressionOrSpread::Expression(expr) => {
                    self.push_reinterpreted(args_node, expr, &mut list)?;
                }
                ExpressionOrSpread::Spread(spread) => {
                    match self.reinterpret(spread.argument, TargetContext::Binding) {
                        Ok(target) => list.params.push(Pattern::Rest(RestElement {
                            argument: Box::new(target),
                            ellipsis_token: spread.ellipsis_token,
                            loc: spread.loc,
                        })),
                        Err(rejected) => self.reject_parameter(args_node, &rejected)?,
                    }
                }
            }
        }
        Ok(list)
    }

    fn push_reinterpreted(
        &self,
        node: &CstNode,
        expr: Expression,
        list: &mut ParamList,
    ) -> ConvertResult<()> {
        match self.reinterpret(expr, TargetContext::Binding) {
            Ok(pattern) => list.params.push(pattern),
            Err(rejected) => self.reject_parameter(node, &rejected)?,
        }
        Ok(())
    }

    /// A parameter with no binding reading is dropped when leniency is on
    /// and an error otherwise.
    fn reject_parameter(&self, node: &CstNode, rejected: &Expression) -> ConvertResult<()> {
        if self.config().lenient_arrow_params {
            debug!(
                kind = rejected.type_name(),
                loc = %rejected.loc(),
                "dropping arrow parameter with no binding reading"
            );
            Ok(())
        } else {
            Err(self.malformed(
                node,
                format!("{} is not a valid arrow parameter", rejected.type_name()),
            ))
        }
    }
}
