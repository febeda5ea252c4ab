//! Functions and arrow functions.
//!
//! Declarations and expressions share one field layout; converters build
//! a [`Function`] and pick the tagged form at the end.

use super::{BlockStatement, Expression, Identifier, Pattern, SourceLocation};
use crate::token::Token;
use serde::Serialize;

/// Untagged function parts, shared by declarations, expressions and methods.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub id: Option<Identifier>,
    pub params: Vec<Pattern>,
    pub body: BlockStatement,
    pub generator: bool,
    pub is_async: bool,
    pub async_token: Option<Token>,
    pub function_token: Option<Token>,
    pub star_token: Option<Token>,
    pub l_paren_token: Option<Token>,
    pub r_paren_token: Option<Token>,
    pub comma_tokens: Vec<Token>,
    pub loc: SourceLocation,
}

impl Function {
    pub fn into_declaration(self) -> FunctionDeclaration {
        FunctionDeclaration {
            id: self.id,
            params: self.params,
            body: self.body,
            generator: self.generator,
            r#async: self.is_async,
            async_token: self.async_token,
            function_token: self.function_token,
            star_token: self.star_token,
            l_paren_token: self.l_paren_token,
            r_paren_token: self.r_paren_token,
            comma_tokens: self.comma_tokens,
            loc: self.loc,
        }
    }

    pub fn into_expression(self) -> FunctionExpression {
        FunctionExpression {
            id: self.id,
            params: self.params,
            body: self.body,
            generator: self.generator,
            r#async: self.is_async,
            async_token: self.async_token,
            function_token: self.function_token,
            star_token: self.star_token,
            l_paren_token: self.l_paren_token,
            r_paren_token: self.r_paren_token,
            comma_tokens: self.comma_tokens,
            loc: self.loc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct FunctionDeclaration {
    /// `None` only for `export default function () {}`.
    pub id: Option<Identifier>,
    pub params: Vec<Pattern>,
    pub body: BlockStatement,
    pub generator: bool,
    pub r#async: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub async_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub star_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l_paren_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r_paren_token: Option<Token>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comma_tokens: Vec<Token>,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct FunctionExpression {
    pub id: Option<Identifier>,
    pub params: Vec<Pattern>,
    pub body: BlockStatement,
    pub generator: bool,
    pub r#async: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub async_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub star_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l_paren_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r_paren_token: Option<Token>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comma_tokens: Vec<Token>,
    pub loc: SourceLocation,
}

/// Body of an arrow: a block or a single expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ArrowBody {
    Block(BlockStatement),
    Expression(Box<Expression>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ArrowFunctionExpression {
    pub id: Option<Identifier>,
    pub params: Vec<Pattern>,
    pub body: ArrowBody,
    /// True when the body is an expression.
    pub expression: bool,
    pub generator: bool,
    pub r#async: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub async_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l_paren_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r_paren_token: Option<Token>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comma_tokens: Vec<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrow_token: Option<Token>,
    pub loc: SourceLocation,
}
