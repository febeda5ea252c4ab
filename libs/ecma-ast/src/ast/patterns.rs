//! Binding and assignment patterns.

use super::{Expression, Identifier, PropertyKey, PropertyKind, SourceLocation};
use crate::token::Token;
use serde::Serialize;

/// A binding or assignment target.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Pattern {
    Identifier(Identifier),
    Object(ObjectPattern),
    Array(ArrayPattern),
    Rest(RestElement),
    Assignment(AssignmentPattern),
    /// A member expression (or other simple target) in assignment position.
    Expression(Box<Expression>),
}

impl ecma_cst::Located for Pattern {
    fn loc(&self) -> SourceLocation {
        match self {
            Pattern::Identifier(node) => node.loc,
            Pattern::Object(node) => node.loc,
            Pattern::Array(node) => node.loc,
            Pattern::Rest(node) => node.loc,
            Pattern::Assignment(node) => node.loc,
            Pattern::Expression(expr) => ecma_cst::Located::loc(expr.as_ref()),
        }
    }
}

impl Pattern {
    /// ESTree type name of the node.
    pub fn type_name(&self) -> &'static str {
        match self {
            Pattern::Identifier(_) => "Identifier",
            Pattern::Object(_) => "ObjectPattern",
            Pattern::Array(_) => "ArrayPattern",
            Pattern::Rest(_) => "RestElement",
            Pattern::Assignment(_) => "AssignmentPattern",
            Pattern::Expression(expr) => expr.type_name(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ObjectPattern {
    pub properties: Vec<ObjectPatternProperty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l_brace_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r_brace_token: Option<Token>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comma_tokens: Vec<Token>,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ObjectPatternProperty {
    Property(AssignmentProperty),
    Rest(RestElement),
}

impl_located!(ObjectPatternProperty { Property, Rest });

/// `key: value` or shorthand `key` inside an object pattern.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Property", rename_all = "camelCase")]
pub struct AssignmentProperty {
    pub key: PropertyKey,
    pub value: Pattern,
    pub kind: PropertyKind,
    pub method: bool,
    pub shorthand: bool,
    pub computed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colon_token: Option<Token>,
    pub loc: SourceLocation,
}

/// `[a, , b]`; holes are `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ArrayPattern {
    pub elements: Vec<Option<Pattern>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l_bracket_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r_bracket_token: Option<Token>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comma_tokens: Vec<Token>,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct RestElement {
    pub argument: Box<Pattern>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ellipsis_token: Option<Token>,
    pub loc: SourceLocation,
}

/// A target with a default value: `a = 1`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct AssignmentPattern {
    pub left: Box<Pattern>,
    pub right: Box<Expression>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eq_token: Option<Token>,
    pub loc: SourceLocation,
}
