//! Classes and class members.

use super::{BlockStatement, Expression, FunctionExpression, Identifier, PropertyKey, SourceLocation, Statement};
use crate::token::Token;
use serde::Serialize;

/// Untagged class parts shared by declarations and expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct Class {
    pub id: Option<Identifier>,
    pub super_class: Option<Box<Expression>>,
    pub body: ClassBody,
    pub class_token: Option<Token>,
    pub extends_token: Option<Token>,
    pub loc: SourceLocation,
}

impl Class {
    pub fn into_declaration(self) -> ClassDeclaration {
        ClassDeclaration {
            id: self.id,
            super_class: self.super_class,
            body: self.body,
            class_token: self.class_token,
            extends_token: self.extends_token,
            loc: self.loc,
        }
    }

    pub fn into_expression(self) -> ClassExpression {
        ClassExpression {
            id: self.id,
            super_class: self.super_class,
            body: self.body,
            class_token: self.class_token,
            extends_token: self.extends_token,
            loc: self.loc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ClassDeclaration {
    pub id: Option<Identifier>,
    pub super_class: Option<Box<Expression>>,
    pub body: ClassBody,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extends_token: Option<Token>,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ClassExpression {
    pub id: Option<Identifier>,
    pub super_class: Option<Box<Expression>>,
    pub body: ClassBody,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extends_token: Option<Token>,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ClassBody {
    pub body: Vec<ClassMember>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l_brace_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r_brace_token: Option<Token>,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ClassMember {
    Method(MethodDefinition),
    Property(PropertyDefinition),
    StaticBlock(StaticBlock),
}

impl_located!(ClassMember { Method, Property, StaticBlock });

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodKind {
    Constructor,
    Method,
    Get,
    Set,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct MethodDefinition {
    pub key: PropertyKey,
    pub value: FunctionExpression,
    pub kind: MethodKind,
    pub computed: bool,
    pub r#static: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub static_token: Option<Token>,
    /// `get` or `set`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind_token: Option<Token>,
    pub loc: SourceLocation,
}

/// A class field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct PropertyDefinition {
    pub key: PropertyKey,
    pub value: Option<Expression>,
    pub computed: bool,
    pub r#static: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub static_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eq_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semicolon_token: Option<Token>,
    pub loc: SourceLocation,
}

/// `static { ... }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct StaticBlock {
    pub body: Vec<Statement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub static_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l_brace_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r_brace_token: Option<Token>,
    pub loc: SourceLocation,
}

impl StaticBlock {
    /// Builds a static block from a converted block body.
    pub fn from_block(block: BlockStatement, static_token: Option<Token>, loc: SourceLocation) -> Self {
        Self {
            body: block.body,
            static_token,
            l_brace_token: block.l_brace_token,
            r_brace_token: block.r_brace_token,
            loc,
        }
    }
}
