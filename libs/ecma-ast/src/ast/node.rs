//! The result of converting an arbitrary CST node.

use super::{
    CatchClause, ClassBody, ClassMember, ExportSpecifier, Expression, ExpressionOrSpread,
    ImportAttribute, ImportSpecifierKind, ModuleDeclaration, ModuleItem, ObjectMember, Pattern,
    Program, Statement, SwitchCase, VariableDeclarator,
};
use crate::token::Token;
use serde::Serialize;

/// Whatever a single CST node converts to.
///
/// Most rules produce a statement, expression or pattern. List rules
/// produce `Items`; rule fragments that have an ESTree counterpart of
/// their own (`CaseClause`, `Catch`, `ImportSpecifier`, …) produce that
/// node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AstNode {
    Program(Program),
    Items(Vec<ModuleItem>),
    Statement(Statement),
    Expression(Expression),
    Pattern(Pattern),
    ModuleDeclaration(ModuleDeclaration),
    VariableDeclarator(VariableDeclarator),
    SwitchCase(SwitchCase),
    CatchClause(CatchClause),
    Property(ObjectMember),
    ClassMember(ClassMember),
    ClassBody(ClassBody),
    Params(Vec<Pattern>),
    Arguments(Vec<ExpressionOrSpread>),
    ImportSpecifier(ImportSpecifierKind),
    ExportSpecifier(ExportSpecifier),
    ImportAttribute(ImportAttribute),
    Token(Token),
}

impl AstNode {
    pub fn into_program(self) -> Option<Program> {
        match self {
            AstNode::Program(program) => Some(program),
            _ => None,
        }
    }

    pub fn into_statement(self) -> Option<Statement> {
        match self {
            AstNode::Statement(stmt) => Some(stmt),
            _ => None,
        }
    }

    pub fn into_expression(self) -> Option<Expression> {
        match self {
            AstNode::Expression(expr) => Some(expr),
            _ => None,
        }
    }

    pub fn into_pattern(self) -> Option<Pattern> {
        match self {
            AstNode::Pattern(pattern) => Some(pattern),
            _ => None,
        }
    }
}
