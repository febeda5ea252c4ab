//! Statement and declaration nodes.

use super::{ClassDeclaration, Expression, FunctionDeclaration, Identifier, Pattern, SourceLocation};
use crate::token::Token;
use serde::Serialize;

/// Any ESTree statement, declarations included.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Statement {
    Expression(ExpressionStatement),
    Block(BlockStatement),
    Empty(EmptyStatement),
    Debugger(DebuggerStatement),
    With(WithStatement),
    Return(ReturnStatement),
    Labeled(LabeledStatement),
    Break(BreakStatement),
    Continue(ContinueStatement),
    If(IfStatement),
    Switch(SwitchStatement),
    Throw(ThrowStatement),
    Try(TryStatement),
    While(WhileStatement),
    DoWhile(DoWhileStatement),
    For(ForStatement),
    ForIn(ForInStatement),
    ForOf(ForOfStatement),
    FunctionDeclaration(Box<FunctionDeclaration>),
    VariableDeclaration(VariableDeclaration),
    ClassDeclaration(Box<ClassDeclaration>),
}

impl_located!(Statement {
    Expression, Block, Empty, Debugger, With, Return, Labeled, Break,
    Continue, If, Switch, Throw, Try, While, DoWhile, For, ForIn, ForOf,
    FunctionDeclaration, VariableDeclaration, ClassDeclaration,
});

impl Statement {
    /// Returns the directive text if this is a directive prologue entry.
    pub fn directive(&self) -> Option<&str> {
        match self {
            Statement::Expression(stmt) => stmt.directive.as_deref(),
            _ => None,
        }
    }
}

/// A declaration usable after `export`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Declaration {
    Function(Box<FunctionDeclaration>),
    Variable(VariableDeclaration),
    Class(Box<ClassDeclaration>),
}

impl_located!(Declaration { Function, Variable, Class });

impl From<Declaration> for Statement {
    fn from(decl: Declaration) -> Self {
        match decl {
            Declaration::Function(f) => Statement::FunctionDeclaration(f),
            Declaration::Variable(v) => Statement::VariableDeclaration(v),
            Declaration::Class(c) => Statement::ClassDeclaration(c),
        }
    }
}

impl TryFrom<Statement> for Declaration {
    type Error = Statement;

    fn try_from(stmt: Statement) -> Result<Self, Self::Error> {
        match stmt {
            Statement::FunctionDeclaration(f) => Ok(Declaration::Function(f)),
            Statement::VariableDeclaration(v) => Ok(Declaration::Variable(v)),
            Statement::ClassDeclaration(c) => Ok(Declaration::Class(c)),
            other => Err(other),
        }
    }
}

/// `expr;`. A string literal in a directive prologue also carries
/// `directive` (its raw text without quotes).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ExpressionStatement {
    pub expression: Expression,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directive: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semicolon_token: Option<Token>,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct BlockStatement {
    pub body: Vec<Statement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l_brace_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r_brace_token: Option<Token>,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct EmptyStatement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semicolon_token: Option<Token>,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct DebuggerStatement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debugger_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semicolon_token: Option<Token>,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct WithStatement {
    pub object: Expression,
    pub body: Box<Statement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l_paren_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r_paren_token: Option<Token>,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ReturnStatement {
    pub argument: Option<Expression>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semicolon_token: Option<Token>,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct LabeledStatement {
    pub label: Identifier,
    pub body: Box<Statement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colon_token: Option<Token>,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct BreakStatement {
    pub label: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub break_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semicolon_token: Option<Token>,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ContinueStatement {
    pub label: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continue_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semicolon_token: Option<Token>,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct IfStatement {
    pub test: Expression,
    pub consequent: Box<Statement>,
    pub alternate: Option<Box<Statement>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub if_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l_paren_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r_paren_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub else_token: Option<Token>,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct SwitchStatement {
    pub discriminant: Expression,
    pub cases: Vec<SwitchCase>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub switch_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l_paren_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r_paren_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l_brace_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r_brace_token: Option<Token>,
    pub loc: SourceLocation,
}

/// `case test:` or `default:` (with `test` null).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct SwitchCase {
    pub test: Option<Expression>,
    pub consequent: Vec<Statement>,
    /// `case` or `default`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colon_token: Option<Token>,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ThrowStatement {
    pub argument: Expression,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub throw_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semicolon_token: Option<Token>,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct TryStatement {
    pub block: BlockStatement,
    pub handler: Option<CatchClause>,
    pub finalizer: Option<BlockStatement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub try_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finally_token: Option<Token>,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct CatchClause {
    pub param: Option<Pattern>,
    pub body: BlockStatement,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catch_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l_paren_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r_paren_token: Option<Token>,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct WhileStatement {
    pub test: Expression,
    pub body: Box<Statement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub while_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l_paren_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r_paren_token: Option<Token>,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct DoWhileStatement {
    pub body: Box<Statement>,
    pub test: Expression,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub do_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub while_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l_paren_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r_paren_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semicolon_token: Option<Token>,
    pub loc: SourceLocation,
}

/// Initializer clause of a classic `for`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ForInit {
    VariableDeclaration(VariableDeclaration),
    Expression(Expression),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ForStatement {
    pub init: Option<ForInit>,
    pub test: Option<Expression>,
    pub update: Option<Expression>,
    pub body: Box<Statement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub for_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l_paren_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r_paren_token: Option<Token>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub semicolon_tokens: Vec<Token>,
    pub loc: SourceLocation,
}

/// Left-hand side of `for-in` / `for-of`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ForLeft {
    VariableDeclaration(VariableDeclaration),
    Pattern(Pattern),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ForInStatement {
    pub left: ForLeft,
    pub right: Expression,
    pub body: Box<Statement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub for_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l_paren_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r_paren_token: Option<Token>,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ForOfStatement {
    pub left: ForLeft,
    pub right: Expression,
    pub body: Box<Statement>,
    pub r#await: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub for_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub await_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l_paren_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub of_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r_paren_token: Option<Token>,
    pub loc: SourceLocation,
}

// =============================================================================
// VARIABLES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableKind {
    Var,
    Let,
    Const,
}

impl VariableKind {
    pub fn from_text(text: &str) -> Option<Self> {
        match text {
            "var" => Some(Self::Var),
            "let" => Some(Self::Let),
            "const" => Some(Self::Const),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct VariableDeclaration {
    pub declarations: Vec<VariableDeclarator>,
    pub kind: VariableKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind_token: Option<Token>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comma_tokens: Vec<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semicolon_token: Option<Token>,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct VariableDeclarator {
    pub id: Pattern,
    pub init: Option<Expression>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eq_token: Option<Token>,
    pub loc: SourceLocation,
}
