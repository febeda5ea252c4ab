//! Import and export declarations.

use super::{ClassDeclaration, Declaration, Expression, FunctionDeclaration, Identifier, Literal, SourceLocation};
use crate::token::Token;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ModuleDeclaration {
    Import(ImportDeclaration),
    ExportNamed(ExportNamedDeclaration),
    ExportDefault(ExportDefaultDeclaration),
    ExportAll(ExportAllDeclaration),
}

impl_located!(ModuleDeclaration { Import, ExportNamed, ExportDefault, ExportAll });

/// An identifier or string naming an imported/exported binding.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ModuleExportName {
    Identifier(Identifier),
    Literal(Literal),
}

impl_located!(ModuleExportName { Identifier, Literal });

/// `with { type: "json" }` entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ImportAttribute {
    pub key: ModuleExportName,
    pub value: Literal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colon_token: Option<Token>,
    pub loc: SourceLocation,
}

/// Decoration tokens of a `with { ... }` clause.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WithClauseTokens {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l_brace_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r_brace_token: Option<Token>,
}

impl WithClauseTokens {
    pub fn is_empty(&self) -> bool {
        self.with_token.is_none() && self.l_brace_token.is_none() && self.r_brace_token.is_none()
    }
}

// =============================================================================
// IMPORTS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ImportDeclaration {
    pub specifiers: Vec<ImportSpecifierKind>,
    pub source: Literal,
    pub attributes: Vec<ImportAttribute>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l_brace_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r_brace_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_token: Option<Token>,
    #[serde(skip_serializing_if = "WithClauseTokens::is_empty")]
    pub with_clause_tokens: WithClauseTokens,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semicolon_token: Option<Token>,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ImportSpecifierKind {
    Named(ImportSpecifier),
    Default(ImportDefaultSpecifier),
    Namespace(ImportNamespaceSpecifier),
}

impl_located!(ImportSpecifierKind { Named, Default, Namespace });

/// `{ imported as local }`; for `{ a }` both names are the same identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ImportSpecifier {
    pub imported: ModuleExportName,
    pub local: Identifier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_token: Option<Token>,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ImportDefaultSpecifier {
    pub local: Identifier,
    pub loc: SourceLocation,
}

/// `* as local`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ImportNamespaceSpecifier {
    pub local: Identifier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub star_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_token: Option<Token>,
    pub loc: SourceLocation,
}

// =============================================================================
// EXPORTS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ExportNamedDeclaration {
    pub declaration: Option<Declaration>,
    pub specifiers: Vec<ExportSpecifier>,
    pub source: Option<Literal>,
    pub attributes: Vec<ImportAttribute>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l_brace_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r_brace_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_token: Option<Token>,
    #[serde(skip_serializing_if = "WithClauseTokens::is_empty")]
    pub with_clause_tokens: WithClauseTokens,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semicolon_token: Option<Token>,
    pub loc: SourceLocation,
}

/// `local as exported`; for `{ a }` both names are the same.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ExportSpecifier {
    pub local: ModuleExportName,
    pub exported: ModuleExportName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_token: Option<Token>,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExportDefaultKind {
    Function(Box<FunctionDeclaration>),
    Class(Box<ClassDeclaration>),
    Expression(Expression),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ExportDefaultDeclaration {
    pub declaration: ExportDefaultKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semicolon_token: Option<Token>,
    pub loc: SourceLocation,
}

/// `export * from "m"` / `export * as ns from "m"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ExportAllDeclaration {
    pub exported: Option<ModuleExportName>,
    pub source: Literal,
    pub attributes: Vec<ImportAttribute>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub star_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_token: Option<Token>,
    #[serde(skip_serializing_if = "WithClauseTokens::is_empty")]
    pub with_clause_tokens: WithClauseTokens,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semicolon_token: Option<Token>,
    pub loc: SourceLocation,
}
