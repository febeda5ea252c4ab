//! # AST Types
//!
//! ESTree-shaped node types produced by the converter.
//!
//! ## Serialization
//!
//! Node structs serialize with a `"type"` tag equal to their ESTree name
//! and camelCase fields; the sum types (`Statement`, `Expression`,
//! `Pattern`, …) are untagged so each variant contributes exactly its
//! node's own tag. Decoration tokens are skipped when absent.
//!
//! ```text
//! BinaryExpression { operator: "-", left: Identifier, right: Identifier, loc }
//!   → {"type":"BinaryExpression","operator":"-","left":{…},"right":{…},"loc":{…}}
//! ```

/// Implements [`Located`](ecma_cst::Located) for a sum type whose every
/// variant wraps a node with a `loc` field.
macro_rules! impl_located {
    ($name:ident { $($variant:ident),* $(,)? }) => {
        impl ecma_cst::Located for $name {
            fn loc(&self) -> SourceLocation {
                match self {
                    $($name::$variant(node) => node.loc,)*
                }
            }
        }
    };
}

mod classes;
mod expressions;
mod functions;
mod modules;
mod node;
mod operators;
mod patterns;
mod statements;

pub use classes::*;
pub use expressions::*;
pub use functions::*;
pub use modules::*;
pub use node::AstNode;
pub use operators::*;
pub use patterns::*;
pub use statements::*;

pub use ecma_cst::{Located, Position, SourceLocation};

use serde::Serialize;

// =============================================================================
// PROGRAM
// =============================================================================

/// Goal symbol the program was parsed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Script,
    Module,
}

/// Root of every converted tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct Program {
    pub source_type: SourceType,
    pub body: Vec<ModuleItem>,
    pub comments: Vec<Comment>,
    pub loc: SourceLocation,
}

/// A top-level item: a statement or an import/export declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ModuleItem {
    Statement(Statement),
    ModuleDeclaration(ModuleDeclaration),
}

impl ModuleItem {
    /// Check if this item is an import or export.
    pub fn is_module_declaration(&self) -> bool {
        matches!(self, ModuleItem::ModuleDeclaration(_))
    }
}

impl Located for ModuleItem {
    fn loc(&self) -> SourceLocation {
        match self {
            ModuleItem::Statement(stmt) => stmt.loc(),
            ModuleItem::ModuleDeclaration(decl) => decl.loc(),
        }
    }
}

impl From<Statement> for ModuleItem {
    fn from(stmt: Statement) -> Self {
        ModuleItem::Statement(stmt)
    }
}

/// `// line` or `/* block */`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CommentKind {
    Line,
    Block,
}

/// A comment, with its delimiters stripped from `value`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comment {
    #[serde(rename = "type")]
    pub kind: CommentKind,
    pub value: String,
    pub loc: SourceLocation,
}

// =============================================================================
// LEAVES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Identifier {
    pub name: String,
    pub loc: SourceLocation,
}

impl Identifier {
    pub fn new(name: impl Into<String>, loc: SourceLocation) -> Self {
        Self {
            name: name.into(),
            loc,
        }
    }
}

/// `#name` inside a class body; `name` excludes the `#`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct PrivateIdentifier {
    pub name: String,
    pub loc: SourceLocation,
}

/// Literal value as JSON can carry it. Regex and bigint literals use `Null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LiteralValue {
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegExpLiteral {
    pub pattern: String,
    pub flags: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Literal {
    pub value: LiteralValue,
    pub raw: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regex: Option<RegExpLiteral>,
    /// Decimal digits of a bigint literal, without separators or `n`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bigint: Option<String>,
    pub loc: SourceLocation,
}

impl Literal {
    /// Returns the string value of a string literal.
    pub fn as_str(&self) -> Option<&str> {
        match &self.value {
            LiteralValue::String(s) => Some(s),
            _ => None,
        }
    }
}
