//! # ECMAScript AST
//!
//! Converts a grammar-driven ECMAScript 2025 CST into an ESTree-shaped
//! AST, optionally decorated with the keyword and punctuator tokens the
//! minimal ESTree shape drops.
//!
//! ## Architecture
//!
//! ```text
//! ecma_cst::Cst ──► convert::Dispatcher ──► ast::Program ──serde──► ESTree JSON
//!                      │
//!                      └─ token::TokenMaterializer (decoration tokens)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use ecma_ast::ast::{ModuleItem, SourceType, Statement};
//! use ecma_cst::{Cst, CstBuilder, NodeKind};
//!
//! let b = CstBuilder::new();
//! let stmt = b.rule(NodeKind::DebuggerStatement, vec![b.tok("debugger"), b.tok(";")]);
//! let program = ecma_ast::convert(&Cst::new(b.rule(NodeKind::Script, vec![stmt]))).unwrap();
//!
//! assert_eq!(program.source_type, SourceType::Script);
//! assert!(matches!(program.body[0], ModuleItem::Statement(Statement::Debugger(_))));
//! ```

pub mod ast;
pub mod convert;
pub mod error;
pub mod token;

pub use ast::{AstNode, Program};
pub use convert::Dispatcher;
pub use error::{ConvertError, ConvertResult};
pub use token::{Token, TokenKind};

use ecma_cst::Cst;

/// Converts a CST with the default configuration.
pub fn convert(cst: &Cst) -> ConvertResult<Program> {
    Dispatcher::default().convert_cst(cst)
}

/// Converts a JSON-serialized CST with the default configuration.
pub fn convert_json(json: &str) -> ConvertResult<Program> {
    Dispatcher::default().convert_json(json)
}
