//! # ECMAScript CST
//!
//! Concrete syntax tree model consumed by `ecma-ast`.
//!
//! ## Architecture
//!
//! ```text
//! JSON ──serde──► SerializedNode ──TryFrom──► Cst { root: CstNode, comments }
//!                                               │
//! CstBuilder ─────────────────────────────────────┘
//! ```
//!
//! - [`NodeKind`] is the closed set of rule and terminal kinds, grouped by
//!   [`RuleCategory`] for exhaustive dispatch.
//! - [`CstNode`] classification helpers (`is_terminal`, `token_text`,
//!   `is_token`) live in `classify`.
//!
//! ## Example
//!
//! ```rust
//! use ecma_cst::{Cst, CstBuilder, NodeKind};
//!
//! let b = CstBuilder::new();
//! let stmt = b.rule(NodeKind::EmptyStatement, vec![b.tok(";")]);
//! let cst = Cst::new(b.rule(NodeKind::Script, vec![stmt]));
//! assert!(cst.comments.is_empty());
//! ```

pub mod builder;
pub mod classify;
pub mod cst;
pub mod error;
pub mod kind;
pub mod serialized;
pub mod span;

pub use builder::CstBuilder;
pub use classify::{classify_terminal, RESERVED_WORDS};
pub use cst::{Cst, CstNode, Walk};
pub use error::CstError;
pub use kind::{NodeKind, RuleCategory};
pub use serialized::SerializedNode;
pub use span::{Located, Position, SourceLocation};
