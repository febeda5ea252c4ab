//! # Conversion Errors
//!
//! Every failure aborts the whole conversion; there is no partial AST.

use ecma_cst::{CstError, NodeKind, SourceLocation};
use thiserror::Error;

/// Errors raised while converting a CST to an AST.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    /// The node's kind has no converter in the position it appeared.
    #[error("unsupported node kind `{kind}` ({context}) at {loc}")]
    UnsupportedNodeKind {
        kind: NodeKind,
        context: &'static str,
        loc: SourceLocation,
    },

    /// A required child or token is missing or out of place.
    #[error("malformed `{kind}` at {loc}: {reason} near `{snippet}`")]
    MalformedNode {
        kind: NodeKind,
        reason: String,
        snippet: String,
        loc: SourceLocation,
    },

    /// The input could not be turned into a CST.
    #[error(transparent)]
    Cst(#[from] CstError),

    /// Serialized CST input was not valid JSON for a CST node.
    #[error("invalid serialized CST: {0}")]
    Json(String),
}

impl From<serde_json::Error> for ConvertError {
    fn from(err: serde_json::Error) -> Self {
        ConvertError::Json(err.to_string())
    }
}

/// Result type of every converter.
pub type ConvertResult<T> = Result<T, ConvertError>;
