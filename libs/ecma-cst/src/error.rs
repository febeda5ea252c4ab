//! # CST Errors
//!
//! Failures raised while turning a serialized tree into a [`Cst`](crate::Cst).

use crate::span::SourceLocation;
use thiserror::Error;

/// Errors that can occur while building a CST from external input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CstError {
    /// A composite node carries a rule name outside the ES2025 grammar.
    #[error("unknown grammar rule `{name}`{}", fmt_loc(.loc))]
    UnknownRule {
        name: String,
        loc: Option<SourceLocation>,
    },

    /// A terminal node has no location and none can be derived.
    #[error("terminal `{name}` has no source location")]
    MissingLocation { name: String },
}

fn fmt_loc(loc: &Option<SourceLocation>) -> String {
    loc.map(|l| format!(" at {}", l.start)).unwrap_or_default()
}
