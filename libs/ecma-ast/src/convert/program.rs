//! # Program Conversion
//!
//! Builds the `Program` root: its body, its directive prologue, its
//! comments and its source type.
//!
//! ```text
//! Script  / ScriptBody  → "script"
//! Module  / ModuleBody  → "module"
//! Program               → "module" if any import/export, else the configured default
//! ```

use super::Dispatcher;
use crate::ast::{ModuleItem, Program, SourceType};
use crate::error::ConvertResult;
use config::constants::SourceKind;
use ecma_cst::{CstNode, NodeKind};
use tracing::debug;

impl Dispatcher {
    /// Converts a root node and its hoisted comments into a `Program`.
    pub(crate) fn program(&self, root: &CstNode, comments: &[CstNode]) -> ConvertResult<Program> {
        let declared = match root.kind {
            NodeKind::Script | NodeKind::ScriptBody => Some(SourceType::Script),
            NodeKind::Module | NodeKind::ModuleBody => Some(SourceType::Module),
            NodeKind::Program => None,
            _ => return Err(self.unsupported(root, "program root")),
        };

        let mut body = Vec::new();
        for child in &root.children {
            self.collect_items(child, &mut body)?;
        }

        let has_module_syntax = body.iter().any(ModuleItem::is_module_declaration);
        let source_type = match declared {
            Some(SourceType::Script) if has_module_syntax => {
                return Err(self.malformed(root, "import or export in a script"));
            }
            Some(declared) => declared,
            None if has_module_syntax => SourceType::Module,
            None => match self.config().default_source_type {
                SourceKind::Script => SourceType::Script,
                SourceKind::Module => SourceType::Module,
            },
        };

        for item in body.iter_mut() {
            let ModuleItem::Statement(stmt) = item else {
                break;
            };
            if !self.mark_directive(stmt) {
                break;
            }
        }

        let comments = comments
            .iter()
            .map(|c| self.comment(c))
            .collect::<ConvertResult<Vec<_>>>()?;
        debug!(
            ?source_type,
            items = body.len(),
            comments = comments.len(),
            "converted program"
        );
        Ok(Program {
            source_type,
            body,
            comments,
            loc: root.loc,
        })
    }
}
