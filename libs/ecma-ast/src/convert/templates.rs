//! # Template Literal Conversion
//!
//! Template chunks arrive as terminals carrying their delimiters:
//!
//! ```text
//! `a${x}b${y}c`
//!   TemplateHead "`a${"   TemplateMiddle "}b${"   TemplateTail "}c`"
//! ```
//!
//! Inside template rules a terminal is a chunk when it has a template kind
//! or starts with a backtick or `}`; everything else is a substitution.

use super::literals::cook_template;
use super::Dispatcher;
use crate::ast::{TemplateElement, TemplateLiteral, TemplateValue};
use crate::error::ConvertResult;
use ecma_cst::{CstNode, NodeKind};

const TEMPLATE_RULES: &[NodeKind] = &[
    NodeKind::TemplateLiteral,
    NodeKind::SubstitutionTemplate,
    NodeKind::TemplateSpans,
    NodeKind::TemplateMiddleList,
];

impl Dispatcher {
    /// Converts a `TemplateLiteral` rule, a `SubstitutionTemplate`, or a
    /// bare `NoSubstitutionTemplate` terminal.
    pub(crate) fn template_literal(&self, node: &CstNode) -> ConvertResult<TemplateLiteral> {
        let mut chunks = Vec::new();
        let mut substitutions = Vec::new();
        if is_chunk(node) {
            chunks.push(node);
        } else {
            collect_parts(node, &mut chunks, &mut substitutions);
        }
        if chunks.len() != substitutions.len() + 1 {
            return Err(self.malformed(node, "template chunks and substitutions do not alternate"));
        }

        let last = chunks.len() - 1;
        let quasis = chunks
            .iter()
            .enumerate()
            .map(|(i, chunk)| self.template_element(chunk, i == last))
            .collect::<ConvertResult<Vec<_>>>()?;
        let expressions = substitutions
            .into_iter()
            .map(|sub| self.expression(sub))
            .collect::<ConvertResult<Vec<_>>>()?;

        Ok(TemplateLiteral {
            quasis,
            expressions,
            loc: node.loc,
        })
    }

    fn template_element(&self, chunk: &CstNode, tail: bool) -> ConvertResult<TemplateElement> {
        let text = chunk.text_or_empty();
        let body = text
            .strip_prefix(&['`', '}'][..])
            .ok_or_else(|| self.malformed(chunk, "template chunk must start with ` or }"))?;
        let body = if tail {
            body.strip_suffix('`')
        } else {
            body.strip_suffix("${")
        }
        .ok_or_else(|| self.malformed(chunk, "template chunk is not terminated"))?;

        let raw = body.replace("\r\n", "\n").replace('\r', "\n");
        let cooked = cook_template(&raw);
        Ok(TemplateElement {
            value: TemplateValue { raw, cooked },
            tail,
            loc: chunk.loc,
        })
    }
}

fn collect_parts<'a>(node: &'a CstNode, chunks: &mut Vec<&'a CstNode>, subs: &mut Vec<&'a CstNode>) {
    for child in &node.children {
        if is_chunk(child) {
            chunks.push(child);
        } else if TEMPLATE_RULES.contains(&child.kind) {
            collect_parts(child, chunks, subs);
        } else {
            subs.push(child);
        }
    }
}

fn is_chunk(node: &CstNode) -> bool {
    node.is_terminal()
        && (matches!(
            node.kind,
            NodeKind::NoSubstitutionTemplate
                | NodeKind::TemplateHead
                | NodeKind::TemplateMiddle
                | NodeKind::TemplateTail
        ) || node.text_or_empty().starts_with(&['`', '}'][..]))
}
