//! # Serialized CST
//!
//! The wire form of a CST as emitted by the external grammar layer, and
//! its conversion into typed [`CstNode`]s.
//!
//! ```text
//! { "name": "AdditiveExpression",
//!   "children": [ { "name": "IdentifierName", "value": "a", "loc": {…} }, … ],
//!   "loc": { "start": {"line": 1, "column": 0, "offset": 0}, "end": {…} } }
//! ```
//!
//! Rule names may be plain or qualified (`Es2025Parser.AdditiveExpression`).
//! A rule node may omit `loc`, in which case it spans its children.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let node: SerializedNode = serde_json::from_str(json)?;
//! let cst = Cst::try_from(node)?;
//! ```

use crate::classify::classify_terminal;
use crate::cst::{Cst, CstNode};
use crate::error::CstError;
use crate::kind::NodeKind;
use crate::span::SourceLocation;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A CST node as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializedNode {
    /// Grammar rule name, plain or qualified.
    pub name: String,
    /// Raw source text of terminal nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Ordered children.
    #[serde(default)]
    pub children: Vec<SerializedNode>,
    /// Source span; optional on rule nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<SourceLocation>,
}

impl SerializedNode {
    /// Check if this node is a terminal on the wire.
    pub fn is_terminal(&self) -> bool {
        self.value.is_some() && self.children.is_empty()
    }
}

impl TryFrom<SerializedNode> for CstNode {
    type Error = CstError;

    fn try_from(node: SerializedNode) -> Result<Self, Self::Error> {
        let SerializedNode {
            name,
            value,
            children,
            loc,
        } = node;

        if let (Some(text), true) = (value.as_deref(), children.is_empty()) {
            let Some(loc) = loc else {
                return Err(CstError::MissingLocation { name });
            };
            let kind = match NodeKind::from_name(&name) {
                Some(kind) => kind,
                None => {
                    let kind = classify_terminal(text);
                    debug!(name = %name, text, kind = %kind, "classified terminal by text");
                    kind
                }
            };
            return Ok(CstNode::terminal(kind, text, loc));
        }

        let Some(kind) = NodeKind::from_name(&name) else {
            return Err(CstError::UnknownRule { name, loc });
        };
        let children = children
            .into_iter()
            .map(CstNode::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        // Text echoed on rule nodes is dropped; children carry it.
        Ok(match loc {
            Some(loc) => CstNode::rule_at(kind, children, loc),
            None => CstNode::rule(kind, children),
        })
    }
}

impl TryFrom<SerializedNode> for Cst {
    type Error = CstError;

    fn try_from(node: SerializedNode) -> Result<Self, Self::Error> {
        Ok(Cst::new(CstNode::try_from(node)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn loc_json(start: usize, end: usize) -> serde_json::Value {
        json!({
            "start": {"line": 1, "column": start, "offset": start},
            "end": {"line": 1, "column": end, "offset": end}
        })
    }

    #[test]
    fn test_qualified_names_and_derived_location() {
        let wire = json!({
            "name": "Es2025Parser.AdditiveExpression",
            "children": [
                {"name": "IdentifierName", "value": "a", "loc": loc_json(0, 1)},
                {"name": "Punctuator", "value": "+", "loc": loc_json(2, 3)},
                {"name": "es2025::IdentifierName", "value": "b", "loc": loc_json(4, 5)}
            ]
        });
        let node: SerializedNode = serde_json::from_value(wire).unwrap();
        let cst = CstNode::try_from(node).unwrap();
        assert_eq!(cst.kind, NodeKind::AdditiveExpression);
        assert_eq!(cst.loc.end.offset, 5);
        assert_eq!(cst.children[2].kind, NodeKind::IdentifierName);
    }

    #[test]
    fn test_unknown_terminal_name_classified_by_text() {
        let wire = json!({"name": "Token", "value": "=>", "loc": loc_json(0, 2)});
        let node: SerializedNode = serde_json::from_value(wire).unwrap();
        let cst = CstNode::try_from(node).unwrap();
        assert_eq!(cst.kind, NodeKind::Punctuator);
        assert!(cst.is_token("=>"));
    }

    #[test]
    fn test_unknown_rule_rejected() {
        let wire = json!({
            "name": "JSXElement",
            "children": [{"name": "Punctuator", "value": "<", "loc": loc_json(0, 1)}],
            "loc": loc_json(0, 1)
        });
        let node: SerializedNode = serde_json::from_value(wire).unwrap();
        let err = CstNode::try_from(node).unwrap_err();
        assert!(matches!(err, CstError::UnknownRule { ref name, .. } if name == "JSXElement"));
    }

    #[test]
    fn test_terminal_without_location_rejected() {
        let wire = json!({"name": "Punctuator", "value": ";"});
        let node: SerializedNode = serde_json::from_value(wire).unwrap();
        assert_eq!(
            CstNode::try_from(node).unwrap_err(),
            CstError::MissingLocation {
                name: "Punctuator".to_string()
            }
        );
    }

    #[test]
    fn test_empty_rule_node_kept() {
        let wire = json!({"name": "StatementList", "children": [], "loc": loc_json(0, 0)});
        let node: SerializedNode = serde_json::from_value(wire).unwrap();
        let cst = CstNode::try_from(node).unwrap();
        assert_eq!(cst.kind, NodeKind::StatementList);
        assert!(cst.children.is_empty());
    }
}
