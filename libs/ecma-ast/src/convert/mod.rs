//! # CST to AST Conversion
//!
//! The [`Dispatcher`] routes every CST node to the converter for its rule
//! and is the single recursion hub: converters for expressions,
//! statements, functions, classes, patterns and modules are all
//! `impl Dispatcher` blocks in the sibling modules and call back into it
//! through `&self`.
//!
//! ## Architecture
//!
//! ```text
//! Cst ──► Dispatcher::convert_cst
//!           └─ program.rs ─► statements.rs ⇄ expressions.rs ⇄ functions.rs
//!                               ▲      ▲           ▲    ▲          │
//!                               │      └ classes.rs┘    └ patterns.rs ◄ parameters.rs
//!                               └ modules.rs
//! ```
//!
//! A `Dispatcher` can only be obtained from a validated configuration, so
//! there is no "not yet wired" state to check at conversion time.
//!
//! ## Example
//!
//! ```rust
//! use config::constants::ConverterConfig;
//! use ecma_ast::convert::Dispatcher;
//! use ecma_cst::{Cst, CstBuilder, NodeKind};
//!
//! let b = CstBuilder::new();
//! let stmt = b.rule(NodeKind::EmptyStatement, vec![b.tok(";")]);
//! let cst = Cst::new(b.rule(NodeKind::Script, vec![stmt]));
//!
//! let dispatcher = Dispatcher::new(ConverterConfig::default()).unwrap();
//! let program = dispatcher.convert_cst(&cst).unwrap();
//! assert_eq!(program.body.len(), 1);
//! ```

mod classes;
mod control_flow;
mod cursor;
mod declarations;
mod expressions;
mod functions;
mod literals;
mod members;
mod modules;
mod operators;
mod parameters;
mod patterns;
mod program;
mod statements;
mod templates;

pub(crate) use cursor::ChildCursor;
pub use literals::{cook_string, parse_numeric, NumericValue};

use crate::ast::{AstNode, ExpressionOrSpread, Program};
use crate::error::{ConvertError, ConvertResult};
use crate::token::{Token, TokenMaterializer};
use config::constants::{ConfigError, ConverterConfig};
use ecma_cst::{Cst, CstNode, NodeKind, RuleCategory, SerializedNode};
use tracing::{instrument, trace};

// =============================================================================
// DISPATCHER
// =============================================================================

/// Routes CST nodes to their converters.
///
/// The dispatcher holds no mutable state; one instance can convert any
/// number of trees, and conversions are independent of each other.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    config: ConverterConfig,
    tokens: TokenMaterializer,
}

impl Dispatcher {
    /// Creates a dispatcher, validating the configuration first.
    ///
    /// ## Returns
    ///
    /// `ConfigError` if any setting is out of range.
    pub fn new(config: ConverterConfig) -> Result<Self, ConfigError> {
        let config = ConverterConfig::new(
            config.attach_tokens,
            config.preserve_parens,
            config.lenient_arrow_params,
            config.default_source_type,
            config.max_snippet_chars,
        )?;
        Ok(Self {
            config,
            tokens: TokenMaterializer::new(config.attach_tokens),
        })
    }

    /// The validated settings this dispatcher converts with.
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Converts a whole CST into a `Program`.
    #[instrument(skip_all, fields(root = %cst.root.kind))]
    pub fn convert_cst(&self, cst: &Cst) -> ConvertResult<Program> {
        self.program(&cst.root, &cst.comments)
    }

    /// Deserializes a JSON CST and converts it.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use ecma_ast::convert::Dispatcher;
    ///
    /// let json = r#"{"name": "Script", "children": [], "loc": {
    ///     "start": {"line": 1, "column": 0}, "end": {"line": 1, "column": 0}}}"#;
    /// let program = Dispatcher::default().convert_json(json).unwrap();
    /// assert!(program.body.is_empty());
    /// ```
    #[instrument(skip_all, fields(bytes = json.len()))]
    pub fn convert_json(&self, json: &str) -> ConvertResult<Program> {
        let serialized: SerializedNode = serde_json::from_str(json)?;
        let cst = Cst::try_from(serialized)?;
        self.convert_cst(&cst)
    }

    /// Converts any single CST node.
    ///
    /// Routing is by [`RuleCategory`]; rule fragments without an AST
    /// counterpart of their own fail with `UnsupportedNodeKind`.
    pub fn convert(&self, node: &CstNode) -> ConvertResult<AstNode> {
        trace!(kind = %node.kind, loc = %node.loc, "dispatch");
        match node.kind.category() {
            RuleCategory::Program => self.program(node, &[]).map(AstNode::Program),
            RuleCategory::ItemList => self.module_items(node).map(AstNode::Items),
            RuleCategory::Statement => self.statement(node).map(AstNode::Statement),
            RuleCategory::Expression => self.expression(node).map(AstNode::Expression),
            RuleCategory::Pattern => self.pattern(node).map(AstNode::Pattern),
            RuleCategory::ModuleDeclaration => {
                self.module_declaration(node).map(AstNode::ModuleDeclaration)
            }
            RuleCategory::StatementPart => self.convert_statement_part(node),
            RuleCategory::ExpressionPart => self.convert_expression_part(node),
            RuleCategory::PatternPart => Err(self.unsupported(node, "pattern fragment")),
            RuleCategory::FunctionPart => self.convert_function_part(node),
            RuleCategory::ClassPart => self.convert_class_part(node),
            RuleCategory::ModulePart => self.convert_module_part(node),
            RuleCategory::Token => TokenMaterializer::new(true)
                .materialize(node)
                .map(AstNode::Token)
                .ok_or_else(|| self.unsupported(node, "token")),
        }
    }

    fn convert_statement_part(&self, node: &CstNode) -> ConvertResult<AstNode> {
        match node.kind {
            NodeKind::VariableDeclaration | NodeKind::LexicalBinding => {
                self.declarator(node).map(AstNode::VariableDeclarator)
            }
            NodeKind::CaseClause | NodeKind::DefaultClause => {
                self.switch_case(node).map(AstNode::SwitchCase)
            }
            NodeKind::Catch => self.catch_clause(node).map(AstNode::CatchClause),
            NodeKind::Initializer => self.initializer(node).map(|(expr, _)| AstNode::Expression(expr)),
            _ => Err(self.unsupported(node, "statement fragment")),
        }
    }

    fn convert_expression_part(&self, node: &CstNode) -> ConvertResult<AstNode> {
        match node.kind {
            NodeKind::CoalesceExpressionHead => self.expression(node).map(AstNode::Expression),
            NodeKind::PropertyDefinition => match self.property_definition(node)? {
                Some(member) => Ok(AstNode::Property(member)),
                None => Err(self.malformed(node, "empty property definition")),
            },
            NodeKind::Arguments | NodeKind::ArgumentList => {
                let args = self.arguments(node)?;
                Ok(AstNode::Arguments(args.items))
            }
            NodeKind::SpreadElement => self
                .spread_element(node)
                .map(|spread| AstNode::Arguments(vec![ExpressionOrSpread::Spread(spread)])),
            _ => Err(self.unsupported(node, "expression fragment")),
        }
    }

    fn convert_function_part(&self, node: &CstNode) -> ConvertResult<AstNode> {
        match node.kind {
            NodeKind::FormalParameters
            | NodeKind::UniqueFormalParameters
            | NodeKind::FormalParameterList
            | NodeKind::PropertySetParameterList
            | NodeKind::ArrowParameters
            | NodeKind::ArrowFormalParameters => {
                self.arrow_parameters(node).map(|list| AstNode::Params(list.params))
            }
            NodeKind::FormalParameter | NodeKind::FunctionRestParameter => {
                self.pattern(node).map(AstNode::Pattern)
            }
            _ => Err(self.unsupported(node, "function fragment")),
        }
    }

    fn convert_class_part(&self, node: &CstNode) -> ConvertResult<AstNode> {
        match node.kind {
            NodeKind::ClassBody | NodeKind::ClassTail => {
                let class = self.class_parts(node)?;
                Ok(AstNode::ClassBody(class.body))
            }
            NodeKind::ClassElement
            | NodeKind::MethodDefinition
            | NodeKind::GeneratorMethod
            | NodeKind::AsyncMethod
            | NodeKind::AsyncGeneratorMethod
            | NodeKind::FieldDefinition
            | NodeKind::ClassStaticBlock => match self.class_element(node)? {
                Some(member) => Ok(AstNode::ClassMember(member)),
                None => Err(self.malformed(node, "empty class element")),
            },
            _ => Err(self.unsupported(node, "class fragment")),
        }
    }

    fn convert_module_part(&self, node: &CstNode) -> ConvertResult<AstNode> {
        match node.kind {
            NodeKind::ImportSpecifier | NodeKind::NameSpaceImport => {
                let mut specifiers = Vec::new();
                self.import_specifiers(node, &mut specifiers, &mut Default::default())?;
                specifiers
                    .pop()
                    .map(AstNode::ImportSpecifier)
                    .ok_or_else(|| self.malformed(node, "missing import binding"))
            }
            NodeKind::ExportSpecifier => self.export_specifier(node).map(AstNode::ExportSpecifier),
            _ => Err(self.unsupported(node, "module fragment")),
        }
    }

    // =========================================================================
    // SHARED HELPERS
    // =========================================================================

    /// Materializes a token node (no-op when decoration is off).
    pub(crate) fn tok(&self, node: &CstNode) -> Option<Token> {
        self.tokens.materialize(node)
    }

    pub(crate) fn tok_opt(&self, node: Option<&CstNode>) -> Option<Token> {
        node.and_then(|n| self.tokens.materialize(n))
    }

    /// First direct child of `parent` with the given text, as a token.
    pub(crate) fn tok_in(&self, parent: &CstNode, text: &str) -> Option<Token> {
        self.tokens.find(parent, text)
    }

    /// Every direct child of `parent` with the given text, as tokens.
    pub(crate) fn toks_in(&self, parent: &CstNode, text: &str) -> Vec<Token> {
        self.tokens.all(parent, text)
    }

    /// Turns a missing child into a `MalformedNode` error.
    pub(crate) fn require<'a>(
        &self,
        found: Option<&'a CstNode>,
        parent: &CstNode,
        what: &str,
    ) -> ConvertResult<&'a CstNode> {
        found.ok_or_else(|| self.malformed(parent, format!("missing {what}")))
    }

    pub(crate) fn malformed(&self, node: &CstNode, reason: impl Into<String>) -> ConvertError {
        ConvertError::MalformedNode {
            kind: node.kind,
            reason: reason.into(),
            snippet: self.snippet(node),
            loc: node.loc,
        }
    }

    pub(crate) fn unsupported(&self, node: &CstNode, context: &'static str) -> ConvertError {
        ConvertError::UnsupportedNodeKind {
            kind: node.kind,
            context,
            loc: node.loc,
        }
    }

    /// Source text of a node rebuilt from its terminals, cut to the
    /// configured length.
    fn snippet(&self, node: &CstNode) -> String {
        let max = self.config.max_snippet_chars;
        let mut out = String::new();
        for text in node.walk().filter_map(|n| n.terminal_text()) {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(text);
            if out.chars().count() > max {
                let mut cut: String = out.chars().take(max).collect();
                cut.push_str("...");
                return cut;
            }
        }
        out
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        let config = ConverterConfig::default();
        Self {
            config,
            tokens: TokenMaterializer::new(config.attach_tokens),
        }
    }
}
