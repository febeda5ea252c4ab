//! # Member and Call Conversion
//!
//! Member access, calls, `new`, tagged templates and optional chains are
//! all "head + suffixes" shapes. The grammar nests them left-recursively;
//! producers may also flatten them. Both are handled by converting the
//! head (which may itself be a nested chain) and then applying each
//! remaining suffix in order:
//!
//! ```text
//! MemberExpression [ MemberExpression [a, ".", b], "[", c, "]" ]   a.b[c]
//! MemberExpression [ a, ".", b, "[", c, "]" ]                      a.b[c]
//! OptionalExpression [ a, OptionalChain ["?.", b, Arguments] ]    a?.b()
//! ```
//!
//! A chain containing `?.` is wrapped in one `ChainExpression` at its
//! outermost node.

use super::{ChildCursor, Dispatcher};
use crate::ast::{
    CallExpression, ChainExpression, Expression, ExpressionOrSpread, Identifier, ImportExpression,
    Located, MemberExpression, MetaProperty, NewExpression, SpreadElement, Super,
    TaggedTemplateExpression,
};
use crate::error::ConvertResult;
use crate::token::Token;
use ecma_cst::{CstNode, NodeKind};

/// Kinds whose children form a head followed by suffixes.
const CHAIN_KINDS: &[NodeKind] = &[
    NodeKind::MemberExpression,
    NodeKind::CallExpression,
    NodeKind::NewExpression,
    NodeKind::LeftHandSideExpression,
    NodeKind::SuperProperty,
    NodeKind::SuperCall,
    NodeKind::CallMemberExpression,
    NodeKind::CoverCallExpressionAndAsyncArrowHead,
    NodeKind::OptionalExpression,
];

/// Converted argument list with its delimiters.
#[derive(Debug, Default)]
pub(crate) struct ArgumentParts {
    pub items: Vec<ExpressionOrSpread>,
    pub l_paren: Option<Token>,
    pub r_paren: Option<Token>,
    pub commas: Vec<Token>,
}

impl Dispatcher {
    /// Converts a member/call chain, wrapping it in `ChainExpression` if
    /// it contains `?.`.
    pub(crate) fn member_chain(&self, node: &CstNode) -> ConvertResult<Expression> {
        let (expression, optional) = self.chain_parts(node)?;
        if optional {
            Ok(Expression::Chain(ChainExpression {
                expression: Box::new(expression),
                loc: node.loc,
            }))
        } else {
            Ok(expression)
        }
    }

    /// `OptionalExpression: head OptionalChain`.
    pub(crate) fn optional_expression(&self, node: &CstNode) -> ConvertResult<Expression> {
        self.member_chain(node)
    }

    /// Converts a chain without wrapping it.
    ///
    /// ## Returns
    ///
    /// The expression and whether any `?.` was seen.
    fn chain_parts(&self, node: &CstNode) -> ConvertResult<(Expression, bool)> {
        if !CHAIN_KINDS.contains(&node.kind) {
            return Ok((self.expression(node)?, false));
        }
        if let Some(only) = node.only_child() {
            return self.chain_parts(only);
        }

        let mut cursor = ChildCursor::new(node);
        let (head, head_optional) = self.chain_head(node, &mut cursor)?;
        let (expression, optional) = self.apply_suffixes(head, &mut cursor, node)?;
        Ok((expression, head_optional || optional))
    }

    fn chain_head(
        &self,
        node: &CstNode,
        cursor: &mut ChildCursor<'_>,
    ) -> ConvertResult<(Expression, bool)> {
        let first = self.require(cursor.peek(), node, "expression head")?;
        let next_is_dot = cursor.peek_nth(1).is_some_and(|c| c.is_token("."));

        if first.is_any_token(&["new", "import"]) && next_is_dot {
            let (meta, dot, property) = match (cursor.next(), cursor.next(), cursor.next()) {
                (Some(meta), Some(dot), Some(property)) => (meta, dot, property),
                _ => return Err(self.malformed(node, "incomplete meta property")),
            };
            return Ok((self.meta_parts(meta, dot, property)?, false));
        }
        if let Some(new_node) = cursor.eat("new") {
            return self.new_expression(node, new_node, cursor).map(|e| (e, false));
        }
        if let Some(super_node) = cursor.eat("super") {
            return Ok((Expression::Super(Super { loc: super_node.loc }), false));
        }
        let head = self.require(cursor.next(), node, "expression head")?;
        self.chain_parts(head)
    }

    /// `new MemberExpression Arguments?`; the arguments are only consumed
    /// when they directly follow the callee.
    fn new_expression(
        &self,
        node: &CstNode,
        new_node: &CstNode,
        cursor: &mut ChildCursor<'_>,
    ) -> ConvertResult<Expression> {
        let callee_node = self.require(cursor.next(), node, "constructor expression")?;
        let (callee, _) = self.chain_parts(callee_node)?;
        let args_node = cursor.eat_kind(NodeKind::Arguments);
        let args = match args_node {
            Some(args) => self.arguments(args)?,
            None => ArgumentParts::default(),
        };
        let end = args_node.unwrap_or(callee_node);
        Ok(Expression::New(NewExpression {
            callee: Box::new(callee),
            arguments: args.items,
            new_token: self.tok(new_node),
            l_paren_token: args.l_paren,
            r_paren_token: args.r_paren,
            comma_tokens: args.commas,
            loc: new_node.loc.merge(&end.loc),
        }))
    }

    /// Applies `.name`, `[expr]`, `(args)`, `` `tpl` `` and `?.` suffixes to
    /// `object`, left to right.
    fn apply_suffixes(
        &self,
        mut object: Expression,
        cursor: &mut ChildCursor<'_>,
        node: &CstNode,
    ) -> ConvertResult<(Expression, bool)> {
        let mut saw_optional = false;
        while let Some(mut child) = cursor.next() {
            let optional = if child.is_token("?.") {
                saw_optional = true;
                let question_dot = child;
                child = self.require(cursor.peek(), node, "optional chain suffix")?;
                if is_property_name(child) {
                    cursor.next();
                    object = self.member(object, child, false, Some(question_dot), true, None)?;
                    continue;
                }
                cursor.next();
                Some(question_dot)
            } else {
                None
            };

            if child.kind == NodeKind::OptionalChain {
                let mut inner = ChildCursor::new(child);
                let (chained, _) = self.apply_suffixes(object, &mut inner, child)?;
                object = chained;
                saw_optional = true;
                continue;
            }

            if child.is_token(".") {
                let name = self.require(cursor.next(), node, "property name after `.`")?;
                object = self.member(object, name, false, Some(child), optional.is_some(), None)?;
            } else if child.is_token("[") {
                let property = self.require(cursor.next(), node, "computed property")?;
                let r_bracket = self.require(cursor.eat("]"), node, "`]`")?;
                object = self.member(
                    object,
                    property,
                    true,
                    optional,
                    optional.is_some(),
                    Some((child, r_bracket)),
                )?;
            } else if child.kind == NodeKind::Arguments {
                let args = self.arguments(child)?;
                let loc = object.loc().merge(&child.loc);
                object = Expression::Call(CallExpression {
                    callee: Box::new(object),
                    arguments: args.items,
                    optional: optional.is_some(),
                    optional_token: self.tok_opt(optional),
                    l_paren_token: args.l_paren,
                    r_paren_token: args.r_paren,
                    comma_tokens: args.commas,
                    loc,
                });
            } else if matches!(
                child.kind,
                NodeKind::TemplateLiteral | NodeKind::NoSubstitutionTemplate
            ) {
                let quasi = self.template_literal(child)?;
                let loc = object.loc().merge(&child.loc);
                object = Expression::TaggedTemplate(TaggedTemplateExpression {
                    tag: Box::new(object),
                    quasi,
                    loc,
                });
            } else {
                return Err(self.malformed(node, "unexpected member suffix"));
            }
        }
        Ok((object, saw_optional))
    }

    /// Builds one member access. `brackets` is set for `[expr]` access.
    fn member(
        &self,
        object: Expression,
        property_node: &CstNode,
        computed: bool,
        dot: Option<&CstNode>,
        optional: bool,
        brackets: Option<(&CstNode, &CstNode)>,
    ) -> ConvertResult<Expression> {
        let property = if computed {
            self.expression(property_node)?
        } else if property_node.kind == NodeKind::PrivateIdentifier
            || property_node.token_text().is_some_and(|t| t.starts_with('#'))
        {
            Expression::PrivateIdentifier(self.private_identifier(property_node)?)
        } else {
            let name = property_node
                .token_text()
                .ok_or_else(|| self.malformed(property_node, "expected a property name"))?;
            Expression::Identifier(Identifier::new(name, property_node.loc))
        };
        let end = brackets.map_or(property_node.loc, |(_, r)| r.loc);
        let loc = object.loc().merge(&end);
        Ok(Expression::Member(MemberExpression {
            object: Box::new(object),
            property: Box::new(property),
            computed,
            optional,
            dot_token: self.tok_opt(dot),
            l_bracket_token: brackets.and_then(|(l, _)| self.tok(l)),
            r_bracket_token: brackets.and_then(|(_, r)| self.tok(r)),
            loc,
        }))
    }

    // =========================================================================
    // ARGUMENTS
    // =========================================================================

    /// Converts `Arguments: ( ArgumentList? ,? )` or a bare `ArgumentList`.
    pub(crate) fn arguments(&self, node: &CstNode) -> ConvertResult<ArgumentParts> {
        let mut parts = ArgumentParts::default();
        let inner: &[CstNode] = if node.kind == NodeKind::Arguments {
            let (l_paren, inner, r_paren) = self.bracketed(node, "(", ")")?;
            parts.l_paren = self.tok(l_paren);
            parts.r_paren = self.tok(r_paren);
            inner
        } else {
            &node.children
        };
        self.collect_arguments(inner, &mut parts)?;
        Ok(parts)
    }

    fn collect_arguments(&self, children: &[CstNode], parts: &mut ArgumentParts) -> ConvertResult<()> {
        let mut iter = children.iter();
        while let Some(child) = iter.next() {
            if child.is_token(",") {
                parts.commas.extend(self.tok(child));
            } else if child.is_token("...") {
                let argument = iter
                    .next()
                    .ok_or_else(|| self.malformed(child, "missing spread operand"))?;
                parts.items.push(ExpressionOrSpread::Spread(SpreadElement {
                    argument: self.expression(argument)?,
                    ellipsis_token: self.tok(child),
                    loc: child.loc.merge(&argument.loc),
                }));
            } else if child.kind == NodeKind::ArgumentList {
                self.collect_arguments(&child.children, parts)?;
            } else if child.kind == NodeKind::SpreadElement {
                parts.items.push(ExpressionOrSpread::Spread(self.spread_element(child)?));
            } else {
                parts.items.push(ExpressionOrSpread::Expression(self.expression(child)?));
            }
        }
        Ok(())
    }

    // =========================================================================
    // META PROPERTIES AND DYNAMIC IMPORT
    // =========================================================================

    /// `NewTarget: new . target`, `ImportMeta: import . meta`.
    pub(crate) fn meta_property(&self, node: &CstNode) -> ConvertResult<Expression> {
        match node.children.as_slice() {
            [meta, dot, property] if dot.is_token(".") => self.meta_parts(meta, dot, property),
            [only] => self.meta_property(only),
            _ => Err(self.malformed(node, "meta property must be `new.target` or `import.meta`")),
        }
    }

    fn meta_parts(&self, meta: &CstNode, dot: &CstNode, property: &CstNode) -> ConvertResult<Expression> {
        let meta_name = meta.token_text().unwrap_or_default();
        let property_name = property.token_text().unwrap_or_default();
        match (meta_name, property_name) {
            ("new", "target") | ("import", "meta") => Ok(Expression::MetaProperty(MetaProperty {
                meta: Identifier::new(meta_name, meta.loc),
                property: Identifier::new(property_name, property.loc),
                dot_token: self.tok(dot),
                loc: meta.loc.merge(&property.loc),
            })),
            _ => Err(self.malformed(
                meta,
                format!("unknown meta property `{meta_name}.{property_name}`"),
            )),
        }
    }

    /// `ImportCall: import ( AssignmentExpression (, AssignmentExpression)? ,? )`.
    pub(crate) fn import_call(&self, node: &CstNode) -> ConvertResult<Expression> {
        let mut cursor = ChildCursor::new(node);
        let import = self.require(cursor.eat("import"), node, "`import`")?;
        let rest = cursor.rest();
        let (l_paren, args, r_paren) = match rest {
            [l, args @ .., r] if l.is_token("(") && r.is_token(")") => (*l, args, *r),
            _ => return Err(self.malformed(node, "dynamic import needs `( source )`")),
        };
        let mut values = args.iter().filter(|a| !a.is_token(","));
        let source = self.require(values.next().copied(), node, "import source")?;
        let options = values.next().map(|o| self.expression(o)).transpose()?;
        if values.next().is_some() {
            return Err(self.malformed(node, "dynamic import takes at most two arguments"));
        }
        Ok(Expression::Import(ImportExpression {
            source: Box::new(self.expression(source)?),
            options: options.map(Box::new),
            import_token: self.tok(import),
            l_paren_token: self.tok(l_paren),
            r_paren_token: self.tok(r_paren),
            loc: node.loc,
        }))
    }
}

/// Check if a node directly after `?.` is a property name (`a?.b`).
fn is_property_name(node: &CstNode) -> bool {
    node.is_terminal()
        && matches!(
            node.kind,
            NodeKind::IdentifierName | NodeKind::Keyword | NodeKind::PrivateIdentifier
        )
}
