//! # Expression Conversion
//!
//! The expression entry point and the primary-expression converters:
//! identifiers, literals, array and object literals, sequences, `yield`
//! and parenthesized forms. Operator levels live in `operators.rs`,
//! member/call chains in `members.rs`.

use super::{ChildCursor, Dispatcher};
use crate::ast::{
    ArrayExpression, AssignmentExpression, AssignmentOperator, Expression, ExpressionOrSpread,
    Identifier, ObjectExpression, ObjectMember, ParenthesizedExpression, Pattern, Property,
    PropertyKey, PropertyKind, SequenceExpression, SpreadElement, Super, ThisExpression,
    YieldExpression,
};
use crate::error::ConvertResult;
use ecma_cst::{CstNode, NodeKind};

// =============================================================================
// ENTRY POINT
// =============================================================================

impl Dispatcher {
    /// Converts any expression-category node (or terminal) to an
    /// [`Expression`].
    pub(crate) fn expression(&self, node: &CstNode) -> ConvertResult<Expression> {
        if node.is_terminal() {
            return self.terminal_expression(node);
        }
        // Wrapper levels with nothing but their operand.
        if node.kind != NodeKind::YieldExpression {
            if let Some(only) = node.only_child() {
                return self.expression(only);
            }
        }

        match node.kind {
            kind if kind.is_binary_level() => self.binary(node),
            NodeKind::CoalesceExpressionHead => self.binary(node),
            NodeKind::ExponentiationExpression => self.exponentiation(node),
            NodeKind::UnaryExpression => self.unary(node),
            NodeKind::AwaitExpression => self.await_expression(node),
            NodeKind::UpdateExpression => self.update(node),
            NodeKind::AssignmentExpression => self.assignment(node),
            NodeKind::ConditionalExpression => self.conditional(node),
            NodeKind::Expression => self.sequence(node),
            NodeKind::YieldExpression => self.yield_expression(node),

            NodeKind::MemberExpression
            | NodeKind::CallExpression
            | NodeKind::NewExpression
            | NodeKind::LeftHandSideExpression
            | NodeKind::SuperProperty
            | NodeKind::SuperCall
            | NodeKind::CallMemberExpression
            | NodeKind::CoverCallExpressionAndAsyncArrowHead => self.member_chain(node),
            NodeKind::OptionalExpression => self.optional_expression(node),
            NodeKind::MetaProperty | NodeKind::NewTarget | NodeKind::ImportMeta => {
                self.meta_property(node)
            }
            NodeKind::ImportCall => self.import_call(node),

            NodeKind::Literal | NodeKind::NullLiteral | NodeKind::BooleanLiteral => {
                self.literal(node).map(Expression::Literal)
            }
            NodeKind::ArrayLiteral => self.array(node),
            NodeKind::ObjectLiteral => self.object(node),
            NodeKind::TemplateLiteral => self.template_literal(node).map(Expression::TemplateLiteral),
            NodeKind::ParenthesizedExpression
            | NodeKind::CoverParenthesizedExpressionAndArrowParameterList => {
                self.parenthesized(node)
            }

            NodeKind::FunctionExpression
            | NodeKind::GeneratorExpression
            | NodeKind::AsyncFunctionExpression
            | NodeKind::AsyncGeneratorExpression => self
                .function_parts(node)
                .map(|f| Expression::Function(Box::new(f.into_expression()))),
            NodeKind::ArrowFunction | NodeKind::AsyncArrowFunction => self.arrow_function(node),
            NodeKind::ClassExpression => self
                .class_parts(node)
                .map(|c| Expression::Class(Box::new(c.into_expression()))),

            NodeKind::PrimaryExpression
            | NodeKind::ShortCircuitExpression
            | NodeKind::ExpressionBody
            | NodeKind::IdentifierReference
            | NodeKind::Identifier => Err(self.malformed(node, "expected exactly one child")),
            _ => Err(self.unsupported(node, "expression")),
        }
    }

    fn terminal_expression(&self, node: &CstNode) -> ConvertResult<Expression> {
        match node.kind {
            NodeKind::IdentifierName
            | NodeKind::IdentifierReference
            | NodeKind::Identifier
            | NodeKind::BindingIdentifier
            | NodeKind::LabelIdentifier => self.identifier(node).map(Expression::Identifier),
            NodeKind::PrivateIdentifier => {
                self.private_identifier(node).map(Expression::PrivateIdentifier)
            }
            NodeKind::NumericLiteral
            | NodeKind::StringLiteral
            | NodeKind::RegularExpressionLiteral
            | NodeKind::NullLiteral
            | NodeKind::BooleanLiteral
            | NodeKind::Literal => self.literal(node).map(Expression::Literal),
            NodeKind::NoSubstitutionTemplate => {
                self.template_literal(node).map(Expression::TemplateLiteral)
            }
            NodeKind::Keyword => match node.text_or_empty() {
                "this" => Ok(Expression::This(ThisExpression { loc: node.loc })),
                "super" => Ok(Expression::Super(Super { loc: node.loc })),
                "null" | "true" | "false" => self.literal(node).map(Expression::Literal),
                // Contextual keywords used as plain names.
                "yield" | "await" => self.identifier(node).map(Expression::Identifier),
                other => Err(self.malformed(node, format!("unexpected keyword `{other}`"))),
            },
            _ => Err(self.unsupported(node, "expression")),
        }
    }

    // =========================================================================
    // SEQUENCES, YIELD, PARENTHESES
    // =========================================================================

    /// `Expression: AssignmentExpression (, AssignmentExpression)*`.
    fn sequence(&self, node: &CstNode) -> ConvertResult<Expression> {
        let mut expressions = Vec::new();
        let mut commas = Vec::new();
        self.collect_sequence(node, &mut expressions, &mut commas)?;
        if expressions.len() == 1 {
            return expressions
                .pop()
                .ok_or_else(|| self.malformed(node, "empty expression"));
        }
        Ok(Expression::Sequence(SequenceExpression {
            expressions,
            comma_tokens: commas.into_iter().filter_map(|c| self.tok(c)).collect(),
            loc: node.loc,
        }))
    }

    /// Left-nested `Expression [Expression, ",", e]` shapes are flattened.
    fn collect_sequence<'a>(
        &self,
        node: &'a CstNode,
        expressions: &mut Vec<Expression>,
        commas: &mut Vec<&'a CstNode>,
    ) -> ConvertResult<()> {
        for child in &node.children {
            if child.is_token(",") {
                commas.push(child);
            } else if child.kind == NodeKind::Expression && child.children.len() > 1 {
                self.collect_sequence(child, expressions, commas)?;
            } else {
                expressions.push(self.expression(child)?);
            }
        }
        Ok(())
    }

    /// `YieldExpression: yield | yield AssignmentExpression | yield * AssignmentExpression`.
    fn yield_expression(&self, node: &CstNode) -> ConvertResult<Expression> {
        let mut cursor = ChildCursor::new(node);
        let yield_node = self.require(cursor.eat("yield"), node, "`yield`")?;
        let star = cursor.eat("*");
        let argument = cursor.next().map(|arg| self.expression(arg)).transpose()?;
        if star.is_some() && argument.is_none() {
            return Err(self.malformed(node, "`yield*` needs an operand"));
        }
        Ok(Expression::Yield(YieldExpression {
            argument: argument.map(Box::new),
            delegate: star.is_some(),
            yield_token: self.tok(yield_node),
            star_token: self.tok_opt(star),
            loc: node.loc,
        }))
    }

    /// `( Expression )` in expression position.
    ///
    /// The cover node reaching here was not followed by `=>`, so it must
    /// hold exactly one expression.
    fn parenthesized(&self, node: &CstNode) -> ConvertResult<Expression> {
        let mut cursor = ChildCursor::new(node);
        let l_paren = self.require(cursor.eat("("), node, "`(`")?;
        if cursor.at(")") || cursor.at("...") {
            return Err(self.malformed(node, "arrow parameter list used as an expression"));
        }
        let inner = self.require(cursor.next(), node, "parenthesized expression")?;
        let r_paren = self.require(cursor.eat(")"), node, "`)`")?;
        if !cursor.is_done() {
            return Err(self.malformed(node, "unexpected content after `)`"));
        }
        let expression = self.expression(inner)?;
        if !self.config().preserve_parens {
            return Ok(expression);
        }
        Ok(Expression::Parenthesized(ParenthesizedExpression {
            expression: Box::new(expression),
            l_paren_token: self.tok(l_paren),
            r_paren_token: self.tok(r_paren),
            loc: node.loc,
        }))
    }

    // =========================================================================
    // ARRAY LITERALS
    // =========================================================================

    /// `[ ElementList? , Elision? ]`.
    pub(crate) fn array(&self, node: &CstNode) -> ConvertResult<Expression> {
        let (l_bracket, inner, r_bracket) = self.bracketed(node, "[", "]")?;
        let elements = ElementSlots::collect(inner);
        let mut out = Vec::with_capacity(elements.slots.len());
        for slot in &elements.slots {
            out.push(match slot {
                None => None,
                Some(Slot::Rest(ellipsis, arg)) => Some(ExpressionOrSpread::Spread(SpreadElement {
                    argument: self.expression(arg)?,
                    ellipsis_token: self.tok(ellipsis),
                    loc: ellipsis.loc.merge(&arg.loc),
                })),
                Some(Slot::Node(n)) if n.kind == NodeKind::SpreadElement => {
                    Some(ExpressionOrSpread::Spread(self.spread_element(n)?))
                }
                Some(Slot::Node(n)) => Some(ExpressionOrSpread::Expression(self.expression(n)?)),
            });
        }
        Ok(Expression::Array(ArrayExpression {
            elements: out,
            l_bracket_token: self.tok(l_bracket),
            r_bracket_token: self.tok(r_bracket),
            comma_tokens: elements.commas.iter().filter_map(|c| self.tok(c)).collect(),
            loc: node.loc,
        }))
    }

    /// `SpreadElement: ... AssignmentExpression`.
    pub(crate) fn spread_element(&self, node: &CstNode) -> ConvertResult<SpreadElement> {
        let mut cursor = ChildCursor::new(node);
        let ellipsis = self.require(cursor.eat("..."), node, "`...`")?;
        let argument = self.require(cursor.next(), node, "spread operand")?;
        Ok(SpreadElement {
            argument: self.expression(argument)?,
            ellipsis_token: self.tok(ellipsis),
            loc: node.loc,
        })
    }

    /// Splits `open inner* close` into its delimiters and contents.
    pub(crate) fn bracketed<'a>(
        &self,
        node: &'a CstNode,
        open: &str,
        close: &str,
    ) -> ConvertResult<(&'a CstNode, &'a [CstNode], &'a CstNode)> {
        match node.children.as_slice() {
            [first, inner @ .., last] if first.is_token(open) && last.is_token(close) => {
                Ok((first, inner, last))
            }
            _ => Err(self.malformed(node, format!("expected `{open}` ... `{close}`"))),
        }
    }

    // =========================================================================
    // OBJECT LITERALS
    // =========================================================================

    /// `{ PropertyDefinitionList? ,? }`.
    pub(crate) fn object(&self, node: &CstNode) -> ConvertResult<Expression> {
        let (l_brace, inner, r_brace) = self.bracketed(node, "{", "}")?;
        let mut properties = Vec::new();
        let mut commas = Vec::new();
        self.collect_properties(inner, &mut properties, &mut commas)?;
        Ok(Expression::Object(ObjectExpression {
            properties,
            l_brace_token: self.tok(l_brace),
            r_brace_token: self.tok(r_brace),
            comma_tokens: commas.into_iter().filter_map(|c| self.tok(c)).collect(),
            loc: node.loc,
        }))
    }

    fn collect_properties<'a>(
        &self,
        children: &'a [CstNode],
        properties: &mut Vec<ObjectMember>,
        commas: &mut Vec<&'a CstNode>,
    ) -> ConvertResult<()> {
        for child in children {
            if child.is_token(",") {
                commas.push(child);
            } else if child.kind == NodeKind::PropertyDefinitionList {
                self.collect_properties(&child.children, properties, commas)?;
            } else if let Some(member) = self.property_definition(child)? {
                properties.push(member);
            }
        }
        Ok(())
    }

    /// Converts one `PropertyDefinition` (or a bare member node standing
    /// in for one).
    ///
    /// ```text
    /// a            → shorthand
    /// a = 1        → shorthand, value AssignmentExpression (pattern only)
    /// a: 1         → init
    /// ...a         → spread
    /// get a() {}   → accessor (see classes.rs for method parts)
    /// ```
    pub(crate) fn property_definition(&self, node: &CstNode) -> ConvertResult<Option<ObjectMember>> {
        let parts: &[CstNode] = if node.kind == NodeKind::PropertyDefinition {
            &node.children
        } else {
            std::slice::from_ref(node)
        };
        let Some(first) = parts.first() else {
            return Ok(None);
        };

        if first.is_token("...") {
            let argument = self.require(parts.get(1), node, "spread operand")?;
            return Ok(Some(ObjectMember::Spread(SpreadElement {
                argument: self.expression(argument)?,
                ellipsis_token: self.tok(first),
                loc: node.loc,
            })));
        }
        if first.kind == NodeKind::SpreadElement {
            return self.spread_element(first).map(|s| Some(ObjectMember::Spread(s)));
        }

        if is_method_shape(node, parts) {
            let method = self.method_parts(ChildCursor::flattened(node, METHOD_KINDS), node)?;
            return Ok(Some(ObjectMember::Property(method.into_property(node.loc))));
        }

        match parts {
            [single] if single.kind == NodeKind::CoverInitializedName => {
                self.cover_initialized_name(single).map(Some)
            }
            [single] => {
                let id = self.identifier(single)?;
                Ok(Some(ObjectMember::Property(Property {
                    key: PropertyKey::Identifier(id.clone()),
                    value: Expression::Identifier(id),
                    kind: PropertyKind::Init,
                    method: false,
                    shorthand: true,
                    computed: false,
                    kind_token: None,
                    colon_token: None,
                    loc: node.loc,
                })))
            }
            [key_node, colon, value] if colon.is_token(":") => {
                let (key, computed) = self.property_key(key_node)?;
                Ok(Some(ObjectMember::Property(Property {
                    key,
                    value: self.expression(value)?,
                    kind: PropertyKind::Init,
                    method: false,
                    shorthand: false,
                    computed,
                    kind_token: None,
                    colon_token: self.tok(colon),
                    loc: node.loc,
                })))
            }
            _ => Err(self.malformed(node, "unrecognised property definition")),
        }
    }

    /// `CoverInitializedName: IdentifierReference Initializer`; only valid
    /// once the object is reinterpreted as a pattern.
    fn cover_initialized_name(&self, node: &CstNode) -> ConvertResult<ObjectMember> {
        let mut cursor = ChildCursor::new(node);
        let name = self.require(cursor.next(), node, "shorthand name")?;
        let id = self.identifier(name)?;
        let init = self.require(cursor.next(), node, "initializer")?;
        let (default, eq_token) = if init.kind == NodeKind::Initializer {
            self.initializer(init)?
        } else {
            let value = self.require(cursor.next(), node, "default value")?;
            (self.expression(value)?, self.tok(init))
        };
        let value = Expression::Assignment(AssignmentExpression {
            operator: AssignmentOperator::Assign,
            left: Box::new(Pattern::Identifier(id.clone())),
            right: Box::new(default),
            operator_token: eq_token,
            loc: node.loc,
        });
        Ok(ObjectMember::Property(Property {
            key: PropertyKey::Identifier(id),
            value,
            kind: PropertyKind::Init,
            method: false,
            shorthand: true,
            computed: false,
            kind_token: None,
            colon_token: None,
            loc: node.loc,
        }))
    }

    /// Converts a property name in any of its wrappings.
    ///
    /// ## Returns
    ///
    /// The key and whether it is computed (`[expr]`).
    pub(crate) fn property_key(&self, node: &CstNode) -> ConvertResult<(PropertyKey, bool)> {
        match node.kind {
            NodeKind::ComputedPropertyName => {
                let (_, inner, _) = self.bracketed(node, "[", "]")?;
                let expr = match inner {
                    [expr] => self.expression(expr)?,
                    _ => return Err(self.malformed(node, "computed key needs one expression")),
                };
                Ok((PropertyKey::Computed(Box::new(expr)), true))
            }
            NodeKind::PropertyName
            | NodeKind::LiteralPropertyName
            | NodeKind::ClassElementName
            | NodeKind::IdentifierReference
            | NodeKind::Identifier
            | NodeKind::BindingIdentifier => {
                if node.children.first().is_some_and(|c| c.is_token("[")) {
                    return self.property_key(&CstNode::rule_at(
                        NodeKind::ComputedPropertyName,
                        node.children.clone(),
                        node.loc,
                    ));
                }
                let only = self.require(node.only_child(), node, "property name")?;
                self.property_key(only)
            }
            NodeKind::PrivateIdentifier => self
                .private_identifier(node)
                .map(|id| (PropertyKey::PrivateIdentifier(id), false)),
            NodeKind::StringLiteral | NodeKind::NumericLiteral => {
                self.literal(node).map(|lit| (PropertyKey::Literal(lit), false))
            }
            NodeKind::IdentifierName | NodeKind::Keyword => {
                let name = node.text_or_empty();
                Ok((PropertyKey::Identifier(Identifier::new(name, node.loc)), false))
            }
            _ => Err(self.unsupported(node, "property key")),
        }
    }
}

/// Member kinds whose children are inlined before probing a method.
pub(crate) const METHOD_KINDS: &[NodeKind] = &[
    NodeKind::MethodDefinition,
    NodeKind::GeneratorMethod,
    NodeKind::AsyncMethod,
    NodeKind::AsyncGeneratorMethod,
];

fn is_method_shape(node: &CstNode, parts: &[CstNode]) -> bool {
    METHOD_KINDS.contains(&node.kind)
        || parts.iter().any(|p| METHOD_KINDS.contains(&p.kind))
        || parts.iter().any(|p| p.is_token("("))
}

// =============================================================================
// ELEMENT LISTS
// =============================================================================

/// One occupied slot of an array literal or array pattern.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Slot<'a> {
    Node(&'a CstNode),
    /// An inline `... operand` pair.
    Rest(&'a CstNode, &'a CstNode),
}

/// Slots and separators of an array literal or pattern body.
///
/// A comma that directly follows another comma (or opens the list) is a
/// hole, as is every comma inside an `Elision`.
///
/// ```text
/// [1, , 3]  ElementList [1, ",", Elision [","], 3]  → [1, None, 3]
/// [, a]     ElementList [Elision [","], a]          → [None, a]
/// [a, ]     ElementList [a], ","                    → [a]
/// ```
#[derive(Debug, Default)]
pub(crate) struct ElementSlots<'a> {
    pub slots: Vec<Option<Slot<'a>>>,
    pub commas: Vec<&'a CstNode>,
    expect_element: bool,
}

impl<'a> ElementSlots<'a> {
    pub fn collect(children: &'a [CstNode]) -> Self {
        let mut slots = Self {
            expect_element: true,
            ..Self::default()
        };
        slots.visit(children);
        slots
    }

    fn visit(&mut self, children: &'a [CstNode]) {
        let mut iter = children.iter();
        while let Some(child) = iter.next() {
            match child.kind {
                NodeKind::Elision => self.elision(child),
                NodeKind::ElementList
                | NodeKind::BindingElementList
                | NodeKind::BindingElisionElement
                | NodeKind::AssignmentElementList
                | NodeKind::AssignmentElisionElement => self.visit(&child.children),
                _ if child.is_token(",") => {
                    if self.expect_element {
                        self.slots.push(None);
                    }
                    self.commas.push(child);
                    self.expect_element = true;
                }
                _ if child.is_token("...") => {
                    if let Some(arg) = iter.next() {
                        self.slots.push(Some(Slot::Rest(child, arg)));
                    }
                    self.expect_element = false;
                }
                _ => {
                    self.slots.push(Some(Slot::Node(child)));
                    self.expect_element = false;
                }
            }
        }
    }

    fn elision(&mut self, node: &'a CstNode) {
        for child in &node.children {
            if child.kind == NodeKind::Elision {
                self.elision(child);
            } else if child.is_token(",") {
                self.slots.push(None);
                self.commas.push(child);
                self.expect_element = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::LiteralValue;
    use crate::error::ConvertError;
    use config::constants::ConverterConfig;
    use ecma_cst::CstBuilder;

    fn num(b: &CstBuilder, raw: &str) -> CstNode {
        b.rule(NodeKind::Literal, vec![b.num(raw)])
    }

    fn number(expr: &Expression) -> f64 {
        match expr {
            Expression::Literal(lit) => match lit.value {
                LiteralValue::Number(n) => n,
                _ => panic!("expected number"),
            },
            other => panic!("expected literal, got {}", other.type_name()),
        }
    }

    #[test]
    fn test_array_hole_counting() {
        let b = CstBuilder::new();
        let list = b.rule(
            NodeKind::ElementList,
            vec![
                num(&b, "1"),
                b.tok(","),
                b.rule(NodeKind::Elision, vec![b.tok(",")]),
                num(&b, "3"),
            ],
        );
        let node = b.rule(NodeKind::ArrayLiteral, vec![b.tok("["), list, b.tok("]")]);
        let Expression::Array(array) = Dispatcher::default().expression(&node).unwrap() else {
            panic!("expected array");
        };
        assert_eq!(array.elements.len(), 3);
        assert!(array.elements[1].is_none());
        match &array.elements[2] {
            Some(ExpressionOrSpread::Expression(e)) => assert_eq!(number(e), 3.0),
            other => panic!("unexpected element {other:?}"),
        }
        assert_eq!(array.comma_tokens.len(), 2);
    }

    #[test]
    fn test_array_leading_and_trailing_elisions() {
        let b = CstBuilder::new();
        // [, a, , ]
        let list = b.rule(
            NodeKind::ElementList,
            vec![b.rule(NodeKind::Elision, vec![b.tok(",")]), b.ident("a")],
        );
        let node = b.rule(
            NodeKind::ArrayLiteral,
            vec![
                b.tok("["),
                list,
                b.tok(","),
                b.rule(NodeKind::Elision, vec![b.tok(",")]),
                b.tok("]"),
            ],
        );
        let Expression::Array(array) = Dispatcher::default().expression(&node).unwrap() else {
            panic!("expected array");
        };
        let holes: Vec<bool> = array.elements.iter().map(Option::is_none).collect();
        assert_eq!(holes, vec![true, false, true]);
    }

    #[test]
    fn test_array_spread() {
        let b = CstBuilder::new();
        let spread = b.rule(NodeKind::SpreadElement, vec![b.tok("..."), b.ident("xs")]);
        let node = b.rule(NodeKind::ArrayLiteral, vec![b.tok("["), spread, b.tok("]")]);
        let Expression::Array(array) = Dispatcher::default().expression(&node).unwrap() else {
            panic!("expected array");
        };
        assert!(matches!(array.elements[0], Some(ExpressionOrSpread::Spread(_))));
    }

    #[test]
    fn test_object_literal_members() {
        let b = CstBuilder::new();
        let shorthand = b.rule(
            NodeKind::PropertyDefinition,
            vec![b.rule(NodeKind::IdentifierReference, vec![b.ident("a")])],
        );
        let keyed = b.rule(
            NodeKind::PropertyDefinition,
            vec![
                b.rule(NodeKind::PropertyName, vec![b.string("'b'")]),
                b.tok(":"),
                num(&b, "2"),
            ],
        );
        let computed = b.rule(
            NodeKind::PropertyDefinition,
            vec![
                b.rule(
                    NodeKind::ComputedPropertyName,
                    vec![b.tok("["), b.ident("k"), b.tok("]")],
                ),
                b.tok(":"),
                num(&b, "3"),
            ],
        );
        let spread = b.rule(NodeKind::PropertyDefinition, vec![b.tok("..."), b.ident("rest")]);
        let list = b.rule(
            NodeKind::PropertyDefinitionList,
            vec![shorthand, b.tok(","), keyed, b.tok(","), computed, b.tok(","), spread],
        );
        let node = b.rule(NodeKind::ObjectLiteral, vec![b.tok("{"), list, b.tok("}")]);
        let Expression::Object(object) = Dispatcher::default().expression(&node).unwrap() else {
            panic!("expected object");
        };
        assert_eq!(object.properties.len(), 4);
        assert_eq!(object.comma_tokens.len(), 3);
        match &object.properties[0] {
            ObjectMember::Property(p) => assert!(p.shorthand && p.key.is_named("a")),
            other => panic!("unexpected member {other:?}"),
        }
        match &object.properties[1] {
            ObjectMember::Property(p) => assert!(!p.shorthand && p.key.is_named("b")),
            other => panic!("unexpected member {other:?}"),
        }
        match &object.properties[2] {
            ObjectMember::Property(p) => assert!(p.computed),
            other => panic!("unexpected member {other:?}"),
        }
        assert!(matches!(object.properties[3], ObjectMember::Spread(_)));
    }

    #[test]
    fn test_sequence_and_parens() {
        let b = CstBuilder::new();
        let seq = b.rule(
            NodeKind::Expression,
            vec![b.ident("a"), b.tok(","), b.ident("b")],
        );
        let node = b.rule(
            NodeKind::ParenthesizedExpression,
            vec![b.tok("("), seq, b.tok(")")],
        );

        let Expression::Parenthesized(paren) = Dispatcher::default().expression(&node).unwrap()
        else {
            panic!("expected parenthesized expression");
        };
        assert!(matches!(*paren.expression, Expression::Sequence(ref s) if s.expressions.len() == 2));

        let d = Dispatcher::new(ConverterConfig::default().with_parens(false)).unwrap();
        assert!(matches!(d.expression(&node).unwrap(), Expression::Sequence(_)));
    }

    #[test]
    fn test_empty_parens_in_expression_position() {
        let b = CstBuilder::new();
        let node = b.rule(
            NodeKind::CoverParenthesizedExpressionAndArrowParameterList,
            vec![b.tok("("), b.tok(")")],
        );
        let err = Dispatcher::default().expression(&node).unwrap_err();
        assert!(matches!(err, ConvertError::MalformedNode { .. }));
    }

    #[test]
    fn test_yield_forms() {
        let b = CstBuilder::new();
        let d = Dispatcher::default();
        let bare = b.rule(NodeKind::YieldExpression, vec![b.tok("yield")]);
        assert!(matches!(
            d.expression(&bare).unwrap(),
            Expression::Yield(YieldExpression { argument: None, delegate: false, .. })
        ));
        let delegate = b.rule(
            NodeKind::YieldExpression,
            vec![b.tok("yield"), b.tok("*"), b.ident("g")],
        );
        assert!(matches!(
            d.expression(&delegate).unwrap(),
            Expression::Yield(YieldExpression { delegate: true, argument: Some(_), .. })
        ));
    }

    #[test]
    fn test_this_and_keywords() {
        let b = CstBuilder::new();
        let d = Dispatcher::default();
        let this = b.rule(NodeKind::PrimaryExpression, vec![b.tok("this")]);
        assert!(matches!(d.expression(&this).unwrap(), Expression::This(_)));
        let err = d.expression(&b.tok("while")).unwrap_err();
        assert!(matches!(err, ConvertError::MalformedNode { .. }));
    }

    #[test]
    fn test_terminals_named_by_rule() {
        let b = CstBuilder::new();
        let d = Dispatcher::default();
        let null = d.expression(&b.term(NodeKind::NullLiteral, "null")).unwrap();
        assert!(matches!(null, Expression::Literal(lit) if lit.value == LiteralValue::Null));
        let flag = d.expression(&b.term(NodeKind::BooleanLiteral, "false")).unwrap();
        assert!(matches!(
            flag,
            Expression::Literal(lit) if lit.value == LiteralValue::Boolean(false)
        ));
        let reference = d.expression(&b.term(NodeKind::IdentifierReference, "async")).unwrap();
        assert!(matches!(reference, Expression::Identifier(id) if id.name == "async"));
    }
}
