//! # Pattern Conversion
//!
//! Binding and assignment targets: identifiers, object and array
//! destructuring, rest elements and defaults.
//!
//! Patterns reach the converter two ways. Binding positions (`let`,
//! parameters, `catch`) and the explicit assignment-pattern rules arrive
//! as pattern CST nodes and go through [`Dispatcher::pattern`]. Cover
//! grammar positions (`[a, b] = x`, arrow parameters) arrive as
//! expressions and are reinterpreted afterwards with
//! [`Dispatcher::reinterpret`].

use super::expressions::{ElementSlots, Slot};
use super::Dispatcher;
use crate::ast::{
    ArrayPattern, AssignmentOperator, AssignmentPattern, AssignmentProperty, Expression,
    ExpressionOrSpread, ObjectMember, ObjectPattern, ObjectPatternProperty, Pattern, PropertyKey,
    PropertyKind, RestElement,
};
use crate::error::ConvertResult;
use crate::token::Token;
use ecma_cst::{CstNode, NodeKind, RuleCategory};

/// Where a reinterpreted expression is going to be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TargetContext {
    /// Left of `=`: member expressions are valid targets.
    Assignment,
    /// Arrow parameters: only names and destructuring.
    Binding,
}

impl Dispatcher {
    /// Converts any pattern-category node to a [`Pattern`].
    pub(crate) fn pattern(&self, node: &CstNode) -> ConvertResult<Pattern> {
        if node.is_terminal() {
            return match node.kind {
                NodeKind::IdentifierName | NodeKind::Keyword => {
                    self.identifier(node).map(Pattern::Identifier)
                }
                _ => Err(self.unsupported(node, "binding target")),
            };
        }

        match node.kind {
            NodeKind::BindingIdentifier
            | NodeKind::LabelIdentifier
            | NodeKind::ImportedBinding
            | NodeKind::ImportedDefaultBinding
            | NodeKind::AsyncArrowBindingIdentifier => {
                self.identifier(node).map(Pattern::Identifier)
            }
            NodeKind::ObjectBindingPattern | NodeKind::ObjectAssignmentPattern => {
                self.object_pattern(node)
            }
            NodeKind::ArrayBindingPattern | NodeKind::ArrayAssignmentPattern => {
                self.array_pattern(node)
            }
            NodeKind::BindingRestElement
            | NodeKind::AssignmentRestElement
            | NodeKind::FunctionRestParameter
                if node.children.first().is_some_and(|c| c.is_token("...")) =>
            {
                self.rest_element(node)
            }
            NodeKind::BindingPattern
            | NodeKind::ForBinding
            | NodeKind::CatchParameter
            | NodeKind::DestructuringAssignmentTarget
            | NodeKind::AssignmentPattern
            | NodeKind::BindingElement
            | NodeKind::SingleNameBinding
            | NodeKind::AssignmentElement
            | NodeKind::FormalParameter
            | NodeKind::FunctionRestParameter
            | NodeKind::BindingRestElement
            | NodeKind::AssignmentRestElement => self.target_with_default(node, &node.children),
            _ if node.kind.category() == RuleCategory::Expression => {
                let expr = self.expression(node)?;
                self.reinterpret(expr, TargetContext::Assignment)
                    .map_err(|_| self.malformed(node, "expression is not a valid target"))
            }
            _ => Err(self.unsupported(node, "binding target")),
        }
    }

    /// `target Initializer?` or `target = expr`.
    fn target_with_default(&self, node: &CstNode, parts: &[CstNode]) -> ConvertResult<Pattern> {
        match parts {
            [target] => self.pattern(target),
            [target, init] if init.kind == NodeKind::Initializer => {
                let (right, eq_token) = self.initializer(init)?;
                Ok(self.with_default(self.pattern(target)?, right, eq_token, node))
            }
            [target, eq, value] if eq.is_token("=") => {
                let right = self.expression(value)?;
                Ok(self.with_default(self.pattern(target)?, right, self.tok(eq), node))
            }
            _ => Err(self.malformed(node, "expected a target with an optional default")),
        }
    }

    fn with_default(
        &self,
        left: Pattern,
        right: Expression,
        eq_token: Option<Token>,
        node: &CstNode,
    ) -> Pattern {
        Pattern::Assignment(AssignmentPattern {
            left: Box::new(left),
            right: Box::new(right),
            eq_token,
            loc: node.loc,
        })
    }

    /// `Initializer: = AssignmentExpression`.
    pub(crate) fn initializer(&self, node: &CstNode) -> ConvertResult<(Expression, Option<Token>)> {
        match node.children.as_slice() {
            [eq, value] if eq.is_token("=") => Ok((self.expression(value)?, self.tok(eq))),
            _ => Err(self.malformed(node, "initializer must be `= expression`")),
        }
    }

    fn rest_element(&self, node: &CstNode) -> ConvertResult<Pattern> {
        match node.children.as_slice() {
            [ellipsis, target] => Ok(Pattern::Rest(RestElement {
                argument: Box::new(self.pattern(target)?),
                ellipsis_token: self.tok(ellipsis),
                loc: node.loc,
            })),
            _ => Err(self.malformed(node, "rest element must be `... target`")),
        }
    }

    // =========================================================================
    // OBJECT PATTERNS
    // =========================================================================

    fn object_pattern(&self, node: &CstNode) -> ConvertResult<Pattern> {
        let (l_brace, inner, r_brace) = self.bracketed(node, "{", "}")?;
        let mut properties = Vec::new();
        let mut commas = Vec::new();
        self.collect_pattern_properties(inner, &mut properties, &mut commas)?;
        Ok(Pattern::Object(ObjectPattern {
            properties,
            l_brace_token: self.tok(l_brace),
            r_brace_token: self.tok(r_brace),
            comma_tokens: commas,
            loc: node.loc,
        }))
    }

    fn collect_pattern_properties(
        &self,
        children: &[CstNode],
        properties: &mut Vec<ObjectPatternProperty>,
        commas: &mut Vec<Token>,
    ) -> ConvertResult<()> {
        let mut iter = children.iter();
        while let Some(child) = iter.next() {
            match child.kind {
                NodeKind::BindingPropertyList | NodeKind::AssignmentPropertyList => {
                    self.collect_pattern_properties(&child.children, properties, commas)?;
                }
                NodeKind::BindingRestProperty | NodeKind::AssignmentRestProperty => {
                    if let Pattern::Rest(rest) = self.rest_element(child)? {
                        properties.push(ObjectPatternProperty::Rest(rest));
                    }
                }
                _ if child.is_token(",") => commas.extend(self.tok(child)),
                _ if child.is_token("...") => {
                    let target = iter
                        .next()
                        .ok_or_else(|| self.malformed(child, "missing rest target"))?;
                    properties.push(ObjectPatternProperty::Rest(RestElement {
                        argument: Box::new(self.pattern(target)?),
                        ellipsis_token: self.tok(child),
                        loc: child.loc.merge(&target.loc),
                    }));
                }
                _ => properties.push(ObjectPatternProperty::Property(
                    self.pattern_property(child)?,
                )),
            }
        }
        Ok(())
    }

    /// `BindingProperty` / `AssignmentProperty`:
    ///
    /// ```text
    /// [SingleNameBinding]                 { a }  { a = 1 }
    /// [IdentifierReference, Initializer?] { a }  { a = 1 }
    /// [PropertyName, ":", element]        { k: v }
    /// ```
    fn pattern_property(&self, node: &CstNode) -> ConvertResult<AssignmentProperty> {
        let parts: &[CstNode] = if matches!(
            node.kind,
            NodeKind::BindingProperty | NodeKind::AssignmentProperty
        ) {
            &node.children
        } else {
            std::slice::from_ref(node)
        };

        if let [key_node, colon, value] = parts {
            if colon.is_token(":") {
                let (key, computed) = self.property_key(key_node)?;
                return Ok(AssignmentProperty {
                    key,
                    value: self.pattern(value)?,
                    kind: PropertyKind::Init,
                    method: false,
                    shorthand: false,
                    computed,
                    colon_token: self.tok(colon),
                    loc: node.loc,
                });
            }
        }

        let first = self.require(parts.first(), node, "property target")?;
        let name_node = if first.kind == NodeKind::SingleNameBinding {
            self.require(first.children.first(), first, "binding name")?
        } else {
            first
        };
        let key = self.identifier(name_node)?;
        Ok(AssignmentProperty {
            key: PropertyKey::Identifier(key),
            value: self.target_with_default(node, parts)?,
            kind: PropertyKind::Init,
            method: false,
            shorthand: true,
            computed: false,
            colon_token: None,
            loc: node.loc,
        })
    }

    // =========================================================================
    // ARRAY PATTERNS
    // =========================================================================

    fn array_pattern(&self, node: &CstNode) -> ConvertResult<Pattern> {
        let (l_bracket, inner, r_bracket) = self.bracketed(node, "[", "]")?;
        let slots = ElementSlots::collect(inner);
        let mut elements = Vec::with_capacity(slots.slots.len());
        for slot in &slots.slots {
            elements.push(match slot {
                None => None,
                Some(Slot::Node(n)) => Some(self.pattern(n)?),
                Some(Slot::Rest(ellipsis, target)) => Some(Pattern::Rest(RestElement {
                    argument: Box::new(self.pattern(target)?),
                    ellipsis_token: self.tok(ellipsis),
                    loc: ellipsis.loc.merge(&target.loc),
                })),
            });
        }
        Ok(Pattern::Array(ArrayPattern {
            elements,
            l_bracket_token: self.tok(l_bracket),
            r_bracket_token: self.tok(r_bracket),
            comma_tokens: slots.commas.iter().filter_map(|c| self.tok(c)).collect(),
            loc: node.loc,
        }))
    }

    // =========================================================================
    // REINTERPRETATION
    // =========================================================================

    /// Reads an already-converted expression as a pattern.
    ///
    /// ## Returns
    ///
    /// The pattern, or the first sub-expression that has no pattern
    /// reading in `context`.
    pub(crate) fn reinterpret(
        &self,
        expr: Expression,
        context: TargetContext,
    ) -> Result<Pattern, Expression> {
        match expr {
            Expression::Identifier(id) => Ok(Pattern::Identifier(id)),
            Expression::Array(array) => {
                let mut elements = Vec::with_capacity(array.elements.len());
                for element in array.elements {
                    elements.push(match element {
                        None => None,
                        Some(ExpressionOrSpread::Expression(e)) => {
                            Some(self.reinterpret(e, context)?)
                        }
                        Some(ExpressionOrSpread::Spread(spread)) => Some(Pattern::Rest(RestElement {
                            argument: Box::new(self.reinterpret(spread.argument, context)?),
                            ellipsis_token: spread.ellipsis_token,
                            loc: spread.loc,
                        })),
                    });
                }
                Ok(Pattern::Array(ArrayPattern {
                    elements,
                    l_bracket_token: array.l_bracket_token,
                    r_bracket_token: array.r_bracket_token,
                    comma_tokens: array.comma_tokens,
                    loc: array.loc,
                }))
            }
            Expression::Object(object) => {
                let mut properties = Vec::with_capacity(object.properties.len());
                for member in object.properties {
                    properties.push(match member {
                        ObjectMember::Property(p) if p.kind == PropertyKind::Init && !p.method => {
                            ObjectPatternProperty::Property(AssignmentProperty {
                                key: p.key,
                                value: self.reinterpret(p.value, context)?,
                                kind: PropertyKind::Init,
                                method: false,
                                shorthand: p.shorthand,
                                computed: p.computed,
                                colon_token: p.colon_token,
                                loc: p.loc,
                            })
                        }
                        ObjectMember::Property(p) => return Err(p.value),
                        ObjectMember::Spread(spread) => ObjectPatternProperty::Rest(RestElement {
                            argument: Box::new(self.reinterpret(spread.argument, context)?),
                            ellipsis_token: spread.ellipsis_token,
                            loc: spread.loc,
                        }),
                    });
                }
                Ok(Pattern::Object(ObjectPattern {
                    properties,
                    l_brace_token: object.l_brace_token,
                    r_brace_token: object.r_brace_token,
                    comma_tokens: object.comma_tokens,
                    loc: object.loc,
                }))
            }
            Expression::Assignment(assign) if assign.operator == AssignmentOperator::Assign => {
                Ok(Pattern::Assignment(AssignmentPattern {
                    left: assign.left,
                    right: assign.right,
                    eq_token: assign.operator_token,
                    loc: assign.loc,
                }))
            }
            Expression::Parenthesized(paren) if context == TargetContext::Assignment => {
                self.reinterpret(*paren.expression, context)
            }
            other if context == TargetContext::Assignment => Ok(Pattern::Expression(Box::new(other))),
            other => Err(other),
        }
    }

    /// Target of a compound assignment (`x += 1`): no destructuring.
    pub(crate) fn simple_target(&self, expr: Expression) -> Pattern {
        match expr {
            Expression::Identifier(id) => Pattern::Identifier(id),
            other => Pattern::Expression(Box::new(other)),
        }
    }
}
