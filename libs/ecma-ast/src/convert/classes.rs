//! # Class Conversion
//!
//! Class declarations and expressions, their heritage and members, and
//! the method scanner shared with object literal methods.
//!
//! ```text
//! class BindingIdentifier? ClassTail
//! ClassTail:    ClassHeritage? { ClassBody? }
//! ClassElement: static? (MethodDefinition | FieldDefinition ;) | ClassStaticBlock | ;
//! ```
//!
//! Members are scanned positionally after inlining the member rules, so
//! `static`, `async`, `*`, `get` and `set` are recognized as modifiers
//! only when a name still follows them: `static() {}` and `get = 1` are a
//! method and a field named `static` and `get`.

use super::expressions::METHOD_KINDS;
use super::{ChildCursor, Dispatcher};
use crate::ast::{
    BlockStatement, Class, ClassBody, ClassMember, Expression, FunctionExpression, Literal,
    MethodDefinition, MethodKind, Property, PropertyDefinition, PropertyKey, PropertyKind,
    StaticBlock,
};
use crate::error::ConvertResult;
use crate::token::Token;
use ecma_cst::{CstNode, NodeKind, SourceLocation};

/// Rules inlined before scanning a class element.
const ELEMENT_KINDS: &[NodeKind] = &[
    NodeKind::ClassElement,
    NodeKind::MethodDefinition,
    NodeKind::GeneratorMethod,
    NodeKind::AsyncMethod,
    NodeKind::AsyncGeneratorMethod,
    NodeKind::FieldDefinition,
];

/// A scanned method before it is placed in an object or a class.
#[derive(Debug)]
pub(crate) struct MethodParts {
    key: PropertyKey,
    computed: bool,
    accessor: Option<PropertyKind>,
    kind_token: Option<Token>,
    value: FunctionExpression,
}

impl MethodParts {
    /// Places the method in an object literal.
    pub fn into_property(self, loc: SourceLocation) -> Property {
        let kind = self.accessor.unwrap_or(PropertyKind::Init);
        Property {
            key: self.key,
            value: Expression::Function(Box::new(self.value)),
            kind,
            method: kind == PropertyKind::Init,
            shorthand: false,
            computed: self.computed,
            kind_token: self.kind_token,
            colon_token: None,
            loc,
        }
    }

    /// Places the method in a class body.
    fn into_method(
        self,
        is_static: bool,
        static_token: Option<Token>,
        loc: SourceLocation,
    ) -> MethodDefinition {
        let kind = match self.accessor {
            Some(PropertyKind::Get) => MethodKind::Get,
            Some(PropertyKind::Set) => MethodKind::Set,
            _ if !is_static && !self.computed && is_constructor_key(&self.key) => {
                MethodKind::Constructor
            }
            _ => MethodKind::Method,
        };
        MethodDefinition {
            key: self.key,
            value: self.value,
            kind,
            computed: self.computed,
            r#static: is_static,
            static_token,
            kind_token: self.kind_token,
            loc,
        }
    }
}

fn is_constructor_key(key: &PropertyKey) -> bool {
    match key {
        PropertyKey::Identifier(id) => id.name == "constructor",
        PropertyKey::Literal(Literal { raw, .. }) => {
            raw.get(1..raw.len().saturating_sub(1)) == Some("constructor")
        }
        _ => false,
    }
}

/// Check if a modifier keyword is followed by something it can modify.
fn modifies(next: Option<&CstNode>) -> bool {
    next.is_some_and(|n| !n.is_any_token(&["(", "=", ";", "}"]) && n.kind != NodeKind::Initializer)
}

impl Dispatcher {
    // =========================================================================
    // CLASSES
    // =========================================================================

    /// Scans a class declaration, class expression, `ClassTail` or bare
    /// `ClassBody`.
    pub(crate) fn class_parts(&self, node: &CstNode) -> ConvertResult<Class> {
        if matches!(node.kind, NodeKind::ClassBody | NodeKind::ClassElementList) {
            let mut members = Vec::new();
            self.collect_members(&node.children, &mut members)?;
            return Ok(Class {
                id: None,
                super_class: None,
                body: ClassBody {
                    body: members,
                    l_brace_token: None,
                    r_brace_token: None,
                    loc: node.loc,
                },
                class_token: None,
                extends_token: None,
                loc: node.loc,
            });
        }

        let mut cursor = ChildCursor::flattened(node, &[NodeKind::ClassTail]);
        let class_node = cursor.eat("class");
        if class_node.is_none() && node.kind != NodeKind::ClassTail {
            return Err(self.malformed(node, "missing `class`"));
        }
        let id = match cursor.peek() {
            Some(next)
                if next.kind != NodeKind::ClassHeritage
                    && !next.is_token("{")
                    && !next.is_token("extends") =>
            {
                cursor.next();
                Some(self.identifier(next)?)
            }
            _ => None,
        };

        let (extends_node, super_node) = if let Some(heritage) = cursor.eat_kind(NodeKind::ClassHeritage) {
            match heritage.children.as_slice() {
                [extends, expr] if extends.is_token("extends") => (Some(extends), Some(expr)),
                _ => return Err(self.malformed(heritage, "heritage must be `extends expression`")),
            }
        } else if let Some(extends) = cursor.eat("extends") {
            (Some(extends), Some(self.require(cursor.next(), node, "superclass")?))
        } else {
            (None, None)
        };
        let super_class = match super_node {
            Some(expr) => Some(Box::new(self.expression(expr)?)),
            None => None,
        };

        let l_brace = self.require(cursor.eat("{"), node, "`{`")?;
        let mut inner = Vec::new();
        while let Some(next) = cursor.peek() {
            if next.is_token("}") {
                break;
            }
            cursor.next();
            inner.push(next);
        }
        let r_brace = self.require(cursor.eat("}"), node, "`}`")?;
        let mut members = Vec::new();
        for child in inner {
            self.collect_members(std::slice::from_ref(child), &mut members)?;
        }

        Ok(Class {
            id,
            super_class,
            body: ClassBody {
                body: members,
                l_brace_token: self.tok(l_brace),
                r_brace_token: self.tok(r_brace),
                loc: l_brace.loc.merge(&r_brace.loc),
            },
            class_token: self.tok_opt(class_node),
            extends_token: self.tok_opt(extends_node),
            loc: node.loc,
        })
    }

    fn collect_members(&self, children: &[CstNode], out: &mut Vec<ClassMember>) -> ConvertResult<()> {
        for child in children {
            match child.kind {
                NodeKind::ClassBody | NodeKind::ClassElementList => {
                    self.collect_members(&child.children, out)?;
                }
                _ => out.extend(self.class_element(child)?),
            }
        }
        Ok(())
    }

    /// Converts one class element; a lone `;` yields nothing.
    pub(crate) fn class_element(&self, node: &CstNode) -> ConvertResult<Option<ClassMember>> {
        if node.is_token(";") {
            return Ok(None);
        }
        if node.kind == NodeKind::ClassStaticBlock {
            return self.static_block(node, node.loc).map(Some);
        }

        let mut cursor = ChildCursor::flattened(node, ELEMENT_KINDS);
        let static_node = if cursor.at("static") && modifies(cursor.peek_nth(1)) {
            cursor.next()
        } else {
            None
        };
        if let Some(block) = cursor.eat_kind(NodeKind::ClassStaticBlock) {
            return self.static_block(block, node.loc).map(Some);
        }
        if static_node.is_some() && cursor.at("{") {
            let parts: Vec<&CstNode> = cursor.collect();
            let block = self.static_block_parts(node, &parts)?;
            return Ok(Some(ClassMember::StaticBlock(StaticBlock::from_block(
                block,
                self.tok_opt(static_node),
                node.loc,
            ))));
        }

        let is_method = cursor
            .rest()
            .iter()
            .find(|c| {
                c.kind == NodeKind::Initializer
                    || matches!(c.terminal_text(), Some("(" | "="))
            })
            .is_some_and(|c| c.terminal_text() == Some("("));

        let is_static = static_node.is_some();
        let static_token = self.tok_opt(static_node);
        if is_method {
            let parts = self.method_parts(cursor, node)?;
            return Ok(Some(ClassMember::Method(parts.into_method(
                is_static,
                static_token,
                node.loc,
            ))));
        }

        let key_node = self.require(cursor.next(), node, "field name")?;
        let (key, computed) = self.property_key(key_node)?;
        let (value, eq_token) = if let Some(init) = cursor.eat_kind(NodeKind::Initializer) {
            let (value, eq) = self.initializer(init)?;
            (Some(value), eq)
        } else if let Some(eq) = cursor.eat("=") {
            let value = self.require(cursor.next(), node, "field initializer")?;
            (Some(self.expression(value)?), self.tok(eq))
        } else {
            (None, None)
        };
        let semicolon = cursor.eat(";");
        if let Some(extra) = cursor.next() {
            return Err(self.malformed(extra, "unexpected token in class field"));
        }
        Ok(Some(ClassMember::Property(PropertyDefinition {
            key,
            value,
            computed,
            r#static: is_static,
            static_token,
            eq_token,
            semicolon_token: self.tok_opt(semicolon),
            loc: node.loc,
        })))
    }

    /// `static { ClassStaticBlockBody? }`
    fn static_block(&self, node: &CstNode, loc: SourceLocation) -> ConvertResult<ClassMember> {
        let mut cursor = ChildCursor::new(node);
        let static_node = self.require(cursor.eat("static"), node, "`static`")?;
        let parts: Vec<&CstNode> = cursor.collect();
        let block = self.static_block_parts(node, &parts)?;
        Ok(ClassMember::StaticBlock(StaticBlock::from_block(
            block,
            self.tok(static_node),
            loc,
        )))
    }

    fn static_block_parts(&self, node: &CstNode, parts: &[&CstNode]) -> ConvertResult<BlockStatement> {
        match parts {
            [l_brace, inner @ .., r_brace] if l_brace.is_token("{") && r_brace.is_token("}") => {
                let mut body = Vec::new();
                for child in inner {
                    body.extend(self.statement_list(child)?);
                }
                Ok(BlockStatement {
                    body,
                    l_brace_token: self.tok(l_brace),
                    r_brace_token: self.tok(r_brace),
                    loc: l_brace.loc.merge(&r_brace.loc),
                })
            }
            _ => Err(self.malformed(node, "static block must be `static { ... }`")),
        }
    }

    // =========================================================================
    // METHODS
    // =========================================================================

    /// Scans `async? *? (get|set)? name ( params ) { body }` from an
    /// already-flattened cursor.
    pub(crate) fn method_parts(
        &self,
        mut cursor: ChildCursor<'_>,
        node: &CstNode,
    ) -> ConvertResult<MethodParts> {
        let async_node = if cursor.at("async") && modifies(cursor.peek_nth(1)) {
            cursor.next()
        } else {
            None
        };
        let star = cursor.eat("*");
        let accessor_node = match cursor.peek() {
            Some(next)
                if async_node.is_none()
                    && star.is_none()
                    && next.is_any_token(&["get", "set"])
                    && modifies(cursor.peek_nth(1)) =>
            {
                cursor.next()
            }
            _ => None,
        };
        let accessor = accessor_node.map(|n| {
            if n.is_token("get") {
                PropertyKind::Get
            } else {
                PropertyKind::Set
            }
        });

        let key_node = self.require(cursor.next(), node, "method name")?;
        let (key, computed) = self.property_key(key_node)?;
        let start = cursor.peek().map(|c| c.loc);
        let (params, body) = self.params_and_body(&mut cursor, node)?;
        let loc = start.map_or(body.loc, |s| s.merge(&body.loc));

        Ok(MethodParts {
            key,
            computed,
            accessor,
            kind_token: self.tok_opt(accessor_node),
            value: FunctionExpression {
                id: None,
                params: params.params,
                body,
                generator: star.is_some() || has_kind(node, NodeKind::GeneratorMethod)
                    || has_kind(node, NodeKind::AsyncGeneratorMethod),
                r#async: async_node.is_some(),
                async_token: self.tok_opt(async_node),
                function_token: None,
                star_token: self.tok_opt(star),
                l_paren_token: params.l_paren,
                r_paren_token: params.r_paren,
                comma_tokens: params.commas,
                loc,
            },
        })
    }
}

/// Check if `node` is, or directly wraps, a rule of the given kind.
fn has_kind(node: &CstNode, kind: NodeKind) -> bool {
    node.kind == kind
        || node
            .children
            .iter()
            .any(|c| c.kind == kind || (METHOD_KINDS.contains(&c.kind) && has_kind(c, kind)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Statement;
    use crate::error::ConvertError;
    use ecma_cst::CstBuilder;

    fn name(b: &CstBuilder, text: &str) -> CstNode {
        b.rule(
            NodeKind::ClassElementName,
            vec![b.rule(NodeKind::PropertyName, vec![b.ident(text)])],
        )
    }

    fn method(b: &CstBuilder, prefix: Vec<CstNode>, key: CstNode) -> CstNode {
        let mut children = prefix;
        children.extend([key, b.tok("("), b.tok(")"), b.tok("{"), b.tok("}")]);
        b.rule(NodeKind::MethodDefinition, children)
    }

    fn element(b: &CstBuilder, children: Vec<CstNode>) -> CstNode {
        b.rule(NodeKind::ClassElement, children)
    }

    fn class_decl(b: &CstBuilder, heritage: Option<CstNode>, elements: Vec<CstNode>) -> CstNode {
        let mut tail = Vec::new();
        tail.extend(heritage);
        tail.push(b.tok("{"));
        if !elements.is_empty() {
            tail.push(b.rule(
                NodeKind::ClassBody,
                vec![b.rule(NodeKind::ClassElementList, elements)],
            ));
        }
        tail.push(b.tok("}"));
        b.rule(
            NodeKind::ClassDeclaration,
            vec![
                b.tok("class"),
                b.rule(NodeKind::BindingIdentifier, vec![b.ident("A")]),
                b.rule(NodeKind::ClassTail, tail),
            ],
        )
    }

    fn methods(class: &Class) -> Vec<&MethodDefinition> {
        class
            .body
            .body
            .iter()
            .filter_map(|m| match m {
                ClassMember::Method(m) => Some(m),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_constructor_is_tagged() {
        let b = CstBuilder::new();
        let ctor = element(&b, vec![method(&b, vec![], name(&b, "constructor"))]);
        let static_ctor = element(
            &b,
            vec![b.tok("static"), method(&b, vec![], name(&b, "constructor"))],
        );
        let node = class_decl(&b, None, vec![ctor, static_ctor]);
        let class = Dispatcher::default().class_parts(&node).unwrap();
        let methods = methods(&class);
        assert_eq!(methods[0].kind, MethodKind::Constructor);
        assert!(!methods[0].r#static);
        assert_eq!(methods[1].kind, MethodKind::Method);
        assert!(methods[1].r#static);
        assert!(methods[1].static_token.is_some());
    }

    #[test]
    fn test_accessors_and_modifier_names() {
        let b = CstBuilder::new();
        let getter = element(&b, vec![method(&b, vec![b.ident("get")], name(&b, "size"))]);
        let named_get = element(&b, vec![method(&b, vec![], name(&b, "get"))]);
        let named_static = element(&b, vec![method(&b, vec![], name(&b, "static"))]);
        let node = class_decl(&b, None, vec![getter, named_get, named_static]);
        let class = Dispatcher::default().class_parts(&node).unwrap();
        let methods = methods(&class);
        assert_eq!(methods[0].kind, MethodKind::Get);
        assert!(methods[0].kind_token.is_some());
        assert_eq!(methods[1].kind, MethodKind::Method);
        assert!(matches!(&methods[1].key, PropertyKey::Identifier(id) if id.name == "get"));
        assert!(!methods[2].r#static);
        assert!(matches!(&methods[2].key, PropertyKey::Identifier(id) if id.name == "static"));
    }

    #[test]
    fn test_async_generator_method() {
        let b = CstBuilder::new();
        let gen = b.rule(
            NodeKind::AsyncGeneratorMethod,
            vec![
                b.ident("async"),
                b.tok("*"),
                name(&b, "items"),
                b.tok("("),
                b.tok(")"),
                b.tok("{"),
                b.tok("}"),
            ],
        );
        let node = class_decl(&b, None, vec![element(&b, vec![gen])]);
        let class = Dispatcher::default().class_parts(&node).unwrap();
        let value = &methods(&class)[0].value;
        assert!(value.r#async && value.generator);
    }

    #[test]
    fn test_fields_private_and_static() {
        let b = CstBuilder::new();
        let private = element(
            &b,
            vec![
                b.rule(
                    NodeKind::FieldDefinition,
                    vec![
                        b.rule(NodeKind::ClassElementName, vec![b.term(NodeKind::PrivateIdentifier, "#count")]),
                        b.rule(NodeKind::Initializer, vec![b.tok("="), b.num("0")]),
                    ],
                ),
                b.tok(";"),
            ],
        );
        let static_field = element(
            &b,
            vec![
                b.tok("static"),
                b.rule(NodeKind::FieldDefinition, vec![name(&b, "shared")]),
                b.tok(";"),
            ],
        );
        let node = class_decl(&b, None, vec![private, static_field, b.tok(";")]);
        let class = Dispatcher::default().class_parts(&node).unwrap();
        assert_eq!(class.body.body.len(), 2);
        let ClassMember::Property(first) = &class.body.body[0] else {
            panic!("expected field");
        };
        assert!(matches!(&first.key, PropertyKey::PrivateIdentifier(id) if id.name == "count"));
        assert!(first.value.is_some());
        assert!(first.semicolon_token.is_some());
        let ClassMember::Property(second) = &class.body.body[1] else {
            panic!("expected field");
        };
        assert!(second.r#static);
        assert!(second.value.is_none());
    }

    #[test]
    fn test_static_block() {
        let b = CstBuilder::new();
        let block = b.rule(
            NodeKind::ClassStaticBlock,
            vec![
                b.tok("static"),
                b.tok("{"),
                b.rule(
                    NodeKind::ClassStaticBlockBody,
                    vec![b.rule(
                        NodeKind::ClassStaticBlockStatementList,
                        vec![b.rule(NodeKind::EmptyStatement, vec![b.tok(";")])],
                    )],
                ),
                b.tok("}"),
            ],
        );
        let node = class_decl(&b, None, vec![element(&b, vec![block])]);
        let class = Dispatcher::default().class_parts(&node).unwrap();
        let ClassMember::StaticBlock(block) = &class.body.body[0] else {
            panic!("expected static block");
        };
        assert!(matches!(block.body[0], Statement::Empty(_)));
    }

    #[test]
    fn test_heritage_and_declaration() {
        let b = CstBuilder::new();
        let heritage = b.rule(NodeKind::ClassHeritage, vec![b.tok("extends"), b.ident("Base")]);
        let node = class_decl(&b, Some(heritage), vec![]);
        let Statement::ClassDeclaration(decl) = Dispatcher::default().statement(&node).unwrap()
        else {
            panic!("expected class declaration");
        };
        assert_eq!(decl.id.as_ref().map(|id| id.name.as_str()), Some("A"));
        assert!(matches!(decl.super_class.as_deref(), Some(Expression::Identifier(_))));
        assert!(decl.extends_token.is_some());
        assert!(decl.body.body.is_empty());
    }

    #[test]
    fn test_missing_class_keyword() {
        let b = CstBuilder::new();
        let node = b.rule(NodeKind::ClassExpression, vec![b.tok("{"), b.tok("}")]);
        assert!(matches!(
            Dispatcher::default().class_parts(&node).unwrap_err(),
            ConvertError::MalformedNode { .. }
        ));
    }
}
