use config::constants::ConverterConfig;
use ecma_ast::ast::{
    ClassMember, Expression, ExpressionOrSpread, MethodKind, ModuleItem, ObjectPatternProperty,
    Pattern, Statement,
};
use ecma_ast::{AstNode, ConvertError, Dispatcher};
use ecma_cst::{Cst, CstBuilder, CstNode, Located, NodeKind};

fn binding(b: &CstBuilder, name: &str) -> CstNode {
    b.rule(NodeKind::BindingIdentifier, vec![b.ident(name)])
}

fn expr(node: &CstNode) -> Expression {
    Dispatcher::default()
        .convert(node)
        .unwrap()
        .into_expression()
        .expect("expression")
}

#[test]
fn test_binary_chain_folds_left() {
    let b = CstBuilder::new();
    let node = b.rule(
        NodeKind::AdditiveExpression,
        vec![b.ident("a"), b.tok("-"), b.ident("b"), b.tok("-"), b.ident("c")],
    );
    let Expression::Binary(outer) = expr(&node) else {
        panic!("expected binary expression");
    };
    assert_eq!(outer.operator.as_str(), "-");
    assert!(matches!(*outer.right, Expression::Identifier(ref id) if id.name == "c"));
    let Expression::Binary(inner) = *outer.left else {
        panic!("expected nested binary on the left");
    };
    assert!(matches!(*inner.left, Expression::Identifier(ref id) if id.name == "a"));
    assert!(matches!(*inner.right, Expression::Identifier(ref id) if id.name == "b"));
    assert_eq!(outer.loc, node.loc);
}

#[test]
fn test_exponent_chain_folds_right() {
    let b = CstBuilder::new();
    let node = b.rule(
        NodeKind::ExponentiationExpression,
        vec![b.ident("a"), b.tok("**"), b.ident("b"), b.tok("**"), b.ident("c")],
    );
    let Expression::Binary(outer) = expr(&node) else {
        panic!("expected binary expression");
    };
    assert!(matches!(*outer.left, Expression::Identifier(ref id) if id.name == "a"));
    assert!(matches!(*outer.right, Expression::Binary(_)));
}

#[test]
fn test_single_child_cascade_passes_through() {
    let b = CstBuilder::new();
    let mut node = b.rule(NodeKind::IdentifierReference, vec![b.ident("x")]);
    for kind in [
        NodeKind::MultiplicativeExpression,
        NodeKind::AdditiveExpression,
        NodeKind::ShiftExpression,
        NodeKind::RelationalExpression,
        NodeKind::EqualityExpression,
        NodeKind::LogicalORExpression,
        NodeKind::ConditionalExpression,
        NodeKind::AssignmentExpression,
    ] {
        node = b.rule(kind, vec![node]);
    }
    let Expression::Identifier(id) = expr(&node) else {
        panic!("expected the bare identifier");
    };
    assert_eq!(id.name, "x");
}

#[test]
fn test_array_elision_produces_one_hole() {
    // [1, , 3]
    let b = CstBuilder::new();
    let node = b.rule(
        NodeKind::ArrayLiteral,
        vec![
            b.tok("["),
            b.rule(
                NodeKind::ElementList,
                vec![
                    b.num("1"),
                    b.tok(","),
                    b.rule(NodeKind::Elision, vec![b.tok(",")]),
                    b.num("3"),
                ],
            ),
            b.tok("]"),
        ],
    );
    let Expression::Array(array) = expr(&node) else {
        panic!("expected array");
    };
    assert_eq!(array.elements.len(), 3);
    assert!(matches!(array.elements[0], Some(ExpressionOrSpread::Expression(Expression::Literal(_)))));
    assert!(array.elements[1].is_none());
    assert!(matches!(array.elements[2], Some(ExpressionOrSpread::Expression(Expression::Literal(_)))));
}

#[test]
fn test_nested_destructuring_pattern() {
    // {a, b: [c, ...d]}
    let b = CstBuilder::new();
    let array = b.rule(
        NodeKind::ArrayBindingPattern,
        vec![
            b.tok("["),
            b.rule(
                NodeKind::BindingElementList,
                vec![b.rule(
                    NodeKind::BindingElement,
                    vec![b.rule(NodeKind::SingleNameBinding, vec![binding(&b, "c")])],
                )],
            ),
            b.tok(","),
            b.rule(NodeKind::BindingRestElement, vec![b.tok("..."), binding(&b, "d")]),
            b.tok("]"),
        ],
    );
    let object = b.rule(
        NodeKind::ObjectBindingPattern,
        vec![
            b.tok("{"),
            b.rule(
                NodeKind::BindingPropertyList,
                vec![
                    b.rule(
                        NodeKind::BindingProperty,
                        vec![b.rule(NodeKind::SingleNameBinding, vec![binding(&b, "a")])],
                    ),
                    b.tok(","),
                    b.rule(
                        NodeKind::BindingProperty,
                        vec![
                            b.rule(NodeKind::PropertyName, vec![b.ident("b")]),
                            b.tok(":"),
                            b.rule(NodeKind::BindingElement, vec![b.rule(NodeKind::BindingPattern, vec![array])]),
                        ],
                    ),
                ],
            ),
            b.tok("}"),
        ],
    );
    let node = b.rule(NodeKind::BindingPattern, vec![object]);

    let pattern = Dispatcher::default().convert(&node).unwrap().into_pattern().unwrap();
    let Pattern::Object(object) = pattern else {
        panic!("expected object pattern");
    };
    assert_eq!(object.properties.len(), 2);
    let ObjectPatternProperty::Property(second) = &object.properties[1] else {
        panic!("expected property");
    };
    let Pattern::Array(array) = &second.value else {
        panic!("expected array pattern");
    };
    assert!(matches!(array.elements[0], Some(Pattern::Identifier(_))));
    assert!(matches!(array.elements[1], Some(Pattern::Rest(_))));
}

#[test]
fn test_constructor_tagging_excludes_static() {
    let b = CstBuilder::new();
    let method = |name: &str| {
        b.rule(
            NodeKind::MethodDefinition,
            vec![
                b.rule(NodeKind::ClassElementName, vec![b.rule(NodeKind::PropertyName, vec![b.ident(name)])]),
                b.tok("("),
                b.tok(")"),
                b.tok("{"),
                b.tok("}"),
            ],
        )
    };
    let body = b.rule(
        NodeKind::ClassBody,
        vec![b.rule(
            NodeKind::ClassElementList,
            vec![
                b.rule(NodeKind::ClassElement, vec![method("constructor")]),
                b.rule(NodeKind::ClassElement, vec![b.tok("static"), method("constructor")]),
            ],
        )],
    );
    let AstNode::ClassBody(body) = Dispatcher::default().convert(&body).unwrap() else {
        panic!("expected class body");
    };
    let kinds: Vec<(MethodKind, bool)> = body
        .body
        .iter()
        .map(|m| match m {
            ClassMember::Method(m) => (m.kind, m.r#static),
            other => panic!("expected method, got {other:?}"),
        })
        .collect();
    assert_eq!(kinds, vec![(MethodKind::Constructor, false), (MethodKind::Method, true)]);
}

#[test]
fn test_switch_default_keeps_its_position() {
    let b = CstBuilder::new();
    let case = |n: &str| b.rule(NodeKind::CaseClause, vec![b.tok("case"), b.num(n), b.tok(":")]);
    let node = b.rule(
        NodeKind::SwitchStatement,
        vec![
            b.tok("switch"),
            b.tok("("),
            b.ident("k"),
            b.tok(")"),
            b.rule(
                NodeKind::CaseBlock,
                vec![
                    b.tok("{"),
                    b.rule(NodeKind::CaseClauses, vec![case("1")]),
                    b.rule(NodeKind::DefaultClause, vec![b.tok("default"), b.tok(":")]),
                    b.rule(NodeKind::CaseClauses, vec![case("2"), case("3")]),
                    b.tok("}"),
                ],
            ),
        ],
    );
    let Some(Statement::Switch(switch)) = Dispatcher::default().convert(&node).unwrap().into_statement()
    else {
        panic!("expected switch");
    };
    let tests: Vec<bool> = switch.cases.iter().map(|c| c.test.is_some()).collect();
    assert_eq!(tests, vec![true, false, true, true]);
}

#[test]
fn test_missing_declarator_list_raises() {
    let b = CstBuilder::new();
    let d = Dispatcher::default();

    let declarator = b.rule(NodeKind::VariableDeclaration, vec![]);
    assert!(matches!(d.convert(&declarator), Err(ConvertError::MalformedNode { .. })));

    let stmt = b.rule(NodeKind::VariableStatement, vec![b.tok("var")]);
    match d.convert(&stmt) {
        Err(ConvertError::MalformedNode { kind, reason, .. }) => {
            assert_eq!(kind, NodeKind::VariableStatement);
            assert_eq!(reason, "missing declarator list");
        }
        other => panic!("expected malformed node, got {other:?}"),
    }
}

#[test]
fn test_unexpected_rule_position_is_unsupported() {
    let b = CstBuilder::new();
    let node = b.rule(
        NodeKind::ExpressionStatement,
        vec![b.rule(NodeKind::CaseBlock, vec![b.tok("{"), b.tok("}")]), b.tok(";")],
    );
    assert!(matches!(
        Dispatcher::default().convert(&node),
        Err(ConvertError::UnsupportedNodeKind { kind: NodeKind::CaseBlock, .. })
    ));
}

#[test]
fn test_decoration_tokens_can_be_switched_off() {
    let b = CstBuilder::new();
    let node = b.rule(
        NodeKind::IfStatement,
        vec![
            b.tok("if"),
            b.tok("("),
            b.ident("a"),
            b.tok(")"),
            b.rule(NodeKind::EmptyStatement, vec![b.tok(";")]),
        ],
    );

    let plain = Dispatcher::new(ConverterConfig::default().with_tokens(false)).unwrap();
    let Some(Statement::If(stmt)) = plain.convert(&node).unwrap().into_statement() else {
        panic!("expected if");
    };
    assert!(stmt.if_token.is_none() && stmt.l_paren_token.is_none());

    let Some(Statement::If(stmt)) = Dispatcher::default().convert(&node).unwrap().into_statement()
    else {
        panic!("expected if");
    };
    assert_eq!(stmt.if_token.map(|t| t.loc), Some(node.children[0].loc));
}

#[test]
fn test_every_statement_keeps_its_cst_location() {
    let b = CstBuilder::new();
    let first = b.rule(NodeKind::DebuggerStatement, vec![b.tok("debugger"), b.tok(";")]);
    b.newline();
    let second = b.rule(
        NodeKind::ExpressionStatement,
        vec![
            b.rule(NodeKind::CallExpression, vec![b.ident("f"), b.rule(NodeKind::Arguments, vec![b.tok("("), b.tok(")")])]),
            b.tok(";"),
        ],
    );
    let locs = [first.loc, second.loc];
    let root = b.rule(NodeKind::Script, vec![b.rule(NodeKind::StatementList, vec![first, second])]);
    let program = ecma_ast::convert(&Cst::new(root)).unwrap();
    let got: Vec<_> = program.body.iter().map(ModuleItem::loc).collect();
    assert_eq!(got, locs);
    assert_eq!(got[1].start.line, 2);
}
