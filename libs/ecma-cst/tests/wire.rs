use ecma_cst::{Cst, CstError, NodeKind, SerializedNode};
use serde_json::json;

fn loc(start: usize, end: usize) -> serde_json::Value {
    json!({
        "start": {"line": 1, "column": start, "offset": start},
        "end": {"line": 1, "column": end, "offset": end}
    })
}

fn leaf(name: &str, value: &str, start: usize) -> serde_json::Value {
    json!({"name": name, "value": value, "loc": loc(start, start + value.len())})
}

#[test]
fn test_builds_script_with_comments_hoisted() {
    // /* c */ x;
    let wire = json!({
        "name": "Script",
        "children": [
            leaf("Comment", "/* c */", 0),
            {
                "name": "ScriptBody",
                "children": [{
                    "name": "StatementList",
                    "children": [{
                        "name": "ExpressionStatement",
                        "children": [
                            {"name": "IdentifierReference", "children": [leaf("IdentifierName", "x", 8)]},
                            leaf("Punctuator", ";", 9)
                        ]
                    }]
                }]
            }
        ]
    });
    let node: SerializedNode = serde_json::from_value(wire).unwrap();
    let cst = Cst::try_from(node).unwrap();

    assert_eq!(cst.root.kind, NodeKind::Script);
    assert_eq!(cst.comments.len(), 1);
    assert_eq!(cst.root.children.len(), 1);
    assert_eq!(cst.root.loc.start.offset, 0);
    assert_eq!(cst.root.loc.end.offset, 10);
}

#[test]
fn test_nested_unknown_rule_is_reported() {
    let wire = json!({
        "name": "Script",
        "children": [{"name": "Decorator", "children": [leaf("Punctuator", "@", 0)]}]
    });
    let node: SerializedNode = serde_json::from_value(wire).unwrap();
    match Cst::try_from(node) {
        Err(CstError::UnknownRule { name, .. }) => assert_eq!(name, "Decorator"),
        other => panic!("expected unknown rule, got {other:?}"),
    }
}

#[test]
fn test_serialized_node_round_trips_through_json() {
    let wire = json!({"name": "Punctuator", "value": ";", "loc": loc(0, 1)});
    let node: SerializedNode = serde_json::from_value(wire.clone()).unwrap();
    let back = serde_json::to_value(&node).unwrap();
    assert_eq!(back["name"], "Punctuator");
    assert_eq!(back["value"], ";");
    assert_eq!(back["children"], json!([]));
}
