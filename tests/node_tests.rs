//! Node builder behaviour: ranges, merging and derived source text.

mod common;

use common::context;
use parse_context::{ErrorKind, NodeKind, NodeParts, Position, TokenKind};
use serde_json::json;

#[test]
fn start_then_end_without_advance_gives_equal_ends() {
    let ctx = context("foo(1)");
    let node = ctx.end_node(ctx.start_node(None), NodeKind::FunctionCall);
    assert_eq!(node.kind, NodeKind::FunctionCall);
    assert_eq!(node.range.start, node.range.end);
}

#[test]
fn make_node_keeps_every_part() {
    let mut ctx = context("a + b");
    let left = ctx.identifier().unwrap();

    let parts = NodeParts::new()
        .value("+")
        .meta("precedence", 10)
        .param(left.clone())
        .type_annotation("i32");
    let node = ctx.make_node(parts, NodeKind::BinaryExpression);

    assert_eq!(node.kind, NodeKind::BinaryExpression);
    assert_eq!(node.value, "+");
    assert_eq!(node.meta.get("precedence"), Some(&json!(10)));
    assert_eq!(node.params, vec![left]);
    assert_eq!(node.type_annotation.as_deref(), Some("i32"));
    assert_eq!(node.range.start.column, 2);
    assert_eq!(node.range.end.column, 2);
}

#[test]
fn make_node_reads_the_end_when_called() {
    // The end is wherever the cursor is at call time, so a node built right
    // after opening on `x` spans nothing.
    let mut ctx = context("let x = 5;");
    ctx.next();
    let node = ctx.make_node(NodeParts::new(), NodeKind::Identifier);
    assert_eq!(node.text(), "");

    // With the end passed explicitly the span covers the construct.
    let end = Position::new(1, 5, "let x = 5;");
    let node = ctx
        .make_node_at(NodeParts::new(), NodeKind::Identifier, end)
        .unwrap();
    assert_eq!(node.text(), "x");
}

#[test]
fn explicit_end_must_not_precede_start() {
    let mut ctx = context("let x = 5;");
    ctx.next();
    let open = ctx.start_node(None);
    let err = ctx
        .end_node_at(open, NodeKind::Identifier, Position::new(1, 0, "let x = 5;"))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvertedRange { .. }));
    assert!(err.diagnostic_info.help.is_some());
}

#[test]
fn declaration_spans_the_whole_statement() {
    let mut ctx = context("const answer: i32 = 42;");
    let mut open = ctx.start_node(None);
    ctx.expect(&["const"]).unwrap();
    let name = ctx.identifier().unwrap();
    ctx.expect(&[":"]).unwrap();
    let ty = ctx.type_node().unwrap();
    ctx.expect(&["="]).unwrap();
    let value = ctx.constant().unwrap();

    open.value = name.value.clone();
    open.type_annotation = ty.type_annotation.clone();
    open.params.push(value);
    let decl = ctx.end_node(open, NodeKind::ImmutableDeclaration);

    assert_eq!(decl.text(), "const answer: i32 = 42");
    assert_eq!(decl.value, "answer");
    assert_eq!(decl.type_annotation.as_deref(), Some("i32"));
    assert_eq!(decl.params[0].text(), "42");
    assert!(ctx.eat(&[";"]));
    assert!(ctx.token().is_none());
}

#[test]
fn source_text_is_stable_across_calls() {
    let mut ctx = context("return 1;");
    let open = ctx.start_node(None);
    ctx.next();
    ctx.next();
    let node = ctx.end_node(open, NodeKind::ReturnStatement);
    let first = node.text().to_string();
    assert_eq!(first, "return 1");
    for _ in 0..3 {
        assert_eq!(node.text(), first);
    }
}

#[test]
fn multi_line_nodes_slice_only_their_first_line() {
    let mut ctx = context("x = \"hello\"\n  + y");
    let open = ctx.start_node(None);
    while !ctx.at(&["y"]) {
        ctx.next();
    }
    let node = ctx.end_node(open, NodeKind::BinaryExpression);
    assert!(!node.range.is_single_line());
    assert_eq!(node.range.end.column, 4);
    assert_eq!(node.text(), "x = ");
}

#[test]
fn typed_constructors_reject_the_wrong_token() {
    let mut ctx = context("\"text\" 5");
    let err = ctx.identifier().unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::UnexpectedToken { found: Some(TokenKind::StringLiteral), .. }
    ));
    let literal = ctx.string_literal().unwrap();
    assert_eq!(literal.value, "\"text\"");
    assert_eq!(ctx.constant().unwrap().value, "5");
}

#[test]
fn nodes_serialize_with_their_range() {
    let mut ctx = context("x");
    let node = ctx.identifier().unwrap();
    let value = serde_json::to_value(&node).unwrap();
    assert_eq!(value["kind"], json!("Identifier"));
    assert_eq!(value["range"]["start"]["column"], json!(0));
    assert_eq!(value["range"]["start"]["line_text"], json!("x"));
    assert_eq!(value["type"], json!(null));
}
