// IR construction, structural equality and serialization

use ir_core::ast::*;
use ir_core::span::Span;
use pretty_assertions::assert_eq;

#[test]
fn test_expression_conversions() {
    let expr: Expression = Literal::number(42).into();
    assert!(expr.is_literal());
    let expr: Expression = Identifier::new("x").into();
    assert!(expr.is_identifier());
    let call = Expression::call(FunctionName::user("f"), vec![Expression::ident("x")]);
    assert_eq!(call.as_call().map(|call| call.arguments.len()), Some(1));
}

#[test]
fn test_declaration_carries_span_onto_binding() {
    let span = Span::new(3, 10, 20);
    let decl = VariableDeclaration::single(span, "v", Expression::ident("x"));
    assert_eq!(decl.span, span);
    assert_eq!(decl.variables[0].span, span);
    assert_eq!(Statement::from(decl).span(), span);
}

#[test]
fn test_structural_equality_includes_spans() {
    let a = Block::new(vec![Statement::declare("x", Literal::number(1))]);
    let mut b = a.clone();
    assert_eq!(a, b);
    if let Statement::VariableDeclaration(decl) = &mut b.statements[0] {
        decl.span = Span::new(0, 1, 2);
    }
    assert_ne!(a, b);
}

#[test]
fn test_serialized_ir_keeps_spans() {
    let span = Span::new(1, 4, 9);
    let block = Block::new(vec![Statement::expr(
        FunctionCall::new(FunctionName::user("f"), vec![Literal::string("hi").into()])
            .with_span(span),
    )]);
    let json = serde_json::to_value(&block).expect("serialize");
    let call = &json["statements"][0]["ExpressionStatement"]["expression"]["FunctionCall"];
    assert_eq!(call["span"]["lo"], 4);
    assert_eq!(call["arguments"][0]["Literal"]["value"], "hi");

    let back: Block = serde_json::from_value(json).expect("deserialize");
    assert_eq!(back, block);
}
