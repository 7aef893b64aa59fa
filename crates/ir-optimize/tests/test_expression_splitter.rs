// ExpressionSplitter behaviour: outlining order, literal-only slots, control
// flow placement and malformed input

mod support;

use ir_core::ast::*;
use ir_core::dialect::BuiltinHandle;
use ir_core::span::Span;
use ir_optimize::error::codes;
use pretty_assertions::assert_eq;
use support::assertions::{assert_prints, assert_split_form};
use support::ast::*;

#[test]
fn test_split_nested_user_calls_right_to_left() {
    let block = split_block(Block::new(vec![Statement::declare(
        "x",
        call("f", vec![call("g", vec![num(1)]), call("h", vec![num(2)])]),
    )]));

    assert_prints(
        &block,
        "\
{
    let _1 := 2
    let _2 := h(_1)
    let _3 := 1
    let _4 := g(_3)
    let x := f(_4, _2)
}
",
    );
    assert_split_form(&block);
}

#[test]
fn test_arguments_are_evaluated_last_to_first() {
    let block = split_block(Block::new(vec![Statement::expr(call(
        "f",
        vec![call("a", vec![]), call("b", vec![]), call("c", vec![])],
    ))]));

    assert_prints(
        &block,
        "\
{
    let _1 := c()
    let _2 := b()
    let _3 := a()
    f(_3, _2, _1)
}
",
    );
}

#[test]
fn test_verbatim_call_is_left_alone() {
    let original = Block::new(vec![Statement::expr(verbatim(1, 0, vec![string("\u{0}")]))]);
    let block = split_block(original.clone());

    assert_eq!(block, original);
    assert_prints(
        &block,
        "\
{
    verbatim_1i_0o(\"\\x00\")
}
",
    );
}

#[test]
fn test_if_condition_is_hoisted_before_if() {
    let block = split_block(Block::new(vec![If::new(
        call("f", vec![ident("a"), ident("b")]),
        Block::new(vec![Statement::expr(call("g", vec![call("k", vec![ident("b")])]))]),
    )
    .into()]));

    assert_prints(
        &block,
        "\
{
    let _1 := f(a, b)
    if _1 {
        let _2 := k(b)
        g(_2)
    }
}
",
    );
    assert_split_form(&block);
}

#[test]
fn test_literal_condition_is_outlined() {
    let block = split_block(Block::new(vec![If::new(num(1), Block::empty()).into()]));

    assert_prints(
        &block,
        "\
{
    let _1 := 1
    if _1 { }
}
",
    );
}

#[test]
fn test_identifier_arguments_stay_in_place() {
    let original = Block::new(vec![
        Statement::expr(call("f", vec![ident("a"), ident("b")])),
        Statement::declare("x", call("g", vec![])),
        Statement::declare("y", num(7)),
        VariableDeclaration::new(vec![Binding::new("z")], None).into(),
    ]);
    let block = split_block(original.clone());
    assert_eq!(block, original);
}

#[test]
fn test_literal_only_builtin_slots_are_preserved() {
    let block = split_block(Block::new(vec![
        Statement::declare("s", builtin("datasize", vec![string("runtime")])),
        Statement::expr(builtin(
            "setimmutable",
            vec![num(0), string("owner"), builtin("add", vec![num(1), num(2)])],
        )),
        Statement::declare("y", builtin("add", vec![builtin("datasize", vec![string("A")]), num(1)])),
    ]));

    assert_prints(
        &block,
        "\
{
    let s := datasize(\"runtime\")
    let _1 := 2
    let _2 := 1
    let _3 := add(_2, _1)
    let _4 := 0
    setimmutable(_4, \"owner\", _3)
    let _5 := 1
    let _6 := datasize(\"A\")
    let y := add(_6, _5)
}
",
    );
    assert_split_form(&block);
}

#[test]
fn test_switch_discriminant_split_and_labels_untouched() {
    let original = Block::new(vec![Switch::new(
        builtin("mload", vec![num(0)]),
        vec![
            Case::new(
                Literal::number(1),
                Block::new(vec![Statement::expr(builtin(
                    "sstore",
                    vec![num(0), builtin("add", vec![num(1), num(2)])],
                ))]),
            ),
            Case::default_case(Block::empty()),
        ],
    )
    .into()]);
    let block = split_block(original.clone());

    assert_prints(
        &block,
        "\
{
    let _1 := 0
    let _2 := mload(_1)
    switch _2
    case 1 {
        let _3 := 2
        let _4 := 1
        let _5 := add(_4, _3)
        let _6 := 0
        sstore(_6, _5)
    }
    default { }
}
",
    );

    let labels = |block: &Block| match block.statements.last() {
        Some(Statement::Switch(switch)) => switch
            .cases
            .iter()
            .map(|case| case.value.clone())
            .collect::<Vec<_>>(),
        other => panic!("expected switch, got {other:?}"),
    };
    assert_eq!(labels(&block), labels(&original));
}

#[test]
fn test_for_loop_condition_untouched() {
    let condition = builtin("lt", vec![ident("i"), builtin("add", vec![ident("n"), num(1)])]);
    let block = split_block(Block::new(vec![ForLoop::new(
        Block::new(vec![Statement::declare("i", num(0))]),
        condition.clone(),
        Block::new(vec![Assignment::new(
            vec![Identifier::new("i")],
            builtin("add", vec![ident("i"), builtin("mul", vec![num(2), num(1)])]),
        )
        .into()]),
        Block::new(vec![
            Statement::expr(call("g", vec![call("f", vec![ident("i")])])),
            Statement::Continue(Continue { span: Span::null() }),
        ]),
    )
    .into()]));

    assert_prints(
        &block,
        "\
{
    for {
        let i := 0
    } lt(i, add(n, 1)) {
        let _1 := 1
        let _2 := 2
        let _3 := mul(_2, _1)
        i := add(i, _3)
    } {
        let _4 := f(i)
        g(_4)
        continue
    }
}
",
    );
    match &block.statements[0] {
        Statement::ForLoop(for_loop) => assert_eq!(for_loop.condition, condition),
        other => panic!("expected for loop, got {other:?}"),
    }
    assert_split_form(&block);
}

#[test]
fn test_function_body_hoists_stay_inside_function() {
    let block = split_block(Block::new(vec![
        FunctionDefinition::new(
            "fun",
            vec![Binding::new("a")],
            vec![Binding::new("r")],
            Block::new(vec![
                Assignment::new(
                    vec![Identifier::new("r")],
                    builtin("add", vec![builtin("mul", vec![ident("a"), ident("a")]), num(1)]),
                )
                .into(),
                Statement::Leave(Leave { span: Span::null() }),
            ]),
        )
        .into(),
        Statement::declare("v", call("fun", vec![num(3)])),
    ]));

    assert_prints(
        &block,
        "\
{
    function fun(a) -> r {
        let _1 := 1
        let _2 := mul(a, a)
        r := add(_2, _1)
        leave
    }
    let _3 := 3
    let v := fun(_3)
}
",
    );
}

#[test]
fn test_prefixes_do_not_leak_between_siblings_or_blocks() {
    let block = split_block(Block::new(vec![
        Statement::expr(call("a", vec![call("b", vec![])])),
        Statement::Block(Block::new(vec![Statement::expr(call(
            "c",
            vec![call("d", vec![])],
        ))])),
        Statement::expr(call("e", vec![ident("x")])),
        Statement::expr(call("f", vec![call("g", vec![])])),
    ]));

    assert_prints(
        &block,
        "\
{
    let _1 := b()
    a(_1)
    {
        let _2 := d()
        c(_2)
    }
    e(x)
    let _3 := g()
    f(_3)
}
",
    );
}

#[test]
fn test_deeply_nested_expression_is_flattened_bottom_up() {
    let block = split_block(Block::new(vec![Statement::expr(builtin(
        "sstore",
        vec![
            num(0),
            builtin(
                "add",
                vec![
                    builtin("mload", vec![builtin("add", vec![ident("p"), num(32)])]),
                    builtin("calldataload", vec![num(4)]),
                ],
            ),
        ],
    ))]));

    assert_prints(
        &block,
        "\
{
    let _1 := 4
    let _2 := calldataload(_1)
    let _3 := 32
    let _4 := add(p, _3)
    let _5 := mload(_4)
    let _6 := add(_5, _2)
    let _7 := 0
    sstore(_7, _6)
}
",
    );
    assert_split_form(&block);
}

#[test]
fn test_outlined_declarations_keep_source_spans() {
    let inner_span = Span::new(7, 12, 30);
    let inner = FunctionCall::new(FunctionName::user("g"), vec![ident("a")]).with_span(inner_span);
    let block = split_block(Block::new(vec![Statement::expr(call(
        "f",
        vec![inner.into()],
    ))]));

    let Statement::VariableDeclaration(decl) = &block.statements[0] else {
        panic!("expected hoisted declaration");
    };
    assert_eq!(decl.span, inner_span);
    assert_eq!(decl.variables[0].span, inner_span);
    assert_eq!(decl.value.as_ref().map(Expression::span), Some(inner_span));

    let Statement::ExpressionStatement(stmt) = &block.statements[1] else {
        panic!("expected the original call");
    };
    let call = stmt.expression.as_call().expect("call");
    match &call.arguments[0] {
        Expression::Identifier(ident) => {
            assert_eq!(ident.span, inner_span);
            assert_eq!(ident.name, decl.variables[0].name);
        }
        other => panic!("expected identifier, got {other:?}"),
    }
}

#[test]
fn test_fresh_names_avoid_existing_names() {
    let block = split_block(Block::new(vec![
        Statement::declare("_1", num(5)),
        Statement::expr(call("f", vec![call("g", vec![])])),
    ]));

    assert_prints(
        &block,
        "\
{
    let _1 := 5
    let _2 := g()
    f(_2)
}
",
    );
}

#[test]
fn test_splitting_twice_changes_nothing() {
    let once = split_block(Block::new(vec![
        Statement::declare(
            "x",
            call("f", vec![call("g", vec![num(1)]), builtin("datasize", vec![string("A")])]),
        ),
        If::new(
            builtin("iszero", vec![ident("x")]),
            Block::new(vec![Statement::expr(builtin(
                "revert",
                vec![num(0), num(0)],
            ))]),
        )
        .into(),
        ForLoop::new(
            Block::empty(),
            builtin("lt", vec![ident("x"), num(10)]),
            Block::empty(),
            Block::new(vec![Statement::expr(verbatim(0, 0, vec![string("ab")]))]),
        )
        .into(),
    ]));
    let twice = split_block(once.clone());

    assert_eq!(twice, once);
}

#[test]
fn test_empty_block_is_noop() {
    let block = split_block(Block::empty());
    assert!(block.is_empty());
}

#[test]
fn test_malformed_calls_abort() {
    let cases = [
        (
            Statement::expr(verbatim(1, 0, vec![ident("code")])),
            codes::VERBATIM_NON_LITERAL,
        ),
        (
            Statement::expr(verbatim(1, 0, vec![string("a"), string("b")])),
            codes::VERBATIM_ARITY,
        ),
        (
            Statement::expr(builtin("add", vec![num(1)])),
            codes::BUILTIN_ARITY,
        ),
        (
            Statement::expr(Expression::call(
                FunctionName::builtin(BuiltinHandle(usize::MAX)),
                vec![],
            )),
            codes::UNKNOWN_BUILTIN,
        ),
    ];

    for (stmt, code) in cases {
        // errors must propagate out of nested blocks
        let mut block = Block::new(vec![Statement::Block(Block::new(vec![stmt]))]);
        let err = split(&mut block).expect_err("malformed call must be rejected");
        assert_eq!(err.code(), Some(code), "{err}");
    }
}

#[test]
fn test_failed_split_leaves_block_untouched() {
    let original = Block::new(vec![
        Statement::expr(call("f", vec![call("g", vec![])])),
        If::new(
            ident("c"),
            Block::new(vec![
                Statement::declare("y", call("h", vec![num(7)])),
                Statement::expr(builtin("add", vec![num(1)])),
            ]),
        )
        .into(),
    ]);
    let mut block = original.clone();

    let err = split(&mut block).expect_err("arity mismatch");
    assert_eq!(err.code(), Some(codes::BUILTIN_ARITY), "{err}");
    assert_eq!(block, original);
}
