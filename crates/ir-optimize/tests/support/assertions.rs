use ir_core::ast::Block;
use ir_core::pretty::pretty_with_dialect;
use ir_core::StackDialect;
use ir_optimize::split_form_violations;

pub fn print(block: &Block) -> String {
    pretty_with_dialect(block, &StackDialect)
}

pub fn assert_prints(block: &Block, expected: &str) {
    pretty_assertions::assert_eq!(print(block), expected);
}

pub fn assert_split_form(block: &Block) {
    let violations = split_form_violations(&StackDialect, block);
    assert!(
        violations.is_empty(),
        "not in split form: {:?}\n{}",
        violations,
        print(block)
    );
}
