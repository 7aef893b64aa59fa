use std::sync::Arc;

use ir_core::ast::{Block, Expression, FunctionName, Literal};
use ir_core::dialect::VerbatimHandle;
use ir_core::error::Result;
use ir_core::{Dialect, NameDispenser, StackDialect};
use ir_optimize::{split_expressions, OptimizerStepContext};

pub fn dialect() -> Arc<StackDialect> {
    Arc::new(StackDialect)
}

pub fn num(value: u64) -> Expression {
    Literal::number(value).into()
}

pub fn string(value: &str) -> Expression {
    Literal::string(value).into()
}

pub fn ident(name: &str) -> Expression {
    Expression::ident(name)
}

pub fn call(name: &str, arguments: Vec<Expression>) -> Expression {
    Expression::call(FunctionName::user(name), arguments)
}

pub fn builtin(name: &str, arguments: Vec<Expression>) -> Expression {
    let handle = StackDialect
        .find_builtin(name)
        .unwrap_or_else(|| panic!("unknown builtin {name}"));
    Expression::call(FunctionName::builtin(handle), arguments)
}

pub fn verbatim(inputs: usize, outputs: usize, arguments: Vec<Expression>) -> Expression {
    Expression::call(
        FunctionName::verbatim(VerbatimHandle::new(inputs, outputs)),
        arguments,
    )
}

/// Runs the splitter on `block` with a dispenser seeded from `block` itself.
pub fn split(block: &mut Block) -> Result<()> {
    let mut dispenser = NameDispenser::from_block(dialect(), block);
    let mut ctx = OptimizerStepContext::new(&mut dispenser);
    split_expressions(&mut ctx, block)
}

pub fn split_block(mut block: Block) -> Block {
    split(&mut block).expect("split");
    block
}
