use std::collections::HashMap;
use std::sync::LazyLock;

use super::{BuiltinFunction, BuiltinHandle, Dialect};
use crate::ast::LiteralKind;

const STRING_ARG: &[Option<LiteralKind>] = &[Some(LiteralKind::String)];
const NUMBER_ARG: &[Option<LiteralKind>] = &[Some(LiteralKind::Number)];
const SETIMMUTABLE_ARGS: &[Option<LiteralKind>] = &[None, Some(LiteralKind::String), None];

const fn op(name: &'static str, num_parameters: usize, num_returns: usize) -> BuiltinFunction {
    BuiltinFunction {
        name,
        num_parameters,
        num_returns,
        literal_arguments: &[],
    }
}

const fn literal_op(
    name: &'static str,
    num_parameters: usize,
    num_returns: usize,
    literal_arguments: &'static [Option<LiteralKind>],
) -> BuiltinFunction {
    BuiltinFunction {
        name,
        num_parameters,
        num_returns,
        literal_arguments,
    }
}

const BUILTIN_SPECS: &[BuiltinFunction] = &[
    op("stop", 0, 0),
    op("add", 2, 1),
    op("sub", 2, 1),
    op("mul", 2, 1),
    op("div", 2, 1),
    op("sdiv", 2, 1),
    op("mod", 2, 1),
    op("exp", 2, 1),
    op("not", 1, 1),
    op("lt", 2, 1),
    op("gt", 2, 1),
    op("slt", 2, 1),
    op("sgt", 2, 1),
    op("eq", 2, 1),
    op("iszero", 1, 1),
    op("and", 2, 1),
    op("or", 2, 1),
    op("xor", 2, 1),
    op("shl", 2, 1),
    op("shr", 2, 1),
    op("sar", 2, 1),
    op("keccak256", 2, 1),
    op("pop", 1, 0),
    op("mload", 1, 1),
    op("mstore", 2, 0),
    op("mstore8", 2, 0),
    op("sload", 1, 1),
    op("sstore", 2, 0),
    op("calldataload", 1, 1),
    op("calldatasize", 0, 1),
    op("caller", 0, 1),
    op("callvalue", 0, 1),
    op("gas", 0, 1),
    op("call", 7, 1),
    op("return", 2, 0),
    op("revert", 2, 0),
    op("datacopy", 3, 0),
    literal_op("datasize", 1, 1, STRING_ARG),
    literal_op("dataoffset", 1, 1, STRING_ARG),
    literal_op("loadimmutable", 1, 1, STRING_ARG),
    literal_op("setimmutable", 3, 0, SETIMMUTABLE_ARGS),
    literal_op("linkersymbol", 1, 1, STRING_ARG),
    literal_op("memoryguard", 1, 1, NUMBER_ARG),
];

static LOOKUP_BY_NAME: LazyLock<HashMap<&'static str, BuiltinHandle>> = LazyLock::new(|| {
    BUILTIN_SPECS
        .iter()
        .enumerate()
        .map(|(index, spec)| (spec.name, BuiltinHandle(index)))
        .collect()
});

pub fn all_builtins() -> &'static [BuiltinFunction] {
    BUILTIN_SPECS
}

/// Stack-machine dialect backed by a static builtin table.
#[derive(Debug, Default, Clone, Copy)]
pub struct StackDialect;

impl Dialect for StackDialect {
    fn name(&self) -> &str {
        "stack"
    }

    fn builtin(&self, handle: BuiltinHandle) -> Option<&BuiltinFunction> {
        BUILTIN_SPECS.get(handle.index())
    }

    fn find_builtin(&self, name: &str) -> Option<BuiltinHandle> {
        LOOKUP_BY_NAME.get(name).copied()
    }
}
