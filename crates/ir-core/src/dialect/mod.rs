//! Builtin-function registry.
//!
//! A [`Dialect`] describes which functions are primitive to the target
//! machine and which of their argument slots must hold compile-time literals.

mod catalog;

pub use catalog::*;

use serde::{Deserialize, Serialize};

use crate::ast::LiteralKind;

/// Index of a builtin in its dialect's table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BuiltinHandle(pub usize);

impl BuiltinHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Identifies a `verbatim_<n>i_<m>o` function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VerbatimHandle {
    pub inputs: usize,
    pub outputs: usize,
}

impl VerbatimHandle {
    pub fn new(inputs: usize, outputs: usize) -> Self {
        Self { inputs, outputs }
    }

    pub fn name(&self) -> String {
        format!("verbatim_{}i_{}o", self.inputs, self.outputs)
    }

    pub fn parse(name: &str) -> Option<Self> {
        let rest = name.strip_prefix("verbatim_")?;
        let (inputs, outputs) = rest.strip_suffix('o')?.split_once("i_")?;
        let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        if !digits(inputs) || !digits(outputs) {
            return None;
        }
        Some(Self::new(inputs.parse().ok()?, outputs.parse().ok()?))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinFunction {
    pub name: &'static str,
    pub num_parameters: usize,
    pub num_returns: usize,
    /// Literal-only flags by argument position. Positions past the end of
    /// the table accept any expression.
    pub literal_arguments: &'static [Option<LiteralKind>],
}

impl BuiltinFunction {
    pub fn literal_argument(&self, index: usize) -> Option<LiteralKind> {
        self.literal_arguments.get(index).copied().flatten()
    }

    pub fn is_literal_argument(&self, index: usize) -> bool {
        self.literal_argument(index).is_some()
    }
}

/// A verbatim function takes its raw bytecode as a string literal; every
/// parameter is literal-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbatimFunction {
    pub name: String,
    pub stack_inputs: usize,
    pub num_returns: usize,
    pub num_parameters: usize,
    pub literal_arguments: Vec<Option<LiteralKind>>,
}

impl VerbatimFunction {
    pub fn from_handle(handle: VerbatimHandle) -> Self {
        Self {
            name: handle.name(),
            stack_inputs: handle.inputs,
            num_returns: handle.outputs,
            num_parameters: 1,
            literal_arguments: vec![Some(LiteralKind::String)],
        }
    }

    pub fn all_literal(&self) -> bool {
        self.literal_arguments.len() == self.num_parameters
            && self.literal_arguments.iter().all(Option::is_some)
    }
}

pub trait Dialect: Send + Sync {
    fn name(&self) -> &str;

    fn builtin(&self, handle: BuiltinHandle) -> Option<&BuiltinFunction>;

    fn find_builtin(&self, name: &str) -> Option<BuiltinHandle>;

    fn verbatim_function(&self, handle: VerbatimHandle) -> VerbatimFunction {
        VerbatimFunction::from_handle(handle)
    }

    fn find_verbatim(&self, name: &str) -> Option<VerbatimHandle> {
        VerbatimHandle::parse(name)
    }

    /// Names that user code and fresh variables must never take.
    fn is_reserved_name(&self, name: &str) -> bool {
        self.find_builtin(name).is_some() || self.find_verbatim(name).is_some()
    }
}
