use ir_core::ast::{FunctionCall, FunctionName};
use ir_core::error::Result;
use ir_core::Dialect;

use crate::error::codes;
use crate::{opt_bail, opt_ensure};

/// How the splitter may treat one argument slot of a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentClass {
    /// Must stay the literal it is; never replaced by a variable.
    LiteralOnly,
    Outlinable,
}

/// Decides per argument position whether a call's argument may be outlined,
/// based on the callee's entry in the dialect.
pub struct ArgumentClassifier<'a> {
    dialect: &'a dyn Dialect,
}

impl<'a> ArgumentClassifier<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self { dialect }
    }

    /// One class per argument of `call`, in argument order.
    pub fn classify(&self, call: &FunctionCall) -> Result<Vec<ArgumentClass>> {
        let arity = call.arguments.len();
        match &call.function_name {
            FunctionName::Builtin(builtin) => {
                let Some(fun) = self.dialect.builtin(builtin.handle) else {
                    opt_bail!(
                        builtin.span,
                        codes::UNKNOWN_BUILTIN,
                        "builtin handle {} is not part of dialect `{}`",
                        builtin.handle.index(),
                        self.dialect.name()
                    );
                };
                opt_ensure!(
                    fun.num_parameters == arity,
                    call.span,
                    codes::BUILTIN_ARITY,
                    "builtin `{}` takes {} arguments but is called with {}",
                    fun.name,
                    fun.num_parameters,
                    arity
                );
                Ok((0..arity)
                    .map(|index| {
                        if fun.is_literal_argument(index) {
                            ArgumentClass::LiteralOnly
                        } else {
                            ArgumentClass::Outlinable
                        }
                    })
                    .collect())
            }
            FunctionName::Verbatim(verbatim) => {
                let fun = self.dialect.verbatim_function(verbatim.handle);
                opt_ensure!(
                    fun.all_literal(),
                    verbatim.span,
                    codes::VERBATIM_METADATA,
                    "`{}` declares parameters that are not literal-only",
                    fun.name
                );
                opt_ensure!(
                    fun.num_parameters == arity,
                    call.span,
                    codes::VERBATIM_ARITY,
                    "`{}` takes {} arguments but is called with {}",
                    fun.name,
                    fun.num_parameters,
                    arity
                );
                if let Some(arg) = call.arguments.iter().find(|arg| !arg.is_literal()) {
                    opt_bail!(
                        arg.span(),
                        codes::VERBATIM_NON_LITERAL,
                        "arguments of `{}` must be literals",
                        fun.name
                    );
                }
                Ok(vec![ArgumentClass::LiteralOnly; arity])
            }
            FunctionName::Identifier(_) => Ok(vec![ArgumentClass::Outlinable; arity]),
        }
    }
}
