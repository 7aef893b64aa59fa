use ir_core::error::{Error, InvariantViolation};
use ir_core::span::Span;

/// Error codes attached to invariant violations raised by optimizer steps.
pub mod codes {
    pub const UNKNOWN_BUILTIN: &str = "unknown-builtin";
    pub const BUILTIN_ARITY: &str = "builtin-arity";
    pub const VERBATIM_METADATA: &str = "verbatim-metadata";
    pub const VERBATIM_ARITY: &str = "verbatim-arity";
    pub const VERBATIM_NON_LITERAL: &str = "verbatim-non-literal";
    pub const SPLIT_FORM: &str = "split-form";
}

/// Create an invariant violation with an error code at a specific span
pub fn invariant_violation_at(
    span: Span,
    code: impl Into<String>,
    message: impl Into<String>,
) -> Error {
    Error::InvariantViolation(span, InvariantViolation::new(message).with_code(code))
}

// Convenience macros for generating invariant violations

/// Macro to return early with an invariant violation
#[macro_export]
macro_rules! opt_bail {
    ($span:expr, $code:expr, $($arg:tt)+) => {
        return Err($crate::error::invariant_violation_at($span, $code, format!($($arg)+)))
    };
}

/// Macro to ensure a condition is true, or return an invariant violation
#[macro_export]
macro_rules! opt_ensure {
    ($cond:expr, $span:expr, $code:expr, $($arg:tt)+) => {
        if !($cond) {
            $crate::opt_bail!($span, $code, $($arg)+);
        }
    };
}
