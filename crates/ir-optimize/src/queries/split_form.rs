// Split-form queries - checks that a block is in the shape the expression
// splitter produces

use std::fmt::{Display, Formatter};

use ir_core::ast::{Block, Expression, FunctionCall, FunctionName, Statement};
use ir_core::error::Result;
use ir_core::span::Span;
use ir_core::Dialect;
use itertools::Itertools;

use crate::error::{codes, invariant_violation_at};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitFormViolation {
    /// A call used as an argument of another call.
    NestedCall { span: Span },
    /// A literal passed in a slot that is not literal-only.
    LiteralArgument { span: Span, index: usize },
    /// An `if` condition or `switch` expression that is not an identifier.
    ComplexCondition { span: Span },
}

impl SplitFormViolation {
    pub fn span(&self) -> Span {
        match self {
            Self::NestedCall { span }
            | Self::LiteralArgument { span, .. }
            | Self::ComplexCondition { span } => *span,
        }
    }
}

impl Display for SplitFormViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NestedCall { span } => write!(f, "nested call at {}", span),
            Self::LiteralArgument { span, index } => {
                write!(f, "literal in outlinable argument {} at {}", index, span)
            }
            Self::ComplexCondition { span } => write!(f, "non-identifier condition at {}", span),
        }
    }
}

/// All places in `block` that break the split form. Loop conditions and case
/// labels are not inspected.
pub fn split_form_violations(dialect: &dyn Dialect, block: &Block) -> Vec<SplitFormViolation> {
    let mut checker = SplitFormChecker {
        dialect,
        violations: Vec::new(),
    };
    checker.check_block(block);
    checker.violations
}

pub fn is_split_form(dialect: &dyn Dialect, block: &Block) -> bool {
    split_form_violations(dialect, block).is_empty()
}

/// Fails with every violation listed if `block` is not in split form.
pub fn ensure_split_form(dialect: &dyn Dialect, block: &Block) -> Result<()> {
    let violations = split_form_violations(dialect, block);
    match violations.first() {
        None => Ok(()),
        Some(first) => Err(invariant_violation_at(
            first.span(),
            codes::SPLIT_FORM,
            format!("block is not in split form: {}", violations.iter().join("; ")),
        )),
    }
}

struct SplitFormChecker<'a> {
    dialect: &'a dyn Dialect,
    violations: Vec<SplitFormViolation>,
}

impl SplitFormChecker<'_> {
    fn check_block(&mut self, block: &Block) {
        for stmt in &block.statements {
            self.check_statement(stmt);
        }
    }

    fn check_statement(&mut self, stmt: &Statement) {
        match stmt {
            Statement::ExpressionStatement(stmt) => self.check_top_level(&stmt.expression),
            Statement::Assignment(assign) => self.check_top_level(&assign.value),
            Statement::VariableDeclaration(decl) => {
                if let Some(value) = &decl.value {
                    self.check_top_level(value);
                }
            }
            Statement::FunctionDefinition(func) => self.check_block(&func.body),
            Statement::If(stmt) => {
                self.check_condition(&stmt.condition);
                self.check_block(&stmt.body);
            }
            Statement::Switch(switch) => {
                self.check_condition(&switch.expression);
                for case in &switch.cases {
                    self.check_block(&case.body);
                }
            }
            Statement::ForLoop(stmt) => {
                self.check_block(&stmt.pre);
                self.check_block(&stmt.post);
                self.check_block(&stmt.body);
            }
            Statement::Block(block) => self.check_block(block),
            Statement::Break(_) | Statement::Continue(_) | Statement::Leave(_) => {}
        }
    }

    fn check_condition(&mut self, expr: &Expression) {
        if !expr.is_identifier() {
            self.violations
                .push(SplitFormViolation::ComplexCondition { span: expr.span() });
        }
    }

    fn check_top_level(&mut self, expr: &Expression) {
        if let Expression::FunctionCall(call) = expr {
            self.check_arguments(call);
        }
    }

    fn check_arguments(&mut self, call: &FunctionCall) {
        for (index, arg) in call.arguments.iter().enumerate() {
            match arg {
                Expression::Identifier(_) => {}
                Expression::Literal(literal) => {
                    if !self.is_literal_slot(call, index) {
                        self.violations.push(SplitFormViolation::LiteralArgument {
                            span: literal.span,
                            index,
                        });
                    }
                }
                Expression::FunctionCall(nested) => {
                    self.violations
                        .push(SplitFormViolation::NestedCall { span: nested.span });
                    self.check_arguments(nested);
                }
            }
        }
    }

    fn is_literal_slot(&self, call: &FunctionCall, index: usize) -> bool {
        match &call.function_name {
            FunctionName::Builtin(builtin) => self
                .dialect
                .builtin(builtin.handle)
                .is_some_and(|fun| fun.is_literal_argument(index)),
            FunctionName::Verbatim(_) => true,
            FunctionName::Identifier(_) => false,
        }
    }
}
