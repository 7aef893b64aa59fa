//! Splits nested expressions into a sequence of variable declarations.
//!
//! Every call argument that is not an identifier (and not a literal-only
//! slot) is replaced by a fresh variable declared right before the statement
//! that used it, so `let x := f(g(1), h(2))` becomes
//!
//! ```text
//! let _1 := 2
//! let _2 := h(_1)
//! let _3 := 1
//! let _4 := g(_3)
//! let x := f(_4, _2)
//! ```
//!
//! Arguments are outlined from last to first, matching the right-to-left
//! evaluation order of the target machine. Loop conditions and case labels
//! are never split: there is no statement slot to hoist into before a loop
//! condition is re-evaluated, and labels must stay constants.

mod classify;

pub use classify::*;

use ir_core::ast::{
    Block, Expression, FunctionCall, Identifier, Statement, VariableDeclaration,
};
use ir_core::error::Result;
use ir_core::NameDispenser;
use tracing::{debug, trace};

use crate::queries::ensure_split_form;
use crate::utils::{iterate_prefixing, OptimizerStep, OptimizerStepContext};

#[derive(Debug, Default, Clone, Copy)]
pub struct ExpressionSplitter;

impl ExpressionSplitter {
    pub const NAME: &'static str = "ExpressionSplitter";
    pub const ABBREVIATION: char = 'x';
}

impl OptimizerStep for ExpressionSplitter {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn abbreviation(&self) -> char {
        Self::ABBREVIATION
    }

    fn run(&self, ctx: &mut OptimizerStepContext<'_>, block: &mut Block) -> Result<()> {
        split_expressions(ctx, block)
    }

    fn verify(&self, ctx: &OptimizerStepContext<'_>, block: &Block) -> Result<()> {
        ensure_split_form(&*ctx.dialect, block)
    }
}

/// Normalizes `block` in place. Fails only on malformed IR (a verbatim call
/// with computed arguments, a builtin called with the wrong arity). On
/// failure `block` is left untouched.
pub fn split_expressions(ctx: &mut OptimizerStepContext<'_>, block: &mut Block) -> Result<()> {
    let mut splitter = Splitter {
        classifier: ArgumentClassifier::new(&*ctx.dialect),
        dispenser: &mut *ctx.dispenser,
        prefix: Vec::new(),
        outlined: 0,
    };
    // work on a copy; outlined names are only visible together with their
    // declarations
    let mut rewritten = block.clone();
    splitter.visit_block(&mut rewritten)?;
    *block = rewritten;
    debug!(
        statements = block.statements.len(),
        outlined = splitter.outlined,
        "split expressions"
    );
    Ok(())
}

struct Splitter<'a> {
    classifier: ArgumentClassifier<'a>,
    dispenser: &'a mut NameDispenser,
    /// Declarations hoisted out of the statement currently being visited.
    prefix: Vec<Statement>,
    outlined: usize,
}

impl Splitter<'_> {
    fn visit_block(&mut self, block: &mut Block) -> Result<()> {
        // A nested block gets its own frame; whatever the enclosing statement
        // has hoisted so far is restored once the block is done.
        let saved = std::mem::take(&mut self.prefix);
        iterate_prefixing(&mut block.statements, |stmt| -> Result<Vec<Statement>> {
            self.visit_statement(stmt)?;
            Ok(std::mem::take(&mut self.prefix))
        })?;
        self.prefix = saved;
        Ok(())
    }

    fn visit_statement(&mut self, stmt: &mut Statement) -> Result<()> {
        match stmt {
            Statement::ExpressionStatement(stmt) => self.visit_expression(&mut stmt.expression),
            Statement::Assignment(assign) => self.visit_expression(&mut assign.value),
            Statement::VariableDeclaration(decl) => match decl.value.as_mut() {
                Some(value) => self.visit_expression(value),
                None => Ok(()),
            },
            Statement::FunctionDefinition(func) => self.visit_block(&mut func.body),
            Statement::If(stmt) => {
                self.outline_expression(&mut stmt.condition)?;
                self.visit_block(&mut stmt.body)
            }
            Statement::Switch(switch) => {
                self.outline_expression(&mut switch.expression)?;
                // case labels are constants
                for case in &mut switch.cases {
                    self.visit_block(&mut case.body)?;
                }
                Ok(())
            }
            Statement::ForLoop(stmt) => {
                // the condition is left alone
                self.visit_block(&mut stmt.pre)?;
                self.visit_block(&mut stmt.post)?;
                self.visit_block(&mut stmt.body)
            }
            Statement::Block(block) => self.visit_block(block),
            Statement::Break(_) | Statement::Continue(_) | Statement::Leave(_) => Ok(()),
        }
    }

    /// Flattens the children of `expr` but keeps `expr` itself in place.
    fn visit_expression(&mut self, expr: &mut Expression) -> Result<()> {
        match expr {
            Expression::FunctionCall(call) => self.visit_call(call),
            Expression::Identifier(_) | Expression::Literal(_) => Ok(()),
        }
    }

    fn visit_call(&mut self, call: &mut FunctionCall) -> Result<()> {
        let classes = self.classifier.classify(call)?;
        for (arg, class) in call.arguments.iter_mut().zip(classes).rev() {
            if class == ArgumentClass::Outlinable {
                self.outline_expression(arg)?;
            }
        }
        Ok(())
    }

    /// Replaces `expr` with a fresh variable declared in the current prefix,
    /// after flattening its own children.
    fn outline_expression(&mut self, expr: &mut Expression) -> Result<()> {
        if expr.is_identifier() {
            return Ok(());
        }

        self.visit_expression(expr)?;

        let span = expr.span();
        let name = self.dispenser.new_name(None);
        trace!(name = %name, %span, "outlining expression");
        let value = std::mem::replace(expr, Identifier::with_span(span, name.clone()).into());
        self.prefix
            .push(VariableDeclaration::single(span, name, value).into());
        self.outlined += 1;
        Ok(())
    }
}
