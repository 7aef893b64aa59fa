// OptimizerStep trait - interface for optimizer steps

use std::sync::Arc;

use ir_core::ast::Block;
use ir_core::error::Result;
use ir_core::{Dialect, NameDispenser};

/// What every step gets besides the block: the compilation unit's name
/// dispenser and the dialect it reserves names for.
pub struct OptimizerStepContext<'a> {
    pub dialect: Arc<dyn Dialect>,
    pub dispenser: &'a mut NameDispenser,
}

impl<'a> OptimizerStepContext<'a> {
    /// The step dialect is always the dispenser's own.
    pub fn new(dispenser: &'a mut NameDispenser) -> Self {
        Self {
            dialect: Arc::clone(dispenser.dialect()),
            dispenser,
        }
    }
}

#[allow(unused_variables)]
pub trait OptimizerStep {
    fn name(&self) -> &str;

    /// Single-letter code used in step sequences.
    fn abbreviation(&self) -> char;

    /// Rewrites `block` in place.
    fn run(&self, ctx: &mut OptimizerStepContext<'_>, block: &mut Block) -> Result<()>;

    /// Checks the shape `run` promises to leave behind.
    fn verify(&self, ctx: &OptimizerStepContext<'_>, block: &Block) -> Result<()> {
        Ok(())
    }
}
