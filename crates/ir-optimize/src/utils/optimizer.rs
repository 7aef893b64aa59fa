use ir_core::ast::Block;
use ir_core::config;
use ir_core::error::{Error, Result};
use tracing::debug;

use crate::passes::ExpressionSplitter;
use crate::utils::{OptimizerStep, OptimizerStepContext};

pub fn load_steps() -> Vec<Box<dyn OptimizerStep>> {
    vec![Box::new(ExpressionSplitter)]
}

pub fn find_step(abbreviation: char) -> Option<Box<dyn OptimizerStep>> {
    load_steps()
        .into_iter()
        .find(|step| step.abbreviation() == abbreviation)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OptimizerSettings {
    /// Run each step's `verify` after it finishes.
    pub verify_steps: bool,
}

impl OptimizerSettings {
    pub fn from_env() -> Self {
        Self {
            verify_steps: config::verify_mode(),
        }
    }
}

/// Runs the steps named by `sequence` (one abbreviation per step, whitespace
/// ignored) with settings taken from the environment.
pub fn run_sequence(
    sequence: &str,
    ctx: &mut OptimizerStepContext<'_>,
    block: &mut Block,
) -> Result<()> {
    run_sequence_with(OptimizerSettings::from_env(), sequence, ctx, block)
}

pub fn run_sequence_with(
    settings: OptimizerSettings,
    sequence: &str,
    ctx: &mut OptimizerStepContext<'_>,
    block: &mut Block,
) -> Result<()> {
    let steps = parse_sequence(sequence)?;
    for step in steps {
        debug!(step = step.name(), "running optimizer step");
        step.run(ctx, block)?;
        if settings.verify_steps {
            step.verify(ctx, block)?;
        }
    }
    Ok(())
}

fn parse_sequence(sequence: &str) -> Result<Vec<Box<dyn OptimizerStep>>> {
    sequence
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .map(|abbreviation| find_step(abbreviation).ok_or(Error::UnknownStep(abbreviation)))
        .collect()
}
