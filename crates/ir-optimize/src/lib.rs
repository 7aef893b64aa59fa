// ir-optimize: optimizer steps over the block-structured IR
//
// Architecture:
// - passes: Focused steps that implement OptimizerStep
// - queries: Stateless checks over the IR
// - utils: Step interface, step registry and block-rewriting helpers

pub mod error;
pub mod passes;
pub mod queries;
pub mod utils;

// Re-export key types for convenience
pub use passes::*;
pub use queries::*;
pub use utils::*;
