// Passes - focused optimizer steps that implement OptimizerStep

pub mod expression_splitter;

pub use expression_splitter::*;
