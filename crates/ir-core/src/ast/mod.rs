//! The block-structured IR rewritten by the optimizer.
//!
//! Statements and expressions are closed sum types; passes match on them
//! exhaustively and mutate trees in place.

mod expr;
mod name;
mod names;
mod pretty;
mod stmt;

pub use expr::*;
pub use name::*;
pub use names::*;
pub use stmt::*;
