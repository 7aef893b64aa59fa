#[macro_use]
pub mod macros;

pub mod ast;
pub mod config;
pub mod dialect;
pub mod dispenser;
pub mod error;
pub mod pretty;
pub mod span;

// Re-export commonly used items for convenience
pub use tracing;

pub use dialect::{Dialect, StackDialect};
pub use dispenser::NameDispenser;

// Alias for error types
pub type Error = crate::error::Error;
pub type Result<T> = crate::error::Result<T>;
