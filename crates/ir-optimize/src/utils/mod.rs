// Utils - shared utilities and helper components

pub mod iterate;
pub mod optimize_pass;
pub mod optimizer;

pub use iterate::*;
pub use optimize_pass::*;
pub use optimizer::*;
