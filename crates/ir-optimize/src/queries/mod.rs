// Queries - stateless operations for extracting information from the IR

pub mod split_form;

pub use split_form::*;
