//! Shared test fixtures for ir-optimize integration tests.
#![allow(dead_code)]

pub mod assertions;
pub mod ast;
