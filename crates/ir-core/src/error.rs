use crate::span::Span;
use std::fmt::{Display, Formatter};
use std::result;
use thiserror::Error;

/// A malformed-IR condition detected by a pass. Always a bug in an earlier
/// stage, never a user error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    pub message: String,
    pub code: Option<String>,
}

impl InvariantViolation {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

impl Display for InvariantViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(code) = &self.code {
            write!(f, " [{}]", code)?;
        }
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invariant violation at {0}: {1}")]
    InvariantViolation(Span, InvariantViolation),
    #[error("Unknown optimizer step: '{0}'")]
    UnknownStep(char),
    #[error("Generic error: {0}")]
    Generic(String),
}

impl Error {
    /// The error code of an invariant violation, if it carries one.
    pub fn code(&self) -> Option<&str> {
        match self {
            Error::InvariantViolation(_, violation) => violation.code.as_deref(),
            _ => None,
        }
    }
}

pub type Result<T> = result::Result<T, Error>;

// Convert from eyre::Report to our Error type
impl From<eyre::Report> for Error {
    fn from(err: eyre::Report) -> Self {
        Error::Generic(err.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Generic(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Generic(s.to_string())
    }
}
