//! Arithmetic core: operators, parsing, evaluation and input sanitization
//!
//! Nothing in here knows about the keypad. The accumulator hands a buffer
//! over, [`sanitize`] normalizes it, and [`Evaluator::evaluate_str`] turns it
//! into a number.
//!
//! [`Evaluator::evaluate_str`]: evaluator::Evaluator::evaluate_str

pub mod evaluator;
mod operations;
pub mod parser;
mod sanitize;

pub use operations::Operation;
pub use sanitize::{is_allowed_char, sanitize};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Evaluation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Nothing left to evaluate
    #[error("Empty expression")]
    EmptyExpression,
    /// Malformed arithmetic
    #[error("Invalid expression: {0}")]
    ParseError(String),
}

impl CalcError {
    /// Creates a parse error
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::ParseError(message.into())
    }
}
