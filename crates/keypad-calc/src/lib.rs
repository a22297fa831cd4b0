//! Keypad Calculator - expression accumulator and evaluator
//!
//! This crate holds the logic behind a single-screen keypad calculator: an
//! expression buffer edited one keystroke at a time, a sanitize step that
//! drops trailing junk, a two-level precedence evaluator with IEEE division,
//! and transient result and easter displays that expire on their own.
//!
//! # Example
//!
//! ```rust
//! use keypad_calc::prelude::*;
//!
//! let mut calc = KeypadCalculator::with_clock(CalculatorConfig::default(), ManualClock::new());
//! for token in ["1", "2", "+", "3", "*"] {
//!     calc.dispatch(token);
//! }
//! assert_eq!(calc.expression(), "12+3*");
//!
//! // The dangling operator is sanitized away before evaluation
//! assert_eq!(calc.dispatch("="), DispatchOutcome::Evaluated(Ok(15.0)));
//! assert_eq!(calc.result(), "15");
//!
//! // Division by zero follows IEEE rules
//! assert_eq!(Evaluator::new().evaluate_str("1/0"), Ok(f64::INFINITY));
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod accumulator;
pub mod calculator;
pub mod config;
pub mod core;
pub mod display;
pub mod input;
pub mod timer;

/// Browser frontend - always available for testing
/// (Mock DOM allows testing without actual browser bindings)
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::accumulator::{Accumulator, EMPTY_BUFFER};
    pub use crate::calculator::{DispatchOutcome, KeypadCalculator};
    pub use crate::config::{CalculatorConfig, ConfigError, ResultMessage};
    pub use crate::core::evaluator::Evaluator;
    pub use crate::core::parser::{AstNode, Parser, Token, Tokenizer};
    pub use crate::core::{sanitize, CalcError, CalcResult, Operation};
    pub use crate::display::{format_number, DisplayState};
    pub use crate::input::{InputToken, KeyResponse};
    pub use crate::timer::{Clock, ManualClock, SystemClock, TimerKind, TransientTimers};
    pub use crate::wasm::{DomElement, DomEvent, MockDom, WasmDriver};
}
