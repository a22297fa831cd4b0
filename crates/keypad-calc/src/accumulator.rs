//! Expression accumulator
//!
//! Owns the in-progress expression and the evaluation-completed flag. Every
//! edit keeps the buffer non-empty and within the keypad alphabet
//! (`0-9 . + - * /`), with at most one `.` per number token.

use tracing::trace;

use crate::core::Operation;

/// Buffer contents after a clear
pub const EMPTY_BUFFER: &str = "0";

/// In-progress expression plus the evaluation-completed flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accumulator {
    buffer: String,
    just_evaluated: bool,
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Accumulator {
    /// Creates an accumulator holding `"0"`
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer: EMPTY_BUFFER.to_string(),
            just_evaluated: false,
        }
    }

    /// The live expression text
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// True right after an evaluation, until the next edit
    #[must_use]
    pub const fn just_evaluated(&self) -> bool {
        self.just_evaluated
    }

    /// Marks the buffer as evaluated
    pub fn mark_evaluated(&mut self) {
        self.just_evaluated = true;
    }

    /// Replaces the buffer with a previously computed result.
    ///
    /// Text outside the keypad alphabet (`Infinity`, exponents) is refused
    /// and the buffer is left as it was. The evaluation-completed flag is
    /// untouched.
    pub fn load_result(&mut self, text: &str) -> bool {
        let loadable = !text.is_empty()
            && text
                .chars()
                .all(|ch| is_number_char(ch) || Operation::is_operator_char(ch));
        if loadable {
            self.buffer = text.to_string();
            trace!(buffer = %self.buffer, "loaded result into buffer");
        }
        loadable
    }

    /// The number being typed: everything after the last operator
    #[must_use]
    pub fn current_number_token(&self) -> &str {
        match self.buffer.rfind(Operation::is_operator_char) {
            Some(idx) => &self.buffer[idx + 1..],
            None => &self.buffer,
        }
    }

    fn last_char(&self) -> Option<char> {
        self.buffer.chars().last()
    }

    fn ends_with_operator(&self) -> bool {
        self.last_char().is_some_and(Operation::is_operator_char)
    }

    fn reset_buffer(&mut self) {
        self.buffer.clear();
        self.buffer.push_str(EMPTY_BUFFER);
    }

    /// Appends a digit; a fresh expression starts after an evaluation.
    ///
    /// Non-digit characters are ignored.
    pub fn append_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() {
            return;
        }

        if self.just_evaluated {
            self.buffer = digit.to_string();
            self.just_evaluated = false;
        } else if self.buffer == EMPTY_BUFFER {
            self.buffer = digit.to_string();
        } else {
            self.buffer.push(digit);
        }
        trace!(buffer = %self.buffer, "digit");
    }

    /// Appends a decimal point unless the current number already has one
    pub fn append_dot(&mut self) {
        if self.current_number_token().contains('.') {
            return;
        }

        if self.just_evaluated {
            self.buffer = "0.".to_string();
            self.just_evaluated = false;
        } else if self.buffer == EMPTY_BUFFER {
            self.buffer.push('.');
        } else if self.ends_with_operator() {
            self.buffer.push_str("0.");
        } else {
            self.buffer.push('.');
        }
        trace!(buffer = %self.buffer, "dot");
    }

    /// Appends an operator, replacing a trailing one
    pub fn append_operator(&mut self, op: Operation) {
        self.just_evaluated = false;

        if self.ends_with_operator() {
            self.buffer.pop();
        }
        self.buffer.push(op.symbol());
        trace!(buffer = %self.buffer, "operator");
    }

    /// Removes the last character, never leaving a lone operator behind
    pub fn backspace(&mut self) {
        self.just_evaluated = false;

        if self.buffer.chars().count() <= 1 {
            self.reset_buffer();
        } else {
            self.buffer.pop();
            let dangling = self.last_char().is_some_and(|ch| !is_number_char(ch));
            let has_digits = self.buffer.chars().any(|ch| ch.is_ascii_digit());
            if dangling && !has_digits {
                self.reset_buffer();
            }
        }
        trace!(buffer = %self.buffer, "backspace");
    }

    /// Resets to `"0"` and clears the evaluation-completed flag
    pub fn clear(&mut self) {
        self.reset_buffer();
        self.just_evaluated = false;
    }
}

fn is_number_char(ch: char) -> bool {
    ch.is_ascii_digit() || ch == '.'
}
