//! Keypad calculator controller
//!
//! [`KeypadCalculator`] owns all interactive state: the accumulator, the
//! display surface, the transient timers and the configuration. Every input
//! goes through [`KeypadCalculator::dispatch_token`], which first applies any
//! expired timers so stale clears never overwrite newer state.

use tracing::debug;

use crate::accumulator::Accumulator;
use crate::config::{CalculatorConfig, ResultMessage};
use crate::core::evaluator::Evaluator;
use crate::core::{sanitize, CalcResult, Operation};
use crate::display::{format_number, DisplayState};
use crate::input::{InputToken, KeyResponse};
use crate::timer::{Clock, SystemClock, TimerKind, TransientTimers};

/// What a dispatched input did
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    /// Token not recognized; nothing changed
    Ignored,
    /// The buffer was edited (or left as is by a guarded edit)
    Edited,
    /// Evaluate was requested but nothing survived sanitization
    NothingToEvaluate,
    /// An evaluation ran
    Evaluated(CalcResult<f64>),
}

impl DispatchOutcome {
    /// True unless the token was ignored
    #[must_use]
    pub const fn is_handled(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// The calculator as seen by a UI controller
#[derive(Debug)]
pub struct KeypadCalculator<C: Clock = SystemClock> {
    accumulator: Accumulator,
    display: DisplayState,
    timers: TransientTimers,
    evaluator: Evaluator,
    config: CalculatorConfig,
    clock: C,
}

impl Default for KeypadCalculator<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl KeypadCalculator<SystemClock> {
    /// Creates a calculator with default configuration and the system clock
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    /// Creates a calculator with the system clock
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self::with_clock(config, SystemClock::new())
    }
}

impl<C: Clock> KeypadCalculator<C> {
    /// Creates a calculator driven by `clock`
    #[must_use]
    pub fn with_clock(config: CalculatorConfig, clock: C) -> Self {
        Self {
            accumulator: Accumulator::new(),
            display: DisplayState::new(),
            timers: TransientTimers::new(),
            evaluator: Evaluator::new(),
            config,
            clock,
        }
    }

    // ===== Accessors =====

    /// Current display surface
    #[must_use]
    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    /// Live expression buffer
    #[must_use]
    pub fn expression(&self) -> &str {
        self.accumulator.buffer()
    }

    /// Transient result text (empty when hidden)
    #[must_use]
    pub fn result(&self) -> &str {
        &self.display.result
    }

    /// Whether the easter indicator is visible
    #[must_use]
    pub fn easter_visible(&self) -> bool {
        self.display.easter_visible
    }

    /// True right after an evaluation
    #[must_use]
    pub fn just_evaluated(&self) -> bool {
        self.accumulator.just_evaluated()
    }

    /// Pending transient timers
    #[must_use]
    pub fn timers(&self) -> &TransientTimers {
        &self.timers
    }

    /// Active configuration
    #[must_use]
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// The driving clock
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    // ===== Dispatch =====

    /// Dispatches a symbolic token (`"7"`, `"+"`, `"="`, `"clear"`, ...).
    /// Unrecognized tokens are ignored.
    pub fn dispatch(&mut self, token: &str) -> DispatchOutcome {
        match InputToken::parse(token) {
            Some(input) => self.dispatch_token(input),
            None => {
                debug!(token, "ignored unrecognized token");
                DispatchOutcome::Ignored
            }
        }
    }

    /// Handles a physical key press and reports whether to suppress the
    /// platform default
    pub fn handle_key(&mut self, key: &str) -> KeyResponse {
        match InputToken::from_key(key) {
            Some(input) => {
                self.dispatch_token(input);
                KeyResponse::HANDLED
            }
            None => KeyResponse::IGNORED,
        }
    }

    /// Dispatches a parsed token
    pub fn dispatch_token(&mut self, input: InputToken) -> DispatchOutcome {
        self.tick();
        debug!(token = %input, "dispatch");

        match input {
            InputToken::Clear => {
                self.clear();
                DispatchOutcome::Edited
            }
            InputToken::Backspace => {
                self.backspace();
                DispatchOutcome::Edited
            }
            InputToken::Evaluate => match self.evaluate() {
                Some(outcome) => DispatchOutcome::Evaluated(outcome),
                None => DispatchOutcome::NothingToEvaluate,
            },
            InputToken::Dot => {
                self.append_dot();
                DispatchOutcome::Edited
            }
            InputToken::Operator(op) => {
                self.append_operator(op);
                DispatchOutcome::Edited
            }
            InputToken::Digit(d) => {
                self.append_digit(d);
                DispatchOutcome::Edited
            }
        }
    }

    // ===== Operations =====

    /// Appends a digit
    pub fn append_digit(&mut self, digit: char) {
        self.accumulator.append_digit(digit);
        self.refresh_display();
    }

    /// Appends a decimal point (guarded to one per number)
    pub fn append_dot(&mut self) {
        self.accumulator.append_dot();
        self.refresh_display();
    }

    /// Appends or replaces the trailing operator
    pub fn append_operator(&mut self, op: Operation) {
        self.accumulator.append_operator(op);
        self.refresh_display();
    }

    /// Deletes backward
    pub fn backspace(&mut self) {
        self.accumulator.backspace();
        self.refresh_display();
    }

    /// Resets the buffer, result line and evaluation flag
    pub fn clear(&mut self) {
        self.accumulator.clear();
        self.display.result.clear();
        self.timers.cancel(TimerKind::ResultClear);
        self.refresh_display();
    }

    /// Sanitizes and evaluates the buffer.
    ///
    /// Returns `None` when nothing is left after sanitization; in that case
    /// no result is shown and no timer is scheduled.
    pub fn evaluate(&mut self) -> Option<CalcResult<f64>> {
        let sanitized = sanitize(self.accumulator.buffer());
        if sanitized.is_empty() {
            debug!(buffer = self.accumulator.buffer(), "nothing to evaluate");
            return None;
        }

        let outcome = self.evaluator.evaluate_str(&sanitized);
        match &outcome {
            Ok(value) => {
                debug!(expression = %sanitized, value, "evaluated");
                self.accumulator.mark_evaluated();
                if self.config.chain_from_result && value.is_finite() {
                    // shortest round-trip decimal; never an exponent
                    self.accumulator.load_result(&value.to_string());
                }
            }
            Err(error) => debug!(expression = %sanitized, %error, "evaluation failed"),
        }

        self.display.result = self.result_text(&outcome);
        self.show_transients();
        self.refresh_display();
        Some(outcome)
    }

    /// Applies expired timers. Returns the kinds that fired.
    pub fn tick(&mut self) -> Vec<TimerKind> {
        let fired = self.timers.take_due(self.clock.now_ms());
        for kind in &fired {
            match kind {
                TimerKind::ResultClear => self.display.result.clear(),
                TimerKind::EasterHide => self.display.easter_visible = false,
            }
        }
        fired
    }

    fn result_text(&self, outcome: &CalcResult<f64>) -> String {
        match (&self.config.result_message, outcome) {
            (ResultMessage::Fixed { text }, _) => text.clone(),
            (ResultMessage::Computed, Ok(value)) => format_number(*value),
            (ResultMessage::Computed, Err(_)) => self.config.failure_text.clone(),
        }
    }

    fn show_transients(&mut self) {
        let now = self.clock.now_ms();
        self.timers.schedule(
            TimerKind::ResultClear,
            now.saturating_add(self.config.result_timeout_ms),
        );

        if self.config.easter_enabled {
            self.display.easter_visible = true;
            self.timers.schedule(
                TimerKind::EasterHide,
                now.saturating_add(self.config.easter_timeout_ms),
            );
        }
    }

    fn refresh_display(&mut self) {
        self.display.expression.clear();
        self.display.expression.push_str(self.accumulator.buffer());
    }
}
