//! WASM Driver - the calculator wired to a mock DOM
//!
//! Plays the role of the page script: delegates clicks to the nearest
//! keypad button, maps key presses, and mirrors calculator state into the
//! DOM after every event.

use tracing::trace;

use super::dom::{DomElement, DomEvent, MockDom, DATA_KEY, VISIBLE_CLASS};
use super::keypad::{Keypad, MockDomKeypadExt};
use crate::calculator::{DispatchOutcome, KeypadCalculator};
use crate::config::CalculatorConfig;
use crate::input::{InputToken, KeyResponse};
use crate::timer::{Clock, ManualClock, TimerKind};

/// Calculator plus mock DOM
#[derive(Debug)]
pub struct WasmDriver<C: Clock = ManualClock> {
    calculator: KeypadCalculator<C>,
    dom: MockDom,
    keypad: Keypad,
}

impl Default for WasmDriver<ManualClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmDriver<ManualClock> {
    /// Creates a driver with default configuration on a manual clock at zero
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    /// Creates a driver on a manual clock at zero
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self::with_calculator(KeypadCalculator::with_clock(config, ManualClock::new()))
    }

    /// Advances the manual clock and applies expired timers
    pub fn advance(&mut self, ms: u64) -> Vec<TimerKind> {
        self.calculator.clock().advance(ms);
        self.tick()
    }
}

impl<C: Clock> WasmDriver<C> {
    /// Wraps an existing calculator in a fresh calculator page
    #[must_use]
    pub fn with_calculator(calculator: KeypadCalculator<C>) -> Self {
        let keypad = Keypad::new();
        let mut dom = MockDom::calculator();
        dom.add_keypad(&keypad);
        let mut driver = Self {
            calculator,
            dom,
            keypad,
        };
        driver.sync_dom();
        driver
    }

    /// Returns a reference to the calculator
    #[must_use]
    pub fn calculator(&self) -> &KeypadCalculator<C> {
        &self.calculator
    }

    /// Returns a reference to the DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Returns a mutable reference to the DOM
    pub fn dom_mut(&mut self) -> &mut MockDom {
        &mut self.dom
    }

    /// Returns the mounted keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Simulates a click on any element. The nearest keypad button with a
    /// `data-key` decides the token; clicks elsewhere are ignored.
    pub fn click(&mut self, element_id: &str) -> DispatchOutcome {
        self.dom.record_event(DomEvent::click(element_id));

        let token = self
            .dom
            .closest(element_id, DomElement::is_key_button)
            .and_then(|button| button.get_attr(DATA_KEY))
            .map(str::to_string);

        let outcome = match token {
            Some(token) => self.calculator.dispatch(&token),
            None => {
                trace!(element_id, "click outside keypad");
                DispatchOutcome::Ignored
            }
        };
        self.sync_dom();
        outcome
    }

    /// Clicks the button carrying a dispatcher token. Tokens with no button
    /// are ignored without touching the DOM.
    pub fn click_token(&mut self, token: &str) -> DispatchOutcome {
        let id = InputToken::parse(token)
            .and_then(|t| self.keypad.find_button_by_token(t))
            .map(|btn| btn.id.clone());
        match id {
            Some(id) => self.click(&id),
            None => DispatchOutcome::Ignored,
        }
    }

    /// Clicks each button matching a dispatcher token, in order
    pub fn click_tokens(&mut self, tokens: &[&str]) {
        for token in tokens {
            self.click_token(token);
        }
    }

    /// Simulates a window key down
    pub fn press_key(&mut self, key: &str) -> KeyResponse {
        let response = self.calculator.handle_key(key);
        self.dom
            .record_event(DomEvent::key_down(key, response.prevent_default));
        self.sync_dom();
        response
    }

    /// Applies expired timers and refreshes the DOM
    pub fn tick(&mut self) -> Vec<TimerKind> {
        let fired = self.calculator.tick();
        if !fired.is_empty() {
            self.sync_dom();
        }
        fired
    }

    /// Text of the expression line
    #[must_use]
    pub fn expression_text(&self) -> Option<&str> {
        self.dom.get_element_text("expression")
    }

    /// Text of the result line
    #[must_use]
    pub fn result_text(&self) -> Option<&str> {
        self.dom.get_element_text("result")
    }

    /// Whether the easter element carries the visible class
    #[must_use]
    pub fn easter_shown(&self) -> bool {
        self.dom
            .get_element("easter")
            .is_some_and(|e| e.has_class(VISIBLE_CLASS))
    }

    fn sync_dom(&mut self) {
        let display = self.calculator.display();
        self.dom.set_element_text("expression", &display.expression);
        self.dom.set_element_text("result", &display.result);
        self.dom
            .toggle_element_class("easter", VISIBLE_CLASS, display.easter_visible);
    }
}
