//! Browser WASM bindings for the keypad calculator
//!
//! The page script forwards `data-key` tokens from button clicks and key
//! names from `keydown`, calls `preventDefault()` when told to, and polls
//! [`BrowserCalculator::tick`] (for example from `requestAnimationFrame`) so
//! the transient result and easter indicator expire.

// Note: This module is already conditionally compiled via #[cfg(feature = "wasm")] in mod.rs

use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::calculator::KeypadCalculator;
use crate::config::CalculatorConfig;
use crate::timer::Clock;

/// Monotonic `performance.now()` in milliseconds.
///
/// Falls back to `Date.now()` where no `Performance` object is exposed.
#[derive(Debug, Clone)]
pub struct JsClock {
    performance: Option<web_sys::Performance>,
}

impl JsClock {
    /// Binds to the window's `performance` object
    #[must_use]
    pub fn new() -> Self {
        Self {
            performance: web_sys::window().and_then(|window| window.performance()),
        }
    }
}

impl Default for JsClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for JsClock {
    fn now_ms(&self) -> u64 {
        match &self.performance {
            Some(performance) => performance.now() as u64,
            None => js_sys::Date::now() as u64,
        }
    }
}

/// Browser Calculator - the main WASM entry point
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    inner: KeypadCalculator<JsClock>,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Create a calculator with default configuration
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        Self {
            inner: KeypadCalculator::with_clock(CalculatorConfig::default(), JsClock::new()),
        }
    }

    /// Create a calculator from a JSON configuration
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: &str) -> Result<BrowserCalculator, JsError> {
        console_error_panic_hook::set_once();
        let config = CalculatorConfig::from_json(json)?;
        Ok(Self {
            inner: KeypadCalculator::with_clock(config, JsClock::new()),
        })
    }

    /// The live expression buffer
    #[wasm_bindgen(getter)]
    pub fn expression(&self) -> String {
        self.inner.expression().to_string()
    }

    /// The transient result line (empty when hidden)
    #[wasm_bindgen(getter)]
    pub fn result(&self) -> String {
        self.inner.result().to_string()
    }

    /// Whether the easter indicator should carry its visible class
    #[wasm_bindgen(getter, js_name = easterVisible)]
    pub fn easter_visible(&self) -> bool {
        self.inner.easter_visible()
    }

    /// Handle a keypad button's `data-key` token; returns false if ignored
    #[wasm_bindgen(js_name = handleButton)]
    pub fn handle_button(&mut self, data_key: &str) -> bool {
        self.inner.dispatch(data_key).is_handled()
    }

    /// Handle a `keydown` key name; returns true if the page must call
    /// `preventDefault()`
    #[wasm_bindgen(js_name = handleKey)]
    pub fn handle_key(&mut self, key: &str) -> bool {
        self.inner.handle_key(key).prevent_default
    }

    /// Apply expired transient timers; returns true if the display changed
    pub fn tick(&mut self) -> bool {
        !self.inner.tick().is_empty()
    }

    /// Milliseconds until the next transient expires, or -1 if none is pending
    #[wasm_bindgen(js_name = msUntilNextTick)]
    pub fn ms_until_next_tick(&self) -> f64 {
        match self.inner.timers().next_deadline() {
            Some(deadline) => deadline.saturating_sub(self.inner.clock().now_ms()) as f64,
            None => -1.0,
        }
    }
}

impl Default for BrowserCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialize the calculator in the browser
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"Keypad calculator WASM initialized".into());
}
