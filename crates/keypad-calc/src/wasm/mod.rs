//! Browser frontend for the keypad calculator
//!
//! The mock DOM and driver are always compiled so the page behavior can be
//! tested natively; the wasm-bindgen surface sits behind the `wasm` feature.

#[cfg(feature = "wasm")]
mod browser;
mod dom;
mod driver;
mod keypad;

#[cfg(feature = "wasm")]
pub use browser::{BrowserCalculator, JsClock};
pub use dom::{DomElement, DomEvent, MockDom, DATA_KEY, KEY_CLASS, VISIBLE_CLASS};
pub use driver::WasmDriver;
pub use keypad::{Keypad, KeypadButtonDef, MockDomKeypadExt};
