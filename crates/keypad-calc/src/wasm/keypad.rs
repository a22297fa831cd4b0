//! Keypad layout
//!
//! Layout:
//! ```text
//! [ C ] [ ⌫ ] [ ÷ ] [ × ]
//! [ 7 ] [ 8 ] [ 9 ] [ − ]
//! [ 4 ] [ 5 ] [ 6 ] [ + ]
//! [ 1 ] [ 2 ] [ 3 ] [ = ]
//! [ 0 ] [ . ]
//! ```

use super::dom::{DomElement, MockDom, DATA_KEY, KEY_CLASS};
use crate::core::Operation;
use crate::input::InputToken;

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButtonDef {
    /// Token dispatched on activation
    pub token: InputToken,
    /// The DOM element ID for this button
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButtonDef {
    /// Creates a new button definition
    #[must_use]
    pub fn new(token: InputToken, row: usize, col: usize) -> Self {
        let id = match token {
            InputToken::Digit(d) => format!("btn-{d}"),
            InputToken::Dot => "btn-dot".to_string(),
            InputToken::Operator(op) => format!("btn-{}", op_name(op)),
            InputToken::Evaluate => "btn-equals".to_string(),
            InputToken::Backspace => "btn-backspace".to_string(),
            InputToken::Clear => "btn-clear".to_string(),
        };
        Self { token, id, row, col }
    }

    /// Text printed on the button
    #[must_use]
    pub fn label(&self) -> String {
        match self.token {
            InputToken::Digit(d) => d.to_string(),
            InputToken::Dot => ".".to_string(),
            InputToken::Operator(Operation::Add) => "+".to_string(),
            InputToken::Operator(Operation::Subtract) => "−".to_string(),
            InputToken::Operator(Operation::Multiply) => "×".to_string(),
            InputToken::Operator(Operation::Divide) => "÷".to_string(),
            InputToken::Evaluate => "=".to_string(),
            InputToken::Backspace => "⌫".to_string(),
            InputToken::Clear => "C".to_string(),
        }
    }

    /// Builds the button element
    #[must_use]
    pub fn to_element(&self) -> DomElement {
        DomElement::new("button")
            .with_id(&self.id)
            .with_text(&self.label())
            .with_class(KEY_CLASS)
            .with_class(&format!("key-row-{}", self.row))
            .with_class(&format!("key-col-{}", self.col))
            .with_attr(DATA_KEY, &self.token.as_token())
    }
}

const fn op_name(op: Operation) -> &'static str {
    match op {
        Operation::Add => "plus",
        Operation::Subtract => "minus",
        Operation::Multiply => "times",
        Operation::Divide => "divide",
    }
}

/// The calculator keypad
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButtonDef>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let rows: [&[InputToken]; 5] = [
            &[
                InputToken::Clear,
                InputToken::Backspace,
                InputToken::Operator(Operation::Divide),
                InputToken::Operator(Operation::Multiply),
            ],
            &[
                InputToken::Digit('7'),
                InputToken::Digit('8'),
                InputToken::Digit('9'),
                InputToken::Operator(Operation::Subtract),
            ],
            &[
                InputToken::Digit('4'),
                InputToken::Digit('5'),
                InputToken::Digit('6'),
                InputToken::Operator(Operation::Add),
            ],
            &[
                InputToken::Digit('1'),
                InputToken::Digit('2'),
                InputToken::Digit('3'),
                InputToken::Evaluate,
            ],
            &[InputToken::Digit('0'), InputToken::Dot],
        ];

        let buttons = rows
            .iter()
            .enumerate()
            .flat_map(|(row, tokens)| {
                tokens
                    .iter()
                    .enumerate()
                    .map(move |(col, token)| KeypadButtonDef::new(*token, row, col))
            })
            .collect();

        Self { buttons }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButtonDef] {
        &self.buttons
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.row == row && b.col == col)
    }

    /// Finds a button by element ID
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds the button dispatching `token`
    #[must_use]
    pub fn find_button_by_token(&self, token: InputToken) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.token == token)
    }
}

/// Extension trait for MockDom to mount a keypad
pub trait MockDomKeypadExt {
    /// Registers every keypad button (with a label span) under `keys`
    fn add_keypad(&mut self, keypad: &Keypad);
}

impl MockDomKeypadExt for MockDom {
    fn add_keypad(&mut self, keypad: &Keypad) {
        for btn in keypad.buttons() {
            let label = DomElement::new("span")
                .with_id(&format!("{}-label", btn.id))
                .with_text(&btn.label());
            self.register_element(btn.to_element(), Some("keys"));
            self.register_element(label, Some(&btn.id));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keypad_has_all_tokens() {
        let keypad = Keypad::new();
        assert_eq!(keypad.button_count(), 18);
        for d in '0'..='9' {
            assert!(keypad.find_button_by_token(InputToken::Digit(d)).is_some());
        }
        for op in Operation::ALL {
            assert!(keypad.find_button_by_token(InputToken::Operator(op)).is_some());
        }
        for token in [
            InputToken::Dot,
            InputToken::Evaluate,
            InputToken::Backspace,
            InputToken::Clear,
        ] {
            assert!(keypad.find_button_by_token(token).is_some());
        }
    }

    #[test]
    fn test_unique_ids_and_positions() {
        let keypad = Keypad::new();
        let ids: HashSet<_> = keypad.buttons().iter().map(|b| b.id.clone()).collect();
        let positions: HashSet<_> = keypad.buttons().iter().map(|b| (b.row, b.col)).collect();
        assert_eq!(ids.len(), keypad.button_count());
        assert_eq!(positions.len(), keypad.button_count());
    }

    #[test]
    fn test_get_button_at() {
        let keypad = Keypad::new();
        assert_eq!(keypad.get_button_at(0, 0).unwrap().token, InputToken::Clear);
        assert_eq!(keypad.get_button_at(4, 1).unwrap().token, InputToken::Dot);
        assert!(keypad.get_button_at(4, 2).is_none());
        assert!(keypad.get_button_at(9, 0).is_none());
    }

    #[test]
    fn test_button_element_carries_data_key() {
        let keypad = Keypad::new();
        let btn = keypad.find_button_by_id("btn-times").unwrap();
        let elem = btn.to_element();
        assert_eq!(elem.get_attr(DATA_KEY), Some("*"));
        assert_eq!(elem.text_content, "×");
        assert!(elem.is_key_button());

        let clear = keypad.find_button_by_id("btn-clear").unwrap().to_element();
        assert_eq!(clear.get_attr(DATA_KEY), Some("clear"));
    }

    #[test]
    fn test_data_keys_parse_back_to_tokens() {
        for btn in Keypad::new().buttons() {
            let elem = btn.to_element();
            let key = elem.get_attr(DATA_KEY).unwrap();
            assert_eq!(InputToken::parse(key), Some(btn.token));
        }
    }

    #[test]
    fn test_add_keypad_registers_buttons_and_labels() {
        let mut dom = MockDom::calculator();
        dom.add_keypad(&Keypad::new());
        assert_eq!(dom.children_of("keys").len(), 18);
        assert_eq!(dom.get_element_text("btn-backspace-label"), Some("⌫"));
        assert_eq!(dom.children_of("btn-7"), &["btn-7-label"]);
    }
}
