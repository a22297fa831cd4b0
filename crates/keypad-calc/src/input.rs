//! Symbolic input tokens
//!
//! Keypad buttons carry a `data-key` token and physical keys carry a key
//! name. Both are funnelled into [`InputToken`] before reaching the
//! accumulator.

use std::fmt;
use std::str::FromStr;

use crate::core::Operation;

/// One recognized user input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputToken {
    /// A digit `0-9`
    Digit(char),
    /// The decimal point
    Dot,
    /// One of `+ - * /`
    Operator(Operation),
    /// `=` or Enter
    Evaluate,
    /// Delete backward
    Backspace,
    /// Reset everything
    Clear,
}

impl InputToken {
    /// Parses a dispatcher token: `clear`, `backspace`, `=`, `Enter`, `.`,
    /// an operator or a single digit
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "clear" => Some(Self::Clear),
            "backspace" => Some(Self::Backspace),
            "=" | "Enter" => Some(Self::Evaluate),
            "." => Some(Self::Dot),
            _ => Self::single_char(token),
        }
    }

    /// Maps a keyboard key name to a token.
    ///
    /// `Escape` clears and `Backspace` deletes; `=` is a keypad token only.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(Self::Evaluate),
            "Backspace" => Some(Self::Backspace),
            "Escape" => Some(Self::Clear),
            "." => Some(Self::Dot),
            _ => Self::single_char(key),
        }
    }

    fn single_char(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        let (Some(ch), None) = (chars.next(), chars.next()) else {
            return None;
        };
        if ch.is_ascii_digit() {
            Some(Self::Digit(ch))
        } else {
            Operation::from_char(ch).map(Self::Operator)
        }
    }

    /// The canonical dispatcher token
    #[must_use]
    pub fn as_token(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Dot => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Evaluate => "=".to_string(),
            Self::Backspace => "backspace".to_string(),
            Self::Clear => "clear".to_string(),
        }
    }
}

impl fmt::Display for InputToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_token())
    }
}

/// Error for tokens the dispatcher does not recognize
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unrecognized input token: {0:?}")]
pub struct UnknownToken(pub String);

impl FromStr for InputToken {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownToken(s.to_string()))
    }
}

/// What the host should do with a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyResponse {
    /// The key mapped to a token and was handled
    pub handled: bool,
    /// Suppress the platform default (form submit, navigation)
    pub prevent_default: bool,
}

impl KeyResponse {
    /// Response for a key that was handled
    pub const HANDLED: Self = Self {
        handled: true,
        prevent_default: true,
    };

    /// Response for a key the calculator ignores
    pub const IGNORED: Self = Self {
        handled: false,
        prevent_default: false,
    };
}
