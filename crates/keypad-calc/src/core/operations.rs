//! The four keypad operators

/// Binary operator reachable from the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operation {
    /// All operators in keypad order
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Parses an operator symbol
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Returns true if `ch` is one of `+ - * /`
    #[must_use]
    pub const fn is_operator_char(ch: char) -> bool {
        Self::from_char(ch).is_some()
    }

    /// Returns the precedence level (higher = evaluated first)
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::Add | Self::Subtract => 1,
            Self::Multiply | Self::Divide => 2,
        }
    }

    /// Applies the operator with IEEE-754 semantics.
    ///
    /// Division by zero yields an infinity (or NaN for `0 / 0`).
    #[must_use]
    pub fn apply(&self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_operation_symbol_round_trip() {
        for op in Operation::ALL {
            assert_eq!(Operation::from_char(op.symbol()), Some(op));
        }
    }

    #[test]
    fn test_from_char_rejects_others() {
        for ch in ['%', '^', '(', '.', '0', ' ', 'x'] {
            assert_eq!(Operation::from_char(ch), None);
            assert!(!Operation::is_operator_char(ch));
        }
    }

    #[test]
    fn test_operation_precedence() {
        assert_eq!(Operation::Add.precedence(), 1);
        assert_eq!(Operation::Subtract.precedence(), 1);
        assert_eq!(Operation::Multiply.precedence(), 2);
        assert_eq!(Operation::Divide.precedence(), 2);
    }

    #[test]
    fn test_apply_basic() {
        assert_eq!(Operation::Add.apply(2.0, 3.0), 5.0);
        assert_eq!(Operation::Subtract.apply(5.0, 3.0), 2.0);
        assert_eq!(Operation::Multiply.apply(4.0, 3.0), 12.0);
        assert_eq!(Operation::Divide.apply(12.0, 4.0), 3.0);
    }

    #[test]
    fn test_divide_by_zero_is_not_special_cased() {
        assert_eq!(Operation::Divide.apply(1.0, 0.0), f64::INFINITY);
        assert_eq!(Operation::Divide.apply(-1.0, 0.0), f64::NEG_INFINITY);
        assert!(Operation::Divide.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_display() {
        assert_eq!(Operation::Multiply.to_string(), "*");
    }

    proptest! {
        #[test]
        fn prop_add_commutative(a in -1e6f64..1e6, b in -1e6f64..1e6) {
            prop_assert_eq!(Operation::Add.apply(a, b), Operation::Add.apply(b, a));
        }

        #[test]
        fn prop_multiply_by_one_identity(a in -1e6f64..1e6) {
            prop_assert_eq!(Operation::Multiply.apply(a, 1.0), a);
        }
    }
}
