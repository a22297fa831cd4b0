//! Property-based tests for the expression accumulator
//!
//! Arbitrary keypad sessions must never leave the buffer in a shape the
//! evaluator cannot take.

#![allow(clippy::unwrap_used)]

use keypad_calc::accumulator::{Accumulator, EMPTY_BUFFER};
use keypad_calc::core::evaluator::Evaluator;
use keypad_calc::core::{sanitize, Operation};
use proptest::prelude::*;

// ===== Strategy definitions =====

/// One editing keystroke
#[derive(Debug, Clone, Copy)]
enum Edit {
    Digit(char),
    Dot,
    Operator(Operation),
    Backspace,
    Clear,
    Evaluated,
}

fn digit_strategy() -> impl Strategy<Value = char> {
    (0u8..=9).prop_map(|d| char::from(b'0' + d))
}

fn operator_strategy() -> impl Strategy<Value = Operation> {
    prop::sample::select(Operation::ALL.to_vec())
}

fn edit_strategy() -> impl Strategy<Value = Edit> {
    prop_oneof![
        4 => digit_strategy().prop_map(Edit::Digit),
        2 => Just(Edit::Dot),
        2 => operator_strategy().prop_map(Edit::Operator),
        1 => Just(Edit::Backspace),
        1 => Just(Edit::Clear),
        1 => Just(Edit::Evaluated),
    ]
}

fn apply(acc: &mut Accumulator, edit: Edit) {
    match edit {
        Edit::Digit(d) => acc.append_digit(d),
        Edit::Dot => acc.append_dot(),
        Edit::Operator(op) => acc.append_operator(op),
        Edit::Backspace => acc.backspace(),
        Edit::Clear => acc.clear(),
        Edit::Evaluated => acc.mark_evaluated(),
    }
}

fn session(edits: &[Edit]) -> Accumulator {
    let mut acc = Accumulator::new();
    for edit in edits {
        apply(&mut acc, *edit);
    }
    acc
}

fn number_tokens(buffer: &str) -> impl Iterator<Item = &str> {
    buffer.split(Operation::is_operator_char)
}

// ===== Buffer shape =====

proptest! {
    #[test]
    fn prop_buffer_never_empty(edits in prop::collection::vec(edit_strategy(), 0..60)) {
        prop_assert!(!session(&edits).buffer().is_empty());
    }

    #[test]
    fn prop_buffer_stays_in_alphabet(edits in prop::collection::vec(edit_strategy(), 0..60)) {
        let acc = session(&edits);
        for ch in acc.buffer().chars() {
            prop_assert!(
                ch.is_ascii_digit() || ch == '.' || Operation::is_operator_char(ch),
                "unexpected {:?} in {:?}", ch, acc.buffer()
            );
        }
    }

    #[test]
    fn prop_at_most_one_dot_per_number(edits in prop::collection::vec(edit_strategy(), 0..60)) {
        let acc = session(&edits);
        for token in number_tokens(acc.buffer()) {
            prop_assert!(token.matches('.').count() <= 1, "{:?}", acc.buffer());
        }
    }

    #[test]
    fn prop_no_adjacent_operators(edits in prop::collection::vec(edit_strategy(), 0..60)) {
        let acc = session(&edits);
        let chars: Vec<char> = acc.buffer().chars().collect();
        for pair in chars.windows(2) {
            prop_assert!(
                !(Operation::is_operator_char(pair[0]) && Operation::is_operator_char(pair[1])),
                "{:?}", acc.buffer()
            );
        }
    }

    #[test]
    fn prop_buffer_never_lone_operator(edits in prop::collection::vec(edit_strategy(), 0..60)) {
        let acc = session(&edits);
        prop_assert!(acc.buffer().chars().any(|ch| ch.is_ascii_digit()));
    }

    #[test]
    fn prop_sanitized_buffer_always_evaluates(edits in prop::collection::vec(edit_strategy(), 0..60)) {
        let acc = session(&edits);
        let cleaned = sanitize(acc.buffer());
        prop_assert!(!cleaned.is_empty());
        prop_assert!(Evaluator::new().evaluate_str(&cleaned).is_ok(), "{:?}", cleaned);
    }
}

// ===== Editing rules =====

proptest! {
    #[test]
    fn prop_digits_concatenate_from_clear(digits in prop::collection::vec(digit_strategy(), 1..20)) {
        let mut acc = Accumulator::new();
        for d in &digits {
            acc.append_digit(*d);
        }
        let typed: String = digits.iter().collect();
        let trimmed = typed.trim_start_matches('0');
        let expected = if trimmed.is_empty() { EMPTY_BUFFER } else { trimmed };
        prop_assert_eq!(acc.buffer(), expected);
    }

    #[test]
    fn prop_operator_replaces_trailing_operator(
        edits in prop::collection::vec(edit_strategy(), 0..30),
        first in operator_strategy(),
        second in operator_strategy(),
    ) {
        let mut acc = session(&edits);
        acc.append_operator(first);
        let with_first = acc.buffer().to_string();
        acc.append_operator(second);

        prop_assert_eq!(acc.buffer().len(), with_first.len());
        prop_assert!(acc.buffer().ends_with(second.symbol()));
        prop_assert!(!acc.just_evaluated());
    }

    #[test]
    fn prop_second_dot_is_noop(edits in prop::collection::vec(edit_strategy(), 0..30)) {
        let mut acc = session(&edits);
        acc.append_dot();
        let once = acc.clone();
        acc.append_dot();
        prop_assert_eq!(acc, once);
    }

    #[test]
    fn prop_digit_after_evaluation_starts_fresh(
        edits in prop::collection::vec(edit_strategy(), 0..30),
        digit in digit_strategy(),
    ) {
        let mut acc = session(&edits);
        acc.mark_evaluated();
        acc.append_digit(digit);
        prop_assert_eq!(acc.buffer(), digit.to_string());
        prop_assert!(!acc.just_evaluated());
    }

    #[test]
    fn prop_clear_resets(edits in prop::collection::vec(edit_strategy(), 0..30)) {
        let mut acc = session(&edits);
        acc.clear();
        prop_assert_eq!(acc, Accumulator::new());
    }

    #[test]
    fn prop_current_token_is_buffer_suffix(edits in prop::collection::vec(edit_strategy(), 0..40)) {
        let acc = session(&edits);
        let token = acc.current_number_token();
        prop_assert!(acc.buffer().ends_with(token));
        prop_assert!(!token.chars().any(Operation::is_operator_char));
    }
}
