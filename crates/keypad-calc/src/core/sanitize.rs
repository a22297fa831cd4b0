//! Pre-evaluation normalization of the expression buffer

use super::Operation;

/// Returns true for characters the evaluator is allowed to see
#[must_use]
pub fn is_allowed_char(ch: char) -> bool {
    ch.is_ascii_digit() || ch == '.' || ch == ' ' || Operation::is_operator_char(ch)
}

fn is_incomplete_tail(ch: char) -> bool {
    ch == '.' || ch == ' ' || Operation::is_operator_char(ch)
}

/// Strips disallowed characters, then any trailing operators, dots or spaces.
///
/// ```rust
/// use keypad_calc::core::sanitize;
///
/// assert_eq!(sanitize("5+"), "5");
/// assert_eq!(sanitize("1a2 * 3.-"), "12 * 3");
/// ```
#[must_use]
pub fn sanitize(expr: &str) -> String {
    let safe: String = expr.chars().filter(|&ch| is_allowed_char(ch)).collect();
    safe.trim_end_matches(is_incomplete_tail).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sanitize_keeps_complete_expression() {
        assert_eq!(sanitize("2+3*4"), "2+3*4");
    }

    #[test]
    fn test_sanitize_strips_trailing_operator() {
        assert_eq!(sanitize("5+"), "5");
    }

    #[test]
    fn test_sanitize_strips_trailing_run() {
        assert_eq!(sanitize("5+ . *"), "5");
    }

    #[test]
    fn test_sanitize_strips_trailing_dot() {
        assert_eq!(sanitize("0."), "0");
    }

    #[test]
    fn test_sanitize_drops_disallowed() {
        assert_eq!(sanitize("alert(1)+2"), "1+2");
        assert_eq!(sanitize("2^3%4"), "234");
    }

    #[test]
    fn test_sanitize_keeps_inner_spaces() {
        assert_eq!(sanitize("1 + 2 "), "1 + 2");
    }

    #[test]
    fn test_sanitize_only_operators_is_empty() {
        assert_eq!(sanitize("+-*/"), "");
        assert_eq!(sanitize(""), "");
    }

    proptest! {
        #[test]
        fn prop_sanitized_output_is_allowed(input in ".*") {
            let out = sanitize(&input);
            prop_assert!(out.chars().all(is_allowed_char));
            if let Some(last) = out.chars().last() {
                prop_assert!(last.is_ascii_digit());
            }
        }

        #[test]
        fn prop_sanitize_idempotent(input in ".*") {
            let once = sanitize(&input);
            prop_assert_eq!(sanitize(&once), once.clone());
        }
    }
}
