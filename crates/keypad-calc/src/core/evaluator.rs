//! AST evaluator

use crate::core::parser::{AstNode, Parser};
use crate::core::CalcResult;

/// Evaluator for AST expressions
///
/// Stateless; arithmetic follows IEEE-754, so `1/0` evaluates to infinity
/// rather than failing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator;

impl Evaluator {
    /// Creates a new evaluator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Evaluates an AST node and returns the result
    #[must_use]
    pub fn evaluate(&self, node: &AstNode) -> f64 {
        match node {
            AstNode::Number(n) => *n,
            AstNode::Negate(inner) => -self.evaluate(inner),
            AstNode::BinaryOp { left, op, right } => {
                op.apply(self.evaluate(left), self.evaluate(right))
            }
        }
    }

    /// Parses and evaluates a string expression
    pub fn evaluate_str(&self, input: &str) -> CalcResult<f64> {
        let ast = Parser::parse_str(input)?;
        Ok(self.evaluate(&ast))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CalcError, Operation};

    #[test]
    fn test_evaluate_number() {
        assert_eq!(Evaluator::new().evaluate(&AstNode::number(42.0)), 42.0);
    }

    #[test]
    fn test_evaluate_double_negative() {
        let ast = AstNode::negate(AstNode::negate(AstNode::number(5.0)));
        assert_eq!(Evaluator::new().evaluate(&ast), 5.0);
    }

    #[test]
    fn test_evaluate_nested() {
        // (1 + 2) * (3 + 4) = 21
        let ast = AstNode::binary(
            AstNode::binary(AstNode::number(1.0), Operation::Add, AstNode::number(2.0)),
            Operation::Multiply,
            AstNode::binary(AstNode::number(3.0), Operation::Add, AstNode::number(4.0)),
        );
        assert_eq!(Evaluator::new().evaluate(&ast), 21.0);
    }

    #[test]
    fn test_evaluate_str_precedence() {
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate_str("2+3*4"), Ok(14.0));
        assert_eq!(eval.evaluate_str("10-4/2"), Ok(8.0));
        assert_eq!(eval.evaluate_str("2*3+4*5"), Ok(26.0));
    }

    #[test]
    fn test_evaluate_str_left_to_right() {
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate_str("10-3-2"), Ok(5.0));
        assert_eq!(eval.evaluate_str("100/10/5"), Ok(2.0));
    }

    #[test]
    fn test_evaluate_str_decimals() {
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate_str("0.5+0.25"), Ok(0.75));
        assert_eq!(eval.evaluate_str("0"), Ok(0.0));
    }

    #[test]
    fn test_evaluate_str_division_by_zero() {
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate_str("1/0"), Ok(f64::INFINITY));
        assert!(eval.evaluate_str("0/0").unwrap().is_nan());
    }

    #[test]
    fn test_evaluate_str_errors() {
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate_str(""), Err(CalcError::EmptyExpression));
        assert!(matches!(
            eval.evaluate_str("1.2.3"),
            Err(CalcError::ParseError(_))
        ));
    }

    #[test]
    fn test_evaluate_str_long_sign_run() {
        let eval = Evaluator::new();
        let input = crate::core::sanitize(&format!("{}1", "-".repeat(100_000)));
        assert_eq!(eval.evaluate_str(&input), Ok(1.0));
        let input = crate::core::sanitize(&format!("3*{}1-", "-".repeat(100_001)));
        assert_eq!(eval.evaluate_str(&input), Ok(-3.0));
    }
}
