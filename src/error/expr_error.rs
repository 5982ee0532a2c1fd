use thiserror::Error;

use crate::interpreter::lexer::Operator;

#[derive(Debug, Error, Clone, PartialEq)]
/// Represents all errors that can occur while evaluating one expression.
///
/// The `Display` output is the bare message; the batch driver adds the
/// `Error: ` prefix when it writes a failed line.
pub enum ExprError {
    /// A fragment of the input is neither a number, an operator nor a
    /// parenthesis.
    #[error("Invalid token: '{token}'")]
    InvalidToken {
        /// The offending fragment.
        token: String,
    },
    /// A closing parenthesis had no opening partner, or an opening one was
    /// never closed.
    #[error("Unbalanced parentheses")]
    UnbalancedParens,
    /// An operator did not find two operands on the stack.
    #[error("Missing operand for '{operator}'")]
    MissingOperand {
        /// The operator that was being applied.
        operator: Operator,
    },
    /// More than one value was left once every token had been consumed.
    #[error("Missing operator: {remaining} values left on the stack")]
    MissingOperator {
        /// Number of values still on the stack.
        remaining: usize,
    },
    /// The expression contained no tokens at all.
    #[error("Empty expression")]
    EmptyExpression,
    /// Attempted division by zero.
    #[error("Division by zero")]
    DivisionByZero,
}
