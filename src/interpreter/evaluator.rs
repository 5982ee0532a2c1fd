use tracing::trace;

use crate::{
    error::ExprError,
    interpreter::{
        lexer::{Operator, Token},
        parser::Postfix,
        stack::Stack,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `ExprError` describing the failure.
pub type EvalResult<T> = Result<T, ExprError>;

/// Applies one arithmetic operator to two operands.
///
/// `a` is the left-hand operand and `b` the right-hand one.
///
/// # Errors
/// Returns `ExprError::DivisionByZero` when dividing by zero.
///
/// # Example
/// ```
/// use stackcalc::{
///     error::ExprError,
///     interpreter::{evaluator::apply, lexer::Operator},
/// };
///
/// assert_eq!(apply(7.0, 2.0, Operator::Sub), Ok(5.0));
/// assert_eq!(apply(7.0, 2.0, Operator::Div), Ok(3.5));
/// assert_eq!(apply(7.0, 0.0, Operator::Div), Err(ExprError::DivisionByZero));
/// ```
pub fn apply(a: f64, b: f64, op: Operator) -> EvalResult<f64> {
    match op {
        Operator::Add => Ok(a + b),
        Operator::Sub => Ok(a - b),
        Operator::Mul => Ok(a * b),
        Operator::Div => {
            if b == 0.0 {
                return Err(ExprError::DivisionByZero);
            }
            Ok(a / b)
        },
    }
}

/// Evaluates a postfix sequence with a value stack.
///
/// Numbers are pushed. Each operator pops its right operand first, then its
/// left one, and pushes the result. Exactly one value must remain at the end.
/// The sequence is only borrowed, so evaluating it again yields the same
/// result.
///
/// # Errors
/// - `MissingOperand` if an operator finds fewer than two values.
/// - `EmptyExpression` if there is nothing to evaluate.
/// - `MissingOperator` if several values are left over.
/// - `DivisionByZero` from [`apply`].
/// - `UnbalancedParens` if a parenthesis reached the evaluator.
///
/// # Example
/// ```
/// use stackcalc::interpreter::{evaluator::evaluate_postfix, lexer::tokenize, parser::to_postfix};
///
/// let postfix = to_postfix(tokenize("2 + 3 * 4").unwrap()).unwrap();
/// assert_eq!(evaluate_postfix(&postfix), Ok(14.0));
/// assert_eq!(evaluate_postfix(&postfix), Ok(14.0));
/// ```
pub fn evaluate_postfix(postfix: &Postfix) -> EvalResult<f64> {
    let mut values: Stack<f64> = Stack::new();

    for token in postfix.tokens() {
        match *token {
            Token::Number(n) => values.push(n),
            Token::Operator(operator) => {
                let missing = || ExprError::MissingOperand { operator };
                let b = values.pop().ok_or_else(missing)?;
                let a = values.pop().ok_or_else(missing)?;
                let result = apply(a, b, operator)?;
                trace!("{a} {operator} {b} = {result}");
                values.push(result);
            },
            Token::LParen | Token::RParen => return Err(ExprError::UnbalancedParens),
        }
    }

    let result = values.pop().ok_or(ExprError::EmptyExpression)?;

    if !values.is_empty() {
        return Err(ExprError::MissingOperator { remaining: values.len() + 1 });
    }

    Ok(result)
}
