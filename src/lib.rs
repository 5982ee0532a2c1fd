//! # stackcalc
//!
//! stackcalc evaluates arithmetic infix expressions with a stack machine.
//! Each expression is tokenized, converted to postfix order with the
//! shunting-yard algorithm, and evaluated on a value stack. The batch driver
//! applies this to a text file line by line.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    error::ExprError,
    interpreter::{evaluator::evaluate_postfix, lexer::tokenize, parser::to_postfix},
};

/// Processes text sources line by line.
///
/// This module reads expression lines, evaluates each one, and writes one
/// output line per input line. Blank and separator lines pass through, and
/// failures are recorded as `Error:` lines without stopping the run.
///
/// # Responsibilities
/// - Checks that the input file exists before any output is created.
/// - Formats results and per-line errors.
/// - Counts outcomes for the completion report.
pub mod batch;
/// Provides the error types for evaluation and batch processing.
///
/// Per-expression errors and run-aborting errors are kept apart so that the
/// batch driver can isolate failures to a single line.
pub mod error;
/// Implements the expression engine.
///
/// This module ties together the tokenizer, the shunting-yard converter, the
/// postfix evaluator and the stack they share.
pub mod interpreter;
/// General numeric helpers.
pub mod util;

/// Evaluates one infix expression.
///
/// # Errors
/// Returns an error if the expression contains an invalid token, has
/// unbalanced parentheses, is missing operands or operators, or divides by
/// zero.
///
/// # Examples
/// ```
/// use stackcalc::{error::ExprError, evaluate};
///
/// assert_eq!(evaluate("2 + 3 * 4"), Ok(14.0));
/// assert_eq!(evaluate("(2 + 3) * 4"), Ok(20.0));
/// assert_eq!(evaluate("5 / 0"), Err(ExprError::DivisionByZero));
/// ```
pub fn evaluate(source: &str) -> Result<f64, ExprError> {
    let postfix = to_postfix(tokenize(source)?)?;
    debug!(%postfix, "converted '{source}'");
    evaluate_postfix(&postfix)
}
