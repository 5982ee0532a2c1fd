/// The evaluator module computes the value of a postfix sequence.
///
/// # Responsibilities
/// - Dispatches the four arithmetic operators and reports division by zero.
/// - Runs the postfix sequence on a numeric value stack.
/// - Reports missing operands and leftover values.
pub mod evaluator;
/// The lexer module turns an expression line into tokens.
///
/// Parentheses are padded with whitespace, the line is split into fragments,
/// and each fragment is classified as a number, an operator or a parenthesis.
pub mod lexer;
/// The parser module converts infix tokens into postfix order.
///
/// # Responsibilities
/// - Ranks operators by precedence.
/// - Runs the shunting-yard conversion on an operator stack.
/// - Reports unbalanced parentheses.
pub mod parser;
/// A small owned LIFO container used by the parser and the evaluator.
pub mod stack;
