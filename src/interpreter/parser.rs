use std::fmt;

use crate::{
    error::ExprError,
    interpreter::{
        lexer::{Operator, Token},
        stack::Stack,
    },
};

pub type ParseResult<T> = Result<T, ExprError>;

/// An expression in Reverse Polish order.
///
/// Produced once per input line by [`to_postfix`] and consumed by the
/// evaluator. It contains only numbers and operators; parentheses are
/// resolved during conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Postfix(Vec<Token>);

impl Postfix {
    /// Returns the tokens in evaluation order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.0
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

/// Returns the binding rank of a token.
///
/// `+` and `-` rank 1, `*` and `/` rank 2. Every other token, parentheses
/// included, ranks 0 so that operators never pop past an opening
/// parenthesis.
///
/// # Example
/// ```
/// use stackcalc::interpreter::{lexer::{Operator, Token}, parser::precedence};
///
/// assert_eq!(precedence(&Token::Operator(Operator::Sub)), 1);
/// assert_eq!(precedence(&Token::Operator(Operator::Div)), 2);
/// assert_eq!(precedence(&Token::LParen), 0);
/// ```
#[must_use]
pub const fn precedence(token: &Token) -> u8 {
    match token {
        Token::Operator(Operator::Add | Operator::Sub) => 1,
        Token::Operator(Operator::Mul | Operator::Div) => 2,
        _ => 0,
    }
}

/// Converts an infix token sequence into postfix order (shunting-yard).
///
/// Numbers go straight to the output. Operators first pop every stacked
/// operator of greater or equal precedence, which makes all four operators
/// left-associative. A closing parenthesis pops until its opening partner,
/// which is then discarded.
///
/// # Errors
/// Returns `ExprError::UnbalancedParens` if a `)` has no matching `(` or a
/// `(` is never closed. Operand/operator alternation is not checked here;
/// such mistakes surface during evaluation.
///
/// # Example
/// ```
/// use stackcalc::interpreter::{lexer::tokenize, parser::to_postfix};
///
/// let postfix = to_postfix(tokenize("(2 + 3) * 4").unwrap()).unwrap();
/// assert_eq!(postfix.to_string(), "2 3 + 4 *");
///
/// let postfix = to_postfix(tokenize("8 - 3 - 2").unwrap()).unwrap();
/// assert_eq!(postfix.to_string(), "8 3 - 2 -");
/// ```
pub fn to_postfix(tokens: Vec<Token>) -> ParseResult<Postfix> {
    let mut operators: Stack<Token> = Stack::new();
    let mut output = Vec::with_capacity(tokens.len());

    for token in tokens {
        match token {
            Token::Number(_) => output.push(token),
            Token::LParen => operators.push(token),
            Token::RParen => loop {
                match operators.pop() {
                    Some(Token::LParen) => break,
                    Some(top) => output.push(top),
                    None => return Err(ExprError::UnbalancedParens),
                }
            },
            Token::Operator(_) => {
                while operators.peek()
                                .is_some_and(|top| precedence(top) >= precedence(&token))
                {
                    output.extend(operators.pop());
                }
                operators.push(token);
            },
        }
    }

    while let Some(top) = operators.pop() {
        if top == Token::LParen {
            return Err(ExprError::UnbalancedParens);
        }
        output.push(top);
    }

    Ok(Postfix(output))
}
