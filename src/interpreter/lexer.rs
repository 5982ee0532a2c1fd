use std::fmt;

use logos::Logos;

use crate::error::ExprError;

/// Result type used by the tokenizer.
pub type LexResult<T> = Result<T, ExprError>;

/// One of the four supported binary operators.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl Operator {
    /// Returns the source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Represents a lexical token of an infix expression.
///
/// Tokens are produced from whitespace-separated fragments of the input line;
/// a fragment becomes a token only if it matches exactly one of the variants
/// below from its first to its last character.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Token {
    /// Unsigned decimal literal: optional digits, at most one `.`, and at
    /// least one digit, such as `42`, `3.14`, `.5` or `7.`.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    Number(f64),
    /// `+`, `-`, `*` or `/`.
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Sub)]
    #[token("*", |_| Operator::Mul)]
    #[token("/", |_| Operator::Div)]
    Operator(Operator),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
        }
    }
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the slice is not a valid float, which makes the lexer report
///   an error for the fragment.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Surrounds every parenthesis with whitespace so it splits off as its own
/// fragment.
///
/// # Example
/// ```
/// use stackcalc::interpreter::lexer::pad_parens;
///
/// assert_eq!(pad_parens("(2+3)"), " ( 2+3 ) ");
/// ```
#[must_use]
pub fn pad_parens(source: &str) -> String {
    source.replace('(', " ( ").replace(')', " ) ")
}

/// Splits an expression line into its raw fragments.
///
/// Parentheses are padded first, then the line is split on whitespace runs.
/// Empty fragments are discarded and source order is kept. No validation of
/// the fragments happens here.
///
/// # Example
/// ```
/// use stackcalc::interpreter::lexer::split_fragments;
///
/// assert_eq!(split_fragments("  (2 + 3)*4 "), vec!["(", "2", "+", "3", ")", "*4"]);
/// ```
#[must_use]
pub fn split_fragments(source: &str) -> Vec<String> {
    pad_parens(source).split_whitespace().map(str::to_string).collect()
}

/// Classifies a single fragment.
///
/// The fragment must be matched by the lexer as exactly one token covering
/// the whole fragment. Anything else, such as `3.4.5`, `2+3` or `abc`, is
/// reported as [`ExprError::InvalidToken`].
///
/// # Errors
/// Returns `ExprError::InvalidToken` if the fragment is not a single token.
pub fn classify(fragment: &str) -> LexResult<Token> {
    let invalid = || ExprError::InvalidToken { token: fragment.to_string() };
    let mut lexer = Token::lexer(fragment);

    let token = match lexer.next() {
        Some(Ok(token)) if lexer.span() == (0..fragment.len()) => token,
        _ => return Err(invalid()),
    };

    if lexer.next().is_some() {
        return Err(invalid());
    }

    Ok(token)
}

/// Tokenizes an expression line.
///
/// # Errors
/// Returns `ExprError::InvalidToken` for the first fragment that does not
/// classify.
///
/// # Example
/// ```
/// use stackcalc::interpreter::lexer::{Operator, Token, tokenize};
///
/// let tokens = tokenize("(1.5 + 2)").unwrap();
/// assert_eq!(tokens,
///            vec![Token::LParen,
///                 Token::Number(1.5),
///                 Token::Operator(Operator::Add),
///                 Token::Number(2.0),
///                 Token::RParen]);
///
/// assert!(tokenize("3.4.5 + 1").is_err());
/// ```
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    split_fragments(source).iter().map(|fragment| classify(fragment)).collect()
}
