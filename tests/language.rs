use pretty_assertions::assert_eq;
use stackcalc::{
    error::ExprError,
    evaluate,
    interpreter::{
        evaluator::evaluate_postfix,
        lexer::{Operator, Token, split_fragments, tokenize},
        parser::to_postfix,
    },
};

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => assert!((value - expected).abs() < 1e-9,
                             "'{src}' evaluated to {value}, expected {expected}"),
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn assert_failure(src: &str, expected: &ExprError) {
    match evaluate(src) {
        Ok(value) => panic!("'{src}' evaluated to {value} but was expected to fail"),
        Err(e) => assert_eq!(&e, expected),
    }
}

fn postfix_of(src: &str) -> String {
    to_postfix(tokenize(src).unwrap()).unwrap().to_string()
}

#[test]
fn basic_arithmetic() {
    assert_value("1 + 2", 3.0);
    assert_value("7 * 9", 63.0);
    assert_value("8 - 5", 3.0);
    assert_value("10 / 4", 2.5);
    assert_value("  42  ", 42.0);
}

#[test]
fn operator_precedence() {
    assert_value("2 + 3 * 4", 14.0);
    assert_value("(2 + 3) * 4", 20.0);
    assert_value("2 * 3 + 4 * 5", 26.0);
    assert_value("10 - 6 / 2", 7.0);
}

#[test]
fn left_associativity() {
    assert_value("8 - 3 - 2", 3.0);
    assert_value("64 / 4 / 2", 8.0);
    assert_value("8 - (3 - 2)", 7.0);
    assert_eq!(postfix_of("8 - 3 - 2"), "8 3 - 2 -");
    assert_eq!(postfix_of("64 / 4 / 2"), "64 4 / 2 /");
}

#[test]
fn parentheses_without_spaces() {
    assert_value("((1 + 2) * (3 + 4))", 21.0);
    assert_value("(((5)))", 5.0);
    assert_failure("2*(3+4)", &ExprError::InvalidToken { token: "2*".to_string() });
    assert_eq!(postfix_of("((1 + 2) * (3 + 4))"), "1 2 + 3 4 + *");
}

#[test]
fn decimal_literals() {
    assert_value("1.5 + 2.25", 3.75);
    assert_value(".5 * 4", 2.0);
    assert_value("7. / 2", 3.5);
    assert_value("0.1 + 0.2", 0.3);
}

#[test]
fn tokenizer_pads_parentheses() {
    assert_eq!(split_fragments("(1+2)"), vec!["(", "1+2", ")"]);
    assert_eq!(split_fragments("\t( 3 )\n"), vec!["(", "3", ")"]);
    assert!(split_fragments("   ").is_empty());
    assert_eq!(tokenize("(4 / 2)").unwrap(),
               vec![Token::LParen,
                    Token::Number(4.0),
                    Token::Operator(Operator::Div),
                    Token::Number(2.0),
                    Token::RParen]);
}

#[test]
fn postfix_evaluation_is_repeatable() {
    let postfix = to_postfix(tokenize("(1.5 + 2) * 3 - 4 / 8").unwrap()).unwrap();
    let first = evaluate_postfix(&postfix).unwrap();

    for _ in 0..3 {
        assert_eq!(evaluate_postfix(&postfix).unwrap(), first);
    }
    assert_eq!(first, 10.0);
}

#[test]
fn division_by_zero_is_error() {
    assert_failure("5 / 0", &ExprError::DivisionByZero);
    assert_failure("1 / (2 - 2)", &ExprError::DivisionByZero);
    assert_eq!(ExprError::DivisionByZero.to_string(), "Division by zero");
}

#[test]
fn malformed_numbers_are_invalid_tokens() {
    assert_failure("3.4.5 + 1", &ExprError::InvalidToken { token: "3.4.5".to_string() });
    assert_failure("2+3", &ExprError::InvalidToken { token: "2+3".to_string() });
    assert_failure("x * 2", &ExprError::InvalidToken { token: "x".to_string() });
    assert_failure("2 ^ 3", &ExprError::InvalidToken { token: "^".to_string() });
    assert_failure(". + 1", &ExprError::InvalidToken { token: ".".to_string() });
}

#[test]
fn unbalanced_parentheses_are_errors() {
    assert_failure("(1 + 2", &ExprError::UnbalancedParens);
    assert_failure("1 + 2)", &ExprError::UnbalancedParens);
    assert_failure(")(", &ExprError::UnbalancedParens);
}

#[test]
fn missing_operands_and_operators() {
    assert_failure("1 +", &ExprError::MissingOperand { operator: Operator::Add });
    assert_failure("* 2", &ExprError::MissingOperand { operator: Operator::Mul });
    assert_failure("- 4", &ExprError::MissingOperand { operator: Operator::Sub });
    assert_failure("2 3", &ExprError::MissingOperator { remaining: 2 });
    assert_failure("()", &ExprError::EmptyExpression);
}
