use crate::plural::PluralOperands;
use crate::plural::expr::{ExprError, evaluate};

fn eval(source: &str, number: f64) -> Result<f64, ExprError> {
    evaluate(source, &PluralOperands::from_f64(number))
}

#[test]
fn arithmetic_precedence() {
    assert_eq!(eval("1 + 2 * 3", 0.0), Ok(7.0));
    assert_eq!(eval("(1 + 2) * 3", 0.0), Ok(9.0));
    assert_eq!(eval("10 - 4 - 3", 0.0), Ok(3.0));
    assert_eq!(eval("-2 + 5", 0.0), Ok(3.0));
    assert_eq!(eval("17 % 5 * 2", 0.0), Ok(4.0));
}

#[test]
fn comparisons_yield_zero_or_one() {
    assert_eq!(eval("n == 3", 3.0), Ok(1.0));
    assert_eq!(eval("n != 3", 3.0), Ok(0.0));
    assert_eq!(eval("n >= 3", 2.0), Ok(0.0));
    assert_eq!(eval("n < 3", 2.0), Ok(1.0));
}

#[test]
fn logical_operators_bind_looser_than_comparison() {
    assert_eq!(eval("n == 1 || n == 2 && n == 3", 1.0), Ok(1.0));
    assert_eq!(eval("(n == 1 || n == 2) && n == 3", 1.0), Ok(0.0));
    assert_eq!(eval("i % 10 == 1 && i % 100 != 11", 21.0), Ok(1.0));
    assert_eq!(eval("i % 10 == 1 && i % 100 != 11", 11.0), Ok(0.0));
}

#[test]
fn operands_are_bound() {
    assert_eq!(eval("i", 2.5), Ok(2.0));
    assert_eq!(eval("v", 2.5), Ok(1.0));
    assert_eq!(eval("t", 2.5), Ok(5.0));
    assert_eq!(eval("n", -4.0), Ok(4.0));
}

#[test]
fn division_by_zero_is_zero() {
    assert_eq!(eval("5 / 0", 0.0), Ok(0.0));
    assert_eq!(eval("5 % 0", 0.0), Ok(0.0));
    assert_eq!(eval("n % v", 3.0), Ok(0.0));
}

#[test]
fn malformed_expressions_fail() {
    assert_eq!(eval("x == 1", 0.0), Err(ExprError::UnknownOperand('x')));
    assert_eq!(eval("n ==", 0.0), Err(ExprError::UnexpectedEnd));
    assert_eq!(eval("(n == 1", 0.0), Err(ExprError::UnexpectedEnd));
    assert_eq!(eval("n == 1 2", 0.0), Err(ExprError::UnexpectedToken(7)));
    assert_eq!(eval("n $ 1", 0.0), Err(ExprError::InvalidToken(2)));
}

#[test]
fn comparisons_do_not_chain() {
    assert_eq!(eval("1 < 2 < 3", 0.0), Err(ExprError::UnexpectedToken(6)));
}
