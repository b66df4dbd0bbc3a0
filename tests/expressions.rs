use linecalc::{
    error::{ParseError, RuntimeError},
    evaluate,
};

fn eval_ok(src: &str) -> f64 {
    evaluate(src).unwrap_or_else(|e| panic!("Expression '{src}' failed: {e}"))
}

fn assert_failure(src: &str) {
    if evaluate(src).is_ok() {
        panic!("Expression '{src}' succeeded but was expected to fail")
    }
}

fn expect_parse_error(src: &str) -> ParseError {
    let err = match evaluate(src) {
        Ok(value) => panic!("Expression '{src}' evaluated to {value} but was expected to fail"),
        Err(e) => e,
    };

    *err.downcast::<ParseError>()
        .unwrap_or_else(|e| panic!("Expression '{src}' failed with a non-parse error: {e}"))
}

fn expect_runtime_error(src: &str) -> RuntimeError {
    let err = match evaluate(src) {
        Ok(value) => panic!("Expression '{src}' evaluated to {value} but was expected to fail"),
        Err(e) => e,
    };

    *err.downcast::<RuntimeError>()
        .unwrap_or_else(|e| panic!("Expression '{src}' failed with a non-runtime error: {e}"))
}

#[test]
fn single_operator_arithmetic() {
    assert_eq!(eval_ok("1 + 2"), 3.0);
    assert_eq!(eval_ok("8 - 5"), 3.0);
    assert_eq!(eval_ok("7 * 9"), 63.0);
    assert_eq!(eval_ok("10 / 2"), 5.0);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(eval_ok("2 + 3 * 4"), 14.0);
    assert_eq!(eval_ok("2 * 3 + 4"), 10.0);
    assert_eq!(eval_ok("10 - 2 * 3"), 4.0);
    assert_eq!(eval_ok("20 - 12 / 4"), 17.0);
}

#[test]
fn same_precedence_groups_left_to_right() {
    assert_eq!(eval_ok("10 - 2 - 3"), 5.0);
    assert_eq!(eval_ok("20 / 2 / 5"), 2.0);
    assert_eq!(eval_ok("100 - 10 - 20 - 30"), 40.0);
    assert_eq!(eval_ok("1 - 2 + 3"), 2.0);
}

#[test]
fn whitespace_is_insignificant() {
    assert_eq!(eval_ok("  2+3 "), 5.0);
    assert_eq!(eval_ok("2 + 3"), 5.0);
    assert_eq!(eval_ok("\t2  +\t3"), 5.0);
    assert_eq!(eval_ok("2+3\n"), 5.0);
}

#[test]
fn division_is_floating_point() {
    assert_eq!(eval_ok("7 / 2"), 3.5);
    assert_eq!(eval_ok("1 / 4"), 0.25);
}

#[test]
fn digit_runs_are_scanned_fully() {
    assert_eq!(eval_ok("123 + 1"), 124.0);
    assert_eq!(eval_ok("1000 * 1000"), 1_000_000.0);
    assert_eq!(eval_ok("9007199254740991 - 1"), 9_007_199_254_740_990.0);
}

#[test]
fn longer_operator_chains() {
    assert_eq!(eval_ok("14 + 2 * 3 - 6 / 2"), 17.0);
    assert_eq!(eval_ok("1 + 2 + 3 + 4"), 10.0);
    assert_eq!(eval_ok("2 * 3 * 4"), 24.0);
}

#[test]
fn zero_operands() {
    assert_eq!(eval_ok("0 + 0"), 0.0);
    assert_eq!(eval_ok("0 / 5"), 0.0);
    assert_eq!(eval_ok("0 * 9"), 0.0);
}

#[test]
fn evaluation_is_idempotent() {
    let first = eval_ok("6 * 7 - 2");
    let second = eval_ok("6 * 7 - 2");
    assert_eq!(first, second);
    assert_eq!(first, 40.0);
}

#[test]
fn division_by_zero_is_error() {
    assert!(matches!(expect_runtime_error("5 / 0"),
                     RuntimeError::DivisionByZero { .. }));
    assert_failure("2 + 8 / 0");
    assert_failure("0 / 0");
}

#[test]
fn division_by_zero_reports_operator_offset() {
    assert!(matches!(expect_runtime_error("5 / 0"),
                     RuntimeError::DivisionByZero { column: 2 }));
}

#[test]
fn unrecognized_character_is_error() {
    match expect_parse_error("2 + a") {
        ParseError::UnexpectedCharacter { found, column } => {
            assert_eq!(found, "a");
            assert_eq!(column, 4);
        },
        other => panic!("Expected an unrecognized-character error, got: {other}"),
    }
}

#[test]
fn missing_operand_is_error() {
    assert!(matches!(expect_parse_error("2 + "),
                     ParseError::UnexpectedEndOfInput { column: 4 }));
    assert!(matches!(expect_parse_error("2 +"),
                     ParseError::UnexpectedEndOfInput { column: 3 }));
    assert!(matches!(expect_parse_error("10 * 2 /"),
                     ParseError::UnexpectedEndOfInput { .. }));
}

#[test]
fn empty_input_is_error() {
    assert!(matches!(expect_parse_error(""),
                     ParseError::UnexpectedEndOfInput { column: 0 }));
    assert!(matches!(expect_parse_error("   "),
                     ParseError::UnexpectedEndOfInput { .. }));
}

#[test]
fn misplaced_operator_is_error() {
    assert!(matches!(expect_parse_error("* 2"),
                     ParseError::UnexpectedToken { .. }));
    assert!(matches!(expect_parse_error("2 + * 3"),
                     ParseError::UnexpectedToken { .. }));
    assert!(matches!(expect_parse_error("-5"),
                     ParseError::UnexpectedToken { .. }));
}

#[test]
fn trailing_tokens_are_rejected() {
    assert!(matches!(expect_parse_error("2 3"),
                     ParseError::UnexpectedTrailingTokens { column: 2, .. }));
    assert_failure("1 + 2 3");
}

#[test]
fn unsupported_syntax_is_rejected() {
    // Decimal points, parentheses and variables are not part of the grammar.
    assert!(matches!(expect_parse_error("1.5"),
                     ParseError::UnexpectedCharacter { .. }));
    assert!(matches!(expect_parse_error("(1 + 2)"),
                     ParseError::UnexpectedCharacter { column: 0, .. }));
    assert!(matches!(expect_parse_error("x + 1"),
                     ParseError::UnexpectedCharacter { .. }));
}

#[test]
fn oversized_literal_is_error() {
    // 2^53 is the first integer no longer exactly representable as f64.
    assert!(matches!(expect_parse_error("9007199254740992"),
                     ParseError::LiteralTooLarge { column: 0 }));
    // Beyond u64 as well.
    assert!(matches!(expect_parse_error("1 + 18446744073709551616"),
                     ParseError::LiteralTooLarge { column: 4 }));
}
