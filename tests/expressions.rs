use summa::{
    error::{EvalError, ParseError, RuntimeError},
    evaluate,
    interpreter::{evaluator::eval, lexer::tokenize, parser::parse_expression},
};

fn assert_evaluates(src: &str, expected: i64) {
    match evaluate(src) {
        Ok(value) => {
            assert_eq!(value, expected, "'{src}' evaluated to {value}, expected {expected}");
        },
        Err(e) => panic!("'{src}' failed to evaluate: {e}"),
    }
}

fn parse_failure(src: &str) -> ParseError {
    match evaluate(src) {
        Ok(value) => panic!("'{src}' evaluated to {value} but was expected to fail"),
        Err(EvalError::Parse(e)) => e,
        Err(EvalError::Runtime(e)) => panic!("'{src}' failed at runtime instead of parsing: {e}"),
    }
}

fn runtime_failure(src: &str) -> RuntimeError {
    match evaluate(src) {
        Ok(value) => panic!("'{src}' evaluated to {value} but was expected to fail"),
        Err(EvalError::Runtime(e)) => e,
        Err(EvalError::Parse(e)) => panic!("'{src}' failed to parse instead of evaluating: {e}"),
    }
}

#[test]
fn addition_and_subtraction() {
    assert_evaluates("1+2", 3);
    assert_evaluates("13+4", 17);
    assert_evaluates("8-5", 3);
    assert_evaluates("5-8", -3);
    assert_evaluates("0+0", 0);
}

#[test]
fn bare_literal_evaluates_to_itself() {
    assert_evaluates("42", 42);
    assert_evaluates("0", 0);
    assert_evaluates("007", 7);
}

#[test]
fn left_to_right_without_precedence() {
    assert_evaluates("(13+4)-(12+1)", 4);
    assert_evaluates("(1-2)-(3+4)", -8);
}

#[test]
fn arbitrary_nesting_depth() {
    assert_evaluates("((1+2))", 3);
    assert_evaluates("(((42)))", 42);
    assert_evaluates("(1+(2+3))", 6);
    assert_evaluates("(1+(2+(3+4)))", 10);
    assert_evaluates("((1+2)+(3+4))", 10);
}

#[test]
fn whitespace_is_ignored() {
    assert_evaluates(" 1 + 2 ", 3);
    assert_evaluates("\t(13 + 4)\n- (12+1)\n", 4);
}

#[test]
fn unmatched_parenthesis_is_rejected() {
    assert!(matches!(parse_failure("(1+2"),
                     ParseError::UnmatchedParenthesis { open_index: 0 }));
    assert!(matches!(parse_failure("((1+2)"),
                     ParseError::UnmatchedParenthesis { open_index: 0 }));
    assert!(matches!(parse_failure("1+(2"),
                     ParseError::UnmatchedParenthesis { open_index: 2 }));
}

#[test]
fn unbalanced_closing_parenthesis_is_rejected() {
    assert!(matches!(parse_failure(")"), ParseError::UnexpectedToken { index: 0, .. }));
    assert!(matches!(parse_failure("1)2"), ParseError::UnexpectedToken { index: 1, .. }));
}

#[test]
fn invalid_character_is_rejected() {
    assert!(matches!(parse_failure("1+a"),
                     ParseError::InvalidCharacter { character: 'a',
                                                    index:     2, }));
    assert!(matches!(parse_failure("2*3"),
                     ParseError::InvalidCharacter { character: '*',
                                                    index:     1, }));
}

#[test]
fn consecutive_operators_are_rejected() {
    // The operator slot is never silently overwritten, so `1+-2` is not
    // leniently read as `1-2`.
    assert!(matches!(parse_failure("1+-2"), ParseError::UnexpectedToken { index: 2, .. }));
    assert!(matches!(parse_failure("1+2-3"), ParseError::UnexpectedToken { index: 3, .. }));
}

#[test]
fn operand_without_free_slot_is_rejected() {
    assert!(matches!(parse_failure("1 2"), ParseError::UnexpectedToken { index: 2, .. }));
    assert!(matches!(parse_failure("(1)(2)"), ParseError::UnexpectedToken { index: 3, .. }));
}

#[test]
fn truncated_input_is_rejected() {
    assert!(matches!(parse_failure(""), ParseError::UnexpectedEndOfInput { .. }));
    assert!(matches!(parse_failure("   "), ParseError::UnexpectedEndOfInput { .. }));
    assert!(matches!(parse_failure("1+"), ParseError::UnexpectedEndOfInput { .. }));
    assert!(matches!(parse_failure("()"), ParseError::UnexpectedEndOfInput { .. }));
    assert!(matches!(parse_failure("(1+)"), ParseError::UnexpectedEndOfInput { .. }));
}

#[test]
fn oversized_literal_is_rejected_by_the_lexer() {
    assert!(matches!(parse_failure("9223372036854775808"),
                     ParseError::NumericOverflow { .. }));
}

#[test]
fn arithmetic_overflow_is_rejected_by_the_evaluator() {
    assert!(matches!(runtime_failure("9223372036854775807+1"),
                     RuntimeError::NumericOverflow { .. }));
    assert!(matches!(runtime_failure("(0-9223372036854775807)-2"),
                     RuntimeError::NumericOverflow { .. }));
}

#[test]
fn largest_literal_still_evaluates() {
    assert_evaluates("9223372036854775807", i64::MAX);
    assert_evaluates("9223372036854775807-1", i64::MAX - 1);
}

#[test]
fn parsing_and_evaluation_are_deterministic() {
    let tokens = tokenize("(1+(2+3))-4").expect("tokenizing failed");

    let first = parse_expression(&tokens).expect("parsing failed");
    let second = parse_expression(&tokens).expect("parsing failed");
    assert_eq!(first, second, "same tokens parsed to different trees");

    let once = eval(&first).expect("evaluation failed");
    let twice = eval(&first).expect("evaluation failed");
    assert_eq!(once, 2);
    assert_eq!(once, twice, "re-evaluating the same tree changed the result");
}
