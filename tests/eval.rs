use calculator::lexer::insert_implicit_multiplication;
use calculator::{evaluate, EvalError, NumericMode, Value};
use rstest::rstest;

#[rstest]
#[case("2+3*4", 14)]
#[case("(2+3)*4", 20)]
#[case("2(3+4)", 14)]
#[case("(1+2)(3+4)", 21)]
#[case("--5", 5)]
#[case("-(-5)", 5)]
#[case("-3+4", 1)]
#[case("7/2", 3)]
#[case("-7/2", -3)]
#[case("10%4", 2)]
#[case("2*-3", -6)]
#[case("12", 12)]
#[case("((((1))))", 1)]
#[case("1-2-3", -4)]
#[case("100/10/5", 2)]
fn integer_mode(#[case] expression: &str, #[case] expected: i64) {
    assert_eq!(
        evaluate(expression, NumericMode::Integer),
        Ok(Value::Integer(expected))
    );
}

#[rstest]
#[case("7.0/2.0", 3.5)]
#[case("1.5+2.5", 4.0)]
#[case(".5*2", 1.0)]
#[case("2.", 2.0)]
#[case("2(3+4)", 14.0)]
#[case("-1.5", -1.5)]
#[case("7.5%2", 1.5)]
fn float_mode(#[case] expression: &str, #[case] expected: f64) {
    assert_eq!(
        evaluate(expression, NumericMode::Float),
        Ok(Value::Float(expected))
    );
}

/// With no fractional literals, both modes compute the same number.
#[rstest]
#[case("2+3*4")]
#[case("(1+2)(3+4)")]
#[case("--5")]
#[case("10%4+6*2")]
#[case("1-2-3")]
fn modes_agree_on_integer_literals(#[case] expression: &str) {
    let Ok(Value::Integer(i)) = evaluate(expression, NumericMode::Integer) else {
        panic!("integer evaluation of {expression:?} failed");
    };
    let Ok(Value::Float(f)) = evaluate(expression, NumericMode::Float) else {
        panic!("float evaluation of {expression:?} failed");
    };
    assert_eq!(i as f64, f);
}

#[test]
fn division_by_zero() {
    assert!(matches!(
        evaluate("5/0", NumericMode::Integer),
        Err(EvalError::DivisionByZero { .. })
    ));
    assert!(matches!(
        evaluate("5.0/0.0", NumericMode::Float),
        Err(EvalError::DivisionByZero { .. })
    ));
    // A computed zero divisor is caught too, not just a literal one.
    assert!(matches!(
        evaluate("1/(2-2)", NumericMode::Integer),
        Err(EvalError::DivisionByZero { .. })
    ));
}

#[test]
fn modulo_by_zero() {
    assert!(matches!(
        evaluate("5%0", NumericMode::Integer),
        Err(EvalError::ModuloByZero { .. })
    ));
    assert!(matches!(
        evaluate("5.0%0.0", NumericMode::Float),
        Err(EvalError::ModuloByZero { .. })
    ));
}

#[test]
fn unclosed_parenthesis() {
    assert!(matches!(
        evaluate("(1+2", NumericMode::Integer),
        Err(EvalError::MissingClosingParenthesis { .. })
    ));
    assert!(matches!(
        evaluate("((1+2)", NumericMode::Integer),
        Err(EvalError::MissingClosingParenthesis { .. })
    ));
}

#[test]
fn trailing_input() {
    assert!(matches!(
        evaluate("1+2)", NumericMode::Integer),
        Err(EvalError::TrailingInput { .. })
    ));
    assert!(matches!(
        evaluate("(1)2", NumericMode::Integer),
        Err(EvalError::TrailingInput { .. })
    ));
}

#[test]
fn unexpected_end_of_input() {
    assert!(matches!(
        evaluate("1+", NumericMode::Integer),
        Err(EvalError::UnexpectedEndOfInput)
    ));
    assert!(matches!(
        evaluate("", NumericMode::Integer),
        Err(EvalError::UnexpectedEndOfInput)
    ));
    assert!(matches!(
        evaluate("-", NumericMode::Float),
        Err(EvalError::UnexpectedEndOfInput)
    ));
}

#[test]
fn unexpected_token() {
    assert!(matches!(
        evaluate("1*/2", NumericMode::Integer),
        Err(EvalError::UnexpectedToken { .. })
    ));
    assert!(matches!(
        evaluate("a+1", NumericMode::Integer),
        Err(EvalError::UnexpectedToken { .. })
    ));
}

#[test]
fn malformed_number() {
    // A fractional literal has no integer representation.
    assert!(matches!(
        evaluate("1.5", NumericMode::Integer),
        Err(EvalError::MalformedNumber { .. })
    ));
    // A bare decimal point scans as a number token but parses in neither mode.
    assert!(matches!(
        evaluate(".", NumericMode::Float),
        Err(EvalError::MalformedNumber { .. })
    ));
}

/// One expression driving every grammar rule through both numeric
/// instantiations: unary minus, parentheses, all five binary operators.
#[test]
fn all_rules_in_both_modes() {
    assert_eq!(
        evaluate("-(1+2)*3-10/2+7%4", NumericMode::Integer),
        Ok(Value::Integer(-11))
    );
    assert_eq!(
        evaluate("-(1+2)*3-10/2+7%4", NumericMode::Float),
        Ok(Value::Float(-11.0))
    );
}

/// Error spans index into the preprocessed expression, so a caller can
/// recompute that text with `insert_implicit_multiplication` and hand both
/// to a reporter.
#[test]
fn error_spans_index_the_preprocessed_expression() {
    let preprocessed = insert_implicit_multiplication("2(3+4");
    assert_eq!(preprocessed, "2*(3+4");

    let Err(EvalError::MissingClosingParenthesis { span }) =
        evaluate("2(3+4", NumericMode::Integer)
    else {
        panic!("expected a missing closing parenthesis error");
    };
    assert_eq!(
        &preprocessed[span.offset()..span.offset() + span.len()],
        "("
    );
    assert_eq!(span.offset(), 2);
}

/// Evaluation holds no state across calls, so repeated evaluation of the
/// same input is bit-identical.
#[test]
fn evaluation_is_deterministic() {
    for mode in [NumericMode::Integer, NumericMode::Float] {
        let first = evaluate("2(3+4)-10%3", mode);
        for _ in 0..10 {
            assert_eq!(evaluate("2(3+4)-10%3", mode), first);
        }
    }
}

/// Every string over the grammar's alphabet evaluates to a value or a typed
/// error; nothing panics. Exhaustively checks all strings up to length 3.
#[test]
fn tokenizable_input_never_panics() {
    let alphabet = ['1', '0', '.', '+', '-', '*', '/', '%', '(', ')'];

    let mut inputs = vec![String::new()];
    let mut frontier = vec![String::new()];
    for _ in 0..3 {
        let mut next = Vec::new();
        for prefix in &frontier {
            for c in alphabet {
                let mut s = prefix.clone();
                s.push(c);
                next.push(s);
            }
        }
        inputs.extend(next.iter().cloned());
        frontier = next;
    }

    for input in &inputs {
        let _ = evaluate(input, NumericMode::Integer);
        let _ = evaluate(input, NumericMode::Float);
    }
}
