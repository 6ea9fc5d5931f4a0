use std::f64::consts::PI;

use trigcalc::{
    ast::{BinaryOperator, Expr},
    error::{EvalError, ParseError},
    evaluate,
    interpreter::{
        evaluator::core::eval,
        lexer::{Token, TokenKind},
        parser::{DEFAULT_MAX_DEPTH, Parser, ParserConfig, TrailingTokens, parse, parse_with},
    },
};

const TOLERANCE: f64 = 1e-12;

fn value_of(src: &str) -> f64 {
    match evaluate(src, &ParserConfig::default()) {
        Ok(v) => v,
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_value(src: &str, expected: f64) {
    let actual = value_of(src);
    assert!((actual - expected).abs() <= TOLERANCE,
            "{src:?} evaluated to {actual}, expected {expected}");
}

fn assert_failure(src: &str) {
    if evaluate(src, &ParserConfig::default()).is_ok() {
        panic!("Expression {src:?} succeeded but was expected to fail")
    }
}

fn parse_error(src: &str) -> ParseError {
    match parse(src) {
        Ok(expr) => panic!("{src:?} parsed as {expr} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("1+2", 3.0);
    assert_value("7*9", 63.0);
    assert_value("8-5", 3.0);
    assert_value("10/4", 2.5);
    assert_value("2^10", 1024.0);
    assert_value("  12 +\t30\n", 42.0);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_value("2+3*4", 14.0);
    assert_value("2*3+4", 10.0);
    assert_value("2*3^2", 18.0);
    assert_value("1+2^3*2", 17.0);
}

#[test]
fn parentheses_override_precedence() {
    assert_value("(2+3)*4", 20.0);
    assert_value("2*(3+4)", 14.0);
    assert_value("((((5))))", 5.0);
    assert_value("(2^3)^(1+1)", 64.0);
}

#[test]
fn every_tier_is_left_associative() {
    assert_value("10-4-3", 3.0);
    assert_value("8/2/2", 2.0);
    // Exponentiation groups to the left as well: (2^3)^2.
    assert_value("2^3^2", 64.0);
    assert_eq!(parse("2^3^2").unwrap().to_string(), "((2 ^ 3) ^ 2)");
    assert_eq!(parse("1-2+3").unwrap().to_string(), "((1 - 2) + 3)");
}

#[test]
fn tree_shape_for_mixed_operators() {
    let expected = Expr::binary(BinaryOperator::Add,
                                Expr::NumericLiteral(2.0),
                                Expr::binary(BinaryOperator::Mul,
                                             Expr::NumericLiteral(3.0),
                                             Expr::NumericLiteral(4.0)));
    assert_eq!(parse("2+3*4").unwrap(), expected);
}

#[test]
fn trigonometric_functions_use_radians() {
    assert_value("sin(0)", 0.0);
    assert_value("cos(0)", 1.0);
    assert_value("tan(0)", 0.0);
    assert_value("asin(1)*2", PI);
    assert_value("acos(1)", 0.0);
    assert_value("atan(1)*4", PI);
    assert_value("sin(cos(0)-1)", 0.0);
}

#[test]
fn default_driver_expression() {
    assert_value("(sin(3)+2)*7^2", (3.0_f64.sin() + 2.0) * 49.0);
}

#[test]
fn function_argument_is_a_full_expression() {
    let expr = parse("cos(1+2*3)").unwrap();
    assert_eq!(expr.to_string(), "cos(1 + (2 * 3))");
    assert_value("cos(1+2*3)", 7.0_f64.cos());
}

#[test]
fn floating_point_edge_cases_are_not_errors() {
    assert!(value_of("1/0").is_infinite());
    assert!(value_of("0/0").is_nan());
    assert!(value_of("asin(2)").is_nan());
    assert_value("4^(1/2)", 2.0);
    assert_value("2^(0-1)", 0.5);
}

#[test]
fn variable_always_evaluates_to_nan() {
    assert!(value_of("x").is_nan());
    assert!(value_of("x+1").is_nan());
    assert!(value_of("sin(x)*0").is_nan());
    assert_eq!(parse("x").unwrap(), Expr::Identifier('x'));
}

#[test]
fn evaluation_is_deterministic() {
    let expr = parse("(sin(3)+2)*7^2/atan(5)-cos(2^3^2)").unwrap();
    let first = eval(&expr).unwrap();
    for _ in 0..10 {
        assert_eq!(eval(&expr).unwrap().to_bits(), first.to_bits());
        let reparsed = parse("(sin(3)+2)*7^2/atan(5)-cos(2^3^2)").unwrap();
        assert_eq!(eval(&reparsed).unwrap().to_bits(), first.to_bits());
    }
}

#[test]
fn unknown_characters_are_rejected() {
    assert_eq!(parse_error("2+@"), ParseError::InvalidCharacter { position: 2 });
    assert_eq!(parse_error("3.5"), ParseError::InvalidCharacter { position: 1 });
    assert_eq!(parse_error("1,2"), ParseError::InvalidCharacter { position: 1 });
    // Checked before parsing, so it wins over the grammar error earlier on.
    assert_eq!(parse_error("+ 1 $"), ParseError::InvalidCharacter { position: 4 });
}

#[test]
fn unbalanced_parentheses_are_errors() {
    assert_eq!(parse_error("(2+3"), ParseError::ExpectedClosingParen { position: 4 });
    assert_eq!(parse_error("sin(1"), ParseError::ExpectedClosingParen { position: 5 });
    assert_eq!(parse_error("(2 3)"), ParseError::ExpectedClosingParen { position: 3 });
    assert_eq!(parse_error("(("), ParseError::UnexpectedEndOfInput { position: 2 });
    assert_eq!(parse_error("2+3)"),
               ParseError::UnexpectedTrailingTokens { token:    ")".to_string(),
                                                      position: 3, });
}

#[test]
fn grammar_errors() {
    assert_eq!(parse_error(""), ParseError::UnexpectedEndOfInput { position: 0 });
    assert_eq!(parse_error("2+"), ParseError::UnexpectedEndOfInput { position: 2 });
    assert_eq!(parse_error("2++3"),
               ParseError::UnexpectedToken { token:    "+".to_string(),
                                             position: 2, });
    assert_eq!(parse_error("-1"),
               ParseError::UnexpectedToken { token:    "-".to_string(),
                                             position: 0, });
    assert_eq!(parse_error("sin 3"),
               ParseError::UnexpectedToken { token:    "3".to_string(),
                                             position: 4, });
    assert_eq!(parse_error("()"),
               ParseError::UnexpectedToken { token:    ")".to_string(),
                                             position: 1, });
}

#[test]
fn malformed_number_lexeme() {
    let tokens = vec![Token::new(TokenKind::Number, "1_000", 0)];
    let err = Parser::new(tokens, ParserConfig::default()).parse().unwrap_err();
    assert_eq!(err,
               ParseError::InvalidNumber { lexeme:   "1_000".to_string(),
                                           position: 0, });
}

#[test]
fn literals_beyond_f64_range_are_rejected() {
    let huge = "9".repeat(400);
    assert_eq!(parse_error(&huge),
               ParseError::LiteralTooLarge { lexeme:   huge.clone(),
                                             position: 0, });
    assert_failure(&format!("{huge}-{huge}"));
    assert_failure(&format!("sin({huge})"));

    let large = format!("1{}", "0".repeat(300));
    assert_eq!(value_of(&large), 1e300);
}

fn chain(terms: usize) -> String {
    vec!["1"; terms].join("+")
}

fn nested(levels: usize) -> String {
    format!("{}1{}", "(".repeat(levels), ")".repeat(levels))
}

#[test]
fn operator_chains_stop_at_the_depth_limit() {
    let limit = DEFAULT_MAX_DEPTH;
    let at_limit = f64::from(u32::try_from(limit).unwrap());
    assert_value(&chain(limit), at_limit);
    assert_eq!(parse_error(&chain(limit + 1)),
               ParseError::NestingTooDeep { limit,
                                            position: 2 * limit - 1 });
    assert!(matches!(parse_error(&chain(200_000)),
                     ParseError::NestingTooDeep { .. }));
}

#[test]
fn parenthesis_nesting_stops_at_the_depth_limit() {
    let limit = DEFAULT_MAX_DEPTH;
    assert_value(&nested(limit), 1.0);
    assert_eq!(parse_error(&nested(limit + 1)),
               ParseError::NestingTooDeep { limit,
                                            position: limit });
    assert!(matches!(parse_error(&nested(50_000)),
                     ParseError::NestingTooDeep { .. }));
    assert_failure(&"sin(".repeat(10_000));
}

#[test]
fn depth_limit_is_configurable() {
    let shallow = ParserConfig { max_depth: 3,
                                 ..ParserConfig::default() };

    assert!(parse_with("1+2+3", &shallow).is_ok());
    assert_eq!(parse_with("1+2+3+4", &shallow),
               Err(ParseError::NestingTooDeep { limit:    3,
                                                position: 5, }));
    assert!(parse_with("sin(cos(1))", &shallow).is_ok());
    assert!(parse_with("sin(cos(tan(1)))", &shallow).is_err());
    assert!(parse_with("((((1))))", &shallow).is_err());
}

#[test]
fn trailing_tokens_are_rejected_by_default() {
    assert_eq!(parse_error("1+2 3"),
               ParseError::UnexpectedTrailingTokens { token:    "3".to_string(),
                                                      position: 4, });
    assert_eq!(parse_error("x sin(0)"),
               ParseError::UnexpectedTrailingTokens { token:    "sin".to_string(),
                                                      position: 2, });
    assert_failure("(1) (2)");
}

#[test]
fn trailing_tokens_can_be_ignored() {
    let lenient = ParserConfig { trailing_tokens: TrailingTokens::Ignore,
                                  ..ParserConfig::default() };

    assert_eq!(parse_with("1+2 3", &lenient).unwrap().to_string(), "(1 + 2)");
    assert_eq!(evaluate("2*3)))", &lenient).unwrap(), 6.0);
    assert_eq!(evaluate("4 5 6", &lenient).unwrap(), 4.0);
    // Only leftovers are forgiven; the expression itself must still be valid.
    assert!(parse_with("1+", &lenient).is_err());
    assert!(parse_with("1 @", &lenient).is_err());
}

#[test]
fn unknown_functions_fail_at_evaluation() {
    let expr = parse("sqrt(4)").unwrap();
    assert_eq!(eval(&expr),
               Err(EvalError::UnknownFunction { name: "sqrt".to_string() }));
    assert_failure("1+exp(1)");
    assert_failure("SIN(0)");
}

#[test]
fn error_messages_mention_the_problem() {
    let err = evaluate("sqrt(4)", &ParserConfig::default()).unwrap_err();
    assert!(err.to_string().contains("sqrt"));

    let err = evaluate("(1", &ParserConfig::default()).unwrap_err();
    assert!(err.to_string().contains("')'"));
}
