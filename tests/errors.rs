use mapa::{
    Error, ErrorKind, MathParser, Options,
    error::{ParseError, RuntimeError},
    get_result,
};

fn parse_error(src: &str) -> ParseError {
    match get_result(src, Options::default()) {
        Err(Error::Parse(e)) => e,
        other => panic!("Script '{src}' was expected to fail to parse, got {other:?}"),
    }
}

fn assert_at(src: &str, line: usize, column: usize) -> ParseError {
    let err = parse_error(src);
    let position = err.position();
    assert_eq!((position.line, position.column), (line, column), "script '{src}' failed with: {err}");
    err
}

#[test]
fn lexical_errors() {
    let err = assert_at("1 $ 2", 1, 3);
    assert_eq!(err, ParseError::UnexpectedCharacter { character: "$".to_string(),
                                                      position:  err.position(), });
    assert!(err.is_lexical());

    for (src, literal) in [("2jx", "2jx"), ("1.2.3", "1.2.3"), ("3x", "3x"), ("1.", "1.")] {
        match parse_error(src) {
            ParseError::MalformedLiteral { literal: found, .. } => assert_eq!(found, literal),
            e => panic!("Script '{src}' failed with {e}"),
        }
    }

    let err = get_result("1 + 2j3", Options::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Lex);
}

#[test]
fn misplaced_assignments() {
    let err = assert_at("x = y = 1", 1, 7);
    assert!(matches!(err, ParseError::MisplacedAssignment { .. }));

    let err = assert_at("(x = 1)", 1, 4);
    assert!(matches!(err, ParseError::MisplacedAssignment { .. }));

    let err = assert_at("1 = 2", 1, 3);
    assert!(matches!(err, ParseError::MisplacedAssignment { .. }));
}

#[test]
fn parentheses() {
    let err = assert_at("2 + 3)", 1, 6);
    assert!(matches!(err, ParseError::UnmatchedClosingParen { .. }));

    // Reported at the opening parenthesis.
    let err = assert_at("(1 + 2", 1, 1);
    assert!(matches!(err, ParseError::ExpectedClosingParen { .. }));
    let err = assert_at("x = 1\ny = 2 * (2; y", 2, 9);
    assert!(matches!(err, ParseError::ExpectedClosingParen { .. }));
    let err = assert_at("sin(1", 1, 4);
    assert!(matches!(err, ParseError::ExpectedClosingParen { .. }));

    assert!(matches!(parse_error("()"), ParseError::MissingOperand { .. }));
}

#[test]
fn missing_operands() {
    // At end of input the position is just past the last character.
    let err = assert_at("1 +", 1, 4);
    assert!(matches!(err, ParseError::MissingOperand { .. }));

    let err = assert_at("1 + * 2", 1, 5);
    assert!(matches!(err, ParseError::MissingOperand { .. }));

    let err = assert_at("x =", 1, 4);
    assert!(matches!(err, ParseError::MissingOperand { .. }));

    assert!(matches!(parse_error("2 *; 3"), ParseError::MissingOperand { .. }));
    assert!(matches!(parse_error("atan2(1,)"), ParseError::MissingOperand { .. }));
}

#[test]
fn unexpected_tokens() {
    let err = assert_at("1 2", 1, 3);
    assert_eq!(err, ParseError::UnexpectedToken { token:    "2".to_string(),
                                                  position: err.position(), });
    assert!(!err.is_lexical());

    let err = get_result("x y", Options::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Syntax);
}

#[test]
fn messages() {
    let message = |src: &str| get_result(src, Options::default()).unwrap_err().to_string();

    assert_eq!(message("1 $ 2"), "Error at line 1, column 3: Unexpected character '$'.");
    assert_eq!(message("(1"), "Error at line 1, column 1: Expected closing parenthesis ')' but none found.");
    assert_eq!(message("1\n2)"), "Error at line 2, column 2: Unmatched closing parenthesis ')'.");
    assert_eq!(message("1 1"), "Error at line 1, column 3: Unexpected token: 1.");
    assert_eq!(message("y"), RuntimeError::UndefinedVariable { name: "y".to_string() }.to_string());
}

#[test]
fn runtime_errors_carry_names() {
    let parser = MathParser::default();
    match parser.parse("sin(1, 2)") {
        Err(Error::Runtime(RuntimeError::Arity { name, .. })) => assert_eq!(name, "sin"),
        other => panic!("Expected an arity error, got {other:?}"),
    }
    match parser.parse("nope(1)") {
        Err(Error::Runtime(RuntimeError::UnknownFunction { name })) => assert_eq!(name, "nope"),
        other => panic!("Expected an unknown function error, got {other:?}"),
    }
}
