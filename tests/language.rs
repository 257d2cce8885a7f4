use std::{
    f64::consts::{E, FRAC_PI_2, FRAC_PI_4, PI},
    fs,
};

use mapa::{Binding, ErrorKind, MathParser, Options, Value, get_result};
use walkdir::WalkDir;

const COMPLEX: Options = Options { complex_mode:    true,
                                   allow_variables: true,
                                   allow_unknown:   false, };

fn eval_with(src: &str, options: Options) -> Value {
    match get_result(src, options) {
        Ok(Some(outcome)) => outcome.value()
                                    .unwrap_or_else(|| panic!("Script '{src}' stayed deferred: {outcome}")),
        Ok(None) => panic!("Script '{src}' produced no result"),
        Err(e) => panic!("Script '{src}' failed: {e}"),
    }
}

fn assert_value(src: &str, expected: f64) {
    assert_eq!(eval_with(src, Options::default()), Value::Real(expected), "script: {src}");
}

fn assert_close(src: &str, expected: f64) {
    let value = eval_with(src, Options::default()).as_real().unwrap();
    assert!((value - expected).abs() < 1e-12,
            "script '{src}' gave {value}, expected {expected}");
}

fn assert_complex(src: &str, expected: &str) {
    assert_eq!(eval_with(src, COMPLEX).to_string(), expected, "script: {src}");
}

fn assert_failure_with(src: &str, options: Options, kind: ErrorKind) {
    match get_result(src, options) {
        Ok(outcome) => panic!("Script '{src}' succeeded with {outcome:?} but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), kind, "script '{src}' failed with: {e}"),
    }
}

fn assert_failure(src: &str, kind: ErrorKind) {
    assert_failure_with(src, Options::default(), kind);
}

#[test]
fn script_files_work() {
    let mut count = 0;

    for entry in WalkDir::new("tests/scripts").into_iter()
                                              .filter_map(Result::ok)
                                              .filter(|e| {
                                                  e.path().extension().is_some_and(|ext| ext == "mapa")
                                              })
    {
        let path = entry.path();
        let script =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = fs::read_to_string(path.with_extension("expected"))
            .unwrap_or_else(|e| panic!("Missing expected output for {path:?}: {e}"));

        count += 1;
        let options = Options { complex_mode: path.to_string_lossy().contains("complex"),
                                allow_unknown: true,
                                ..Options::default() };
        match get_result(&script, options) {
            Ok(Some(outcome)) => assert_eq!(outcome.to_string(), expected.trim(), "script {path:?}"),
            Ok(None) => panic!("Script {path:?} produced no result"),
            Err(e) => panic!("Script {path:?} failed:\n{script}\nError: {e}"),
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

#[test]
fn precedence_and_associativity() {
    assert_value("1 + 2 * 3", 7.0);
    assert_value("(1 + 2) * 3", 9.0);
    assert_value("10 - 4 - 3", 3.0);
    assert_value("2 ^ 3 ^ 2", 512.0);
    assert_value("2 ** 3", 8.0);
    assert_value("-2 ^ 2", -4.0);
    assert_value("(-2) ^ 2", 4.0);
    assert_value("2 ^ -1", 0.5);
    assert_value("2 * -3", -6.0);
    assert_value("--3", 3.0);
    assert_value("+3 - +1", 2.0);
    assert_value("10 / 4", 2.5);
    assert_value("1+2*3**2", 19.0);
    assert_value("2**3**2", 512.0);
}

#[test]
fn roots() {
    assert_value("%2", std::f64::consts::SQRT_2);
    assert_value("%16", 4.0);
    assert_value("%16 + 1", 5.0);
    assert_close("2%9", 3.0);
    assert_close("3%27", 3.0);
    assert_close("%4%16", 4.0);
    assert_close("2%16^2", 16.0);
}

#[test]
fn literals() {
    assert_value(".5 + 1", 1.5);
    assert_value("2.5e2", 250.0);
    assert_value("1E-3 * 1000", 1.0);
}

#[test]
fn statements_and_variables() {
    assert_value("x = 3; y = x * 2; y + 1", 7.0);
    assert_value("x = 3\n\n x ^ 2\n", 9.0);
    assert_value("x = 2", 2.0);
    assert_value("x = 1; x = x + 1; x", 2.0);

    let parser = MathParser::default();
    parser.parse("a = 5").unwrap();
    assert_eq!(parser.variable("a"), Some(Binding::Value(Value::Real(5.0))));
    assert_eq!(parser.parse("a * 2").unwrap().unwrap().value(), Some(Value::Real(10.0)));
}

#[test]
fn separators_are_interchangeable() {
    let semicolons = MathParser::default();
    let newlines = MathParser::default();
    let first = semicolons.parse("x=1;y=2;r=%(x^2+y^2)").unwrap().unwrap();
    let second = newlines.parse("x=1\ny=2\nr=%(x^2+y^2)").unwrap().unwrap();

    assert_eq!(first.value(), second.value());
    assert_eq!(semicolons.environment().variables(), newlines.environment().variables());
}

#[test]
fn empty_programs() {
    assert!(get_result("", Options::default()).unwrap().is_none());
    assert!(get_result(" ;; \n\n ; ", Options::default()).unwrap().is_none());
}

#[test]
fn constants() {
    assert_value("pi", PI);
    assert_value("e", E);
    assert_value("pi = 3; pi", 3.0);

    let parser = MathParser::default();
    parser.set_constant("tau", 2.0 * PI);
    assert_eq!(parser.parse("tau / 2").unwrap().unwrap().value(), Some(Value::Real(PI)));
}

#[test]
fn real_functions() {
    assert_value("sin(0)", 0.0);
    assert_value("fabs(-5)", 5.0);
    assert_value("floor(2.7) + ceil(2.1)", 5.0);
    assert_value("sqrt(9)", 3.0);
    assert_value("pow(2, 10)", 1024.0);
    assert_close("log(e)", 1.0);
    assert_close("log(8, 2)", 3.0);
    assert_close("log10(1000)", 3.0);
    assert_close("atan2(1, 1)", FRAC_PI_4);
    assert_close("asin(1)", FRAC_PI_2);
    assert_close("1 + 2 * sin(30 * pi / 180)", 2.0);
}

#[test]
fn custom_functions() {
    let parser = MathParser::default();
    parser.register("double", mapa::Arity::Unary, |args: &[Value]| {
              Ok(Value::Real(args[0].as_real()? * 2.0))
          });
    parser.register("log", mapa::Arity::Unary, |_: &[Value]| Ok(Value::Real(42.0)));

    assert_eq!(parser.parse("double(4)").unwrap().unwrap().value(), Some(Value::Real(8.0)));
    assert_eq!(parser.parse("log(1)").unwrap().unwrap().value(), Some(Value::Real(42.0)));
    // The binary form survives overriding the unary one.
    let log = parser.parse("log(9, 3)").unwrap().unwrap().value().unwrap();
    assert!((log.as_real().unwrap() - 2.0).abs() < 1e-12);

    // Registration stays with its instance.
    assert_failure("double(4)", ErrorKind::UnknownFunction);
}

#[test]
fn real_domain_errors() {
    assert_failure("sqrt(-1)", ErrorKind::Domain);
    assert_failure("%-4", ErrorKind::Domain);
    assert_failure("(-8) ^ (1 / 3)", ErrorKind::Domain);
    assert_failure("3%-8", ErrorKind::Domain);
    assert_failure("log(0)", ErrorKind::Domain);
    assert_failure("asin(2)", ErrorKind::Domain);
    assert_failure("2j", ErrorKind::Domain);
    assert_failure("1 + 2i", ErrorKind::Domain);
    assert_value("(-8) ^ 2", 64.0);
}

#[test]
fn division_by_zero() {
    assert_failure("1 / 0", ErrorKind::DivisionByZero);
    assert_failure("0 ^ -1", ErrorKind::DivisionByZero);
    assert_failure("0 % 4", ErrorKind::DivisionByZero);
    assert_failure_with("1 / (0 * 1j)", COMPLEX, ErrorKind::DivisionByZero);
    assert_value("0 ^ 0", 1.0);
}

#[test]
fn name_and_call_errors() {
    assert_failure("y + 1", ErrorKind::UndefinedVariable);
    assert_failure("foo(1)", ErrorKind::UnknownFunction);
    assert_failure("sin(1, 2)", ErrorKind::Arity);
    assert_failure("log(1, 2, 3)", ErrorKind::Arity);
    assert_failure("atan2(1)", ErrorKind::Arity);
    assert_failure("sin()", ErrorKind::Arity);
    // The function is resolved before its arguments are evaluated.
    assert_failure("foo(1 / 0)", ErrorKind::UnknownFunction);
}

#[test]
fn variables_disabled() {
    let options = Options { allow_variables: false,
                            ..Options::default() };
    assert_eq!(eval_with("pi * 2", options), Value::Real(2.0 * PI));
    assert_eq!(eval_with("1 + 1", options), Value::Real(2.0));
    assert_failure_with("x = 1", options, ErrorKind::VariablesDisabled);
    assert_failure_with("x + 1", options, ErrorKind::VariablesDisabled);
    assert_failure_with("pi = 3", options, ErrorKind::VariablesDisabled);
}

#[test]
fn statements_run_in_order_without_rollback() {
    let parser = MathParser::default();
    assert!(parser.parse("a = 1; b = 1 / 0; c = 3").is_err());
    assert_eq!(parser.variable("a"), Some(Binding::Value(Value::Real(1.0))));
    assert_eq!(parser.variable("b"), None);
    assert_eq!(parser.variable("c"), None);
}

#[test]
fn syntax_errors_run_nothing() {
    let parser = MathParser::default();
    let err = parser.parse("a = 1; b = (2").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Syntax);
    assert_eq!(parser.variable("a"), None);
}

#[test]
fn instances_are_isolated() {
    let first = MathParser::default();
    let second = MathParser::default();
    first.parse("x = 1").unwrap();
    assert!(second.parse("x").is_err());

    first.clear_variables();
    assert!(first.parse("x").is_err());
    assert!(first.parse("pi").is_ok());
}

#[test]
fn complex_arithmetic() {
    assert_complex("(1 + 2j) * (3 - 1j)", "(5+5j)");
    assert_complex("2j * 2j", "(-4+0j)");
    assert_complex("1j ^ 2", "(-1+0j)");
    assert_complex("%-4", "2j");
    assert_complex("sqrt(-4)", "2j");
    assert_complex("abs(3 + 4j)", "5");
    assert_complex("rect(2, 0)", "(2+0j)");
    assert_complex("2 + 3", "5");

    let euler = eval_with("e ^ (pi * 1j) + 1", COMPLEX);
    assert!(euler.magnitude() < 1e-12, "got {euler}");

    let phase = eval_with("phase(1j)", COMPLEX).as_real().unwrap();
    assert!((phase - FRAC_PI_2).abs() < 1e-12);

    let cube_root = eval_with("(-8) ^ (1 / 3)", COMPLEX).as_complex();
    assert!((cube_root.real - 1.0).abs() < 1e-12);
    assert!((cube_root.imaginary - 3f64.sqrt()).abs() < 1e-12);
}

#[test]
fn complex_domain_rules() {
    assert_failure_with("log(0)", COMPLEX, ErrorKind::Domain);
    assert_failure_with("rect(1j, 0)", COMPLEX, ErrorKind::Domain);
    assert_failure_with("0j ^ -1", COMPLEX, ErrorKind::DivisionByZero);
    assert_complex("0j ^ 0", "(1+0j)");
    // Real-only functions are not part of the complex preset.
    assert_failure_with("floor(1.5)", COMPLEX, ErrorKind::UnknownFunction);
}
