use std::collections::{BTreeSet, HashMap};

use mapa::{
    DeferredExpression, ErrorKind, MathParser, Options, Value, error::RuntimeError, get_result,
    interpreter::value::complex::I,
};

fn unknown_parser() -> MathParser {
    MathParser::new(Options { allow_unknown: true,
                              ..Options::default() })
}

fn deferred(parser: &MathParser, src: &str) -> DeferredExpression {
    match parser.parse(src) {
        Ok(Some(outcome)) => outcome.as_deferred()
                                    .cloned()
                                    .unwrap_or_else(|| panic!("Script '{src}' evaluated to {outcome}")),
        Ok(None) => panic!("Script '{src}' produced no result"),
        Err(e) => panic!("Script '{src}' failed: {e}"),
    }
}

fn names(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(ToString::to_string).collect()
}

fn bindings(values: &[(&str, f64)]) -> HashMap<String, Value> {
    values.iter()
          .map(|(name, value)| ((*name).to_string(), Value::Real(*value)))
          .collect()
}

#[test]
fn unknown_names_defer() {
    let parser = unknown_parser();
    let expr = deferred(&parser, "x + 1");
    assert_eq!(expr.render(), "x + 1");
    assert_eq!(expr.undefined(), names(&["x"]));
    assert_eq!(expr.free_at_construction(), &names(&["x"]));
}

#[test]
fn unknown_names_fail_when_not_allowed() {
    let err = get_result("x + 1", Options::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UndefinedVariable);
}

#[test]
fn known_sub_expressions_are_kept_as_written() {
    let parser = unknown_parser();
    assert_eq!(deferred(&parser, "2 * 3 + x").render(), "2 * 3 + x");
    assert_eq!(deferred(&parser, "sin(0) * y").render(), "sin(0) * y");
}

#[test]
fn eval_with_bindings() {
    let parser = unknown_parser();
    let expr = deferred(&parser, "x * 2 + y");

    let outcome = expr.eval(&bindings(&[("x", 3.0), ("y", 1.0)])).unwrap();
    assert_eq!(outcome.value(), Some(Value::Real(7.0)));

    // Bindings are one-shot.
    assert!(parser.variable("x").is_none());
    assert_eq!(expr.undefined(), names(&["x", "y"]));
}

#[test]
fn eval_matches_direct_evaluation() {
    let parser = unknown_parser();
    let expr = deferred(&parser, "1+2*sin(x*pi/180)");
    assert_eq!(expr.undefined(), names(&["x"]));

    let direct = MathParser::default().parse("1+2*sin(2*pi/180)").unwrap().unwrap().value();
    let first = expr.eval(&bindings(&[("x", 2.0)])).unwrap().value();
    let second = expr.eval(&bindings(&[("x", 2.0)])).unwrap().value();
    assert_eq!(first, direct);
    assert_eq!(first, second);
}

#[test]
fn partial_bindings_stay_deferred() {
    let parser = unknown_parser();
    let expr = deferred(&parser, "x + y");

    let outcome = expr.eval(&bindings(&[("x", 1.0)])).unwrap();
    let residual = outcome.as_deferred().unwrap();
    assert_eq!(residual.render(), "1 + y");
    assert_eq!(residual.undefined(), names(&["y"]));

    let outcome = residual.eval(&bindings(&[("y", 2.0)])).unwrap();
    assert_eq!(outcome.value(), Some(Value::Real(3.0)));
}

#[test]
fn bindings_reach_into_stored_expressions() {
    let parser = unknown_parser();
    let expr = deferred(&parser, "b + y");
    parser.parse("b = x * 2").unwrap();

    let outcome = expr.eval(&bindings(&[("x", 3.0)])).unwrap();
    let residual = outcome.as_deferred().unwrap();
    assert_eq!(residual.render(), "3 * 2 + y");
    assert_eq!(residual.free_at_construction(), &names(&["y"]));
    assert_eq!(residual.undefined(), names(&["y"]));

    let outcome = residual.eval(&bindings(&[("y", 1.0)])).unwrap();
    assert_eq!(outcome.value(), Some(Value::Real(7.0)));

    // Stored expressions the bindings do not touch stay as references.
    let expr = deferred(&parser, "c * z + u");
    parser.parse("c = v + 1; v = 4").unwrap();
    let outcome = expr.eval(&bindings(&[("z", 2.0)])).unwrap();
    assert_eq!(outcome.to_string(), "c * 2 + u");
}

#[test]
fn non_finite_bindings_are_rejected() {
    let parser = unknown_parser();
    let expr = deferred(&parser, "x * y");

    for value in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
        let err = expr.eval(&bindings(&[("x", value)])).unwrap_err();
        assert!(matches!(err, RuntimeError::Domain { .. }), "binding {value} gave {err}");
    }
}

#[test]
fn bindings_shadow_variables_and_constants() {
    let parser = unknown_parser();
    parser.parse("k = 10").unwrap();
    let expr = deferred(&parser, "k + pi + z");

    let outcome = expr.eval(&bindings(&[("k", 1.0), ("pi", 2.0), ("z", 3.0)])).unwrap();
    assert_eq!(outcome.value(), Some(Value::Real(6.0)));
}

#[test]
fn later_assignments_are_observed() {
    let parser = unknown_parser();
    let expr = deferred(&parser, "a * b");
    assert_eq!(expr.undefined(), names(&["a", "b"]));

    parser.parse("a = 4").unwrap();
    assert_eq!(expr.undefined(), names(&["b"]));
    // What was unbound at construction does not change.
    assert_eq!(expr.free_at_construction(), &names(&["a", "b"]));

    parser.parse("b = 0.5").unwrap();
    assert!(expr.undefined().is_empty());
    assert_eq!(expr.eval(&HashMap::new()).unwrap().value(), Some(Value::Real(2.0)));
}

#[test]
fn stored_expressions_resolve_live() {
    let parser = unknown_parser();
    parser.parse("g = y * 2").unwrap();
    assert!(parser.parse("g").unwrap().unwrap().is_deferred());

    parser.parse("y = 4").unwrap();
    assert_eq!(parser.parse("g").unwrap().unwrap().value(), Some(Value::Real(8.0)));

    parser.parse("y = 5").unwrap();
    assert_eq!(parser.parse("g + 1").unwrap().unwrap().value(), Some(Value::Real(11.0)));
}

#[test]
fn stored_expressions_expand_in_residuals() {
    let parser = unknown_parser();
    parser.parse("f = sin(x)").unwrap();

    let expr = deferred(&parser, "f + 1");
    assert_eq!(expr.render(), "sin(x) + 1");
    assert_eq!(expr.undefined(), names(&["x"]));

    parser.parse("x = 0").unwrap();
    assert!(expr.undefined().is_empty());
    assert_eq!(expr.eval(&HashMap::new()).unwrap().value(), Some(Value::Real(1.0)));

    let value = |src: &str| parser.parse(src).unwrap().unwrap().value();
    assert_eq!(value("f"), Some(Value::Real(0.0)));
    assert_eq!(value("x = pi / 2; f"), Some(Value::Real(1.0)));
}

#[test]
fn undefined_follows_stored_expressions() {
    let parser = unknown_parser();
    parser.parse("f = u + v").unwrap();
    let expr = deferred(&parser, "f * w");
    assert_eq!(expr.undefined(), names(&["u", "v", "w"]));

    parser.parse("u = 1; v = 2").unwrap();
    assert_eq!(expr.undefined(), names(&["w"]));
}

#[test]
fn self_reference_does_not_loop() {
    let parser = unknown_parser();
    parser.parse("h = h + 1").unwrap();

    let expr = deferred(&parser, "h");
    assert_eq!(expr.render(), "h + 1");
    assert_eq!(expr.undefined(), names(&["h"]));

    // 'q' ends up bound to itself through 'p'.
    parser.parse("p = q; q = p").unwrap();
    let expr = deferred(&parser, "p");
    assert_eq!(expr.render(), "q");
    assert_eq!(expr.undefined(), names(&["q"]));
}

#[test]
fn domain_errors_surface_on_eval() {
    let parser = unknown_parser();
    let expr = deferred(&parser, "%x");

    let err = expr.eval(&bindings(&[("x", -1.0)])).unwrap_err();
    assert!(matches!(err, RuntimeError::Domain { .. }));

    // Complex values are rejected in real mode.
    let complex = HashMap::from([("x".to_string(), Value::Complex(I))]);
    assert!(matches!(expr.eval(&complex), Err(RuntimeError::Domain { .. })));
}

#[test]
fn deferred_function_calls() {
    let parser = unknown_parser();
    let expr = deferred(&parser, "atan2(y, 1)");
    assert_eq!(expr.render(), "atan2(y, 1)");

    // Unknown functions fail even with unknown arguments.
    let err = parser.parse("nope(y)").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownFunction);
}

#[test]
fn assignment_of_deferred_returns_deferred() {
    let parser = unknown_parser();
    let outcome = parser.parse("s = t / 2").unwrap().unwrap();
    assert_eq!(outcome.to_string(), "t / 2");
    assert!(matches!(parser.variable("s"), Some(mapa::Binding::Deferred(_))));
}

#[test]
fn complex_mode_deferred() {
    let parser = MathParser::new(Options { complex_mode: true,
                                           allow_unknown: true,
                                           ..Options::default() });
    let expr = deferred(&parser, "(1 + 2j) * x");
    assert_eq!(expr.render(), "(1 + 2j) * x");

    let outcome = expr.eval(&bindings(&[("x", 2.0)])).unwrap();
    assert_eq!(outcome.to_string(), "(2+4j)");
}
