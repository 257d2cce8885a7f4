use std::collections::HashMap;

use insta::assert_snapshot;
use mapa::{DeferredExpression, MathParser, Options, Value};

fn parser() -> MathParser {
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

fn r(src: &str) -> String {
    deferred(&parser(), src).render()
}

fn p(src: &str) -> String {
    deferred(&parser(), src).render_parenthesized()
}

#[test]
fn canonical_form() {
    assert_snapshot!(r("x+1"), @"x + 1");
    assert_snapshot!(r("-(x + 1)"), @"-(x + 1)");
    assert_snapshot!(r("(x + 1) * 2"), @"(x + 1) * 2");
    assert_snapshot!(r("x - (y - z)"), @"x - (y - z)");
    assert_snapshot!(r("(x - y) - z"), @"x - y - z");
    assert_snapshot!(r("x / (y * z)"), @"x / (y * z)");
    assert_snapshot!(r("(x^2)^3"), @"(x^2)^3");
    assert_snapshot!(r("x ** 2 ** 3"), @"x^2^3");
    assert_snapshot!(r("(-x)^2"), @"(-x)^2");
    assert_snapshot!(r("-x^2"), @"-x^2");
    assert_snapshot!(r("2^-x"), @"2^(-x)");
    assert_snapshot!(r("%(x + 1)"), @"%(x + 1)");
    assert_snapshot!(r("% x"), @"%x");
    assert_snapshot!(r("3 % x"), @"3%x");
    assert_snapshot!(r("atan2( y,x+1 )"), @"atan2(y, x + 1)");
    assert_snapshot!(r("2.50 * x"), @"2.5 * x");
}

#[test]
fn substituted_bindings() {
    let parser = parser();
    let bindings = HashMap::from([("x".to_string(), Value::Real(-2.0))]);

    let product = deferred(&parser, "x * y").eval(&bindings).unwrap();
    assert_snapshot!(product.to_string(), @"-2 * y");

    let power = deferred(&parser, "y^x").eval(&bindings).unwrap();
    assert_snapshot!(power.to_string(), @"y^(-2)");

    let call = deferred(&parser, "sin(x) + y").eval(&bindings).unwrap();
    assert_snapshot!(call.to_string(), @"sin(-2) + y");
}

#[test]
fn parenthesized_form() {
    assert_snapshot!(p("1 + 2 * x"), @"(1 + (2 * x))");
    assert_snapshot!(p("-x^2"), @"(-(x^2))");
    assert_snapshot!(p("x - y - z"), @"((x - y) - z)");
    assert_snapshot!(p("3%x + 1"), @"((3%x) + 1)");
    assert_snapshot!(p("sin(x) * 2"), @"(sin(x) * 2)");
    assert_snapshot!(p("y"), @"y");
}

#[test]
fn rendering_round_trips() {
    let sources = ["-(x + 1) * 2",
                   "x - (y - z) / 4",
                   "(x^2)^3 + x^2^3",
                   "(-x)^2 - -x^2",
                   "2^(-x) + %(x + 1)",
                   "3%x * atan2(x, 1 + x)",
                   "x / y / 2"];
    let bindings = HashMap::from([("x".to_string(), Value::Real(1.5)),
                                  ("y".to_string(), Value::Real(0.25)),
                                  ("z".to_string(), Value::Real(-3.0))]);

    for source in sources {
        let parser = parser();
        let first = deferred(&parser, source);
        let second = deferred(&parser, &first.render());
        assert_eq!(first.render(), second.render(), "source: {source}");

        let expected = first.eval(&bindings).unwrap().value();
        assert!(expected.is_some(), "source: {source}");
        assert_eq!(second.eval(&bindings).unwrap().value(), expected, "source: {source}");

        let parenthesized = deferred(&parser, &first.render_parenthesized());
        assert_eq!(parenthesized.eval(&bindings).unwrap().value(), expected, "source: {source}");
    }
}
