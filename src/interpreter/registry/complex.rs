use crate::interpreter::{
    registry::core::{Arity, FunctionRegistry, binary_arguments, checked_complex, unary_argument},
    value::{Value, complex::ComplexNumber},
};

/// Single-argument complex functions returning a complex result.
pub const UNARY_FUNCTIONS: &[(&str, fn(ComplexNumber) -> ComplexNumber)] =
    &[("exp", ComplexNumber::exp),
      ("log", ComplexNumber::ln),
      ("log10", ComplexNumber::log10),
      ("sqrt", ComplexNumber::sqrt),
      ("asin", ComplexNumber::asin),
      ("acos", ComplexNumber::acos),
      ("atan", ComplexNumber::atan),
      ("sin", ComplexNumber::sin),
      ("cos", ComplexNumber::cos),
      ("tan", ComplexNumber::tan),
      ("sinh", ComplexNumber::sinh),
      ("cosh", ComplexNumber::cosh),
      ("tanh", ComplexNumber::tanh)];

/// Registers the complex preset.
///
/// `abs` and `phase` return real values; `rect(r, phi)` builds a complex
/// number from polar coordinates and takes real arguments only.
pub(crate) fn install(registry: &mut FunctionRegistry) {
    for &(name, func) in UNARY_FUNCTIONS {
        registry.register(name, Arity::Unary, move |args| {
                    let z = unary_argument(name, args)?.as_complex();
                    checked_complex(name, &[z], func(z))
                });
    }

    registry.register("abs", Arity::Unary, |args| {
                Ok(Value::Real(unary_argument("abs", args)?.magnitude()))
            });
    registry.register("phase", Arity::Unary, |args| {
                Ok(Value::Real(unary_argument("phase", args)?.as_complex().arg()))
            });
    registry.register("log", Arity::Binary, |args| {
                let (z, base) = binary_arguments("log", args)?;
                let (z, base) = (z.as_complex(), base.as_complex());
                checked_complex("log", &[z, base], z.ln() / base.ln())
            });
    registry.register("rect", Arity::Binary, |args| {
                let (modulus, phase) = binary_arguments("rect", args)?;
                let (modulus, phase) = (modulus.as_real()?, phase.as_real()?);
                Ok(Value::Complex(ComplexNumber::from_polar(modulus, phase)))
            });
}
