use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::{
            Value,
            complex::{ComplexNumber, ONE, ZERO},
        },
    },
};

/// Integer exponents up to this magnitude use repeated squaring on complex
/// bases.
const MAX_SQUARING_EXPONENT: f64 = 100.0;

impl Context {
    /// Evaluates an exponentiation operation.
    ///
    /// Real base and exponent use `powf`, except where that leaves the reals:
    /// a negative base with a fractional exponent is a domain error in real
    /// mode and a principal complex power in complex mode. Any complex
    /// operand makes the power complex.
    ///
    /// # Errors
    /// - `DivisionByZero` for zero raised to a negative (or non-positive
    ///   complex) power.
    /// - `Domain` for a non-real result in real mode.
    ///
    /// # Example
    /// ```
    /// use mapa::{Options, interpreter::{evaluator::core::Context, value::Value}};
    ///
    /// let context = Context::new(Options::default());
    /// assert_eq!(context.eval_pow(Value::Real(2.0), Value::Real(10.0)).unwrap(),
    ///            Value::Real(1024.0));
    /// assert!(context.eval_pow(Value::Real(-8.0), Value::Real(0.5)).is_err());
    /// assert!(context.eval_pow(Value::Real(0.0), Value::Real(-1.0)).is_err());
    /// ```
    pub fn eval_pow(&self, base: Value, exponent: Value) -> EvalResult<Value> {
        if let (Value::Real(b), Value::Real(e)) = (base, exponent) {
            if b == 0.0 && e < 0.0 {
                return Err(RuntimeError::DivisionByZero);
            }
            if b < 0.0 && e.is_finite() && e.fract() != 0.0 {
                if !self.options.complex_mode {
                    return Err(RuntimeError::Domain { details: format!("{b} raised to {e} is not a real number") });
                }
                return Ok(Value::Complex(ComplexNumber::from(b).powc(ComplexNumber::from(e))));
            }
            return Ok(Value::Real(b.powf(e)));
        }

        Self::complex_pow(base.as_complex(), exponent.as_complex()).map(Value::Complex)
    }

    /// Evaluates the n-th root `index % radicand` as
    /// `radicand ^ (1 / index)`.
    ///
    /// # Errors
    /// `DivisionByZero` for a zero index, plus whatever the power itself
    /// raises: in real mode even roots and odd roots of negative radicands
    /// alike are domain errors, since `1 / index` is fractional.
    pub fn eval_root(&self, index: Value, radicand: Value) -> EvalResult<Value> {
        let exponent = match index {
            Value::Real(n) if n == 0.0 => return Err(RuntimeError::DivisionByZero),
            Value::Real(n) => Value::Real(n.recip()),
            Value::Complex(c) if c.is_zero() => return Err(RuntimeError::DivisionByZero),
            Value::Complex(c) => Value::Complex(c.recip()),
        };
        self.eval_pow(radicand, exponent)
    }

    fn complex_pow(base: ComplexNumber, exponent: ComplexNumber) -> EvalResult<ComplexNumber> {
        if base.is_zero() {
            if exponent.is_zero() {
                return Ok(ONE);
            }
            if exponent.imaginary == 0.0 && exponent.real > 0.0 {
                return Ok(ZERO);
            }
            return Err(RuntimeError::DivisionByZero);
        }

        if exponent.imaginary == 0.0
           && exponent.real.fract() == 0.0
           && exponent.real.abs() <= MAX_SQUARING_EXPONENT
        {
            #[allow(clippy::cast_possible_truncation)]
            return Ok(base.powi(exponent.real as i32));
        }

        Ok(base.powc(exponent))
    }
}
