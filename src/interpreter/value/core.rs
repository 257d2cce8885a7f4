use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::complex::ComplexNumber},
};

/// Represents a numeric value produced by evaluation.
///
/// Real mode only ever produces `Real` values. Complex mode produces `Real`
/// values for purely real computations and promotes to `Complex` as soon as
/// an imaginary literal, a complex function or a non-real power is involved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A double precision floating-point number.
    Real(f64),
    /// A complex number.
    Complex(ComplexNumber),
}

impl From<ComplexNumber> for Value {
    fn from(c: ComplexNumber) -> Self {
        Self::Complex(c)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl Value {
    /// Converts the value to an `f64`.
    ///
    /// # Errors
    /// Returns a `Domain` error for complex values, even when their imaginary
    /// part happens to be zero.
    ///
    /// # Example
    /// ```
    /// use mapa::interpreter::value::{complex::ComplexNumber, core::Value};
    ///
    /// assert_eq!(Value::Real(10.0).as_real().unwrap(), 10.0);
    /// assert!(Value::Complex(ComplexNumber::new(1.0, 1.0)).as_real().is_err());
    /// ```
    pub fn as_real(&self) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Complex(c) => {
                Err(RuntimeError::Domain { details: format!("expected a real number, found {c}") })
            },
        }
    }

    /// Widens the value to a complex number.
    #[must_use]
    pub fn as_complex(&self) -> ComplexNumber {
        match self {
            Self::Real(r) => ComplexNumber::from(*r),
            Self::Complex(c) => *c,
        }
    }

    /// Returns the magnitude of the value.
    ///
    /// # Example
    /// ```
    /// use mapa::interpreter::value::{complex::ComplexNumber, core::Value};
    ///
    /// assert_eq!(Value::Real(-2.5).magnitude(), 2.5);
    /// assert_eq!(Value::Complex(ComplexNumber::new(3.0, 4.0)).magnitude(), 5.0);
    /// ```
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        match self {
            Self::Real(r) => r.abs(),
            Self::Complex(c) => c.abs(),
        }
    }

    /// Returns `true` if the value is [`Value::Real`].
    #[must_use]
    pub const fn is_real(&self) -> bool {
        matches!(self, Self::Real(..))
    }

    /// Returns `true` if the value is [`Value::Complex`].
    #[must_use]
    pub const fn is_complex(&self) -> bool {
        matches!(self, Self::Complex(..))
    }

    /// Returns `true` if every part of the value is finite.
    ///
    /// # Example
    /// ```
    /// use mapa::interpreter::value::{complex::ComplexNumber, core::Value};
    ///
    /// assert!(Value::Real(1e300).is_finite());
    /// assert!(!Value::Real(f64::NAN).is_finite());
    /// assert!(!Value::Complex(ComplexNumber::new(0.0, f64::INFINITY)).is_finite());
    /// ```
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        match self {
            Self::Real(r) => r.is_finite(),
            Self::Complex(c) => c.real.is_finite() && c.imaginary.is_finite(),
        }
    }

    /// Returns `true` if the value is a negative real or has a negative sign
    /// in front when rendered, which matters for parenthesization.
    pub(crate) const fn renders_signed(&self) -> bool {
        match self {
            Self::Real(r) => r.is_sign_negative(),
            Self::Complex(c) => c.real == 0.0 && c.imaginary.is_sign_negative(),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(r) => write!(f, "{r}"),
            Self::Complex(c) => write!(f, "{c}"),
        }
    }
}
