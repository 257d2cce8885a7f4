use std::{fmt::Display, ops};

/// `0.0` as a complex number.
pub const ZERO: ComplexNumber = ComplexNumber::new(0.0, 0.0);
/// `1.0` as a complex number.
pub const ONE: ComplexNumber = ComplexNumber::new(1.0, 0.0);
/// The imaginary unit.
pub const I: ComplexNumber = ComplexNumber::new(0.0, 1.0);

/// Represents a complex number with real and imaginary parts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComplexNumber {
    /// The real part of the number.
    pub real:      f64,
    /// The imaginary part of the number.
    pub imaginary: f64,
}

impl Display for ComplexNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.real, self.imaginary) {
            (real, imaginary) if real == 0.0 && !real.is_sign_negative() => {
                write!(f, "{imaginary}j")
            },
            (real, imaginary) if imaginary.is_sign_negative() => {
                write!(f, "({real}-{}j)", -imaginary)
            },
            (real, imaginary) => write!(f, "({real}+{imaginary}j)"),
        }
    }
}

impl ComplexNumber {
    /// Constructs a new complex number from real and imaginary components.
    ///
    /// # Example
    /// ```
    /// use mapa::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(5.0, -1.0);
    /// assert_eq!(c.real, 5.0);
    /// assert_eq!(c.imaginary, -1.0);
    /// ```
    #[must_use]
    pub const fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    /// Builds a complex number from its modulus and phase angle.
    #[must_use]
    pub fn from_polar(modulus: f64, phase: f64) -> Self {
        Self { real:      modulus * phase.cos(),
               imaginary: modulus * phase.sin(), }
    }

    /// Returns `true` if both parts are exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.real == 0.0 && self.imaginary == 0.0
    }

    /// Returns the absolute value (magnitude) of the complex number.
    ///
    /// # Example
    /// ```
    /// use mapa::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(3.0, 4.0);
    /// assert_eq!(c.abs(), 5.0);
    /// ```
    #[must_use]
    pub fn abs(&self) -> f64 {
        self.real.hypot(self.imaginary)
    }

    /// Returns the argument (phase angle) in radians.
    #[must_use]
    pub fn arg(self) -> f64 {
        self.imaginary.atan2(self.real)
    }

    /// Returns the reciprocal `1/z`.
    #[must_use]
    pub fn recip(&self) -> Self {
        let norm_sqr = self.real.mul_add(self.real, self.imaginary * self.imaginary);

        Self { real:      self.real / norm_sqr,
               imaginary: -(self.imaginary / norm_sqr), }
    }

    /// Raises the number to a complex power using the principal branch of
    /// the logarithm, `exp(w * ln(z))`.
    ///
    /// The caller handles a zero base; `ln(0)` is not finite.
    #[must_use]
    pub fn powc(self, exponent: Self) -> Self {
        (exponent * self.ln()).exp()
    }

    /// Raises the number to an integer power by repeated squaring, which
    /// stays exact for small Gaussian integers where `powc` would round.
    ///
    /// # Example
    /// ```
    /// use mapa::interpreter::value::complex::ComplexNumber;
    /// let z = ComplexNumber::new(1.0, 1.0).powi(2);
    /// assert_eq!(z, ComplexNumber::new(0.0, 2.0));
    /// ```
    #[must_use]
    pub fn powi(self, exponent: i32) -> Self {
        let mut result = ONE;
        let mut base = self;
        let mut n = exponent.unsigned_abs();

        while n > 0 {
            if n & 1 == 1 {
                result = result * base;
            }
            base = base * base;
            n >>= 1;
        }

        if exponent < 0 { result.recip() } else { result }
    }

    /// Returns the principal square root of the complex number.
    ///
    /// # Example
    /// ```
    /// use mapa::interpreter::value::complex::ComplexNumber;
    /// let s = ComplexNumber::new(-4.0, 0.0).sqrt();
    /// assert!(s.real.abs() < 1e-12);
    /// assert!((s.imaginary - 2.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn sqrt(self) -> Self {
        let a = self.real;
        let b = self.imaginary;
        let r = a.hypot(b);

        let real = f64::midpoint(r, a).sqrt();
        let imaginary = ((r - a) / 2.0).sqrt().copysign(b);

        Self { real, imaginary }
    }

    /// Returns the sine of the complex number.
    #[must_use]
    pub fn sin(self) -> Self {
        Self { real:      self.real.sin() * self.imaginary.cosh(),
               imaginary: self.real.cos() * self.imaginary.sinh(), }
    }

    /// Returns the cosine of the complex number.
    #[must_use]
    pub fn cos(self) -> Self {
        Self { real:      self.real.cos() * self.imaginary.cosh(),
               imaginary: -self.real.sin() * self.imaginary.sinh(), }
    }

    /// Returns the tangent of the complex number.
    #[must_use]
    pub fn tan(self) -> Self {
        self.sin() / self.cos()
    }

    /// Returns the hyperbolic sine of the complex number.
    #[must_use]
    pub fn sinh(self) -> Self {
        Self { real:      self.real.sinh() * self.imaginary.cos(),
               imaginary: self.real.cosh() * self.imaginary.sin(), }
    }

    /// Returns the hyperbolic cosine of the complex number.
    #[must_use]
    pub fn cosh(self) -> Self {
        Self { real:      self.real.cosh() * self.imaginary.cos(),
               imaginary: self.real.sinh() * self.imaginary.sin(), }
    }

    /// Returns the hyperbolic tangent of the complex number.
    #[must_use]
    pub fn tanh(self) -> Self {
        self.sinh() / self.cosh()
    }

    /// Returns the exponential of the complex number.
    ///
    /// # Example
    /// ```
    /// use mapa::interpreter::value::complex::ComplexNumber;
    /// let z = ComplexNumber::new(0.0, std::f64::consts::PI).exp();
    /// assert!((z.real + 1.0).abs() < 1e-12);
    /// assert!(z.imaginary.abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn exp(self) -> Self {
        Self::from_polar(self.real.exp(), self.imaginary)
    }

    /// Returns the principal natural logarithm.
    #[must_use]
    pub fn ln(self) -> Self {
        Self { real:      self.abs().ln(),
               imaginary: self.arg(), }
    }

    /// Returns the principal base-10 logarithm.
    #[must_use]
    pub fn log10(self) -> Self {
        let ln = self.ln();
        Self { real:      ln.real / std::f64::consts::LN_10,
               imaginary: ln.imaginary / std::f64::consts::LN_10, }
    }

    /// Returns the principal arcsine, `-i ln(iz + sqrt(1 - z^2))`.
    #[must_use]
    pub fn asin(self) -> Self {
        let root = (ONE - self * self).sqrt();
        -I * (I * self + root).ln()
    }

    /// Returns the principal arccosine, `-i ln(z + i sqrt(1 - z^2))`.
    #[must_use]
    pub fn acos(self) -> Self {
        let root = (ONE - self * self).sqrt();
        -I * (self + I * root).ln()
    }

    /// Returns the principal arctangent, `(i/2) ln((i + z) / (i - z))`.
    #[must_use]
    pub fn atan(self) -> Self {
        let half_i = Self::new(0.0, 0.5);
        half_i * ((I + self) / (I - self)).ln()
    }
}

impl ops::Neg for ComplexNumber {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self { real:      -self.real,
               imaginary: -self.imaginary, }
    }
}

impl ops::Add for ComplexNumber {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self { real:      self.real + rhs.real,
               imaginary: self.imaginary + rhs.imaginary, }
    }
}

impl ops::Sub for ComplexNumber {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self { real:      self.real - rhs.real,
               imaginary: self.imaginary - rhs.imaginary, }
    }
}

impl ops::Mul for ComplexNumber {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self { real:      self.real
                              .mul_add(rhs.real, -(self.imaginary * rhs.imaginary)),
               imaginary: self.real.mul_add(rhs.imaginary, self.imaginary * rhs.real), }
    }
}

impl ops::Div for ComplexNumber {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        let denom = rhs.real.mul_add(rhs.real, rhs.imaginary * rhs.imaginary);
        Self { real:      self.real.mul_add(rhs.real, self.imaginary * rhs.imaginary) / denom,
               imaginary: self.imaginary
                              .mul_add(rhs.real, -(self.real * rhs.imaginary))
                          / denom, }
    }
}

impl From<f64> for ComplexNumber {
    fn from(value: f64) -> Self {
        Self { real:      value,
               imaginary: 0.0, }
    }
}
