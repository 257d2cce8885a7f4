use std::fmt;

/// Behaviour switches for a [`MathParser`](crate::MathParser) instance.
///
/// Options are fixed when the parser is constructed; changing the domain
/// means constructing a new parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Evaluate over the complex numbers instead of the reals.
    pub complex_mode:    bool,
    /// Allow reading and assigning variables. Constants stay readable either
    /// way.
    pub allow_variables: bool,
    /// Turn references to unbound names into deferred expressions instead of
    /// errors.
    pub allow_unknown:   bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { complex_mode:    false,
               allow_variables: true,
               allow_unknown:   false, }
    }
}

impl Options {
    /// Returns the numeric domain these options select.
    #[must_use]
    pub const fn domain(&self) -> Domain {
        if self.complex_mode { Domain::Complex } else { Domain::Real }
    }
}

/// The numeric domain a parser evaluates over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    /// Real numbers only; anything non-real is a domain error.
    Real,
    /// Complex numbers.
    Complex,
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real => write!(f, "real"),
            Self::Complex => write!(f, "complex"),
        }
    }
}
