/// Parsing errors.
///
/// Defines the errors raised while tokenizing and parsing source text:
/// unrecognized characters, malformed literals and grammar violations. All of
/// them carry a source position.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types raised during evaluation: disabled or unknown
/// variables, unknown functions, arity mismatches and domain violations.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
use thiserror::Error;

/// Any failure of a `parse` call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The source text could not be tokenized or parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A statement failed during evaluation.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// The inspectable category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Unrecognized character or malformed literal.
    Lex,
    /// Grammar violation.
    Syntax,
    /// Variable use while variables are disabled.
    VariablesDisabled,
    /// Unbound variable while unknown variables are not allowed.
    UndefinedVariable,
    /// Call to a function missing from the registry.
    UnknownFunction,
    /// Call with the wrong number of arguments.
    Arity,
    /// Result outside the active numeric domain.
    Domain,
    /// Division by zero.
    DivisionByZero,
}

impl Error {
    /// Classifies the error.
    ///
    /// # Example
    /// ```
    /// use mapa::{MathParser, Options, error::ErrorKind};
    ///
    /// let parser = MathParser::new(Options::default());
    /// let err = parser.parse("foo(1, 2, 3)").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::UnknownFunction);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(e) if e.is_lexical() => ErrorKind::Lex,
            Self::Parse(_) => ErrorKind::Syntax,
            Self::Runtime(e) => match e {
                RuntimeError::VariablesDisabled { .. } => ErrorKind::VariablesDisabled,
                RuntimeError::UndefinedVariable { .. } => ErrorKind::UndefinedVariable,
                RuntimeError::UnknownFunction { .. } => ErrorKind::UnknownFunction,
                RuntimeError::Arity { .. } => ErrorKind::Arity,
                RuntimeError::Domain { .. } => ErrorKind::Domain,
                RuntimeError::DivisionByZero => ErrorKind::DivisionByZero,
            },
        }
    }
}
