use thiserror::Error;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// A variable was referenced or assigned while variables are disabled.
    #[error("Variables are disabled, cannot use '{name}'.")]
    VariablesDisabled {
        /// The name of the variable.
        name: String,
    },
    /// A variable is not bound and unknown variables are not allowed.
    #[error("Unknown variable or constant '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// Called a function missing from the registry.
    #[error("Unknown function '{name}'.")]
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
    /// Called a registered function with the wrong number of arguments.
    #[error("Function '{name}' does not take {found} argument(s), expected {expected}.")]
    Arity {
        /// The name of the function.
        name:     String,
        /// The argument counts the function is registered with, e.g. `1` or
        /// `1 or 2`.
        expected: String,
        /// The number of arguments supplied.
        found:    usize,
    },
    /// A result falls outside the active numeric domain.
    #[error("Domain error: {details}.")]
    Domain {
        /// What left the domain.
        details: String,
    },
    /// Attempted division by zero.
    #[error("Division by zero.")]
    DivisionByZero,
}
