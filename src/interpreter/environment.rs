use std::{collections::HashMap, f64::consts, fmt};

use crate::{ast::Expr, interpreter::value::Value};

/// Constants every environment starts with.
pub const DEFAULT_CONSTANTS: [(&str, f64); 2] = [("pi", consts::PI), ("e", consts::E)];

/// What a variable is bound to.
///
/// Assigning an expression that still has free names stores the expression
/// itself, so it is re-resolved on every later use.
#[derive(Debug, Clone, PartialEq)]
pub enum Binding {
    /// A fully evaluated number.
    Value(Value),
    /// A partially evaluated expression tree.
    Deferred(Expr),
}

impl From<Value> for Binding {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<f64> for Binding {
    fn from(value: f64) -> Self {
        Self::Value(Value::Real(value))
    }
}

impl From<Expr> for Binding {
    fn from(expr: Expr) -> Self {
        Self::Deferred(expr)
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{value}"),
            Self::Deferred(expr) => write!(f, "{expr}"),
        }
    }
}

/// Named state of one parser instance: user variables and read-only
/// constants.
///
/// Name lookup during evaluation checks variables first, then constants, so
/// a variable may shadow a constant.
#[derive(Debug, Clone)]
pub struct Environment {
    variables: HashMap<String, Binding>,
    constants: HashMap<String, Value>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment with no variables and the default constants,
    /// `pi` and `e`.
    ///
    /// # Example
    /// ```
    /// use mapa::interpreter::environment::Environment;
    ///
    /// let env = Environment::new();
    /// assert!(env.constant("pi").is_some());
    /// assert!(env.variables().is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let constants = DEFAULT_CONSTANTS.iter()
                                         .map(|(name, value)| ((*name).to_string(), Value::Real(*value)))
                                         .collect();
        Self { variables: HashMap::new(),
               constants }
    }

    /// Returns the binding of a variable.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.variables.get(name)
    }

    /// Binds a variable, returning the previous binding if there was one.
    pub fn set(&mut self, name: impl Into<String>, binding: impl Into<Binding>) -> Option<Binding> {
        self.variables.insert(name.into(), binding.into())
    }

    /// Removes a variable. Constants are not affected.
    pub fn remove(&mut self, name: &str) -> Option<Binding> {
        self.variables.remove(name)
    }

    /// Removes every variable. Constants are not affected.
    pub fn clear(&mut self) {
        self.variables.clear();
    }

    /// Returns all variables sorted by name.
    #[must_use]
    pub fn variables(&self) -> Vec<(&str, &Binding)> {
        let mut variables: Vec<_> = self.variables
                                        .iter()
                                        .map(|(name, binding)| (name.as_str(), binding))
                                        .collect();
        variables.sort_unstable_by_key(|(name, _)| *name);
        variables
    }

    /// Returns the value of a constant.
    #[must_use]
    pub fn constant(&self, name: &str) -> Option<Value> {
        self.constants.get(name).copied()
    }

    /// Defines or replaces a constant.
    pub fn set_constant(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.constants.insert(name.into(), value.into());
    }

    /// Returns all constants sorted by name.
    #[must_use]
    pub fn constants(&self) -> Vec<(&str, Value)> {
        let mut constants: Vec<_> = self.constants
                                        .iter()
                                        .map(|(name, value)| (name.as_str(), *value))
                                        .collect();
        constants.sort_unstable_by_key(|(name, _)| *name);
        constants
    }
}
