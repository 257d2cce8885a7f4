use std::{collections::HashMap, fmt, rc::Rc};

use tracing::trace;

use crate::{
    config::Domain,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        registry::{complex, real},
        value::{Value, complex::ComplexNumber},
    },
};

/// A registered function body.
///
/// Callables receive the already evaluated arguments; their count always
/// matches the arity they were registered with.
pub type Callable = Rc<dyn Fn(&[Value]) -> EvalResult<Value>>;

/// Number of arguments a registered function takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Arity {
    /// One argument.
    Unary,
    /// Two arguments.
    Binary,
}

impl Arity {
    /// Returns the argument count.
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Unary => 1,
            Self::Binary => 2,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count())
    }
}

/// One function in the registry.
#[derive(Clone)]
pub struct FunctionEntry {
    /// Name the function is called by.
    pub name:     String,
    /// Number of arguments.
    pub arity:    Arity,
    /// The function body.
    pub callable: Callable,
}

impl FunctionEntry {
    /// Calls the function with evaluated arguments.
    pub fn call(&self, args: &[Value]) -> EvalResult<Value> {
        (self.callable)(args)
    }
}

impl fmt::Debug for FunctionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionEntry")
         .field("name", &self.name)
         .field("arity", &self.arity)
         .finish_non_exhaustive()
    }
}

/// Functions callable from expressions, keyed by name and arity.
///
/// A name may carry a unary and a binary form at the same time, like `log`.
/// Each parser instance owns its own registry, so registering a function
/// never leaks into another instance.
///
/// # Example
/// ```
/// use mapa::interpreter::{registry::core::{Arity, FunctionRegistry}, value::Value};
///
/// let mut registry = FunctionRegistry::real();
/// registry.register("double", Arity::Unary, |args: &[Value]| {
///             Ok(Value::Real(args[0].as_real()? * 2.0))
///         });
///
/// let double = registry.lookup("double", 1).unwrap();
/// assert_eq!(double.call(&[Value::Real(4.0)]).unwrap(), Value::Real(8.0));
/// assert!(registry.lookup("double", 2).is_err());
/// ```
#[derive(Clone, Default)]
pub struct FunctionRegistry {
    functions: HashMap<String, Vec<FunctionEntry>>,
}

impl FunctionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the real-domain preset.
    #[must_use]
    pub fn real() -> Self {
        let mut registry = Self::new();
        real::install(&mut registry);
        registry
    }

    /// Creates a registry holding the complex-domain preset.
    #[must_use]
    pub fn complex() -> Self {
        let mut registry = Self::new();
        complex::install(&mut registry);
        registry
    }

    /// Creates the preset registry for a domain.
    #[must_use]
    pub fn for_domain(domain: Domain) -> Self {
        match domain {
            Domain::Real => Self::real(),
            Domain::Complex => Self::complex(),
        }
    }

    /// Adds a function, replacing any earlier one with the same name and
    /// arity. Returns `true` if an entry was replaced.
    pub fn register<F>(&mut self, name: impl Into<String>, arity: Arity, callable: F) -> bool
        where F: Fn(&[Value]) -> EvalResult<Value> + 'static
    {
        let name = name.into();
        let entry = FunctionEntry { name: name.clone(),
                                    arity,
                                    callable: Rc::new(callable) };
        trace!(%name, %arity, "registering function");

        let entries = self.functions.entry(name).or_default();
        if let Some(slot) = entries.iter_mut().find(|e| e.arity == arity) {
            *slot = entry;
            return true;
        }
        entries.push(entry);
        entries.sort_by_key(|e| e.arity);
        false
    }

    /// Finds the function to call for `name` with `count` arguments.
    ///
    /// # Errors
    /// - `UnknownFunction` if no function of that name exists in any arity.
    /// - `Arity` if the name exists but not with this argument count.
    pub fn lookup(&self, name: &str, count: usize) -> EvalResult<&FunctionEntry> {
        let entries = self.functions
                          .get(name)
                          .ok_or_else(|| RuntimeError::UnknownFunction { name: name.to_string() })?;

        entries.iter()
               .find(|entry| entry.arity.count() == count)
               .ok_or_else(|| RuntimeError::Arity { name:     name.to_string(),
                                                    expected: entries.iter()
                                                                     .map(|e| e.arity.to_string())
                                                                     .collect::<Vec<_>>()
                                                                     .join(" or "),
                                                    found:    count, })
    }

    /// Returns every arity registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[FunctionEntry]> {
        self.functions.get(name).map(Vec::as_slice)
    }

    /// Returns `true` if any function is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Returns all registered names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of registered (name, arity) pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.functions.values().map(Vec::len).sum()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for name in self.names() {
            for entry in self.get(name).unwrap_or_default() {
                list.entry(&format_args!("{}/{}", entry.name, entry.arity));
            }
        }
        list.finish()
    }
}

/// Unpacks the single argument of a unary function.
pub(crate) fn unary_argument<'v>(name: &str, args: &'v [Value]) -> EvalResult<&'v Value> {
    match args {
        [x] => Ok(x),
        _ => Err(arity_mismatch(name, Arity::Unary, args.len())),
    }
}

/// Unpacks both arguments of a binary function.
pub(crate) fn binary_arguments<'v>(name: &str,
                                   args: &'v [Value])
                                   -> EvalResult<(&'v Value, &'v Value)> {
    match args {
        [x, y] => Ok((x, y)),
        _ => Err(arity_mismatch(name, Arity::Binary, args.len())),
    }
}

fn arity_mismatch(name: &str, arity: Arity, found: usize) -> RuntimeError {
    RuntimeError::Arity { name: name.to_string(),
                          expected: arity.to_string(),
                          found }
}

/// Wraps a real function result, rejecting NaN or infinite results from
/// finite arguments.
pub(crate) fn checked_real(name: &str, args: &[f64], result: f64) -> EvalResult<Value> {
    let finite_args = args.iter().all(|a| a.is_finite());
    if finite_args && !result.is_finite() {
        return Err(RuntimeError::Domain { details: format!("{name}({}) is not a real number",
                                                           join(args)) });
    }
    Ok(Value::Real(result))
}

/// Complex counterpart of [`checked_real`].
pub(crate) fn checked_complex(name: &str,
                              args: &[ComplexNumber],
                              result: ComplexNumber)
                              -> EvalResult<Value> {
    let finite = |c: &ComplexNumber| c.real.is_finite() && c.imaginary.is_finite();
    if args.iter().all(finite) && !finite(&result) {
        return Err(RuntimeError::Domain { details: format!("{name}({}) is not defined",
                                                           join(args)) });
    }
    Ok(Value::Complex(result))
}

fn join<T: fmt::Display>(args: &[T]) -> String {
    args.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
