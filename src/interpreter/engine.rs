use std::{
    cell::{Ref, RefMut},
    fmt,
    rc::Rc,
};

use tracing::{debug, instrument, trace};

use crate::{
    config::Options,
    error::Error,
    interpreter::{
        deferred::DeferredExpression,
        environment::{Binding, Environment},
        evaluator::core::{Context, EvalResult, Evaluated, Frame},
        lexer::tokenize,
        parser::core::parse_program,
        registry::core::{Arity, FunctionRegistry},
        value::Value,
    },
};

/// The result of a successful `parse` call.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// The program evaluated to a number.
    Value(Value),
    /// The program depends on names that are still unbound.
    Deferred(DeferredExpression),
}

impl Outcome {
    pub(crate) fn from_evaluated(result: Evaluated, context: &Rc<Context>) -> Self {
        match result {
            Evaluated::Ready(value) => Self::Value(value),
            Evaluated::Deferred { expr, free } => {
                trace!(%expr, ?free, "deferred expression");
                Self::Deferred(DeferredExpression::new(expr, free, Rc::clone(context)))
            },
        }
    }

    /// Returns the number, if the outcome is one.
    #[must_use]
    pub const fn value(&self) -> Option<Value> {
        match self {
            Self::Value(value) => Some(*value),
            Self::Deferred(_) => None,
        }
    }

    /// Returns the deferred expression, if the outcome is one.
    #[must_use]
    pub const fn as_deferred(&self) -> Option<&DeferredExpression> {
        match self {
            Self::Value(_) => None,
            Self::Deferred(deferred) => Some(deferred),
        }
    }

    /// Returns `true` if the outcome is deferred.
    #[must_use]
    pub const fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{value}"),
            Self::Deferred(deferred) => write!(f, "{deferred}"),
        }
    }
}

/// A math expression parser and evaluator.
///
/// Each instance owns its variables, constants and functions; instances
/// never share state. An instance is not `Send`, so it stays on the thread
/// that created it.
///
/// # Example
/// ```
/// use mapa::{MathParser, Options, Value};
///
/// let parser = MathParser::new(Options::default());
/// let outcome = parser.parse("x = 4; y = %x; x * y").unwrap().unwrap();
/// assert_eq!(outcome.value(), Some(Value::Real(8.0)));
/// ```
pub struct MathParser {
    context: Rc<Context>,
}

impl Default for MathParser {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl fmt::Debug for MathParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MathParser")
         .field("options", &self.context.options)
         .finish_non_exhaustive()
    }
}

impl MathParser {
    /// Creates a parser with the given options, the default constants and
    /// the function preset of the selected domain.
    #[must_use]
    pub fn new(options: Options) -> Self {
        debug!(domain = %options.domain(),
               allow_variables = options.allow_variables,
               allow_unknown = options.allow_unknown,
               "created parser");
        Self { context: Rc::new(Context::new(options)) }
    }

    /// Returns the options the parser was created with.
    #[must_use]
    pub fn options(&self) -> Options {
        self.context.options
    }

    /// Parses and evaluates a program.
    ///
    /// The whole program is tokenized and parsed first; a lexical or syntax
    /// error anywhere means nothing runs. Statements then run in order, and
    /// the result of the last one is returned. Assignments made by earlier
    /// statements persist even if a later statement fails.
    ///
    /// # Returns
    /// - `Ok(None)` for a program without statements.
    /// - `Ok(Some(Outcome::Value(_)))` for a number.
    /// - `Ok(Some(Outcome::Deferred(_)))` when unknown names are allowed and
    ///   the last statement still depends on some.
    ///
    /// # Errors
    /// The first error raised while parsing or evaluating.
    #[instrument(level = "debug", skip(self), err)]
    pub fn parse(&self, source: &str) -> Result<Option<Outcome>, Error> {
        let lexed = tokenize(source)?;
        let statements = parse_program(&lexed)?;
        debug!(statements = statements.len(), "parsed program");

        let mut frame = Frame::new(self.context.options.allow_unknown);
        let mut last = None;
        for statement in &statements {
            last = Some(self.context.eval_statement(statement, &mut frame)?);
        }

        Ok(last.map(|result| Outcome::from_evaluated(result, &self.context)))
    }

    /// Registers a function under `name` for the given arity, replacing an
    /// earlier function with the same name and arity.
    ///
    /// # Example
    /// ```
    /// use mapa::{MathParser, Value, interpreter::registry::core::Arity};
    ///
    /// let parser = MathParser::default();
    /// parser.register("hypot", Arity::Binary, |args: &[Value]| {
    ///           Ok(Value::Real(args[0].as_real()?.hypot(args[1].as_real()?)))
    ///       });
    /// let outcome = parser.parse("hypot(3, 4)").unwrap().unwrap();
    /// assert_eq!(outcome.value(), Some(Value::Real(5.0)));
    /// ```
    pub fn register<F>(&self, name: impl Into<String>, arity: Arity, callable: F)
        where F: Fn(&[Value]) -> EvalResult<Value> + 'static
    {
        let name = name.into();
        let replaced = self.context
                           .registry
                           .borrow_mut()
                           .register(name.clone(), arity, callable);
        debug!(%name, %arity, replaced, "registered function");
    }

    /// Read access to the function registry.
    #[must_use]
    pub fn registry(&self) -> Ref<'_, FunctionRegistry> {
        self.context.registry.borrow()
    }

    /// Read access to variables and constants.
    #[must_use]
    pub fn environment(&self) -> Ref<'_, Environment> {
        self.context.environment.borrow()
    }

    /// Write access to variables and constants.
    ///
    /// The returned guard must be dropped before the next `parse` call.
    #[must_use]
    pub fn environment_mut(&self) -> RefMut<'_, Environment> {
        self.context.environment.borrow_mut()
    }

    /// Returns the binding of a variable.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<Binding> {
        self.environment().get(name).cloned()
    }

    /// Binds a variable from the host side.
    pub fn set_variable(&self, name: impl Into<String>, binding: impl Into<Binding>) {
        self.environment_mut().set(name, binding);
    }

    /// Removes a variable, returning its binding.
    pub fn remove_variable(&self, name: &str) -> Option<Binding> {
        self.environment_mut().remove(name)
    }

    /// Removes every variable. Constants and functions are kept.
    pub fn clear_variables(&self) {
        debug!("cleared variables");
        self.environment_mut().clear();
    }

    /// Defines or replaces a constant.
    pub fn set_constant(&self, name: impl Into<String>, value: impl Into<Value>) {
        self.environment_mut().set_constant(name, value);
    }
}
