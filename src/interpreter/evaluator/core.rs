use std::{
    cell::RefCell,
    collections::{BTreeSet, HashMap},
};

use tracing::trace;

use crate::{
    ast::{Expr, Statement},
    config::Options,
    error::RuntimeError,
    interpreter::{
        environment::{Binding, Environment},
        registry::core::FunctionRegistry,
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The result of evaluating an expression.
///
/// Evaluation either produces a number or, when unknown names are allowed
/// and some name is unbound, a residual tree in which every fully known
/// sub-expression has been kept as written and every unknown one is left
/// symbolic.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluated {
    /// A fully evaluated number.
    Ready(Value),
    /// A partially evaluated tree and the names it still depends on.
    Deferred {
        /// The residual tree.
        expr: Expr,
        /// Unbound names referenced by the tree.
        free: BTreeSet<String>,
    },
}

/// Per-evaluation state threaded through the evaluator.
pub struct Frame<'b> {
    /// One-shot values that take precedence over every other binding.
    pub bindings:      Option<&'b HashMap<String, Value>>,
    /// Whether unbound names defer instead of failing.
    pub allow_unknown: bool,
    /// Stored expressions currently being expanded, innermost last. A name
    /// met again while it is being expanded counts as unbound.
    resolving:         Vec<String>,
}

impl<'b> Frame<'b> {
    /// A frame for a `parse` call.
    #[must_use]
    pub const fn new(allow_unknown: bool) -> Self {
        Self { bindings: None,
               allow_unknown,
               resolving: Vec::new() }
    }

    /// A frame for evaluating a deferred expression with one-shot bindings.
    /// Names left unbound keep the result deferred.
    #[must_use]
    pub const fn with_bindings(bindings: &'b HashMap<String, Value>) -> Self {
        Self { bindings:      Some(bindings),
               allow_unknown: true,
               resolving:     Vec::new(), }
    }

    pub(crate) fn is_resolving(&self, name: &str) -> bool {
        self.resolving.iter().any(|n| n == name)
    }
}

/// Stores the runtime evaluation context.
///
/// Holds everything one parser instance owns: its options, its variables
/// and constants, and its function registry. Deferred expressions keep a
/// shared handle to the context they came from, so they observe later
/// changes to it.
#[derive(Debug)]
pub struct Context {
    /// Behaviour switches, fixed at construction.
    pub options:     Options,
    /// Variables and constants.
    pub environment: RefCell<Environment>,
    /// Callable functions.
    pub registry:    RefCell<FunctionRegistry>,
}

impl Context {
    /// Creates a context with an empty environment, the default constants
    /// and the function preset of the configured domain.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self { options,
               environment: RefCell::new(Environment::new()),
               registry: RefCell::new(FunctionRegistry::for_domain(options.domain())) }
    }

    /// Evaluates an expression.
    ///
    /// This is the main entry point for expression evaluation; it dispatches
    /// on the expression variant.
    ///
    /// # Returns
    /// [`Evaluated::Ready`] with the value, or [`Evaluated::Deferred`] with a
    /// residual tree when some name is unbound and the frame allows it.
    pub fn eval(&self, expr: &Expr, frame: &mut Frame<'_>) -> EvalResult<Evaluated> {
        match expr {
            Expr::Literal { value } => Ok(Evaluated::Ready(self.coerce(*value)?)),
            Expr::Variable { name } => self.eval_variable(name, frame),
            Expr::UnaryOp { op, expr } => self.eval_unary_op(*op, expr, frame),
            Expr::BinaryOp { left, op, right } => self.eval_binary_op(left, *op, right, frame),
            Expr::FunctionCall { name, arguments } => {
                self.eval_function_call(name, arguments, frame)
            },
        }
    }

    /// Evaluates a single statement.
    ///
    /// An assignment evaluates its right-hand side first and then stores
    /// either the number or, if it is still deferred, the residual tree. In
    /// both cases the statement's own result is the right-hand side.
    ///
    /// # Errors
    /// Besides evaluation errors, assignments fail with `VariablesDisabled`
    /// when variables are switched off.
    pub fn eval_statement(&self, statement: &Statement, frame: &mut Frame<'_>) -> EvalResult<Evaluated> {
        match statement {
            Statement::Expression { expr } => self.eval(expr, frame),
            Statement::Assignment { name, value } => {
                let result = self.eval(value, frame)?;
                if !self.options.allow_variables {
                    return Err(RuntimeError::VariablesDisabled { name: name.clone() });
                }

                let binding = match &result {
                    Evaluated::Ready(value) => Binding::Value(*value),
                    Evaluated::Deferred { expr, .. } => Binding::Deferred(expr.clone()),
                };
                trace!(%name, %binding, "assigned variable");
                self.environment.borrow_mut().set(name.clone(), binding);

                Ok(result)
            },
        }
    }

    /// Resolves a name.
    ///
    /// Lookup order is one-shot bindings, then variables, then constants.
    /// One-shot bindings must be finite.
    /// With variables disabled only constants are visible. A variable bound
    /// to a stored expression is expanded in place; if that expression is
    /// still incomplete its residual replaces the name.
    fn eval_variable(&self, name: &str, frame: &mut Frame<'_>) -> EvalResult<Evaluated> {
        if !self.options.allow_variables {
            return self.environment
                       .borrow()
                       .constant(name)
                       .map(Evaluated::Ready)
                       .ok_or_else(|| RuntimeError::VariablesDisabled { name: name.to_string() });
        }

        if let Some(value) = frame.bindings.and_then(|b| b.get(name)) {
            // Bindings end up as literals in residuals and must parse back.
            if !value.is_finite() {
                return Err(RuntimeError::Domain { details: format!("'{name}' is bound to the non-finite value {value}") });
            }
            return Ok(Evaluated::Ready(self.coerce(*value)?));
        }

        if !frame.is_resolving(name) {
            let binding = self.environment.borrow().get(name).cloned();
            match binding {
                Some(Binding::Value(value)) => return Ok(Evaluated::Ready(self.coerce(value)?)),
                Some(Binding::Deferred(expr)) => {
                    frame.resolving.push(name.to_string());
                    let result = self.eval(&expr, frame);
                    frame.resolving.pop();
                    return result;
                },
                None => {},
            }

            if let Some(value) = self.environment.borrow().constant(name) {
                return Ok(Evaluated::Ready(value));
            }
        }

        if frame.allow_unknown {
            Ok(Evaluated::Deferred { expr: Expr::variable(name),
                                     free: BTreeSet::from([name.to_string()]) })
        } else {
            Err(RuntimeError::UndefinedVariable { name: name.to_string() })
        }
    }

    /// Keeps values inside the active domain.
    ///
    /// In real mode a complex value, whether it comes from a literal, a
    /// binding or a function, is a domain error.
    pub(crate) fn coerce(&self, value: Value) -> EvalResult<Value> {
        match value {
            Value::Complex(c) if !self.options.complex_mode => {
                Err(RuntimeError::Domain { details: format!("{c} is not a real number; enable complex mode") })
            },
            value => Ok(value),
        }
    }
}

impl Context {
    /// Turns a sub-result into the tree it contributes to a residual, plus
    /// the free names it carries.
    ///
    /// A deferred child contributes its residual. A ready child keeps its
    /// original sub-tree so references to variables stay live, with any
    /// one-shot bindings written in as literals, including those read
    /// through stored expressions.
    pub(crate) fn residual(&self,
                           result: Evaluated,
                           original: &Expr,
                           frame: &Frame<'_>)
                           -> (Expr, BTreeSet<String>) {
        match result {
            Evaluated::Deferred { expr, free } => (expr, free),
            Evaluated::Ready(_) => {
                let expr = match frame.bindings {
                    Some(bindings) => self.substitute(original, bindings, &mut frame.resolving.clone()),
                    None => original.clone(),
                };
                (expr, BTreeSet::new())
            },
        }
    }
}
