use std::{
    collections::{BTreeSet, HashMap},
    fmt,
    rc::Rc,
};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        engine::Outcome,
        evaluator::core::{Context, Frame},
        value::Value,
    },
};

/// An expression that could not be fully evaluated because some names were
/// unbound.
///
/// Holds the residual tree and a handle to the parser instance it came from.
/// Later evaluation resolves names against that instance's current state, so
/// variables assigned after the expression was created are seen.
///
/// # Example
/// ```
/// use std::collections::HashMap;
///
/// use mapa::{MathParser, Options, Value};
///
/// let parser = MathParser::new(Options { allow_unknown: true,
///                                        ..Options::default() });
/// let outcome = parser.parse("x * 2 + y").unwrap().unwrap();
/// let deferred = outcome.as_deferred().unwrap();
/// assert_eq!(deferred.to_string(), "x * 2 + y");
///
/// let bindings = HashMap::from([("x".to_string(), Value::Real(3.0)),
///                               ("y".to_string(), Value::Real(1.0))]);
/// assert_eq!(deferred.eval(&bindings).unwrap().value(), Some(Value::Real(7.0)));
/// ```
#[derive(Clone)]
pub struct DeferredExpression {
    expr:    Expr,
    free:    BTreeSet<String>,
    context: Rc<Context>,
}

impl DeferredExpression {
    pub(crate) const fn new(expr: Expr, free: BTreeSet<String>, context: Rc<Context>) -> Self {
        Self { expr, free, context }
    }

    /// The residual tree.
    #[must_use]
    pub const fn expr(&self) -> &Expr {
        &self.expr
    }

    /// Names that were unbound when the expression was created.
    #[must_use]
    pub const fn free_at_construction(&self) -> &BTreeSet<String> {
        &self.free
    }

    /// Names that are unbound right now.
    ///
    /// Recomputed on every call: binding one of the names in the owning
    /// parser removes it from the result.
    #[must_use]
    pub fn undefined(&self) -> BTreeSet<String> {
        self.context.free_names(&self.expr, &mut Vec::new())
    }

    /// Canonical infix rendering, with parentheses only where needed.
    #[must_use]
    pub fn render(&self) -> String {
        self.expr.to_string()
    }

    /// Rendering with every compound sub-expression parenthesized.
    #[must_use]
    pub fn render_parenthesized(&self) -> String {
        self.expr.render_parenthesized()
    }

    /// Evaluates the expression with extra one-shot bindings.
    ///
    /// `bindings` take precedence over variables and constants, and are
    /// forgotten afterwards; the parser's variables are not modified. Names
    /// still unbound leave the result deferred, whatever the parser's
    /// `allow_unknown` option says.
    ///
    /// # Errors
    /// Any evaluation error, e.g. a domain error once the values are known.
    pub fn eval(&self, bindings: &HashMap<String, Value>) -> Result<Outcome, RuntimeError> {
        let mut frame = Frame::with_bindings(bindings);
        let result = self.context.eval(&self.expr, &mut frame)?;
        Ok(Outcome::from_evaluated(result, &self.context))
    }
}

impl fmt::Display for DeferredExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expr)
    }
}

impl fmt::Debug for DeferredExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredExpression")
         .field("expr", &self.expr)
         .field("free", &self.free)
         .finish_non_exhaustive()
    }
}
