use crate::{
    ast::{Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult, Evaluated, Frame},
        value::{Value, complex::ComplexNumber},
    },
};

impl Context {
    /// Evaluates a unary operation node.
    ///
    /// A deferred operand yields a deferred result wrapping its residual.
    pub(crate) fn eval_unary_op(&self,
                                op: UnaryOperator,
                                operand: &Expr,
                                frame: &mut Frame<'_>)
                                -> EvalResult<Evaluated> {
        match self.eval(operand, frame)? {
            Evaluated::Ready(value) => Ok(Evaluated::Ready(self.eval_unary(op, value)?)),
            Evaluated::Deferred { expr, free } => {
                Ok(Evaluated::Deferred { expr: Expr::UnaryOp { op,
                                                               expr: Box::new(expr) },
                                         free })
            },
        }
    }

    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: numeric negation.
    /// - `Root`: principal square root.
    ///
    /// # Example
    /// ```
    /// use mapa::{Options, ast::UnaryOperator, interpreter::{evaluator::core::Context, value::Value}};
    ///
    /// let real = Context::new(Options::default());
    /// assert_eq!(real.eval_unary(UnaryOperator::Root, Value::Real(9.0)).unwrap(), Value::Real(3.0));
    /// assert!(real.eval_unary(UnaryOperator::Root, Value::Real(-4.0)).is_err());
    ///
    /// let complex = Context::new(Options { complex_mode: true, ..Options::default() });
    /// let root = complex.eval_unary(UnaryOperator::Root, Value::Real(-4.0)).unwrap();
    /// assert_eq!(root.to_string(), "2j");
    /// ```
    pub fn eval_unary(&self, op: UnaryOperator, value: Value) -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => match value {
                Value::Real(r) => Ok(Value::Real(-r)),
                Value::Complex(c) => Ok(Value::Complex(-c)),
            },
            UnaryOperator::Root => self.eval_sqrt(value),
        }
    }

    /// Principal square root.
    ///
    /// Negative reals have no real root; complex mode answers with a purely
    /// imaginary number instead.
    pub(crate) fn eval_sqrt(&self, value: Value) -> EvalResult<Value> {
        match value {
            Value::Real(r) if r < 0.0 => {
                if self.options.complex_mode {
                    Ok(Value::Complex(ComplexNumber::new(0.0, (-r).sqrt())))
                } else {
                    Err(RuntimeError::Domain { details: format!("square root of negative number {r}") })
                }
            },
            Value::Real(r) => Ok(Value::Real(r.sqrt())),
            Value::Complex(c) => Ok(Value::Complex(c.sqrt())),
        }
    }
}
