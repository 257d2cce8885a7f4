use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::core::{Context, EvalResult, Evaluated, Frame},
        value::Value,
    },
};

impl Context {
    /// Evaluates a binary operation node.
    ///
    /// Both sides are evaluated, left first. If either is deferred the node
    /// becomes deferred: deferred sides contribute their residual, ready
    /// sides stay as written, and the free names of both sides are merged.
    pub(crate) fn eval_binary_op(&self,
                                 left: &Expr,
                                 op: BinaryOperator,
                                 right: &Expr,
                                 frame: &mut Frame<'_>)
                                 -> EvalResult<Evaluated> {
        let lhs = self.eval(left, frame)?;
        let rhs = self.eval(right, frame)?;

        match (lhs, rhs) {
            (Evaluated::Ready(l), Evaluated::Ready(r)) => {
                Ok(Evaluated::Ready(self.eval_binary(op, l, r)?))
            },
            (lhs, rhs) => {
                let (left, mut free) = self.residual(lhs, left, frame);
                let (right, right_free) = self.residual(rhs, right, frame);
                free.extend(right_free);

                Ok(Evaluated::Deferred { expr: Expr::BinaryOp { left: Box::new(left),
                                                                op,
                                                                right: Box::new(right) },
                                         free })
            },
        }
    }

    /// Evaluates a binary operation on two values.
    ///
    /// # Parameters
    /// - `op`: The binary operator.
    /// - `left`: Left operand; the index for [`BinaryOperator::Root`].
    /// - `right`: Right operand; the radicand for [`BinaryOperator::Root`].
    ///
    /// # Example
    /// ```
    /// use mapa::{Options, ast::BinaryOperator, interpreter::{evaluator::core::Context, value::Value}};
    ///
    /// let context = Context::new(Options::default());
    /// let cube_root = context.eval_binary(BinaryOperator::Root, Value::Real(3.0), Value::Real(8.0))
    ///                        .unwrap();
    /// assert!((cube_root.as_real().unwrap() - 2.0).abs() < 1e-12);
    /// ```
    pub fn eval_binary(&self, op: BinaryOperator, left: Value, right: Value) -> EvalResult<Value> {
        match op {
            BinaryOperator::Add | BinaryOperator::Sub | BinaryOperator::Mul | BinaryOperator::Div => {
                Self::eval_scalar_op(op, left, right)
            },
            BinaryOperator::Pow => self.eval_pow(left, right),
            BinaryOperator::Root => self.eval_root(left, right),
        }
    }
}
