use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context {
    /// Evaluates `+`, `-`, `*` and `/`.
    ///
    /// Two reals stay real. As soon as one side is complex both are widened
    /// and the result is complex, even when its imaginary part cancels out.
    ///
    /// # Errors
    /// `DivisionByZero` for a zero divisor, real or complex.
    pub(crate) fn eval_scalar_op(op: BinaryOperator, left: Value, right: Value) -> EvalResult<Value> {
        if let (Value::Real(l), Value::Real(r)) = (left, right) {
            return match op {
                BinaryOperator::Add => Ok(Value::Real(l + r)),
                BinaryOperator::Sub => Ok(Value::Real(l - r)),
                BinaryOperator::Mul => Ok(Value::Real(l * r)),
                BinaryOperator::Div if r == 0.0 => Err(RuntimeError::DivisionByZero),
                BinaryOperator::Div => Ok(Value::Real(l / r)),
                BinaryOperator::Pow | BinaryOperator::Root => unreachable!(),
            };
        }

        let (l, r) = (left.as_complex(), right.as_complex());
        let result = match op {
            BinaryOperator::Add => l + r,
            BinaryOperator::Sub => l - r,
            BinaryOperator::Mul => l * r,
            BinaryOperator::Div if r.is_zero() => return Err(RuntimeError::DivisionByZero),
            BinaryOperator::Div => l / r,
            BinaryOperator::Pow | BinaryOperator::Root => unreachable!(),
        };
        Ok(Value::Complex(result))
    }
}
