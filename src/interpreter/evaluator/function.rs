use std::collections::BTreeSet;

use tracing::trace;

use crate::{
    ast::Expr,
    interpreter::evaluator::core::{Context, EvalResult, Evaluated, Frame},
};

impl Context {
    /// Evaluates a function call.
    ///
    /// The function is resolved by name and argument count before any
    /// argument is evaluated, so an unknown function or a wrong arity is
    /// reported even when the arguments would fail too. Arguments are then
    /// evaluated left to right. If any of them is deferred, the call is
    /// deferred with the residual arguments; otherwise the function runs and
    /// its result is checked against the active domain.
    ///
    /// # Errors
    /// - `UnknownFunction` / `Arity` from the registry lookup.
    /// - Errors raised by an argument or by the function itself.
    pub(crate) fn eval_function_call(&self,
                                     name: &str,
                                     arguments: &[Expr],
                                     frame: &mut Frame<'_>)
                                     -> EvalResult<Evaluated> {
        let entry = self.registry.borrow().lookup(name, arguments.len())?.clone();

        let mut evaluated = Vec::with_capacity(arguments.len());
        for argument in arguments {
            evaluated.push(self.eval(argument, frame)?);
        }

        if evaluated.iter().all(|e| matches!(e, Evaluated::Ready(_))) {
            let values: Vec<_> = evaluated.into_iter()
                                          .filter_map(|e| match e {
                                              Evaluated::Ready(value) => Some(value),
                                              Evaluated::Deferred { .. } => None,
                                          })
                                          .collect();
            let result = entry.call(&values)?;
            trace!(%name, ?values, %result, "called function");
            return Ok(Evaluated::Ready(self.coerce(result)?));
        }

        let mut free = BTreeSet::new();
        let residual = evaluated.into_iter()
                                .zip(arguments)
                                .map(|(result, original)| {
                                    let (expr, names) = self.residual(result, original, frame);
                                    free.extend(names);
                                    expr
                                })
                                .collect();

        Ok(Evaluated::Deferred { expr: Expr::FunctionCall { name:      name.to_string(),
                                                            arguments: residual, },
                                 free })
    }
}
