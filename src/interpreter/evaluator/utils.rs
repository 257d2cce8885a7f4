use std::collections::{BTreeSet, HashMap};

use crate::{
    ast::Expr,
    interpreter::{environment::Binding, evaluator::core::Context, value::Value},
};

impl Context {
    /// Collects the names in `expr` that the current environment cannot
    /// resolve.
    ///
    /// Variables bound to stored expressions are followed, so a name counts
    /// as free if anything it expands to is free. A name reached again while
    /// it is being expanded counts as free too, which keeps
    /// self-referencing bindings from looping.
    ///
    /// # Parameters
    /// - `expr`: The tree to inspect.
    /// - `resolving`: Names being expanded by the caller; normally empty.
    ///
    /// # Example
    /// ```
    /// use mapa::{Options, ast::Expr, interpreter::evaluator::core::Context};
    ///
    /// let context = Context::new(Options::default());
    /// let expr = Expr::FunctionCall { name:      "atan2".to_string(),
    ///                                 arguments: vec![Expr::variable("y"), Expr::variable("pi")], };
    /// let free = context.free_names(&expr, &mut Vec::new());
    /// assert_eq!(free.into_iter().collect::<Vec<_>>(), vec!["y".to_string()]);
    /// ```
    #[must_use]
    pub fn free_names(&self, expr: &Expr, resolving: &mut Vec<String>) -> BTreeSet<String> {
        match expr {
            Expr::Literal { .. } => BTreeSet::new(),
            Expr::Variable { name } => self.free_names_of_variable(name, resolving),
            Expr::UnaryOp { expr, .. } => self.free_names(expr, resolving),
            Expr::BinaryOp { left, right, .. } => {
                let mut free = self.free_names(left, resolving);
                free.extend(self.free_names(right, resolving));
                free
            },
            Expr::FunctionCall { arguments, .. } => {
                arguments.iter()
                         .flat_map(|argument| self.free_names(argument, resolving))
                         .collect()
            },
        }
    }

    fn free_names_of_variable(&self, name: &str, resolving: &mut Vec<String>) -> BTreeSet<String> {
        let unbound = || BTreeSet::from([name.to_string()]);
        if resolving.iter().any(|n| n == name) {
            return unbound();
        }

        let binding = self.environment.borrow().get(name).cloned();
        match binding {
            Some(Binding::Value(_)) => BTreeSet::new(),
            Some(Binding::Deferred(expr)) => {
                resolving.push(name.to_string());
                let free = self.free_names(&expr, resolving);
                resolving.pop();
                free
            },
            None if self.environment.borrow().constant(name).is_some() => BTreeSet::new(),
            None => unbound(),
        }
    }

    /// Writes one-shot `bindings` into `expr` as literals.
    ///
    /// A variable bound to a stored expression that itself reads one of the
    /// bindings is replaced by that expression with the bindings written in,
    /// so the result no longer depends on them. Other names are kept as
    /// references.
    ///
    /// # Parameters
    /// - `expr`: The tree to rewrite.
    /// - `bindings`: The one-shot values.
    /// - `resolving`: Stored expressions being expanded by the caller;
    ///   normally empty.
    #[must_use]
    pub fn substitute(&self,
                      expr: &Expr,
                      bindings: &HashMap<String, Value>,
                      resolving: &mut Vec<String>)
                      -> Expr {
        match expr {
            Expr::Variable { name } => self.substitute_variable(expr, name, bindings, resolving),
            Expr::Literal { .. } => expr.clone(),
            Expr::UnaryOp { op, expr } => {
                Expr::UnaryOp { op:   *op,
                                expr: Box::new(self.substitute(expr, bindings, resolving)), }
            },
            Expr::BinaryOp { left, op, right } => {
                Expr::BinaryOp { left:  Box::new(self.substitute(left, bindings, resolving)),
                                 op:    *op,
                                 right: Box::new(self.substitute(right, bindings, resolving)), }
            },
            Expr::FunctionCall { name, arguments } => {
                Expr::FunctionCall { name:      name.clone(),
                                     arguments: arguments.iter()
                                                         .map(|argument| {
                                                             self.substitute(argument, bindings, resolving)
                                                         })
                                                         .collect(), }
            },
        }
    }

    fn substitute_variable(&self,
                           expr: &Expr,
                           name: &str,
                           bindings: &HashMap<String, Value>,
                           resolving: &mut Vec<String>)
                           -> Expr {
        if !self.options.allow_variables {
            return expr.clone();
        }
        if let Some(value) = bindings.get(name) {
            return Expr::literal(*value);
        }
        if resolving.iter().any(|n| n == name) {
            return expr.clone();
        }

        let binding = self.environment.borrow().get(name).cloned();
        let Some(Binding::Deferred(stored)) = binding else {
            return expr.clone();
        };

        resolving.push(name.to_string());
        let expanded = self.substitute(&stored, bindings, resolving);
        resolving.pop();

        if expanded == stored { expr.clone() } else { expanded }
    }
}
