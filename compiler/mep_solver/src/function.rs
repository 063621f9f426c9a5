//! Named functions callable from expressions.
//!
//! A [`Function`] is a name plus a closure over the evaluated argument list.
//! Operators, implicit multiplication and explicit calls such as `sin(x)` all
//! end up invoking one of these through the [`Evaluator`](crate::Evaluator).

use std::fmt;
use std::sync::Arc;

use crate::errors::EvalError;

/// Signature of a function body: the evaluated arguments, left to right.
pub type FunctionFn<V> = dyn Fn(Vec<V>) -> Result<V, EvalError> + Send + Sync;

/// A named function over values of type `V`.
///
/// Cloning is cheap; the body is shared.
pub struct Function<V> {
    name: String,
    body: Arc<FunctionFn<V>>,
}

impl<V> Function<V> {
    /// Create a function from a name and a body.
    ///
    /// ```
    /// use mep_solver::errors::{check_arity, Arity};
    /// use mep_solver::Function;
    ///
    /// let negate = Function::new("negate", |args: Vec<f64>| {
    ///     check_arity("negate", &args, Arity::Exactly(1))?;
    ///     Ok(-args[0])
    /// });
    /// assert_eq!(negate.call(vec![2.0]), Ok(-2.0));
    /// ```
    pub fn new<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(Vec<V>) -> Result<V, EvalError> + Send + Sync + 'static,
    {
        Function {
            name: name.into(),
            body: Arc::new(body),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the body with already-evaluated arguments.
    pub fn call(&self, args: Vec<V>) -> Result<V, EvalError> {
        (self.body)(args)
    }
}

impl<V> Clone for Function<V> {
    fn clone(&self) -> Self {
        Function {
            name: self.name.clone(),
            body: Arc::clone(&self.body),
        }
    }
}

impl<V> fmt::Debug for Function<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
