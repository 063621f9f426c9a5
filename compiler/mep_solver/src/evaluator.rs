//! Function registry and tree evaluation.

use std::fmt;

use mep_stack::ensure_sufficient_stack;
use rustc_hash::FxHashMap;

use crate::errors::{undefined_function, EvalError};
use crate::evaluable::Evaluable;
use crate::function::Function;

/// Evaluates [`Evaluable`] trees against a set of named functions.
///
/// Arguments are evaluated eagerly, left to right, before the function that
/// receives them is looked up.
pub struct Evaluator<V> {
    functions: FxHashMap<String, Function<V>>,
}

impl<V> Evaluator<V> {
    pub fn new() -> Self {
        Evaluator {
            functions: FxHashMap::default(),
        }
    }

    /// Register `function` under its name, returning any function it replaces.
    pub fn add_function(&mut self, function: Function<V>) -> Option<Function<V>> {
        self.functions.insert(function.name().to_string(), function)
    }

    pub fn get(&self, name: &str) -> Option<&Function<V>> {
        self.functions.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl<V: Clone> Evaluator<V> {
    /// Compute the value of `expr`.
    ///
    /// A call with the empty name is a bare grouping and yields its first
    /// argument; `(3,4)` evaluates to `3`. Literals are cloned out of the tree.
    pub fn evaluate(&self, expr: &Evaluable<V>) -> Result<V, EvalError> {
        ensure_sufficient_stack(|| match expr {
            Evaluable::Literal(value) => Ok(value.clone()),
            Evaluable::Call { function, args } => {
                let values = args
                    .iter()
                    .map(|arg| self.evaluate(arg))
                    .collect::<Result<Vec<_>, _>>()?;
                if function.is_empty() {
                    return values.into_iter().next().ok_or(EvalError::EmptyGroup);
                }
                let Some(body) = self.functions.get(function.as_str()) else {
                    return Err(undefined_function(function.as_str()));
                };
                tracing::trace!(%function, args = values.len(), "call");
                body.call(values)
            }
        })
    }
}

impl<V> Default for Evaluator<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Clone for Evaluator<V> {
    fn clone(&self) -> Self {
        Evaluator {
            functions: self.functions.clone(),
        }
    }
}

impl<V> fmt::Debug for Evaluator<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Evaluator").field("functions", &names).finish()
    }
}

#[cfg(test)]
mod tests;
