//! Generic operator-rewriting expression solver.
//!
//! A [`Solver`] evaluates plain-text expressions such as `3+3*3`, `2sin(0)`
//! or `~p^q` over any value type a [`Domain`] can parse. There is no grammar
//! and no precedence table: each registered [`Operator`] is rewritten into a
//! function call, in registration order, and the resulting text is split into
//! a tree along its delimiters.
//!
//! The pieces, leaves first:
//!
//! - [`delimiters`]: opener/closer pairs and the scans over them.
//! - [`operator`]: rewriting `a+b` into `(sum(a,b))`.
//! - [`proto`]: the untyped tree of names and arguments.
//! - [`evaluable`]: the typed tree of literals and calls.
//! - [`evaluator`]: the function registry that computes a typed tree.
//! - [`solver`]: the facade owning all of the above.

mod context;
pub mod delimiters;
mod domain;
pub mod errors;
pub mod evaluable;
pub mod evaluator;
mod function;
pub mod operator;
pub mod proto;
mod shared;
pub mod solver;
mod substitutions;

#[cfg(test)]
mod test_helpers;

pub use delimiters::Delimiters;
pub use domain::Domain;
pub use errors::{EvalError, ParseError, SolveError};
pub use evaluable::Evaluable;
pub use evaluator::Evaluator;
pub use function::{Function, FunctionFn};
pub use operator::{Operator, Position};
pub use proto::ProtoNode;
pub use shared::SharedSolver;
pub use solver::Solver;
pub use substitutions::Substitutions;
