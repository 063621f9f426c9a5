//! Ready-made value domains for [`mep_solver`].
//!
//! Each module pairs a [`Domain`](mep_solver::Domain) with a `solver()`
//! constructor that registers its functions, operators and synonyms:
//!
//! | Module | Value | Literals | Operators, tightest first |
//! |---|---|---|---|
//! | [`real`] | `f64` | `3.5` | `! ^ * / + -` |
//! | [`logic`] | `bool` | `true`, `false`, `1`, `0` | `~ ^ ∨ ⇒ ⇔` |
//! | [`vector`] | [`Vector`] | `<1,2>` | `* + -` |
//! | [`array`] | [`DoubleArray`] | `[1, 2]` | `* + -` |

mod elementwise;

pub mod array;
pub mod logic;
pub mod real;
pub mod vector;

pub use array::{ArrayDomain, DoubleArray};
pub use logic::{is_satisfiable, truth_assignments, truth_table, LogicDomain, TruthTable};
pub use real::RealDomain;
pub use vector::{Vector, VectorDomain};
