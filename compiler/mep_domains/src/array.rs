//! Arrays of `f64` written `[1, 2, 3]`, combined component by component.

use std::fmt;

use mep_solver::errors::{check_arity, invalid_literal, Arity, EvalError, ParseError};
use mep_solver::{Domain, Function, Position, Solver};

use crate::elementwise::{join, parse_components, subtract, zip_with};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DoubleArray(pub Vec<f64>);

impl DoubleArray {
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<f64>> for DoubleArray {
    fn from(values: Vec<f64>) -> Self {
        DoubleArray(values)
    }
}

impl fmt::Display for DoubleArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", join(&self.0))
    }
}

/// `[a, b, …]` literals. Brackets and spaces are ignored, so `1,2` and
/// `[1, 2]` read the same; the empty string is the empty array.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArrayDomain;

impl Domain for ArrayDomain {
    type Value = DoubleArray;

    fn to_value(&self, text: &str) -> Result<DoubleArray, ParseError> {
        let cleaned: String = text
            .chars()
            .filter(|c| !matches!(c, '[' | ']' | ' '))
            .collect();
        parse_components(&cleaned)
            .map(DoubleArray)
            .ok_or_else(|| invalid_literal(text))
    }

    fn number_wrappers(&self) -> Vec<(char, char)> {
        vec![('[', ']')]
    }
}

/// A solver with element-wise `*`, `+` and `-`.
pub fn solver() -> Solver<ArrayDomain> {
    let mut solver = Solver::new(ArrayDomain, Function::new("multiply", multiply));
    solver.add_synonym("times", "*");
    solver.add_operator('*', "multiply", Position::BeforeAndAfter);
    solver.add_operator('+', "sum", Position::BeforeAndAfter);
    solver.add_function(Function::new("sum", sum));
    solver.add_operator('-', "difference", Position::BeforeAndAfter);
    solver.add_function(Function::new("difference", difference));
    solver
}

fn fold(
    name: &str,
    args: Vec<DoubleArray>,
    op: impl Fn(f64, f64) -> f64 + Copy,
) -> Result<DoubleArray, EvalError> {
    check_arity(name, &args, Arity::AtLeast(1))?;
    let mut args = args.into_iter();
    let mut acc = args.next().unwrap_or_default().0;
    for next in args {
        acc = zip_with(name, &acc, &next.0, op)?;
    }
    Ok(DoubleArray(acc))
}

fn multiply(args: Vec<DoubleArray>) -> Result<DoubleArray, EvalError> {
    fold("multiply", args, |a, b| a * b)
}

fn sum(args: Vec<DoubleArray>) -> Result<DoubleArray, EvalError> {
    fold("sum", args, |a, b| a + b)
}

/// `difference(a, b, …)` is `a - b`; any further arguments are ignored.
fn difference(args: Vec<DoubleArray>) -> Result<DoubleArray, EvalError> {
    check_arity("difference", &args, Arity::AtLeast(2))?;
    subtract("difference", &args[0].0, &args[1].0).map(DoubleArray)
}
