//! Vectors of `f64` written `<1,2,3>`.
//!
//! Juxtaposition and `*` are the dot product, which yields a one-component
//! vector so results stay in the domain.

use std::fmt;

use mep_solver::errors::{check_arity, domain_error, invalid_literal, Arity, EvalError, ParseError};
use mep_solver::{Domain, Function, Position, Solver};

use crate::elementwise::{join, length_mismatch, parse_components, subtract, zip_with};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Vector(pub Vec<f64>);

impl Vector {
    pub fn components(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn dot(&self, other: &Vector) -> Result<f64, EvalError> {
        if self.len() != other.len() {
            return Err(length_mismatch("multiply", self.len(), other.len()));
        }
        Ok(self.0.iter().zip(&other.0).map(|(a, b)| a * b).sum())
    }

    pub fn magnitude(&self) -> f64 {
        self.0.iter().map(|c| c * c).sum::<f64>().sqrt()
    }

    pub fn scale(&self, factor: f64) -> Vector {
        Vector(self.0.iter().map(|c| c * factor).collect())
    }
}

impl From<Vec<f64>> for Vector {
    fn from(components: Vec<f64>) -> Self {
        Vector(components)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", join(&self.0))
    }
}

/// `<a,b,…>` literals; the empty string is the empty vector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VectorDomain;

impl Domain for VectorDomain {
    type Value = Vector;

    fn to_value(&self, text: &str) -> Result<Vector, ParseError> {
        if text.is_empty() {
            return Ok(Vector::default());
        }
        text.trim()
            .strip_prefix('<')
            .and_then(|rest| rest.strip_suffix('>'))
            .and_then(parse_components)
            .map(Vector)
            .ok_or_else(|| invalid_literal(text))
    }

    fn number_wrappers(&self) -> Vec<(char, char)> {
        vec![('<', '>')]
    }
}

/// A solver with dot product (`*`), `+`, `-`, `magnitude` and `scale`.
pub fn solver() -> Solver<VectorDomain> {
    let mut solver = Solver::new(VectorDomain, Function::new("multiply", multiply));
    solver.add_operator('*', "multiply", Position::BeforeAndAfter);
    solver.add_operator('+', "add", Position::BeforeAndAfter);
    solver.add_function(Function::new("add", |args: Vec<Vector>| {
        check_arity("add", &args, Arity::Exactly(2))?;
        zip_with("add", &args[0].0, &args[1].0, |a, b| a + b).map(Vector)
    }));
    solver.add_operator('-', "subtract", Position::BeforeAndAfter);
    solver.add_function(Function::new("subtract", |args: Vec<Vector>| {
        check_arity("subtract", &args, Arity::Exactly(2))?;
        subtract("subtract", &args[0].0, &args[1].0).map(Vector)
    }));
    solver.add_function(Function::new("magnitude", |args: Vec<Vector>| {
        check_arity("magnitude", &args, Arity::Exactly(1))?;
        Ok(Vector(vec![args[0].magnitude()]))
    }));
    solver.add_function(Function::new("scale", scale));
    solver
}

fn multiply(args: Vec<Vector>) -> Result<Vector, EvalError> {
    check_arity("multiply", &args, Arity::Exactly(2))?;
    Ok(Vector(vec![args[0].dot(&args[1])?]))
}

/// `scale(v, <k>)` multiplies every component of `v` by `k`.
fn scale(args: Vec<Vector>) -> Result<Vector, EvalError> {
    check_arity("scale", &args, Arity::Exactly(2))?;
    match args[1].components() {
        [factor] => Ok(args[0].scale(*factor)),
        other => Err(domain_error(
            "scale",
            format!("factor must have 1 component, got {}", other.len()),
        )),
    }
}

#[cfg(test)]
mod tests;
