//! Component-wise arithmetic shared by the vector and array domains.

use mep_solver::errors::{domain_error, EvalError};

/// Combine two equally long slices component by component.
pub(crate) fn zip_with(
    name: &str,
    left: &[f64],
    right: &[f64],
    op: impl Fn(f64, f64) -> f64,
) -> Result<Vec<f64>, EvalError> {
    if left.len() != right.len() {
        return Err(length_mismatch(name, left.len(), right.len()));
    }
    Ok(left.iter().zip(right).map(|(&l, &r)| op(l, r)).collect())
}

/// An empty left operand stands for zeros, so `-x` negates.
pub(crate) fn subtract(name: &str, left: &[f64], right: &[f64]) -> Result<Vec<f64>, EvalError> {
    if left.is_empty() {
        return Ok(right.iter().map(|r| -r).collect());
    }
    zip_with(name, left, right, |l, r| l - r)
}

#[cold]
pub(crate) fn length_mismatch(name: &str, left: usize, right: usize) -> EvalError {
    domain_error(name, format!("length mismatch: {left} and {right}"))
}

/// Parse comma-separated components, ignoring surrounding whitespace.
pub(crate) fn parse_components(body: &str) -> Option<Vec<f64>> {
    if body.trim().is_empty() {
        return Some(Vec::new());
    }
    body.split(',')
        .map(|part| part.trim().parse().ok().filter(|value: &f64| value.is_finite()))
        .collect()
}

/// Components joined by commas, without brackets.
pub(crate) fn join(components: &[f64]) -> String {
    components
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
