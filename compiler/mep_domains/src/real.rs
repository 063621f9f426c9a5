//! Real arithmetic over `f64`.
//!
//! ```
//! let solver = mep_domains::real::solver();
//! assert_eq!(solver.solve("3+3*3"), Ok(12.0));
//! assert_eq!(solver.solve("2^3!"), Ok(64.0));
//! ```

use mep_solver::errors::{check_arity, invalid_literal, Arity, EvalError, ParseError};
use mep_solver::{Domain, Function, Position, Solver};

/// Finite `f64` literals in Rust float syntax; the empty string is `0`.
///
/// `inf`, `NaN` and the like are names, free to be bound as variables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RealDomain;

impl Domain for RealDomain {
    type Value = f64;

    fn to_value(&self, text: &str) -> Result<f64, ParseError> {
        if text.is_empty() {
            return Ok(0.0);
        }
        match text.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(invalid_literal(text)),
        }
    }
}

/// A solver with trigonometry, logarithms, `!`, `^`, `*`, `/`, `+` and `-`.
pub fn solver() -> Solver<RealDomain> {
    let mut solver = Solver::new(RealDomain, Function::new("multiply", multiply));
    for (name, f) in [
        ("sin", f64::sin as fn(f64) -> f64),
        ("cos", f64::cos),
        ("tan", f64::tan),
        ("log", f64::log10),
        ("ln", f64::ln),
    ] {
        solver.add_function(unary(name, f));
    }
    solver.add_operator('!', "factorial", Position::Before);
    solver.add_function(Function::new("factorial", factorial));
    solver.add_operator('^', "power", Position::BeforeAndAfter);
    solver.add_function(binary("power", f64::powf));
    solver.add_synonym("times", "*");
    solver.add_operator('*', "multiply", Position::BeforeAndAfter);
    solver.add_operator('/', "divide", Position::BeforeAndAfter);
    solver.add_function(binary("divide", |a, b| a / b));
    solver.add_operator('+', "sum", Position::BeforeAndAfter);
    solver.add_function(Function::new("sum", sum));
    solver.add_operator('-', "difference", Position::BeforeAndAfter);
    solver.add_function(binary("difference", |a, b| a - b));
    solver
}

fn unary(name: &'static str, f: fn(f64) -> f64) -> Function<f64> {
    Function::new(name, move |args: Vec<f64>| {
        check_arity(name, &args, Arity::Exactly(1))?;
        Ok(f(args[0]))
    })
}

fn binary(name: &'static str, f: fn(f64, f64) -> f64) -> Function<f64> {
    Function::new(name, move |args: Vec<f64>| {
        check_arity(name, &args, Arity::Exactly(2))?;
        Ok(f(args[0], args[1]))
    })
}

fn multiply(args: Vec<f64>) -> Result<f64, EvalError> {
    check_arity("multiply", &args, Arity::AtLeast(1))?;
    Ok(args.into_iter().product())
}

fn sum(args: Vec<f64>) -> Result<f64, EvalError> {
    check_arity("sum", &args, Arity::AtLeast(1))?;
    Ok(args.into_iter().sum())
}

/// Product of `1..=n` after truncating `n` toward zero; `1` for `n < 2`.
fn factorial(args: Vec<f64>) -> Result<f64, EvalError> {
    check_arity("factorial", &args, Arity::Exactly(1))?;
    let n = args[0].trunc();
    let mut product = 1.0;
    let mut k = 2.0;
    while k <= n {
        product *= k;
        k += 1.0;
    }
    Ok(product)
}
