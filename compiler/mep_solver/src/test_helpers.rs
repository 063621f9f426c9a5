//! A small real-number domain shared by the unit tests.

use crate::errors::{check_arity, domain_error, invalid_literal, Arity, EvalError, ParseError};
use crate::{Domain, Function, Position, Solver};

pub(crate) struct Numbers;

impl Domain for Numbers {
    type Value = f64;

    fn to_value(&self, text: &str) -> Result<f64, ParseError> {
        if text.is_empty() {
            return Ok(0.0);
        }
        text.parse().map_err(|_| invalid_literal(text))
    }
}

fn multiply(args: Vec<f64>) -> Result<f64, EvalError> {
    check_arity("multiply", &args, Arity::AtLeast(1))?;
    Ok(args.into_iter().product())
}

fn sum(args: Vec<f64>) -> Result<f64, EvalError> {
    check_arity("sum", &args, Arity::AtLeast(1))?;
    Ok(args.into_iter().sum())
}

fn difference(args: Vec<f64>) -> Result<f64, EvalError> {
    check_arity("difference", &args, Arity::Exactly(2))?;
    Ok(args[0] - args[1])
}

fn factorial(args: Vec<f64>) -> Result<f64, EvalError> {
    check_arity("factorial", &args, Arity::Exactly(1))?;
    let n = args[0];
    if n < 0.0 {
        return Err(domain_error("factorial", "negative argument"));
    }
    let mut acc = 1.0;
    let mut k = 2.0;
    while k <= n {
        acc *= k;
        k += 1.0;
    }
    Ok(acc)
}

fn sin(args: Vec<f64>) -> Result<f64, EvalError> {
    check_arity("sin", &args, Arity::Exactly(1))?;
    Ok(args[0].sin())
}

/// `!` binds tightest, then `*`, `+` and `-`.
pub(crate) fn numbers() -> Solver<Numbers> {
    let mut solver = Solver::new(Numbers, Function::new("multiply", multiply));
    solver.add_function(Function::new("sum", sum));
    solver.add_function(Function::new("difference", difference));
    solver.add_function(Function::new("factorial", factorial));
    solver.add_function(Function::new("sin", sin));
    solver.add_operator('!', "factorial", Position::Before);
    solver.add_operator('*', "multiply", Position::BeforeAndAfter);
    solver.add_operator('+', "sum", Position::BeforeAndAfter);
    solver.add_operator('-', "difference", Position::BeforeAndAfter);
    solver
}
