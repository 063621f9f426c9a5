use pretty_assertions::assert_eq;

use super::*;
use crate::errors::{check_arity, domain_error, Arity};

fn lit(value: i64) -> Evaluable<i64> {
    Evaluable::Literal(value)
}

fn evaluator() -> Evaluator<i64> {
    let mut evaluator = Evaluator::new();
    evaluator.add_function(Function::new("sum", |args: Vec<i64>| Ok(args.into_iter().sum())));
    evaluator.add_function(Function::new("half", |args: Vec<i64>| {
        check_arity("half", &args, Arity::Exactly(1))?;
        if args[0] % 2 != 0 {
            return Err(domain_error("half", "odd argument"));
        }
        Ok(args[0] / 2)
    }));
    evaluator
}

#[test]
fn literal_is_its_value() {
    assert_eq!(evaluator().evaluate(&lit(7)), Ok(7));
}

#[test]
fn nested_calls() {
    let expr = Evaluable::call(
        "sum",
        vec![lit(1), Evaluable::call("half", vec![lit(8)]), lit(3)],
    );
    assert_eq!(evaluator().evaluate(&expr), Ok(8));
}

#[test]
fn grouping_yields_first_argument() {
    let expr = Evaluable::call("", vec![lit(3), lit(4)]);
    assert_eq!(evaluator().evaluate(&expr), Ok(3));
}

#[test]
fn empty_grouping_fails() {
    let expr = Evaluable::call("", Vec::new());
    assert_eq!(evaluator().evaluate(&expr), Err(EvalError::EmptyGroup));
}

#[test]
fn unknown_function_fails() {
    let expr = Evaluable::call("unknownFunc", vec![lit(3)]);
    assert_eq!(
        evaluator().evaluate(&expr),
        Err(EvalError::UndefinedFunction {
            name: "unknownFunc".into()
        })
    );
}

#[test]
fn argument_errors_surface_first() {
    let expr = Evaluable::call("unknownFunc", vec![Evaluable::call("half", vec![lit(3)])]);
    assert_eq!(
        evaluator().evaluate(&expr),
        Err(EvalError::Domain {
            name: "half".into(),
            message: "odd argument".into(),
        })
    );
}

#[test]
fn arity_checked_by_body() {
    let expr = Evaluable::call("half", vec![lit(2), lit(4)]);
    assert_eq!(
        evaluator().evaluate(&expr),
        Err(EvalError::ArityMismatch {
            name: "half".into(),
            expected: Arity::Exactly(1),
            got: 2,
        })
    );
}

#[test]
fn reregistering_overwrites() {
    let mut evaluator = evaluator();
    let replaced = evaluator.add_function(Function::new("sum", |_: Vec<i64>| Ok(0)));
    assert!(replaced.is_some());
    assert_eq!(evaluator.len(), 2);
    assert_eq!(evaluator.evaluate(&Evaluable::call("sum", vec![lit(5)])), Ok(0));
}

#[test]
fn deep_tree_evaluates() {
    let mut expr = lit(1);
    for _ in 0..10_000 {
        expr = Evaluable::call("", vec![expr]);
    }
    assert_eq!(evaluator().evaluate(&expr), Ok(1));
}
