use mep_solver::SolveError;
use pretty_assertions::assert_eq;

use super::*;

fn v(components: &[f64]) -> Vector {
    Vector(components.to_vec())
}

/// `projection(a, b)`: the component of `a` along `b`.
fn projection(args: Vec<Vector>) -> Result<Vector, EvalError> {
    check_arity("projection", &args, Arity::Exactly(2))?;
    let numerator = args[0].dot(&args[1])?;
    let denominator = args[1].dot(&args[1])?;
    Ok(args[1].scale(numerator / denominator))
}

#[test]
fn literals() {
    assert_eq!(VectorDomain.to_value(""), Ok(v(&[])));
    assert_eq!(VectorDomain.to_value("<>"), Ok(v(&[])));
    assert_eq!(VectorDomain.to_value("<1, 2.5>"), Ok(v(&[1.0, 2.5])));
    assert_eq!(VectorDomain.to_value("1,2"), Err(invalid_literal("1,2")));
    assert_eq!(VectorDomain.to_value("<1,a>"), Err(invalid_literal("<1,a>")));
    assert_eq!(VectorDomain.number_wrappers(), vec![('<', '>')]);
}

#[test]
fn display() {
    assert_eq!(v(&[1.0, 2.5]).to_string(), "<1,2.5>");
    assert_eq!(v(&[]).to_string(), "<>");
}

#[test]
fn dot_product() {
    let solver = solver();
    assert_eq!(solver.solve("<1>*<2>"), Ok(v(&[2.0])));
    for text in ["<1,2>*<2,3>", "<1,2>(<2,3>)", "<1,2><2,3>"] {
        assert_eq!(solver.solve(text), Ok(v(&[8.0])), "{text}");
    }
}

#[test]
fn addition_and_subtraction() {
    let solver = solver();
    assert_eq!(solver.solve("<1,2>+<2,3>"), Ok(v(&[3.0, 5.0])));
    assert_eq!(solver.solve("-<2,3>"), Ok(v(&[-2.0, -3.0])));
    assert_eq!(solver.solve("<3,4>-<2,3>"), Ok(v(&[1.0, 1.0])));
    assert_eq!(solver.solve("<1,1>*<2,3>+<4>"), Ok(v(&[9.0])));
}

#[test]
fn length_mismatch_is_domain_error() {
    let result = solver().solve("<1,2>+<1,2,3>");
    assert_eq!(
        result,
        Err(SolveError::Eval(EvalError::Domain {
            name: "add".into(),
            message: "length mismatch: 2 and 3".into(),
        }))
    );
}

#[test]
fn magnitude_and_scale() {
    let solver = solver();
    assert_eq!(solver.solve("magnitude(<3,4>)"), Ok(v(&[5.0])));
    assert_eq!(solver.solve("scale(<1,2>,<3>)"), Ok(v(&[3.0, 6.0])));
    assert!(solver.solve("scale(<1,2>,<3,4>)").is_err());
}

#[test]
fn projection_sentence() {
    let mut solver = solver();
    solver.add_function(Function::new("projection", projection));
    solver.add_synonym(" ", "");
    solver.add_synonym("onto", ",");
    solver.add_synonym("of", "(");
    assert_eq!(
        solver.solve("projection of <1,2> onto <2,1>"),
        Ok(v(&[8.0 / 5.0, 4.0 / 5.0]))
    );
}
