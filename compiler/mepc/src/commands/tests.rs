use pretty_assertions::assert_eq;

use super::*;

fn invocation(action: Action, domain: DomainKind, expression: &str) -> Invocation {
    Invocation {
        action,
        domain,
        expression: expression.to_string(),
        bindings: Vec::new(),
    }
}

fn output(invocation: &Invocation) -> String {
    match run(invocation) {
        Ok(output) => output,
        Err(err) => panic!("`{}` failed: {err}", invocation.expression),
    }
}

fn eval(domain: DomainKind, expression: &str) -> String {
    output(&invocation(Action::Eval, domain, expression))
}

#[test]
fn eval_each_domain() {
    assert_eq!(eval(DomainKind::Real, "3+3*3"), "12");
    assert_eq!(eval(DomainKind::Logic, "true^~false"), "true");
    assert_eq!(eval(DomainKind::Vector, "<1,2>+<2,3>"), "<3,5>");
    assert_eq!(eval(DomainKind::Array, "[3,4]([4,5])[6,7]"), "[72,140]");
}

#[test]
fn eval_with_bindings() {
    let mut call = invocation(Action::Eval, DomainKind::Real, "x*y");
    call.bindings = vec![("x".into(), "2".into()), ("y".into(), "3".into())];
    assert_eq!(output(&call), "6");
}

#[test]
fn vars_lists_sorted_names() {
    assert_eq!(output(&invocation(Action::Vars, DomainKind::Real, "E+A")), "A E");
    let mut call = invocation(Action::Vars, DomainKind::Real, "E+A");
    call.bindings = vec![("E".into(), "2.71".into())];
    assert_eq!(output(&call), "A");
}

#[test]
fn rewrite_shows_call_form() {
    assert_eq!(
        output(&invocation(Action::Rewrite, DomainKind::Real, "3+3*3")),
        "((sum(3,(multiply(3,3)))))"
    );
}

#[test]
fn logic_queries() {
    assert_eq!(output(&invocation(Action::Sat, DomainKind::Logic, "~p^p")), "unsatisfiable");
    assert_eq!(output(&invocation(Action::Sat, DomainKind::Logic, "~p^q")), "satisfiable");
    assert_eq!(
        output(&invocation(Action::Table, DomainKind::Logic, "~p")),
        "p | result\nT | F\nF | T\n"
    );
}

#[test]
fn errors_surface() {
    let result = run(&invocation(Action::Eval, DomainKind::Real, "unknownFunc(3)"));
    assert!(matches!(result, Err(CliError::Solve(SolveError::Eval(_)))));
    let result = run(&invocation(Action::Vars, DomainKind::Real, "1,2"));
    assert!(result.is_ok());
    let result = run(&invocation(Action::Sat, DomainKind::Real, "p"));
    assert!(matches!(result, Err(CliError::LogicOnly { .. })));
}
