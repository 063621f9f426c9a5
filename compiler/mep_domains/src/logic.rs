//! Propositional logic over `bool`, with truth tables and satisfiability.
//!
//! Juxtaposition is conjunction, so `(p)(q)` reads as `p^q`.

use std::fmt;

use mep_solver::errors::{check_arity, invalid_literal, Arity, EvalError, ParseError, SolveError};
use mep_solver::{Domain, Function, Position, Solver};

/// `true` and `false` in any letter case, plus `1` and `0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LogicDomain;

impl Domain for LogicDomain {
    type Value = bool;

    fn to_value(&self, text: &str) -> Result<bool, ParseError> {
        let text = text.trim();
        if text.eq_ignore_ascii_case("true") || text == "1" {
            Ok(true)
        } else if text.eq_ignore_ascii_case("false") || text == "0" {
            Ok(false)
        } else {
            Err(invalid_literal(text))
        }
    }
}

/// A solver with `~` (not), `^` (and), `∨` (or), `⇒` (implies) and
/// `⇔` (biconditional), binding in that order.
pub fn solver() -> Solver<LogicDomain> {
    let mut solver = Solver::new(LogicDomain, binary("and", |p, q| p && q));
    solver.add_function(Function::new("not", |args: Vec<bool>| {
        check_arity("not", &args, Arity::Exactly(1))?;
        Ok(!args[0])
    }));
    solver.add_operator('~', "not", Position::After);
    solver.add_operator('^', "and", Position::BeforeAndAfter);
    solver.add_function(binary("or", |p, q| p || q));
    solver.add_operator('∨', "or", Position::BeforeAndAfter);
    solver.add_function(binary("implies", |p, q| !p || q));
    solver.add_operator('⇒', "implies", Position::BeforeAndAfter);
    solver.add_function(binary("biconditional", |p, q| p == q));
    solver.add_operator('⇔', "biconditional", Position::BeforeAndAfter);
    solver
}

fn binary(name: &'static str, f: fn(bool, bool) -> bool) -> Function<bool> {
    Function::new(name, move |args: Vec<bool>| -> Result<bool, EvalError> {
        check_arity(name, &args, Arity::Exactly(2))?;
        Ok(f(args[0], args[1]))
    })
}

/// One row of inputs: each variable paired with its value.
pub type Assignment = Vec<(String, bool)>;

/// Every true/false assignment of `variables`, in truth-table order.
///
/// The first variable varies slowest and `true` comes before `false`. No
/// variables yield a single empty assignment.
///
/// ```
/// use mep_domains::truth_assignments;
///
/// let rows = truth_assignments(["p", "q"]);
/// assert_eq!(rows.len(), 4);
/// assert_eq!(rows[1], vec![("p".to_string(), true), ("q".to_string(), false)]);
/// ```
pub fn truth_assignments<'a>(variables: impl IntoIterator<Item = &'a str>) -> Vec<Assignment> {
    let mut rows: Vec<Assignment> = vec![Vec::new()];
    for name in variables {
        rows = rows
            .into_iter()
            .flat_map(|row| {
                [true, false].into_iter().map(move |value| {
                    let mut row = row.clone();
                    row.push((name.to_string(), value));
                    row
                })
            })
            .collect();
    }
    rows
}

/// The inputs and result of one truth-table row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TruthRow {
    pub inputs: Vec<bool>,
    pub result: bool,
}

/// A full truth table for an expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TruthTable {
    pub variables: Vec<String>,
    pub rows: Vec<TruthRow>,
}

impl TruthTable {
    pub fn is_tautology(&self) -> bool {
        self.rows.iter().all(|row| row.result)
    }

    pub fn is_satisfiable(&self) -> bool {
        self.rows.iter().any(|row| row.result)
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = |value: bool| if value { 'T' } else { 'F' };
        for name in &self.variables {
            write!(f, "{name} ")?;
        }
        writeln!(f, "| result")?;
        for row in &self.rows {
            for (name, &value) in self.variables.iter().zip(&row.inputs) {
                write!(f, "{:<width$} ", mark(value), width = name.chars().count())?;
            }
            writeln!(f, "| {}", mark(row.result))?;
        }
        Ok(())
    }
}

/// Evaluate `text` under every assignment of its undefined variables.
///
/// Bindings are temporary; the solver's own variables are left as they were.
pub fn truth_table(solver: &mut Solver<LogicDomain>, text: &str) -> Result<TruthTable, SolveError> {
    let variables: Vec<String> = solver.undefined_variables(text)?.into_iter().collect();
    tracing::debug!(?variables, "building truth table");
    let mut rows = Vec::new();
    for assignment in truth_assignments(variables.iter().map(String::as_str)) {
        let result = solve_under(solver, &assignment, text)?;
        rows.push(TruthRow {
            inputs: assignment.into_iter().map(|(_, value)| value).collect(),
            result,
        });
    }
    Ok(TruthTable { variables, rows })
}

/// Whether some assignment of the undefined variables makes `text` true.
///
/// Stops at the first satisfying assignment.
pub fn is_satisfiable(solver: &mut Solver<LogicDomain>, text: &str) -> Result<bool, SolveError> {
    let variables = solver.undefined_variables(text)?;
    for assignment in truth_assignments(variables.iter().map(String::as_str)) {
        if solve_under(solver, &assignment, text)? {
            tracing::trace!(?assignment, "satisfied");
            return Ok(true);
        }
    }
    Ok(false)
}

/// Bind with `1`/`0`, longest names first, so no binding's text is
/// rewritten by a later, shorter variable name.
fn solve_under(
    solver: &mut Solver<LogicDomain>,
    assignment: &[(String, bool)],
    text: &str,
) -> Result<bool, SolveError> {
    let mut bindings: Vec<(&str, &str)> = assignment
        .iter()
        .map(|(name, value)| (name.as_str(), if *value { "1" } else { "0" }))
        .collect();
    bindings.sort_by_key(|(name, _)| std::cmp::Reverse(name.len()));
    solver.solve_with(bindings, text)
}
