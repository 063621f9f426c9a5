//! Running a parsed invocation against the chosen domain.

use std::fmt::Display;

use mep_domains::{array, is_satisfiable, logic, real, truth_table, vector};
use mep_solver::{Domain, ParseError, Solver, SolveError};
use thiserror::Error;

use crate::options::{Action, DomainKind, Invocation};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Solve(#[from] SolveError),
    #[error("`{action:?}` only works on logic expressions, not {domain}")]
    LogicOnly { action: Action, domain: DomainKind },
}

/// Run `invocation` and return what it prints.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(action = ?invocation.action, domain = %invocation.domain)
)]
pub fn run(invocation: &Invocation) -> Result<String, CliError> {
    match invocation.domain {
        DomainKind::Real => query(bind(real::solver(), invocation), invocation),
        DomainKind::Vector => query(bind(vector::solver(), invocation), invocation),
        DomainKind::Array => query(bind(array::solver(), invocation), invocation),
        DomainKind::Logic => {
            let mut solver = bind(logic::solver(), invocation);
            match invocation.action {
                Action::Sat => {
                    let satisfiable = is_satisfiable(&mut solver, &invocation.expression)?;
                    Ok(if satisfiable { "satisfiable" } else { "unsatisfiable" }.to_string())
                }
                Action::Table => Ok(truth_table(&mut solver, &invocation.expression)?.to_string()),
                _ => query(solver, invocation),
            }
        }
    }
}

fn bind<D: Domain>(mut solver: Solver<D>, invocation: &Invocation) -> Solver<D> {
    for (name, value) in &invocation.bindings {
        solver.add_variable(name.as_str(), value.as_str());
    }
    solver
}

fn query<D>(solver: Solver<D>, invocation: &Invocation) -> Result<String, CliError>
where
    D: Domain,
    D::Value: Display,
{
    let text = invocation.expression.as_str();
    match invocation.action {
        Action::Eval => Ok(solver.solve(text)?.to_string()),
        Action::Vars => {
            let names: Vec<String> = solver.undefined_variables(text)?.into_iter().collect();
            Ok(names.join(" "))
        }
        Action::Rewrite => Ok(solver.rewrite(text)?),
        action @ (Action::Sat | Action::Table) => Err(CliError::LogicOnly {
            action,
            domain: invocation.domain,
        }),
    }
}

#[cfg(test)]
mod tests;
