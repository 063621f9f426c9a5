//! Hand-rolled argument parsing.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Eval,
    Vars,
    Rewrite,
    Sat,
    Table,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DomainKind {
    Real,
    Logic,
    Vector,
    Array,
}

impl FromStr for DomainKind {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "real" => Ok(DomainKind::Real),
            "logic" => Ok(DomainKind::Logic),
            "vector" => Ok(DomainKind::Vector),
            "array" => Ok(DomainKind::Array),
            other => Err(UsageError::UnknownDomain(other.to_string())),
        }
    }
}

impl fmt::Display for DomainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DomainKind::Real => "real",
            DomainKind::Logic => "logic",
            DomainKind::Vector => "vector",
            DomainKind::Array => "array",
        })
    }
}

/// One parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub action: Action,
    pub domain: DomainKind,
    pub expression: String,
    /// `--let` bindings, in command-line order.
    pub bindings: Vec<(String, String)>,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("no command given")]
    MissingCommand,
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("unknown domain `{0}` (expected real, logic, vector or array)")]
    UnknownDomain(String),
    #[error("wrong number of arguments for `{0}`")]
    WrongArguments(String),
    #[error("`--let` needs a NAME=VALUE argument")]
    MissingBinding,
    #[error("invalid binding `{0}` (expected NAME=VALUE)")]
    InvalidBinding(String),
}

/// Parse the arguments after the program name.
///
/// `--let NAME=VALUE` (or `--let=NAME=VALUE`) may appear anywhere; every
/// other argument is positional, so expressions such as `-3` pass through.
pub fn parse_args(args: &[String]) -> Result<Invocation, UsageError> {
    let mut positional: Vec<&str> = Vec::new();
    let mut bindings = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--let" {
            let binding = iter.next().ok_or(UsageError::MissingBinding)?;
            bindings.push(parse_binding(binding)?);
        } else if let Some(binding) = arg.strip_prefix("--let=") {
            bindings.push(parse_binding(binding)?);
        } else {
            positional.push(arg);
        }
    }

    let (action, domain, expression) = match positional.as_slice() {
        [] => return Err(UsageError::MissingCommand),
        ["sat", expression] => (Action::Sat, DomainKind::Logic, *expression),
        ["table", expression] => (Action::Table, DomainKind::Logic, *expression),
        ["eval", domain, expression] => (Action::Eval, domain.parse()?, *expression),
        ["vars", domain, expression] => (Action::Vars, domain.parse()?, *expression),
        ["rewrite", domain, expression] => (Action::Rewrite, domain.parse()?, *expression),
        [command @ ("sat" | "table" | "eval" | "vars" | "rewrite"), ..] => {
            return Err(UsageError::WrongArguments((*command).to_string()));
        }
        [command, ..] => return Err(UsageError::UnknownCommand((*command).to_string())),
    };

    Ok(Invocation {
        action,
        domain,
        expression: expression.to_string(),
        bindings,
    })
}

fn parse_binding(text: &str) -> Result<(String, String), UsageError> {
    match text.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(UsageError::InvalidBinding(text.to_string())),
    }
}
