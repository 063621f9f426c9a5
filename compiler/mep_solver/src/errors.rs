//! Error types for parsing and evaluation.
//!
//! A `solve` call fails in one of two phases:
//!
//! - [`ParseError`]: the text cannot be turned into a typed tree (a literal the
//!   domain rejects, an operator with nothing to bind to, a nesting limit hit).
//! - [`EvalError`]: the tree is well formed but cannot be computed (unknown
//!   function, wrong argument count, a domain-specific rejection).
//!
//! Domain code should build errors through the factory functions in this
//! module rather than naming variants directly.

use std::fmt;

use thiserror::Error;

/// Which operand of an operator is missing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// Failure to turn text into a typed expression tree.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The domain's `to_value` rejected a leaf.
    #[error("`{text}` is not a valid value")]
    InvalidLiteral { text: String },

    /// An operator needs an operand on a side where there is no text at all.
    #[error("operator `{symbol}` has no {side} operand")]
    MissingOperand { symbol: char, side: Side },

    /// An operator symbol doubles as a delimiter or the argument separator.
    #[error("operator `{symbol}` collides with a delimiter or the `,` separator")]
    ReservedSymbol { symbol: char },

    /// Rewriting the operator reintroduces it, so rewriting never finishes.
    #[error("operator `{symbol}` rewrites to `{function}`, which contains `{symbol}` itself")]
    SelfReferentialOperator { symbol: char, function: String },

    /// The expression nests deeper than the solver's configured limit.
    #[error("expression nests deeper than the limit of {limit}")]
    NestingTooDeep { limit: usize },
}

/// Expected argument count of a function.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
}

impl Arity {
    /// Whether `count` arguments satisfy this arity.
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exactly(n) => count == n,
            Arity::AtLeast(n) => count >= n,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exactly(1) => f.write_str("1 argument"),
            Arity::Exactly(n) => write!(f, "{n} arguments"),
            Arity::AtLeast(1) => f.write_str("at least 1 argument"),
            Arity::AtLeast(n) => write!(f, "at least {n} arguments"),
        }
    }
}

/// Failure while computing a typed tree.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("no function named `{name}`")]
    UndefinedFunction { name: String },

    #[error("`{name}` expects {expected}, got {got}")]
    ArityMismatch {
        name: String,
        expected: Arity,
        got: usize,
    },

    /// A bare grouping with nothing inside it, such as `()` handed no argument.
    #[error("empty grouping has no value")]
    EmptyGroup,

    /// The function itself rejected its arguments.
    #[error("`{name}`: {message}")]
    Domain { name: String, message: String },
}

/// Either failure, as returned from `Solver::solve`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl SolveError {
    pub fn is_parse(&self) -> bool {
        matches!(self, SolveError::Parse(_))
    }

    pub fn is_eval(&self) -> bool {
        matches!(self, SolveError::Eval(_))
    }
}

// Parse errors

#[cold]
pub fn invalid_literal(text: impl Into<String>) -> ParseError {
    ParseError::InvalidLiteral { text: text.into() }
}

#[cold]
pub fn missing_operand(symbol: char, side: Side) -> ParseError {
    ParseError::MissingOperand { symbol, side }
}

#[cold]
pub fn reserved_symbol(symbol: char) -> ParseError {
    ParseError::ReservedSymbol { symbol }
}

#[cold]
pub fn self_referential_operator(symbol: char, function: impl Into<String>) -> ParseError {
    ParseError::SelfReferentialOperator {
        symbol,
        function: function.into(),
    }
}

#[cold]
pub fn nesting_too_deep(limit: usize) -> ParseError {
    ParseError::NestingTooDeep { limit }
}

// Evaluation errors

#[cold]
pub fn undefined_function(name: impl Into<String>) -> EvalError {
    EvalError::UndefinedFunction { name: name.into() }
}

#[cold]
pub fn wrong_arg_count(name: impl Into<String>, expected: Arity, got: usize) -> EvalError {
    EvalError::ArityMismatch {
        name: name.into(),
        expected,
        got,
    }
}

#[cold]
pub fn domain_error(name: impl Into<String>, message: impl Into<String>) -> EvalError {
    EvalError::Domain {
        name: name.into(),
        message: message.into(),
    }
}

/// Reject an argument list whose length does not satisfy `arity`.
///
/// ```
/// use mep_solver::errors::{check_arity, Arity};
///
/// assert!(check_arity("sin", &[0.5], Arity::Exactly(1)).is_ok());
/// assert!(check_arity("sin", &[0.5, 1.0], Arity::Exactly(1)).is_err());
/// ```
pub fn check_arity<V>(name: &str, args: &[V], arity: Arity) -> Result<(), EvalError> {
    if arity.accepts(args.len()) {
        Ok(())
    } else {
        Err(wrong_arg_count(name, arity, args.len()))
    }
}
