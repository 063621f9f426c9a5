//! Per-call view of a solver's parse-time tables.
//!
//! Rewriting, tree building and resolution all need the same handful of
//! lookups (is this char an operator, does this text end in a function name).
//! `ParseContext` borrows the solver's tables once per `solve` call and
//! answers them.

use rustc_hash::FxHashSet;

use crate::delimiters::Delimiters;
use crate::errors::{nesting_too_deep, ParseError};

pub(crate) struct ParseContext<'a> {
    pub(crate) delimiters: &'a Delimiters,
    operator_symbols: FxHashSet<char>,
    functions: &'a [String],
    pub(crate) implicit_multiplication: &'a str,
    max_depth: Option<usize>,
}

impl<'a> ParseContext<'a> {
    pub(crate) fn new(
        delimiters: &'a Delimiters,
        operator_symbols: impl IntoIterator<Item = char>,
        functions: &'a [String],
        implicit_multiplication: &'a str,
        max_depth: Option<usize>,
    ) -> Self {
        ParseContext {
            delimiters,
            operator_symbols: operator_symbols.into_iter().collect(),
            functions,
            implicit_multiplication,
            max_depth,
        }
    }

    pub(crate) fn is_operator(&self, c: char) -> bool {
        self.operator_symbols.contains(&c)
    }

    /// Whether `text` ends with any registered function name.
    pub(crate) fn ends_with_function(&self, text: &[char]) -> bool {
        self.functions.iter().any(|name| ends_with(text, name))
    }

    /// The registered name `text` ends with, preferring the one registered
    /// last when several match.
    pub(crate) fn function_suffix(&self, text: &str) -> Option<&'a str> {
        self.functions
            .iter()
            .rev()
            .find(|name| text.ends_with(name.as_str()))
            .map(String::as_str)
    }

    /// Fail once `depth` exceeds the configured nesting limit.
    pub(crate) fn check_depth(&self, depth: usize) -> Result<(), ParseError> {
        match self.max_depth {
            Some(limit) if depth > limit => Err(nesting_too_deep(limit)),
            _ => Ok(()),
        }
    }
}

fn ends_with(text: &[char], name: &str) -> bool {
    let mut rev = text.iter().rev();
    name.chars().rev().all(|c| rev.next() == Some(&c))
}
