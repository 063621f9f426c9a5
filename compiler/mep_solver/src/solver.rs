//! The solver facade: registration and the per-call pipeline.
//!
//! `solve(text)` runs, in order:
//!
//! 1. wrap the text in an outer `(`…`)`;
//! 2. apply synonyms, then variables (raw substring replacement);
//! 3. rewrite each operator to fixed point, in registration order;
//! 4. build the [`ProtoNode`] tree;
//! 5. resolve it into an [`Evaluable`] against the domain;
//! 6. evaluate.
//!
//! Every stage after the substitutions borrows the solver's tables through a
//! [`ParseContext`] built once per call.

use std::collections::BTreeSet;
use std::fmt;

use tracing::{debug, trace, warn};

use crate::context::ParseContext;
use crate::delimiters::{Delimiters, CLOSE_PAREN, OPEN_PAREN};
use crate::domain::Domain;
use crate::errors::{ParseError, SolveError};
use crate::evaluable::{collect_undefined, Evaluable};
use crate::evaluator::Evaluator;
use crate::function::Function;
use crate::operator::{Operator, Position};
use crate::proto::ProtoNode;
use crate::substitutions::Substitutions;

/// An expression solver over the values of `D`.
///
/// ```
/// use mep_solver::errors::{invalid_literal, ParseError};
/// use mep_solver::{Domain, Function, Position, Solver};
///
/// struct Integers;
///
/// impl Domain for Integers {
///     type Value = i64;
///
///     fn to_value(&self, text: &str) -> Result<i64, ParseError> {
///         if text.is_empty() {
///             return Ok(0);
///         }
///         text.parse().map_err(|_| invalid_literal(text))
///     }
/// }
///
/// let mut solver = Solver::new(
///     Integers,
///     Function::new("multiply", |args: Vec<i64>| Ok(args.into_iter().product())),
/// );
/// solver.add_function(Function::new("sum", |args: Vec<i64>| Ok(args.into_iter().sum())));
/// solver.add_operator('*', "multiply", Position::BeforeAndAfter);
/// solver.add_operator('+', "sum", Position::BeforeAndAfter);
///
/// assert_eq!(solver.solve("3+3*3"), Ok(12));
/// assert_eq!(solver.solve("4(5)"), Ok(20));
/// ```
pub struct Solver<D: Domain> {
    domain: D,
    evaluator: Evaluator<D::Value>,
    /// Every registered name in registration order, duplicates included.
    /// Suffix matching prefers the last entry.
    function_names: Vec<String>,
    operators: Vec<Operator>,
    delimiters: Delimiters,
    synonyms: Substitutions,
    variables: Substitutions,
    implicit_multiplication: String,
    max_depth: Option<usize>,
}

impl<D: Domain> Solver<D> {
    /// Create a solver whose juxtaposition (`2x`, `4(5)`) calls
    /// `implicit_multiplication`. The function is registered like any other.
    pub fn new(domain: D, implicit_multiplication: Function<D::Value>) -> Self {
        let delimiters = Delimiters::with_wrappers(domain.number_wrappers());
        let mut solver = Solver {
            implicit_multiplication: implicit_multiplication.name().to_string(),
            domain,
            evaluator: Evaluator::new(),
            function_names: Vec::new(),
            operators: Vec::new(),
            delimiters,
            synonyms: Substitutions::new(),
            variables: Substitutions::new(),
            max_depth: None,
        };
        solver.add_function(implicit_multiplication);
        solver
    }

    /// Fail with [`ParseError::NestingTooDeep`] once the tree nests deeper
    /// than `limit`.
    #[must_use]
    pub fn with_max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }

    pub fn domain(&self) -> &D {
        &self.domain
    }

    pub fn delimiters(&self) -> &Delimiters {
        &self.delimiters
    }

    pub fn function_names(&self) -> &[String] {
        &self.function_names
    }

    pub fn operators(&self) -> &[Operator] {
        &self.operators
    }

    pub fn synonyms(&self) -> &Substitutions {
        &self.synonyms
    }

    pub fn variables(&self) -> &Substitutions {
        &self.variables
    }

    pub fn implicit_multiplication(&self) -> &str {
        &self.implicit_multiplication
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    // Registration

    /// Replace every occurrence of `pattern` with `replacement` before parsing.
    pub fn add_synonym(&mut self, pattern: impl Into<String>, replacement: impl Into<String>) {
        self.synonyms.insert(pattern, replacement);
    }

    /// Register an operator. Operators registered earlier bind tighter.
    pub fn add_operator(&mut self, symbol: char, function: impl Into<String>, position: Position) {
        let operator = Operator::new(symbol, function, position);
        if self.delimiters.is_separator(symbol) {
            warn!(%operator, "operator symbol is a delimiter or separator; every solve will fail");
        } else if operator.function().contains(symbol) {
            warn!(%operator, "operator function contains its own symbol; every solve will fail");
        }
        if self.operators.iter().any(|existing| existing.symbol() == symbol) {
            debug!(%operator, "symbol already registered; the earlier rule rewrites first");
        }
        self.operators.push(operator);
    }

    /// Register `function` for evaluation and for name matching.
    pub fn add_function(&mut self, function: Function<D::Value>) {
        self.function_names.push(function.name().to_string());
        if let Some(replaced) = self.evaluator.add_function(function) {
            debug!(name = replaced.name(), "function redefined");
        }
    }

    /// Bind `name` to literal text, substituted into every later expression.
    pub fn add_variable(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(name, value);
    }

    pub fn clear_variables(&mut self) {
        self.variables.clear();
    }

    // Queries

    /// The text after substitution and operator rewriting.
    pub fn rewrite(&self, text: &str) -> Result<String, ParseError> {
        let ctx = self.context();
        Ok(self.rewritten(text, &ctx)?.into_iter().collect())
    }

    /// The pre-typed tree for `text`.
    pub fn parse_tree(&self, text: &str) -> Result<ProtoNode, ParseError> {
        let ctx = self.context();
        self.tree(text, &ctx)
    }

    /// The typed tree for `text`.
    pub fn parse(&self, text: &str) -> Result<Evaluable<D::Value>, ParseError> {
        let ctx = self.context();
        let node = self.tree(text, &ctx)?;
        Evaluable::resolve(node, &self.domain, &ctx)
    }

    /// Parse and evaluate `text`.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn solve(&self, text: &str) -> Result<D::Value, SolveError> {
        let expr = self.parse(text)?;
        Ok(self.evaluator.evaluate(&expr)?)
    }

    /// Solve with extra variable bindings that last for this call only.
    ///
    /// The variable table is restored afterwards, whether or not solving
    /// succeeded.
    pub fn solve_with<N, T>(
        &mut self,
        bindings: impl IntoIterator<Item = (N, T)>,
        text: &str,
    ) -> Result<D::Value, SolveError>
    where
        N: Into<String>,
        T: Into<String>,
    {
        let saved = self.variables.clone();
        for (name, value) in bindings {
            self.variables.insert(name, value);
        }
        let result = self.solve(text);
        self.variables = saved;
        result
    }

    /// Names in `text` that are neither values nor registered functions.
    ///
    /// These are the unbound variables, plus any unregistered function name
    /// used in call position.
    pub fn undefined_variables(&self, text: &str) -> Result<BTreeSet<String>, ParseError> {
        let ctx = self.context();
        let node = self.tree(text, &ctx)?;
        let mut found = BTreeSet::new();
        collect_undefined(&node, &self.domain, &ctx, &mut found);
        Ok(found)
    }

    fn context(&self) -> ParseContext<'_> {
        ParseContext::new(
            &self.delimiters,
            self.operators.iter().map(Operator::symbol),
            &self.function_names,
            &self.implicit_multiplication,
            self.max_depth,
        )
    }

    fn rewritten(&self, text: &str, ctx: &ParseContext<'_>) -> Result<Vec<char>, ParseError> {
        let text = format!("{OPEN_PAREN}{text}{CLOSE_PAREN}");
        let text = self.variables.apply(self.synonyms.apply(text));
        trace!(%text, "substituted");
        let mut chars: Vec<char> = text.chars().collect();
        for operator in &self.operators {
            chars = operator.rewrite(chars, ctx)?;
        }
        trace!(text = %chars.iter().collect::<String>(), "rewritten");
        Ok(chars)
    }

    fn tree(&self, text: &str, ctx: &ParseContext<'_>) -> Result<ProtoNode, ParseError> {
        let chars = self.rewritten(text, ctx)?;
        ProtoNode::build(&chars, ctx)
    }
}

impl<D: Domain + fmt::Debug> fmt::Debug for Solver<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Solver")
            .field("domain", &self.domain)
            .field("evaluator", &self.evaluator)
            .field("operators", &self.operators)
            .field("delimiters", &self.delimiters)
            .field("synonyms", &self.synonyms)
            .field("variables", &self.variables)
            .field("implicit_multiplication", &self.implicit_multiplication)
            .field("max_depth", &self.max_depth)
            .finish_non_exhaustive()
    }
}
