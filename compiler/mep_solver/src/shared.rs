//! Thread-safe shared solver handle.

use std::collections::BTreeSet;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::Domain;
use crate::errors::{ParseError, SolveError};
use crate::solver::Solver;

/// A cloneable handle to one solver behind an `Arc<RwLock>`.
///
/// Solving takes the read lock, so many threads solve at once. Registration
/// goes through [`write`](SharedSolver::write).
pub struct SharedSolver<D: Domain>(Arc<RwLock<Solver<D>>>);

impl<D: Domain> SharedSolver<D> {
    pub fn new(solver: Solver<D>) -> Self {
        SharedSolver(Arc::new(RwLock::new(solver)))
    }

    pub fn read(&self) -> RwLockReadGuard<'_, Solver<D>> {
        self.0.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, Solver<D>> {
        self.0.write()
    }

    pub fn solve(&self, text: &str) -> Result<D::Value, SolveError> {
        self.read().solve(text)
    }

    /// Takes the write lock so no reader sees the temporary bindings.
    pub fn solve_with<N, T>(
        &self,
        bindings: impl IntoIterator<Item = (N, T)>,
        text: &str,
    ) -> Result<D::Value, SolveError>
    where
        N: Into<String>,
        T: Into<String>,
    {
        self.write().solve_with(bindings, text)
    }

    pub fn undefined_variables(&self, text: &str) -> Result<BTreeSet<String>, ParseError> {
        self.read().undefined_variables(text)
    }
}

impl<D: Domain> Clone for SharedSolver<D> {
    fn clone(&self) -> Self {
        SharedSolver(Arc::clone(&self.0))
    }
}

impl<D: Domain> From<Solver<D>> for SharedSolver<D> {
    fn from(solver: Solver<D>) -> Self {
        SharedSolver::new(solver)
    }
}
