//! The contract a value domain fulfils to plug into a [`Solver`](crate::Solver).

use crate::errors::ParseError;

/// A family of values expressions can produce.
///
/// The solver knows nothing about numbers. It hands leaf text to
/// [`to_value`](Domain::to_value) and learns from
/// [`number_wrappers`](Domain::number_wrappers) which extra delimiter pairs
/// enclose a literal (such as `<1,2>` for vectors).
///
/// ```
/// use mep_solver::errors::{invalid_literal, ParseError};
/// use mep_solver::Domain;
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
/// assert_eq!(Integers.to_value("42"), Ok(42));
/// assert!(Integers.number_wrappers().is_empty());
/// ```
pub trait Domain {
    /// Literals are cloned out of the typed tree when it is evaluated.
    type Value: Clone;

    /// Parse the literal text of a leaf.
    ///
    /// Operators with a missing operand hand over `""`, so `-3` reaches the
    /// subtraction function as `("", 3)`. Most domains map `""` to their
    /// additive identity to make that read as negation.
    fn to_value(&self, text: &str) -> Result<Self::Value, ParseError>;

    /// Extra opener/closer pairs that enclose literals; parentheses are
    /// always present and need not be listed.
    fn number_wrappers(&self) -> Vec<(char, char)> {
        Vec::new()
    }
}
