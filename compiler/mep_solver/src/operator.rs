//! Operator rewriting: the precedence mechanism.
//!
//! There is no precedence table. Each operator is rewritten, one occurrence
//! at a time, into the call form `(name(before,after))` until its symbol no
//! longer appears; then the next registered operator runs. Whatever an earlier
//! operator produced is a parenthesized group by the time a later operator
//! scans for its operands, so it is consumed whole. Registering `*` before `+`
//! therefore makes `3+3*3` read as `sum(3,multiply(3,3))`.
//!
//! # Operand boundaries
//!
//! From the symbol the scan walks outward one char at a time and stops at:
//!
//! - a separator (a delimiter or `,`), or
//! - another operator symbol, but only after some non-operator char has been
//!   seen, so `--3` and `3!!` leave the neighbouring operator in the operand.
//!
//! When the scan stops on a delimiter that opens (after side) or closes
//! (before side) a group, the group is taken whole. If the text in front of
//! the group ends in a registered function name, that text comes along too:
//! `2*sin(0)` and `sin(0)!` both keep `sin(0)` together.

use std::fmt;

use crate::context::ParseContext;
use crate::delimiters::{CLOSE_PAREN, COMMA, OPEN_PAREN};
use crate::errors::{missing_operand, reserved_symbol, self_referential_operator, ParseError, Side};

/// Which operands an operator consumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Position {
    /// Postfix, like `3!`.
    Before,
    /// Prefix, like `~p`.
    After,
    /// Infix, like `3+4`.
    BeforeAndAfter,
}

impl Position {
    pub fn takes_before(self) -> bool {
        matches!(self, Position::Before | Position::BeforeAndAfter)
    }

    pub fn takes_after(self) -> bool {
        matches!(self, Position::After | Position::BeforeAndAfter)
    }
}

/// A single-character operator bound to a function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Operator {
    symbol: char,
    function: String,
    position: Position,
}

impl Operator {
    pub fn new(symbol: char, function: impl Into<String>, position: Position) -> Self {
        Operator {
            symbol,
            function: function.into(),
            position,
        }
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn function(&self) -> &str {
        &self.function
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Rewrite every occurrence of this operator into call form.
    ///
    /// Each pass removes one occurrence of the symbol and adds none, so this
    /// terminates once the symbol is known not to appear in the function name
    /// or the inserted punctuation.
    pub(crate) fn rewrite(
        &self,
        mut text: Vec<char>,
        ctx: &ParseContext<'_>,
    ) -> Result<Vec<char>, ParseError> {
        if ctx.delimiters.is_separator(self.symbol) {
            return Err(reserved_symbol(self.symbol));
        }
        if self.function.contains(self.symbol) {
            return Err(self_referential_operator(self.symbol, &self.function));
        }
        while let Some(index) = text.iter().position(|&c| c == self.symbol) {
            text = self.rewrite_at(&text, index, ctx)?;
        }
        Ok(text)
    }

    /// Rewrite the occurrence at `index`.
    fn rewrite_at(
        &self,
        text: &[char],
        index: usize,
        ctx: &ParseContext<'_>,
    ) -> Result<Vec<char>, ParseError> {
        let (mut head, rest) = text.split_at(index);
        let mut tail = &rest[1..];

        let mut after: &[char] = &[];
        if self.position.takes_after() {
            let end = after_operand_end(tail, ctx)
                .ok_or_else(|| missing_operand(self.symbol, Side::Right))?;
            (after, tail) = tail.split_at(end);
        }

        let mut before: &[char] = &[];
        if self.position.takes_before() {
            let start = before_operand_start(head, ctx)
                .ok_or_else(|| missing_operand(self.symbol, Side::Left))?;
            (head, before) = head.split_at(start);
        }

        let mut out = Vec::with_capacity(text.len() + self.function.len() + 4);
        out.extend_from_slice(head);
        out.push(OPEN_PAREN);
        out.extend(self.function.chars());
        out.push(OPEN_PAREN);
        out.extend_from_slice(before);
        if self.position == Position::BeforeAndAfter {
            out.push(COMMA);
        }
        out.extend_from_slice(after);
        out.push(CLOSE_PAREN);
        out.push(CLOSE_PAREN);
        out.extend_from_slice(tail);
        Ok(out)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Position::Before => write!(f, "x{} -> {}(x)", self.symbol, self.function),
            Position::After => write!(f, "{}x -> {}(x)", self.symbol, self.function),
            Position::BeforeAndAfter => {
                write!(f, "x{}y -> {}(x,y)", self.symbol, self.function)
            }
        }
    }
}

/// Offset, in scan order, of the char that ends an operand.
///
/// `None` when the scan runs off the end of the text.
fn operand_boundary(chars: impl Iterator<Item = char>, ctx: &ParseContext<'_>) -> Option<usize> {
    let mut seen_operand = false;
    for (offset, c) in chars.enumerate() {
        if ctx.delimiters.is_separator(c) {
            return Some(offset);
        }
        if ctx.is_operator(c) {
            if seen_operand {
                return Some(offset);
            }
        } else {
            seen_operand = true;
        }
    }
    None
}

/// Length of the operand at the start of `tail`.
fn after_operand_end(tail: &[char], ctx: &ParseContext<'_>) -> Option<usize> {
    if tail.is_empty() {
        return None;
    }
    let end = operand_boundary(tail.iter().copied(), ctx).unwrap_or(tail.len());
    if end < tail.len() && ctx.delimiters.is_opener(tail[end]) {
        let name = &tail[..end];
        if name.is_empty() || ctx.ends_with_function(name) {
            let close = ctx.delimiters.matching_closer(tail, end);
            return Some((close + 1).min(tail.len()));
        }
    }
    Some(end)
}

/// Start index of the operand at the end of `head`.
fn before_operand_start(head: &[char], ctx: &ParseContext<'_>) -> Option<usize> {
    if head.is_empty() {
        return None;
    }
    let Some(offset) = operand_boundary(head.iter().rev().copied(), ctx) else {
        return Some(0);
    };
    let stop = head.len() - 1 - offset;
    if !ctx.delimiters.is_closer(head[stop]) {
        return Some(stop + 1);
    }
    let open = ctx.delimiters.matching_opener(head, stop);
    // Like the after side, a registered name in front of the group comes
    // along: `sin(0)!` is `factorial(sin(0))`, not `sin(factorial(0))`.
    let name_start = operand_boundary(head[..open].iter().rev().copied(), ctx)
        .map_or(0, |offset| open - offset);
    if name_start < open && ctx.ends_with_function(&head[name_start..open]) {
        Some(name_start)
    } else {
        Some(open)
    }
}
