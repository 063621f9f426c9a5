//! The untyped intermediate tree.
//!
//! After operator rewriting the text is nothing but names, literals,
//! delimiters and commas. [`ProtoNode::build`] splits it recursively:
//!
//! 1. Cut the text into top-level segments at delimiter boundaries. More than
//!    one segment is implicit multiplication: `4(5)6` has three.
//! 2. A single segment containing `(` is a call: the name is everything in
//!    front of the first `(`, the arguments are the top-level comma-separated
//!    pieces inside it.
//! 3. Anything else is a leaf.
//!
//! Nothing here knows about values. Leaves keep their raw text, and names are
//! only matched against registered functions later, during resolution.

use mep_stack::ensure_sufficient_stack;

use crate::context::ParseContext;
use crate::delimiters::{CLOSE_PAREN, OPEN_PAREN};
use crate::errors::ParseError;

/// A node of the pre-typed tree.
///
/// Leaves have no children. Internal nodes always have at least one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProtoNode {
    data: String,
    children: Vec<ProtoNode>,
}

impl ProtoNode {
    pub fn leaf(data: impl Into<String>) -> Self {
        ProtoNode {
            data: data.into(),
            children: Vec::new(),
        }
    }

    /// An internal node. `children` must not be empty.
    pub fn call(data: impl Into<String>, children: Vec<ProtoNode>) -> Self {
        debug_assert!(!children.is_empty(), "internal nodes carry arguments");
        ProtoNode {
            data: data.into(),
            children,
        }
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn children(&self) -> &[ProtoNode] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub(crate) fn into_parts(mut self) -> (String, Vec<ProtoNode>) {
        (std::mem::take(&mut self.data), std::mem::take(&mut self.children))
    }

    /// Build the tree for fully rewritten text.
    pub(crate) fn build(text: &[char], ctx: &ParseContext<'_>) -> Result<Self, ParseError> {
        Self::build_at(text, ctx, 0)
    }

    fn build_at(text: &[char], ctx: &ParseContext<'_>, depth: usize) -> Result<Self, ParseError> {
        ctx.check_depth(depth)?;
        ensure_sufficient_stack(|| {
            let segments = split_segments(text, ctx);
            if segments.len() > 1 {
                let children = segments
                    .into_iter()
                    .map(|segment| Self::build_at(segment, ctx, depth + 1))
                    .collect::<Result<Vec<_>, _>>()?;
                return Ok(ProtoNode::call(ctx.implicit_multiplication, children));
            }

            let Some(open) = text.iter().position(|&c| c == OPEN_PAREN) else {
                return Ok(ProtoNode::leaf(text.iter().collect::<String>()));
            };
            let name: String = text[..open].iter().collect();
            let body = match text.last() {
                Some(&CLOSE_PAREN) => &text[open + 1..text.len() - 1],
                _ => &text[open + 1..],
            };
            let children = split_arguments(body, ctx)
                .into_iter()
                .map(|argument| Self::build_at(argument, ctx, depth + 1))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(ProtoNode::call(name, children))
        })
    }
}

impl Drop for ProtoNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// Cut `text` after each top-level delimited group.
///
/// An unclosed group runs to the end of the text. Text after the last group
/// becomes a segment of its own.
fn split_segments<'t>(text: &'t [char], ctx: &ParseContext<'_>) -> Vec<&'t [char]> {
    let mut segments = Vec::new();
    let mut rest = text;
    while let Some(open) = rest.iter().position(|&c| ctx.delimiters.is_opener(c)) {
        let close = ctx.delimiters.matching_closer(rest, open);
        if close >= rest.len() {
            segments.push(rest);
            rest = &[];
            break;
        }
        let (segment, remainder) = rest.split_at(close + 1);
        segments.push(segment);
        rest = remainder;
    }
    if !rest.is_empty() {
        segments.push(rest);
    }
    segments
}

/// Split a call body at its top-level commas; always at least one piece.
fn split_arguments<'t>(body: &'t [char], ctx: &ParseContext<'_>) -> Vec<&'t [char]> {
    let mut arguments = Vec::new();
    let mut start = 0;
    for comma in ctx.delimiters.top_level_commas(body) {
        arguments.push(&body[start..comma]);
        start = comma + 1;
    }
    arguments.push(&body[start..]);
    arguments
}

#[cfg(test)]
mod tests;
