//! The typed expression tree and the walks that produce it.
//!
//! Resolution turns each [`ProtoNode`] into an [`Evaluable`]:
//!
//! - a leaf becomes `Literal(to_value(text))`;
//! - an internal node whose text ends in a registered function name becomes a
//!   call of that function, and any text in front of the name
//!   (`3` in `3sin(x)`) is multiplied in implicitly;
//! - an internal node with empty text is a bare grouping, the identity call;
//! - any other text is either a value multiplied into the group (`4(5)`) or,
//!   when the domain rejects it, a call of an unregistered function, which
//!   fails at evaluation.
//!
//! Variable discovery walks the same way and collects the text the domain
//! rejects instead of failing on it.

use std::collections::BTreeSet;
use std::fmt;

use mep_stack::ensure_sufficient_stack;

use crate::context::ParseContext;
use crate::domain::Domain;
use crate::errors::ParseError;
use crate::proto::ProtoNode;

/// A resolved expression, ready for the [`Evaluator`](crate::Evaluator).
#[derive(Clone, Debug, PartialEq)]
pub enum Evaluable<V> {
    Literal(V),
    /// A function applied to its arguments. The empty name is the identity
    /// grouping: it evaluates to its first argument.
    Call {
        function: String,
        args: Vec<Evaluable<V>>,
    },
}

impl<V> Evaluable<V> {
    pub fn call(function: impl Into<String>, args: Vec<Evaluable<V>>) -> Self {
        Evaluable::Call {
            function: function.into(),
            args,
        }
    }

    /// Resolve a pre-typed tree against a domain and the registered names.
    pub(crate) fn resolve<D>(
        node: ProtoNode,
        domain: &D,
        ctx: &ParseContext<'_>,
    ) -> Result<Self, ParseError>
    where
        D: Domain<Value = V>,
    {
        ensure_sufficient_stack(|| {
            let (data, children) = node.into_parts();
            if children.is_empty() {
                return domain.to_value(&data).map(Evaluable::Literal);
            }

            let resolve_all = |children: Vec<ProtoNode>| {
                children
                    .into_iter()
                    .map(|child| Self::resolve(child, domain, ctx))
                    .collect::<Result<Vec<_>, _>>()
            };

            match ctx.function_suffix(&data) {
                Some(name) if name.len() == data.len() => {
                    Ok(Evaluable::call(name, resolve_all(children)?))
                }
                Some(name) => {
                    let prefix = &data[..data.len() - name.len()];
                    let left = Evaluable::Literal(domain.to_value(prefix)?);
                    let right = Self::resolve(ProtoNode::call(name, children), domain, ctx)?;
                    Ok(Evaluable::call(ctx.implicit_multiplication, vec![left, right]))
                }
                None if data.is_empty() => Ok(Evaluable::call("", resolve_all(children)?)),
                None => match domain.to_value(&data) {
                    Ok(value) => Ok(Evaluable::call(
                        ctx.implicit_multiplication,
                        vec![
                            Evaluable::Literal(value),
                            Evaluable::call("", resolve_all(children)?),
                        ],
                    )),
                    Err(_) => Ok(Evaluable::call(data, resolve_all(children)?)),
                },
            }
        })
    }
}

/// Tears the tree down with an explicit work list, so dropping a deeply
/// nested expression cannot overflow the stack.
impl<V> Drop for Evaluable<V> {
    fn drop(&mut self) {
        let Evaluable::Call { args, .. } = self else {
            return;
        };
        let mut pending = std::mem::take(args);
        while let Some(mut node) = pending.pop() {
            if let Evaluable::Call { args, .. } = &mut node {
                pending.append(args);
            }
        }
    }
}

impl<V: fmt::Display> fmt::Display for Evaluable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Evaluable::Literal(value) => write!(f, "{value}"),
            Evaluable::Call { function, args } => {
                write!(f, "{function}(")?;
                for (index, arg) in args.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(")")
            }
        })
    }
}

/// Collect every leaf or name prefix the domain cannot read as a value.
pub(crate) fn collect_undefined<D: Domain>(
    node: &ProtoNode,
    domain: &D,
    ctx: &ParseContext<'_>,
    found: &mut BTreeSet<String>,
) {
    ensure_sufficient_stack(|| {
        let data = node.data();
        let unresolved = if node.is_leaf() {
            data
        } else {
            match ctx.function_suffix(data) {
                Some(name) => &data[..data.len() - name.len()],
                None => data,
            }
        };
        if (node.is_leaf() || !unresolved.is_empty()) && domain.to_value(unresolved).is_err() {
            found.insert(unresolved.to_string());
        }
        for child in node.children() {
            collect_undefined(child, domain, ctx, found);
        }
    });
}

#[cfg(test)]
mod tests;
