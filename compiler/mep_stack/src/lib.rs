//! Stack growth for deeply nested expressions.
//!
//! Tree building, typed resolution and evaluation all recurse once per
//! nesting level of the input text. Input like `((((…))))` thousands of
//! levels deep would otherwise exhaust the thread stack, so every recursive
//! step runs inside [`ensure_sufficient_stack`].
//!
//! On native targets the `stacker` crate allocates a fresh segment when the
//! remaining stack drops under the red zone. On `wasm32` the closure is
//! called directly.

/// Minimum stack space to keep available (64 KiB red zone).
///
/// One tree-building frame holds a few `Vec<char>` slices and the recursion
/// into each argument, well under this.
const RED_ZONE: usize = 64 * 1024;

/// Stack space to allocate when growing (1 MiB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, growing the stack first if less than the red zone remains.
///
/// ```
/// use mep_stack::ensure_sufficient_stack;
///
/// fn depth(text: &str) -> usize {
///     ensure_sufficient_stack(|| match text.strip_prefix('(') {
///         Some(inner) => 1 + depth(inner),
///         None => 0,
///     })
/// }
///
/// assert_eq!(depth("((("), 3);
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly (WASM has its own stack management).
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
