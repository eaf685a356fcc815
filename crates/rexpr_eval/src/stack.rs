//! Stack guard for walking `Expr` trees.
//!
//! `Expr::eval`, its `Display` rendering, `Clone` and `Debug` each recurse
//! once per tree level and call [`ensure_sufficient_stack`] at every node.
//! Native builds grow the stack with `stacker`; wasm32 runs the closure
//! as-is.

/// Run `f` for one tree node, first growing the stack if less than the red
/// zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    /// Headroom a single node visit may use before the stack is grown.
    const RED_ZONE: usize = 100 * 1024;

    /// Size of each freshly allocated stack segment.
    const SEGMENT: usize = 1024 * 1024;

    stacker::maybe_grow(RED_ZONE, SEGMENT, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
