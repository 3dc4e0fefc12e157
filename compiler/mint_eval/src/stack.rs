//! Host stack growth for deep recursion.
//!
//! Evaluation, method calls and parsing all recurse on the host stack, and
//! nesting depth is chosen by the program being run.

/// Run `f`, first growing the stack if little of it is left.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    /// Grow when less than this much remains (128KB).
    const RED_ZONE: usize = 128 * 1024;

    /// Size of each new segment (2MB).
    const SEGMENT: usize = 2 * 1024 * 1024;

    stacker::maybe_grow(RED_ZONE, SEGMENT, f)
}

/// WASM manages its own stack; call through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
