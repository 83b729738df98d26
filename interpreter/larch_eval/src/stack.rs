//! Stack safety for deep recursion.
//!
//! Evaluation is plain host recursion, so the host call stack doubles as the
//! interpreter's control stack. `stacker` grows the stack on demand so deep
//! but finite recursion completes instead of crashing; the interpreter's
//! depth cap (see `interpreter`) turns *unbounded* recursion into an
//! `EvalError::StackOverflow`.
//!
//! On WASM targets stacker isn't available and the closure is called
//! directly (WASM manages its own stack).

/// Ensure sufficient stack space is available before executing `f`.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    /// Minimum stack space to keep available (64KB red zone).
    const RED_ZONE: usize = 64 * 1024;

    /// Stack space to allocate when growing (1MB).
    const STACK_PER_GROWTH: usize = 1024 * 1024;

    stacker::maybe_grow(RED_ZONE, STACK_PER_GROWTH, f)
}

/// WASM version - just call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
