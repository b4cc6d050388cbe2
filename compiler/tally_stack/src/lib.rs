//! Stack growth for the recursive stages of the interpreter.
//!
//! Both the parser (one frame per precedence level per nesting level) and the
//! evaluator (one frame per AST level) recurse on the shape of the program.
//! Wrapping those recursions in [`ensure_sufficient_stack`] turns a hard stack
//! overflow on pathological nesting into on-demand stack growth.
//!
//! On `wasm32` the guard is a passthrough.

/// Grow the stack when less than this remains (64KB).
const RED_ZONE: usize = 64 * 1024;

/// Size of each newly allocated stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, growing the stack first if the remaining space is below the red zone.
///
/// ```text
/// fn parse_expr(&mut self) -> Result<ExprId, ParseError> {
///     ensure_sufficient_stack(|| self.parse_logical_or())
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
