//! Tally Eval - tree-walking evaluator for the Tally interpreter.
//!
//! # Architecture
//!
//! The evaluator uses:
//! - `Environment`: a scope frame with an optional borrowed parent
//! - `evaluate_binary`: direct enum-based binary operator dispatch
//! - `evaluate_unary`: direct enum-based unary operator dispatch
//! - `Builtin`: the fixed set of math functions, resolved by pre-interned name
//! - `SharedPrintHandler`: where `print` output goes
//!
//! The caller owns the environment. `Interpreter::eval` mutates it in place
//! and leaves already-applied assignments in place when it fails.

mod builtins;
mod environment;
pub mod errors;
pub mod exec;
pub mod interpreter;
mod operators;
mod print_handler;
mod unary_operators;
mod value;

pub use builtins::{Builtin, FACTORIAL_NEGATIVE};
pub use environment::Environment;
pub use errors::{EvalError, EvalResult};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, tee_handler, BufferPrintHandler,
    PrintHandlerImpl, SharedPrintHandler, StdoutPrintHandler,
};
pub use unary_operators::evaluate_unary;
pub use value::Value;

#[cfg(test)]
mod tests;
