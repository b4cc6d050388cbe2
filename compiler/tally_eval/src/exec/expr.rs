//! Expression evaluation helpers.

use tally_ir::{Name, StringInterner};

use crate::errors::undefined_variable;
use crate::{Environment, EvalResult};

/// Evaluate an identifier by walking the scope chain.
pub fn eval_ident(name: Name, env: &Environment<'_>, interner: &StringInterner) -> EvalResult {
    match env.lookup(name) {
        Some(value) => Ok(value.clone()),
        None => Err(undefined_variable(interner.lookup(name), env.dump(interner))),
    }
}
