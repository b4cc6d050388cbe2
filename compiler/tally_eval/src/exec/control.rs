//! Control flow evaluation (if/else, while, do-while).
//!
//! Each helper takes the node's children and a closure that evaluates one
//! of them. All three forms are statements and yield `Void`.

use tally_ir::ExprId;

use crate::{EvalResult, Value};

/// Evaluate an if/else statement.
pub fn eval_if<F>(
    cond: ExprId,
    then_branch: ExprId,
    else_branch: Option<ExprId>,
    mut eval_fn: F,
) -> EvalResult
where
    F: FnMut(ExprId) -> EvalResult,
{
    let cond_val = eval_fn(cond)?;
    if cond_val.is_truthy() {
        eval_fn(then_branch)?;
    } else if let Some(else_branch) = else_branch {
        eval_fn(else_branch)?;
    }
    Ok(Value::Void)
}

/// Evaluate a while loop: condition first, then body, until falsy.
pub fn eval_while<F>(cond: ExprId, body: ExprId, mut eval_fn: F) -> EvalResult
where
    F: FnMut(ExprId) -> EvalResult,
{
    while eval_fn(cond)?.is_truthy() {
        eval_fn(body)?;
    }
    Ok(Value::Void)
}

/// Evaluate a do-while loop. The body always runs at least once.
pub fn eval_do_while<F>(body: ExprId, cond: ExprId, mut eval_fn: F) -> EvalResult
where
    F: FnMut(ExprId) -> EvalResult,
{
    loop {
        eval_fn(body)?;
        if !eval_fn(cond)?.is_truthy() {
            return Ok(Value::Void);
        }
    }
}
