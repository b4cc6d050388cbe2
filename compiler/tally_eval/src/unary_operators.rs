//! Unary operator implementations for the evaluator.

use tally_ir::UnaryOp;

use crate::errors::{integer_overflow, unary_type_mismatch};
use crate::value::Number;
use crate::{EvalResult, Value};

/// Evaluate a unary operation on an already-evaluated operand.
///
/// `!` accepts any value and yields a boolean. `-` accepts numbers, with
/// booleans negated as 0 and 1.
pub fn evaluate_unary(value: Value, op: UnaryOp) -> EvalResult {
    match op {
        UnaryOp::Not => Ok(Value::Bool(!value.is_truthy())),
        UnaryOp::Neg => match value.as_number() {
            Some(Number::Int(n)) => n
                .checked_neg()
                .map(Value::Int)
                .ok_or_else(|| integer_overflow("negation")),
            Some(Number::Float(f)) => Ok(Value::Float(-f)),
            None => Err(unary_type_mismatch(op.as_symbol(), &value)),
        },
    }
}
