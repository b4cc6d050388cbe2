//! Binary operator implementations for the evaluator.
//!
//! Direct enum-based dispatch. Booleans take part in arithmetic and
//! comparisons as 0 and 1; strings support `+` and comparisons.

use std::cmp::Ordering;

use tally_ir::BinaryOp;

use crate::errors::{binary_type_mismatch, division_by_zero, integer_overflow};
use crate::value::Number;
use crate::{EvalResult, Value};

/// Evaluate a binary operation on two already-evaluated operands.
///
/// `&&` and `||` are value-preserving here too, but both operands have
/// already been evaluated; the interpreter short-circuits before calling in.
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::And => Ok(if left.is_truthy() { right } else { left }),
        BinaryOp::Or => Ok(if left.is_truthy() { left } else { right }),
        BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div => {
            eval_arithmetic(&left, &right, op)
        }
        BinaryOp::Eq => Ok(Value::Bool(values_equal(&left, &right))),
        BinaryOp::NotEq => Ok(Value::Bool(!values_equal(&left, &right))),
        BinaryOp::Lt | BinaryOp::Gt | BinaryOp::LtEq | BinaryOp::GtEq => {
            eval_ordering(&left, &right, op)
        }
    }
}

fn eval_arithmetic(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    if let (Some(a), Some(b)) = (left.as_number(), right.as_number()) {
        return match (a, b) {
            (Number::Int(a), Number::Int(b)) => eval_int_arithmetic(a, b, op),
            (a, b) => eval_float_arithmetic(a.as_f64(), b.as_f64(), op),
        };
    }

    if op == BinaryOp::Add {
        if let (Some(a), Some(b)) = (left.as_text(), right.as_text()) {
            return Ok(Value::Str(format!("{a}{b}")));
        }
    }

    Err(binary_type_mismatch(op.as_symbol(), left, right))
}

/// Integer arithmetic; `/` always produces a real.
fn eval_int_arithmetic(a: i64, b: i64, op: BinaryOp) -> EvalResult {
    let result = match op {
        BinaryOp::Add => a.checked_add(b).ok_or_else(|| integer_overflow("addition"))?,
        BinaryOp::Sub => a.checked_sub(b).ok_or_else(|| integer_overflow("subtraction"))?,
        BinaryOp::Mul => a
            .checked_mul(b)
            .ok_or_else(|| integer_overflow("multiplication"))?,
        _ => {
            return eval_float_arithmetic(Number::Int(a).as_f64(), Number::Int(b).as_f64(), op);
        }
    };
    Ok(Value::Int(result))
}

fn eval_float_arithmetic(a: f64, b: f64, op: BinaryOp) -> EvalResult {
    let result = match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div => {
            if b == 0.0 {
                return Err(division_by_zero());
            }
            a / b
        }
        _ => unreachable!("non-arithmetic operator {op:?} routed to arithmetic"),
    };
    Ok(Value::Float(result))
}

/// `==` semantics: numbers compare numerically, strings by content, `Void`
/// only equals `Void`, and any other pairing is unequal.
fn values_equal(left: &Value, right: &Value) -> bool {
    if let (Some(a), Some(b)) = (left.as_number(), right.as_number()) {
        return a.compare(b) == Some(Ordering::Equal);
    }
    if let (Some(a), Some(b)) = (left.as_text(), right.as_text()) {
        return a == b;
    }
    matches!((left, right), (Value::Void, Value::Void))
}

fn eval_ordering(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    let ordering = if let (Some(a), Some(b)) = (left.as_number(), right.as_number()) {
        a.compare(b)
    } else if let (Some(a), Some(b)) = (left.as_text(), right.as_text()) {
        Some(a.cmp(b))
    } else {
        return Err(binary_type_mismatch(op.as_symbol(), left, right));
    };

    // NaN compares false under every ordering operator.
    let result = ordering.is_some_and(|ord| match op {
        BinaryOp::Lt => ord == Ordering::Less,
        BinaryOp::Gt => ord == Ordering::Greater,
        BinaryOp::LtEq => ord != Ordering::Greater,
        _ => ord != Ordering::Less,
    });
    Ok(Value::Bool(result))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use crate::EvalError;

    #[test]
    fn integer_arithmetic_stays_integral() {
        assert_eq!(
            evaluate_binary(Value::Int(4), Value::Int(7), BinaryOp::Add).unwrap(),
            Value::Int(11)
        );
        assert_eq!(
            evaluate_binary(Value::Int(4), Value::Int(2), BinaryOp::Sub).unwrap(),
            Value::Int(2)
        );
        assert_eq!(
            evaluate_binary(Value::Int(4), Value::Int(7), BinaryOp::Mul).unwrap(),
            Value::Int(28)
        );
    }

    #[test]
    fn division_is_always_real() {
        assert_eq!(
            evaluate_binary(Value::Int(8), Value::Int(2), BinaryOp::Div).unwrap(),
            Value::Float(4.0)
        );
        assert_eq!(
            evaluate_binary(Value::Int(1), Value::Int(4), BinaryOp::Div).unwrap(),
            Value::Float(0.25)
        );
    }

    #[test]
    fn division_by_zero_fails() {
        assert_eq!(
            evaluate_binary(Value::Int(1), Value::Int(0), BinaryOp::Div),
            Err(EvalError::DivisionByZero)
        );
        assert_eq!(
            evaluate_binary(Value::Float(1.0), Value::Float(0.0), BinaryOp::Div),
            Err(EvalError::DivisionByZero)
        );
    }

    #[test]
    fn mixed_arithmetic_is_real() {
        assert_eq!(
            evaluate_binary(Value::Float(1.5), Value::Int(2), BinaryOp::Mul).unwrap(),
            Value::Float(3.0)
        );
    }

    #[test]
    fn booleans_count_as_integers() {
        assert_eq!(
            evaluate_binary(Value::Bool(true), Value::Int(1), BinaryOp::Add).unwrap(),
            Value::Int(2)
        );
        assert_eq!(
            evaluate_binary(Value::Bool(true), Value::Int(1), BinaryOp::Eq).unwrap(),
            Value::Bool(true)
        );
    }

    #[test]
    fn overflow_is_reported() {
        assert_eq!(
            evaluate_binary(Value::Int(i64::MAX), Value::Int(1), BinaryOp::Add),
            Err(EvalError::IntegerOverflow { op: "addition" })
        );
    }

    #[test]
    fn strings_concatenate_and_compare() {
        let a = Value::Str("ab".to_owned());
        let b = Value::Str("cd".to_owned());
        assert_eq!(
            evaluate_binary(a.clone(), b.clone(), BinaryOp::Add).unwrap(),
            Value::Str("abcd".to_owned())
        );
        assert_eq!(
            evaluate_binary(a, b, BinaryOp::Lt).unwrap(),
            Value::Bool(true)
        );
    }

    #[test]
    fn mismatched_arithmetic_fails() {
        let err = evaluate_binary(Value::Str("a".to_owned()), Value::Int(1), BinaryOp::Add)
            .unwrap_err();
        assert_eq!(
            err,
            EvalError::TypeMismatch {
                op: "+",
                operands: "str and int".to_owned()
            }
        );
        assert!(evaluate_binary(Value::Void, Value::Int(1), BinaryOp::Mul).is_err());
    }

    #[test]
    fn equality_across_kinds_is_false() {
        assert_eq!(
            evaluate_binary(Value::Str("1".to_owned()), Value::Int(1), BinaryOp::Eq).unwrap(),
            Value::Bool(false)
        );
        assert_eq!(
            evaluate_binary(Value::Void, Value::Int(0), BinaryOp::NotEq).unwrap(),
            Value::Bool(true)
        );
        assert_eq!(
            evaluate_binary(Value::Void, Value::Void, BinaryOp::Eq).unwrap(),
            Value::Bool(true)
        );
    }

    #[test]
    fn ordering_across_kinds_fails() {
        assert!(matches!(
            evaluate_binary(Value::Str("a".to_owned()), Value::Int(1), BinaryOp::Lt),
            Err(EvalError::TypeMismatch { op: "<", .. })
        ));
    }

    #[test]
    fn relational_operators() {
        let cases = [
            (BinaryOp::Lt, 2, 4, false),
            (BinaryOp::Gt, 4, 2, true),
            (BinaryOp::LtEq, 3, 3, true),
            (BinaryOp::GtEq, 2, 3, false),
        ];
        for (op, a, b, expected) in cases {
            assert_eq!(
                evaluate_binary(Value::Int(a), Value::Int(b), op).unwrap(),
                Value::Bool(expected),
                "{a} {} {b}",
                op.as_symbol()
            );
        }
    }

    #[test]
    fn nan_orders_false() {
        let nan = Value::Float(f64::NAN);
        assert_eq!(
            evaluate_binary(nan.clone(), Value::Int(1), BinaryOp::Lt).unwrap(),
            Value::Bool(false)
        );
        assert_eq!(
            evaluate_binary(nan, Value::Int(1), BinaryOp::GtEq).unwrap(),
            Value::Bool(false)
        );
    }

    #[test]
    fn logical_operators_preserve_values() {
        assert_eq!(
            evaluate_binary(Value::Int(0), Value::Int(5), BinaryOp::And).unwrap(),
            Value::Int(0)
        );
        assert_eq!(
            evaluate_binary(Value::Int(3), Value::Int(5), BinaryOp::And).unwrap(),
            Value::Int(5)
        );
        assert_eq!(
            evaluate_binary(Value::Int(3), Value::Int(5), BinaryOp::Or).unwrap(),
            Value::Int(3)
        );
        assert_eq!(
            evaluate_binary(Value::Int(0), Value::Float(0.5), BinaryOp::Or).unwrap(),
            Value::Float(0.5)
        );
    }
}
