//! Built-in math functions.
//!
//! Arguments arrive already evaluated, left to right. Every domain error is
//! fatal except `factorial` of a negative number, which yields a
//! [`Value::Error`] descriptor instead.

use tracing::trace;

use crate::errors::{
    division_by_zero, integer_overflow, invalid_argument, wrong_arg_count, EvalError,
};
use crate::value::Number;
use crate::{EvalResult, Value};

/// Distance from an integer under which root results snap to that integer.
const INTEGER_TOLERANCE: f64 = 1e-9;

/// 2^63, the first real past `i64::MAX`. Exactly representable.
const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

pub const FACTORIAL_NEGATIVE: &str = "Factorial is not defined for negative numbers";

/// The fixed set of callable functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Builtin {
    Pow,
    Sqrt,
    Cbrt,
    Root,
    Ceil,
    Floor,
    Factorial,
    Gcf,
}

impl Builtin {
    pub const ALL: [Builtin; 8] = [
        Builtin::Pow,
        Builtin::Sqrt,
        Builtin::Cbrt,
        Builtin::Root,
        Builtin::Ceil,
        Builtin::Floor,
        Builtin::Factorial,
        Builtin::Gcf,
    ];

    /// The name the function is called by.
    pub const fn name(self) -> &'static str {
        match self {
            Builtin::Pow => "pow",
            Builtin::Sqrt => "sqrt",
            Builtin::Cbrt => "cbrt",
            Builtin::Root => "root",
            Builtin::Ceil => "ceil",
            Builtin::Floor => "floor",
            Builtin::Factorial => "factorial",
            Builtin::Gcf => "gcf",
        }
    }

    /// Apply the function to its evaluated arguments.
    #[tracing::instrument(level = "trace", skip(args), fields(argc = args.len()))]
    pub fn call(self, args: &[Value]) -> EvalResult {
        let name = self.name();
        let result = match self {
            Builtin::Pow => {
                let (base, exponent) = two_args(name, args)?;
                pow(base, exponent)
            }
            Builtin::Sqrt => sqrt(one_arg(name, args)?),
            Builtin::Cbrt => cbrt(one_arg(name, args)?),
            Builtin::Root => {
                let (x, n) = two_args(name, args)?;
                root(x, n)
            }
            Builtin::Ceil => round_toward(name, one_arg(name, args)?, Direction::Up),
            Builtin::Floor => round_toward(name, one_arg(name, args)?, Direction::Down),
            Builtin::Factorial => factorial(one_arg(name, args)?),
            Builtin::Gcf => gcf(args),
        }?;
        trace!(%result, "builtin returned");
        Ok(result)
    }
}

// Argument helpers

fn one_arg<'v>(function: &'static str, args: &'v [Value]) -> Result<&'v Value, EvalError> {
    match args {
        [x] => Ok(x),
        _ => Err(wrong_arg_count(function, "1", args.len())),
    }
}

fn two_args<'v>(
    function: &'static str,
    args: &'v [Value],
) -> Result<(&'v Value, &'v Value), EvalError> {
    match args {
        [a, b] => Ok((a, b)),
        _ => Err(wrong_arg_count(function, "2", args.len())),
    }
}

fn number_arg(function: &'static str, value: &Value) -> Result<Number, EvalError> {
    value.as_number().ok_or_else(|| {
        invalid_argument(
            function,
            format!("expected a number, got {}", value.type_name()),
        )
    })
}

fn int_arg(function: &'static str, value: &Value) -> Result<i64, EvalError> {
    match value.as_number() {
        Some(Number::Int(n)) => Ok(n),
        _ => Err(invalid_argument(
            function,
            format!("expected an integer, got {}", value.type_name()),
        )),
    }
}

// Numeric helpers

/// Convert an integral real to `i64`; `None` when out of range or not finite.
#[allow(
    clippy::cast_possible_truncation,
    reason = "callers pass integral values and the range is checked first"
)]
fn float_to_int(f: f64) -> Option<i64> {
    (f.is_finite() && (-TWO_POW_63..TWO_POW_63).contains(&f)).then_some(f as i64)
}

/// Snap to the nearest integer when within tolerance, else keep the real.
fn round_near_integer(x: f64) -> Value {
    let rounded = x.round();
    if (x - rounded).abs() < INTEGER_TOLERANCE {
        if let Some(n) = float_to_int(rounded) {
            return Value::Int(n);
        }
    }
    Value::Float(x)
}

/// `base` raised to a real `exponent`, rejecting non-real results.
fn real_power(function: &'static str, base: f64, exponent: f64) -> Result<f64, EvalError> {
    if base == 0.0 && exponent < 0.0 {
        return Err(division_by_zero());
    }
    let result = base.powf(exponent);
    if result.is_nan() {
        return Err(invalid_argument(function, "result is not a real number"));
    }
    Ok(result)
}

/// Remainder with the sign of the divisor.
fn floor_mod(a: i64, b: i64) -> Result<i64, EvalError> {
    let mut r = a.checked_rem(b).ok_or_else(|| integer_overflow("remainder"))?;
    if r != 0 && (r < 0) != (b < 0) {
        r += b;
    }
    Ok(r)
}

/// Real remainder with the sign of the divisor.
fn floor_mod_real(a: f64, b: f64) -> f64 {
    let r = a % b;
    if r != 0.0 && (r < 0.0) != (b < 0.0) {
        r + b
    } else {
        r
    }
}

// Functions

fn pow(base: &Value, exponent: &Value) -> EvalResult {
    let base = number_arg("pow", base)?;
    let exponent = number_arg("pow", exponent)?;
    match (base, exponent) {
        (Number::Int(b), Number::Int(e)) if e >= 0 => match b {
            // Powers of these bases stay in range for any exponent.
            0 => Ok(Value::Int(i64::from(e == 0))),
            1 => Ok(Value::Int(1)),
            -1 => Ok(Value::Int(if e % 2 == 0 { 1 } else { -1 })),
            _ => {
                let e = u32::try_from(e).map_err(|_| integer_overflow("exponentiation"))?;
                b.checked_pow(e)
                    .map(Value::Int)
                    .ok_or_else(|| integer_overflow("exponentiation"))
            }
        },
        (b, e) => real_power("pow", b.as_f64(), e.as_f64()).map(Value::Float),
    }
}

fn sqrt(x: &Value) -> EvalResult {
    let x = number_arg("sqrt", x)?.as_f64();
    if x < 0.0 {
        return Err(invalid_argument("sqrt", "square root of a negative number"));
    }
    Ok(round_near_integer(x.sqrt()))
}

fn cbrt(x: &Value) -> EvalResult {
    let x = number_arg("cbrt", x)?.as_f64();
    let root = if x < 0.0 { -(-x).cbrt() } else { x.cbrt() };
    Ok(round_near_integer(root))
}

fn root(x: &Value, n: &Value) -> EvalResult {
    let x = number_arg("root", x)?.as_f64();
    let n = number_arg("root", n)?.as_f64();
    if n == 0.0 {
        return Err(invalid_argument("root", "root with n = 0 is undefined"));
    }
    let odd_degree = n.trunc().rem_euclid(2.0) == 1.0;
    let value = if x < 0.0 && odd_degree {
        -real_power("root", -x, n.recip())?
    } else {
        real_power("root", x, n.recip())?
    };
    Ok(round_near_integer(value))
}

#[derive(Clone, Copy)]
enum Direction {
    Up,
    Down,
}

/// `ceil` and `floor`: truncate toward zero, then step once in `direction`
/// if the input had a fractional part on that side.
fn round_toward(function: &'static str, x: &Value, direction: Direction) -> EvalResult {
    let f = match number_arg(function, x)? {
        Number::Int(n) => return Ok(Value::Int(n)),
        Number::Float(f) => f,
    };
    let truncated = f.trunc();
    let adjusted = match direction {
        Direction::Up if f > 0.0 && f != truncated => truncated + 1.0,
        Direction::Down if f < 0.0 && f != truncated => truncated - 1.0,
        _ => truncated,
    };
    float_to_int(adjusted)
        .map(Value::Int)
        .ok_or_else(|| invalid_argument(function, format!("{f:?} has no integer value")))
}

fn factorial(value: &Value) -> EvalResult {
    if number_arg("factorial", value)?.as_f64() < 0.0 {
        return Ok(Value::Error(FACTORIAL_NEGATIVE.to_owned()));
    }
    let n = int_arg("factorial", value)?;
    (1..=n)
        .try_fold(1_i64, i64::checked_mul)
        .map(Value::Int)
        .ok_or_else(|| integer_overflow("factorial"))
}

/// Euclid's algorithm folded over the arguments. Integers stay integral;
/// any real argument makes the rest of the fold real.
fn gcf(args: &[Value]) -> EvalResult {
    let Some((first, rest)) = args.split_first() else {
        return Err(wrong_arg_count("gcf", "at least 1", 0));
    };
    let mut result = gcf_arg(first)?;
    for arg in rest {
        result = match (result, gcf_arg(arg)?) {
            (Number::Int(a), Number::Int(b)) => Number::Int(gcf_int(a, b)?),
            (a, b) => Number::Float(gcf_real(a.as_f64(), b.as_f64())),
        };
    }
    Ok(result.into())
}

/// Euclid does not terminate on NaN or infinities.
fn gcf_arg(value: &Value) -> Result<Number, EvalError> {
    match number_arg("gcf", value)? {
        Number::Float(f) if !f.is_finite() => Err(invalid_argument(
            "gcf",
            format!("{f:?} is not a finite number"),
        )),
        n => Ok(n),
    }
}

fn gcf_int(mut a: i64, mut b: i64) -> Result<i64, EvalError> {
    if a < b {
        std::mem::swap(&mut a, &mut b);
    }
    while b != 0 {
        let r = floor_mod(a, b)?;
        a = b;
        b = r;
    }
    Ok(a)
}

fn gcf_real(mut a: f64, mut b: f64) -> f64 {
    if a < b {
        std::mem::swap(&mut a, &mut b);
    }
    while b != 0.0 {
        let r = floor_mod_real(a, b);
        a = b;
        b = r;
    }
    a
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn call(builtin: Builtin, args: &[Value]) -> Value {
        builtin.call(args).unwrap()
    }

    #[test]
    fn names_are_unique() {
        for (i, a) in Builtin::ALL.iter().enumerate() {
            for b in &Builtin::ALL[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn pow_integer_and_real() {
        assert_eq!(call(Builtin::Pow, &[Value::Int(2), Value::Int(10)]), Value::Int(1024));
        assert_eq!(call(Builtin::Pow, &[Value::Int(2), Value::Int(-1)]), Value::Float(0.5));
        assert_eq!(
            call(Builtin::Pow, &[Value::Float(1.5), Value::Int(2)]),
            Value::Float(2.25)
        );
        assert_eq!(
            Builtin::Pow.call(&[Value::Int(0), Value::Int(-1)]),
            Err(EvalError::DivisionByZero)
        );
        assert_eq!(
            Builtin::Pow.call(&[Value::Int(10), Value::Int(40)]),
            Err(EvalError::IntegerOverflow { op: "exponentiation" })
        );
    }

    #[test]
    fn sqrt_snaps_to_integers() {
        assert_eq!(call(Builtin::Sqrt, &[Value::Int(9)]), Value::Int(3));
        assert_eq!(call(Builtin::Sqrt, &[Value::Float(2.25)]), Value::Float(1.5));
        assert!(matches!(
            Builtin::Sqrt.call(&[Value::Int(-4)]),
            Err(EvalError::InvalidArgument { function: "sqrt", .. })
        ));
    }

    #[test]
    fn cbrt_handles_negatives_and_reals() {
        assert_eq!(call(Builtin::Cbrt, &[Value::Int(27)]), Value::Int(3));
        assert_eq!(call(Builtin::Cbrt, &[Value::Int(-8)]), Value::Int(-2));
        let Value::Float(f) = call(Builtin::Cbrt, &[Value::Int(2)]) else {
            panic!("expected a real cube root");
        };
        assert!((f - 1.259_921).abs() < 1e-6);
    }

    #[test]
    fn root_of_negative_odd_degree() {
        assert_eq!(call(Builtin::Root, &[Value::Int(-32), Value::Int(5)]), Value::Int(-2));
        assert_eq!(call(Builtin::Root, &[Value::Int(16), Value::Int(4)]), Value::Int(2));
        assert_eq!(call(Builtin::Root, &[Value::Int(2), Value::Int(-1)]), Value::Float(0.5));
    }

    #[test]
    fn root_domain_errors() {
        assert_eq!(
            Builtin::Root.call(&[Value::Int(8), Value::Int(0)]),
            Err(EvalError::InvalidArgument {
                function: "root",
                reason: "root with n = 0 is undefined".to_owned()
            })
        );
        assert!(matches!(
            Builtin::Root.call(&[Value::Int(-16), Value::Int(4)]),
            Err(EvalError::InvalidArgument { function: "root", .. })
        ));
    }

    #[test]
    fn ceil_and_floor() {
        assert_eq!(call(Builtin::Ceil, &[Value::Float(2.1)]), Value::Int(3));
        assert_eq!(call(Builtin::Ceil, &[Value::Float(-2.7)]), Value::Int(-2));
        assert_eq!(call(Builtin::Ceil, &[Value::Float(4.0)]), Value::Int(4));
        assert_eq!(call(Builtin::Floor, &[Value::Float(2.9)]), Value::Int(2));
        assert_eq!(call(Builtin::Floor, &[Value::Float(-2.1)]), Value::Int(-3));
        assert_eq!(call(Builtin::Floor, &[Value::Int(7)]), Value::Int(7));
        assert!(Builtin::Floor.call(&[Value::Float(f64::INFINITY)]).is_err());
    }

    #[test]
    fn factorial_values() {
        assert_eq!(call(Builtin::Factorial, &[Value::Int(5)]), Value::Int(120));
        assert_eq!(call(Builtin::Factorial, &[Value::Int(0)]), Value::Int(1));
        assert_eq!(
            call(Builtin::Factorial, &[Value::Int(-1)]),
            Value::Error(FACTORIAL_NEGATIVE.to_owned())
        );
        assert_eq!(
            Builtin::Factorial.call(&[Value::Int(21)]),
            Err(EvalError::IntegerOverflow { op: "factorial" })
        );
        assert!(Builtin::Factorial.call(&[Value::Float(5.0)]).is_err());
    }

    #[test]
    fn factorial_of_negative_real_is_error_value() {
        assert_eq!(
            call(Builtin::Factorial, &[Value::Float(-1.5)]),
            Value::Error(FACTORIAL_NEGATIVE.to_owned())
        );
        assert!(matches!(
            Builtin::Factorial.call(&[Value::Str("x".to_owned())]),
            Err(EvalError::InvalidArgument { function: "factorial", .. })
        ));
    }

    #[test]
    fn pow_of_unit_bases_ignores_exponent_size() {
        let huge = Value::Int(5_000_000_000);
        assert_eq!(call(Builtin::Pow, &[Value::Int(1), huge.clone()]), Value::Int(1));
        assert_eq!(call(Builtin::Pow, &[Value::Int(0), huge.clone()]), Value::Int(0));
        assert_eq!(call(Builtin::Pow, &[Value::Int(-1), huge.clone()]), Value::Int(1));
        assert_eq!(
            call(Builtin::Pow, &[Value::Int(-1), Value::Int(5_000_000_001)]),
            Value::Int(-1)
        );
        assert_eq!(call(Builtin::Pow, &[Value::Int(0), Value::Int(0)]), Value::Int(1));
        assert_eq!(
            Builtin::Pow.call(&[Value::Int(2), huge]),
            Err(EvalError::IntegerOverflow { op: "exponentiation" })
        );
    }

    #[test]
    fn gcf_reduces_pairwise() {
        assert_eq!(
            call(Builtin::Gcf, &[Value::Int(24), Value::Int(12), Value::Int(18)]),
            Value::Int(6)
        );
        assert_eq!(call(Builtin::Gcf, &[Value::Int(12), Value::Int(42)]), Value::Int(6));
        assert_eq!(call(Builtin::Gcf, &[Value::Int(7)]), Value::Int(7));
        assert_eq!(call(Builtin::Gcf, &[Value::Int(0), Value::Int(5)]), Value::Int(5));
    }

    #[test]
    fn gcf_accepts_reals() {
        assert_eq!(
            call(Builtin::Gcf, &[Value::Float(7.5), Value::Float(2.5)]),
            Value::Float(2.5)
        );
        assert_eq!(
            call(Builtin::Gcf, &[Value::Int(24), Value::Float(18.0), Value::Int(4)]),
            Value::Float(2.0)
        );
        assert_eq!(call(Builtin::Gcf, &[Value::Float(1.5)]), Value::Float(1.5));
        assert!(matches!(
            Builtin::Gcf.call(&[Value::Int(4), Value::Float(f64::NAN)]),
            Err(EvalError::InvalidArgument { function: "gcf", .. })
        ));
    }

    #[test]
    fn arity_is_checked() {
        assert_eq!(
            Builtin::Sqrt.call(&[Value::Int(1), Value::Int(2)]),
            Err(EvalError::ArityMismatch {
                function: "sqrt",
                expected: "1",
                found: 2
            })
        );
        assert_eq!(
            Builtin::Pow.call(&[Value::Int(1)]),
            Err(EvalError::ArityMismatch {
                function: "pow",
                expected: "2",
                found: 1
            })
        );
        assert_eq!(
            Builtin::Gcf.call(&[]),
            Err(EvalError::ArityMismatch {
                function: "gcf",
                expected: "at least 1",
                found: 0
            })
        );
    }

    #[test]
    fn floor_mod_follows_divisor_sign() {
        assert_eq!(floor_mod(7, 3).unwrap(), 1);
        assert_eq!(floor_mod(-7, 3).unwrap(), 2);
        assert_eq!(floor_mod(7, -3).unwrap(), -2);
    }
}
