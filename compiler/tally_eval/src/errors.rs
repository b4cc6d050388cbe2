//! Evaluation errors and their constructors.
//!
//! Every error is fatal to the current evaluation. Side effects that already
//! happened (printed lines, assignments) are not rolled back.

use thiserror::Error;

use crate::Value;

/// Result of evaluating a node.
pub type EvalResult = Result<Value, EvalError>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Identifier not bound anywhere in the scope chain.
    #[error("undefined variable `{name}` in environment {environment}")]
    UndefinedVariable { name: String, environment: String },

    /// Built-in called with the wrong number of arguments.
    #[error("{function}() takes {expected} argument(s), got {found}")]
    ArityMismatch {
        function: &'static str,
        expected: &'static str,
        found: usize,
    },

    /// Built-in argument outside the function's domain.
    #[error("invalid argument to {function}(): {reason}")]
    InvalidArgument {
        function: &'static str,
        reason: String,
    },

    /// Assignment to something other than an identifier.
    #[error("cannot assign to {target}")]
    InvalidAssignmentTarget { target: &'static str },

    /// Call to a name outside the built-in set.
    #[error("unknown function `{name}`")]
    UnknownFunction { name: String },

    /// Operator applied to unsupported operand kinds.
    #[error("unsupported operand type(s) for {op}: {operands}")]
    TypeMismatch { op: &'static str, operands: String },

    #[error("division by zero")]
    DivisionByZero,

    /// Integer result outside the `i64` range.
    #[error("integer overflow in {op}")]
    IntegerOverflow { op: &'static str },
}

// Constructors

#[cold]
pub fn undefined_variable(name: &str, environment: String) -> EvalError {
    EvalError::UndefinedVariable {
        name: name.to_owned(),
        environment,
    }
}

#[cold]
pub fn wrong_arg_count(function: &'static str, expected: &'static str, found: usize) -> EvalError {
    EvalError::ArityMismatch {
        function,
        expected,
        found,
    }
}

#[cold]
pub fn invalid_argument(function: &'static str, reason: impl Into<String>) -> EvalError {
    EvalError::InvalidArgument {
        function,
        reason: reason.into(),
    }
}

#[cold]
pub fn invalid_assignment_target(target: &'static str) -> EvalError {
    EvalError::InvalidAssignmentTarget { target }
}

#[cold]
pub fn unknown_function(name: &str) -> EvalError {
    EvalError::UnknownFunction {
        name: name.to_owned(),
    }
}

#[cold]
pub fn binary_type_mismatch(op: &'static str, left: &Value, right: &Value) -> EvalError {
    EvalError::TypeMismatch {
        op,
        operands: format!("{} and {}", left.type_name(), right.type_name()),
    }
}

#[cold]
pub fn unary_type_mismatch(op: &'static str, operand: &Value) -> EvalError {
    EvalError::TypeMismatch {
        op,
        operands: operand.type_name().to_owned(),
    }
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::DivisionByZero
}

#[cold]
pub fn integer_overflow(op: &'static str) -> EvalError {
    EvalError::IntegerOverflow { op }
}
