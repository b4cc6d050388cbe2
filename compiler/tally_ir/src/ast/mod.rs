//! AST node types.
//!
//! Every syntactic form, statements included, is an [`ExprKind`] variant so a
//! program is one homogeneous tree in the arena.

mod expr;
mod operators;

pub use expr::{Expr, ExprKind};
pub use operators::{BinaryOp, UnaryOp};
