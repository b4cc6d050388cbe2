//! Tally IR - shared data structures for the interpreter pipeline.
//!
//! - Spans for source positions
//! - Names for interned identifiers
//! - Tokens and `TokenList` for scanner output
//! - AST nodes (`Expr`, `ExprKind`) stored flat in an `ExprArena`
//!
//! # Design
//!
//! - **Intern identifiers**: strings become `Name(u32)`, compared in O(1).
//! - **Flatten the tree**: no `Box<Expr>`; children are `ExprId` indices and
//!   statement/argument lists are `ExprRange`s into the arena.
//!
//! Floats are stored as their `u64` bit pattern so every node is `Eq + Hash`.

mod arena;
pub mod ast;
mod expr_id;
mod interner;
mod name;
mod span;
mod token;

pub use arena::ExprArena;
pub use ast::{BinaryOp, Expr, ExprKind, UnaryOp};
pub use expr_id::{ExprId, ExprRange};
pub use interner::{SharedInterner, StringInterner};
pub use name::Name;
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenList};
