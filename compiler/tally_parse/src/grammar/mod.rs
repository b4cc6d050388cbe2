//! Grammar rules, as `impl Parser` blocks.
//!
//! - `expr.rs`: the binary precedence cascade and factors (literals,
//!   identifiers, calls, grouping, prefix operators)
//! - `stmt.rs`: statements, blocks, and the top-level program

mod expr;
mod stmt;
